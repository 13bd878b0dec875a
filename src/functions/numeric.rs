use std::ops::{Add, Mul};

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::functions::polynomial_ast::Polynomial;
use crate::syntax::{BinaryOperator, Expr};
use crate::PolyError;

/// Default near-real tolerance, in multiples of `f64::EPSILON`.
pub const REAL_TOLERANCE: f64 = 100.0;

/// Element type of a coefficient array or evaluation point.
pub trait Scalar:
  Copy
  + PartialEq
  + std::fmt::Debug
  + Zero
  + One
  + Add<Output = Self>
  + Mul<Output = Self>
{
  fn to_complex(self) -> Complex64;

  fn to_expr(self) -> Expr;
}

impl Scalar for f64 {
  fn to_complex(self) -> Complex64 {
    Complex64::new(self, 0.0)
  }

  fn to_expr(self) -> Expr {
    real_to_expr(self)
  }
}

impl Scalar for Complex64 {
  fn to_complex(self) -> Complex64 {
    self
  }

  fn to_expr(self) -> Expr {
    complex_to_expr(self)
  }
}

/// Whole numbers become `Integer`, everything else `Real`.
pub fn real_to_expr(x: f64) -> Expr {
  if x.fract() == 0.0 && x.abs() < 1e15 {
    Expr::Integer(x as i128)
  } else {
    Expr::Real(x)
  }
}

/// `a + b*I` with the zero parts left out.
pub fn complex_to_expr(z: Complex64) -> Expr {
  if z.im == 0.0 {
    return real_to_expr(z.re);
  }
  let imaginary = |im: f64| {
    let unit = Expr::Constant("I".to_string());
    if im == 1.0 {
      unit
    } else {
      Expr::binary(BinaryOperator::Times, real_to_expr(im), unit)
    }
  };
  let im_part = if z.im < 0.0 {
    Expr::negate(imaginary(-z.im))
  } else {
    imaginary(z.im)
  };
  if z.re == 0.0 {
    im_part
  } else {
    Expr::binary(BinaryOperator::Plus, real_to_expr(z.re), im_part)
  }
}

/// True when the imaginary part is within `tol` machine epsilons of zero.
pub fn is_nearly_real(z: Complex64, tol: f64) -> bool {
  z.im.abs() < tol * f64::EPSILON
}

/// Fold a constant expression such as `-3`, `1/4` or `2 - 3I` to a number.
pub fn numeric_value(expr: &Expr) -> Result<Complex64, PolyError> {
  let constant = Polynomial::from_expr(expr, &[] as &[&str])?;
  constant.constant_value().ok_or_else(|| {
    PolyError::InvalidPolynomial(format!("{expr} is not a number"))
  })
}
