use num_complex::Complex64;
use num_traits::Zero;

use super::polynomial::Polynomial;
use super::polynomial_q::validate_variables;
use crate::functions::numeric::complex_to_expr;
use crate::syntax::{string_to_expr, BinaryOperator, Expr, UnaryOperator};
use crate::PolyError;

// ─── Expansion ──────────────────────────────────────────────────────

impl Polynomial {
  /// Expand `expr` into canonical form over the ordered variable list.
  ///
  /// Fails with `InvalidPolynomial` when `expr` mentions a symbol outside
  /// `vars`, uses a negative or fractional exponent on a variable, divides by
  /// something that is not a non-zero constant, or contains a function call
  /// or list.
  pub fn from_expr<S: AsRef<str>>(
    expr: &Expr,
    vars: &[S],
  ) -> Result<Self, PolyError> {
    let vars = validate_variables(vars)?;
    expand_expr(expr, &vars)
  }

  /// Parse `input` and expand it over `vars`.
  pub fn parse<S: AsRef<str>>(input: &str, vars: &[S]) -> Result<Self, PolyError> {
    let expr = string_to_expr(input)?;
    Self::from_expr(&expr, vars)
  }
}

fn invalid(reason: impl Into<String>) -> PolyError {
  PolyError::InvalidPolynomial(reason.into())
}

/// Recursive expansion over already validated variables.
pub fn expand_expr(expr: &Expr, vars: &[String]) -> Result<Polynomial, PolyError> {
  match expr {
    Expr::Integer(n) => Ok(Polynomial::constant(
      vars.to_vec(),
      Complex64::new(*n as f64, 0.0),
    )),
    Expr::Real(x) => {
      Ok(Polynomial::constant(vars.to_vec(), Complex64::new(*x, 0.0)))
    }
    Expr::Constant(name) if name == "I" => {
      Ok(Polynomial::constant(vars.to_vec(), Complex64::i()))
    }
    Expr::Constant(name) => Err(invalid(format!("unknown constant {name}"))),
    Expr::Identifier(name) => match vars.iter().position(|v| v == name) {
      Some(index) => Ok(Polynomial::variable(vars.to_vec(), index)),
      None => Err(invalid(format!(
        "{name} is not one of the variables {{{}}}",
        vars.join(", ")
      ))),
    },
    Expr::List(_) => Err(invalid("a list is not a polynomial")),
    Expr::FunctionCall { name, .. } => {
      Err(invalid(format!("{name}[...] is not a polynomial")))
    }
    Expr::UnaryOp {
      op: UnaryOperator::Minus,
      operand,
    } => Ok(expand_expr(operand, vars)?.neg()),
    Expr::BinaryOp { op, left, right } => {
      let lhs = expand_expr(left, vars)?;
      match op {
        BinaryOperator::Plus => Ok(lhs.add(&expand_expr(right, vars)?)),
        BinaryOperator::Minus => Ok(lhs.sub(&expand_expr(right, vars)?)),
        BinaryOperator::Times => lhs.mul(&expand_expr(right, vars)?),
        BinaryOperator::Divide => {
          let divisor = expand_expr(right, vars)?;
          match divisor.constant_value() {
            Some(c) if c.is_zero() => Err(invalid("division by zero")),
            Some(c) => Ok(lhs.scale(c.inv())),
            None => Err(invalid(format!(
              "division by {right} which depends on the variables"
            ))),
          }
        }
        BinaryOperator::Power => expand_power(lhs, right, vars),
      }
    }
  }
}

fn expand_power(
  base: Polynomial,
  exponent: &Expr,
  vars: &[String],
) -> Result<Polynomial, PolyError> {
  let exponent = expand_expr(exponent, vars)?
    .constant_value()
    .ok_or_else(|| {
      invalid(format!("exponent {exponent} depends on the variables"))
    })?;

  // Constant bases only need the number, so any exponent is fine.
  if let Some(value) = base.constant_value() {
    if value.is_zero() && exponent.re < 0.0 {
      return Err(invalid("division by zero"));
    }
    let folded = match integral_exponent(exponent) {
      Some(n) => value.powi(n),
      None => value.powc(exponent),
    };
    return Ok(Polynomial::constant(base.vars().to_vec(), folded));
  }

  let shown = complex_to_expr(exponent);
  if !is_integral(exponent) {
    return Err(invalid(format!("exponent {shown} is not an integer")));
  }
  if exponent.re < 0.0 {
    return Err(invalid(format!("negative exponent {shown}")));
  }
  if exponent.re > u32::MAX as f64 {
    return Err(invalid(format!("exponent {shown} is out of range")));
  }
  base.pow(exponent.re as u32)
}

fn is_integral(z: Complex64) -> bool {
  z.im == 0.0 && z.re.is_finite() && z.re.fract() == 0.0
}

/// Exponent usable with `powi`.
fn integral_exponent(z: Complex64) -> Option<i32> {
  let in_range = z.re.abs() <= i32::MAX as f64;
  (is_integral(z) && in_range).then_some(z.re as i32)
}
