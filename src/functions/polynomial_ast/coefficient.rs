use num_complex::Complex64;

use super::polynomial::Polynomial;
use crate::functions::coefficient_array::{CoeffArray, Coefficients};
use crate::functions::numeric::REAL_TOLERANCE;
use crate::syntax::{string_to_expr, Expr};
use crate::PolyError;

// ─── PolyToArray ────────────────────────────────────────────────────

/// Dense coefficient array of `expr` over the ordered variables.
///
/// Every axis has length `D + 1` where `D` is the total degree, so the
/// array is cubic even when single variables have lower degree. Entry
/// `[i1, ..., in]` holds the coefficient of `x1^i1 * ... * xn^in`.
///
/// Coefficients whose imaginary part is within `REAL_TOLERANCE` machine
/// epsilons of zero are returned as reals.
pub fn poly_to_array<S: AsRef<str>>(
  expr: &Expr,
  vars: &[S],
) -> Result<Coefficients, PolyError> {
  poly_to_array_with_tolerance(expr, vars, REAL_TOLERANCE)
}

/// Like [`poly_to_array`] with an explicit near-real tolerance, in
/// multiples of `f64::EPSILON`.
#[tracing::instrument(skip_all, name = "PolyToArray")]
pub fn poly_to_array_with_tolerance<S: AsRef<str>>(
  expr: &Expr,
  vars: &[S],
  tol: f64,
) -> Result<Coefficients, PolyError> {
  let poly = Polynomial::from_expr(expr, vars)?;
  Ok(poly.to_array_with_tolerance(tol))
}

/// Parse `input` and convert it with [`poly_to_array`].
pub fn poly_to_array_str<S: AsRef<str>>(
  input: &str,
  vars: &[S],
) -> Result<Coefficients, PolyError> {
  let expr = string_to_expr(input)?;
  poly_to_array(&expr, vars)
}

impl Polynomial {
  pub fn to_array(&self) -> Coefficients {
    self.to_array_with_tolerance(REAL_TOLERANCE)
  }

  pub fn to_array_with_tolerance(&self, tol: f64) -> Coefficients {
    self.to_complex_array().real_if_close(tol)
  }

  /// Fill every slot of the `(D + 1)^n` cube by monomial lookup.
  ///
  /// This walks all exponent tuples, not just the stored terms, so cost
  /// grows with the cube rather than with the number of terms.
  pub fn to_complex_array(&self) -> CoeffArray<Complex64> {
    let side = self.total_degree() as usize + 1;
    tracing::debug!(
      degree = side - 1,
      nvars = self.vars().len(),
      terms = self.len(),
      "allocating dense coefficient array"
    );
    let mut array = CoeffArray::cubic(self.vars().len(), side);
    for (index, slot) in array.iter_indexed_mut() {
      let exponents: Vec<u32> = index.iter().map(|&i| i as u32).collect();
      *slot = self.coeff_monomial(&exponents);
    }
    array
  }
}
