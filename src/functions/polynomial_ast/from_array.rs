use num_traits::Zero;

use super::polynomial::{Monomial, Polynomial};
use super::polynomial_q::validate_variables;
use crate::functions::coefficient_array::CoeffArray;
use crate::functions::numeric::Scalar;
use crate::PolyError;

// ─── ArrayToPoly ────────────────────────────────────────────────────

/// Rebuild `Σ c[i1, ..., in] * x1^i1 * ... * xn^in` from a dense array.
///
/// Any rectangular shape is accepted. Zero entries are skipped since they
/// do not change the sum.
#[tracing::instrument(skip_all, name = "ArrayToPoly")]
pub fn array_to_poly<T: Scalar, S: AsRef<str>>(
  coefficients: &CoeffArray<T>,
  vars: &[S],
) -> Result<Polynomial, PolyError> {
  let vars = validate_variables(vars)?;
  if vars.len() != coefficients.ndim() {
    return Err(PolyError::DimensionMismatch {
      expected: coefficients.ndim(),
      found: vars.len(),
    });
  }
  tracing::debug!(shape = ?coefficients.shape(), "collecting terms");
  let terms = coefficients
    .iter_indexed()
    .filter(|(_, c)| !c.is_zero())
    .map(|(index, c)| {
      let monomial: Monomial = index.into_iter().map(|i| i as u32).collect();
      (monomial, c.to_complex())
    });
  Polynomial::from_terms(vars, terms)
}
