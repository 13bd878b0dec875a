use crate::functions::coefficient_array::CoeffArray;
use crate::functions::numeric::Scalar;
use crate::PolyError;

// ─── PolyVal ────────────────────────────────────────────────────────

/// Evaluate a coefficient array at `point`.
///
/// Axis 0 is read as a polynomial in `point[0]` whose coefficients are the
/// sub-arrays over the remaining axes. Horner's rule folds it away, leaving
/// an array with one axis fewer, and the next coordinate is applied until a
/// scalar remains. Index 0 along an axis is the constant term.
#[tracing::instrument(skip_all, name = "PolyVal")]
pub fn evaluate<T: Scalar>(
  point: &[T],
  coefficients: &CoeffArray<T>,
) -> Result<T, PolyError> {
  if point.len() != coefficients.ndim() {
    return Err(PolyError::DimensionMismatch {
      expected: coefficients.ndim(),
      found: point.len(),
    });
  }

  let mut shape = coefficients.shape().to_vec();
  let mut values = coefficients.as_slice().to_vec();
  for &x in point {
    let length = shape.remove(0);
    let stride: usize = shape.iter().product();
    values = horner_leading_axis(&values, length, stride, x);
  }
  Ok(values.first().copied().unwrap_or_else(T::zero))
}

/// `Σ_i values[i] * x^i` where each `values[i]` is a block of `stride`
/// entries; the result is one block.
fn horner_leading_axis<T: Scalar>(
  values: &[T],
  length: usize,
  stride: usize,
  x: T,
) -> Vec<T> {
  let mut acc = vec![T::zero(); stride];
  for i in (0..length).rev() {
    let block = &values[i * stride..(i + 1) * stride];
    for (a, &c) in acc.iter_mut().zip(block) {
      *a = *a * x + c;
    }
  }
  acc
}
