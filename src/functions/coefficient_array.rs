//! Dense row-major n-dimensional coefficient storage.

use num_complex::Complex64;

use crate::functions::numeric::{is_nearly_real, numeric_value, Scalar};
use crate::functions::polynomial_ast::{evaluate, Polynomial};
use crate::syntax::Expr;
use crate::PolyError;

/// Dense rectangular array, one axis per variable.
///
/// Entries are stored row-major: the last axis varies fastest.
#[derive(Debug, Clone, PartialEq)]
pub struct CoeffArray<T> {
  shape: Vec<usize>,
  data: Vec<T>,
}

impl<T: Scalar> CoeffArray<T> {
  pub fn new(shape: Vec<usize>, data: Vec<T>) -> Result<Self, PolyError> {
    let expected: usize = shape.iter().product();
    if data.len() != expected {
      return Err(PolyError::InvalidArray(format!(
        "shape {:?} needs {} entries, got {}",
        shape,
        expected,
        data.len()
      )));
    }
    Ok(Self { shape, data })
  }

  pub fn zeros(shape: Vec<usize>) -> Self {
    let len = shape.iter().product();
    Self {
      shape,
      data: vec![T::zero(); len],
    }
  }

  /// Zero array with `ndim` axes of length `side`.
  pub fn cubic(ndim: usize, side: usize) -> Self {
    Self::zeros(vec![side; ndim])
  }

  pub fn shape(&self) -> &[usize] {
    &self.shape
  }

  pub fn ndim(&self) -> usize {
    self.shape.len()
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  pub fn is_cubic(&self) -> bool {
    self.shape.windows(2).all(|w| w[0] == w[1])
  }

  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  fn offset(&self, index: &[usize]) -> Option<usize> {
    if index.len() != self.shape.len() {
      return None;
    }
    let mut offset = 0;
    for (&i, &n) in index.iter().zip(&self.shape) {
      if i >= n {
        return None;
      }
      offset = offset * n + i;
    }
    Some(offset)
  }

  pub fn get(&self, index: &[usize]) -> Option<T> {
    self.offset(index).map(|o| self.data[o])
  }

  pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut T> {
    let offset = self.offset(index)?;
    self.data.get_mut(offset)
  }

  pub fn set(&mut self, index: &[usize], value: T) -> Result<(), PolyError> {
    let shape = self.shape.clone();
    let slot = self.get_mut(index).ok_or_else(|| {
      PolyError::InvalidArray(format!(
        "index {:?} is out of bounds for shape {:?}",
        index, shape
      ))
    })?;
    *slot = value;
    Ok(())
  }

  /// Every multi-index of the array, in storage order.
  pub fn indices(&self) -> MultiIndices {
    MultiIndices::new(&self.shape)
  }

  pub fn iter_indexed(&self) -> impl Iterator<Item = (Vec<usize>, T)> + '_ {
    self.indices().zip(self.data.iter().copied())
  }

  pub fn iter_indexed_mut(
    &mut self,
  ) -> impl Iterator<Item = (Vec<usize>, &mut T)> + '_ {
    MultiIndices::new(&self.shape).zip(self.data.iter_mut())
  }

  pub fn map<U: Scalar>(&self, f: impl Fn(T) -> U) -> CoeffArray<U> {
    CoeffArray {
      shape: self.shape.clone(),
      data: self.data.iter().copied().map(f).collect(),
    }
  }

  /// Nested list form, e.g. `{{1, 0}, {2, 0}}`. A 0-axis array is its
  /// single entry.
  pub fn to_expr(&self) -> Expr {
    fn nest<U: Scalar>(shape: &[usize], data: &[U]) -> Expr {
      match shape.split_first() {
        None => data.first().copied().unwrap_or_else(U::zero).to_expr(),
        Some((&n, rest)) => {
          let stride: usize = rest.iter().product();
          let items = (0..n)
            .map(|i| nest(rest, &data[i * stride..(i + 1) * stride]))
            .collect();
          Expr::List(items)
        }
      }
    }
    nest(&self.shape, &self.data)
  }
}

impl CoeffArray<f64> {
  pub fn into_complex(self) -> CoeffArray<Complex64> {
    self.map(Scalar::to_complex)
  }
}

impl CoeffArray<Complex64> {
  /// Read a nested list of numeric entries such as `{{1, 2 I}, {0, 3}}`.
  pub fn from_expr(expr: &Expr) -> Result<Self, PolyError> {
    let mut shape = Vec::new();
    let mut probe = expr;
    while let Expr::List(items) = probe {
      shape.push(items.len());
      match items.first() {
        Some(first) => probe = first,
        None => break,
      }
    }
    let mut data = Vec::with_capacity(shape.iter().product());
    collect_entries(expr, &shape, 0, &mut data)?;
    Self::new(shape, data)
  }

  /// Drop imaginary parts within `tol` machine epsilons of zero. The result
  /// is real when every entry was.
  pub fn real_if_close(mut self, tol: f64) -> Coefficients {
    let mut all_real = true;
    for z in self.data.iter_mut() {
      if is_nearly_real(*z, tol) {
        z.im = 0.0;
      } else {
        all_real = false;
      }
    }
    if all_real {
      Coefficients::Real(self.map(|z| z.re))
    } else {
      Coefficients::Complex(self)
    }
  }
}

fn collect_entries(
  expr: &Expr,
  shape: &[usize],
  depth: usize,
  data: &mut Vec<Complex64>,
) -> Result<(), PolyError> {
  match expr {
    Expr::List(items) => {
      if depth >= shape.len() || items.len() != shape[depth] {
        return Err(PolyError::InvalidArray(format!(
          "ragged nesting at depth {depth}"
        )));
      }
      for item in items {
        collect_entries(item, shape, depth + 1, data)?;
      }
      Ok(())
    }
    entry => {
      if depth != shape.len() {
        return Err(PolyError::InvalidArray(format!(
          "ragged nesting at depth {depth}"
        )));
      }
      let value = numeric_value(entry).map_err(|_| {
        PolyError::InvalidArray(format!("entry {entry} is not a number"))
      })?;
      data.push(value);
      Ok(())
    }
  }
}

/// Row-major odometer over all multi-indices of a shape.
#[derive(Debug, Clone)]
pub struct MultiIndices {
  shape: Vec<usize>,
  next: Option<Vec<usize>>,
}

impl MultiIndices {
  pub fn new(shape: &[usize]) -> Self {
    let next = if shape.contains(&0) {
      None
    } else {
      Some(vec![0; shape.len()])
    };
    Self {
      shape: shape.to_vec(),
      next,
    }
  }
}

impl Iterator for MultiIndices {
  type Item = Vec<usize>;

  fn next(&mut self) -> Option<Vec<usize>> {
    let current = self.next.take()?;
    let mut successor = current.clone();
    for axis in (0..successor.len()).rev() {
      successor[axis] += 1;
      if successor[axis] < self.shape[axis] {
        self.next = Some(successor);
        return Some(current);
      }
      successor[axis] = 0;
    }
    Some(current)
  }
}

/// Output of a polynomial-to-array conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Coefficients {
  Real(CoeffArray<f64>),
  Complex(CoeffArray<Complex64>),
}

impl Coefficients {
  pub fn shape(&self) -> &[usize] {
    match self {
      Coefficients::Real(a) => a.shape(),
      Coefficients::Complex(a) => a.shape(),
    }
  }

  pub fn ndim(&self) -> usize {
    self.shape().len()
  }

  pub fn is_real(&self) -> bool {
    matches!(self, Coefficients::Real(_))
  }

  pub fn as_real(&self) -> Option<&CoeffArray<f64>> {
    match self {
      Coefficients::Real(a) => Some(a),
      Coefficients::Complex(_) => None,
    }
  }

  pub fn as_complex(&self) -> Option<&CoeffArray<Complex64>> {
    match self {
      Coefficients::Real(_) => None,
      Coefficients::Complex(a) => Some(a),
    }
  }

  pub fn get(&self, index: &[usize]) -> Option<Complex64> {
    match self {
      Coefficients::Real(a) => a.get(index).map(Scalar::to_complex),
      Coefficients::Complex(a) => a.get(index),
    }
  }

  pub fn into_complex(self) -> CoeffArray<Complex64> {
    match self {
      Coefficients::Real(a) => a.into_complex(),
      Coefficients::Complex(a) => a,
    }
  }

  pub fn evaluate(&self, point: &[Complex64]) -> Result<Complex64, PolyError> {
    match self {
      Coefficients::Real(a) => evaluate(point, &a.map(Scalar::to_complex)),
      Coefficients::Complex(a) => evaluate(point, a),
    }
  }

  pub fn to_polynomial<S: AsRef<str>>(
    &self,
    vars: &[S],
  ) -> Result<Polynomial, PolyError> {
    match self {
      Coefficients::Real(a) => crate::array_to_poly(a, vars),
      Coefficients::Complex(a) => crate::array_to_poly(a, vars),
    }
  }

  pub fn to_expr(&self) -> Expr {
    match self {
      Coefficients::Real(a) => a.to_expr(),
      Coefficients::Complex(a) => a.to_expr(),
    }
  }
}
