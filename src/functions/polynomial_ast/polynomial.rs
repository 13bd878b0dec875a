use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::functions::numeric::{complex_to_expr, real_to_expr};
use crate::syntax::{expr_to_string, BinaryOperator, Expr};
use crate::PolyError;

/// Exponent vector aligned with a polynomial's variable list.
pub type Monomial = Vec<u32>;

/// Polynomial in canonical sparse form.
///
/// Invariants: every monomial has one exponent per variable and no stored
/// coefficient is zero. Two polynomials are equal when they share the
/// variable list and the same (monomial, coefficient) pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
  vars: Vec<String>,
  terms: BTreeMap<Monomial, Complex64>,
}

impl Polynomial {
  pub fn zero(vars: Vec<String>) -> Self {
    Self {
      vars,
      terms: BTreeMap::new(),
    }
  }

  pub fn constant(vars: Vec<String>, value: Complex64) -> Self {
    let mut poly = Self::zero(vars);
    let unit = vec![0; poly.vars.len()];
    poly.accumulate(unit, value);
    poly
  }

  /// The polynomial `vars[index]`.
  pub fn variable(vars: Vec<String>, index: usize) -> Self {
    let mut poly = Self::zero(vars);
    let mut monomial = vec![0; poly.vars.len()];
    monomial[index] = 1;
    poly.accumulate(monomial, Complex64::one());
    poly
  }

  /// Sum of `coefficient * monomial` pairs; repeated monomials add up.
  ///
  /// Fails with `InvalidPolynomial` when a monomial's exponent sum does not
  /// fit in a `u32`.
  pub fn from_terms(
    vars: Vec<String>,
    terms: impl IntoIterator<Item = (Monomial, Complex64)>,
  ) -> Result<Self, PolyError> {
    let mut poly = Self::zero(vars);
    for (monomial, coefficient) in terms {
      if monomial.len() != poly.vars.len() {
        return Err(PolyError::DimensionMismatch {
          expected: poly.vars.len(),
          found: monomial.len(),
        });
      }
      monomial_degree(&monomial).ok_or_else(exponent_overflow)?;
      poly.accumulate(monomial, coefficient);
    }
    Ok(poly)
  }

  fn accumulate(&mut self, monomial: Monomial, coefficient: Complex64) {
    if coefficient.is_zero() {
      return;
    }
    match self.terms.entry(monomial) {
      Entry::Vacant(slot) => {
        slot.insert(coefficient);
      }
      Entry::Occupied(mut slot) => {
        *slot.get_mut() += coefficient;
        if slot.get().is_zero() {
          slot.remove();
        }
      }
    }
  }

  pub fn vars(&self) -> &[String] {
    &self.vars
  }

  /// Terms in descending lexicographic monomial order.
  pub fn terms(&self) -> impl Iterator<Item = (&[u32], Complex64)> + '_ {
    self.terms.iter().rev().map(|(m, c)| (m.as_slice(), *c))
  }

  /// Number of non-zero terms.
  pub fn len(&self) -> usize {
    self.terms.len()
  }

  pub fn is_zero(&self) -> bool {
    self.terms.is_empty()
  }

  /// Largest exponent sum over all terms; 0 for the zero polynomial.
  pub fn total_degree(&self) -> u32 {
    // Stored monomials always have a degree that fits.
    self
      .terms
      .keys()
      .map(|m| monomial_degree(m).unwrap_or(u32::MAX))
      .max()
      .unwrap_or(0)
  }

  /// Coefficient of `x1^e1 * ... * xn^en`, zero when absent.
  pub fn coeff_monomial(&self, exponents: &[u32]) -> Complex64 {
    self
      .terms
      .get(exponents)
      .copied()
      .unwrap_or_else(Complex64::zero)
  }

  /// The value of a polynomial without variable terms.
  pub fn constant_value(&self) -> Option<Complex64> {
    match self.terms.len() {
      0 => Some(Complex64::zero()),
      1 => self
        .terms
        .iter()
        .next()
        .filter(|(m, _)| m.iter().all(|&e| e == 0))
        .map(|(_, c)| *c),
      _ => None,
    }
  }

  pub(crate) fn neg(&self) -> Self {
    self.scale(-Complex64::one())
  }

  pub(crate) fn scale(&self, factor: Complex64) -> Self {
    let mut result = Self::zero(self.vars.clone());
    for (m, c) in &self.terms {
      result.accumulate(m.clone(), c * factor);
    }
    result
  }

  pub(crate) fn add(&self, other: &Self) -> Self {
    let mut result = self.clone();
    for (m, c) in &other.terms {
      result.accumulate(m.clone(), *c);
    }
    result
  }

  pub(crate) fn sub(&self, other: &Self) -> Self {
    self.add(&other.neg())
  }

  pub(crate) fn mul(&self, other: &Self) -> Result<Self, PolyError> {
    let mut result = Self::zero(self.vars.clone());
    for (ma, ca) in &self.terms {
      for (mb, cb) in &other.terms {
        let monomial = ma
          .iter()
          .zip(mb)
          .map(|(a, b)| a.checked_add(*b))
          .collect::<Option<Monomial>>()
          .filter(|m| monomial_degree(m).is_some())
          .ok_or_else(exponent_overflow)?;
        result.accumulate(monomial, ca * cb);
      }
    }
    Ok(result)
  }

  /// Repeated squaring; `p^0` is 1 even for the zero polynomial.
  pub(crate) fn pow(&self, mut exponent: u32) -> Result<Self, PolyError> {
    let mut result = Self::constant(self.vars.clone(), Complex64::one());
    let mut base = self.clone();
    while exponent > 0 {
      if exponent & 1 == 1 {
        result = result.mul(&base)?;
      }
      exponent >>= 1;
      if exponent > 0 {
        base = base.mul(&base)?;
      }
    }
    Ok(result)
  }

  fn monomial_expr(&self, monomial: &[u32]) -> Option<Expr> {
    self
      .vars
      .iter()
      .zip(monomial)
      .filter(|&(_, &e)| e > 0)
      .map(|(name, &e)| {
        let var = Expr::identifier(name.as_str());
        if e == 1 {
          var
        } else {
          Expr::binary(BinaryOperator::Power, var, Expr::Integer(e as i128))
        }
      })
      .reduce(|acc, factor| Expr::binary(BinaryOperator::Times, acc, factor))
  }

  fn term_expr(&self, monomial: &[u32], coefficient: Complex64) -> Expr {
    if leads_negative(coefficient) {
      return Expr::negate(self.term_expr(monomial, -coefficient));
    }
    match self.monomial_expr(monomial) {
      None => complex_to_expr(coefficient),
      Some(m) if coefficient.is_one() => m,
      Some(m) if coefficient.im == 0.0 => {
        Expr::binary(BinaryOperator::Times, real_to_expr(coefficient.re), m)
      }
      Some(m) => {
        Expr::binary(BinaryOperator::Times, complex_to_expr(coefficient), m)
      }
    }
  }

  /// Expanded sum, highest lexicographic term first.
  pub fn to_expr(&self) -> Expr {
    self
      .terms()
      .map(|(m, c)| self.term_expr(m, c))
      .reduce(|acc, term| match term {
        Expr::UnaryOp { operand, .. } => Expr::BinaryOp {
          op: BinaryOperator::Minus,
          left: Box::new(acc),
          right: operand,
        },
        term => Expr::binary(BinaryOperator::Plus, acc, term),
      })
      .unwrap_or(Expr::Integer(0))
  }
}

/// Exponent sum, or `None` when it does not fit in a `u32`.
fn monomial_degree(monomial: &[u32]) -> Option<u32> {
  monomial.iter().try_fold(0u32, |acc, &e| acc.checked_add(e))
}

fn exponent_overflow() -> PolyError {
  PolyError::InvalidPolynomial("exponent overflow".to_string())
}

fn leads_negative(z: Complex64) -> bool {
  z.re < 0.0 || (z.re == 0.0 && z.im < 0.0)
}

impl std::fmt::Display for Polynomial {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&expr_to_string(&self.to_expr()))
  }
}
