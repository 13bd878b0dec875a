//! Conversion between symbolic multivariate polynomials and dense
//! coefficient arrays, plus nested Horner evaluation of such arrays.
//!
//! Axis `k` of a coefficient array belongs to the `k`-th variable and the
//! index along that axis is the variable's exponent, so entry
//! `c[i1, ..., in]` is the coefficient of `x1^i1 * ... * xn^in`.
//!
//! ```
//! use polyarray::{array_to_poly, evaluate, poly_to_array_str, Complex64};
//!
//! let coeffs = poly_to_array_str("5x^2 + 2x y + 3y^2", &["x", "y"]).unwrap();
//! assert_eq!(coeffs.shape(), &[3, 3]);
//!
//! let value = coeffs.evaluate(&[Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)]);
//! assert_eq!(value.unwrap(), Complex64::new(21.0, 0.0));
//!
//! let real = coeffs.as_real().unwrap();
//! assert_eq!(evaluate(&[1.0, 2.0], real).unwrap(), 21.0);
//! assert_eq!(array_to_poly(real, &["x", "y"]).unwrap().to_string(), "5*x^2 + 2*x*y + 3*y^2");
//! ```

use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

pub mod evaluator;
pub mod functions;
pub mod syntax;

pub use functions::coefficient_array::{CoeffArray, Coefficients, MultiIndices};
pub use functions::numeric::{numeric_value, Scalar, REAL_TOLERANCE};
pub use functions::polynomial_ast::{
  array_to_poly, evaluate, is_polynomial, poly_to_array, poly_to_array_str,
  poly_to_array_with_tolerance, Monomial, Polynomial,
};
pub use num_complex::Complex64;

#[derive(Parser)]
#[grammar = "polyarray.pest"]
pub struct PolyParser;

#[derive(Error, Debug)]
pub enum PolyError {
  #[error("Parse error: {0}")]
  ParseError(#[from] Box<pest::error::Error<Rule>>),
  #[error("Empty input")]
  EmptyInput,
  #[error("Dimension mismatch: expected {expected} components, got {found}")]
  DimensionMismatch { expected: usize, found: usize },
  #[error("Invalid polynomial: {0}")]
  InvalidPolynomial(String),
  #[error("Invalid array: {0}")]
  InvalidArray(String),
  #[error("Evaluation error: {0}")]
  EvaluationError(String),
}

impl PolyParser {
  pub fn parse_program(
    input: &str,
  ) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>>
  {
    Self::parse(Rule::Program, input).map_err(Box::new)
  }
}

pub fn parse(
  input: &str,
) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>> {
  PolyParser::parse_program(input)
}

/// Parse and evaluate a single expression, returning its printed result.
///
/// Understands `PolyToArray[expr, {vars}]`, `ArrayToPoly[array, {vars}]`,
/// `PolyVal[{point}, array]` and `PolynomialQ[expr, {vars}]`. Any other
/// polynomial is printed in canonical expanded form.
pub fn interpret(input: &str) -> Result<String, PolyError> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(PolyError::EmptyInput);
  }
  let expr = syntax::string_to_expr(trimmed)?;
  let result = evaluator::evaluate_expr_to_expr(&expr)?;
  Ok(syntax::expr_to_string(&result))
}
