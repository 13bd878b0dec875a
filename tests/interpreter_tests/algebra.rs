use super::*;

mod polynomial_q {
  use super::*;

  #[test]
  fn basic_polynomial() {
    assert_eq!(interpret("PolynomialQ[x^2 + 1, x]").unwrap(), "True");
    assert_eq!(interpret("PolynomialQ[x^2 + y, {x, y}]").unwrap(), "True");
  }

  #[test]
  fn constant_is_polynomial() {
    assert_eq!(interpret("PolynomialQ[5, x]").unwrap(), "True");
    assert_eq!(interpret("PolynomialQ[2 - 3 I, {}]").unwrap(), "True");
  }

  #[test]
  fn unlisted_symbol() {
    assert_eq!(interpret("PolynomialQ[x^2 + y, {x}]").unwrap(), "False");
  }

  #[test]
  fn non_polynomial() {
    assert_eq!(interpret("PolynomialQ[Sin[x], x]").unwrap(), "False");
    assert_eq!(interpret("PolynomialQ[1/x, x]").unwrap(), "False");
    assert_eq!(interpret("PolynomialQ[x^(1/2), x]").unwrap(), "False");
    assert_eq!(interpret("PolynomialQ[x^y, {x, y}]").unwrap(), "False");
  }

  #[test]
  fn constant_division_is_allowed() {
    assert_eq!(interpret("PolynomialQ[x/4 + 1, x]").unwrap(), "True");
    assert_eq!(interpret("PolynomialQ[x/0, x]").unwrap(), "False");
  }

  #[test]
  fn repeated_variable() {
    assert_eq!(interpret("PolynomialQ[x, {x, x}]").unwrap(), "False");
  }
}

mod canonical_form {
  use super::*;

  #[test]
  fn expands_squares() {
    assert_eq!(interpret("(x + 1)^2").unwrap(), "x^2 + 2*x + 1");
    assert_eq!(interpret("(x - y)^2").unwrap(), "x^2 - 2*x*y + y^2");
  }

  #[test]
  fn collects_like_terms() {
    assert_eq!(interpret("x y + 2 y x - x").unwrap(), "3*x*y - x");
    assert_eq!(interpret("x y - y x").unwrap(), "0");
  }

  #[test]
  fn folds_constants() {
    assert_eq!(interpret("2^10 - 24").unwrap(), "1000");
    assert_eq!(interpret("1/4").unwrap(), "0.25");
    assert_eq!(interpret("I^2").unwrap(), "-1");
    assert_eq!(interpret("(1 + I)^2").unwrap(), "2*I");
  }

  #[test]
  fn complex_coefficients() {
    assert_eq!(interpret("I x - x").unwrap(), "-(1 - I)*x");
    assert_eq!(interpret("-I x").unwrap(), "-I*x");
  }

  #[test]
  fn lists_are_canonicalized_elementwise() {
    assert_eq!(interpret("{x + x, 3 - 1}").unwrap(), "{2*x, 2}");
  }

  #[test]
  fn non_polynomials_are_returned_unchanged() {
    assert_eq!(interpret("Sin[x]").unwrap(), "Sin[x]");
    assert_eq!(interpret("1/x").unwrap(), "1/x");
  }

  #[test]
  fn empty_input() {
    assert!(matches!(interpret("   "), Err(PolyError::EmptyInput)));
  }
}
