use super::*;

const XYZ_ARRAY: &str = "{{{0, 0, 0, 1}, {0, 0, 0, 0}, {3, 0, 0, 0}, {0, 0, 0, 0}}, \
{{0, 0, 0, 0}, {2, 0, 0, 0}, {0, 0, 0, 0}, {0, 0, 0, 0}}, \
{{5, 0, 0, 0}, {0, 0, 0, 0}, {0, 0, 0, 0}, {0, 0, 0, 0}}, \
{{0, 0, 0, 0}, {0, 0, 0, 0}, {0, 0, 0, 0}, {0, 0, 0, 0}}}";

mod poly_to_array {
  use super::*;

  #[test]
  fn three_variables() {
    assert_eq!(
      interpret("PolyToArray[5*x^2 + 2*x*y + 3*y^2 + z^3, {x, y, z}]")
        .unwrap(),
      XYZ_ARRAY
    );
  }

  #[test]
  fn term_order_does_not_matter() {
    assert_eq!(
      interpret("PolyToArray[z^3 + 3y^2 + 2y x + 5x^2, {x, y, z}]").unwrap(),
      XYZ_ARRAY
    );
  }

  #[test]
  fn univariate() {
    assert_eq!(
      interpret("PolyToArray[x^2 - 3x + 2, {x}]").unwrap(),
      "{2, -3, 1}"
    );
    assert_eq!(interpret("PolyToArray[x^2 - 3x + 2, x]").unwrap(), "{2, -3, 1}");
  }

  #[test]
  fn array_is_sized_by_total_degree() {
    assert_eq!(
      interpret("PolyToArray[x*y, {x, y}]").unwrap(),
      "{{0, 0, 0}, {0, 1, 0}, {0, 0, 0}}"
    );
  }

  #[test]
  fn unused_variable_keeps_its_axis() {
    assert_eq!(
      interpret("PolyToArray[x + 1, {x, y}]").unwrap(),
      "{{1, 0}, {1, 0}}"
    );
  }

  #[test]
  fn expands_products_and_powers() {
    assert_eq!(
      interpret("PolyToArray[(x + 1)^3, {x}]").unwrap(),
      "{1, 3, 3, 1}"
    );
    assert_eq!(
      interpret("PolyToArray[(x - y)(x + y), {x, y}]").unwrap(),
      "{{0, 0, -1}, {0, 0, 0}, {1, 0, 0}}"
    );
  }

  #[test]
  fn division_by_constant() {
    assert_eq!(interpret("PolyToArray[x/2 + 1, {x}]").unwrap(), "{1, 0.5}");
  }

  #[test]
  fn zero_polynomial() {
    assert_eq!(interpret("PolyToArray[0, {x, y}]").unwrap(), "{{0}}");
    assert_eq!(interpret("PolyToArray[x - x, {x}]").unwrap(), "{0}");
  }

  #[test]
  fn complex_coefficients_are_kept() {
    assert_eq!(
      interpret("PolyToArray[x^2 + I*x, {x}]").unwrap(),
      "{0, I, 1}"
    );
  }

  #[test]
  fn real_results_of_complex_arithmetic() {
    assert_eq!(
      interpret("PolyToArray[(1 + I)*(1 - I)*x, {x}]").unwrap(),
      "{0, 2}"
    );
  }

  #[test]
  fn unlisted_variable() {
    assert!(matches!(
      interpret("PolyToArray[x + y, {x}]"),
      Err(PolyError::InvalidPolynomial(_))
    ));
  }

  #[test]
  fn negative_exponent() {
    assert!(matches!(
      interpret("PolyToArray[x^-1 + 1, {x}]"),
      Err(PolyError::InvalidPolynomial(_))
    ));
  }

  #[test]
  fn fractional_exponent() {
    assert!(matches!(
      interpret("PolyToArray[x^(1/2), {x}]"),
      Err(PolyError::InvalidPolynomial(_))
    ));
  }

  #[test]
  fn division_by_variable() {
    assert!(matches!(
      interpret("PolyToArray[1/x, {x}]"),
      Err(PolyError::InvalidPolynomial(_))
    ));
  }

  #[test]
  fn function_of_variable() {
    assert!(matches!(
      interpret("PolyToArray[Sin[x], {x}]"),
      Err(PolyError::InvalidPolynomial(_))
    ));
  }

  #[test]
  fn exponent_overflow() {
    let product = "x^2147483647 * x^2147483647 * x^2";
    match interpret(&format!("PolyToArray[{product}, {{x}}]")) {
      Err(PolyError::InvalidPolynomial(reason)) => {
        assert_eq!(reason, "exponent overflow")
      }
      other => panic!("Expected an exponent overflow, got {other:?}"),
    }
    assert_eq!(
      interpret(&format!("PolynomialQ[{product}, x]")).unwrap(),
      "False"
    );
    assert_eq!(interpret(product).unwrap(), "x^2147483647*x^2147483647*x^2");
  }

  #[test]
  fn total_degree_overflow() {
    match interpret("PolyToArray[x^4294967295 * y, {x, y}]") {
      Err(PolyError::InvalidPolynomial(reason)) => {
        assert_eq!(reason, "exponent overflow")
      }
      other => panic!("Expected an exponent overflow, got {other:?}"),
    }
  }

  #[test]
  fn exponent_out_of_range() {
    match interpret("PolyToArray[x^5000000000, {x}]") {
      Err(PolyError::InvalidPolynomial(reason)) => {
        assert_eq!(reason, "exponent 5000000000 is out of range")
      }
      other => panic!("Expected an out of range exponent, got {other:?}"),
    }
  }

  #[test]
  fn duplicate_variables() {
    assert!(matches!(
      interpret("PolyToArray[x, {x, x}]"),
      Err(PolyError::InvalidPolynomial(_))
    ));
  }

  #[test]
  fn wrong_arity() {
    assert!(matches!(
      interpret("PolyToArray[x]"),
      Err(PolyError::EvaluationError(_))
    ));
    assert!(matches!(
      interpret("PolyToArray[x, {1}]"),
      Err(PolyError::EvaluationError(_))
    ));
  }
}

mod array_to_poly {
  use super::*;

  #[test]
  fn three_variables() {
    assert_eq!(
      interpret(&format!("ArrayToPoly[{XYZ_ARRAY}, {{x, y, z}}]")).unwrap(),
      "5*x^2 + 2*x*y + 3*y^2 + z^3"
    );
  }

  #[test]
  fn two_by_two() {
    assert_eq!(
      interpret("ArrayToPoly[{{1, 2}, {3, 4}}, {x, y}]").unwrap(),
      "4*x*y + 3*x + 2*y + 1"
    );
  }

  #[test]
  fn negative_coefficients() {
    assert_eq!(
      interpret("ArrayToPoly[{1, -2, 0, 4}, {t}]").unwrap(),
      "4*t^3 - 2*t + 1"
    );
    assert_eq!(
      interpret("ArrayToPoly[{-1, 0, -1}, {t}]").unwrap(),
      "-t^2 - 1"
    );
  }

  #[test]
  fn complex_coefficients() {
    assert_eq!(
      interpret("ArrayToPoly[{0, 2 I, 1 - I}, {x}]").unwrap(),
      "(1 - I)*x^2 + 2*I*x"
    );
  }

  #[test]
  fn non_cubic_shape() {
    assert_eq!(
      interpret("ArrayToPoly[{{1, 0, 2}, {0, 3, 0}}, {x, y}]").unwrap(),
      "3*x*y + 2*y^2 + 1"
    );
  }

  #[test]
  fn all_zero_array() {
    assert_eq!(interpret("ArrayToPoly[{{0, 0}, {0, 0}}, {x, y}]").unwrap(), "0");
  }

  #[test]
  fn variable_count_must_match_axes() {
    assert!(matches!(
      interpret("ArrayToPoly[{1, 2}, {x, y}]"),
      Err(PolyError::DimensionMismatch {
        expected: 1,
        found: 2
      })
    ));
  }

  #[test]
  fn ragged_array() {
    assert!(matches!(
      interpret("ArrayToPoly[{{1, 2}, {3}}, {x, y}]"),
      Err(PolyError::InvalidArray(_))
    ));
  }

  #[test]
  fn symbolic_entry() {
    assert!(matches!(
      interpret("ArrayToPoly[{1, a}, {x}]"),
      Err(PolyError::InvalidArray(_))
    ));
  }
}

mod round_trip {
  use super::*;

  #[test]
  fn array_of_poly_of_array() {
    assert_eq!(
      interpret("PolyToArray[ArrayToPoly[{{1, 2}, {3, 0}}, {x, y}], {x, y}]")
        .unwrap(),
      "{{1, 2}, {3, 0}}"
    );
  }

  #[test]
  fn poly_of_array_of_poly() {
    assert_eq!(
      interpret(
        "ArrayToPoly[PolyToArray[5x^2 + 2x y + 3y^2 + z^3, {x, y, z}], {x, y, z}]"
      )
      .unwrap(),
      "5*x^2 + 2*x*y + 3*y^2 + z^3"
    );
  }
}
