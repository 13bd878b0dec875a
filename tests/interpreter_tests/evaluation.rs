use super::*;

mod poly_val {
  use super::*;

  #[test]
  fn bivariate() {
    assert_eq!(interpret("PolyVal[{1, 2}, {{1, 2}, {3, 4}}]").unwrap(), "16");
  }

  #[test]
  fn univariate_horner() {
    assert_eq!(interpret("PolyVal[{2}, {1, -3, 1}]").unwrap(), "-1");
    assert_eq!(interpret("PolyVal[2, {1, -3, 1}]").unwrap(), "-1");
  }

  #[test]
  fn real_point() {
    assert_eq!(interpret("PolyVal[{0.5}, {0, 0, 4}]").unwrap(), "1");
    assert_eq!(interpret("PolyVal[{0.5}, {0, 1}]").unwrap(), "0.5");
  }

  #[test]
  fn complex_point() {
    assert_eq!(interpret("PolyVal[{I}, {1, 0, 1}]").unwrap(), "0");
    assert_eq!(interpret("PolyVal[{I}, {0, 2}]").unwrap(), "2*I");
    assert_eq!(interpret("PolyVal[{1 + I}, {1, 1}]").unwrap(), "2 + I");
  }

  #[test]
  fn of_converted_polynomial() {
    assert_eq!(
      interpret(
        "PolyVal[{1, -1, 2}, PolyToArray[5x^2 + 2x y + 3y^2 + z^3, {x, y, z}]]"
      )
      .unwrap(),
      "14"
    );
  }

  #[test]
  fn calls_inside_list_arguments() {
    assert_eq!(
      interpret("PolyVal[{PolyVal[{1}, {1, 1}]}, {0, 1}]").unwrap(),
      "2"
    );
    assert_eq!(
      interpret("ArrayToPoly[{PolyVal[{2}, {0, 1}], 1}, {x}]").unwrap(),
      "x + 2"
    );
  }

  #[test]
  fn overflow_prints_as_infinity() {
    assert_eq!(interpret("PolyVal[{1e200}, {0, 0, 1}]").unwrap(), "Infinity");
    assert_eq!(
      interpret("PolyVal[{1e200}, {0, 0, -1}]").unwrap(),
      "-Infinity"
    );
  }

  #[test]
  fn zero_polynomial() {
    assert_eq!(
      interpret("PolyVal[{7, -3}, PolyToArray[0, {x, y}]]").unwrap(),
      "0"
    );
  }

  #[test]
  fn dimension_mismatch() {
    assert!(matches!(
      interpret("PolyVal[{1, 2}, {1, 2, 3}]"),
      Err(PolyError::DimensionMismatch {
        expected: 1,
        found: 2
      })
    ));
    assert!(matches!(
      interpret("PolyVal[{1}, {{1, 2}, {3, 4}}]"),
      Err(PolyError::DimensionMismatch {
        expected: 2,
        found: 1
      })
    ));
  }

  #[test]
  fn non_numeric_point() {
    assert!(matches!(
      interpret("PolyVal[{a}, {1, 2}]"),
      Err(PolyError::InvalidPolynomial(_))
    ));
  }
}
