#[allow(unused_imports)]
use super::*;
use crate::functions::coefficient_array::CoeffArray;
use crate::functions::numeric::{complex_to_expr, numeric_value};
use crate::functions::polynomial_ast::{
  array_to_poly, evaluate, is_polynomial, poly_to_array,
};

pub fn dispatch_polynomial_functions(
  name: &str,
  args: &[Expr],
) -> Option<Result<Expr, PolyError>> {
  match name {
    "PolyToArray" => Some(poly_to_array_ast(args)),
    "ArrayToPoly" => Some(array_to_poly_ast(args)),
    "PolyVal" => Some(poly_val_ast(args)),
    "PolynomialQ" => Some(polynomial_q_ast(args)),
    _ => None,
  }
}

fn expect_args(
  name: &str,
  args: &[Expr],
  count: usize,
) -> Result<(), PolyError> {
  if args.len() != count {
    return Err(PolyError::EvaluationError(format!(
      "{} expects {} arguments, got {}",
      name,
      count,
      args.len()
    )));
  }
  Ok(())
}

/// `{x, y, z}` or a bare `x`.
fn variable_names(name: &str, expr: &Expr) -> Result<Vec<String>, PolyError> {
  let not_symbol = || {
    PolyError::EvaluationError(format!(
      "{} expects a list of symbols, got {}",
      name,
      expr_to_string(expr)
    ))
  };
  match expr {
    Expr::Identifier(var) => Ok(vec![var.clone()]),
    Expr::List(items) => items
      .iter()
      .map(|item| match item {
        Expr::Identifier(var) => Ok(var.clone()),
        _ => Err(not_symbol()),
      })
      .collect(),
    _ => Err(not_symbol()),
  }
}

/// PolyToArray[poly, {x, y, ...}]
pub fn poly_to_array_ast(args: &[Expr]) -> Result<Expr, PolyError> {
  expect_args("PolyToArray", args, 2)?;
  let vars = variable_names("PolyToArray", &args[1])?;
  Ok(poly_to_array(&args[0], &vars)?.to_expr())
}

/// ArrayToPoly[array, {x, y, ...}]
pub fn array_to_poly_ast(args: &[Expr]) -> Result<Expr, PolyError> {
  expect_args("ArrayToPoly", args, 2)?;
  let vars = variable_names("ArrayToPoly", &args[1])?;
  let array = CoeffArray::from_expr(&args[0])?;
  Ok(array_to_poly(&array, &vars)?.to_expr())
}

/// PolyVal[{x0, y0, ...}, array]
pub fn poly_val_ast(args: &[Expr]) -> Result<Expr, PolyError> {
  expect_args("PolyVal", args, 2)?;
  let point = match &args[0] {
    Expr::List(items) => items
      .iter()
      .map(numeric_value)
      .collect::<Result<Vec<_>, _>>()?,
    other => vec![numeric_value(other)?],
  };
  let array = CoeffArray::from_expr(&args[1])?;
  Ok(complex_to_expr(evaluate(&point, &array)?))
}

/// PolynomialQ[expr, {x, y, ...}]
pub fn polynomial_q_ast(args: &[Expr]) -> Result<Expr, PolyError> {
  expect_args("PolynomialQ", args, 2)?;
  let vars = variable_names("PolynomialQ", &args[1])?;
  let answer = if is_polynomial(&args[0], &vars) {
    "True"
  } else {
    "False"
  };
  Ok(Expr::Identifier(answer.to_string()))
}
