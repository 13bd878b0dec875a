use std::collections::BTreeSet;

use crate::functions::polynomial_ast::{collect_poly_vars, Polynomial};
use crate::syntax::Expr;
use crate::PolyError;

pub mod dispatch;

pub use dispatch::evaluate_function_call_ast;

/// Evaluate an expression to its result expression.
///
/// Function calls are dispatched by name after their nested calls are
/// evaluated. Anything else is expanded over the symbols it mentions and
/// returned in canonical form; expressions that are not polynomials come
/// back unchanged.
pub fn evaluate_expr_to_expr(expr: &Expr) -> Result<Expr, PolyError> {
  match expr {
    Expr::FunctionCall { name, args } => {
      let args = args
        .iter()
        .map(evaluate_argument)
        .collect::<Result<Vec<_>, _>>()?;
      evaluate_function_call_ast(name, &args)
    }
    Expr::List(items) => Ok(Expr::List(
      items
        .iter()
        .map(evaluate_expr_to_expr)
        .collect::<Result<_, _>>()?,
    )),
    _ => {
      let mut vars = BTreeSet::new();
      collect_poly_vars(expr, &mut vars);
      let vars: Vec<String> = vars.into_iter().collect();
      match Polynomial::from_expr(expr, &vars) {
        Ok(poly) => Ok(poly.to_expr()),
        Err(_) => Ok(expr.clone()),
      }
    }
  }
}

/// Evaluate the calls inside an argument, including those nested in lists,
/// and leave everything else as written.
fn evaluate_argument(arg: &Expr) -> Result<Expr, PolyError> {
  match arg {
    Expr::FunctionCall { .. } => evaluate_expr_to_expr(arg),
    Expr::List(items) => Ok(Expr::List(
      items
        .iter()
        .map(evaluate_argument)
        .collect::<Result<_, _>>()?,
    )),
    other => Ok(other.clone()),
  }
}
