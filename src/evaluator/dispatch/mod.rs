#[allow(unused_imports)]
pub(crate) use crate::syntax::{Expr, expr_to_string};
#[allow(unused_imports)]
pub(crate) use crate::PolyError;

mod polynomial_functions;

pub use polynomial_functions::*;

/// Apply a built-in by name. Unknown heads stay unevaluated, so
/// `Sin[x]` comes back as `Sin[x]`.
pub fn evaluate_function_call_ast(
  name: &str,
  args: &[Expr],
) -> Result<Expr, PolyError> {
  if let Some(result) = dispatch_polynomial_functions(name, args) {
    return result;
  }
  Ok(Expr::FunctionCall {
    name: name.to_string(),
    args: args.to_vec(),
  })
}
