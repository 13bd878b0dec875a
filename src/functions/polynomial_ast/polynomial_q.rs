use std::collections::BTreeSet;

use super::expand::expand_expr;
use crate::syntax::Expr;
use crate::PolyError;

// ─── PolynomialQ ────────────────────────────────────────────────────

/// Check an ordered variable list: names must be distinct identifiers and
/// must not shadow the built-in constants.
pub fn validate_variables<S: AsRef<str>>(
  vars: &[S],
) -> Result<Vec<String>, PolyError> {
  let mut seen = BTreeSet::new();
  let mut names = Vec::with_capacity(vars.len());
  for var in vars {
    let name = var.as_ref();
    let is_identifier = name
      .chars()
      .next()
      .is_some_and(|c| c.is_ascii_alphabetic() || c == '$')
      && name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    let reserved = matches!(name, "I" | "Infinity" | "Indeterminate");
    if !is_identifier || reserved {
      return Err(PolyError::InvalidPolynomial(format!(
        "{name:?} cannot be used as a variable"
      )));
    }
    if !seen.insert(name) {
      return Err(PolyError::InvalidPolynomial(format!(
        "variable {name} is listed more than once"
      )));
    }
    names.push(name.to_string());
  }
  Ok(names)
}

/// Whether `expr` is a polynomial in exactly the given variables.
pub fn is_polynomial<S: AsRef<str>>(expr: &Expr, vars: &[S]) -> bool {
  match validate_variables(vars) {
    Ok(vars) => expand_expr(expr, &vars).is_ok(),
    Err(_) => false,
  }
}

/// Collect the symbols an expression uses outside of function calls,
/// sorted by name.
pub fn collect_poly_vars(expr: &Expr, vars: &mut BTreeSet<String>) {
  match expr {
    Expr::Identifier(name) => {
      vars.insert(name.clone());
    }
    Expr::BinaryOp { left, right, .. } => {
      collect_poly_vars(left, vars);
      collect_poly_vars(right, vars);
    }
    Expr::UnaryOp { operand, .. } => collect_poly_vars(operand, vars),
    _ => {}
  }
}
