use pest::iterators::Pair;

use crate::{PolyError, Rule};

#[derive(Debug, Clone, PartialEq)]
pub enum BinaryOperator {
  Plus,
  Minus,
  Times,
  Divide,
  Power,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UnaryOperator {
  Minus,
}

/// Un-normalized syntax tree of a textual expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  Integer(i128),
  Real(f64),
  Identifier(String),
  /// Built-in symbolic constant, currently only the imaginary unit `I`.
  Constant(String),
  List(Vec<Expr>),
  FunctionCall {
    name: String,
    args: Vec<Expr>,
  },
  BinaryOp {
    op: BinaryOperator,
    left: Box<Expr>,
    right: Box<Expr>,
  },
  UnaryOp {
    op: UnaryOperator,
    operand: Box<Expr>,
  },
}

impl Expr {
  pub fn binary(op: BinaryOperator, left: Expr, right: Expr) -> Self {
    Expr::BinaryOp {
      op,
      left: Box::new(left),
      right: Box::new(right),
    }
  }

  pub fn negate(operand: Expr) -> Self {
    Expr::UnaryOp {
      op: UnaryOperator::Minus,
      operand: Box::new(operand),
    }
  }

  pub fn identifier(name: impl Into<String>) -> Self {
    Expr::Identifier(name.into())
  }
}

impl std::fmt::Display for Expr {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&expr_to_string(self))
  }
}

/// Parse a complete input string into an `Expr`.
pub fn string_to_expr(input: &str) -> Result<Expr, PolyError> {
  let mut pairs = crate::parse(input)?;
  let program = pairs.next().ok_or(PolyError::EmptyInput)?;
  let expression = program
    .into_inner()
    .find(|p| p.as_rule() == Rule::Expression)
    .ok_or(PolyError::EmptyInput)?;
  pair_to_expr(expression)
}

/// Convert a parse tree node into an `Expr`.
pub fn pair_to_expr(pair: Pair<Rule>) -> Result<Expr, PolyError> {
  match pair.as_rule() {
    Rule::Expression => {
      let mut inner = pair.into_inner();
      let first = inner
        .next()
        .ok_or_else(|| PolyError::EvaluationError("Empty expression".into()))?;
      let mut acc = pair_to_expr(first)?;
      while let Some(op) = inner.next() {
        let rhs = match inner.next() {
          Some(p) => pair_to_expr(p)?,
          None => break,
        };
        acc = match op.as_str() {
          "-" => Expr::binary(BinaryOperator::Minus, acc, rhs),
          _ => Expr::binary(BinaryOperator::Plus, acc, rhs),
        };
      }
      Ok(acc)
    }
    Rule::Product => {
      let mut inner = pair.into_inner();
      let first = inner
        .next()
        .ok_or_else(|| PolyError::EvaluationError("Empty product".into()))?;
      let mut acc = pair_to_expr(first)?;
      let mut pending = BinaryOperator::Times;
      for node in inner {
        if node.as_rule() == Rule::MulOp {
          pending = match node.as_str() {
            "/" => BinaryOperator::Divide,
            _ => BinaryOperator::Times,
          };
          continue;
        }
        let rhs = pair_to_expr(node)?;
        acc = Expr::binary(pending, acc, rhs);
        pending = BinaryOperator::Times;
      }
      Ok(acc)
    }
    Rule::Signed => {
      let mut negations = 0usize;
      let mut operand = None;
      for node in pair.into_inner() {
        match node.as_rule() {
          Rule::Negate => negations += 1,
          _ => operand = Some(pair_to_expr(node)?),
        }
      }
      let operand = operand
        .ok_or_else(|| PolyError::EvaluationError("Dangling minus".into()))?;
      Ok(if negations % 2 == 1 {
        negate_literal(operand)
      } else {
        operand
      })
    }
    Rule::Power => {
      let mut inner = pair.into_inner();
      let base = inner
        .next()
        .ok_or_else(|| PolyError::EvaluationError("Empty power".into()))?;
      let base = pair_to_expr(base)?;
      match inner.next() {
        Some(exponent) => Ok(Expr::binary(
          BinaryOperator::Power,
          base,
          pair_to_expr(exponent)?,
        )),
        None => Ok(base),
      }
    }
    Rule::Integer => {
      let s = pair.as_str();
      // Literals beyond i128 degrade to machine reals.
      match s.parse::<i128>() {
        Ok(n) => Ok(Expr::Integer(n)),
        Err(_) => parse_real(s),
      }
    }
    Rule::Real => parse_real(pair.as_str()),
    Rule::Identifier => match pair.as_str() {
      "I" => Ok(Expr::Constant("I".to_string())),
      "Infinity" => Ok(Expr::Real(f64::INFINITY)),
      "Indeterminate" => Ok(Expr::Real(f64::NAN)),
      name => Ok(Expr::Identifier(name.to_string())),
    },
    Rule::List => {
      let items = pair
        .into_inner()
        .map(pair_to_expr)
        .collect::<Result<Vec<_>, _>>()?;
      Ok(Expr::List(items))
    }
    Rule::FunctionCall => {
      let mut inner = pair.into_inner();
      let name = inner
        .next()
        .map(|p| p.as_str().to_string())
        .ok_or_else(|| PolyError::EvaluationError("Missing head".into()))?;
      let args = inner.map(pair_to_expr).collect::<Result<Vec<_>, _>>()?;
      Ok(Expr::FunctionCall { name, args })
    }
    rule => Err(PolyError::EvaluationError(format!(
      "Unexpected syntax node {:?}",
      rule
    ))),
  }
}

fn parse_real(s: &str) -> Result<Expr, PolyError> {
  s.parse::<f64>()
    .map(Expr::Real)
    .map_err(|e| PolyError::EvaluationError(format!("Bad number {s}: {e}")))
}

/// Fold a leading minus into numeric literals so "-3" stays a number.
fn negate_literal(expr: Expr) -> Expr {
  match expr {
    Expr::Integer(n) => Expr::Integer(-n),
    Expr::Real(x) => Expr::Real(-x),
    other => Expr::negate(other),
  }
}

/// Format a machine real. Whole numbers print without a fractional part;
/// overflowed values print as `Infinity`, `-Infinity` or `Indeterminate`.
pub fn format_real(x: f64) -> String {
  if x.is_nan() {
    "Indeterminate".to_string()
  } else if x == f64::INFINITY {
    "Infinity".to_string()
  } else if x == f64::NEG_INFINITY {
    "-Infinity".to_string()
  } else if x.fract() == 0.0 && x.abs() < 1e15 {
    // -0.0 prints as 0
    format!("{}", x as i64)
  } else {
    format!("{}", x)
  }
}

fn precedence(expr: &Expr) -> u8 {
  match expr {
    Expr::BinaryOp { op, .. } => match op {
      BinaryOperator::Plus | BinaryOperator::Minus => 1,
      BinaryOperator::Times | BinaryOperator::Divide => 2,
      BinaryOperator::Power => 3,
    },
    Expr::UnaryOp { .. } => 2,
    Expr::Integer(n) if *n < 0 => 2,
    Expr::Real(x) if x.is_sign_negative() && *x != 0.0 => 2,
    _ => 4,
  }
}

fn wrap(expr: &Expr, parens: bool) -> String {
  let s = expr_to_string(expr);
  if parens {
    format!("({s})")
  } else {
    s
  }
}

fn join(items: &[Expr]) -> String {
  items
    .iter()
    .map(expr_to_string)
    .collect::<Vec<_>>()
    .join(", ")
}

/// Render an `Expr` as text that `string_to_expr` reads back.
pub fn expr_to_string(expr: &Expr) -> String {
  match expr {
    Expr::Integer(n) => n.to_string(),
    Expr::Real(x) => format_real(*x),
    Expr::Identifier(name) | Expr::Constant(name) => name.clone(),
    Expr::List(items) => format!("{{{}}}", join(items)),
    Expr::FunctionCall { name, args } => format!("{}[{}]", name, join(args)),
    Expr::UnaryOp {
      op: UnaryOperator::Minus,
      operand,
    } => format!("-{}", wrap(operand, precedence(operand) <= 1)),
    Expr::BinaryOp { op, left, right } => match op {
      BinaryOperator::Plus => {
        let lhs = expr_to_string(left);
        match right.as_ref() {
          Expr::UnaryOp {
            op: UnaryOperator::Minus,
            operand,
          } => format!("{lhs} - {}", wrap(operand, precedence(operand) <= 1)),
          Expr::Integer(n) if *n < 0 => format!("{lhs} - {}", -n),
          Expr::Real(x) if x.is_sign_negative() && *x != 0.0 => {
            format!("{lhs} - {}", format_real(-x))
          }
          _ => format!("{lhs} + {}", expr_to_string(right)),
        }
      }
      BinaryOperator::Minus => format!(
        "{} - {}",
        expr_to_string(left),
        wrap(right, precedence(right) <= 1)
      ),
      BinaryOperator::Times => format!(
        "{}*{}",
        wrap(left, precedence(left) < 2),
        wrap(right, precedence(right) <= 2)
      ),
      BinaryOperator::Divide => format!(
        "{}/{}",
        wrap(left, precedence(left) < 2),
        wrap(right, precedence(right) <= 2)
      ),
      BinaryOperator::Power => format!(
        "{}^{}",
        wrap(left, precedence(left) <= 3),
        wrap(right, precedence(right) <= 3)
      ),
    },
  }
}
