use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polyarray::syntax::{expr_to_string, string_to_expr};
use polyarray::{
  array_to_poly, interpret, numeric_value, poly_to_array_with_tolerance,
  CoeffArray, REAL_TOLERANCE,
};
use tracing::Level;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Log conversion steps
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate an expression such as PolyToArray[x^2 + y, {x, y}]
  Eval {
    /// The expression to evaluate
    expression: String,
  },
  /// Convert a polynomial to its dense coefficient array
  ToArray {
    /// The polynomial, e.g. "5x^2 + 2x y + z^3"
    expression: String,
    /// Variables in axis order
    #[arg(required = true)]
    variables: Vec<String>,
    /// Near-real tolerance in multiples of machine epsilon
    #[arg(long, default_value_t = REAL_TOLERANCE)]
    tol: f64,
  },
  /// Convert a nested coefficient list back to a polynomial
  ToPoly {
    /// Nested list, e.g. "{{0, 1}, {2, 0}}"
    array: String,
    /// Variables in axis order
    #[arg(required = true)]
    variables: Vec<String>,
  },
  /// Evaluate a nested coefficient list at a point
  Polyval {
    /// Nested list, e.g. "{{0, 1}, {2, 0}}"
    array: String,
    /// One coordinate per axis
    #[arg(allow_hyphen_values = true)]
    point: Vec<String>,
  },
}

fn run(command: Commands) -> Result<String> {
  match command {
    Commands::Eval { expression } => Ok(interpret(&expression)?),
    Commands::ToArray {
      expression,
      variables,
      tol,
    } => {
      let expr = string_to_expr(&expression)
        .with_context(|| format!("cannot parse {expression:?}"))?;
      let coefficients = poly_to_array_with_tolerance(&expr, &variables, tol)?;
      Ok(expr_to_string(&coefficients.to_expr()))
    }
    Commands::ToPoly { array, variables } => {
      let array = read_array(&array)?;
      Ok(array_to_poly(&array, &variables)?.to_string())
    }
    Commands::Polyval { array, point } => {
      let array = read_array(&array)?;
      let point = point
        .iter()
        .map(|coordinate| {
          let expr = string_to_expr(coordinate)?;
          numeric_value(&expr)
        })
        .collect::<Result<Vec<_>, _>>()
        .context("point coordinates must be numbers")?;
      let value = polyarray::evaluate(&point, &array)?;
      Ok(expr_to_string(&polyarray::Scalar::to_expr(value)))
    }
  }
}

fn read_array(input: &str) -> Result<CoeffArray<polyarray::Complex64>> {
  let expr = string_to_expr(input)
    .with_context(|| format!("cannot parse array {input:?}"))?;
  Ok(CoeffArray::from_expr(&expr)?)
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  tracing_subscriber::fmt()
    .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
    .with_writer(std::io::stderr)
    .init();

  let output = run(cli.command)?;
  println!("{output}");
  Ok(())
}
