//! AST-native polynomial functions.
//!
//! Canonical form, expansion, PolyToArray, ArrayToPoly, PolyVal, PolynomialQ.

mod coefficient;
mod expand;
mod from_array;
mod polynomial;
mod polynomial_q;
mod polyval;

pub use coefficient::*;
pub use expand::*;
pub use from_array::*;
pub use polynomial::*;
pub use polynomial_q::*;
pub use polyval::*;
