// Functions are organized by categories
pub mod coefficient_array;
pub mod numeric;
pub mod polynomial_ast;
