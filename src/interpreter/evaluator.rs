/// Arithmetic, quantity arithmetic and comparisons between two values.
pub mod binary;

/// Negation and factorial.
pub mod unary;

/// The evaluation [`Context`](core::Context) and statement execution.
pub mod core;

/// Symbol resolution, tolerant comparison, the gamma function and name
/// reservation.
pub mod utils;

/// The builtin function table.
pub mod function;
