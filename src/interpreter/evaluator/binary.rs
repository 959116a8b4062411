/// Operator dispatch by operand type.
pub mod core;
/// Arithmetic on plain numbers.
pub mod scalar;
/// Arithmetic involving quantities.
pub mod quantity;
/// Equality and ordering.
pub mod comparison;
