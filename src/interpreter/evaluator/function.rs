/// Single-argument math functions.
///
/// Exponentials, hyperbolic and inverse trigonometric functions, `abs`,
/// `sign`, `cbrt` and `factorial`.
pub mod builtin;
/// Trigonometric functions that accept angle quantities.
pub mod trig;
/// Logarithm function implementations.
///
/// Supports natural, base-10, base-2 and arbitrary-base logarithms.
pub mod log;
/// `min` and `max` function implementations.
///
/// Returns the minimum or maximum value from any number of arguments.
pub mod min_max;
/// Roots and powers: `sqrt`, `nthRoot`, `hypot` and `pow`.
pub mod sqrt;
/// Rounding and remainders: `round`, `floor`, `ceil`, `fix` and `mod`.
pub mod rounding;

pub mod core;
