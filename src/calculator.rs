/// Maps engine failures to localized calculation errors.
///
/// Raw engine messages are matched against a prioritized list of known
/// patterns; anything unrecognized becomes a syntax error.
pub mod classifier;
/// Resolves `"<value> <unit> to <unit>"` conversions.
pub mod conversion;
/// The evaluation entry point.
///
/// Splits input into `;`-separated segments, orders assignments before
/// computations, routes conversions and validates results.
///
/// # Responsibilities
/// - Detects assignments and conversions.
/// - Rejects NaN and infinite results and assignments.
/// - Stops at the first failing segment.
pub mod dispatch;
/// Supported languages and their message tables.
pub mod language;
/// Session variables.
pub mod scope;

pub use dispatch::evaluate;
