/// Unit table and unit lookup.
///
/// Defines the `Unit` type, the static table of supported base units with
/// their dimensions, scale factors and offsets, and resolution of prefixed
/// and plural unit names such as `km`, `milliliter` or `feet`.
pub mod unit;
/// Quantities: a magnitude paired with a unit.
///
/// Provides conversion between compatible units, including the affine
/// temperature scales.
pub mod quantity;
/// Number rendering.
///
/// Formats floats the way results are shown to users: 14 significant digits,
/// positional notation for moderate exponents, exponent notation otherwise.
pub mod format;

pub mod core;
