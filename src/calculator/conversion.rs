use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::interpreter::value::{quantity::Quantity, unit::Unit};

/// The separator that marks a segment as a conversion.
pub const CONVERSION_SEPARATOR: &str = " to ";

/// Fixed liters-to-US-gallons factor used instead of the unit table.
const LITERS_TO_GALLONS: f64 = 0.264_172;

/// Signed decimal magnitude followed by a unit symbol, e.g. `25 degC`.
static SOURCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?\d+(?:\.\d+)?)\s*([A-Za-z_][A-Za-z0-9_]*)$").expect("valid conversion pattern"));

/// Why a conversion failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Expected '<value> <unit> to <unit>', found \"{segment}\"")]
    Malformed { segment: String },
    #[error("Unit \"{name}\" not found")]
    UnknownUnit { name: String },
    #[error("Units {from} and {to} do not match")]
    Incompatible { from: String, to: String },
}

/// Returns true if the segment asks for a unit conversion.
///
/// # Example
/// ```
/// use numtap::calculator::conversion::is_conversion;
///
/// assert!(is_conversion("2 km to meter"));
/// assert!(!is_conversion("2 km To meter"));
/// assert!(!is_conversion("total + 1"));
/// ```
#[must_use]
pub fn is_conversion(segment: &str) -> bool {
    segment.contains(CONVERSION_SEPARATOR)
}

/// Converts `"<value> <unit> to <unit>"` into a quantity of the target unit.
///
/// The segment is split on the first `" to "`. The source part must be a
/// plain signed decimal followed by a unit symbol; expressions are not
/// accepted there. Celsius to Fahrenheit and liters to gallons use fixed
/// formulas, every other pair goes through the unit table.
///
/// # Errors
/// Returns a `ConversionError` if the source part does not match, a unit is
/// unknown or the two units measure different dimensions.
///
/// # Example
/// ```
/// use numtap::calculator::conversion::convert;
///
/// let quantity = convert("2 km to meter").unwrap();
/// assert_eq!(quantity.value, 2000.0);
/// assert_eq!(quantity.to_string(), "2000 meter");
///
/// assert_eq!(convert("25 degC to degF").unwrap().to_string(), "77 degF");
/// assert!(convert("2 km to second").is_err());
/// assert!(convert("x km to meter").is_err());
/// ```
pub fn convert(segment: &str) -> Result<Quantity, ConversionError> {
    let malformed = || ConversionError::Malformed { segment: segment.trim().to_string() };

    let (source, target) = segment.split_once(CONVERSION_SEPARATOR).ok_or_else(malformed)?;
    let captures = SOURCE_PATTERN.captures(source.trim()).ok_or_else(malformed)?;

    let value: f64 = captures[1].parse().map_err(|_| malformed())?;
    let from = parse_unit(&captures[2])?;
    let to = parse_unit(target.trim())?;

    let quantity = match special_case(value, &from, &to) {
        Some(converted) => Quantity::new(converted, to),
        None => {
            let incompatible = || ConversionError::Incompatible { from: from.name().to_string(),
                                                                  to:   to.name().to_string(), };
            Quantity::new(value, from.clone()).to(&to).ok_or_else(incompatible)?
        },
    };

    debug!(segment, result = %quantity, "converted");
    Ok(quantity)
}

fn parse_unit(name: &str) -> Result<Unit, ConversionError> {
    Unit::parse(name).ok_or_else(|| ConversionError::UnknownUnit { name: name.to_string() })
}

/// Fixed formulas that replace the table conversion for unprefixed units.
fn special_case(value: f64, from: &Unit, to: &Unit) -> Option<f64> {
    if from.is_prefixed() || to.is_prefixed() {
        return None;
    }

    match (from.canonical(), to.canonical()) {
        ("degC", "degF") => Some(value * 9.0 / 5.0 + 32.0),
        ("liter", "gallon") => Some(value * LITERS_TO_GALLONS),
        _ => None,
    }
}
