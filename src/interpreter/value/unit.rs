use std::f64::consts::PI;

/// Exponents of the base dimensions, in the order length, mass, time,
/// temperature, angle.
pub type Dimension = [i8; 5];

pub const LENGTH: Dimension = [1, 0, 0, 0, 0];
pub const VOLUME: Dimension = [3, 0, 0, 0, 0];
pub const MASS: Dimension = [0, 1, 0, 0, 0];
pub const TIME: Dimension = [0, 0, 1, 0, 0];
pub const TEMPERATURE: Dimension = [0, 0, 0, 1, 0];
pub const ANGLE: Dimension = [0, 0, 0, 0, 1];

/// Which SI prefixes a base unit accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefixes {
    None,
    /// Symbol prefixes: `k`, `m`, `u`, ...
    Short,
    /// Spelled-out prefixes: `kilo`, `milli`, `micro`, ...
    Long,
}

/// An entry of the unit table.
///
/// A value `v` in this unit equals `(v + offset) * factor` in the SI unit of
/// its dimension. Only temperature scales have a non-zero offset.
#[derive(Debug, PartialEq)]
pub struct BaseUnit {
    /// The name as it is written in expressions.
    pub symbol:    &'static str,
    /// Shared name of all spellings of the same unit, e.g. `liter` for `l`,
    /// `L` and `litre`.
    pub canonical: &'static str,
    pub dimension: Dimension,
    pub factor:    f64,
    pub offset:    f64,
    prefixes:      Prefixes,
    /// Whether a trailing `s` is accepted (`meters`, `hours`).
    plural:        bool,
}

macro_rules! unit_table {
    (
        $(
            $symbol:literal => ($canonical:literal, $dimension:expr, $factor:expr, $offset:expr, $prefixes:ident, $plural:literal)
        ),* $(,)?
    ) => {
        static UNIT_TABLE: &[BaseUnit] = &[
            $(
                BaseUnit { symbol:    $symbol,
                           canonical: $canonical,
                           dimension: $dimension,
                           factor:    $factor,
                           offset:    $offset,
                           prefixes:  Prefixes::$prefixes,
                           plural:    $plural, },
            )*
        ];
    };
}

unit_table! {
    // Length
    "meter"      => ("meter", LENGTH, 1.0, 0.0, Long, true),
    "metre"      => ("meter", LENGTH, 1.0, 0.0, Long, true),
    "m"          => ("meter", LENGTH, 1.0, 0.0, Short, false),
    "inch"       => ("inch", LENGTH, 0.0254, 0.0, None, false),
    "inches"     => ("inch", LENGTH, 0.0254, 0.0, None, false),
    "in"         => ("inch", LENGTH, 0.0254, 0.0, None, false),
    "foot"       => ("foot", LENGTH, 0.3048, 0.0, None, false),
    "feet"       => ("foot", LENGTH, 0.3048, 0.0, None, false),
    "ft"         => ("foot", LENGTH, 0.3048, 0.0, None, false),
    "yard"       => ("yard", LENGTH, 0.9144, 0.0, None, true),
    "yd"         => ("yard", LENGTH, 0.9144, 0.0, None, false),
    "mile"       => ("mile", LENGTH, 1609.344, 0.0, None, true),
    "mi"         => ("mile", LENGTH, 1609.344, 0.0, None, false),
    // Volume
    "liter"      => ("liter", VOLUME, 1e-3, 0.0, Long, true),
    "litre"      => ("liter", VOLUME, 1e-3, 0.0, Long, true),
    "l"          => ("liter", VOLUME, 1e-3, 0.0, Short, false),
    "L"          => ("liter", VOLUME, 1e-3, 0.0, Short, false),
    "cc"         => ("cc", VOLUME, 1e-6, 0.0, None, false),
    "gallon"     => ("gallon", VOLUME, 3.785_411_784e-3, 0.0, None, true),
    "gal"        => ("gallon", VOLUME, 3.785_411_784e-3, 0.0, None, false),
    "quart"      => ("quart", VOLUME, 9.463_529_46e-4, 0.0, None, true),
    "qt"         => ("quart", VOLUME, 9.463_529_46e-4, 0.0, None, false),
    "pint"       => ("pint", VOLUME, 4.731_764_73e-4, 0.0, None, true),
    "pt"         => ("pint", VOLUME, 4.731_764_73e-4, 0.0, None, false),
    "cup"        => ("cup", VOLUME, 2.365_882_365e-4, 0.0, None, true),
    "fluidounce" => ("fluidounce", VOLUME, 2.957_352_956_25e-5, 0.0, None, true),
    "floz"       => ("fluidounce", VOLUME, 2.957_352_956_25e-5, 0.0, None, false),
    // Mass
    "gram"       => ("gram", MASS, 1e-3, 0.0, Long, true),
    "g"          => ("gram", MASS, 1e-3, 0.0, Short, false),
    "tonne"      => ("tonne", MASS, 1e3, 0.0, Long, true),
    "pound"      => ("pound", MASS, 0.453_592_37, 0.0, None, true),
    "lb"         => ("pound", MASS, 0.453_592_37, 0.0, None, false),
    "lbs"        => ("pound", MASS, 0.453_592_37, 0.0, None, false),
    "ounce"      => ("ounce", MASS, 2.834_952_312_5e-2, 0.0, None, true),
    "oz"         => ("ounce", MASS, 2.834_952_312_5e-2, 0.0, None, false),
    // Time
    "second"     => ("second", TIME, 1.0, 0.0, Long, true),
    "sec"        => ("second", TIME, 1.0, 0.0, None, false),
    "s"          => ("second", TIME, 1.0, 0.0, Short, false),
    "minute"     => ("minute", TIME, 60.0, 0.0, None, true),
    "min"        => ("minute", TIME, 60.0, 0.0, None, false),
    "hour"       => ("hour", TIME, 3600.0, 0.0, None, true),
    "hr"         => ("hour", TIME, 3600.0, 0.0, None, false),
    "h"          => ("hour", TIME, 3600.0, 0.0, None, false),
    "day"        => ("day", TIME, 86_400.0, 0.0, None, true),
    "week"       => ("week", TIME, 604_800.0, 0.0, None, true),
    // Angle
    "rad"        => ("radian", ANGLE, 1.0, 0.0, Short, false),
    "radian"     => ("radian", ANGLE, 1.0, 0.0, Long, true),
    "deg"        => ("degree", ANGLE, PI / 180.0, 0.0, None, false),
    "degree"     => ("degree", ANGLE, PI / 180.0, 0.0, None, true),
    "grad"       => ("gradian", ANGLE, PI / 200.0, 0.0, None, false),
    "gradian"    => ("gradian", ANGLE, PI / 200.0, 0.0, None, true),
    "cycle"      => ("cycle", ANGLE, 2.0 * PI, 0.0, None, true),
    // Temperature
    "K"          => ("kelvin", TEMPERATURE, 1.0, 0.0, Short, false),
    "kelvin"     => ("kelvin", TEMPERATURE, 1.0, 0.0, None, false),
    "degC"       => ("degC", TEMPERATURE, 1.0, 273.15, None, false),
    "celsius"    => ("degC", TEMPERATURE, 1.0, 273.15, None, false),
    "degF"       => ("degF", TEMPERATURE, 5.0 / 9.0, 459.67, None, false),
    "fahrenheit" => ("degF", TEMPERATURE, 5.0 / 9.0, 459.67, None, false),
}

/// Symbol prefixes. `da` is listed before `d` so the longer match wins.
const SHORT_PREFIXES: &[(&str, f64)] = &[("da", 1e1),
                                         ("h", 1e2),
                                         ("k", 1e3),
                                         ("M", 1e6),
                                         ("G", 1e9),
                                         ("T", 1e12),
                                         ("P", 1e15),
                                         ("E", 1e18),
                                         ("d", 1e-1),
                                         ("c", 1e-2),
                                         ("m", 1e-3),
                                         ("u", 1e-6),
                                         ("n", 1e-9),
                                         ("p", 1e-12),
                                         ("f", 1e-15)];

const LONG_PREFIXES: &[(&str, f64)] = &[("deca", 1e1),
                                        ("hecto", 1e2),
                                        ("kilo", 1e3),
                                        ("mega", 1e6),
                                        ("giga", 1e9),
                                        ("tera", 1e12),
                                        ("peta", 1e15),
                                        ("exa", 1e18),
                                        ("deci", 1e-1),
                                        ("centi", 1e-2),
                                        ("milli", 1e-3),
                                        ("micro", 1e-6),
                                        ("nano", 1e-9),
                                        ("pico", 1e-12),
                                        ("femto", 1e-15)];

/// A resolved unit: a table entry, an optional prefix multiplier and the
/// spelling the user wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    name:   String,
    prefix: f64,
    base:   &'static BaseUnit,
}

impl Unit {
    /// Resolves a unit name.
    ///
    /// Exact table entries win over prefixed readings, so `min` is a minute
    /// and `m` a meter. Otherwise a known prefix is stripped and the rest must
    /// be a unit accepting that kind of prefix. Finally a plural `s` is
    /// stripped from unit names that allow it.
    ///
    /// # Returns
    /// `None` when the name does not denote a unit.
    ///
    /// # Example
    /// ```
    /// use numtap::interpreter::value::unit::{Unit, LENGTH, VOLUME};
    ///
    /// let km = Unit::parse("km").unwrap();
    /// assert_eq!(km.dimension(), LENGTH);
    /// assert_eq!(km.factor(), 1000.0);
    ///
    /// assert_eq!(Unit::parse("milliliters").unwrap().dimension(), VOLUME);
    /// assert!(Unit::parse("one").is_none());
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::resolve(name).map(|(prefix, base)| Self { name: name.to_string(),
                                                        prefix,
                                                        base })
    }

    fn resolve(name: &str) -> Option<(f64, &'static BaseUnit)> {
        if let Some(base) = lookup(name) {
            return Some((1.0, base));
        }

        for (prefixes, kind) in [(SHORT_PREFIXES, Prefixes::Short), (LONG_PREFIXES, Prefixes::Long)]
        {
            for (prefix, multiplier) in prefixes {
                if let Some(rest) = name.strip_prefix(prefix)
                   && let Some(base) = lookup(rest).or_else(|| lookup_plural(rest))
                   && base.prefixes == kind
                {
                    return Some((*multiplier, base));
                }
            }
        }

        lookup_plural(name).map(|base| (1.0, base))
    }

    /// The unit as it was written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared name of the unprefixed unit, e.g. `liter` for `mL` and
    /// `degC` for `celsius`.
    ///
    /// # Example
    /// ```
    /// use numtap::interpreter::value::unit::Unit;
    ///
    /// assert_eq!(Unit::parse("L").unwrap().canonical(), "liter");
    /// assert_eq!(Unit::parse("celsius").unwrap().canonical(), "degC");
    /// ```
    #[must_use]
    pub fn canonical(&self) -> &'static str {
        self.base.canonical
    }

    /// Whether an SI prefix was applied.
    #[must_use]
    pub fn is_prefixed(&self) -> bool {
        (self.prefix - 1.0).abs() > f64::EPSILON
    }

    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.base.dimension
    }

    /// Size of one of this unit in SI units, prefix included.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.prefix * self.base.factor
    }

    /// Whether values in both units can be converted into each other.
    #[must_use]
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.dimension() == other.dimension()
    }

    /// Converts a magnitude in this unit to the SI unit of its dimension.
    #[must_use]
    pub fn to_si(&self, value: f64) -> f64 {
        (value + self.base.offset) * self.factor()
    }

    /// Converts a magnitude in the SI unit of this dimension to this unit.
    #[must_use]
    pub fn from_si(&self, value: f64) -> f64 {
        value / self.factor() - self.base.offset
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn lookup(name: &str) -> Option<&'static BaseUnit> {
    UNIT_TABLE.iter().find(|unit| unit.symbol == name)
}

fn lookup_plural(name: &str) -> Option<&'static BaseUnit> {
    name.strip_suffix('s')
        .and_then(lookup)
        .filter(|unit| unit.plural)
}
