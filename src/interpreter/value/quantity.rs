use crate::interpreter::value::{format::format_number, unit::Unit};

/// A magnitude expressed in a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    /// The magnitude in `unit`.
    pub value: f64,
    /// The unit the magnitude is expressed in.
    pub unit:  Unit,
}

impl Quantity {
    #[must_use]
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Converts the quantity to another unit of the same dimension.
    ///
    /// Temperature offsets are honored, so `25 degC` becomes `77 degF`.
    ///
    /// # Returns
    /// `None` when the dimensions differ.
    ///
    /// # Example
    /// ```
    /// use numtap::interpreter::value::{quantity::Quantity, unit::Unit};
    ///
    /// let distance = Quantity::new(2.0, Unit::parse("km").unwrap());
    /// let meters = distance.to(&Unit::parse("meter").unwrap()).unwrap();
    /// assert!((meters.value - 2000.0).abs() < 1e-9);
    /// assert_eq!(meters.to_string(), "2000 meter");
    ///
    /// assert!(distance.to(&Unit::parse("kg").unwrap()).is_none());
    /// ```
    #[must_use]
    pub fn to(&self, target: &Unit) -> Option<Self> {
        if !self.unit.is_compatible(target) {
            return None;
        }
        Some(Self { value: target.from_si(self.to_si()),
                    unit:  target.clone(), })
    }

    /// The magnitude in the SI unit of the quantity's dimension.
    #[must_use]
    pub fn to_si(&self) -> f64 {
        self.unit.to_si(self.value)
    }

    /// Returns a quantity with the same unit and a new magnitude.
    #[must_use]
    pub fn with_value(&self, value: f64) -> Self {
        Self { value,
               unit: self.unit.clone() }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", format_number(self.value), self.unit)
    }
}
