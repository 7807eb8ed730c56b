//! Consumable unit handling and conversion
//!
//! Consumable stock is counted in the unit the batch was received in;
//! display code converts between compatible units for totals.

use serde::{Deserialize, Serialize};

/// Unit a consumable quantity is counted in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ConsumableUnit {
    Kilogram,
    Gram,
    Liter,
    Milliliter,
    Meter,
    Centimeter,
    Piece,
}

/// Physical dimension of a unit; conversion is only defined within one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitDimension {
    Mass,
    Volume,
    Length,
    Count,
}

impl ConsumableUnit {
    pub fn dimension(&self) -> UnitDimension {
        match self {
            ConsumableUnit::Kilogram | ConsumableUnit::Gram => UnitDimension::Mass,
            ConsumableUnit::Liter | ConsumableUnit::Milliliter => UnitDimension::Volume,
            ConsumableUnit::Meter | ConsumableUnit::Centimeter => UnitDimension::Length,
            ConsumableUnit::Piece => UnitDimension::Count,
        }
    }

    /// Factor to the dimension's base unit (kg, l, m, piece)
    fn base_factor(&self) -> f64 {
        match self {
            ConsumableUnit::Kilogram | ConsumableUnit::Liter | ConsumableUnit::Meter => 1.0,
            ConsumableUnit::Gram | ConsumableUnit::Milliliter => 0.001,
            ConsumableUnit::Centimeter => 0.01,
            ConsumableUnit::Piece => 1.0,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            ConsumableUnit::Kilogram => "kg",
            ConsumableUnit::Gram => "g",
            ConsumableUnit::Liter => "l",
            ConsumableUnit::Milliliter => "ml",
            ConsumableUnit::Meter => "m",
            ConsumableUnit::Centimeter => "cm",
            ConsumableUnit::Piece => "pc",
        }
    }
}

impl std::fmt::Display for ConsumableUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Convert a quantity between units of the same dimension
///
/// Returns `None` when the dimensions differ (liters never become
/// kilograms).
pub fn convert(quantity: f64, from: ConsumableUnit, to: ConsumableUnit) -> Option<f64> {
    if from.dimension() != to.dimension() {
        return None;
    }
    Some(quantity * from.base_factor() / to.base_factor())
}
