use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical quantity covered by one linear unit table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Length,
    Weight,
    Volume,
    Speed,
    Area,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Length => "length",
            Quantity::Weight => "weight",
            Quantity::Volume => "volume",
            Quantity::Speed => "speed",
            Quantity::Area => "area",
        };
        write!(f, "{}", name)
    }
}

/// Synonym -> scale factor relative to the table's base unit.
/// Every factor is strictly positive.
#[derive(Debug)]
pub struct UnitTable {
    pub quantity: Quantity,
    pub base_unit: &'static str,
    pub entries: &'static [(&'static str, f64)],
}

impl UnitTable {
    /// Scale factor for a unit name, case-insensitive
    pub fn factor(&self, unit: &str) -> Option<f64> {
        let key = unit.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, factor)| *factor)
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.factor(unit).is_some()
    }

    /// Unit names ordered longest first; equal lengths keep declaration order
    pub fn names_longest_first(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.iter().map(|(name, _)| *name).collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()));
        names
    }
}

pub static LENGTH: UnitTable = UnitTable {
    quantity: Quantity::Length,
    base_unit: "meter",
    entries: &[
        ("meter", 1.0),
        ("meters", 1.0),
        ("metre", 1.0),
        ("metres", 1.0),
        ("m", 1.0),
        ("kilometer", 1000.0),
        ("kilometers", 1000.0),
        ("kilometre", 1000.0),
        ("kilometres", 1000.0),
        ("km", 1000.0),
        ("centimeter", 0.01),
        ("centimeters", 0.01),
        ("centimetre", 0.01),
        ("centimetres", 0.01),
        ("cm", 0.01),
        ("millimeter", 0.001),
        ("millimeters", 0.001),
        ("millimetre", 0.001),
        ("millimetres", 0.001),
        ("mm", 0.001),
        ("mile", 1609.344),
        ("miles", 1609.344),
        ("yard", 0.9144),
        ("yards", 0.9144),
        ("foot", 0.3048),
        ("feet", 0.3048),
        ("inch", 0.0254),
        ("inches", 0.0254),
    ],
};

pub static WEIGHT: UnitTable = UnitTable {
    quantity: Quantity::Weight,
    base_unit: "kilogram",
    entries: &[
        ("kilogram", 1.0),
        ("kilograms", 1.0),
        ("kg", 1.0),
        ("gram", 0.001),
        ("grams", 0.001),
        ("g", 0.001),
        ("milligram", 0.000001),
        ("milligrams", 0.000001),
        ("mg", 0.000001),
        ("pound", 0.453592),
        ("pounds", 0.453592),
        ("lb", 0.453592),
        ("lbs", 0.453592),
        ("ounce", 0.0283495),
        ("ounces", 0.0283495),
        ("oz", 0.0283495),
        ("ton", 907.185),
        ("tons", 907.185),
        ("tonne", 1000.0),
        ("tonnes", 1000.0),
        ("metric ton", 1000.0),
        ("metric tons", 1000.0),
        ("stone", 6.35029),
        ("stones", 6.35029),
    ],
};

pub static VOLUME: UnitTable = UnitTable {
    quantity: Quantity::Volume,
    base_unit: "liter",
    entries: &[
        ("liter", 1.0),
        ("liters", 1.0),
        ("litre", 1.0),
        ("litres", 1.0),
        ("l", 1.0),
        ("milliliter", 0.001),
        ("milliliters", 0.001),
        ("millilitre", 0.001),
        ("millilitres", 0.001),
        ("ml", 0.001),
        ("gallon", 3.78541),
        ("gallons", 3.78541),
        ("quart", 0.946353),
        ("quarts", 0.946353),
        ("pint", 0.473176),
        ("pints", 0.473176),
        ("cup", 0.236588),
        ("cups", 0.236588),
        ("fluid ounce", 0.0295735),
        ("fluid ounces", 0.0295735),
        ("tablespoon", 0.0147868),
        ("tablespoons", 0.0147868),
        ("teaspoon", 0.00492892),
        ("teaspoons", 0.00492892),
    ],
};

pub static SPEED: UnitTable = UnitTable {
    quantity: Quantity::Speed,
    base_unit: "meter per second",
    entries: &[
        ("meter per second", 1.0),
        ("meters per second", 1.0),
        ("m/s", 1.0),
        ("kilometer per hour", 0.277778),
        ("kilometers per hour", 0.277778),
        ("km/h", 0.277778),
        ("kph", 0.277778),
        ("mile per hour", 0.44704),
        ("miles per hour", 0.44704),
        ("mph", 0.44704),
        ("knot", 0.514444),
        ("knots", 0.514444),
    ],
};

pub static AREA: UnitTable = UnitTable {
    quantity: Quantity::Area,
    base_unit: "square meter",
    entries: &[
        ("square meter", 1.0),
        ("square meters", 1.0),
        ("square metre", 1.0),
        ("square metres", 1.0),
        ("sqm", 1.0),
        ("square kilometer", 1_000_000.0),
        ("square kilometers", 1_000_000.0),
        ("sqkm", 1_000_000.0),
        ("square foot", 0.092903),
        ("square feet", 0.092903),
        ("sqft", 0.092903),
        ("square mile", 2_590_000.0),
        ("square miles", 2_590_000.0),
        ("acre", 4046.86),
        ("acres", 4046.86),
        ("hectare", 10_000.0),
        ("hectares", 10_000.0),
    ],
};

/// All linear tables in matching order
pub static TABLES: [&UnitTable; 5] = [&LENGTH, &WEIGHT, &VOLUME, &SPEED, &AREA];

lazy_static! {
    /// Each table paired with its names sorted longest first, computed once
    pub static ref SORTED_TABLES: Vec<(&'static UnitTable, Vec<&'static str>)> = TABLES
        .iter()
        .map(|table| (*table, table.names_longest_first()))
        .collect();
}

/// Find the first table that knows `unit`, with the unit's factor
pub fn lookup(unit: &str) -> Option<(&'static UnitTable, f64)> {
    TABLES
        .iter()
        .find_map(|table| table.factor(unit).map(|factor| (*table, factor)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_factors_positive() {
        for table in TABLES.iter() {
            for (name, factor) in table.entries {
                assert!(*factor > 0.0, "{} in {} has factor {}", name, table.quantity, factor);
            }
        }
    }

    #[test]
    fn test_base_unit_has_factor_one() {
        for table in TABLES.iter() {
            assert_eq!(table.factor(table.base_unit), Some(1.0));
        }
    }

    #[test]
    fn test_names_are_lowercase_and_unique_per_table() {
        for table in TABLES.iter() {
            let mut seen = std::collections::HashSet::new();
            for (name, _) in table.entries {
                assert_eq!(*name, name.to_lowercase());
                assert!(seen.insert(*name), "duplicate unit {}", name);
            }
        }
    }

    #[test]
    fn test_longest_first_ordering() {
        let names = AREA.names_longest_first();
        assert_eq!(names[0], "square kilometers");
        let meter = names.iter().position(|n| *n == "square meter").unwrap();
        let sqm = names.iter().position(|n| *n == "sqm").unwrap();
        assert!(meter < sqm);

        // Stable among equal lengths
        let length = LENGTH.names_longest_first();
        let kilometers = length.iter().position(|n| *n == "kilometers").unwrap();
        let kilometres = length.iter().position(|n| *n == "kilometres").unwrap();
        assert!(kilometers < kilometres);
    }

    #[test]
    fn test_lookup() {
        let (table, factor) = lookup("Miles").unwrap();
        assert_eq!(table.quantity, Quantity::Length);
        assert_eq!(factor, 1609.344);

        let (table, _) = lookup("fluid ounces").unwrap();
        assert_eq!(table.quantity, Quantity::Volume);

        assert!(lookup("parsec").is_none());
        assert!(SORTED_TABLES.len() == TABLES.len());
    }
}
