use serde::{Deserialize, Serialize};
use std::fmt;

/// Temperature scales; conversions pivot through celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Accepts `c`, `celsius`, `degrees celsius` (and the same for the other scales)
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        let bare = lower
            .strip_prefix("degrees")
            .or_else(|| lower.strip_prefix("degree"))
            .map(str::trim_start)
            .unwrap_or(&lower);

        match bare {
            "c" | "celsius" => Some(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * (5.0 / 9.0),
            TemperatureUnit::Kelvin => value - 273.15,
        }
    }

    fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * (9.0 / 5.0) + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Convert between scales. Same-unit conversions return the value untouched.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    to.from_celsius(from.to_celsius(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms() {
        assert_eq!(TemperatureUnit::from_name("C"), Some(TemperatureUnit::Celsius));
        assert_eq!(
            TemperatureUnit::from_name("degrees fahrenheit"),
            Some(TemperatureUnit::Fahrenheit)
        );
        assert_eq!(TemperatureUnit::from_name("k"), Some(TemperatureUnit::Kelvin));
        assert_eq!(TemperatureUnit::from_name("rankine"), None);
    }

    #[test]
    fn test_same_unit_is_identity() {
        let v = 36.6;
        assert_eq!(
            convert_temperature(v, TemperatureUnit::Celsius, TemperatureUnit::Celsius),
            v
        );
    }

    #[test]
    fn test_known_points() {
        let f = convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
        assert!((f - 212.0).abs() < 1e-9);

        let c = convert_temperature(32.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius);
        assert!(c.abs() < 1e-9);

        let k = convert_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin);
        assert!((k - 273.15).abs() < 1e-9);

        let f = convert_temperature(0.0, TemperatureUnit::Kelvin, TemperatureUnit::Fahrenheit);
        assert!((f + 459.67).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        for v in [-40.0, 0.0, 37.5, 1000.0] {
            let k = convert_temperature(v, TemperatureUnit::Fahrenheit, TemperatureUnit::Kelvin);
            let back = convert_temperature(k, TemperatureUnit::Kelvin, TemperatureUnit::Fahrenheit);
            assert!((back - v).abs() <= 1e-6 * v.abs().max(1.0));
        }
    }
}
