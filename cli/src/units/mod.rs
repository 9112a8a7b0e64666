// Unit tables and conversions.
// Linear quantities (length, weight, volume, speed, area) scale through a base unit;
// temperature is affine and pivots through celsius.

pub mod error;
pub mod tables;
pub mod temperature;

pub use error::UnitError;
pub use tables::{lookup, Quantity, UnitTable, AREA, LENGTH, SORTED_TABLES, SPEED, TABLES, VOLUME, WEIGHT};
pub use temperature::{convert_temperature, TemperatureUnit};

/// Convert `value` between two units of the same quantity, temperature included
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, UnitError> {
    let from_temp = TemperatureUnit::from_name(from_unit);
    let to_temp = TemperatureUnit::from_name(to_unit);

    match (from_temp, to_temp) {
        (Some(from), Some(to)) => return Ok(convert_temperature(value, from, to)),
        (Some(_), None) | (None, Some(_)) => {
            // One side is a temperature, the other must at least be a known unit
            let other = if from_temp.is_some() { to_unit } else { from_unit };
            if lookup(other).is_none() {
                return Err(UnitError::UnknownUnit(other.to_string()));
            }
            return Err(UnitError::IncompatibleUnits(
                from_unit.to_string(),
                to_unit.to_string(),
            ));
        }
        (None, None) => {}
    }

    let (from_table, from_factor) =
        lookup(from_unit).ok_or_else(|| UnitError::UnknownUnit(from_unit.to_string()))?;

    // The target must live in the same table as the source
    let to_factor = match from_table.factor(to_unit) {
        Some(factor) => factor,
        None if lookup(to_unit).is_some() => {
            return Err(UnitError::IncompatibleUnits(
                from_unit.to_string(),
                to_unit.to_string(),
            ))
        }
        None => return Err(UnitError::UnknownUnit(to_unit.to_string())),
    };

    Ok(value * from_factor / to_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6 * b.abs().max(1.0)
    }

    #[test]
    fn test_convert_linear() {
        assert!(close(convert(5.0, "miles", "kilometers").unwrap(), 8.04672));
        assert!(close(convert(1.0, "kg", "grams").unwrap(), 1000.0));
        assert!(close(convert(2.0, "Gallons", "liters").unwrap(), 7.57082));
        assert!(close(convert(1.0, "hectare", "square meters").unwrap(), 10_000.0));
    }

    #[test]
    fn test_convert_temperature_names() {
        assert!(close(convert(100.0, "fahrenheit", "celsius").unwrap(), 37.77777777777778));
        assert_eq!(convert(21.5, "c", "degrees celsius").unwrap(), 21.5);
    }

    #[test]
    fn test_convert_errors() {
        assert_eq!(
            convert(1.0, "furlong", "m"),
            Err(UnitError::UnknownUnit("furlong".to_string()))
        );
        assert_eq!(
            convert(1.0, "m", "furlong"),
            Err(UnitError::UnknownUnit("furlong".to_string()))
        );
        assert_eq!(
            convert(1.0, "kg", "meters"),
            Err(UnitError::IncompatibleUnits("kg".to_string(), "meters".to_string()))
        );
        assert_eq!(
            convert(1.0, "celsius", "meters"),
            Err(UnitError::IncompatibleUnits("celsius".to_string(), "meters".to_string()))
        );
    }

    #[test]
    fn test_round_trip_every_pair() {
        let value = 123.456;
        for table in TABLES.iter() {
            for (from, _) in table.entries {
                for (to, _) in table.entries {
                    let there = convert(value, from, to).unwrap();
                    let back = convert(there, to, from).unwrap();
                    assert!(
                        (back - value).abs() <= 1e-6 * value,
                        "{} -> {} -> {} gave {}",
                        from,
                        to,
                        from,
                        back
                    );
                }
            }
        }
    }
}
