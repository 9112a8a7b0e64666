use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    UnknownUnit(String),
    IncompatibleUnits(String, String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::UnknownUnit(unit) => write!(f, "Unknown unit: {}", unit),
            UnitError::IncompatibleUnits(from, to) => {
                write!(f, "Cannot convert between '{}' and '{}'", from, to)
            }
        }
    }
}

impl std::error::Error for UnitError {}
