use serde::{Deserialize, Serialize};
use std::fmt;

/// Which matcher produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Arithmetic,
    Scientific,
    Conversion,
    Measurement,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Arithmetic => "arithmetic",
            Category::Scientific => "scientific",
            Category::Conversion => "conversion",
            Category::Measurement => "measurement",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of interpreting one utterance
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CalculationResult {
    /// The raw text as received
    pub input: String,
    /// Canonical rendering of what was understood, e.g. `sqrt(144)`
    pub parsed: String,
    /// Formatted answer, with a unit suffix where one applies
    pub result: String,
    pub category: Category,
    /// Set only when the input could not be understood
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CalculationResult {
    pub fn success(
        input: &str,
        parsed: impl Into<String>,
        result: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            input: input.to_string(),
            parsed: parsed.into(),
            result: result.into(),
            category,
            error: None,
        }
    }

    pub fn failure(input: &str, parsed: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            parsed: parsed.into(),
            result: String::new(),
            category: Category::Arithmetic,
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(error) => write!(f, "{}", error),
            None => write!(f, "{} = {}", self.parsed, self.result),
        }
    }
}
