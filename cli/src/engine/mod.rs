// Dispatcher: tries each matcher in fixed priority order and reports the first hit,
// or an error result when nothing understood the input.

pub mod examples;
pub mod result;


pub use examples::{example_commands, ExampleGroup};
pub use result::{CalculationResult, Category};

use crate::format::NumberFormat;
use crate::matchers::DISPATCH_ORDER;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

pub const NO_INPUT: &str = "No input received";

lazy_static! {
    static ref NUMERIC: Regex = Regex::new(r"-?\d+(?:[.,]\d+)?").unwrap();
}

/// Message attached to results nobody could interpret
pub fn not_understood(input: &str) -> String {
    format!(
        "Could not understand: \"{}\". Try saying something like \"5 plus 3\", \"convert 10 miles to kilometers\", or \"square root of 144\".",
        input
    )
}

/// Interprets utterances with a fixed number format
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    format: NumberFormat,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(format: NumberFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Interpret one utterance. Never fails: problems are reported in `error`.
    pub fn process(&self, input: &str) -> CalculationResult {
        if input.trim().is_empty() {
            return CalculationResult::failure(input, "", NO_INPUT);
        }

        for matcher in DISPATCH_ORDER.iter() {
            if let Some(result) = matcher.try_match(input, &self.format) {
                debug!("{:?} matched {:?}: {}", matcher, input, result);
                return result;
            }
        }

        debug!("no matcher accepted {:?}", input);
        CalculationResult::failure(input, input, not_understood(input))
    }
}

/// Interpret one utterance with the default en-US number format
pub fn process_voice_input(input: &str) -> CalculationResult {
    Calculator::new().process(input)
}

/// First number in a formatted result, e.g. `8.04672` from `"8.04672 kilometers"`.
/// A comma is read as a decimal point, so grouped values such as `"1,024"` come back as `1.024`.
pub fn extract_numeric(result: &str) -> Option<f64> {
    let m = NUMERIC.find(result)?;
    m.as_str().replacen(',', ".", 1).parse::<f64>().ok()
}
