// Phrase matchers. Each one recognises a single category of phrasing and either
// returns a finished result or `None`; the dispatcher tries them in `DISPATCH_ORDER`.

pub mod arithmetic;
pub mod conversion;
pub mod measurement;
pub mod scientific;

use crate::engine::result::{CalculationResult, Category};
use crate::format::NumberFormat;
use crate::normalize::parse_leading_float;
use regex::Captures;

pub use arithmetic::try_arithmetic;
pub use conversion::try_conversion;
pub use measurement::try_measurement;
pub use scientific::try_scientific;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Conversion,
    Measurement,
    Scientific,
    Arithmetic,
}

/// Most specific first; arithmetic is the catch-all and must stay last
pub const DISPATCH_ORDER: [Matcher; 4] = [
    Matcher::Conversion,
    Matcher::Measurement,
    Matcher::Scientific,
    Matcher::Arithmetic,
];

impl Matcher {
    pub fn category(&self) -> Category {
        match self {
            Matcher::Conversion => Category::Conversion,
            Matcher::Measurement => Category::Measurement,
            Matcher::Scientific => Category::Scientific,
            Matcher::Arithmetic => Category::Arithmetic,
        }
    }

    pub fn try_match(&self, input: &str, format: &NumberFormat) -> Option<CalculationResult> {
        match self {
            Matcher::Conversion => try_conversion(input, format),
            Matcher::Measurement => try_measurement(input, format),
            Matcher::Scientific => try_scientific(input, format),
            Matcher::Arithmetic => try_arithmetic(input, format),
        }
    }
}

/// Numeric value of capture group `index`, if present and parseable
pub(crate) fn capture_number(caps: &Captures, index: usize) -> Option<f64> {
    caps.get(index)
        .and_then(|m| parse_leading_float(m.as_str()))
}

/// Numeric values of capture groups `1..=count`; `None` if any is missing
pub(crate) fn capture_numbers(caps: &Captures, count: usize) -> Option<Vec<f64>> {
    (1..=count).map(|i| capture_number(caps, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_order() {
        let categories: Vec<Category> = DISPATCH_ORDER.iter().map(|m| m.category()).collect();
        assert_eq!(
            categories,
            vec![
                Category::Conversion,
                Category::Measurement,
                Category::Scientific,
                Category::Arithmetic
            ]
        );
    }

    #[test]
    fn test_each_matcher_reports_its_category() {
        let format = NumberFormat::default();
        let cases = [
            (Matcher::Conversion, "5 miles to km"),
            (Matcher::Measurement, "hypotenuse 3 and 4"),
            (Matcher::Scientific, "cube root of 27"),
            (Matcher::Arithmetic, "6 times 7"),
        ];
        for (matcher, input) in cases {
            let result = matcher.try_match(input, &format).expect(input);
            assert_eq!(result.category, matcher.category());
            assert!(result.error.is_none());
            assert!(!result.result.is_empty());
        }
    }
}
