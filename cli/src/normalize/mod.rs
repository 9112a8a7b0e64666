// Lexical normalization of spoken arithmetic: number words to digits,
// operator phrases to symbols, filler phrases removed.

pub mod number_words;
pub mod operators;

use lazy_static::lazy_static;
use regex::Regex;

pub use number_words::{expand_number_words, number_word_value, NUMBER_WORDS};
pub use operators::{rewrite_operators, strip_filler};

lazy_static! {
    /// Longest numeric prefix: optional sign, digits with an optional fraction, optional exponent
    static ref LEADING_FLOAT: Regex =
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap();
}

/// Lowercase, trim and run every normalization step in order
pub fn normalize_spoken_expression(text: &str) -> String {
    let lower = text.to_lowercase();
    let expanded = expand_number_words(lower.trim());
    let symbolic = rewrite_operators(&expanded);
    strip_filler(&symbolic)
}

/// Parse the longest numeric prefix of `s`, ignoring leading whitespace.
/// `"1.2.3"` gives 1.2, `"5-3"` gives 5, `"-"` and `"."` give `None`.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let m = LEADING_FLOAT.find(s.trim_start())?;
    m.as_str().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("144"), Some(144.0));
        assert_eq!(parse_leading_float("1.75"), Some(1.75));
        assert_eq!(parse_leading_float("-20"), Some(-20.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("5."), Some(5.0));
        assert_eq!(parse_leading_float("1.2.3"), Some(1.2));
        assert_eq!(parse_leading_float("5-3"), Some(5.0));
        assert_eq!(parse_leading_float("  7"), Some(7.0));
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("--5"), None);
        assert_eq!(parse_leading_float(""), None);
    }

    #[test]
    fn test_normalize_spoken_expression() {
        assert_eq!(normalize_spoken_expression("What is 25 plus 17?"), "25 + 17");
        assert_eq!(
            normalize_spoken_expression("  Twenty three times four "),
            "23 * 4"
        );
        assert_eq!(
            normalize_spoken_expression("how much is 100 divided by 8"),
            "100 / 8"
        );
        assert_eq!(normalize_spoken_expression("calculate 7 mod 3"), "7 % 3");
    }
}
