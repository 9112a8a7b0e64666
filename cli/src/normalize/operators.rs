use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Spoken operator phrases and their symbols, applied in this order
    static ref OPERATOR_PHRASES: Vec<(Regex, &'static str)> = [
        (r"\bplus\b", "+"),
        (r"\badd\b", "+"),
        (r"\baddition\b", "+"),
        (r"\bminus\b", "-"),
        (r"\bsubtract\b", "-"),
        (r"\bsubtraction\b", "-"),
        (r"\btake\s+away\b", "-"),
        (r"\btimes\b", "*"),
        (r"\bmultiply\b", "*"),
        (r"\bmultiplied\s+by\b", "*"),
        (r"\bmultiplication\b", "*"),
        (r"\bx\b", "*"),
        (r"\bdivided\s+by\b", "/"),
        (r"\bdivide\b", "/"),
        (r"\bdivision\b", "/"),
        (r"\bover\b", "/"),
        (r"\bmodulo\b", "%"),
        (r"\bmod\b", "%"),
        (r"\bremainder\s+of\b", "%"),
    ]
    .iter()
    .map(|(pattern, symbol)| (Regex::new(&format!("(?i){}", pattern)).unwrap(), *symbol))
    .collect();

    static ref FILLER_PREFIXES: Vec<Regex> = [
        r"(?i)^what\s+is\s+",
        r"(?i)^calculate\s+",
        r"(?i)^compute\s+",
        r"(?i)^what's\s+",
        r"(?i)^how\s+much\s+is\s+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
}

/// Rewrite spoken operators ("plus", "divided by", "x", "mod", ...) into symbols
pub fn rewrite_operators(text: &str) -> String {
    OPERATOR_PHRASES
        .iter()
        .fold(text.to_string(), |acc, (re, symbol)| {
            re.replace_all(&acc, *symbol).into_owned()
        })
}

/// Drop a leading "what is"/"calculate"/... and one trailing question mark
pub fn strip_filler(text: &str) -> String {
    let stripped = FILLER_PREFIXES
        .iter()
        .fold(text.to_string(), |acc, re| re.replace(&acc, "").into_owned());
    let stripped = stripped.strip_suffix('?').unwrap_or(&stripped);
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_basic_operators() {
        assert_eq!(rewrite_operators("5 plus 3"), "5 + 3");
        assert_eq!(rewrite_operators("10 minus 4"), "10 - 4");
        assert_eq!(rewrite_operators("6 times 7"), "6 * 7");
        assert_eq!(rewrite_operators("6 x 7"), "6 * 7");
        assert_eq!(rewrite_operators("9 divided by 3"), "9 / 3");
        assert_eq!(rewrite_operators("9 over 3"), "9 / 3");
        assert_eq!(rewrite_operators("9 modulo 4"), "9 % 4");
        assert_eq!(rewrite_operators("9 mod 4"), "9 % 4");
    }

    #[test]
    fn test_rewrite_multi_word_phrases() {
        assert_eq!(rewrite_operators("8 take away 3"), "8 - 3");
        assert_eq!(rewrite_operators("8 multiplied by 3"), "8 * 3");
        assert_eq!(rewrite_operators("remainder of 8 / 3"), "% 8 / 3");
    }

    #[test]
    fn test_rewrite_respects_word_boundaries() {
        assert_eq!(rewrite_operators("extra"), "extra");
        assert_eq!(rewrite_operators("moderate"), "moderate");
        assert_eq!(rewrite_operators("address"), "address");
    }

    #[test]
    fn test_strip_filler() {
        assert_eq!(strip_filler("what is 5 + 3?"), "5 + 3");
        assert_eq!(strip_filler("calculate 2 * 2"), "2 * 2");
        assert_eq!(strip_filler("what's 1 + 1"), "1 + 1");
        assert_eq!(strip_filler("how much is 4 / 2?"), "4 / 2");
        assert_eq!(strip_filler("5 + 3"), "5 + 3");
    }
}
