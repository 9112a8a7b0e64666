use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// English number words and their values, in replacement order
pub const NUMBER_WORDS: &[(&str, u64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
    ("hundred", 100),
    ("thousand", 1_000),
    ("million", 1_000_000),
    ("billion", 1_000_000_000),
];

lazy_static! {
    static ref COMPOUND: Regex = Regex::new(
        r"(?i)\b(twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety)\s+(one|two|three|four|five|six|seven|eight|nine)\b"
    )
    .unwrap();

    static ref SINGLE: Regex = {
        let words: Vec<&str> = NUMBER_WORDS.iter().map(|(w, _)| *w).collect();
        Regex::new(&format!(r"(?i)\b(?:{})\b", words.join("|"))).unwrap()
    };
}

/// Value of a single number word, case-insensitive
pub fn number_word_value(word: &str) -> Option<u64> {
    let lower = word.to_lowercase();
    NUMBER_WORDS
        .iter()
        .find(|(w, _)| *w == lower)
        .map(|(_, v)| *v)
}

/// Replace spoken numbers with digits.
/// Tens+ones pairs are merged first ("twenty three" -> "23"), then every
/// remaining word is replaced on its own ("one hundred" -> "1 100").
pub fn expand_number_words(text: &str) -> String {
    let merged = COMPOUND.replace_all(text, |caps: &Captures| {
        let tens = number_word_value(&caps[1]).unwrap_or(0);
        let ones = number_word_value(&caps[2]).unwrap_or(0);
        (tens + ones).to_string()
    });

    SINGLE
        .replace_all(&merged, |caps: &Captures| {
            number_word_value(&caps[0])
                .map(|v| v.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_numbers() {
        assert_eq!(expand_number_words("twenty three"), "23");
        assert_eq!(expand_number_words("ninety nine plus one"), "99 plus 1");
        assert_eq!(expand_number_words("Forty  Two"), "42");
    }

    #[test]
    fn test_single_words() {
        assert_eq!(expand_number_words("seven times eight"), "7 times 8");
        assert_eq!(expand_number_words("eighteen"), "18");
        assert_eq!(expand_number_words("twenty"), "20");
        assert_eq!(expand_number_words("one hundred"), "1 100");
        assert_eq!(expand_number_words("two million"), "2 1000000");
    }

    #[test]
    fn test_words_inside_other_words_are_kept() {
        assert_eq!(expand_number_words("someone"), "someone");
        assert_eq!(expand_number_words("often"), "often");
        assert_eq!(expand_number_words("tent"), "tent");
    }

    #[test]
    fn test_number_word_value() {
        assert_eq!(number_word_value("Thousand"), Some(1000));
        assert_eq!(number_word_value("zero"), Some(0));
        assert_eq!(number_word_value("eleventy"), None);
    }
}
