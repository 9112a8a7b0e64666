use serde::{Deserialize, Serialize};

/// Upper bound for `max_fraction_digits`; anything above is clamped
pub const MAX_FRACTION_DIGITS: usize = 20;

// Extra digits requested from the exact decimal expansion before rounding.
// A double cannot sit closer than this to a rounding tie without being the tie.
const GUARD_DIGITS: usize = 30;

/// How numeric results are rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Inserted between groups of three integer digits
    pub group_separator: String,
    /// Placed between the integer and fractional parts
    pub decimal_separator: String,
    /// Non-integers are rounded to at most this many decimals
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            max_fraction_digits: 8,
        }
    }
}

impl NumberFormat {
    /// Render a number: integers with digit grouping and no decimal point,
    /// everything else rounded to `max_fraction_digits` with trailing zeros stripped.
    pub fn format(&self, n: f64) -> String {
        if n.is_nan() {
            return "NaN".to_string();
        }
        if n.is_infinite() {
            return if n > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        if n.fract() == 0.0 {
            return self.assemble(&format!("{}", n.abs()), "", n < 0.0);
        }

        let digits = self.max_fraction_digits.min(MAX_FRACTION_DIGITS);
        let fixed = to_fixed(n, digits);
        let rounded = match fixed.parse::<f64>() {
            Ok(v) => v,
            Err(_) => return fixed,
        };

        // Shortest round-trip form of the rounded value; never longer than `fixed`
        let shortest = format!("{}", rounded.abs());
        let (int_part, frac_part) = shortest
            .split_once('.')
            .unwrap_or((shortest.as_str(), ""));
        self.assemble(int_part, frac_part.trim_end_matches('0'), rounded < 0.0)
    }

    fn assemble(&self, int_digits: &str, frac_digits: &str, negative: bool) -> String {
        let mut out = String::with_capacity(int_digits.len() + frac_digits.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(&group_digits(int_digits, &self.group_separator));
        if !frac_digits.is_empty() {
            out.push_str(&self.decimal_separator);
            out.push_str(frac_digits);
        }
        out
    }
}

/// Format with the default en-US style: `1,234.5678`
pub fn format_number(n: f64) -> String {
    NumberFormat::default().format(n)
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Fixed-point rendering with exactly `digits` decimals.
/// Ties round away from zero, working on the exact decimal expansion of `n`.
pub fn to_fixed(n: f64, digits: usize) -> String {
    let exact = format!("{:.*}", digits + GUARD_DIGITS, n.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .map_or(false, |d| *d >= b'5');

    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if n < 0.0 {
        out.push('-');
    }
    out.extend(kept[..int_len].iter().map(|b| *b as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|b| *b as char));
    }
    out
}

/// Plain rendering of an operand as it appears inside a `parsed` string,
/// e.g. `5`, `1.75`, `1e-7`, `1e+21`.
pub fn display_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let abs = v.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let s = format!("{:e}", v);
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        };
    }
    format!("{}", v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_are_grouped() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(-653.0), "-653");
        assert_eq!(format_number(-1000000.0), "-1,000,000");
    }

    #[test]
    fn test_fractions_are_rounded_and_trimmed() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(8.04672), "8.04672");
        assert_eq!(format_number(37.77777777777778), "37.77777778");
        assert_eq!(format_number(std::f64::consts::PI), "3.14159265");
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(-0.25), "-0.25");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_rounding_can_reach_an_integer() {
        assert_eq!(format_number(2.999999999999), "3");
        assert_eq!(format_number(999.999999999), "1,000");
    }

    #[test]
    fn test_negative_zero_after_rounding() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.000000001), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY), "-∞");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_large_integers_keep_shortest_digits() {
        assert_eq!(format_number(1e21), "1,000,000,000,000,000,000,000");
    }

    #[test]
    fn test_to_fixed_rounds_half_away_from_zero() {
        assert_eq!(to_fixed(0.001953125, 8), "0.00195313");
        assert_eq!(to_fixed(-0.001953125, 8), "-0.00195313");
        assert_eq!(to_fixed(1.005, 2), "1.00"); // 1.005 is slightly below the tie
        assert_eq!(to_fixed(9.9999, 2), "10.00");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_custom_separators() {
        let fmt = NumberFormat {
            group_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            max_fraction_digits: 2,
        };
        assert_eq!(fmt.format(1234567.891), "1.234.567,89");
        assert_eq!(fmt.format(1000.0), "1.000");
    }

    #[test]
    fn test_deterministic() {
        let n = 12345.678901234;
        assert_eq!(format_number(n), format_number(n));
    }

    #[test]
    fn test_display_number() {
        assert_eq!(display_number(5.0), "5");
        assert_eq!(display_number(1.75), "1.75");
        assert_eq!(display_number(-0.0), "0");
        assert_eq!(display_number(0.0000001), "1e-7");
        assert_eq!(display_number(1e21), "1e+21");
        assert_eq!(display_number(123456.0), "123456");
    }
}
