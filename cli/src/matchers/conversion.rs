use crate::engine::result::{CalculationResult, Category};
use crate::format::{display_number, NumberFormat};
use crate::normalize::parse_leading_float;
use crate::units::{convert_temperature, TemperatureUnit, SORTED_TABLES};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    /// "<value> [degrees] <scale> to|in|into [degrees] <scale>"
    static ref TEMPERATURE_PATTERN: Regex = Regex::new(
        r"(?i)(?:convert\s+)?(-?[\d.]+)\s*(?:degrees?\s*)?(celsius|fahrenheit|kelvin|c|f|k)\s+(?:to|in|into)\s+(?:degrees?\s*)?(celsius|fahrenheit|kelvin|c|f|k)"
    )
    .unwrap();
}

/// The three phrasings tried for every ordered unit pair, in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phrasing {
    /// `[convert] <value> <from> to|in|into <to>`
    ValueToUnit,
    /// `[what is] <value> <from> in <to>`
    ValueInUnit,
    /// `how many <to> in|are in <value> <from>`
    HowMany,
}

const PHRASINGS: [Phrasing; 3] = [Phrasing::ValueToUnit, Phrasing::ValueInUnit, Phrasing::HowMany];

/// Recognise a unit conversion request and compute it
pub fn try_conversion(input: &str, format: &NumberFormat) -> Option<CalculationResult> {
    let lower = input.trim().to_lowercase();

    if let Some(result) = try_temperature(input, &lower, format) {
        return Some(result);
    }

    let runs = number_runs(&lower);
    if runs.is_empty() {
        return None;
    }

    for (table, names) in SORTED_TABLES.iter() {
        for from_unit in names {
            // Cheap rejection before trying every target
            if !lower.contains(from_unit) {
                continue;
            }
            for to_unit in names {
                if from_unit == to_unit || !lower.contains(to_unit) {
                    continue;
                }
                for phrasing in PHRASINGS {
                    let captured = match match_phrasing(&lower, &runs, phrasing, from_unit, to_unit) {
                        Some(text) => text,
                        None => continue,
                    };
                    let value = match parse_leading_float(captured) {
                        Some(v) => v,
                        None => continue,
                    };
                    let (from_factor, to_factor) =
                        match (table.factor(from_unit), table.factor(to_unit)) {
                            (Some(f), Some(t)) => (f, t),
                            _ => continue,
                        };

                    let converted = value * from_factor / to_factor;
                    debug!(
                        "conversion: {} {} -> {} ({:?}, {})",
                        value, from_unit, to_unit, phrasing, table.quantity
                    );
                    return Some(CalculationResult::success(
                        input,
                        format!("{} {} to {}", display_number(value), from_unit, to_unit),
                        format!("{} {}", format.format(converted), to_unit),
                        Category::Conversion,
                    ));
                }
            }
        }
    }

    None
}

fn try_temperature(input: &str, lower: &str, format: &NumberFormat) -> Option<CalculationResult> {
    let caps = TEMPERATURE_PATTERN.captures(lower)?;
    let value = parse_leading_float(caps.get(1)?.as_str())?;
    let from = TemperatureUnit::from_name(caps.get(2)?.as_str())?;
    let to = TemperatureUnit::from_name(caps.get(3)?.as_str())?;

    let converted = convert_temperature(value, from, to);
    debug!("conversion: temperature {} {} -> {}", value, from, to);
    Some(CalculationResult::success(
        input,
        format!("{} {} to {}", display_number(value), from, to),
        format!("{} {}", format.format(converted), to),
        Category::Conversion,
    ))
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-' || c == '.'
}

/// Byte ranges of every maximal run of `[-0-9.]`, left to right
fn number_runs(text: &str) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in text.char_indices() {
        match (is_number_char(c), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s, text.len()));
    }
    runs
}

/// Position of the first non-whitespace character at or after `at`
fn skip_whitespace(text: &str, at: usize) -> usize {
    text[at..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(text.len(), |(i, _)| at + i)
}

/// Like `skip_whitespace`, but at least one whitespace character is required
fn skip_required_whitespace(text: &str, at: usize) -> Option<usize> {
    let next = skip_whitespace(text, at);
    if next > at {
        Some(next)
    } else {
        None
    }
}

/// If `text[at..]` starts with `word`, the position just past it
fn expect(text: &str, at: usize, word: &str) -> Option<usize> {
    if text[at..].starts_with(word) {
        Some(at + word.len())
    } else {
        None
    }
}

/// Returns the numeric text captured by `phrasing` for this unit pair.
/// Equivalent to searching the phrasing as an unanchored pattern: the leftmost
/// match wins and the target unit only needs to be a prefix of what follows.
fn match_phrasing<'a>(
    text: &'a str,
    runs: &[(usize, usize)],
    phrasing: Phrasing,
    from_unit: &str,
    to_unit: &str,
) -> Option<&'a str> {
    match phrasing {
        Phrasing::ValueToUnit => value_then_units(text, runs, from_unit, &["to", "in", "into"], to_unit),
        Phrasing::ValueInUnit => value_then_units(text, runs, from_unit, &["in"], to_unit),
        Phrasing::HowMany => how_many(text, from_unit, to_unit),
    }
}

// <number> \s* <from> \s+ <keyword> \s+ <to>
fn value_then_units<'a>(
    text: &'a str,
    runs: &[(usize, usize)],
    from_unit: &str,
    keywords: &[&str],
    to_unit: &str,
) -> Option<&'a str> {
    for &(start, end) in runs {
        let matched = (|| {
            let at = expect(text, skip_whitespace(text, end), from_unit)?;
            let at = skip_required_whitespace(text, at)?;
            keywords.iter().find_map(|keyword| {
                let after = expect(text, at, keyword)?;
                let after = skip_required_whitespace(text, after)?;
                expect(text, after, to_unit)
            })
        })();
        if matched.is_some() {
            return Some(&text[start..end]);
        }
    }
    None
}

// how \s+ many \s+ <to> \s+ (in | are \s+ in) \s+ <number> \s* <from>
fn how_many<'a>(text: &'a str, from_unit: &str, to_unit: &str) -> Option<&'a str> {
    for (idx, _) in text.match_indices("how") {
        let found = (|| {
            let at = skip_required_whitespace(text, idx + "how".len())?;
            let at = expect(text, at, "many")?;
            let at = skip_required_whitespace(text, at)?;
            let at = expect(text, at, to_unit)?;
            let at = skip_required_whitespace(text, at)?;

            let keyword_ends = [
                expect(text, at, "in"),
                expect(text, at, "are")
                    .and_then(|a| skip_required_whitespace(text, a))
                    .and_then(|a| expect(text, a, "in")),
            ];
            keyword_ends.into_iter().flatten().find_map(|after| {
                let start = skip_required_whitespace(text, after)?;
                let len = text[start..]
                    .char_indices()
                    .find(|(_, c)| !is_number_char(*c))
                    .map_or(text.len() - start, |(i, _)| i);
                if len == 0 {
                    return None;
                }
                let end = start + len;
                expect(text, skip_whitespace(text, end), from_unit)?;
                Some((start, end))
            })
        })();
        if let Some((start, end)) = found {
            return Some(&text[start..end]);
        }
    }
    None
}
