use super::capture_numbers;
use crate::engine::result::{CalculationResult, Category};
use crate::format::{display_number, NumberFormat};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::f64::consts::PI;

/// Largest n whose factorial is finite as an f64
pub const MAX_FACTORIAL: f64 = 170.0;

/// Named single-step functions, listed in matching priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    SquareRoot,
    CubeRoot,
    Power,
    Squared,
    Cubed,
    LogBase,
    NaturalLog,
    Log10,
    Sine,
    Cosine,
    Tangent,
    Factorial,
    Pi,
    Absolute,
    PercentOf,
}

impl Function {
    pub fn arity(&self) -> usize {
        match self {
            Function::Pi => 0,
            Function::Power | Function::LogBase | Function::PercentOf => 2,
            _ => 1,
        }
    }

    /// Returns `(parsed, result)` for the captured operands
    fn apply(&self, v: &[f64], format: &NumberFormat) -> (String, String) {
        let n = |i: usize| display_number(v[i]);
        let (parsed, value) = match self {
            Function::SquareRoot => (format!("sqrt({})", n(0)), v[0].sqrt()),
            Function::CubeRoot => (format!("cbrt({})", n(0)), v[0].cbrt()),
            Function::Power => (format!("{}^{}", n(0), n(1)), v[0].powf(v[1])),
            Function::Squared => (format!("{}^2", n(0)), v[0].powi(2)),
            Function::Cubed => (format!("{}^3", n(0)), v[0].powi(3)),
            Function::LogBase => (format!("log_{}({})", n(0), n(1)), v[1].ln() / v[0].ln()),
            Function::NaturalLog => (format!("ln({})", n(0)), v[0].ln()),
            Function::Log10 => (format!("log({})", n(0)), v[0].log10()),
            Function::Sine => (format!("sin({}deg)", n(0)), v[0].to_radians().sin()),
            Function::Cosine => (format!("cos({}deg)", n(0)), v[0].to_radians().cos()),
            Function::Tangent => (format!("tan({}deg)", n(0)), v[0].to_radians().tan()),
            Function::Factorial => {
                let parsed = format!("{}!", n(0));
                if v[0] > MAX_FACTORIAL {
                    return (parsed, "Infinity".to_string());
                }
                (parsed, factorial(v[0] as u32))
            }
            Function::Pi => ("pi".to_string(), PI),
            Function::Absolute => (format!("|{}|", n(0)), v[0].abs()),
            Function::PercentOf => (format!("{}% of {}", n(0), n(1)), (v[0] / 100.0) * v[1]),
        };
        (parsed, format.format(value))
    }
}

/// n! as a running f64 product
pub fn factorial(n: u32) -> f64 {
    (2..=n).fold(1.0, |acc, i| acc * f64::from(i))
}

lazy_static! {
    static ref PATTERNS: Vec<(Function, Regex)> = vec![
        (Function::SquareRoot, Regex::new(r"(?i)(?:square\s+root\s+of|sqrt\s+of?|sqrt)\s+([\d.]+)").unwrap()),
        (Function::SquareRoot, Regex::new(r"(?i)(?:what\s+is\s+the\s+)?square\s+root\s+of\s+([\d.]+)").unwrap()),
        (Function::CubeRoot, Regex::new(r"(?i)(?:cube\s+root\s+of|cbrt)\s+([\d.]+)").unwrap()),
        (Function::Power, Regex::new(r"(?i)([\d.]+)\s+(?:to\s+the\s+power\s+of|raised\s+to|power)\s+([\d.]+)").unwrap()),
        (Function::Squared, Regex::new(r"(?i)([\d.]+)\s+(?:squared|square)").unwrap()),
        (Function::Cubed, Regex::new(r"(?i)([\d.]+)\s+cubed").unwrap()),
        (Function::LogBase, Regex::new(r"(?i)(?:log\s+base)\s+([\d.]+)\s+(?:of)\s+([\d.]+)").unwrap()),
        (Function::NaturalLog, Regex::new(r"(?i)(?:natural\s+log\s+of|ln\s+of?|ln)\s+([\d.]+)").unwrap()),
        (Function::Log10, Regex::new(r"(?i)(?:log\s+of|log|logarithm\s+of|logarithm)\s+([\d.]+)").unwrap()),
        // Word boundary keeps "cosine" from being read as "sine"
        (Function::Sine, Regex::new(r"(?i)\b(?:sine|sin)\s+(?:of\s+)?([\d.]+)\s*(?:degrees|deg)?").unwrap()),
        (Function::Cosine, Regex::new(r"(?i)\b(?:cosine|cos)\s+(?:of\s+)?([\d.]+)\s*(?:degrees|deg)?").unwrap()),
        (Function::Tangent, Regex::new(r"(?i)\b(?:tangent|tan)\s+(?:of\s+)?([\d.]+)\s*(?:degrees|deg)?").unwrap()),
        (Function::Factorial, Regex::new(r"(?i)(?:factorial\s+of|factorial)\s+(\d+)").unwrap()),
        (Function::Pi, Regex::new(r"(?i)\bpi\b").unwrap()),
        (Function::Absolute, Regex::new(r"(?i)(?:absolute\s+value\s+of|abs)\s+(-?[\d.]+)").unwrap()),
        (Function::PercentOf, Regex::new(r"(?i)(?:what\s+is\s+)?([\d.]+)\s*(?:percent|%)\s+of\s+([\d.]+)").unwrap()),
    ];

    /// A bare "pi" inside arithmetic belongs to the arithmetic matcher
    static ref ARITHMETIC_WORDS: Regex =
        Regex::new(r"(?i)\bplus\b|\bminus\b|\btimes\b|\bdivided\b").unwrap();
}

/// Recognise a named scientific function applied to literal operands
pub fn try_scientific(input: &str, format: &NumberFormat) -> Option<CalculationResult> {
    let lower = input.trim().to_lowercase();

    for (function, pattern) in PATTERNS.iter() {
        let caps = match pattern.captures(&lower) {
            Some(caps) => caps,
            None => continue,
        };
        if *function == Function::Pi && ARITHMETIC_WORDS.is_match(&lower) {
            continue;
        }
        let operands = match capture_numbers(&caps, function.arity()) {
            Some(values) => values,
            None => continue,
        };

        let (parsed, result) = function.apply(&operands, format);
        debug!("scientific: {:?} {:?} -> {}", function, operands, result);
        return Some(CalculationResult::success(
            input,
            parsed,
            result,
            Category::Scientific,
        ));
    }

    None
}
