use super::capture_numbers;
use crate::engine::result::{CalculationResult, Category};
use crate::format::{display_number, NumberFormat};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::f64::consts::PI;

/// Geometry and body-measure formulas, in matching order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    CircleArea,
    Circumference,
    RectangleArea,
    TriangleArea,
    SphereVolume,
    CylinderVolume,
    RectanglePerimeter,
    Hypotenuse,
    BodyMassIndex,
}

impl Formula {
    /// Number of operands the phrasing captures
    pub fn arity(&self) -> usize {
        match self {
            Formula::CircleArea | Formula::Circumference | Formula::SphereVolume => 1,
            _ => 2,
        }
    }

    /// Canonical rendering of the formula with its operands filled in
    fn parsed(&self, v: &[f64]) -> String {
        let n = |i: usize| display_number(v[i]);
        match self {
            Formula::CircleArea => format!("pi * {}^2", n(0)),
            Formula::Circumference => format!("2 * pi * {}", n(0)),
            Formula::RectangleArea => format!("{} x {}", n(0), n(1)),
            Formula::TriangleArea => format!("0.5 * {} * {}", n(0), n(1)),
            Formula::SphereVolume => format!("(4/3) * pi * {}^3", n(0)),
            Formula::CylinderVolume => format!("pi * {}^2 * {}", n(0), n(1)),
            Formula::RectanglePerimeter => format!("2 * ({} + {})", n(0), n(1)),
            Formula::Hypotenuse => format!("sqrt({}^2 + {}^2)", n(0), n(1)),
            Formula::BodyMassIndex => format!("{}kg / ({}m)^2", n(0), n(1)),
        }
    }

    fn compute(&self, v: &[f64]) -> f64 {
        match self {
            Formula::CircleArea => PI * v[0] * v[0],
            Formula::Circumference => 2.0 * PI * v[0],
            Formula::RectangleArea => v[0] * v[1],
            Formula::TriangleArea => 0.5 * v[0] * v[1],
            Formula::SphereVolume => (4.0 / 3.0) * PI * v[0].powi(3),
            Formula::CylinderVolume => PI * v[0] * v[0] * v[1],
            Formula::RectanglePerimeter => 2.0 * (v[0] + v[1]),
            Formula::Hypotenuse => (v[0] * v[0] + v[1] * v[1]).sqrt(),
            Formula::BodyMassIndex => v[0] / (v[1] * v[1]),
        }
    }

    fn render(&self, value: f64, format: &NumberFormat) -> String {
        let number = format.format(value);
        match self {
            Formula::CircleArea | Formula::RectangleArea | Formula::TriangleArea => {
                format!("{} sq units", number)
            }
            Formula::SphereVolume | Formula::CylinderVolume => format!("{} cubic units", number),
            Formula::Circumference | Formula::RectanglePerimeter | Formula::Hypotenuse => {
                format!("{} units", number)
            }
            Formula::BodyMassIndex => format!("{} ({})", number, bmi_band(value)),
        }
    }
}

/// WHO-style adult band for a body mass index
pub fn bmi_band(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

lazy_static! {
    static ref PATTERNS: Vec<(Formula, Regex)> = vec![
        (
            Formula::CircleArea,
            Regex::new(r"(?i)(?:area\s+of\s+(?:a\s+)?circle\s+(?:with\s+)?(?:radius|r)\s+)([\d.]+)").unwrap(),
        ),
        (
            Formula::Circumference,
            Regex::new(r"(?i)(?:circumference\s+of\s+(?:a\s+)?circle\s+(?:with\s+)?(?:radius|r)\s+)([\d.]+)").unwrap(),
        ),
        (
            Formula::RectangleArea,
            Regex::new(r"(?i)(?:area\s+of\s+(?:a\s+)?rectangle)\s+([\d.]+)\s+(?:by|x|times)\s+([\d.]+)").unwrap(),
        ),
        (
            Formula::TriangleArea,
            Regex::new(r"(?i)(?:area\s+of\s+(?:a\s+)?triangle)\s+(?:(?:with\s+)?base\s+)?([\d.]+)\s+(?:(?:and\s+)?height\s+|(?:by|x)\s+)([\d.]+)").unwrap(),
        ),
        (
            Formula::SphereVolume,
            Regex::new(r"(?i)(?:volume\s+of\s+(?:a\s+)?sphere\s+(?:with\s+)?(?:radius|r)\s+)([\d.]+)").unwrap(),
        ),
        (
            Formula::CylinderVolume,
            Regex::new(r"(?i)(?:volume\s+of\s+(?:a\s+)?cylinder)\s+(?:(?:with\s+)?radius\s+)?([\d.]+)\s+(?:(?:and\s+)?height\s+|(?:by|x)\s+)([\d.]+)").unwrap(),
        ),
        (
            Formula::RectanglePerimeter,
            Regex::new(r"(?i)(?:perimeter\s+of\s+(?:a\s+)?rectangle)\s+([\d.]+)\s+(?:by|x|times)\s+([\d.]+)").unwrap(),
        ),
        (
            Formula::Hypotenuse,
            Regex::new(r"(?i)(?:hypotenuse|hyp)\s+([\d.]+)\s+(?:and|by)\s+([\d.]+)").unwrap(),
        ),
        (
            Formula::BodyMassIndex,
            Regex::new(r"(?i)(?:bmi|body\s+mass\s+index)\s+([\d.]+)\s*(?:kg|kilograms?)?\s+(?:and|height)?\s*([\d.]+)\s*(?:m|meters?|metres?)?").unwrap(),
        ),
    ];
}

/// Recognise a geometry or BMI request and evaluate its formula
pub fn try_measurement(input: &str, format: &NumberFormat) -> Option<CalculationResult> {
    let lower = input.trim().to_lowercase();

    for (formula, pattern) in PATTERNS.iter() {
        let caps = match pattern.captures(&lower) {
            Some(caps) => caps,
            None => continue,
        };
        // A phrasing whose operands do not parse is treated as no match
        let operands = match capture_numbers(&caps, formula.arity()) {
            Some(values) => values,
            None => continue,
        };

        let value = formula.compute(&operands);
        debug!("measurement: {:?} {:?} = {}", formula, operands, value);
        return Some(CalculationResult::success(
            input,
            formula.parsed(&operands),
            formula.render(value, format),
            Category::Measurement,
        ));
    }

    None
}
