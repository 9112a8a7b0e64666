use crate::engine::result::{CalculationResult, Category};
use crate::expr;
use crate::format::NumberFormat;
use crate::normalize::normalize_spoken_expression;
use log::{debug, trace};

fn is_expression_char(c: char) -> bool {
    matches!(c, '0'..='9' | '+' | '-' | '*' | '/' | '.' | '%' | '(' | ')' | ' ')
}

/// Drop everything but digits, operators, parentheses, dots and spaces, then trim
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| is_expression_char(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalize spoken arithmetic and evaluate what remains.
/// Catch-all matcher: anything that does not reduce to a finite value is `None`.
pub fn try_arithmetic(input: &str, format: &NumberFormat) -> Option<CalculationResult> {
    let normalized = normalize_spoken_expression(input);
    let expression = sanitize(&normalized);
    trace!("arithmetic: {:?} -> {:?}", normalized, expression);

    if expression.is_empty() || !expression.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    match expr::evaluate(&expression) {
        Ok(value) => Some(CalculationResult::success(
            input,
            expression,
            format.format(value),
            Category::Arithmetic,
        )),
        Err(e) => {
            debug!("arithmetic: {:?} rejected: {}", expression, e);
            None
        }
    }
}
