use crate::expr::parser::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    // `**`, only when the two stars are adjacent
    Power,
    LParen,
    RParen,
}

impl Token {
    pub fn describe(&self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Percent => "%".to_string(),
            Token::Power => "**".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }
}

/// A token with the byte offset where it starts
pub type Spanned = (Token, usize);

/// Split an arithmetic expression into tokens.
/// Numbers are digits with at most one `.`; "1.2.3" lexes as `1.2` followed by `.3`.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, EvalError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos];
        match c {
            b' ' | b'\t' | b'\n' | b'\r' => {
                pos += 1;
            }
            b'0'..=b'9' | b'.' => {
                let start = pos;
                let mut seen_dot = false;
                let mut seen_digit = false;
                while pos < bytes.len() {
                    match bytes[pos] {
                        b'0'..=b'9' => seen_digit = true,
                        b'.' if !seen_dot => seen_dot = true,
                        _ => break,
                    }
                    pos += 1;
                }
                if !seen_digit {
                    return Err(EvalError::UnexpectedChar('.', start));
                }
                let text = &input[start..pos];
                let value = text
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(text.to_string(), start))?;
                tokens.push((Token::Number(value), start));
            }
            b'+' => {
                tokens.push((Token::Plus, pos));
                pos += 1;
            }
            b'-' => {
                tokens.push((Token::Minus, pos));
                pos += 1;
            }
            b'*' => {
                if bytes.get(pos + 1) == Some(&b'*') {
                    tokens.push((Token::Power, pos));
                    pos += 2;
                } else {
                    tokens.push((Token::Star, pos));
                    pos += 1;
                }
            }
            b'/' => {
                tokens.push((Token::Slash, pos));
                pos += 1;
            }
            b'%' => {
                tokens.push((Token::Percent, pos));
                pos += 1;
            }
            b'(' => {
                tokens.push((Token::LParen, pos));
                pos += 1;
            }
            b')' => {
                tokens.push((Token::RParen, pos));
                pos += 1;
            }
            _ => {
                let ch = input[pos..].chars().next().unwrap_or('?');
                return Err(EvalError::UnexpectedChar(ch, pos));
            }
        }
    }

    Ok(tokens)
}
