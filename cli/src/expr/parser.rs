use crate::expr::lexer::{tokenize, Spanned, Token};

/// Nesting limit for parentheses and unary operators
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

/// Parsed arithmetic expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Neg(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// IEEE semantics: division by zero gives an infinity, `0/0` gives NaN
    pub fn eval(&self) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Neg(inner) => -inner.eval(),
            Expr::Binary(op, lhs, rhs) => {
                let (a, b) = (lhs.eval(), rhs.eval());
                match op {
                    BinaryOp::Add => a + b,
                    BinaryOp::Sub => a - b,
                    BinaryOp::Mul => a * b,
                    BinaryOp::Div => a / b,
                    BinaryOp::Rem => a % b,
                    BinaryOp::Pow => a.powf(b),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    EmptyExpression,
    UnexpectedChar(char, usize),
    InvalidNumber(String, usize),
    UnexpectedToken(String, usize),
    UnexpectedEnd,
    UnbalancedParens(usize),
    TooDeep,
    NonFinite(f64),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::EmptyExpression => write!(f, "Expression is empty"),
            EvalError::UnexpectedChar(c, pos) => {
                write!(f, "Unexpected character '{}' at position {}", c, pos)
            }
            EvalError::InvalidNumber(s, pos) => {
                write!(f, "Invalid number '{}' at position {}", s, pos)
            }
            EvalError::UnexpectedToken(t, pos) => {
                write!(f, "Unexpected '{}' at position {}", t, pos)
            }
            EvalError::UnexpectedEnd => write!(f, "Unexpected end of expression"),
            EvalError::UnbalancedParens(pos) => {
                write!(f, "Unclosed parenthesis opened at position {}", pos)
            }
            EvalError::TooDeep => write!(f, "Expression nests deeper than {}", MAX_DEPTH),
            EvalError::NonFinite(v) => write!(f, "Result is not a finite number ({})", v),
        }
    }
}

impl std::error::Error for EvalError {}

// Grammar, lowest precedence first:
//   sum     := product (('+' | '-') product)*
//   product := unary (('*' | '/' | '%') unary)*
//   unary   := ('+' | '-') unary | power
//   power   := primary ('**' unary)?
//   primary := NUMBER | '(' sum ')'
struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn next(&mut self) -> Option<Spanned> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn enter(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::TooDeep);
        }
        Ok(())
    }

    fn sum(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.product()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.product()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn product(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                Some(Token::Percent) => BinaryOp::Rem,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn unary(&mut self) -> Result<Expr, EvalError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                self.enter()?;
                let inner = self.unary()?;
                self.depth -= 1;
                Ok(Expr::Neg(Box::new(inner)))
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.enter()?;
                let inner = self.unary()?;
                self.depth -= 1;
                Ok(inner)
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, EvalError> {
        let base = self.primary()?;
        if self.peek() == Some(&Token::Power) {
            self.pos += 1;
            self.enter()?;
            let exponent = self.unary()?;
            self.depth -= 1;
            return Ok(Expr::Binary(BinaryOp::Pow, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, EvalError> {
        match self.next() {
            Some((Token::Number(n), _)) => Ok(Expr::Number(n)),
            Some((Token::LParen, open)) => {
                self.enter()?;
                let inner = self.sum()?;
                self.depth -= 1;
                match self.next() {
                    Some((Token::RParen, _)) => Ok(inner),
                    Some((token, pos)) => Err(EvalError::UnexpectedToken(token.describe(), pos)),
                    None => Err(EvalError::UnbalancedParens(open)),
                }
            }
            Some((token, pos)) => Err(EvalError::UnexpectedToken(token.describe(), pos)),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

/// Parse an expression over `+ - * / % ** ( )` and numbers
pub fn parse_expression(input: &str) -> Result<Expr, EvalError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.sum()?;

    if let Some((token, pos)) = parser.next() {
        return Err(EvalError::UnexpectedToken(token.describe(), pos));
    }
    Ok(expr)
}

/// Parse and evaluate; infinite or NaN results are reported as errors
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let value = parse_expression(input)?.eval();
    if !value.is_finite() {
        return Err(EvalError::NonFinite(value));
    }
    Ok(value)
}
