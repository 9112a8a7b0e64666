// Arithmetic expression evaluator: tokenizer plus recursive-descent parser.
// Operates on plain data only; there is no code-execution path.

pub mod lexer;
pub mod parser;


pub use lexer::{tokenize, Token};
pub use parser::{evaluate, parse_expression, BinaryOp, EvalError, Expr, MAX_DEPTH};
