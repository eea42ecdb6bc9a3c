//! Expression evaluation
//!
//! Evaluates both notations of an expression over `i64` so that a postfix
//! conversion can be checked against its infix source:
//! - [`evaluate_postfix`]: classic value-stack evaluation
//! - [`evaluate_infix`]: value and operator stacks with the same precedence
//!   and left-to-right associativity as the converter
//!
//! Digit operands stand for their own value unless rebound. Letter operands
//! must be present in the [`Bindings`]. Division truncates toward zero.
//!
//! Both evaluators visit operands and apply operators in the same
//! post-order, so a faulty expression fails with the same [`EvalError`]
//! in either notation.

use crate::converter::token::{Operator, Token};
use rustc_hash::FxHashMap;
use std::fmt;

/// Operand values keyed by their single-character name
pub type Bindings = FxHashMap<char, i64>;

#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Letter operand with no binding
    UnboundOperand(char),

    DivisionByZero,

    /// Result does not fit in an `i64`
    Overflow { op: Operator, lhs: i64, rhs: i64 },

    /// Operator with fewer than two values available
    StackUnderflow { op: Operator },

    /// Expression does not have the expected shape
    Malformed(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnboundOperand(c) => write!(f, "No value bound to operand '{}'", c),
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::Overflow { op, lhs, rhs } => {
                write!(f, "Integer overflow in {} {} {}", lhs, op, rhs)
            }
            EvalError::StackUnderflow { op } => {
                write!(f, "Operator '{}' is missing an operand", op)
            }
            EvalError::Malformed(message) => write!(f, "Malformed expression: {}", message),
        }
    }
}

impl std::error::Error for EvalError {}

fn operand_value(c: char, bindings: &Bindings) -> Result<i64, EvalError> {
    if let Some(value) = bindings.get(&c) {
        return Ok(*value);
    }
    c.to_digit(10)
        .map(i64::from)
        .ok_or(EvalError::UnboundOperand(c))
}

fn apply(op: Operator, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
    let result = match op {
        Operator::Add => lhs.checked_add(rhs),
        Operator::Sub => lhs.checked_sub(rhs),
        Operator::Mul => lhs.checked_mul(rhs),
        Operator::Div => {
            if rhs == 0 {
                return Err(EvalError::DivisionByZero);
            }
            lhs.checked_div(rhs)
        }
    };
    result.ok_or(EvalError::Overflow { op, lhs, rhs })
}

/// Evaluate a `=`-terminated postfix expression
pub fn evaluate_postfix(postfix: &str, bindings: &Bindings) -> Result<i64, EvalError> {
    let mut values: Vec<i64> = Vec::new();

    for c in postfix.chars() {
        match Token::classify(c) {
            Some(Token::Operand(operand)) => values.push(operand_value(operand, bindings)?),
            Some(Token::Operator(op)) => reduce(&mut values, op)?,
            Some(Token::LeftParen) | Some(Token::RightParen) => {
                return Err(EvalError::Malformed(
                    "parenthesis in postfix expression".to_string(),
                ));
            }
            Some(Token::End) => {
                return match values.as_slice() {
                    [value] => Ok(*value),
                    [] => Err(EvalError::Malformed("empty expression".to_string())),
                    rest => Err(EvalError::Malformed(format!(
                        "{} values left without an operator",
                        rest.len()
                    ))),
                };
            }
            None => {}
        }
    }

    Err(EvalError::Malformed("missing '=' end marker".to_string()))
}

/// Evaluate a `=`-terminated infix expression
///
/// Pending operators and open parentheses wait on an explicit stack and are
/// applied in the order the converter would emit them, so nesting depth is
/// bounded by memory rather than by the call stack.
pub fn evaluate_infix(infix: &str, bindings: &Bindings) -> Result<i64, EvalError> {
    let mut values: Vec<i64> = Vec::new();
    let mut pending: Vec<Token> = Vec::new();
    let mut expect_operand = true;

    for c in infix.chars() {
        let Some(token) = Token::classify(c) else {
            continue;
        };

        match (token, expect_operand) {
            (Token::Operand(operand), true) => {
                values.push(operand_value(operand, bindings)?);
                expect_operand = false;
            }
            (Token::LeftParen, true) => pending.push(Token::LeftParen),
            (Token::Operator(op), false) => {
                while let Some(&Token::Operator(stacked)) = pending.last() {
                    if stacked.priority() < op.priority() {
                        break;
                    }
                    pending.pop();
                    reduce(&mut values, stacked)?;
                }
                pending.push(token);
                expect_operand = true;
            }
            (Token::RightParen, false) => loop {
                match pending.pop() {
                    Some(Token::Operator(op)) => reduce(&mut values, op)?,
                    Some(_) => break,
                    None => return Err(EvalError::Malformed("unbalanced ')'".to_string())),
                }
            },
            (Token::End, false) => {
                while let Some(stacked) = pending.pop() {
                    match stacked {
                        Token::Operator(op) => reduce(&mut values, op)?,
                        _ => return Err(EvalError::Malformed("unbalanced '('".to_string())),
                    }
                }
                return match values.as_slice() {
                    [value] => Ok(*value),
                    _ => Err(EvalError::Malformed(format!(
                        "{} values left after evaluation",
                        values.len()
                    ))),
                };
            }
            (token, true) => {
                return Err(EvalError::Malformed(format!(
                    "expected operand, found '{}'",
                    token.as_char()
                )));
            }
            (token, false) => {
                return Err(EvalError::Malformed(format!(
                    "unexpected '{}'",
                    token.as_char()
                )));
            }
        }
    }

    Err(EvalError::Malformed("missing '=' end marker".to_string()))
}

/// Pop two values, apply `op`, push the result
fn reduce(values: &mut Vec<i64>, op: Operator) -> Result<(), EvalError> {
    let rhs = values.pop().ok_or(EvalError::StackUnderflow { op })?;
    let lhs = values.pop().ok_or(EvalError::StackUnderflow { op })?;
    values.push(apply(op, lhs, rhs)?);
    Ok(())
}

/// Values of one expression evaluated in both notations
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTrip {
    pub infix: Result<i64, EvalError>,
    pub postfix: Result<i64, EvalError>,
}

impl RoundTrip {
    pub fn check(infix: &str, postfix: &str, bindings: &Bindings) -> Self {
        RoundTrip {
            infix: evaluate_infix(infix, bindings),
            postfix: evaluate_postfix(postfix, bindings),
        }
    }

    /// Both notations produced the same value or the same error
    pub fn is_consistent(&self) -> bool {
        self.infix == self.postfix
    }
}

impl fmt::Display for RoundTrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.infix, &self.postfix) {
            (Ok(value), Ok(other)) if value == other => write!(f, "{}", value),
            (Err(err), Err(other)) if err == other => write!(f, "{}", err),
            (infix, postfix) => {
                let show = |r: &Result<i64, EvalError>| match r {
                    Ok(value) => value.to_string(),
                    Err(err) => err.to_string(),
                };
                write!(
                    f,
                    "MISMATCH: infix {}, postfix {}",
                    show(infix),
                    show(postfix)
                )
            }
        }
    }
}
