//! Single-pass infix to postfix conversion
//!
//! The scan routes each character to one of four actions:
//! - operand: copied to the output
//! - `(`: pushed onto the operator stack
//! - `)`: [`Converter::until_left_par`] flushes the stack down to the matching `(`
//! - operator: [`Converter::do_operation`] emits every stacked operator the
//!   incoming one does not outrank, then pushes it
//!
//! On `=` the remaining stack is drained into the output, `=` is appended
//! and the scan stops. Characters outside the expression alphabet are skipped.

use super::errors::ConvertError;
use super::token::{Operator, Token, END_MARKER};
use crate::stack::CharStack;
use crate::trace::{Snapshot, StepAction, Trace};

/// Convert a well-formed, `=`-terminated infix expression to postfix
pub fn infix_to_postfix(infix: &str) -> Result<String, ConvertError> {
    Converter::new().convert(infix)
}

/// Reusable converter owning its operator stack and optional trace
#[derive(Debug, Clone, Default)]
pub struct Converter {
    stack: CharStack,
    trace: Option<Trace>,
}

impl Converter {
    /// Converter with an unbounded operator stack
    pub fn new() -> Self {
        Converter {
            stack: CharStack::new(),
            trace: None,
        }
    }

    /// Converter whose operator stack holds at most `limit` entries
    pub fn with_stack_capacity(limit: usize) -> Self {
        Converter {
            stack: CharStack::with_capacity_limit(limit),
            trace: None,
        }
    }

    /// Record a [`Snapshot`] after every scanned character
    pub fn with_trace(mut self) -> Self {
        self.trace = Some(Trace::new(""));
        self
    }

    /// Trace of the last conversion, if recording was enabled
    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    /// Take the trace of the last conversion, leaving recording enabled
    pub fn take_trace(&mut self) -> Option<Trace> {
        let trace = self.trace.as_ref().map(|t| Trace::new(t.infix()))?;
        self.trace.replace(trace)
    }

    /// Convert `infix` to postfix. The stack is empty again when this returns.
    pub fn convert(&mut self, infix: &str) -> Result<String, ConvertError> {
        self.stack.init();
        if let Some(trace) = self.trace.as_mut() {
            *trace = Trace::new(infix);
        }

        let mut output = reserve_output(infix.len())?;
        let result = self.scan(infix, &mut output);
        self.stack.init();
        result.map(|()| output)
    }

    fn scan(&mut self, infix: &str, output: &mut String) -> Result<(), ConvertError> {
        for (position, c) in infix.chars().enumerate() {
            let mark = output.len();
            let token = Token::classify(c);

            let step = match token {
                Some(Token::Operand(operand)) => {
                    output.push(operand);
                    Ok(())
                }
                Some(Token::LeftParen) => self.stack.push('(').map_err(ConvertError::from),
                Some(Token::RightParen) => self.until_left_par(output),
                Some(Token::Operator(op)) => self.do_operation(op, output),
                Some(Token::End) => {
                    self.drain(output);
                    output.push(END_MARKER);
                    Ok(())
                }
                None => Ok(()),
            };

            if let Err(err) = step {
                self.record_failure(position, &err, output);
                return Err(err);
            }
            self.record(position, c, token, mark, output);

            if token == Some(Token::End) {
                return Ok(());
            }
        }

        Err(ConvertError::MissingEndMarker)
    }

    /// Pop and emit operators until `(` is on top, then discard the `(`
    fn until_left_par(&mut self, output: &mut String) -> Result<(), ConvertError> {
        loop {
            let top = self.stack.top()?;
            self.stack.pop();
            if top == '(' {
                return Ok(());
            }
            output.push(top);
        }
    }

    /// Emit stacked operators of equal or higher priority, then push `op`
    fn do_operation(&mut self, op: Operator, output: &mut String) -> Result<(), ConvertError> {
        loop {
            match self.stack.top().ok() {
                Some(top) if top != '(' && !outranks(op, top) => {
                    output.push(top);
                    self.stack.pop();
                }
                _ => {
                    self.stack.push(op.symbol())?;
                    return Ok(());
                }
            }
        }
    }

    /// Emit everything left on the stack in pop order
    fn drain(&mut self, output: &mut String) {
        while let Ok(top) = self.stack.top() {
            output.push(top);
            self.stack.pop();
        }
    }

    fn record(
        &mut self,
        position: usize,
        c: char,
        token: Option<Token>,
        mark: usize,
        output: &str,
    ) {
        let Some(trace) = self.trace.as_mut() else {
            return;
        };

        let emitted = output[mark..].to_string();
        let action = match token {
            Some(Token::Operand(operand)) => StepAction::EmitOperand(operand),
            Some(Token::LeftParen) => StepAction::PushParen,
            Some(Token::RightParen) => StepAction::FlushParen { emitted },
            Some(Token::Operator(op)) => StepAction::ResolveOperator { op, emitted },
            Some(Token::End) => StepAction::Drain {
                emitted: emitted.trim_end_matches(END_MARKER).to_string(),
            },
            None => StepAction::Skip(c),
        };

        trace.push(Snapshot {
            position: Some(position),
            action,
            stack: self.stack.items().to_vec(),
            output: output.to_string(),
        });
    }

    /// Record the state left behind by the character that failed
    fn record_failure(&mut self, position: usize, err: &ConvertError, output: &str) {
        let Some(trace) = self.trace.as_mut() else {
            return;
        };

        trace.push(Snapshot {
            position: Some(position),
            action: StepAction::Failed(err.clone()),
            stack: self.stack.items().to_vec(),
            output: output.to_string(),
        });
    }
}

/// Output buffer for an infix expression of `len` bytes.
/// Postfix output is never longer than the infix input.
fn reserve_output(len: usize) -> Result<String, ConvertError> {
    let mut output = String::new();
    output
        .try_reserve_exact(len)
        .map_err(|e| ConvertError::allocation(e, len))?;
    Ok(output)
}

/// True when `op` binds tighter than the stacked operator `top`
fn outranks(op: Operator, top: char) -> bool {
    Operator::from_char(top).is_some_and(|top| op.priority() > top.priority())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_reserve_output() {
        let output = reserve_output(16).expect("Reservation failed");
        assert!(output.is_empty());
        assert!(output.capacity() >= 16);
    }

    #[test]
    fn test_reserve_output_failure() {
        let err = reserve_output(usize::MAX).expect_err("Reservation should fail");
        assert!(matches!(
            err,
            ConvertError::Allocation {
                requested: usize::MAX,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            format!("Failed to allocate output buffer of {} bytes", usize::MAX)
        );
        assert!(err.source().is_some());
    }
}
