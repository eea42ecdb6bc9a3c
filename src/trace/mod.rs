// Conversion history for step-through display

use crate::converter::errors::ConvertError;
use crate::converter::token::Operator;
use std::fmt;

/// What the converter did with one input character
#[derive(Debug, Clone, PartialEq)]
pub enum StepAction {
    /// Initial state before any input is read
    Start,
    /// Operand copied straight to the output
    EmitOperand(char),
    /// `(` pushed onto the stack
    PushParen,
    /// `)` flushed the stack down to the matching `(`
    FlushParen { emitted: String },
    /// Operator pushed after emitting the operators it does not outrank
    ResolveOperator { op: Operator, emitted: String },
    /// `=` drained the remaining stack
    Drain { emitted: String },
    /// Character outside the expression alphabet
    Skip(char),
    /// Conversion stopped at this character
    Failed(ConvertError),
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepAction::Start => write!(f, "start"),
            StepAction::EmitOperand(c) => write!(f, "emit operand '{}'", c),
            StepAction::PushParen => write!(f, "push '('"),
            StepAction::FlushParen { emitted } if emitted.is_empty() => {
                write!(f, "discard '('")
            }
            StepAction::FlushParen { emitted } => {
                write!(f, "flush \"{}\" and discard '('", emitted)
            }
            StepAction::ResolveOperator { op, emitted } if emitted.is_empty() => {
                write!(f, "push '{}'", op)
            }
            StepAction::ResolveOperator { op, emitted } => {
                write!(f, "emit \"{}\" then push '{}'", emitted, op)
            }
            StepAction::Drain { emitted } if emitted.is_empty() => write!(f, "end of input"),
            StepAction::Drain { emitted } => write!(f, "drain \"{}\"", emitted),
            StepAction::Skip(c) => write!(f, "skip {:?}", c),
            StepAction::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

/// Converter state captured after one step
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Character index into the infix input, `None` for the initial state
    pub position: Option<usize>,
    pub action: StepAction,
    /// Operator stack from bottom to top
    pub stack: Vec<char>,
    /// Postfix output written so far
    pub output: String,
}

/// Ordered snapshots of one conversion with a navigation cursor
#[derive(Debug, Clone)]
pub struct Trace {
    infix: String,
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl Trace {
    pub fn new(infix: &str) -> Self {
        Trace {
            infix: infix.to_string(),
            snapshots: vec![Snapshot {
                position: None,
                action: StepAction::Start,
                stack: Vec::new(),
                output: String::new(),
            }],
            cursor: 0,
        }
    }

    /// Append a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn infix(&self) -> &str {
        &self.infix
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Number of snapshots, including the initial state
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: the initial state is always recorded
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Postfix result, present once the end marker has been processed
    pub fn result(&self) -> Option<&str> {
        self.snapshots
            .last()
            .filter(|s| matches!(s.action, StepAction::Drain { .. }))
            .map(|s| s.output.as_str())
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> &Snapshot {
        // The initial snapshot is pushed in `new` and never removed
        &self.snapshots[self.cursor]
    }

    pub fn step_forward(&mut self) -> Result<(), String> {
        if self.cursor + 1 >= self.snapshots.len() {
            return Err("Already at the end of the conversion".to_string());
        }
        self.cursor += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), String> {
        if self.cursor == 0 {
            return Err("Already at the start of the conversion".to_string());
        }
        self.cursor -= 1;
        Ok(())
    }

    pub fn rewind_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.snapshots.len().saturating_sub(1);
    }
}
