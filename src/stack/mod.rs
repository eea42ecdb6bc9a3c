//! Character stack used as working storage by the converter
//!
//! [`CharStack`] is a last-in-first-out container of single characters.
//! It is backed by a `Vec<char>` and is unbounded by default; a capacity
//! limit can be set to reproduce the behaviour of a fixed-size array stack.
//!
//! # Usage errors
//!
//! Misuse is reported, never panicked on:
//! - pushing onto a full stack returns [`StackError::Push`]
//! - reading the top of an empty stack returns [`StackError::Top`]
//! - popping an empty stack does nothing

use std::fmt;

/// Capacity of the fixed-size stack this type replaces
pub const DEFAULT_CAPACITY: usize = 20;

/// Stack usage errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// Push onto a full stack
    Push,
    /// Top of an empty stack
    Top,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::Push => write!(f, "Stack error: PUSH (stack is full)"),
            StackError::Top => write!(f, "Stack error: TOP (stack is empty)"),
        }
    }
}

impl std::error::Error for StackError {}

/// Last-in-first-out stack of characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharStack {
    items: Vec<char>,
    limit: Option<usize>,
}

impl CharStack {
    /// Create an empty, unbounded stack
    pub fn new() -> Self {
        CharStack {
            items: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty stack that is full once it holds `limit` items
    pub fn with_capacity_limit(limit: usize) -> Self {
        CharStack {
            items: Vec::with_capacity(limit),
            limit: Some(limit),
        }
    }

    /// Reset the stack to empty
    pub fn init(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// An unbounded stack is never full
    pub fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.items.len() >= limit)
    }

    /// Store `c` as the new top
    pub fn push(&mut self, c: char) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Push);
        }
        self.items.push(c);
        Ok(())
    }

    /// Read the top without removing it
    pub fn top(&self) -> Result<char, StackError> {
        self.items.last().copied().ok_or(StackError::Top)
    }

    /// Remove the top, if any
    pub fn pop(&mut self) {
        self.items.pop();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Capacity limit, `None` when unbounded
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Contents from bottom to top (for trace snapshots and display)
    pub fn items(&self) -> &[char] {
        &self.items
    }
}

impl Default for CharStack {
    fn default() -> Self {
        Self::new()
    }
}
