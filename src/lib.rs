//! # Introduction
//!
//! rpntty converts infix arithmetic expressions to postfix (reverse Polish)
//! notation with an operator stack, recording the converter's state after
//! every input character. The recorded history can be stepped forward and
//! backward in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Infix → Converter (+ CharStack) → Postfix
//!              ↓
//!            Trace → TUI
//! ```
//!
//! 1. [`stack`] — the [`stack::CharStack`] operator stack.
//! 2. [`converter`] — single-pass conversion: operands are copied, `(` is
//!    pushed, `)` flushes to the matching `(`, operators are resolved by
//!    priority, and `=` drains the stack.
//! 3. [`trace`] — per-character [`trace::Snapshot`]s with a navigation cursor.
//! 4. [`eval`] — evaluates the infix and postfix forms of an expression so a
//!    conversion can be checked.
//! 5. [`config`] — command-line options.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Expression format
//!
//! Single-character operands `0-9`, `a-z`, `A-Z`; binary operators
//! `+ - * /`; parentheses; every expression ends with `=`.
//!
//! ```
//! use rpntty::converter::infix_to_postfix;
//!
//! assert_eq!(infix_to_postfix("a*(b-c)=").unwrap(), "abc-*=");
//! ```

pub mod config;
pub mod converter;
pub mod eval;
pub mod stack;
pub mod trace;
pub mod ui;
