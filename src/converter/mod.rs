//! Infix to postfix expression conversion
//!
//! This module turns an infix expression such as `a*(b-c)=` into its postfix
//! form `abc-*=`:
//! - [`token`]: single-character token classification
//! - [`convert`]: the scan, parenthesis flush and operator resolution
//! - [`errors`]: [`ConvertError`]
//!
//! # Expression format
//!
//! - Operands are single characters `0-9`, `a-z`, `A-Z`
//! - Operators are the binary `+ - * /`; `*` and `/` bind tighter than
//!   `+` and `-`, and equal priorities associate left to right
//! - Parentheses may be nested to any depth
//! - Every expression, infix and postfix, ends with `=`
//!
//! Input is expected to be well-formed. Malformed input never panics but
//! its output is unspecified.

pub mod convert;
pub mod errors;
pub mod token;

pub use convert::{infix_to_postfix, Converter};
pub use errors::ConvertError;
pub use token::{Operator, Token, END_MARKER};
