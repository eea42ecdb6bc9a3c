//! Conversion error types
//!
//! For a well-formed, `=`-terminated expression the only possible failure is
//! [`ConvertError::Allocation`]. The other variants are only reachable with
//! malformed input or a capacity-limited stack.

use crate::stack::StackError;
use std::collections::TryReserveError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The output buffer could not be allocated
    Allocation {
        requested: usize,
        source: TryReserveError,
    },

    /// The operator stack reported a usage error
    Stack(StackError),

    /// Input ended without the `=` end marker
    MissingEndMarker,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Allocation { requested, .. } => {
                write!(
                    f,
                    "Failed to allocate output buffer of {} bytes",
                    requested
                )
            }
            ConvertError::Stack(err) => write!(f, "Operator stack misuse: {}", err),
            ConvertError::MissingEndMarker => {
                write!(f, "Expression is not terminated with '='")
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Allocation { source, .. } => Some(source),
            ConvertError::Stack(err) => Some(err),
            ConvertError::MissingEndMarker => None,
        }
    }
}

impl From<StackError> for ConvertError {
    fn from(err: StackError) -> Self {
        ConvertError::Stack(err)
    }
}

impl ConvertError {
    /// Reservation of `requested` bytes failed with `source`
    pub(crate) fn allocation(source: TryReserveError, requested: usize) -> Self {
        ConvertError::Allocation { requested, source }
    }
}
