//! Errors raised while building a pagination context.

use thiserror::Error;

/// Why a bound parameter could not be used as a pagination value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParameterFault {
    /// The index points past the end of the parameter list.
    OutOfRange {
        /// Number of parameters actually supplied.
        len: usize,
    },
    /// The parameter exists but is not a whole number.
    NotWholeNumber {
        /// Type name of the offending value.
        found: &'static str,
    },
}

impl std::fmt::Display for ParameterFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { len } => write!(f, "only {len} parameters were supplied"),
            Self::NotWholeNumber { found } => write!(f, "expected a whole number, found {found}"),
        }
    }
}

/// Errors that can occur when resolving pagination values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PaginationError {
    /// A parameter-bound descriptor could not be resolved.
    #[error("invalid pagination parameter at index {index}: {reason}")]
    InvalidPaginationParameter {
        /// Positional (0-based) index named by the descriptor.
        index: usize,
        /// What was wrong with it.
        reason: ParameterFault,
    },
    /// A JSON parameter list was not a JSON array.
    #[error("invalid parameter list (expected JSON array)")]
    InvalidParameterList,
}

impl PaginationError {
    pub(crate) const fn out_of_range(index: usize, len: usize) -> Self {
        Self::InvalidPaginationParameter {
            index,
            reason: ParameterFault::OutOfRange { len },
        }
    }

    pub(crate) const fn not_whole_number(index: usize, found: &'static str) -> Self {
        Self::InvalidPaginationParameter {
            index,
            reason: ParameterFault::NotWholeNumber { found },
        }
    }

    /// The parameter index this error names, if any.
    #[must_use]
    pub const fn parameter_index(&self) -> Option<usize> {
        match self {
            Self::InvalidPaginationParameter { index, .. } => Some(*index),
            Self::InvalidParameterList => None,
        }
    }
}
