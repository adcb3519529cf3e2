use std::fmt;

/// Broad category of a [`CombinatoricsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
}

/// Errors raised by factorial and binomial coefficient computations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombinatoricsError {
    /// A factorial operand was below zero.
    NegativeOperand { value: i64 },
    /// A string operand was not a decimal integer literal.
    NotNumeric { input: String },
}

impl CombinatoricsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CombinatoricsError::NegativeOperand { .. } | CombinatoricsError::NotNumeric { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

impl fmt::Display for CombinatoricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombinatoricsError::NegativeOperand { value } => write!(
                f,
                "invalid argument: factorial operand must be a non-negative number, got {}",
                value
            ),
            CombinatoricsError::NotNumeric { input } => write!(
                f,
                "invalid argument: factorial operand must be a number, got {:?}",
                input
            ),
        }
    }
}

impl std::error::Error for CombinatoricsError {}
