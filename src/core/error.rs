use std::fmt;
use thiserror::Error;

/// Which side of a binary operation an operand was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandPosition {
    A,
    B,
}

impl fmt::Display for OperandPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "a"),
            Self::B => write!(f, "b"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid type for '{position}': {type_name} ({repr}), expected Decimal-compatible")]
    InvalidOperand {
        position: OperandPosition,
        type_name: &'static str,
        repr: String,
    },

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Operation '{0}' not found")]
    OperationNotFound(String),

    #[error("Operation '{0}' is already registered")]
    DuplicateRegistration(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Invalid plugin: {0}")]
    InvalidPlugin(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CalcError {
    /// True for failures caused by user input rather than by how the
    /// calculator was assembled.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidOperand { .. }
                | Self::DivisionByZero
                | Self::OperationNotFound(_)
                | Self::Overflow(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

impl From<std::io::Error> for CalcError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_operand_message_names_position() {
        let err = CalcError::InvalidOperand {
            position: OperandPosition::B,
            type_name: "LIST",
            repr: "[]".into(),
        };

        let msg = err.to_string();
        assert!(msg.contains("'b'"));
        assert!(msg.contains("LIST"));
    }

    #[test]
    fn test_user_error_classification() {
        assert!(CalcError::DivisionByZero.is_user_error());
        assert!(CalcError::OperationNotFound("modulo".into()).is_user_error());
        assert!(!CalcError::DuplicateRegistration("add".into()).is_user_error());
        assert!(!CalcError::InvalidPlugin("bad".into()).is_user_error());
        assert!(!CalcError::Config("history limit".into()).is_user_error());
    }
}
