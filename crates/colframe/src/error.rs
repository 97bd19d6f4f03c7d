pub type FrameResult<T> = Result<T, FrameError>;

/// Errors surfaced by column and table operations.
///
/// Policy violations (bad construction input, incompatible operand types, length mismatches,
/// unsupported accessors) are reported as [`FrameError::Validation`]. Failures of the
/// per-element primitives that the policy checks let through stay in their own tier as
/// [`FrameError::Scalar`] and are never folded into `Validation`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FrameError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Scalar(#[from] ScalarError),

    #[error("index {index} out of range for column of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("key not found: {0}")]
    KeyNotFound(String),
}

impl FrameError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        FrameError::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FrameError::Validation(_))
    }

    /// The human-readable message of a [`FrameError::Validation`], if this is one.
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            FrameError::Validation(message) => Some(message),
            _ => None,
        }
    }
}

/// Failure of a single element-level operation (`a + b`, `a < b`, `!a`, ...).
///
/// Operand kinds are the lowercase kind names of [`crate::Value`] (`integer`, `missing`, ...).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScalarError {
    #[error("unsupported operand type(s) for {op}: '{left}' and '{right}'")]
    UnsupportedOperands {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("'{op}' not supported between instances of '{left}' and '{right}'")]
    NotComparable {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("bad operand type for unary {op}: '{operand}'")]
    BadUnaryOperand {
        op: &'static str,
        operand: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {op}")]
    Overflow { op: &'static str },
}
