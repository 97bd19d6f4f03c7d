use crate::column::Column;
use crate::error::{FrameError, FrameResult};
use crate::value::{Value, ValueType};

/// Right-hand side of a column operator.
///
/// Raw value sequences go through [`Column`] construction (and its validation) before they are
/// used, so `column.add(vec![1, 2])` and `column.add(Column::new([1, 2])?)` behave the same.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Scalar(Value),
    Values(Vec<Value>),
    Column(Column),
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Scalar(value)
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Scalar(value.into())
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Scalar(value.into())
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(value.into())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value.into())
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Scalar(value.into())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Scalar(value.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        Operand::Scalar(value.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Operand {
    fn from(values: Vec<T>) -> Self {
        Operand::Values(values.into_iter().map(Into::into).collect())
    }
}

impl From<Column> for Operand {
    fn from(column: Column) -> Self {
        Operand::Column(column)
    }
}

impl From<&Column> for Operand {
    fn from(column: &Column) -> Self {
        Operand::Column(column.clone())
    }
}

/// An operand after raw sequences have been validated into columns.
pub(crate) enum Rhs {
    Scalar(Value),
    Column(Column),
}

impl Rhs {
    pub(crate) fn value_type(&self) -> ValueType {
        match self {
            Rhs::Scalar(value) => value.value_type(),
            Rhs::Column(column) => column.value_type(),
        }
    }
}

impl Operand {
    pub(crate) fn resolve(self) -> FrameResult<Rhs> {
        Ok(match self {
            Operand::Scalar(value) => Rhs::Scalar(value),
            Operand::Values(values) => Rhs::Column(Column::new(values)?),
            Operand::Column(column) => Rhs::Column(column),
        })
    }

    /// Coerce a sequence-like operand into a column; scalars are rejected with `scalar_error`.
    pub(crate) fn into_column(
        self,
        scalar_error: impl FnOnce() -> FrameError,
    ) -> FrameResult<Column> {
        match self.resolve()? {
            Rhs::Column(column) => Ok(column),
            Rhs::Scalar(_) => Err(scalar_error()),
        }
    }
}

pub(crate) fn unsupported_accessor() -> FrameError {
    FrameError::validation(
        "Unsupported operation. Accessibility of the series could be performed only using an integer or list of boolean values.",
    )
}

/// Key for [`Column::select`]: a position or a boolean mask.
#[derive(Clone, Debug, PartialEq)]
pub enum Selector {
    Position(i64),
    Mask(Operand),
}

impl From<i64> for Selector {
    fn from(position: i64) -> Self {
        Selector::Position(position)
    }
}

impl From<i32> for Selector {
    fn from(position: i32) -> Self {
        Selector::Position(i64::from(position))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Selector {
    fn from(mask: Vec<T>) -> Self {
        Selector::Mask(mask.into())
    }
}

impl From<Column> for Selector {
    fn from(mask: Column) -> Self {
        Selector::Mask(Operand::Column(mask))
    }
}

impl From<&Column> for Selector {
    fn from(mask: &Column) -> Self {
        Selector::Mask(Operand::Column(mask.clone()))
    }
}

/// Only integers select by position; any other scalar is an unsupported accessor.
impl TryFrom<Value> for Selector {
    type Error = FrameError;

    fn try_from(value: Value) -> FrameResult<Self> {
        match value {
            Value::Integer(position) => Ok(Selector::Position(position)),
            _ => Err(unsupported_accessor()),
        }
    }
}

/// Result of [`Column::select`].
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Value(Value),
    Column(Column),
}

impl Selection {
    pub fn into_value(self) -> Option<Value> {
        match self {
            Selection::Value(value) => Some(value),
            Selection::Column(_) => None,
        }
    }

    pub fn into_column(self) -> Option<Column> {
        match self {
            Selection::Column(column) => Some(column),
            Selection::Value(_) => None,
        }
    }
}
