use crate::error::{FrameError, FrameResult, ScalarError};
use crate::operand::{unsupported_accessor, Operand, Rhs, Selection, Selector};
use crate::scalar::{self, ArithmeticOp, CompareOp, LogicalOp};
use crate::value::{Value, ValueType};
use std::fmt;

/// An immutable, homogeneously typed sequence of scalar values.
///
/// Every non-missing value has the same concrete type; [`Value::Missing`] may appear anywhere.
/// Operators never modify the receiver and always return a new column that keeps the receiver's
/// name.
#[derive(Clone, Debug)]
pub struct Column {
    name: Option<String>,
    values: Vec<Value>,
    value_type: ValueType,
}

/// ` 'NAME'` for named columns, nothing otherwise; spliced into construction messages.
pub(crate) fn series_label(name: Option<&str>) -> String {
    name.map(|name| format!(" '{name}'")).unwrap_or_default()
}

fn mixed_types_error(name: Option<&str>) -> FrameError {
    FrameError::validation(format!(
        "The elements in the series{} are not of same type.",
        series_label(name)
    ))
}

fn infer_type(name: Option<&str>, values: &[Value]) -> FrameResult<ValueType> {
    let mut inferred = ValueType::Unknown;
    for value in values {
        let value_type = value.value_type();
        if value_type == ValueType::Unknown {
            continue;
        }
        if inferred == ValueType::Unknown {
            inferred = value_type;
        } else if inferred != value_type {
            return Err(mixed_types_error(name));
        }
    }
    Ok(inferred)
}

fn length_mismatch(left: usize, right: usize) -> FrameError {
    FrameError::validation(format!(
        "The length of the series provided are not equal. The lengths are {left} and {right}."
    ))
}

impl Column {
    pub fn new<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> FrameResult<Self> {
        Self::build(None, values.into_iter().map(Into::into).collect())
    }

    pub fn named<T: Into<Value>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = T>,
    ) -> FrameResult<Self> {
        Self::build(Some(name.into()), values.into_iter().map(Into::into).collect())
    }

    pub fn empty() -> Self {
        Self {
            name: None,
            values: Vec::new(),
            value_type: ValueType::Unknown,
        }
    }

    pub(crate) fn build(name: Option<String>, values: Vec<Value>) -> FrameResult<Self> {
        let value_type = infer_type(name.as_deref(), &values)?;
        log::trace!(
            "built column {:?}: {} values of type {value_type}",
            name,
            values.len()
        );
        Ok(Self {
            name,
            values,
            value_type,
        })
    }

    /// Build a result column that inherits this column's name.
    fn derive(&self, values: Vec<Value>) -> FrameResult<Self> {
        Self::build(self.name.clone(), values)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Same values under a different name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Number of positions holding a concrete `true`.
    pub fn count_true(&self) -> usize {
        self.values
            .iter()
            .filter(|v| matches!(v, Value::Boolean(true)))
            .count()
    }

    fn check_same_length(&self, other: &Column) -> FrameResult<()> {
        if self.len() != other.len() {
            return Err(length_mismatch(self.len(), other.len()));
        }
        Ok(())
    }

    fn zip_with<F>(&self, rhs: &Rhs, mut f: F) -> FrameResult<Column>
    where
        F: FnMut(&Value, &Value) -> Result<Value, ScalarError>,
    {
        let values = match rhs {
            Rhs::Scalar(operand) => self
                .values
                .iter()
                .map(|value| f(value, operand))
                .collect::<Result<Vec<_>, _>>()?,
            Rhs::Column(operand) => {
                self.check_same_length(operand)?;
                self.values
                    .iter()
                    .zip(&operand.values)
                    .map(|(l, r)| f(l, r))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };
        self.derive(values)
    }

    // Arithmetic.

    pub fn add(&self, operand: impl Into<Operand>) -> FrameResult<Column> {
        self.arithmetic(ArithmeticOp::Add, operand.into())
    }

    pub fn subtract(&self, operand: impl Into<Operand>) -> FrameResult<Column> {
        self.arithmetic(ArithmeticOp::Subtract, operand.into())
    }

    pub fn multiply(&self, operand: impl Into<Operand>) -> FrameResult<Column> {
        self.arithmetic(ArithmeticOp::Multiply, operand.into())
    }

    pub fn divide(&self, operand: impl Into<Operand>) -> FrameResult<Column> {
        self.arithmetic(ArithmeticOp::Divide, operand.into())
    }

    fn arithmetic(&self, op: ArithmeticOp, operand: Operand) -> FrameResult<Column> {
        let rhs = operand.resolve()?;
        self.check_arithmetic_compatibility(rhs.value_type())?;
        self.zip_with(&rhs, |l, r| scalar::arithmetic(op, l, r))
    }

    /// Type policy shared by all four arithmetic operators. Strings pass for every operator;
    /// anything but `+` then fails element-wise.
    fn check_arithmetic_compatibility(&self, operand_type: ValueType) -> FrameResult<()> {
        if operand_type == ValueType::Unknown {
            return Err(FrameError::validation(format!(
                "The operand type {operand_type} is not supported."
            )));
        }
        if self.value_type.is_numeric() {
            if !operand_type.is_numeric() {
                return Err(FrameError::validation(
                    "The type of provided input is not an int or float.",
                ));
            }
        } else if self.value_type == ValueType::Boolean || operand_type == ValueType::Boolean {
            return Err(FrameError::validation(
                "Addition on the bool type is not supported.",
            ));
        } else if self.value_type != ValueType::Unknown && operand_type != self.value_type {
            return Err(FrameError::validation(format!(
                "The operand type {operand_type} is not compatible with the series type {}.",
                self.value_type
            )));
        }
        Ok(())
    }

    // Comparison.

    pub fn greater_equal(&self, operand: impl Into<Operand>) -> FrameResult<Column> {
        self.compare(CompareOp::GreaterEquals, operand.into())
    }

    pub fn greater_than(&self, operand: impl Into<Operand>) -> FrameResult<Column> {
        self.compare(CompareOp::Greater, operand.into())
    }

    pub fn less_equal(&self, operand: impl Into<Operand>) -> FrameResult<Column> {
        self.compare(CompareOp::LessEquals, operand.into())
    }

    pub fn less_than(&self, operand: impl Into<Operand>) -> FrameResult<Column> {
        self.compare(CompareOp::Less, operand.into())
    }

    pub fn not_equal(&self, operand: impl Into<Operand>) -> FrameResult<Column> {
        self.compare(CompareOp::NotEquals, operand.into())
    }

    fn compare(&self, op: CompareOp, operand: Operand) -> FrameResult<Column> {
        let rhs = operand.resolve()?;
        self.zip_with(&rhs, |l, r| scalar::compare(op, l, r).map(Value::Boolean))
    }

    // Equality.

    fn check_same_type(&self, operand_type: ValueType) -> FrameResult<()> {
        if operand_type != self.value_type {
            return Err(FrameError::validation(format!(
                "The series types are not same. The series are of types: {} and {operand_type}.",
                self.value_type
            )));
        }
        Ok(())
    }

    /// Element-wise `==`. The operand must have this column's type (a scalar is broadcast) and,
    /// for sequences, this column's length.
    pub fn equal_to(&self, operand: impl Into<Operand>) -> FrameResult<Column> {
        let rhs = operand.into().resolve()?;
        self.check_same_type(rhs.value_type())?;
        self.zip_with(&rhs, |l, r| Ok(Value::Boolean(scalar::values_equal(l, r))))
    }

    /// Whole-column `==` under the same type and length rules as [`Column::equal_to`].
    pub fn equals(&self, other: &Column) -> FrameResult<bool> {
        self.check_same_type(other.value_type)?;
        self.check_same_length(other)?;
        Ok(self
            .values
            .iter()
            .zip(&other.values)
            .all(|(l, r)| scalar::values_equal(l, r)))
    }

    // Boolean operators.

    pub fn and(&self, operand: impl Into<Operand>) -> FrameResult<Column> {
        self.logical(LogicalOp::And, operand.into())
    }

    pub fn or(&self, operand: impl Into<Operand>) -> FrameResult<Column> {
        self.logical(LogicalOp::Or, operand.into())
    }

    pub fn xor(&self, operand: impl Into<Operand>) -> FrameResult<Column> {
        self.logical(LogicalOp::Xor, operand.into())
    }

    fn logical(&self, op: LogicalOp, operand: Operand) -> FrameResult<Column> {
        let other = operand.into_column(|| {
            FrameError::validation("The operand list provided is not of type list or Column.")
        })?;
        self.check_logical_compatibility(&other)?;
        self.zip_with(&Rhs::Column(other), |l, r| scalar::logical(op, l, r))
    }

    /// The type check runs before the length check; callers observe the type message when both
    /// conditions hold.
    fn check_logical_compatibility(&self, other: &Column) -> FrameResult<()> {
        let unsupported = |t: ValueType| {
            matches!(t, ValueType::Real | ValueType::String | ValueType::Unknown)
        };
        if unsupported(self.value_type) || unsupported(other.value_type) {
            return Err(FrameError::validation(format!(
                "The boolean operations don't work on {} type series and {} type operand list.",
                self.value_type, other.value_type
            )));
        }
        if other.len() != self.len() {
            return Err(FrameError::validation(format!(
                "The operand series or list provided is of length {} and is not compatible for the operation with the list of length {}. Both the series length should be equal.",
                other.len(),
                self.len()
            )));
        }
        Ok(())
    }

    pub fn invert(&self) -> FrameResult<Column> {
        if self.value_type == ValueType::Boolean {
            let values = self
                .values
                .iter()
                .map(scalar::not)
                .collect::<Result<Vec<_>, _>>()?;
            return self.derive(values);
        }
        if self.is_empty() {
            return Ok(self.clone());
        }
        Err(FrameError::validation(format!(
            "The invert operation of the series with type {} is not supported.",
            self.value_type
        )))
    }

    // Indexed access.

    /// Value at `position`; negative positions count back from the end.
    pub fn get(&self, position: i64) -> FrameResult<&Value> {
        let len = self.values.len();
        let resolved = if position < 0 {
            i64::try_from(len).ok().and_then(|len| position.checked_add(len))
        } else {
            Some(position)
        };
        resolved
            .and_then(|idx| usize::try_from(idx).ok())
            .and_then(|idx| self.values.get(idx))
            .ok_or(FrameError::IndexOutOfRange {
                index: position,
                len,
            })
    }

    /// Keep the positions where `mask` holds a concrete `true`; missing mask entries exclude.
    pub fn filter(&self, mask: impl Into<Operand>) -> FrameResult<Column> {
        let mask = mask.into().into_column(unsupported_accessor)?;
        self.filter_by(&mask)
    }

    pub(crate) fn filter_by(&self, mask: &Column) -> FrameResult<Column> {
        if !matches!(mask.value_type, ValueType::Boolean | ValueType::Unknown) {
            return Err(FrameError::validation(format!(
                "Unsupported operation. The filtering on the series works on bool type series/list. The provided type is {}.",
                mask.value_type
            )));
        }
        if mask.len() != self.len() {
            return Err(FrameError::validation(
                "The length of the series and the filter list/series is not equal.",
            ));
        }
        let values = self
            .values
            .iter()
            .zip(&mask.values)
            .filter(|(_, keep)| matches!(keep, Value::Boolean(true)))
            .map(|(value, _)| value.clone())
            .collect();
        self.derive(values)
    }

    pub fn select(&self, selector: impl Into<Selector>) -> FrameResult<Selection> {
        match selector.into() {
            Selector::Position(position) => self.get(position).cloned().map(Selection::Value),
            Selector::Mask(mask) => self.filter(mask).map(Selection::Column),
        }
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl TryFrom<Vec<Value>> for Column {
    type Error = FrameError;

    fn try_from(values: Vec<Value>) -> FrameResult<Self> {
        Column::build(None, values)
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

struct Quoted<'a>(&'a Value);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => write!(f, "{s:?}"),
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Column(")?;
        if let Some(name) = &self.name {
            write!(f, "name={name:?}, ")?;
        }
        write!(f, "len={}, values=[", self.len())?;
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", Quoted(value))?;
        }
        write!(f, "], type={})", self.value_type)
    }
}
