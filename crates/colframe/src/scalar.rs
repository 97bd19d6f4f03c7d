//! Element-level primitives that column operators lift over whole columns.
//!
//! These never apply column-level policy: callers run their compatibility checks first and any
//! failure here is reported as a [`ScalarError`].
use crate::error::ScalarError;
use crate::value::Value;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Subtract => "-",
            ArithmeticOp::Multiply => "*",
            ArithmeticOp::Divide => "/",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOp {
    NotEquals,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
}

impl CompareOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::NotEquals => "!=",
            CompareOp::Less => "<",
            CompareOp::LessEquals => "<=",
            CompareOp::Greater => ">",
            CompareOp::GreaterEquals => ">=",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
    Xor,
}

impl LogicalOp {
    pub fn symbol(self) -> &'static str {
        match self {
            LogicalOp::And => "&",
            LogicalOp::Or => "|",
            LogicalOp::Xor => "^",
        }
    }
}

pub fn arithmetic(op: ArithmeticOp, left: &Value, right: &Value) -> Result<Value, ScalarError> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => integer_arithmetic(op, *l, *r),
        (Value::String(l), Value::String(r)) if op == ArithmeticOp::Add => {
            let mut out = String::with_capacity(l.len() + r.len());
            out.push_str(l);
            out.push_str(r);
            Ok(Value::String(out))
        }
        _ => match (number(left), number(right)) {
            (Some(l), Some(r)) => real_arithmetic(op, l, r),
            _ => Err(ScalarError::UnsupportedOperands {
                op: op.symbol(),
                left: left.kind(),
                right: right.kind(),
            }),
        },
    }
}

fn integer_arithmetic(op: ArithmeticOp, l: i64, r: i64) -> Result<Value, ScalarError> {
    let out = match op {
        ArithmeticOp::Add => l.checked_add(r),
        ArithmeticOp::Subtract => l.checked_sub(r),
        ArithmeticOp::Multiply => l.checked_mul(r),
        ArithmeticOp::Divide => {
            if r == 0 {
                return Err(ScalarError::DivisionByZero);
            }
            return Ok(Value::Real(l as f64 / r as f64));
        }
    };
    out.map(Value::Integer)
        .ok_or(ScalarError::Overflow { op: op.symbol() })
}

fn real_arithmetic(op: ArithmeticOp, l: f64, r: f64) -> Result<Value, ScalarError> {
    let out = match op {
        ArithmeticOp::Add => l + r,
        ArithmeticOp::Subtract => l - r,
        ArithmeticOp::Multiply => l * r,
        ArithmeticOp::Divide => {
            if r == 0.0 {
                return Err(ScalarError::DivisionByZero);
            }
            l / r
        }
    };
    Ok(Value::Real(out))
}

/// Integer and real operands only; booleans are not numbers for arithmetic.
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(n) => Some(*n as f64),
        Value::Real(n) => Some(*n),
        _ => None,
    }
}

/// Numeric view used for ordering; booleans order as 0/1.
fn ordinal(value: &Value) -> Option<f64> {
    match value {
        Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
        other => number(other),
    }
}

pub fn compare(op: CompareOp, left: &Value, right: &Value) -> Result<bool, ScalarError> {
    if op == CompareOp::NotEquals {
        return Ok(!values_equal(left, right));
    }

    let cmp = match (left, right) {
        (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
        (Value::Integer(l), Value::Integer(r)) => Some(l.cmp(r)),
        _ => match (ordinal(left), ordinal(right)) {
            (Some(l), Some(r)) => l.partial_cmp(&r),
            _ => {
                return Err(ScalarError::NotComparable {
                    op: op.symbol(),
                    left: left.kind(),
                    right: right.kind(),
                })
            }
        },
    };

    // NaN compares false under every ordering.
    let Some(cmp) = cmp else {
        return Ok(false);
    };
    Ok(match op {
        CompareOp::NotEquals => cmp != Ordering::Equal,
        CompareOp::Less => cmp == Ordering::Less,
        CompareOp::LessEquals => cmp != Ordering::Greater,
        CompareOp::Greater => cmp == Ordering::Greater,
        CompareOp::GreaterEquals => cmp != Ordering::Less,
    })
}

/// Value equality across kinds: numbers compare by value, missing only equals missing.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Missing, Value::Missing) => true,
        (Value::Missing, _) | (_, Value::Missing) => false,
        (Value::String(l), Value::String(r)) => l == r,
        (Value::String(_), _) | (_, Value::String(_)) => false,
        (Value::Integer(l), Value::Integer(r)) => l == r,
        _ => match (ordinal(left), ordinal(right)) {
            (Some(l), Some(r)) => l == r,
            _ => false,
        },
    }
}

pub fn logical(op: LogicalOp, left: &Value, right: &Value) -> Result<Value, ScalarError> {
    match (left, right) {
        (Value::Boolean(l), Value::Boolean(r)) => Ok(Value::Boolean(match op {
            LogicalOp::And => l & r,
            LogicalOp::Or => l | r,
            LogicalOp::Xor => l ^ r,
        })),
        (Value::Integer(l), Value::Integer(r)) => Ok(Value::Integer(match op {
            LogicalOp::And => l & r,
            LogicalOp::Or => l | r,
            LogicalOp::Xor => l ^ r,
        })),
        _ => Err(ScalarError::UnsupportedOperands {
            op: op.symbol(),
            left: left.kind(),
            right: right.kind(),
        }),
    }
}

pub fn not(value: &Value) -> Result<Value, ScalarError> {
    match value {
        Value::Boolean(b) => Ok(Value::Boolean(!b)),
        other => Err(ScalarError::BadUnaryOperand {
            op: "not",
            operand: other.kind(),
        }),
    }
}
