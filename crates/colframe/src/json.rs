//! Loosely typed construction from `serde_json` values.
//!
//! JSON can express inputs the typed API rules out (a missing sequence, nested containers, a
//! non-integer accessor), so this is where those validation paths are reachable. JSON integers
//! become [`Value::Integer`]; every other number becomes [`Value::Real`].
use crate::column::{series_label, Column};
use crate::error::{FrameError, FrameResult};
use crate::operand::{unsupported_accessor, Operand, Selector};
use crate::table::{malformed, ColumnData, Table};
use crate::value::Value;
use serde_json::Value as JsonValue;

fn disallowed_element(name: Option<&str>) -> FrameError {
    FrameError::validation(format!(
        "The type of elements in the series{} are not allowed. The allowed types are: String, Boolean, Int and Float.",
        series_label(name)
    ))
}

fn not_a_sequence(name: Option<&str>) -> FrameError {
    FrameError::validation(format!(
        "A valid list was not provided to construct the series{}.",
        series_label(name)
    ))
}

impl Value {
    /// Convert a JSON scalar. Arrays and objects are not cell values.
    pub fn from_json(json: &JsonValue) -> FrameResult<Value> {
        scalar_from_json(json).ok_or_else(|| disallowed_element(None))
    }

    /// `None` for missing values and for reals JSON cannot represent (NaN, infinities).
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Boolean(b) => JsonValue::Bool(*b),
            Value::Integer(n) => JsonValue::from(*n),
            Value::Real(n) => serde_json::Number::from_f64(*n)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::Missing => JsonValue::Null,
        }
    }
}

fn scalar_from_json(json: &JsonValue) -> Option<Value> {
    match json {
        JsonValue::Null => Some(Value::Missing),
        JsonValue::Bool(b) => Some(Value::Boolean(*b)),
        JsonValue::String(s) => Some(Value::String(s.clone())),
        // Integers past the i64 range are rejected rather than widened to reals.
        JsonValue::Number(n) if n.is_u64() && !n.is_i64() => None,
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Some(Value::Integer(i)),
            None => n.as_f64().map(Value::Real),
        },
        JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

fn values_from_json(name: Option<&str>, json: &JsonValue) -> FrameResult<Vec<Value>> {
    let items = match json {
        JsonValue::Null => return Err(FrameError::validation("The series can't be None")),
        JsonValue::Array(items) => items,
        _ => return Err(not_a_sequence(name)),
    };
    items
        .iter()
        .map(|item| scalar_from_json(item).ok_or_else(|| disallowed_element(name)))
        .collect()
}

impl Column {
    pub fn from_json(json: &JsonValue) -> FrameResult<Column> {
        Column::build(None, values_from_json(None, json)?)
    }

    pub fn named_from_json(name: impl Into<String>, json: &JsonValue) -> FrameResult<Column> {
        let name = name.into();
        let values = values_from_json(Some(name.as_str()), json)?;
        Column::build(Some(name), values)
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(Value::to_json).collect())
    }
}

impl Selector {
    /// Integers select a position and arrays are masks; anything else is rejected.
    pub fn from_json(json: &JsonValue) -> FrameResult<Selector> {
        match json {
            JsonValue::Number(n) => n
                .as_i64()
                .map(Selector::Position)
                .ok_or_else(unsupported_accessor),
            JsonValue::Array(_) => Ok(Selector::Mask(Operand::Values(values_from_json(
                None, json,
            )?))),
            _ => Err(unsupported_accessor()),
        }
    }
}

impl Table {
    /// Build a table from a JSON object of `name -> array` entries, in key order.
    pub fn from_json(json: &JsonValue) -> FrameResult<Table> {
        let entries = match json {
            JsonValue::Null => {
                return Err(malformed(FrameError::validation(
                    "The frame dictionary can't be None",
                )))
            }
            JsonValue::Object(entries) => entries,
            _ => {
                return Err(malformed(FrameError::validation(
                    "A valid mapping was not provided to construct the frame.",
                )))
            }
        };

        // Shape problems take precedence over element problems, as for typed input.
        let mut expected_len = None;
        for (name, data) in entries {
            let len = match data {
                JsonValue::Null => {
                    return Err(malformed(FrameError::validation(format!(
                        "The series with name: {name} can't be None."
                    ))))
                }
                JsonValue::Array(items) => items.len(),
                _ => return Err(malformed(not_a_sequence(Some(name.as_str())))),
            };
            match expected_len {
                None => expected_len = Some(len),
                Some(expected) if expected != len => {
                    return Err(malformed(FrameError::validation(
                        "The length of the series are not equal.",
                    )))
                }
                Some(_) => {}
            }
        }

        let entries = entries
            .iter()
            .map(|(name, data)| {
                let values = values_from_json(Some(name.as_str()), data)?;
                Ok((Some(name.clone()), Some(ColumnData::Values(values))))
            })
            .collect::<FrameResult<Vec<_>>>()
            .map_err(malformed)?;
        Table::from_entries(entries)
    }

    pub fn from_json_str(json: &str) -> FrameResult<Table> {
        let parsed: JsonValue = serde_json::from_str(json).map_err(|err| {
            malformed(FrameError::validation(format!(
                "The frame is not valid JSON: {err}"
            )))
        })?;
        Table::from_json(&parsed)
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(
            self.iter()
                .map(|(name, column)| (name.to_string(), column.to_json()))
                .collect(),
        )
    }
}
