use crate::column::Column;
use crate::error::{FrameError, FrameResult};
use crate::operand::{unsupported_accessor, Operand};
use crate::value::Value;
use std::collections::HashMap;
use std::fmt;

/// Input for one table column: raw values (validated on construction) or an existing column.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    Values(Vec<Value>),
    Column(Column),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Values(values) => values.len(),
            ColumnData::Column(column) => column.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Into<Value>> From<Vec<T>> for ColumnData {
    fn from(values: Vec<T>) -> Self {
        ColumnData::Values(values.into_iter().map(Into::into).collect())
    }
}

impl From<Column> for ColumnData {
    fn from(column: Column) -> Self {
        ColumnData::Column(column)
    }
}

impl From<&Column> for ColumnData {
    fn from(column: &Column) -> Self {
        ColumnData::Column(column.clone())
    }
}

/// An immutable, insertion-ordered set of equally long, uniquely named columns.
#[derive(Clone, Debug, Default)]
pub struct Table {
    columns: Vec<Column>,
    column_index: HashMap<String, usize>,
    rows: usize,
}

pub(crate) fn malformed(err: FrameError) -> FrameError {
    match err {
        FrameError::Validation(inner) => FrameError::Validation(format!(
            "The frame is malformed and couldn't be converted to a dataframe. The exception is: {inner}"
        )),
        other => other,
    }
}

impl Table {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> FrameResult<Self>
    where
        K: Into<String>,
        V: Into<ColumnData>,
    {
        Self::from_entries(
            entries
                .into_iter()
                .map(|(name, data)| (Some(name.into()), Some(data.into()))),
        )
    }

    /// Build a table from entries whose names and data may be absent.
    ///
    /// Entries are checked in order (name present, data present, name unique, length equal to
    /// the first entry's), then every column is built under its name. Any failure is reported
    /// as a single "malformed" validation error carrying the underlying message.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Option<String>, Option<ColumnData>)>,
    ) -> FrameResult<Self> {
        let table = Self::assemble(entries).map_err(malformed)?;
        log::debug!("table initialized with size {:?}", table.size());
        Ok(table)
    }

    fn assemble(
        entries: impl IntoIterator<Item = (Option<String>, Option<ColumnData>)>,
    ) -> FrameResult<Self> {
        let mut pending: Vec<(String, ColumnData)> = Vec::new();
        let mut column_index = HashMap::new();
        let mut expected_len = None;

        for (name, data) in entries {
            let name =
                name.ok_or_else(|| FrameError::validation("The name of the series can't be None."))?;
            let data = data.ok_or_else(|| {
                FrameError::validation(format!("The series with name: {name} can't be None."))
            })?;
            if column_index.contains_key(&name) {
                return Err(FrameError::validation(format!(
                    "The name of the series '{name}' is duplicated."
                )));
            }
            match expected_len {
                None => expected_len = Some(data.len()),
                Some(len) if len != data.len() => {
                    return Err(FrameError::validation(
                        "The length of the series are not equal.",
                    ))
                }
                Some(_) => {}
            }
            column_index.insert(name.clone(), pending.len());
            pending.push((name, data));
        }

        let columns = pending
            .into_iter()
            .map(|(name, data)| match data {
                ColumnData::Values(values) => Column::build(Some(name), values),
                ColumnData::Column(column) => Ok(column.with_name(name)),
            })
            .collect::<FrameResult<Vec<_>>>()?;

        Ok(Self {
            columns,
            column_index,
            rows: expected_len.unwrap_or(0),
        })
    }

    /// Wrap columns that are already named, unique and equally long.
    fn from_named_columns(columns: Vec<Column>) -> Self {
        let column_index = columns
            .iter()
            .enumerate()
            .filter_map(|(idx, column)| column.name().map(|name| (name.to_string(), idx)))
            .collect();
        let rows = columns.first().map_or(0, Column::len);
        Self {
            columns,
            column_index,
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `(row_count, column_count)`.
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.columns.len())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().filter_map(Column::name).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn contains(&self, name: &str) -> bool {
        self.column_index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Column> {
        let idx = *self.column_index.get(name)?;
        self.columns.get(idx)
    }

    pub fn column(&self, name: &str) -> FrameResult<&Column> {
        self.get(name)
            .ok_or_else(|| FrameError::KeyNotFound(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> + '_ {
        self.columns
            .iter()
            .filter_map(|column| column.name().map(|name| (name, column)))
    }

    /// Apply one row mask to every column. The first column that rejects the mask aborts the
    /// whole filter.
    pub fn filter(&self, mask: impl Into<Operand>) -> FrameResult<Table> {
        let mask = mask.into().into_column(unsupported_accessor)?;
        if self.columns.is_empty() {
            // No column to delegate to; still hold the mask to the zero-row shape.
            Column::empty().filter_by(&mask)?;
        }
        let columns = self
            .columns
            .iter()
            .map(|column| column.filter_by(&mask))
            .collect::<FrameResult<Vec<_>>>()?;
        let table = Self::from_named_columns(columns);
        log::debug!(
            "filtered table from {} to {} rows",
            self.rows,
            table.row_count()
        );
        Ok(table)
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.column_names() == other.column_names() && self.columns == other.columns
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.size();
        write!(
            f,
            "Table(size=({rows}, {cols}), column_names={:?})",
            self.column_names()
        )
    }
}
