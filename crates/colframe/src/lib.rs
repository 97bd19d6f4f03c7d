//! In-memory tables of homogeneously typed columns.
//!
//! This crate focuses on:
//! - Columns with inferred, single-type storage and explicit missing values.
//! - Element-wise arithmetic, comparison, equality and boolean operators that return new columns.
//! - Boolean-mask filtering shared by columns and tables.
//!
//! Columns and tables are immutable once built; every operation returns a fresh value and a
//! failed operation leaves its inputs untouched.

#![forbid(unsafe_code)]

mod column;
mod error;
#[cfg(feature = "json")]
mod json;
mod operand;
mod scalar;
mod table;
mod value;

pub use crate::column::Column;
pub use crate::error::{FrameError, FrameResult, ScalarError};
pub use crate::operand::{Operand, Selection, Selector};
pub use crate::table::{ColumnData, Table};
pub use crate::value::{Value, ValueType};
