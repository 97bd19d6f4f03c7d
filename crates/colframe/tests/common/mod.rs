#![allow(dead_code)]

use colframe::{Column, ColumnData, FrameError, Table, Value};

pub fn column<T: Into<Value>>(values: Vec<T>) -> Column {
    Column::new(values).unwrap()
}

pub fn values<T: Into<Value>>(values: Vec<T>) -> Vec<Value> {
    values.into_iter().map(Into::into).collect()
}

/// Message of a validation failure; panics on any other outcome.
pub fn validation_message<T: std::fmt::Debug>(result: Result<T, FrameError>) -> String {
    match result {
        Err(FrameError::Validation(message)) => message,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

pub fn malformed(inner: &str) -> String {
    format!("The frame is malformed and couldn't be converted to a dataframe. The exception is: {inner}")
}

pub fn build_inventory() -> Table {
    Table::new(vec![
        ("SKU", ColumnData::from(vec!["X4E", "T3B", "F8D", "C7X"])),
        ("price", ColumnData::from(vec![7.0, 3.5, 8.0, 6.0])),
        ("sales", ColumnData::from(vec![5, 3, 1, 10])),
        ("taxed", ColumnData::from(vec![false, false, true, false])),
    ])
    .unwrap()
}

pub fn build_students() -> Table {
    Table::new(vec![
        (
            "Student",
            ColumnData::from(vec![
                "Harry Potter",
                "Hermione Granger",
                "Ron Weasley",
                "Draco Malfoy",
                "Neville Longbottom",
            ]),
        ),
        (
            "Course Attendance - DarkArts",
            ColumnData::from(vec![Some(true), Some(false), Some(true), None, Some(false)]),
        ),
        ("Grade - DarkArts", ColumnData::from(vec![9, 9, 8, 8, 7])),
        ("Friends", ColumnData::from(vec![2, 2, 2, 5, 10])),
        (
            "House",
            ColumnData::from(vec![
                Some("Gryffindor"),
                Some("Gryffindor"),
                Some("Gryffindor"),
                Some("Slytherin"),
                None,
            ]),
        ),
        (
            "Quiditch-Seeker",
            ColumnData::from(vec![Some(true), None, Some(false), Some(true), None]),
        ),
    ])
    .unwrap()
}
