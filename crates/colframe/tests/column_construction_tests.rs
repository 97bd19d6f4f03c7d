mod common;

use colframe::{Column, Value, ValueType};
use common::{column, validation_message, values};
use pretty_assertions::assert_eq;

#[test]
fn infers_type_from_first_non_missing_value() {
    let cases: Vec<(Vec<Value>, ValueType)> = vec![
        (vec![], ValueType::Unknown),
        (values(vec![1, 2, 3]), ValueType::Integer),
        (vec![Value::Missing, Value::Missing], ValueType::Unknown),
        (values(vec![1.0, 2.0, 3.0]), ValueType::Real),
        (values(vec!["Test", "Test"]), ValueType::String),
        (
            values(vec![None, Some("Test"), None, Some("Test"), Some("None")]),
            ValueType::String,
        ),
        (values(vec![Some(false), None]), ValueType::Boolean),
    ];

    for (input, expected) in cases {
        let col = Column::new(input.clone()).unwrap();
        assert_eq!(col.value_type(), expected, "input: {input:?}");
        assert_eq!(col.values(), input.as_slice());
        assert_eq!(col.len(), input.len());
    }
}

#[test]
fn rejects_mixed_concrete_types() {
    let mixed = vec![Value::from(false), Value::from("Test"), Value::from(1.2)];
    assert_eq!(
        validation_message(Column::new(mixed)),
        "The elements in the series are not of same type."
    );

    assert_eq!(
        validation_message(Column::try_from(vec![Value::from(1), Value::from("1")])),
        "The elements in the series are not of same type."
    );

    let int_and_real = vec![
        Value::from(1),
        Value::from(2),
        Value::from(3),
        Value::from(4.0),
        Value::from(5.0),
    ];
    assert_eq!(
        validation_message(Column::new(int_and_real)),
        "The elements in the series are not of same type."
    );
}

#[test]
fn missing_values_do_not_hide_a_type_mismatch() {
    let mixed = vec![Value::from(1), Value::Missing, Value::from("x")];
    assert_eq!(
        validation_message(Column::new(mixed)),
        "The elements in the series are not of same type."
    );
}

#[test]
fn named_column_reports_its_name() {
    let err = Column::named("Number", vec![Value::from(0.1), Value::from("Test")]);
    assert_eq!(
        validation_message(err),
        "The elements in the series 'Number' are not of same type."
    );

    let col = Column::named("Number", vec![0.1, 0.2]).unwrap();
    assert_eq!(col.name(), Some("Number"));
}

#[test]
fn display_lists_values_and_type() {
    assert_eq!(
        column(vec![Some(1), None]).to_string(),
        "Column(len=2, values=[1, None], type=integer)"
    );
    assert_eq!(
        column(vec!["a"]).to_string(),
        "Column(len=1, values=[\"a\"], type=string)"
    );
    assert_eq!(
        Column::empty().with_name("SKU").to_string(),
        "Column(name=\"SKU\", len=0, values=[], type=unknown)"
    );
    assert_eq!(
        column(vec![7.0, 3.5]).to_string(),
        "Column(len=2, values=[7.0, 3.5], type=real)"
    );
}

#[test]
fn equality_ignores_name() {
    let named = Column::named("a", vec![1, 2]).unwrap();
    assert_eq!(named, column(vec![1, 2]));
    assert_ne!(column(vec![1, 2]), column(vec![1.0, 2.0]));
}

#[test]
fn count_true_skips_false_and_missing() {
    let mask = column(vec![Some(true), None, Some(false), Some(true)]);
    assert_eq!(mask.count_true(), 2);
}
