mod common;

use colframe::{Column, FrameError, Selection, Selector, Value, ValueType};
use common::{column, validation_message, values};
use pretty_assertions::assert_eq;

#[test]
fn mask_keeps_concrete_true_positions() {
    let cases: Vec<(Vec<Value>, Vec<Value>, Vec<Value>)> = vec![
        (
            values(vec![Some(1), Some(2), Some(3), Some(4), None]),
            values(vec![true, false, true, false, true]),
            values(vec![Some(1), Some(3), None]),
        ),
        (
            values(vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), None]),
            values(vec![true, true, true, true, false]),
            values(vec![1.0, 2.0, 3.0, 4.0]),
        ),
        (
            values(vec![Some(true), Some(false), Some(true), Some(false), None]),
            values(vec![true; 5]),
            values(vec![Some(true), Some(false), Some(true), Some(false), None]),
        ),
        (
            values(vec![Some("True"), Some("False"), Some("True"), Some("False"), None]),
            values(vec![None, None, None, None, Some(true)]),
            vec![Value::Missing],
        ),
        (
            vec![Value::Missing; 4],
            values(vec![true, false, false, false]),
            vec![Value::Missing],
        ),
        (
            values(vec![Some(1), Some(2), Some(3), Some(4), None, None]),
            values(vec![Some(true), Some(false), Some(true), Some(false), Some(true), None]),
            values(vec![Some(1), Some(3), None]),
        ),
        (vec![Value::Missing; 4], vec![Value::Missing; 4], vec![]),
    ];

    for (input, mask, expected) in cases {
        let out = column(input.clone()).filter(mask.clone()).unwrap();
        assert_eq!(out.values(), expected.as_slice(), "{input:?} masked by {mask:?}");
    }
}

#[test]
fn filter_accepts_a_boolean_column() {
    let prices = column(vec![7.0, 3.5, 8.0, 6.0]);
    let mask = prices.greater_than(6.5).unwrap();
    let out = prices.filter(&mask).unwrap();
    assert_eq!(out.values(), values(vec![7.0, 8.0]));
    assert_eq!(out.value_type(), ValueType::Real);
}

#[test]
fn filter_rejects_non_boolean_masks() {
    let col = column(vec![Some(true), Some(false), Some(true), Some(false), None]);
    assert_eq!(
        validation_message(col.filter(vec![1.0, 2.0, 3.0, 4.0])),
        "Unsupported operation. The filtering on the series works on bool type series/list. The provided type is real."
    );
    assert_eq!(
        validation_message(col.filter(vec![1, 2, 3, 4, 5])),
        "Unsupported operation. The filtering on the series works on bool type series/list. The provided type is integer."
    );
    assert_eq!(
        validation_message(col.filter(vec![Some("True"), Some("False"), Some("True"), Some("False"), None])),
        "Unsupported operation. The filtering on the series works on bool type series/list. The provided type is string."
    );
}

#[test]
fn filter_rejects_mask_of_other_length() {
    assert_eq!(
        validation_message(Column::empty().filter(vec![true])),
        "The length of the series and the filter list/series is not equal."
    );
}

#[test]
fn filter_rejects_scalar_keys() {
    assert_eq!(
        validation_message(column(vec![1, 2, 3, 4]).filter(2.0)),
        "Unsupported operation. Accessibility of the series could be performed only using an integer or list of boolean values."
    );
}

#[test]
fn filter_keeps_name_and_source() {
    let col = Column::named("sales", vec![5, 3, 1, 10]).unwrap();
    let out = col.filter(vec![true, false, false, true]).unwrap();
    assert_eq!(out.name(), Some("sales"));
    assert_eq!(out.values(), values(vec![5, 10]));
    assert_eq!(col.values(), values(vec![5, 3, 1, 10]));
}

#[test]
fn get_reads_by_position() {
    let col = column(vec![Some(1), Some(2), Some(3), Some(4), None]);
    assert_eq!(col.get(4).unwrap(), &Value::Missing);
    assert_eq!(col.get(0).unwrap(), &Value::Integer(1));
    assert_eq!(col.get(-5).unwrap(), &Value::Integer(1));
    assert_eq!(col.get(-1).unwrap(), &Value::Missing);
}

#[test]
fn get_out_of_range() {
    let col = column(vec![1, 2, 3, 4]);
    assert_eq!(
        col.get(5).unwrap_err(),
        FrameError::IndexOutOfRange { index: 5, len: 4 }
    );
    assert_eq!(
        col.get(-5).unwrap_err(),
        FrameError::IndexOutOfRange { index: -5, len: 4 }
    );
    assert!(Column::empty().get(0).is_err());
}

#[test]
fn select_dispatches_on_key() {
    let col = column(vec![1, 2, 3, 4]);
    assert_eq!(col.select(2).unwrap(), Selection::Value(Value::Integer(3)));
    assert_eq!(
        col.select(vec![true, false, false, true])
            .unwrap()
            .into_column()
            .unwrap()
            .values(),
        values(vec![1, 4])
    );

    let mask = column(vec![false, true, true, false]);
    assert_eq!(
        col.select(&mask).unwrap(),
        Selection::Column(column(vec![2, 3]))
    );
}

#[test]
fn only_integers_select_by_position() {
    assert_eq!(
        Selector::try_from(Value::Integer(1)).unwrap(),
        Selector::Position(1)
    );
    for key in [Value::Real(2.0), Value::from("1"), Value::Boolean(true), Value::Missing] {
        assert_eq!(
            validation_message(Selector::try_from(key)),
            "Unsupported operation. Accessibility of the series could be performed only using an integer or list of boolean values."
        );
    }
}
