use crate::event::{BindValue, Binds, StatementEvent, StatementRecord};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

#[test]
fn binds_keep_parameter_order() {
    // Arrange
    let event = StatementEvent::new("UPDATE users SET name = $1 WHERE id = $2")
        .with_bind("name", "New name")
        .with_bind("id", 1);

    // Act
    let binds = event.binds();

    // Assert
    assert_eq!(binds.names().collect::<Vec<_>>(), vec!["name", "id"]);
    assert_eq!(binds.get("id"), Some(&BindValue::Integer(1)));
}

#[test]
fn repeated_name_replaces_value_in_place() {
    let binds: Binds = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();

    assert_eq!(binds.len(), 2);
    assert_eq!(binds.names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(binds.get("a"), Some(&BindValue::Integer(3)));
}

#[test]
fn binds_iterate_in_order_with_their_types() {
    let binds: Binds = [
        ("id", BindValue::from(7)),
        ("name", BindValue::from("Name")),
        ("deleted_at", BindValue::Null),
        ("birth_date", BindValue::from(NaiveDate::from_ymd_opt(1990, 4, 2).unwrap())),
    ]
    .into_iter()
    .collect();

    let types: Vec<(&str, &str)> = binds.iter().map(|(n, v)| (n, v.type_name())).collect();

    assert_eq!(
        types,
        vec![
            ("id", "integer"),
            ("name", "string"),
            ("deleted_at", "null"),
            ("birth_date", "date"),
        ]
    );
}

#[test]
fn debug_rendering_is_inspect_style() {
    let mut binds = Binds::new();
    binds.insert("id", 1);
    binds.insert("name", "Name");
    binds.insert("deleted_at", BindValue::Null);
    binds.insert("birth_date", NaiveDate::from_ymd_opt(1990, 4, 2).unwrap());

    assert_eq!(
        format!("{binds:?}"),
        r#"{"id": 1, "name": "Name", "deleted_at": NULL, "birth_date": 1990-04-02}"#
    );
}

#[test]
fn record_serializes_with_native_json_values() {
    // Arrange
    let binds: Binds = [
        ("id", BindValue::Integer(7)),
        ("score", BindValue::Float(1.5)),
        ("active", BindValue::Bool(true)),
        ("name", BindValue::from("Name")),
        ("nickname", BindValue::from(None::<String>)),
        (
            "birth_date",
            BindValue::Date(NaiveDate::from_ymd_opt(1990, 4, 2).unwrap()),
        ),
    ]
    .into_iter()
    .collect();
    let record = StatementRecord::new("INSERT INTO users VALUES ($1)", binds);

    // Act
    let json = serde_json::to_string(&record).unwrap();

    // Assert
    assert_eq!(
        json,
        r#"{"sql":"INSERT INTO users VALUES ($1)","binds":{"id":7,"score":1.5,"active":true,"name":"Name","nickname":null,"birth_date":"1990-04-02"}}"#
    );
}

#[test]
fn empty_statement_text_counts_as_absent() {
    assert_eq!(StatementEvent::new("").statement(), None);
    assert_eq!(StatementEvent::without_statement().statement(), None);
    assert_eq!(StatementEvent::new("BEGIN").statement(), Some("BEGIN"));
}
