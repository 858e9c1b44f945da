//! A tagged view over `serde_json::Value`.
//!
//! Every predicate asks the same three questions of a value: is it a string,
//! a sequence, or a mapping? `Shape::of` answers once, and callers match on
//! the result instead of probing `Value` variants individually.

use serde_json::{Map, Value};

/// The structural category of a JSON value, borrowing its contents.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Text(&'a str),
    Sequence(&'a [Value]),
    Mapping(&'a Map<String, Value>),
    /// `null`, booleans and numbers. No check in this crate accepts them.
    Other(&'a Value),
}

impl<'a> Shape<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Shape::Text(s),
            Value::Array(items) => Shape::Sequence(items),
            Value::Object(map) => Shape::Mapping(map),
            other => Shape::Other(other),
        }
    }

    /// Short noun phrase used in diagnostic messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Shape::Text(_) => "a string",
            Shape::Sequence(_) => "a sequence",
            Shape::Mapping(_) => "a mapping",
            Shape::Other(Value::Null) => "null",
            Shape::Other(Value::Bool(_)) => "a boolean",
            Shape::Other(_) => "a number",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Shape::Text(_))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use yare::parameterized;

    use super::*;

    #[parameterized(
        string = { json!("s3:GetObject"), "a string" },
        empty_string = { json!(""), "a string" },
        sequence = { json!(["a", 1]), "a sequence" },
        mapping = { json!({"Effect": "Allow"}), "a mapping" },
        null = { json!(null), "null" },
        boolean = { json!(true), "a boolean" },
        integer = { json!(1), "a number" },
        float = { json!(1.5), "a number" },
    )]
    fn test_shape_describe(value: Value, expected: &str) {
        assert_eq!(Shape::of(&value).describe(), expected);
    }

    #[test]
    fn test_shape_borrows_contents() {
        let value = json!(["arn:aws:s3:::bucket", "*"]);
        match Shape::of(&value) {
            Shape::Sequence(items) => assert_eq!(items.len(), 2),
            other => panic!("expected Sequence, got {:?}", other),
        }

        let text = json!("Allow");
        assert!(matches!(Shape::of(&text), Shape::Text("Allow")));
        assert!(Shape::of(&text).is_text());
    }
}
