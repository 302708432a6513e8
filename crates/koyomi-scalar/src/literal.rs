//! Input literals as supplied by the embedding schema layer.

/// A literal node from a schema-language document.
///
/// Only [`LiteralValue::String`] can carry a date or time; the scalars
/// ignore every other shape without attempting coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    Enum(String),
    List(Vec<LiteralValue>),
    Object(Vec<(String, LiteralValue)>),
}

impl LiteralValue {
    /// A short shape name for logs and diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Enum(_) => "enum",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }
}

impl From<serde_json::Value> for LiteralValue {
    /// Bridges a raw JSON variable value into the literal model.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Boolean(flag),
            serde_json::Value::Number(number) => number
                .as_i64()
                .map_or_else(|| Self::Float(number.as_f64().unwrap_or(f64::NAN)), Self::Int),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(fields) => Self::Object(
                fields
                    .into_iter()
                    .map(|(name, field)| (name, Self::from(field)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_values_map_onto_literal_shapes() {
        let literal = LiteralValue::from(serde_json::json!({
            "when": "2021-06-01",
            "count": 3,
            "ratio": 0.5,
            "flags": [true, null],
        }));

        let LiteralValue::Object(fields) = literal else {
            panic!("expected an object literal");
        };
        assert_eq!(fields.len(), 4);
        // serde_json orders object keys: count, flags, ratio, when.
        assert_eq!(fields[0].1, LiteralValue::Int(3));
        assert_eq!(
            fields[1].1,
            LiteralValue::List(vec![LiteralValue::Boolean(true), LiteralValue::Null])
        );
        assert_eq!(fields[2].1, LiteralValue::Float(0.5));
        assert_eq!(
            fields[3].1,
            LiteralValue::String("2021-06-01".to_string())
        );
    }

    #[test]
    fn kind_names() {
        assert_eq!(LiteralValue::Null.kind(), "null");
        assert_eq!(LiteralValue::Int(1).kind(), "int");
        assert_eq!(LiteralValue::String(String::new()).kind(), "string");
    }
}
