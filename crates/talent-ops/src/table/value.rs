use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record handed to the table engine.
///
/// Field names and value shapes are owned by the caller; the engine only reads
/// fields through column accessors and never validates the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert, handy for fixtures and seed data.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Raw field lookup. `None` when the field is absent.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Field value as display text, treating absent and `null` fields alike.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.0.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(display_text(value)),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Serializes any record type into a row. Non-object payloads yield an error.
    pub fn from_serialize<T: Serialize>(record: &T) -> Result<Self, serde_json::Error> {
        match serde_json::to_value(record)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(serde::ser::Error::custom(format!(
                "expected a record object, found {}",
                kind_of(&other)
            ))),
        }
    }
}

impl From<Map<String, Value>> for Row {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

/// Coerces a cell value to the text shown in the table and matched by search.
///
/// Integral numbers drop the fractional part, arrays join their items with a
/// comma and nested objects render as compact JSON.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                int.to_string()
            } else if let Some(uint) = number.as_u64() {
                uint.to_string()
            } else {
                let float = number.as_f64().unwrap_or(f64::NAN);
                if float.is_finite() && float.fract() == 0.0 && float.abs() < 1e15 {
                    format!("{}", float as i64)
                } else {
                    float.to_string()
                }
            }
        }
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
