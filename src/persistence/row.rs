use std::fmt::Display;

use serde::{Serialize, Serializer};

use super::schema::DataType;

/// One cell of a row. Numeric columns hold [`Value::Number`], everything
/// else holds [`Value::Text`].
///
/// A cell that sits in a numeric column but does not parse as a number
/// degrades to text instead of failing the whole load. Hand-edited files
/// are a fact of life for this store.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    pub fn parse(raw: &str, datatype: DataType) -> Value {
        //! Parse one textual cell according to the column's datatype.

        match datatype {
            DataType::Number => match raw.parse::<f64>() {
                Ok(number) => Value::Number(number),
                Err(_) => Value::Text(raw.to_string()),
            },
            DataType::Text => Value::Text(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Text(text) => Some(text.as_str()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Whole numbers print without a trailing ".0" so a rewrite of
            // "5400" never turns it into "5400.0" on disk.
            Value::Number(number) if number.fract() == 0.0 && number.is_finite() => {
                write!(f, "{}", *number as i64)
            }
            Value::Number(number) => write!(f, "{}", number),
            Value::Text(text) => write!(f, "{}", text),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Number(number) if number.fract() == 0.0 && number.is_finite() => {
                serializer.serialize_i64(*number as i64)
            }
            Value::Number(number) => serializer.serialize_f64(*number),
            Value::Text(text) => serializer.serialize_str(text),
        }
    }
}

#[derive(Clone, Serialize)]
pub struct Row(pub Vec<Value>);

impl Row {
    pub fn record(&self) -> Vec<String> {
        //! The textual form of the row, one string per cell, in column
        //! order. This is what goes back into the backing file.

        self.0.iter().map(|value| value.to_string()).collect()
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row: Vec<String> = self.0.iter().map(|value| value.to_string()).collect();
        write!(f, "{}", row.join(" | "))
    }
}
