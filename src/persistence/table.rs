use std::fmt::Display;

use serde_json::{Map, Value as JsonValue};

use super::row::{Row, Value};
use super::schema::Schema;

/// An in-memory snapshot of one dashboard table: a name, its fixed
/// [`Schema`] and the ordered rows parsed from the backing file.
///
/// A [`Table`] is always derived fresh from disk by the store and thrown
/// away after use, so it carries no locks and no dirty-tracking; it is
/// the dumb grid the presentation layer renders.
pub struct Table {
    name: String,
    schema: Schema,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(name: &str, schema: Schema) -> Table {
        Table {
            name: name.to_string(),
            schema,
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn push_record(&mut self, record: Vec<String>) {
        //! Append one textual record, parsing each cell according to its
        //! column's datatype. Short records are padded with empty text
        //! and long records are truncated, so a ragged file still loads.

        let mut record = record;
        record.resize(self.schema.len(), String::new());

        let row = record
            .iter()
            .zip(self.schema.get_vec())
            .map(|(raw, (_, datatype))| Value::parse(raw, *datatype))
            .collect();

        self.rows.push(Row(row));
    }

    pub fn rows(&self) -> &[Row] {
        self.rows.as_slice()
    }

    pub fn count_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn records(&self) -> Vec<Vec<String>> {
        //! All rows back in textual form, ready for the writer.

        self.rows.iter().map(|row| row.record()).collect()
    }

    pub fn column_values(&self, column_name: &str) -> Option<Vec<&Value>> {
        //! Every cell of the named column, in row order. Returns
        //! [`None`] when the column is not part of the schema.

        let index = self.schema.position(column_name)?;
        Some(self.rows.iter().filter_map(|row| row.0.get(index)).collect())
    }

    pub fn to_json(&self) -> JsonValue {
        //! The whole table as a JSON array of objects, one object per
        //! row, keyed by column name.

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut object = Map::new();
                for ((column, _), value) in self.schema.get_vec().iter().zip(row.0.iter()) {
                    let cell = serde_json::to_value(value).unwrap_or(JsonValue::Null);
                    object.insert(column.clone(), cell);
                }
                JsonValue::Object(object)
            })
            .collect();

        JsonValue::Array(rows)
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self.rows.iter().map(|row| format!("{}", row)).collect();

        writeln!(f, "{}\n{}", self.schema, rows.join("\n"))
    }
}
