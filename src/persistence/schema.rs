use std::fmt::Display;

#[derive(Clone, Copy, PartialEq)]
pub enum DataType {
    Number,
    Text,
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let datatype = match self {
            DataType::Number => "NUM",
            DataType::Text => "TXT",
        };
        write!(f, "{}", datatype)
    }
}

/// The fixed column list of a table: an ordered mapping of column names
/// to the [`DataType`] their cells parse as.
///
/// A schema is set once, at table registration, and never altered after
/// that. There is no nullability, no length limits and no key
/// constraints; the dashboard tables are too small to need them.
#[derive(Clone)]
pub struct Schema(Vec<(String, DataType)>);

impl Schema {
    pub fn new(columns: Vec<(&str, DataType)>) -> Schema {
        //! Create a schema from an ordered list of column names and
        //! their datatypes.

        Schema(
            columns
                .into_iter()
                .map(|(name, datatype)| (name.to_string(), datatype))
                .collect(),
        )
    }

    pub fn get(&self, index: usize) -> Option<&(String, DataType)> {
        //! Get the column name and datatype at `index`.

        self.0.get(index)
    }

    pub fn get_vec(&self) -> &Vec<(String, DataType)> {
        //! Get the column list as a read-only reference.

        self.0.as_ref()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn position(&self, column_name: &str) -> Option<usize> {
        //! Find the index of the named column, if it exists.

        self.0.iter().position(|(name, _)| name == column_name)
    }

    pub fn header(&self) -> Vec<String> {
        //! The header record of the backing file: all column names,
        //! in schema order.

        self.0.iter().map(|(name, _)| name.clone()).collect()
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let schema: Vec<String> = self
            .0
            .iter()
            .map(|(col, datatype)| format!("{} ({})", col.as_str(), datatype))
            .collect();
        write!(f, "{}", schema.join(" | "))
    }
}
