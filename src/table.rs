use crate::error::{Error, Result};

/// Cell value as read from the source. `None` marks a value the row never
/// supplied, which is not the same as an empty string.
pub type Value = Option<String>;

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>, // positional, always `columns.len()` wide
}

#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    values: &'a [Value],
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: vec![],
        }
    }

    /// Appends a row, padding missing trailing values with `None` and
    /// dropping anything past the last column.
    pub fn push_row(&mut self, mut values: Vec<Value>) {
        values.resize(self.columns.len(), None);
        self.rows.push(values);
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| Error::MissingColumn(name.to_owned()))
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|values| Row {
            values: values.as_slice(),
        })
    }
}

impl<'a> Row<'a> {
    /// Value at a position from `Table::column_index`; `None` when the row
    /// never supplied it.
    pub fn at(&self, index: usize) -> Option<&'a str> {
        self.values.get(index)?.as_deref()
    }
}
