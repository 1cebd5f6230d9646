// File: crates/lumi-core/src/columns.rs
// Summary: Column table with helpers that extract array elements into scalar columns.
// Notes:
// - Derived columns are named `array[index]`, matching how plot expressions refer to them.
// - Every column in a table has the same row count.

use log::debug;

use crate::error::ColumnError;

#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    Float(Vec<f32>),
    Int(Vec<i64>),
    FloatArray(Vec<Vec<f32>>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Float(v) => v.len(),
            Column::Int(v) => v.len(),
            Column::FloatArray(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn as_floats(&self) -> Option<&[f32]> {
        match self {
            Column::Float(v) => Some(v),
            _ => None,
        }
    }
}

/// Named columns kept in insertion order.
#[derive(Clone, Debug, Default)]
pub struct ColumnTable {
    rows: usize,
    columns: Vec<(String, Column)>,
}

impl ColumnTable {
    pub fn new() -> Self { Self::default() }

    pub fn rows(&self) -> usize { self.rows }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Add a column; the first column fixes the table's row count.
    pub fn insert(&mut self, name: impl Into<String>, column: Column) -> Result<(), ColumnError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(ColumnError::Duplicate(name));
        }
        if self.columns.is_empty() {
            self.rows = column.len();
        } else if column.len() != self.rows {
            return Err(ColumnError::RowCount { name, expected: self.rows, actual: column.len() });
        }
        self.columns.push((name, column));
        Ok(())
    }

    pub fn with(mut self, name: impl Into<String>, column: Column) -> Result<Self, ColumnError> {
        self.insert(name, column)?;
        Ok(self)
    }

    fn arrays(&self, name: &str) -> Result<&[Vec<f32>], ColumnError> {
        match self.get(name) {
            Some(Column::FloatArray(v)) => Ok(v),
            Some(_) => Err(ColumnError::WrongKind { name: name.to_string(), expected: "a float array column" }),
            None => Err(ColumnError::Missing(name.to_string())),
        }
    }

    /// Define `array[index_column]`: row i takes element `index_column[i]` of `array[i]`.
    /// Returns the new column's name.
    pub fn define_array_element(&mut self, array: &str, index_column: &str) -> Result<String, ColumnError> {
        let indices = match self.get(index_column) {
            Some(Column::Int(v)) => v.clone(),
            Some(_) => {
                return Err(ColumnError::WrongKind { name: index_column.to_string(), expected: "an integer column" })
            }
            None => return Err(ColumnError::Missing(index_column.to_string())),
        };
        let arrays = self.arrays(array)?;
        let values = arrays
            .iter()
            .zip(&indices)
            .enumerate()
            .map(|(row, (a, &i))| element(a, i, row))
            .collect::<Result<Vec<_>, _>>()?;
        let name = format!("{array}[{index_column}]");
        self.insert(name.clone(), Column::Float(values))?;
        debug!("defined column {name} over {} rows", self.rows);
        Ok(name)
    }

    /// Define `array[<index>]`: row i takes element `index` of `array[i]`.
    /// Returns the new column's name.
    pub fn define_array_element_at(&mut self, array: &str, index: usize) -> Result<String, ColumnError> {
        let wide = i64::try_from(index).unwrap_or(i64::MAX);
        let values = self
            .arrays(array)?
            .iter()
            .enumerate()
            .map(|(row, a)| element(a, wide, row))
            .collect::<Result<Vec<_>, _>>()?;
        let name = format!("{array}[{index}]");
        self.insert(name.clone(), Column::Float(values))?;
        debug!("defined column {name} over {} rows", self.rows);
        Ok(name)
    }
}

fn element(a: &[f32], index: i64, row: usize) -> Result<f32, ColumnError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| a.get(i).copied())
        .ok_or(ColumnError::IndexOutOfBounds { row, index, len: a.len() })
}
