//! Column-oriented view over extracted records.

use crate::error::TableError;
use crate::model::{FieldValue, Record};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    /// Missing value, produced by numeric coercion
    Null,
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

impl From<&FieldValue> for Cell {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Number(n) => Cell::Number(*n),
            FieldValue::Text(s) => Cell::Text(s.clone()),
            sentinel => Cell::Text(sentinel.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{n:.2}"),
            Cell::Null => f.write_str("NaN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    Float,
    Object,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::Float => f.write_str("float64"),
            DType::Object => f.write_str("object"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub non_null: usize,
    pub dtype: DType,
}

#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    cells: Vec<Cell>,
}

impl Column {
    fn dtype(&self) -> DType {
        let mut values = self.cells.iter().filter(|c| !c.is_null()).peekable();
        if values.peek().is_some() && values.all(|c| matches!(c, Cell::Number(_))) {
            DType::Float
        } else {
            DType::Object
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    /// Original row positions, kept through filtering
    index: Vec<usize>,
}

/// A borrowed row of a [`Table`].
pub struct Row<'a> {
    table: &'a Table,
    position: usize,
}

impl<'a> Row<'a> {
    pub fn get(&self, column: &str) -> Option<&'a Cell> {
        self.table
            .column_ref(column)
            .map(|c| &c.cells[self.position])
    }

    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(Cell::as_number)
    }
}

impl Table {
    /// One column per field, in the field order of the first record.
    pub fn from_records(records: &[Record]) -> Self {
        let Some(first) = records.first() else {
            return Self::default();
        };

        let columns = first
            .names()
            .map(|name| Column {
                name: name.to_string(),
                cells: records
                    .iter()
                    .map(|r| r.get(name).map(Cell::from).unwrap_or(Cell::Null))
                    .collect(),
            })
            .collect();

        Self {
            columns,
            index: (0..records.len()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        self.column_ref(name).map(|c| c.cells.as_slice())
    }

    pub fn row(&self, position: usize) -> Option<Row<'_>> {
        (position < self.len()).then_some(Row {
            table: self,
            position,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.len()).map(move |position| Row {
            table: self,
            position,
        })
    }

    /// Numeric view of a column; anything that is not a number is `None`.
    pub fn numeric(&self, name: &str) -> Result<Vec<Option<f64>>, TableError> {
        let column = self
            .column_ref(name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))?;
        Ok(column.cells.iter().map(Cell::as_number).collect())
    }

    /// Replace every non-numeric cell of a column with [`Cell::Null`].
    pub fn coerce_numeric(&mut self, name: &str) -> Result<(), TableError> {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))?;

        for cell in &mut column.cells {
            if !matches!(cell, Cell::Number(_)) {
                *cell = Cell::Null;
            }
        }
        Ok(())
    }

    pub fn filter<F>(&self, predicate: F) -> Table
    where
        F: Fn(&Row<'_>) -> bool,
    {
        let keep: Vec<usize> = self
            .rows()
            .filter(|row| predicate(row))
            .map(|row| row.position)
            .collect();

        Table {
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    cells: keep.iter().map(|&i| c.cells[i].clone()).collect(),
                })
                .collect(),
            index: keep.iter().map(|&i| self.index[i]).collect(),
        }
    }

    /// Rows whose `column` holds a number strictly above `threshold`.
    pub fn filter_greater_than(&self, column: &str, threshold: f64) -> Result<Table, TableError> {
        if self.column_ref(column).is_none() {
            return Err(TableError::UnknownColumn(column.to_string()));
        }
        Ok(self.filter(|row| row.number(column).is_some_and(|n| n > threshold)))
    }

    /// Mean of the numeric cells of a column, `None` if there are none.
    pub fn mean(&self, name: &str) -> Result<Option<f64>, TableError> {
        let values: Vec<f64> = self.numeric(name)?.into_iter().flatten().collect();
        if values.is_empty() {
            return Ok(None);
        }
        Ok(Some(values.iter().sum::<f64>() / values.len() as f64))
    }

    pub fn info(&self) -> Vec<ColumnInfo> {
        self.columns
            .iter()
            .map(|c| ColumnInfo {
                name: c.name.clone(),
                non_null: c.cells.iter().filter(|cell| !cell.is_null()).count(),
                dtype: c.dtype(),
            })
            .collect()
    }

    fn column_ref(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return f.write_str("Empty table");
        }

        let index: Vec<String> = self.index.iter().map(|i| i.to_string()).collect();
        let index_width = index.iter().map(|s| s.len()).max().unwrap_or(0);

        let rendered: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| c.cells.iter().map(|cell| cell.to_string()).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&rendered)
            .map(|(c, cells)| {
                cells
                    .iter()
                    .map(|s| s.chars().count())
                    .chain(std::iter::once(c.name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (column, &width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", column.name)?;
        }

        for (row, label) in index.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{label:<index_width$}")?;
            for (cells, &width) in rendered.iter().zip(&widths) {
                write!(f, "  {:>width$}", cells[row])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    fn record(price: FieldValue, rating: FieldValue) -> Record {
        Record {
            fields: vec![
                Field {
                    name: "price".to_string(),
                    value: price,
                    failure: None,
                },
                Field {
                    name: "rating".to_string(),
                    value: rating,
                    failure: None,
                },
            ],
        }
    }

    fn sample() -> Table {
        Table::from_records(&[
            record(FieldValue::Number(150.0), FieldValue::Number(4.0)),
            record(FieldValue::NotAvailable, FieldValue::NotRated),
            record(FieldValue::Number(20.0), FieldValue::Number(5.0)),
        ])
    }

    #[test]
    fn test_sentinels_load_as_text() {
        let table = sample();
        assert_eq!(table.column("price").unwrap()[1], Cell::Text("N/A".to_string()));
        assert_eq!(
            table.column("rating").unwrap()[1],
            Cell::Text("Not Rated".to_string())
        );
    }

    #[test]
    fn test_coerce_numeric_and_info() {
        let mut table = sample();
        assert_eq!(table.info()[0].dtype, DType::Object);
        assert_eq!(table.info()[0].non_null, 3);

        table.coerce_numeric("price").unwrap();
        assert_eq!(table.column("price").unwrap()[1], Cell::Null);
        assert_eq!(
            table.info()[0],
            ColumnInfo {
                name: "price".to_string(),
                non_null: 2,
                dtype: DType::Float,
            }
        );
    }

    #[test]
    fn test_filter_keeps_original_index() {
        let table = sample();
        let expensive = table.filter_greater_than("price", 100.0).unwrap();

        assert_eq!(expensive.len(), 1);
        assert_eq!(expensive.index, vec![0]);
        assert_eq!(expensive.row(0).unwrap().number("price"), Some(150.0));
    }

    #[test]
    fn test_mean_ignores_missing() {
        let table = sample();
        assert_eq!(table.mean("rating").unwrap(), Some(4.5));

        let none = table.filter(|row| row.number("rating").is_none());
        assert_eq!(none.mean("rating").unwrap(), None);
    }

    #[test]
    fn test_unknown_column() {
        let mut table = sample();
        assert_eq!(
            table.coerce_numeric("weight"),
            Err(TableError::UnknownColumn("weight".to_string()))
        );
        assert!(table.mean("weight").is_err());
    }

    #[test]
    fn test_display_renders_nan() {
        let mut table = sample();
        table.coerce_numeric("price").unwrap();
        let rendered = table.to_string();

        assert!(rendered.contains("price"));
        assert!(rendered.contains("NaN"));
        assert!(rendered.contains("150.00"));
        assert_eq!(rendered.lines().count(), 4);
    }

    #[test]
    fn test_empty_records() {
        let table = Table::from_records(&[]);
        assert!(table.is_empty());
        assert!(table.info().is_empty());
    }
}
