//! Generic tabular input model: rows × named columns, as handed over by
//! the spreadsheet importer. The pipeline never touches spreadsheet
//! binary formats directly; it only sees this table.

use indexmap::IndexMap;

/// A single parsed cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Coerce the cell to the string form the pipeline works with.
    ///
    /// Empty cells become `""`. Integer-valued numbers drop the
    /// fractional part, so a numeric section column reads back as
    /// `"41"` rather than `"41.0"`.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(true) => "TRUE".to_string(),
            Cell::Bool(false) => "FALSE".to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Column-major table with insertion-ordered columns.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: IndexMap<String, Vec<Cell>>,
    row_count: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column. Shorter columns are padded with empty cells so
    /// every column always spans `row_count` rows.
    pub fn add_column(&mut self, name: impl Into<String>, mut cells: Vec<Cell>) {
        if cells.len() > self.row_count {
            self.row_count = cells.len();
            for existing in self.columns.values_mut() {
                existing.resize(self.row_count, Cell::Empty);
            }
        } else {
            cells.resize(self.row_count, Cell::Empty);
        }
        self.columns.insert(name.into(), cells);
    }

    /// Copy `src` under the name `dst` if `src` exists and `dst` does not.
    /// Returns whether a copy happened.
    pub fn copy_column(&mut self, src: &str, dst: &str) -> bool {
        if !self.has_column(src) || self.has_column(dst) {
            return false;
        }
        let cells = self.columns[src].clone();
        self.columns.insert(dst.to_string(), cells);
        true
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn cell(&self, name: &str, row: usize) -> Option<&Cell> {
        self.columns.get(name).and_then(|c| c.get(row))
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}
