//! Excel collaborator: read the first worksheet of a roster `.xlsx`
//! into the generic [`Table`] the pipeline consumes.

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};

use crate::error::{SeedError, SeedResult};
use crate::table::{Cell, Table};

/// Roster importer for `.xlsx` files. Only the first worksheet is read;
/// the header row provides the column names.
pub struct RosterImporter {
    path: PathBuf,
}

impl RosterImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the workbook's first sheet. A workbook without sheets or
    /// without a header row yields an empty table; the normalizer then
    /// reports the missing required columns.
    pub fn import(&self) -> SeedResult<Table> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| SeedError::Excel(format!("failed to open {}: {e}", self.path.display())))?;

        let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
            return Ok(Table::new());
        };

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| SeedError::Excel(format!("failed to read sheet {sheet_name}: {e}")))?;

        Ok(self.range_to_table(&range))
    }

    fn range_to_table(&self, range: &Range<Data>) -> Table {
        let (height, width) = range.get_size();
        if height == 0 {
            return Table::new();
        }

        // Header row
        let mut column_names = Vec::with_capacity(width);
        for col in 0..width {
            let name = match range.get((0, col)) {
                Some(Data::String(s)) => s.clone(),
                Some(Data::Int(i)) => i.to_string(),
                Some(Data::Float(f)) => f.to_string(),
                _ => format!("col_{col}"),
            };
            column_names.push(name);
        }

        // Data rows, column-major
        let mut table = Table::new();
        for (col, name) in column_names.into_iter().enumerate() {
            let cells = (1..height)
                .map(|row| match range.get((row, col)) {
                    Some(data) => convert_cell(data),
                    None => Cell::Empty,
                })
                .collect();
            table.add_column(name, cells);
        }
        table
    }
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) => Cell::Empty,
    }
}
