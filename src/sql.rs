//! SQL text rendering: value escaping, multi-row INSERT statements and
//! the final document layout.

use crate::generator::GeneratedRows;
use crate::model::{SqlRow, SqlValue};

/// Render one value as a SQL literal.
///
/// Missing values become `NULL`, the empty string stays a quoted empty
/// string, numbers render unquoted (integer-valued floats in integer
/// form), and everything else becomes a single-quoted literal with
/// backslashes and single quotes escaped.
pub fn escape(value: &SqlValue) -> String {
    match value {
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Int(n) => n.to_string(),
        SqlValue::Float(f) if f.is_nan() => "NULL".to_string(),
        SqlValue::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{}", *f as i64),
        SqlValue::Float(f) => f.to_string(),
        SqlValue::Text(s) if s.is_empty() => "''".to_string(),
        SqlValue::Text(s) => {
            let escaped = s.replace('\\', "\\\\").replace('\'', "\\'");
            format!("'{escaped}'")
        }
    }
}

/// Render one multi-row INSERT statement. An empty row slice renders
/// nothing at all; the caller simply concatenates, so empty tables
/// leave no trace in the document.
pub fn insert_statement<R: SqlRow>(rows: &[R]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let col_sql = R::columns()
        .iter()
        .map(|c| format!("`{c}`"))
        .collect::<Vec<_>>()
        .join(", ");

    let val_sql = rows
        .iter()
        .map(|row| {
            let tuple = row
                .values()
                .iter()
                .map(escape)
                .collect::<Vec<_>>()
                .join(", ");
            format!("  ({tuple})")
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!("INSERT INTO `{}` ({col_sql}) VALUES\n{val_sql};\n", R::TABLE)
}

/// Assemble the full output document: header comment, session settings,
/// the four table statements in fixed order, and the closing FK toggle.
pub fn render_document(rows: &GeneratedRows) -> String {
    format!(
        "-- AUTO-GENERATED {}\nSET NAMES utf8mb4;\nSET FOREIGN_KEY_CHECKS = 0;\n{}{}{}{}SET FOREIGN_KEY_CHECKS = 1;\n",
        rows.generated_at,
        insert_statement(&rows.categories),
        insert_statement(&rows.posts),
        insert_statement(&rows.exhibitions),
        insert_statement(&rows.files),
    )
}
