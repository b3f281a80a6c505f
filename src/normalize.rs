//! Column normalization: map the bilingual roster headers onto the
//! canonical column set, validate the two required columns, and default
//! everything else to the empty string.

use crate::error::{SeedError, SeedResult};
use crate::model::InputRow;
use crate::table::Table;

/// Roster header → canonical column. A source column is copied only
/// when the canonical name is not already present, so an explicit
/// canonical column always wins over its alias.
const COLUMN_ALIASES: &[(&str, &str)] = &[
    ("분반", "category_name"),
    ("작품명", "post_title"),
    ("조원", "participants"),
    ("담당교수", "professor"),
    ("파일", "file_names"),
    ("조", "team"),
    ("썸네일", "thumbnail"),
    ("포스터", "poster"),
    ("영상", "video"),
];

/// Columns that must exist after aliasing. Their absence is the only
/// failure in the whole pipeline.
const REQUIRED_COLUMNS: &[&str] = &["category_name", "post_title"];

/// Normalize a raw roster table into one `InputRow` per data row.
///
/// The caller's table is left untouched; aliasing happens on a copy.
/// Fails with [`SeedError::MissingColumns`] before any ID is allocated
/// when `category_name` or `post_title` cannot be resolved.
pub fn normalize(table: &Table) -> SeedResult<Vec<InputRow>> {
    let mut table = table.clone();

    for (src, dst) in COLUMN_ALIASES {
        table.copy_column(src, dst);
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !table.has_column(col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SeedError::MissingColumns(missing));
    }

    let text_at = |name: &str, row: usize| -> String {
        table.cell(name, row).map(|c| c.to_text()).unwrap_or_default()
    };

    let rows = (0..table.row_count())
        .map(|row| InputRow {
            category_name: text_at("category_name", row),
            post_title: text_at("post_title", row),
            participants: text_at("participants", row),
            professor: text_at("professor", row),
            team: text_at("team", row),
            file_names: text_at("file_names", row),
            thumbnail: text_at("thumbnail", row),
            poster: text_at("poster", row),
            video: text_at("video", row),
        })
        .collect();

    Ok(rows)
}
