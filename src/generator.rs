//! Core pipeline: allocate sequential surrogate IDs and expand the
//! normalized roster into category, post, exhibition and file rows.
//!
//! ID allocation order is an observable contract: the category pass
//! runs to completion, then posts, then exhibitions, then files; within
//! the file pass each row contributes its thumbnail, poster and video
//! columns (in that order) before its multi-file column.

use chrono::Local;
use indexmap::IndexMap;

use crate::media::{self, MediaType};
use crate::model::{CategoryRow, ExhibitionRow, FileRow, InputRow, PostRow};

const UPLOAD_ROOT: &str = "/uploads";
const UPLOAD_FOLDER: &str = "videos";

/// Current maximum ID of each target table. New IDs start one above.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdBaseline {
    pub category: i64,
    pub post: i64,
    pub exhibition: i64,
    pub file: i64,
}

/// Everything one run produces, ready for rendering.
#[derive(Debug, Clone)]
pub struct GeneratedRows {
    pub categories: Vec<CategoryRow>,
    pub posts: Vec<PostRow>,
    pub exhibitions: Vec<ExhibitionRow>,
    pub files: Vec<FileRow>,
    /// Wall-clock timestamp captured once at run start; shared by every
    /// row's createdAt/updatedAt and by the document header.
    pub generated_at: String,
}

/// The roster → rows transform.
pub struct SqlGenerator {
    baseline: IdBaseline,
    year_segment: String,
}

impl SqlGenerator {
    pub fn new(baseline: IdBaseline, year_segment: impl Into<String>) -> Self {
        Self {
            baseline,
            year_segment: year_segment.into(),
        }
    }

    /// Run the full transform with the current local time as the run
    /// timestamp.
    pub fn generate(&self, rows: &[InputRow]) -> GeneratedRows {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.generate_at(rows, &now)
    }

    /// Run the full transform with an explicit run timestamp.
    pub fn generate_at(&self, rows: &[InputRow], timestamp: &str) -> GeneratedRows {
        let ts = timestamp.to_string();

        // Pass 1: one category per distinct name, first-seen order.
        let mut next_cat = self.baseline.category;
        let mut cat_map: IndexMap<&str, i64> = IndexMap::new();
        for row in rows {
            cat_map.entry(row.category_name.as_str()).or_insert_with(|| {
                next_cat += 1;
                next_cat
            });
        }
        let categories = cat_map
            .iter()
            .map(|(name, id)| CategoryRow {
                id: *id,
                name: name.to_string(),
            })
            .collect();

        // Pass 2: one post per row, input order.
        let mut next_post = self.baseline.post;
        let mut post_ids = Vec::with_capacity(rows.len());
        let mut posts = Vec::with_capacity(rows.len());
        for row in rows {
            next_post += 1;
            post_ids.push(next_post);
            posts.push(PostRow {
                id: next_post,
                category_id: cat_map[row.category_name.as_str()],
                created_at: ts.clone(),
                updated_at: ts.clone(),
            });
        }

        // Pass 3: one exhibition per row, 1:1 with its post.
        let mut next_exh = self.baseline.exhibition;
        let mut exhibitions = Vec::with_capacity(rows.len());
        for (row, post_id) in rows.iter().zip(&post_ids) {
            next_exh += 1;
            exhibitions.push(ExhibitionRow {
                id: next_exh,
                post_id: *post_id,
                title: row.post_title.clone(),
                team: row.team.clone(),
                professor: row.professor.clone(),
                participants: row.participants.clone(),
                created_at: ts.clone(),
                updated_at: ts.clone(),
            });
        }

        // Pass 4: zero or more files per row. Single-media columns
        // first (fixed type), then the slash-delimited multi-file
        // column (type inferred from the extension).
        let mut next_file = self.baseline.file;
        let mut files = Vec::new();
        for (row, post_id) in rows.iter().zip(&post_ids) {
            let singles = [
                (row.thumbnail.as_str(), MediaType::Thumbnail),
                (row.poster.as_str(), MediaType::Poster),
                (row.video.as_str(), MediaType::Video),
            ];
            for (value, media_type) in singles {
                let name = value.trim();
                if !name.is_empty() {
                    next_file += 1;
                    files.push(self.file_row(next_file, *post_id, name, media_type, &ts));
                }
            }

            for name in row.file_names.split('/').map(str::trim) {
                if name.is_empty() {
                    continue;
                }
                next_file += 1;
                let media_type = MediaType::from_filename(name);
                files.push(self.file_row(next_file, *post_id, name, media_type, &ts));
            }
        }

        GeneratedRows {
            categories,
            posts,
            exhibitions,
            files,
            generated_at: ts,
        }
    }

    fn file_row(
        &self,
        id: i64,
        post_id: i64,
        name: &str,
        media_type: MediaType,
        timestamp: &str,
    ) -> FileRow {
        FileRow {
            id,
            post_id,
            name: name.to_string(),
            media_type,
            path: format!(
                "{UPLOAD_ROOT}/{UPLOAD_FOLDER}/{}/{name}",
                self.year_segment
            ),
            mimetype: media::guess_mime(name).to_string(),
            created_at: timestamp.to_string(),
            updated_at: timestamp.to_string(),
        }
    }
}
