//! Data model for the pipeline: the normalized input row and the four
//! output row types, one per target table.
//!
//! Output columns carry the exact names of the destination schema
//! (`CategoryId`, `PostId`, `youtubeId`, `createdAt`, ...), so the
//! rendered INSERT statements load without any column mapping.

use crate::media::MediaType;

/// One roster record after column normalization. Every field is a plain
/// string; absent columns and empty cells have already collapsed to `""`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputRow {
    pub category_name: String,
    pub post_title: String,
    pub participants: String,
    pub professor: String,
    pub team: String,
    pub file_names: String,
    pub thumbnail: String,
    pub poster: String,
    pub video: String,
}

/// A value destined for one INSERT tuple slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::Text(s)
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        SqlValue::Int(n)
    }
}

/// A record that knows how to lay itself out as one INSERT tuple.
/// All rows of one type share the same column set, in a fixed order.
pub trait SqlRow {
    const TABLE: &'static str;

    fn columns() -> &'static [&'static str];
    fn values(&self) -> Vec<SqlValue>;
}

/// One row of the `category` table.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
}

impl SqlRow for CategoryRow {
    const TABLE: &'static str = "category";

    fn columns() -> &'static [&'static str] {
        &["id", "name"]
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![self.id.into(), self.name.clone().into()]
    }
}

/// One row of the `post` table. Every generated post is an exhibition
/// board entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRow {
    pub id: i64,
    pub category_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl SqlRow for PostRow {
    const TABLE: &'static str = "post";

    fn columns() -> &'static [&'static str] {
        &["id", "CategoryId", "board_type", "createdAt", "updatedAt"]
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.category_id.into(),
            "exhibition".into(),
            self.created_at.clone().into(),
            self.updated_at.clone().into(),
        ]
    }
}

/// One row of the `exhibition` table, 1:1 with its parent post.
#[derive(Debug, Clone, PartialEq)]
pub struct ExhibitionRow {
    pub id: i64,
    pub post_id: i64,
    pub title: String,
    pub team: String,
    pub professor: String,
    pub participants: String,
    pub created_at: String,
    pub updated_at: String,
}

impl SqlRow for ExhibitionRow {
    const TABLE: &'static str = "exhibition";

    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "PostId",
            "title",
            "team",
            "professor",
            "text",
            "representative",
            "participants",
            "group",
            "youtubeId",
            "likes",
            "createdAt",
            "updatedAt",
        ]
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.post_id.into(),
            self.title.clone().into(),
            self.team.clone().into(),
            self.professor.clone().into(),
            "".into(),
            "".into(),
            self.participants.clone().into(),
            "작품".into(),
            0.into(),
            0.into(),
            self.created_at.clone().into(),
            self.updated_at.clone().into(),
        ]
    }
}

/// One row of the `file` table: a media asset attached to a post.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRow {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub media_type: MediaType,
    pub path: String,
    pub mimetype: String,
    pub created_at: String,
    pub updated_at: String,
}

impl SqlRow for FileRow {
    const TABLE: &'static str = "file";

    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "PostId",
            "name",
            "type",
            "path",
            "mimetype",
            "size",
            "createdAt",
            "updatedAt",
        ]
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.post_id.into(),
            self.name.clone().into(),
            self.media_type.as_str().into(),
            self.path.clone().into(),
            self.mimetype.clone().into(),
            0.into(),
            self.created_at.clone().into(),
            self.updated_at.clone().into(),
        ]
    }
}
