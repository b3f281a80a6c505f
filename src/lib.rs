//! sqlseed - exhibition roster spreadsheet → bulk SQL INSERT statements
//!
//! This library turns an already-parsed roster table into one SQL
//! document seeding four related tables (category, post, exhibition,
//! file), assigning sequential surrogate IDs above caller-supplied
//! maxima and deriving file paths and MIME types from filename columns.
//!
//! # Example
//!
//! ```
//! use sqlseed::generator::{IdBaseline, SqlGenerator};
//! use sqlseed::normalize::normalize;
//! use sqlseed::table::{Cell, Table};
//! use sqlseed::sql;
//!
//! let mut table = Table::new();
//! table.add_column("분반", vec![Cell::Text("41".to_string())]);
//! table.add_column("작품명", vec![Cell::Text("Demo".to_string())]);
//!
//! let rows = normalize(&table)?;
//! let generated = SqlGenerator::new(IdBaseline::default(), "20251").generate(&rows);
//! let document = sql::render_document(&generated);
//!
//! assert!(document.contains("INSERT INTO `exhibition`"));
//! # Ok::<(), sqlseed::SeedError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod generator;
pub mod media;
pub mod model;
pub mod normalize;
pub mod sql;
pub mod table;

// Re-export commonly used types
pub use error::{SeedError, SeedResult};
pub use generator::{GeneratedRows, IdBaseline, SqlGenerator};
pub use model::{CategoryRow, ExhibitionRow, FileRow, InputRow, PostRow, SqlRow, SqlValue};
pub use table::{Cell, Table};
