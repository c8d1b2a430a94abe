//! Translation Table Common Library
//!
//! 用語集の型・YAML読み込み・表示幅切り詰め・Markdown表生成

pub mod types;
pub mod layout;
pub mod width;
pub mod error;
pub mod parser;
pub mod render;

pub use types::{Field, GlossaryEntry, GlossaryTable, SkippedEntry};
pub use layout::{CellPolicy, ColumnDefinition, ColumnWidths, TableLayout};
pub use width::{slice_chars, truncate_to_width, truncate_units, TruncateMode, WidthRule, DEFAULT_SUFFIX};
pub use error::{Error, Result};
pub use parser::parse_glossary;
pub use render::{render_document, render_table, RenderOptions};
