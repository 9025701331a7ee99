//! CSV export of Notion databases.
//!
//! The paginated query loop and the per-property cell formatter.

mod csv;
mod format;

pub use csv::{export_database, ExportOptions, ExportStats};
pub use format::format_property;
