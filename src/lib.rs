// Export modules
pub mod config;
pub mod document;
pub mod error;
pub mod filename;
pub mod fusion;
pub mod render;
pub mod table;

// Re-export commonly used types
pub use config::{load_config, Config};
pub use document::{generate_report, write_document, ReportSummary};
pub use error::ReportError;
pub use filename::{FilenameParser, ParsedFilename};
pub use render::RowRenderer;
pub use table::{AccuracyRecord, AccuracyTable};
