//! vitalcheck-export
//!
//! Plain-text summaries rendered through Tera templates, and the PDF
//! report drawn with `printpdf`. Both read a [`report::HealthReport`], so
//! they always agree with the results screen.

pub mod error;
pub mod pdf;
pub mod render;
pub mod report;
pub mod styles;

pub use error::ExportError;
pub use report::HealthReport;
