//! File and key naming conventions.
//!
//! Pure string functions. These define where session state lives and what
//! exported documents are called.

/// File name of the persisted session record inside the session directory.
pub const SESSION_FILE: &str = "assessment_data.json";

pub const VITALS_SUMMARY_FILE: &str = "health-vitals-summary.txt";

pub fn assessment_pdf(date: jiff::civil::Date) -> String {
    format!("health-assessment-{date}.pdf")
}

pub fn assessment_text(date: jiff::civil::Date) -> String {
    format!("health-assessment-{date}.txt")
}
