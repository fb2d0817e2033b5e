//! vitalcheck-core
//!
//! Pure domain types for the health self-assessment: the form record, the
//! wizard steps, the symptom catalogue and file naming conventions.
//! This is the shared vocabulary of the other vitalcheck crates.

pub mod error;
pub mod models;
pub mod storage_keys;
pub mod symptoms;
