//! vitalcheck-session
//!
//! The wizard state machine and its persistence. An [`AssessmentSession`]
//! owns the single in-progress record, validates each step's form before
//! merging it, and writes the record to a [`SessionStore`] after every
//! accepted submission.

pub mod error;
pub mod forms;
pub mod persist;
pub mod state;
pub mod store;

pub use error::SessionError;
pub use state::AssessmentSession;
pub use store::{write_private_file, FileStore, MemoryStore, SessionStore};
