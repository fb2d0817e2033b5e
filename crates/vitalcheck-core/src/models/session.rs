use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::flow::{Step, VitalsRoute};
use super::input::AssessmentInput;

/// Current on-disk schema version of [`SessionRecord`].
/// Bump this when adding fields or changing shape.
pub const SESSION_SCHEMA_VERSION: u32 = 1;

/// Everything persisted for one in-progress assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionRecord {
    /// Missing or 0 = pre-versioned record.
    #[serde(default)]
    pub schema_version: u32,
    pub id: Uuid,
    pub started_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
    #[serde(default)]
    pub current_step: Step,
    /// Decision taken when vitals were last submitted.
    #[serde(default)]
    pub vitals_route: Option<VitalsRoute>,
    #[serde(default)]
    pub data: AssessmentInput,
}

impl SessionRecord {
    pub fn new() -> Self {
        let now = jiff::Timestamp::now();
        Self {
            schema_version: SESSION_SCHEMA_VERSION,
            id: Uuid::new_v4(),
            started_at: now,
            updated_at: now,
            current_step: Step::Demographics,
            vitals_route: None,
            data: AssessmentInput::default(),
        }
    }
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self::new()
    }
}
