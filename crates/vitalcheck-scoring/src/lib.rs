//! vitalcheck-scoring
//!
//! The risk/status calculator. Pure functions only: every value here is
//! recomputed from an [`AssessmentInput`] on demand and nothing is cached.
//! Threshold tables live in [`thresholds`]; the calculators read them.

pub mod cbac;
pub mod error;
pub mod guidance;
pub mod lifestyle;
pub mod measurements;
pub mod routing;
pub mod status;
pub mod summary;
pub mod symptoms;
pub mod thresholds;
pub mod validation;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vitalcheck_core::models::input::AssessmentInput;

use status::{Status, Tone};

/// A status label with its display colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl From<Status> for Badge {
    fn from(status: Status) -> Self {
        Badge {
            label: status.label().to_string(),
            tone: status.tone(),
        }
    }
}

/// One line of the "Your Measurements" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeasurementRow {
    pub id: String,
    pub name: String,
    /// Formatted reading with unit, `None` when not entered.
    pub value: Option<String>,
    pub badge: Option<Badge>,
}

impl MeasurementRow {
    pub fn value_or_placeholder(&self) -> &str {
        self.value.as_deref().unwrap_or("Not entered")
    }

    pub fn badge_label(&self) -> &str {
        self.badge.as_ref().map(|b| b.label.as_str()).unwrap_or("N/A")
    }

    pub fn tone(&self) -> Tone {
        self.badge.as_ref().map(|b| b.tone).unwrap_or(Tone::Slate)
    }
}

/// Trait implemented by each measured vital shown in the summary.
pub trait Measurement: Send + Sync {
    /// Stable identifier (e.g., "bmi", "blood_pressure").
    fn id(&self) -> &str;

    /// Human-readable name; may depend on the input (e.g., sugar test type).
    fn name(&self, input: &AssessmentInput) -> String;

    /// The formatted reading, or `None` if the user did not enter it.
    fn display_value(&self, input: &AssessmentInput) -> Option<String>;

    /// Classification badge, or `None` if nothing can be classified.
    fn badge(&self, input: &AssessmentInput) -> Option<Badge>;

    fn row(&self, input: &AssessmentInput) -> MeasurementRow {
        MeasurementRow {
            id: self.id().to_string(),
            name: self.name(input),
            value: self.display_value(input),
            badge: self.badge(input),
        }
    }
}

/// Return all measurements, in display order.
pub fn all_measurements() -> Vec<Box<dyn Measurement>> {
    vec![
        Box::new(measurements::bmi::BodyMassIndex),
        Box::new(measurements::blood_pressure::BloodPressure),
        Box::new(measurements::blood_sugar::BloodSugar),
    ]
}
