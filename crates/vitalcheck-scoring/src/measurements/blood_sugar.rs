use vitalcheck_core::models::input::{AssessmentInput, SugarType};

use crate::status::Status;
use crate::thresholds::sugar_thresholds;
use crate::{Badge, Measurement};

fn reading(sugar_type: Option<SugarType>, value: Option<f64>) -> Option<(SugarType, f64)> {
    match (sugar_type, value) {
        (Some(t), Some(v)) if v.is_finite() && v > 0.0 => Some((t, v)),
        _ => None,
    }
}

/// Classify a blood sugar value against its test type's thresholds.
pub fn sugar_status(sugar_type: Option<SugarType>, value: Option<f64>) -> Status {
    match reading(sugar_type, value) {
        Some((t, v)) => Status::classify(v, sugar_thresholds(t)),
        None => Status::NotEntered,
    }
}

/// Blocking predicate: value at or above the test type's elevated cut-off.
pub fn is_sugar_elevated(sugar_type: Option<SugarType>, value: Option<f64>) -> bool {
    reading(sugar_type, value).is_some_and(|(t, v)| v >= sugar_thresholds(t).elevated)
}

pub struct BloodSugar;

impl Measurement for BloodSugar {
    fn id(&self) -> &str {
        "blood_sugar"
    }

    fn name(&self, input: &AssessmentInput) -> String {
        match input.sugar_type {
            Some(t) if input.sugar_entered() => {
                format!("Blood Sugar ({})", t.as_str().to_uppercase())
            }
            _ => "Blood Sugar".to_string(),
        }
    }

    fn display_value(&self, input: &AssessmentInput) -> Option<String> {
        reading(input.sugar_type, input.sugar_value).map(|(t, v)| format!("{v} {}", t.unit()))
    }

    fn badge(&self, input: &AssessmentInput) -> Option<Badge> {
        match sugar_status(input.sugar_type, input.sugar_value) {
            Status::NotEntered => None,
            status => Some(Badge::from(status)),
        }
    }
}
