use vitalcheck_core::models::input::AssessmentInput;

use crate::status::Status;
use crate::thresholds::BP_THRESHOLDS;
use crate::{Badge, Measurement};

fn reading(systolic: Option<u32>, diastolic: Option<u32>) -> Option<(f64, f64)> {
    match (systolic, diastolic) {
        (Some(s), Some(d)) if s > 0 && d > 0 => Some((f64::from(s), f64::from(d))),
        _ => None,
    }
}

/// Classify a blood-pressure reading.
///
/// The worse of the systolic and diastolic classifications wins, so either
/// value crossing a tier moves the whole reading into it. A missing or zero
/// value on either side means "Not entered".
pub fn bp_status(systolic: Option<u32>, diastolic: Option<u32>) -> Status {
    match reading(systolic, diastolic) {
        Some((s, d)) => Status::classify(s, BP_THRESHOLDS.systolic)
            .max(Status::classify(d, BP_THRESHOLDS.diastolic)),
        None => Status::NotEntered,
    }
}

/// Blocking predicate: systolic ≥ 140 or diastolic ≥ 90.
pub fn is_bp_elevated(systolic: Option<u32>, diastolic: Option<u32>) -> bool {
    reading(systolic, diastolic).is_some_and(|(s, d)| {
        s >= BP_THRESHOLDS.systolic.elevated || d >= BP_THRESHOLDS.diastolic.elevated
    })
}

pub struct BloodPressure;

impl Measurement for BloodPressure {
    fn id(&self) -> &str {
        "blood_pressure"
    }

    fn name(&self, _input: &AssessmentInput) -> String {
        "Blood Pressure".to_string()
    }

    fn display_value(&self, input: &AssessmentInput) -> Option<String> {
        match (input.systolic, input.diastolic) {
            (Some(s), Some(d)) if input.bp_entered() => Some(format!("{s}/{d} mmHg")),
            _ => None,
        }
    }

    fn badge(&self, input: &AssessmentInput) -> Option<Badge> {
        match bp_status(input.systolic, input.diastolic) {
            Status::NotEntered => None,
            status => Some(Badge::from(status)),
        }
    }
}
