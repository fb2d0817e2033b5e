//! Per-field checks applied before a wizard step may be left.
//!
//! Values arrive as the raw text typed into a field. A blank field is
//! "missing"; anything that does not parse, or parses outside its plausible
//! range, is "invalid". Errors never abort the session, they only hold the
//! user on the current step.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use vitalcheck_core::models::input::SugarType;
use vitalcheck_core::symptoms::{self, Checklist};

use crate::error::ScoringError;
use crate::thresholds::{
    ValueRange, ADULT_AGE, AGE_RANGE, DIASTOLIC_RANGE_MMHG, HEIGHT_RANGE_CM, SYSTOLIC_RANGE_MMHG,
    WEIGHT_RANGE_KG,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct FieldError {
    pub field: String,
    pub value: Option<String>,
    pub expected_range: Option<ValueRange>,
    pub message: String,
}

impl FieldError {
    fn missing(field: &str, message: &str) -> Self {
        FieldError {
            field: field.to_string(),
            value: None,
            expected_range: None,
            message: message.to_string(),
        }
    }

    fn invalid(field: &str, raw: &str, range: Option<ValueRange>, message: &str) -> Self {
        FieldError {
            field: field.to_string(),
            value: Some(raw.to_string()),
            expected_range: range,
            message: message.to_string(),
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_in_range(
    field: &str,
    raw: &str,
    range: ValueRange,
    message: &str,
) -> Result<f64, FieldError> {
    match raw.parse::<f64>() {
        Ok(v) if range.contains(v) => Ok(v),
        _ => Err(FieldError::invalid(field, raw, Some(range), message)),
    }
}

/// Age is required: a whole number of years between 1 and 120.
pub fn validate_age(raw: Option<&str>) -> Result<u32, FieldError> {
    let raw = non_blank(raw).ok_or_else(|| FieldError::missing("age", "Please enter your age"))?;
    let years = parse_in_range("age", raw, AGE_RANGE, "Please enter a valid age (1-120)")?;
    Ok(years as u32)
}

/// Non-blocking: the tool is designed for adults.
pub fn is_underage(age: u32) -> bool {
    age > 0 && age < ADULT_AGE
}

pub fn validate_height(raw: Option<&str>) -> Result<f64, FieldError> {
    let raw = non_blank(raw)
        .ok_or_else(|| FieldError::missing("height", "Please enter your height"))?;
    parse_in_range(
        "height",
        raw,
        HEIGHT_RANGE_CM,
        "Please enter a valid height (50-300 cm)",
    )
}

pub fn validate_weight(raw: Option<&str>) -> Result<f64, FieldError> {
    let raw = non_blank(raw)
        .ok_or_else(|| FieldError::missing("weight", "Please enter your weight"))?;
    parse_in_range(
        "weight",
        raw,
        WEIGHT_RANGE_KG,
        "Please enter a valid weight (10-500 kg)",
    )
}

/// Whole mmHg inside `range`.
fn parse_pressure(field: &str, raw: &str, range: ValueRange) -> Result<u32, FieldError> {
    let message = format!(
        "Please enter a valid {field} pressure ({}-{} mmHg, whole numbers)",
        range.min, range.max
    );
    let mmhg = parse_in_range(field, raw, range, &message)?;
    Ok(mmhg as u32)
}

/// Blood pressure is optional, but once either value is given both are
/// required.
pub fn validate_blood_pressure(
    systolic: Option<&str>,
    diastolic: Option<&str>,
) -> Result<Option<(u32, u32)>, Vec<FieldError>> {
    let (systolic, diastolic) = (non_blank(systolic), non_blank(diastolic));
    if systolic.is_none() && diastolic.is_none() {
        return Ok(None);
    }

    let mut errors = Vec::new();
    let sys = match systolic {
        Some(raw) => parse_pressure("systolic", raw, SYSTOLIC_RANGE_MMHG)
            .map_err(|e| errors.push(e))
            .ok(),
        None => {
            errors.push(FieldError::missing(
                "systolic",
                "Please enter systolic pressure",
            ));
            None
        }
    };
    let dia = match diastolic {
        Some(raw) => parse_pressure("diastolic", raw, DIASTOLIC_RANGE_MMHG)
            .map_err(|e| errors.push(e))
            .ok(),
        None => {
            errors.push(FieldError::missing(
                "diastolic",
                "Please enter diastolic pressure",
            ));
            None
        }
    };

    match (sys, dia) {
        (Some(s), Some(d)) if errors.is_empty() => Ok(Some((s, d))),
        _ => Err(errors),
    }
}

/// Blood sugar is optional, but a selected test type needs a value.
pub fn validate_blood_sugar(
    sugar_type: Option<SugarType>,
    raw: Option<&str>,
) -> Result<Option<f64>, FieldError> {
    let raw = non_blank(raw);
    match (sugar_type, raw) {
        (None, _) => Ok(None),
        (Some(_), None) => Err(FieldError::missing(
            "sugar_value",
            "Please enter blood sugar value",
        )),
        (Some(_), Some(raw)) => match raw.parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 => Ok(Some(v)),
            _ => Err(FieldError::invalid(
                "sugar_value",
                raw,
                None,
                "Please enter a valid blood sugar value",
            )),
        },
    }
}

/// Waist circumference is optional; when given it must be a positive number.
pub fn validate_waist(raw: Option<&str>) -> Result<Option<f64>, FieldError> {
    match non_blank(raw) {
        None => Ok(None),
        Some(raw) => match raw.parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 => Ok(Some(v)),
            _ => Err(FieldError::invalid(
                "waist",
                raw,
                None,
                "Please enter a valid waist circumference (cm)",
            )),
        },
    }
}

/// Check that a symptom id exists and belongs to the given checklist.
pub fn validate_symptom(id: &str, checklist: Checklist) -> Result<(), ScoringError> {
    let symptom = symptoms::find_symptom(id)
        .map_err(|_| ScoringError::UnknownSymptom(id.to_string()))?;
    if symptom.checklist != checklist {
        return Err(ScoringError::WrongChecklist {
            symptom_id: id.to_string(),
            checklist: match checklist {
                Checklist::General => "general".to_string(),
                Checklist::Women => "women".to_string(),
            },
        });
    }
    Ok(())
}
