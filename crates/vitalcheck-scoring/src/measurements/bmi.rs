use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vitalcheck_core::models::input::AssessmentInput;

use crate::status::Tone;
use crate::thresholds::BMI_BANDS;
use crate::{Badge, Measurement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            BmiCategory::Underweight => Tone::Sky,
            BmiCategory::Normal => Tone::Emerald,
            BmiCategory::Overweight => Tone::Amber,
            BmiCategory::Obese => Tone::Rose,
        }
    }

    /// First band whose exclusive upper bound lies above `bmi`.
    pub fn for_bmi(bmi: f64) -> Self {
        BMI_BANDS
            .iter()
            .find(|(upper, _)| bmi < *upper)
            .map(|(_, category)| *category)
            .unwrap_or(BmiCategory::Obese)
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// BMI = weight / (height in m)², rounded to one decimal place.
///
/// Returns `None` when either value is missing or not positive. Range
/// checks (50–300 cm, 10–500 kg) belong to step validation.
pub fn calculate_bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    let height_cm = height_cm.filter(|h| h.is_finite() && *h > 0.0)?;
    let weight_kg = weight_kg.filter(|w| w.is_finite() && *w > 0.0)?;
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Some((bmi * 10.0).round() / 10.0)
}

/// BMI value together with its category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Bmi {
    pub value: f64,
    pub category: BmiCategory,
}

impl Bmi {
    pub fn from_input(input: &AssessmentInput) -> Option<Self> {
        calculate_bmi(input.height_cm, input.weight_kg).map(|value| Bmi {
            value,
            category: BmiCategory::for_bmi(value),
        })
    }
}

pub struct BodyMassIndex;

impl Measurement for BodyMassIndex {
    fn id(&self) -> &str {
        "bmi"
    }

    fn name(&self, _input: &AssessmentInput) -> String {
        "Body Mass Index (BMI)".to_string()
    }

    fn display_value(&self, input: &AssessmentInput) -> Option<String> {
        Bmi::from_input(input).map(|bmi| format!("{:.1}", bmi.value))
    }

    fn badge(&self, input: &AssessmentInput) -> Option<Badge> {
        Bmi::from_input(input).map(|bmi| Badge {
            label: bmi.category.label().to_string(),
            tone: bmi.category.tone(),
        })
    }
}
