//! What each wizard step submits.
//!
//! Numeric fields hold the raw text from the input widget so that blank,
//! malformed and out-of-range entries can be told apart.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vitalcheck_core::models::input::{
    ActivityLevel, AlcoholUse, Gender, SugarType, TobaccoUse, WaistReference,
};
use vitalcheck_scoring::validation::{self, FieldError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemographicsForm {
    pub age: Option<String>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Demographics {
    pub age: u32,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
}

impl DemographicsForm {
    pub fn validate(&self) -> Result<Demographics, Vec<FieldError>> {
        let age = validation::validate_age(self.age.as_deref()).map_err(|e| vec![e])?;
        Ok(Demographics {
            age,
            gender: self.gender,
            activity_level: self.activity_level,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VitalsForm {
    pub height: Option<String>,
    pub weight: Option<String>,
    pub systolic: Option<String>,
    pub diastolic: Option<String>,
    pub sugar_type: Option<SugarType>,
    pub sugar_value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vitals {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub blood_pressure: Option<(u32, u32)>,
    pub sugar: Option<(SugarType, f64)>,
}

impl VitalsForm {
    /// Collects every field error rather than stopping at the first.
    pub fn validate(&self) -> Result<Vitals, Vec<FieldError>> {
        let mut errors = Vec::new();

        let height = validation::validate_height(self.height.as_deref())
            .map_err(|e| errors.push(e))
            .ok();
        let weight = validation::validate_weight(self.weight.as_deref())
            .map_err(|e| errors.push(e))
            .ok();
        let blood_pressure =
            validation::validate_blood_pressure(self.systolic.as_deref(), self.diastolic.as_deref())
                .map_err(|e| errors.extend(e))
                .ok()
                .flatten();
        let sugar_value =
            validation::validate_blood_sugar(self.sugar_type, self.sugar_value.as_deref())
                .map_err(|e| errors.push(e))
                .ok()
                .flatten();

        match (height, weight) {
            (Some(height_cm), Some(weight_kg)) if errors.is_empty() => Ok(Vitals {
                height_cm,
                weight_kg,
                blood_pressure,
                sugar: self.sugar_type.zip(sugar_value),
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskFactorsForm {
    pub tobacco_use: Option<TobaccoUse>,
    pub alcohol_use: Option<AlcoholUse>,
    pub waist: Option<String>,
    pub waist_reference: Option<WaistReference>,
    pub family_history: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskFactors {
    pub tobacco_use: Option<TobaccoUse>,
    pub alcohol_use: Option<AlcoholUse>,
    pub waist_cm: Option<f64>,
    pub waist_reference: Option<WaistReference>,
    pub family_history: Option<bool>,
}

impl RiskFactorsForm {
    pub fn validate(&self) -> Result<RiskFactors, Vec<FieldError>> {
        let waist_cm = validation::validate_waist(self.waist.as_deref()).map_err(|e| vec![e])?;
        Ok(self.to_risk_factors(waist_cm))
    }

    /// Best-effort reading for live previews: an unparsable waist is
    /// treated as not entered.
    pub fn lenient(&self) -> RiskFactors {
        self.to_risk_factors(validation::validate_waist(self.waist.as_deref()).ok().flatten())
    }

    fn to_risk_factors(&self, waist_cm: Option<f64>) -> RiskFactors {
        RiskFactors {
            tobacco_use: self.tobacco_use,
            alcohol_use: self.alcohol_use,
            waist_cm,
            waist_reference: self.waist_reference,
            family_history: self.family_history,
        }
    }
}

/// Answers keyed by symptom id; unanswered symptoms are simply absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymptomsForm {
    pub general: BTreeMap<String, bool>,
    pub women: BTreeMap<String, bool>,
}
