//! Community Based Assessment Checklist (CBAC) score for NCD risk.
//!
//! Points are additive with no interaction terms. Missing answers score 0,
//! so the total can be previewed while the form is still being filled in.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vitalcheck_core::models::input::{
    ActivityLevel, AlcoholUse, AssessmentInput, Gender, TobaccoUse, WaistReference,
};

use crate::status::Tone;
use crate::thresholds::{waist_thresholds, AGE_BANDS, CBAC_HIGH_RISK_ABOVE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    LowerRisk,
    /// Consultation recommended.
    HigherRisk,
}

impl RiskTier {
    pub fn for_score(total: u32) -> Self {
        if total > CBAC_HIGH_RISK_ABOVE {
            RiskTier::HigherRisk
        } else {
            RiskTier::LowerRisk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::LowerRisk => "Lower risk",
            RiskTier::HigherRisk => "Higher risk",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            RiskTier::LowerRisk => Tone::Emerald,
            RiskTier::HigherRisk => Tone::Amber,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Points contributed by each question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CbacBreakdown {
    pub age: u32,
    pub tobacco: u32,
    pub alcohol: u32,
    pub waist: u32,
    pub activity: u32,
    pub family_history: u32,
}

impl CbacBreakdown {
    pub fn total(&self) -> u32 {
        self.age + self.tobacco + self.alcohol + self.waist + self.activity + self.family_history
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CbacScore {
    pub breakdown: CbacBreakdown,
    pub total: u32,
    pub tier: RiskTier,
}

impl CbacScore {
    pub fn is_higher_risk(&self) -> bool {
        self.tier == RiskTier::HigherRisk
    }
}

pub fn age_points(age: Option<u32>) -> u32 {
    let age = age.unwrap_or(0);
    AGE_BANDS
        .iter()
        .find(|(min_age, _)| age >= *min_age)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

pub fn tobacco_points(tobacco: Option<TobaccoUse>) -> u32 {
    match tobacco {
        Some(TobaccoUse::Daily) => 2,
        Some(TobaccoUse::Past) => 1,
        Some(TobaccoUse::Never) | None => 0,
    }
}

pub fn alcohol_points(alcohol: Option<AlcoholUse>) -> u32 {
    match alcohol {
        Some(AlcoholUse::Yes) => 1,
        _ => 0,
    }
}

/// The chart used to score waist circumference: the explicit choice if
/// any, else the one implied by a male or female gender. Other or
/// unrecorded gender has no default.
pub fn resolve_waist_reference(
    explicit: Option<WaistReference>,
    gender: Option<Gender>,
) -> Option<WaistReference> {
    explicit.or_else(|| gender.and_then(WaistReference::for_gender))
}

pub fn waist_points(waist_cm: Option<f64>, reference: Option<WaistReference>) -> u32 {
    let (Some(waist), Some(reference)) = (waist_cm.filter(|w| *w > 0.0), reference) else {
        return 0;
    };
    let thresholds = waist_thresholds(reference);
    if waist > thresholds.high {
        2
    } else if waist > thresholds.low {
        1
    } else {
        0
    }
}

pub fn activity_points(activity: Option<ActivityLevel>) -> u32 {
    match activity {
        Some(ActivityLevel::Sedentary | ActivityLevel::Moderate) => 1,
        Some(ActivityLevel::Adequate) | None => 0,
    }
}

pub fn family_history_points(family_history: Option<bool>) -> u32 {
    if family_history == Some(true) { 2 } else { 0 }
}

pub fn cbac_breakdown(input: &AssessmentInput) -> CbacBreakdown {
    let reference = resolve_waist_reference(input.waist_reference, input.gender);
    CbacBreakdown {
        age: age_points(input.age),
        tobacco: tobacco_points(input.tobacco_use),
        alcohol: alcohol_points(input.alcohol_use),
        waist: waist_points(input.waist_cm, reference),
        activity: activity_points(input.activity_level),
        family_history: family_history_points(input.family_history),
    }
}

pub fn calculate_cbac(input: &AssessmentInput) -> CbacScore {
    let breakdown = cbac_breakdown(input);
    let total = breakdown.total();
    CbacScore {
        breakdown,
        total,
        tier: RiskTier::for_score(total),
    }
}
