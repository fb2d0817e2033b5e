//! Advice text selected from the derived values.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vitalcheck_core::models::input::ActivityLevel;

use crate::cbac::CbacScore;
use crate::lifestyle::LifestyleFlags;
use crate::measurements::bmi::BmiCategory;
use crate::status::Status;

pub const NCD_EVALUATION: &str =
    "Please visit the nearest Janakeeya Arogya Kendram for NCD risk evaluation.";
pub const SYMPTOM_CONSULT: &str = "Please consult a doctor for evaluation of reported symptoms.";
pub const TOBACCO_CESSATION: &str =
    "Consider seeking tobacco cessation support; reducing tobacco lowers risk over time.";
pub const ALCOHOL_REDUCTION: &str =
    "Reducing daily alcohol can improve long-term health; consider support services if needed.";
pub const ACTIVITY_PLAN: &str =
    "Aim for at least 150 minutes/week of moderate activity, starting gradually.";

pub const VITALS_ADVISORY: &str = "Your entered blood pressure or blood sugar is higher than normal. \
     Please consult a doctor at your nearest health facility for further evaluation.";

pub const DISCLAIMER: &str = "This tool provides general health risk information and is NOT a medical \
     diagnosis. It does NOT provide treatment advice. If you have symptoms or concerns, please \
     consult a doctor or visit your nearest health facility for proper evaluation.";

pub const PRIVACY_NOTE: &str =
    "No personal identifiers were collected. All calculations were performed on your device.";

/// Headline recommendations, most urgent first.
pub fn key_advice(cbac: &CbacScore, has_cancer_symptom: bool, flags: &LifestyleFlags) -> Vec<String> {
    let mut advice = Vec::new();
    if cbac.is_higher_risk() {
        advice.push(NCD_EVALUATION);
    }
    if has_cancer_symptom {
        advice.push(SYMPTOM_CONSULT);
    }
    if flags.tobacco {
        advice.push(TOBACCO_CESSATION);
    }
    if flags.alcohol {
        advice.push(ALCOHOL_REDUCTION);
    }
    if flags.activity {
        advice.push(ACTIVITY_PLAN);
    }
    advice.into_iter().map(str::to_string).collect()
}

pub fn diet_tips(category: Option<BmiCategory>) -> Vec<String> {
    let tips: &[&str] = match category {
        None => &[],
        Some(BmiCategory::Underweight) => &[
            "Add nutrient-dense meals and snacks",
            "Include protein sources daily (eggs, dal, milk, fish)",
            "Eat small, frequent meals",
        ],
        Some(BmiCategory::Overweight | BmiCategory::Obese) => &[
            "Reduce sugary drinks and processed foods",
            "Fill half your plate with vegetables",
            "Practice portion control",
            "Choose whole grains over refined",
        ],
        Some(BmiCategory::Normal) => &[
            "Maintain balanced meals with variety",
            "Include fruits and vegetables daily",
            "Stay hydrated with water",
        ],
    };
    tips.iter().map(|t| t.to_string()).collect()
}

/// Extra diet advice when the sugar reading is elevated or higher.
pub fn sugar_tips(sugar_status: Status) -> Vec<String> {
    if !sugar_status.is_abnormal() {
        return Vec::new();
    }
    [
        "Choose whole grains over refined carbs",
        "Limit sweets and sugary drinks",
        "Don't skip meals; prefer steady meal timing",
        "Consult a doctor for proper testing",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

pub fn activity_tips(activity: Option<ActivityLevel>) -> Vec<String> {
    let tips: &[&str] = match activity {
        None => &[],
        Some(ActivityLevel::Sedentary) => &[
            "Start with 10 minutes/day walking",
            "Take short breaks from sitting every hour",
            "Use stairs when possible",
        ],
        Some(ActivityLevel::Moderate) => &[
            "Add 1-2 longer walks per week",
            "Try to reach 150 minutes/week",
            "Include variety (walking, cycling, swimming)",
        ],
        Some(ActivityLevel::Adequate) => &[
            "Maintain your current routine",
            "Add strength exercises twice weekly",
            "Try new activities to stay motivated",
        ],
    };
    tips.iter().map(|t| t.to_string()).collect()
}

/// A lifestyle focus area: a short plan shown when its flag is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuidanceModule {
    pub title: String,
    pub steps: Vec<String>,
    pub note: Option<String>,
}

impl GuidanceModule {
    fn new(title: &str, steps: &[&str], note: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
            note: note.map(str::to_string),
        }
    }
}

pub const HEALTHY_HABITS: &str = "You're on a good track! Keep up your healthy habits with regular \
     physical activity, balanced diet, regular check-ups, and stress management.";

/// Focus areas for the set flags, in tobacco, alcohol, activity order.
pub fn lifestyle_modules(flags: &LifestyleFlags) -> Vec<GuidanceModule> {
    let mut modules = Vec::new();
    if flags.tobacco {
        modules.push(GuidanceModule::new(
            "Tobacco Cessation Support",
            &[
                "Set a quit date and tell someone you trust",
                "Reduce triggers (after meals, stress moments)",
                "Keep your hands busy with healthy alternatives",
                "Ask at your nearest JAK about quit programs",
            ],
            None,
        ));
    }
    if flags.alcohol {
        modules.push(GuidanceModule::new(
            "Alcohol Reduction Support",
            &[
                "Track how often you drink each week",
                "Plan alcohol-free days and stick to them",
                "Choose smaller portions when you do drink",
                "Seek de-addiction support if cutting down is difficult",
            ],
            Some("Professional support is available if you find it difficult to reduce on your own."),
        ));
    }
    if flags.activity {
        modules.push(GuidanceModule::new(
            "Activity Plan",
            &[
                "Week 1: 10 minutes walking per day, 5 days/week",
                "Week 2: 15 minutes walking per day, 5 days/week",
                "Week 3+: Build toward 150 minutes/week total",
            ],
            Some(
                "Add strength: try simple bodyweight exercises (squats, wall push-ups) \
                 2 days/week for added benefit.",
            ),
        ));
    }
    modules
}

/// The note shown in place of focus areas when no lifestyle flag is set.
pub fn healthy_habits_note(flags: &LifestyleFlags) -> Option<String> {
    (!flags.any()).then(|| HEALTHY_HABITS.to_string())
}
