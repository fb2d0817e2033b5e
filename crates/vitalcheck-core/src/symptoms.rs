//! Cancer warning-sign checklists.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::input::Gender;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Checklist {
    General,
    /// Shown only when the recorded gender is female.
    Women,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symptom {
    pub id: &'static str,
    pub label: &'static str,
    pub checklist: Checklist,
}

const fn general(id: &'static str, label: &'static str) -> Symptom {
    Symptom {
        id,
        label,
        checklist: Checklist::General,
    }
}

const fn women(id: &'static str, label: &'static str) -> Symptom {
    Symptom {
        id,
        label,
        checklist: Checklist::Women,
    }
}

pub static GENERAL_SYMPTOMS: [Symptom; 7] = [
    general(
        "non_healing_ulcer",
        "Non-healing ulcer (wound that doesn't heal for more than 2 weeks)",
    ),
    general("lumps", "Lumps or swellings anywhere in the body"),
    general("difficulty_swallowing", "Difficulty swallowing"),
    general(
        "voice_change",
        "Change in voice (hoarseness lasting more than 2 weeks)",
    ),
    general("weight_loss", "Unexplained weight loss"),
    general("blood_sputum", "Blood in sputum (coughed-up mucus)"),
    general("persistent_cough", "Persistent cough (more than 2 weeks)"),
];

pub static WOMEN_SYMPTOMS: [Symptom; 5] = [
    women("breast_lump", "Lump in the breast"),
    women("nipple_discharge", "Nipple discharge (other than breast milk)"),
    women("breast_shape", "Change in breast shape or size"),
    women("postmenopausal_bleeding", "Bleeding after menopause"),
    women("bleeding_intercourse", "Bleeding after intercourse"),
];

/// All symptoms, general checklist first.
pub fn all_symptoms() -> impl Iterator<Item = &'static Symptom> {
    GENERAL_SYMPTOMS.iter().chain(WOMEN_SYMPTOMS.iter())
}

/// Look up a symptom by id across both checklists.
pub fn find_symptom(id: &str) -> Result<&'static Symptom, CoreError> {
    all_symptoms()
        .find(|s| s.id == id)
        .ok_or_else(|| CoreError::UnknownSymptom(id.to_string()))
}

/// The checklists presented to someone of the given gender.
pub fn checklists_for(gender: Option<Gender>) -> &'static [Checklist] {
    match gender {
        Some(Gender::Female) => &[Checklist::General, Checklist::Women],
        _ => &[Checklist::General],
    }
}
