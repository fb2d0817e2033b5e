use std::collections::BTreeMap;

use vitalcheck_core::models::input::AssessmentInput;
use vitalcheck_core::symptoms::{Symptom, GENERAL_SYMPTOMS, WOMEN_SYMPTOMS};

/// True if any symptom on either checklist was answered "yes".
/// Unanswered symptoms count as "no".
pub fn has_any_cancer_symptom(input: &AssessmentInput) -> bool {
    input
        .general_symptoms
        .values()
        .chain(input.women_symptoms.values())
        .any(|answer| *answer)
}

/// Symptoms answered "yes", in checklist order with the general list first.
pub fn reported_symptoms(input: &AssessmentInput) -> Vec<&'static Symptom> {
    let general = GENERAL_SYMPTOMS
        .iter()
        .filter(|s| answered_yes(&input.general_symptoms, s));
    let women = WOMEN_SYMPTOMS
        .iter()
        .filter(|s| answered_yes(&input.women_symptoms, s));
    general.chain(women).collect()
}

fn answered_yes(answers: &BTreeMap<String, bool>, symptom: &Symptom) -> bool {
    answers.get(symptom.id).copied().unwrap_or(false)
}
