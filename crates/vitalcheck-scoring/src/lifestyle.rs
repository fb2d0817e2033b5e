use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vitalcheck_core::models::input::{ActivityLevel, AlcoholUse, AssessmentInput, TobaccoUse};

/// Which lifestyle guidance modules to show. Each flag depends on one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LifestyleFlags {
    /// Tobacco use recorded and not "never".
    pub tobacco: bool,
    /// Daily alcohol use.
    pub alcohol: bool,
    /// Activity level not adequate, including unanswered.
    pub activity: bool,
}

impl LifestyleFlags {
    pub fn any(&self) -> bool {
        self.tobacco || self.alcohol || self.activity
    }
}

pub fn lifestyle_flags(input: &AssessmentInput) -> LifestyleFlags {
    LifestyleFlags {
        tobacco: input
            .tobacco_use
            .is_some_and(|t| t != TobaccoUse::Never),
        alcohol: input.alcohol_use == Some(AlcoholUse::Yes),
        activity: input.activity_level != Some(ActivityLevel::Adequate),
    }
}
