use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Wizard screens, in the order a user normally visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Step {
    #[default]
    Demographics,
    Vitals,
    /// Blocking "speak to a doctor" screen shown instead of risk factors.
    Advisory,
    RiskFactors,
    Symptoms,
    Results,
}

impl Step {
    pub fn title(&self) -> &'static str {
        match self {
            Step::Demographics => "About you",
            Step::Vitals => "Body measurements & vitals",
            Step::Advisory => "We recommend speaking to a doctor",
            Step::RiskFactors => "NCD risk factors",
            Step::Symptoms => "Cancer symptom check",
            Step::Results => "Your results",
        }
    }

    /// Position in the wizard. Advisory and RiskFactors share a slot since
    /// only one of them follows vitals.
    pub fn position(&self) -> u8 {
        match self {
            Step::Demographics => 0,
            Step::Vitals => 1,
            Step::Advisory | Step::RiskFactors => 2,
            Step::Symptoms => 3,
            Step::Results => 4,
        }
    }
}

/// Where the wizard goes after vitals are submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VitalsRoute {
    Advisory,
    RiskFactors,
}

impl VitalsRoute {
    pub fn step(&self) -> Step {
        match self {
            VitalsRoute::Advisory => Step::Advisory,
            VitalsRoute::RiskFactors => Step::RiskFactors,
        }
    }
}
