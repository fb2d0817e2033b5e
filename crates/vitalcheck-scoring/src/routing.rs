//! The advisory gate applied when vitals are submitted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vitalcheck_core::models::flow::VitalsRoute;
use vitalcheck_core::models::input::AssessmentInput;

use crate::measurements::blood_pressure::is_bp_elevated;
use crate::measurements::blood_sugar::is_sugar_elevated;

/// Which blocking predicates fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FlowGate {
    pub bp_elevated: bool,
    pub sugar_elevated: bool,
}

impl FlowGate {
    pub fn evaluate(input: &AssessmentInput) -> Self {
        FlowGate {
            bp_elevated: is_bp_elevated(input.systolic, input.diastolic),
            sugar_elevated: is_sugar_elevated(input.sugar_type, input.sugar_value),
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.bp_elevated || self.sugar_elevated
    }

    pub fn route(&self) -> VitalsRoute {
        if self.is_blocking() {
            VitalsRoute::Advisory
        } else {
            VitalsRoute::RiskFactors
        }
    }
}

pub fn route_after_vitals(input: &AssessmentInput) -> VitalsRoute {
    FlowGate::evaluate(input).route()
}
