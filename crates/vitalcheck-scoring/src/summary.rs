use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vitalcheck_core::models::input::AssessmentInput;

use crate::cbac::{calculate_cbac, CbacScore};
use crate::guidance::{self, GuidanceModule};
use crate::lifestyle::{lifestyle_flags, LifestyleFlags};
use crate::measurements::blood_pressure::bp_status;
use crate::measurements::blood_sugar::sugar_status;
use crate::measurements::bmi::Bmi;
use crate::routing::FlowGate;
use crate::status::Status;
use crate::symptoms::has_any_cancer_symptom;
use crate::{all_measurements, MeasurementRow};

/// Every derived value for one input, computed in a single pass.
///
/// This is what the results screen and the exports consume, so both always
/// show the same numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSummary {
    pub bmi: Option<Bmi>,
    pub bp_status: Status,
    pub sugar_status: Status,
    pub gate: FlowGate,
    pub cbac: CbacScore,
    pub lifestyle: LifestyleFlags,
    pub has_cancer_symptom: bool,
    /// CBAC higher risk or any reported symptom.
    pub needs_consultation: bool,
    pub measurements: Vec<MeasurementRow>,
    pub key_advice: Vec<String>,
    /// Lifestyle focus areas, one per set flag.
    pub focus_areas: Vec<GuidanceModule>,
    /// Encouragement shown when no lifestyle flag is set.
    pub healthy_habits: Option<String>,
    pub diet_tips: Vec<String>,
    pub sugar_tips: Vec<String>,
    pub activity_tips: Vec<String>,
}

impl AssessmentSummary {
    pub fn compute(input: &AssessmentInput) -> Self {
        let bmi = Bmi::from_input(input);
        let bp_status = bp_status(input.systolic, input.diastolic);
        let sugar_status = sugar_status(input.sugar_type, input.sugar_value);
        let cbac = calculate_cbac(input);
        let lifestyle = lifestyle_flags(input);
        let has_cancer_symptom = has_any_cancer_symptom(input);

        AssessmentSummary {
            bmi,
            bp_status,
            sugar_status,
            gate: FlowGate::evaluate(input),
            cbac,
            lifestyle,
            has_cancer_symptom,
            needs_consultation: cbac.is_higher_risk() || has_cancer_symptom,
            measurements: all_measurements().iter().map(|m| m.row(input)).collect(),
            key_advice: guidance::key_advice(&cbac, has_cancer_symptom, &lifestyle),
            focus_areas: guidance::lifestyle_modules(&lifestyle),
            healthy_habits: guidance::healthy_habits_note(&lifestyle),
            diet_tips: guidance::diet_tips(bmi.map(|b| b.category)),
            sugar_tips: guidance::sugar_tips(sugar_status),
            activity_tips: guidance::activity_tips(input.activity_level),
        }
    }
}
