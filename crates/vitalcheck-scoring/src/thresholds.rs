//! Static threshold tables. Every cut-off used by the calculators lives here.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vitalcheck_core::models::input::{SugarType, WaistReference};

use crate::measurements::bmi::BmiCategory;

/// Inclusive range of plausible values for a form field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ValueRange {
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

pub const AGE_RANGE: ValueRange = ValueRange {
    min: 1.0,
    max: 120.0,
    step: Some(1.0),
};

pub const HEIGHT_RANGE_CM: ValueRange = ValueRange {
    min: 50.0,
    max: 300.0,
    step: None,
};

pub const WEIGHT_RANGE_KG: ValueRange = ValueRange {
    min: 10.0,
    max: 500.0,
    step: None,
};

/// Blood pressure is recorded in whole mmHg, as cuffs display it.
pub const SYSTOLIC_RANGE_MMHG: ValueRange = ValueRange {
    min: 50.0,
    max: 300.0,
    step: Some(1.0),
};

pub const DIASTOLIC_RANGE_MMHG: ValueRange = ValueRange {
    min: 30.0,
    max: 200.0,
    step: Some(1.0),
};

/// Below this age the tool still works but shows an adults-only notice.
pub const ADULT_AGE: u32 = 18;

/// Upper bounds (exclusive) of each BMI category, checked in order.
pub static BMI_BANDS: [(f64, BmiCategory); 4] = [
    (18.5, BmiCategory::Underweight),
    (25.0, BmiCategory::Normal),
    (30.0, BmiCategory::Overweight),
    (f64::INFINITY, BmiCategory::Obese),
];

/// A pair of cut-offs: at or above `normal` is elevated, at or above
/// `elevated` is higher than normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThresholdPair {
    pub normal: f64,
    pub elevated: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BpThresholds {
    pub systolic: ThresholdPair,
    pub diastolic: ThresholdPair,
}

pub const BP_THRESHOLDS: BpThresholds = BpThresholds {
    systolic: ThresholdPair {
        normal: 120.0,
        elevated: 140.0,
    },
    diastolic: ThresholdPair {
        normal: 80.0,
        elevated: 90.0,
    },
};

pub const RBS_THRESHOLDS: ThresholdPair = ThresholdPair {
    normal: 140.0,
    elevated: 200.0,
};

pub const FBS_THRESHOLDS: ThresholdPair = ThresholdPair {
    normal: 100.0,
    elevated: 126.0,
};

pub const PPBS_THRESHOLDS: ThresholdPair = ThresholdPair {
    normal: 140.0,
    elevated: 200.0,
};

/// HbA1c cut-offs are percentages.
pub const HBA1C_THRESHOLDS: ThresholdPair = ThresholdPair {
    normal: 5.7,
    elevated: 6.5,
};

pub static SUGAR_THRESHOLDS: [(SugarType, ThresholdPair); 4] = [
    (SugarType::Rbs, RBS_THRESHOLDS),
    (SugarType::Fbs, FBS_THRESHOLDS),
    (SugarType::Ppbs, PPBS_THRESHOLDS),
    (SugarType::Hba1c, HBA1C_THRESHOLDS),
];

pub fn sugar_thresholds(sugar_type: SugarType) -> ThresholdPair {
    match sugar_type {
        SugarType::Rbs => RBS_THRESHOLDS,
        SugarType::Fbs => FBS_THRESHOLDS,
        SugarType::Ppbs => PPBS_THRESHOLDS,
        SugarType::Hba1c => HBA1C_THRESHOLDS,
    }
}

/// Waist circumference cut-offs in cm: normal up to `low`, elevated up to
/// `high`, high above that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WaistThresholds {
    pub low: f64,
    pub high: f64,
}

pub const FEMALE_WAIST_CM: WaistThresholds = WaistThresholds {
    low: 80.0,
    high: 90.0,
};

pub const MALE_WAIST_CM: WaistThresholds = WaistThresholds {
    low: 90.0,
    high: 100.0,
};

pub static WAIST_THRESHOLDS: [(WaistReference, WaistThresholds); 2] = [
    (WaistReference::Female, FEMALE_WAIST_CM),
    (WaistReference::Male, MALE_WAIST_CM),
];

pub fn waist_thresholds(reference: WaistReference) -> WaistThresholds {
    match reference {
        WaistReference::Female => FEMALE_WAIST_CM,
        WaistReference::Male => MALE_WAIST_CM,
    }
}

/// Minimum age and points awarded, checked from the oldest band down.
pub static AGE_BANDS: [(u32, u32); 4] = [(60, 4), (50, 3), (40, 2), (30, 1)];

/// CBAC totals strictly above this are higher risk.
pub const CBAC_HIGH_RISK_ABOVE: u32 = 4;
