use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The single form record filled in across the wizard steps.
///
/// Every field is optional until the user supplies it. Missing fields never
/// fail a calculation; they simply contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct AssessmentInput {
    // Demographics
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,

    // Anthropometry & vitals
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub systolic: Option<u32>,
    pub diastolic: Option<u32>,
    pub sugar_type: Option<SugarType>,
    pub sugar_value: Option<f64>,

    // NCD risk factors
    pub tobacco_use: Option<TobaccoUse>,
    pub alcohol_use: Option<AlcoholUse>,
    pub waist_cm: Option<f64>,
    pub waist_reference: Option<WaistReference>,
    pub family_history: Option<bool>,

    // Symptom checklists, keyed by symptom id
    pub general_symptoms: BTreeMap<String, bool>,
    pub women_symptoms: BTreeMap<String, bool>,
}

impl AssessmentInput {
    /// Both blood-pressure readings present and non-zero.
    pub fn bp_entered(&self) -> bool {
        matches!((self.systolic, self.diastolic), (Some(s), Some(d)) if s > 0 && d > 0)
    }

    /// A sugar test type selected with a positive value.
    pub fn sugar_entered(&self) -> bool {
        self.sugar_type.is_some() && self.sugar_value.is_some_and(|v| v > 0.0)
    }
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
        #[serde(rename_all = "snake_case")]
        #[ts(export)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    other => Err(CoreError::UnknownValue {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    Gender, "gender" {
        Male => "male",
        Female => "female",
        Other => "other",
    }
}

string_enum! {
    /// Self-reported weekly physical activity.
    ActivityLevel, "activity_level" {
        /// Very little activity.
        Sedentary => "sedentary",
        /// Some activity, under 150 minutes a week.
        Moderate => "moderate",
        /// 150 minutes a week or more.
        Adequate => "adequate",
    }
}

string_enum! {
    TobaccoUse, "tobacco_use" {
        Never => "never",
        /// Past or occasional use.
        Past => "past",
        Daily => "daily",
    }
}

string_enum! {
    /// Daily alcohol consumption.
    AlcoholUse, "alcohol_use" {
        No => "no",
        Yes => "yes",
    }
}

string_enum! {
    /// Blood sugar test type.
    SugarType, "sugar_type" {
        /// Random blood sugar.
        Rbs => "rbs",
        /// Fasting blood sugar.
        Fbs => "fbs",
        /// Post-prandial blood sugar.
        Ppbs => "ppbs",
        /// Glycated haemoglobin.
        Hba1c => "hba1c",
    }
}

string_enum! {
    /// Reference chart used to score waist circumference.
    WaistReference, "waist_reference" {
        Male => "male",
        Female => "female",
    }
}

impl SugarType {
    pub fn unit(&self) -> &'static str {
        match self {
            SugarType::Hba1c => "%",
            _ => "mg/dL",
        }
    }
}

impl WaistReference {
    /// The reference implied by a recorded gender. `Other` has no default
    /// and must be chosen explicitly.
    pub fn for_gender(gender: Gender) -> Option<Self> {
        match gender {
            Gender::Male => Some(WaistReference::Male),
            Gender::Female => Some(WaistReference::Female),
            Gender::Other => None,
        }
    }
}

/// Parse a yes/no answer as typed on a form or command line.
pub fn parse_yes_no(s: &str) -> Result<bool, CoreError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        other => Err(CoreError::UnknownValue {
            field: "yes_no",
            value: other.to_string(),
        }),
    }
}
