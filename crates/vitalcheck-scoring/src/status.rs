use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::thresholds::ThresholdPair;

/// Classification of a vital reading, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Status {
    NotEntered,
    Normal,
    Elevated,
    /// Blocking tier: the wizard routes to the advisory screen.
    HigherThanNormal,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::NotEntered => "Not entered",
            Status::Normal => "Normal",
            Status::Elevated => "Elevated",
            Status::HigherThanNormal => "Higher than normal",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Status::NotEntered => Tone::Slate,
            Status::Normal => Tone::Emerald,
            Status::Elevated => Tone::Amber,
            Status::HigherThanNormal => Tone::Rose,
        }
    }

    /// Elevated or worse.
    pub fn is_abnormal(&self) -> bool {
        matches!(self, Status::Elevated | Status::HigherThanNormal)
    }

    /// Classify `value` against a threshold pair, `elevated` checked first.
    pub(crate) fn classify(value: f64, thresholds: ThresholdPair) -> Self {
        if value >= thresholds.elevated {
            Status::HigherThanNormal
        } else if value >= thresholds.normal {
            Status::Elevated
        } else {
            Status::Normal
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display colour family for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tone {
    Slate,
    Sky,
    Emerald,
    Amber,
    Rose,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Slate => "slate",
            Tone::Sky => "sky",
            Tone::Emerald => "emerald",
            Tone::Amber => "amber",
            Tone::Rose => "rose",
        }
    }
}
