use serde::{Deserialize, Serialize};

use super::ModelError;

/// Three-way clinical interpretation bucket assigned to an indicator.
///
/// The report text asserts its own interpretation; anything outside the
/// recognized status vocabulary maps to `Warning` rather than being assumed
/// normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStatus {
    Normal,
    Abnormal,
    Warning,
}

impl IndicatorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Abnormal => "abnormal",
            Self::Warning => "warning",
        }
    }
}

impl std::str::FromStr for IndicatorStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "abnormal" => Ok(Self::Abnormal),
            "warning" => Ok(Self::Warning),
            _ => Err(ModelError::InvalidEnum {
                field: "IndicatorStatus".into(),
                value: s.into(),
            }),
        }
    }
}

impl std::fmt::Display for IndicatorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
