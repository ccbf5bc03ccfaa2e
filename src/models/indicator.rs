use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::IndicatorStatus;

/// A single lab test result as recognized in the report text.
///
/// `value` stays text — results may be non-numeric ("阳性"). `unit` and
/// `reference_range` are empty strings when the report did not carry them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalIndicator {
    pub id: Uuid,
    pub name: String,
    pub value: String,
    pub unit: String,
    pub reference_range: String,
    pub status: IndicatorStatus,
}
