use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::indicator::MedicalIndicator;

/// Result of analyzing one uploaded report photo: the raw OCR transcription
/// plus the indicators recognized in it. This is the unit the presentation
/// and export layers consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedReport {
    pub id: Uuid,
    pub file_name: String,
    pub analyzed_at: DateTime<Utc>,
    pub indicators: Vec<MedicalIndicator>,
    pub raw_text: String,
}

impl AnalyzedReport {
    pub fn new(
        file_name: impl Into<String>,
        raw_text: impl Into<String>,
        indicators: Vec<MedicalIndicator>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: file_name.into(),
            analyzed_at: Utc::now(),
            indicators,
            raw_text: raw_text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assigns_id_and_timestamp() {
        let report = AnalyzedReport::new("blood_panel.jpg", "项目：白细胞", vec![]);
        assert_eq!(report.file_name, "blood_panel.jpg");
        assert!(report.indicators.is_empty());
        assert!(!report.id.is_nil());
    }

    #[test]
    fn wire_format_is_camel_case() {
        let report = AnalyzedReport::new("report.jpg", "", vec![]);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("fileName").is_some());
        assert!(json.get("analyzedAt").is_some());
        assert!(json.get("rawText").is_some());
    }
}
