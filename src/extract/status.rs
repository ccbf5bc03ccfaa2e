use crate::models::IndicatorStatus;

/// Markers asserting a result inside its reference interval.
const NORMAL_MARKERS: &[&str] = &[
    "正常",
    "normal",
    "参考范围内",
    "参考值内",
    "(-)",
    "negative",
];

/// Markers asserting a result outside its reference interval: Chinese
/// clinical shorthand, arrow notation, parenthetical sign notation, and the
/// English equivalents.
const ABNORMAL_MARKERS: &[&str] = &[
    "异常",
    "abnormal",
    "高",
    "↑",
    "偏高",
    "低",
    "↓",
    "偏低",
    "阳性",
    "positive",
    "(+)",
];

/// Classify a free-text status fragment into the three-way category.
///
/// Case-insensitive containment against the marker tables, normal markers
/// checked first. Empty input means the report asserted nothing and reads
/// as `Normal`; vocabulary outside both tables reads as `Warning` so an
/// unrecognized abnormal finding is never masked as normal.
pub fn classify_status(text: &str) -> IndicatorStatus {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return IndicatorStatus::Normal;
    }

    let lower = trimmed.to_lowercase();
    if contains_any(&lower, NORMAL_MARKERS) {
        return IndicatorStatus::Normal;
    }
    if contains_any(&lower, ABNORMAL_MARKERS) {
        return IndicatorStatus::Abnormal;
    }
    IndicatorStatus::Warning
}

fn contains_any(lower_text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| lower_text.contains(m))
}
