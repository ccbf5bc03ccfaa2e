//! Ordered line matchers for lab-report text.
//!
//! Each matcher is a predicate-plus-extractor over a single line. The
//! extractor tries them in fixed priority order: recognized labeled fields
//! first, then the inline key-value row, then the whitespace-column row.
//! Adding a label spelling or row shape is a local change to one table or
//! one matcher.

use std::sync::LazyLock;

use regex::Regex;

/// Field a labeled line assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabeledField {
    Name,
    Value,
    Unit,
    ReferenceRange,
    Status,
}

const NAME_LABELS: &[&str] = &["项目", "指标", "检验项目"];
const VALUE_LABELS: &[&str] = &["检测结果", "结果", "测定值", "数值"];
const UNIT_LABELS: &[&str] = &["单位"];
const RANGE_LABELS: &[&str] = &["参考范围", "参考值", "正常范围", "范围"];
const STATUS_LABELS: &[&str] = &["状态", "结果状态"];

/// Fields parsed out of a single free-form row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFields {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub reference_range: Option<String>,
    pub status_text: Option<String>,
}

/// Inline key-value row: `name<colon> value unit (range) [status...]`,
/// e.g. `血糖: 5.2 mmol/L (3.9-6.1) 偏高`. Accepts full- and half-width
/// colons and parentheses; the unit is a run of unit characters (letters,
/// μ, %, /, digits, ^ for powers like 10^9/L).
static INLINE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)[：:]\s*([\d.]+)\s*([a-zA-Zμµ%/0-9^]+)\s*[（(]([^）)]+)[）)]\s*(.*)$")
        .unwrap()
});

/// Split a line at its first colon (full- or half-width) and match the
/// label part against the recognized families. Returns the field and the
/// trimmed remainder, which may be empty (`单位：` with nothing after).
pub fn match_labeled_field(line: &str) -> Option<(LabeledField, &str)> {
    let (label, rest) = split_at_colon(line)?;
    let label = label.trim().to_lowercase();
    let field = field_for_label(&label)?;
    Some((field, rest.trim()))
}

fn field_for_label(label: &str) -> Option<LabeledField> {
    if NAME_LABELS.contains(&label) {
        Some(LabeledField::Name)
    } else if VALUE_LABELS.contains(&label) {
        Some(LabeledField::Value)
    } else if UNIT_LABELS.contains(&label) {
        Some(LabeledField::Unit)
    } else if RANGE_LABELS.contains(&label) {
        Some(LabeledField::ReferenceRange)
    } else if STATUS_LABELS.contains(&label) {
        Some(LabeledField::Status)
    } else {
        None
    }
}

fn split_at_colon(line: &str) -> Option<(&str, &str)> {
    let (idx, colon) = line.char_indices().find(|&(_, c)| c == '：' || c == ':')?;
    Some((&line[..idx], &line[idx + colon.len_utf8()..]))
}

/// Match an inline key-value row. The label side must not be one of the
/// recognized families — the extractor guarantees that by trying
/// [`match_labeled_field`] first.
pub fn match_inline_row(line: &str) -> Option<RowFields> {
    let caps = INLINE_ROW.captures(line)?;
    let status = caps[5].trim();
    Some(RowFields {
        name: caps[1].trim().to_string(),
        value: caps[2].trim().to_string(),
        unit: caps[3].trim().to_string(),
        reference_range: Some(caps[4].trim().to_string()),
        status_text: if status.is_empty() {
            None
        } else {
            Some(status.to_string())
        },
    })
}

/// Match a whitespace-delimited tabular row: at least three tokens, read as
/// name, value, unit, then optional reference range and status text.
pub fn match_column_row(line: &str) -> Option<RowFields> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return None;
    }
    Some(RowFields {
        name: tokens[0].to_string(),
        value: tokens[1].to_string(),
        unit: tokens[2].to_string(),
        reference_range: tokens.get(3).map(|t| t.to_string()),
        status_text: if tokens.len() > 4 {
            Some(tokens[4..].join(" "))
        } else {
            None
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_name_full_width_colon() {
        let (field, rest) = match_labeled_field("项目：白细胞").unwrap();
        assert_eq!(field, LabeledField::Name);
        assert_eq!(rest, "白细胞");
    }

    #[test]
    fn labeled_field_half_width_colon() {
        let (field, rest) = match_labeled_field("检测结果: 5.6").unwrap();
        assert_eq!(field, LabeledField::Value);
        assert_eq!(rest, "5.6");
    }

    #[test]
    fn all_label_spellings_recognized() {
        for (line, expected) in [
            ("指标：血糖", LabeledField::Name),
            ("检验项目：血红蛋白", LabeledField::Name),
            ("结果：阳性", LabeledField::Value),
            ("测定值：4.5", LabeledField::Value),
            ("数值：140", LabeledField::Value),
            ("单位：g/L", LabeledField::Unit),
            ("参考范围：4.0-10.0", LabeledField::ReferenceRange),
            ("参考值：3.9-6.1", LabeledField::ReferenceRange),
            ("正常范围：110-160", LabeledField::ReferenceRange),
            ("范围：100-300", LabeledField::ReferenceRange),
            ("状态：正常", LabeledField::Status),
            ("结果状态：偏高", LabeledField::Status),
        ] {
            let (field, _) = match_labeled_field(line)
                .unwrap_or_else(|| panic!("label not recognized in {line:?}"));
            assert_eq!(field, expected, "wrong field for {line:?}");
        }
    }

    #[test]
    fn labeled_field_with_empty_rest() {
        let (field, rest) = match_labeled_field("单位：").unwrap();
        assert_eq!(field, LabeledField::Unit);
        assert_eq!(rest, "");
    }

    #[test]
    fn label_whitespace_ignored() {
        let (field, rest) = match_labeled_field("  项目 ： 白细胞 ").unwrap();
        assert_eq!(field, LabeledField::Name);
        assert_eq!(rest, "白细胞");
    }

    #[test]
    fn unrecognized_label_is_not_matched() {
        assert!(match_labeled_field("医院：协和").is_none());
        assert!(match_labeled_field("白细胞 5.6").is_none());
        assert!(match_labeled_field("").is_none());
    }

    #[test]
    fn inline_row_with_status() {
        let row = match_inline_row("血糖: 5.2 mmol/L (3.9-6.1) 偏高").unwrap();
        assert_eq!(row.name, "血糖");
        assert_eq!(row.value, "5.2");
        assert_eq!(row.unit, "mmol/L");
        assert_eq!(row.reference_range.as_deref(), Some("3.9-6.1"));
        assert_eq!(row.status_text.as_deref(), Some("偏高"));
    }

    #[test]
    fn inline_row_full_width_punctuation() {
        let row = match_inline_row("血红蛋白：140 g/L（110-160）").unwrap();
        assert_eq!(row.name, "血红蛋白");
        assert_eq!(row.value, "140");
        assert_eq!(row.unit, "g/L");
        assert_eq!(row.reference_range.as_deref(), Some("110-160"));
        assert_eq!(row.status_text, None);
    }

    #[test]
    fn inline_row_requires_parenthesized_range() {
        assert!(match_inline_row("血糖: 5.2 mmol/L").is_none());
        assert!(match_inline_row("血糖: 阳性").is_none());
    }

    #[test]
    fn column_row_full_width() {
        let row = match_column_row("白细胞 5.6 10^9/L 4.0-10.0 正常").unwrap();
        assert_eq!(row.name, "白细胞");
        assert_eq!(row.value, "5.6");
        assert_eq!(row.unit, "10^9/L");
        assert_eq!(row.reference_range.as_deref(), Some("4.0-10.0"));
        assert_eq!(row.status_text.as_deref(), Some("正常"));
    }

    #[test]
    fn column_row_three_tokens_only() {
        let row = match_column_row("血小板 220 10^9/L").unwrap();
        assert_eq!(row.reference_range, None);
        assert_eq!(row.status_text, None);
    }

    #[test]
    fn column_row_joins_trailing_status_tokens() {
        let row = match_column_row("血糖 6.8 mmol/L 3.9-6.1 偏高 复查").unwrap();
        assert_eq!(row.status_text.as_deref(), Some("偏高 复查"));
    }

    #[test]
    fn column_row_needs_three_tokens() {
        assert!(match_column_row("白细胞 5.6").is_none());
        assert!(match_column_row("白细胞").is_none());
        assert!(match_column_row("").is_none());
    }
}
