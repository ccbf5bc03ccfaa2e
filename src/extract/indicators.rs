//! Block segmentation and record assembly for lab-report text.

use tracing::{debug, trace};
use uuid::Uuid;

use super::matchers::{
    match_column_row, match_inline_row, match_labeled_field, LabeledField, RowFields,
};
use super::status::classify_status;
use crate::models::{IndicatorStatus, MedicalIndicator};

/// Working record for one block. Built line by line and discarded at the
/// block boundary; never shared across blocks.
#[derive(Debug, Default)]
struct IndicatorBuilder {
    id: Option<Uuid>,
    name: Option<String>,
    value: Option<String>,
    unit: Option<String>,
    reference_range: Option<String>,
    status: Option<IndicatorStatus>,
}

impl IndicatorBuilder {
    /// Setting a name marks the start of a new indicator and draws a fresh
    /// id for it.
    fn set_name(&mut self, name: &str) {
        self.id = Some(Uuid::new_v4());
        self.name = Some(name.to_string());
    }

    fn apply_row(&mut self, row: RowFields) {
        self.set_name(&row.name);
        self.value = Some(row.value);
        self.unit = Some(row.unit);
        self.reference_range = row.reference_range;
        if let Some(status_text) = row.status_text {
            self.status = Some(classify_status(&status_text));
        }
    }

    /// Emit a record iff both name and value are non-empty after trimming.
    /// Everything else degrades to empty/default rather than rejecting.
    fn finish(self) -> Option<MedicalIndicator> {
        let name = self.name?.trim().to_string();
        let value = self.value?.trim().to_string();
        if name.is_empty() || value.is_empty() {
            return None;
        }
        Some(MedicalIndicator {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name,
            value,
            unit: self.unit.unwrap_or_default(),
            reference_range: self.reference_range.unwrap_or_default(),
            status: self.status.unwrap_or(IndicatorStatus::Normal),
        })
    }
}

/// Extract indicator records from a raw OCR transcription.
///
/// The text is segmented into blank-line-delimited blocks, each presumed to
/// describe at most one indicator. Within a block, lines run through the
/// matchers in priority order: recognized labeled fields first, then —
/// while the block has no name yet — the inline and whitespace-column row
/// heuristics. A block emits a record only when it produced both a name and
/// a value; unusable blocks are dropped silently. Malformed input yields
/// fewer or zero records, never an error.
///
/// Output preserves input order and is not deduplicated; ids are unique
/// even across duplicate names.
pub fn extract_indicators(raw_text: &str) -> Vec<MedicalIndicator> {
    let blocks = split_blocks(raw_text);
    let block_count = blocks.len();

    let mut indicators = Vec::new();
    for block in &blocks {
        match extract_block(block) {
            Some(indicator) => indicators.push(indicator),
            None => trace!(lines = block.len(), "dropped block without usable name and value"),
        }
    }

    debug!(
        blocks = block_count,
        indicators = indicators.len(),
        "extracted indicators from report text"
    );
    indicators
}

/// Group consecutive non-blank lines into blocks. A line is blank when it
/// trims to empty, so runs of whitespace-only lines (and `\r\n` endings)
/// separate blocks.
fn split_blocks(raw_text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw_text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn extract_block(lines: &[&str]) -> Option<MedicalIndicator> {
    let mut builder = IndicatorBuilder::default();

    for line in lines {
        let line = line.trim();

        if let Some((field, rest)) = match_labeled_field(line) {
            match field {
                LabeledField::Name => builder.set_name(rest),
                LabeledField::Value => builder.value = Some(rest.to_string()),
                LabeledField::Unit => builder.unit = Some(rest.to_string()),
                LabeledField::ReferenceRange => builder.reference_range = Some(rest.to_string()),
                LabeledField::Status => builder.status = Some(classify_status(rest)),
            }
            continue;
        }

        // Free-form rows fire only while the block has not named an
        // indicator, so labeled fields are never overwritten by a stray
        // trailing line.
        if builder.name.is_none() {
            if let Some(row) = match_inline_row(line).or_else(|| match_column_row(line)) {
                builder.apply_row(row);
            }
        }
    }

    builder.finish()
}
