//! Free-text lab-report indicator extraction.
//!
//! Takes the noisy, loosely formatted, bilingual (Chinese/English) text a
//! vision-model OCR pass produces for a photographed clinical lab report
//! and converts it into normalized [`MedicalIndicator`] records, each
//! classified into a three-way clinical status category.
//!
//! The crate is pure text-to-data: no I/O, no network, no persistence. The
//! surrounding application owns upload, OCR invocation, display, and
//! export; it feeds the raw transcription into [`extract_indicators`] and
//! consumes the returned records.

pub mod extract;
pub mod models;

pub use extract::{classify_status, extract_indicators, sanitize_report_text};
pub use models::{AnalyzedReport, IndicatorStatus, MedicalIndicator, ModelError};
