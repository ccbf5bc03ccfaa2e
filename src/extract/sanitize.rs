/// Clean a raw OCR transcription before extraction.
///
/// Strips control characters and symbols lab reports never use, trims each
/// line, and collapses runs of blank lines to a single one — blank lines
/// are block boundaries and must survive. The extractor never calls this
/// itself; callers apply it once at the OCR boundary.
pub fn sanitize_report_text(raw: &str) -> String {
    let filtered: String = raw.chars().filter(|c| keep_char(*c)).collect();

    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = true; // drops leading blank lines
    for line in filtered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !previous_blank {
                lines.push("");
                previous_blank = true;
            }
        } else {
            lines.push(trimmed);
            previous_blank = false;
        }
    }
    while lines.last() == Some(&"") {
        lines.pop();
    }
    lines.join("\n")
}

/// Keep alphanumerics (including CJK), whitespace, and the punctuation and
/// symbols clinical lab text uses: colons (both widths), range dashes,
/// parentheses (both widths), powers (10^9/L), arrows, sign notation.
fn keep_char(c: char) -> bool {
    c.is_alphanumeric()
        || c.is_whitespace()
        || matches!(
            c,
            '.' | ','
                | ';'
                | ':'
                | '：'
                | '-'
                | '/'
                | '('
                | ')'
                | '（'
                | '）'
                | '['
                | ']'
                | '+'
                | '='
                | '%'
                | '^'
                | '*'
                | '_'
                | '°'
                | '²'
                | '³'
                | 'µ'
                | 'μ'
                | '↑'
                | '↓'
                | '<'
                | '>'
        )
}
