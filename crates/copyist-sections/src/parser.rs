//! Line-based scanner for bracketed table headers.
//!
//! A document is parsed only far enough to find section boundaries: a
//! section starts at a `[key]` (or `[[key]]`) header line and runs to the
//! line before the next header of any name, or end of document. Trailing
//! blank lines belong to the gap between sections, not the section itself,
//! so inter-section spacing survives replacement.

use std::ops::Range;

use crate::error::{Error, Result};

/// A section located in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Normalized dotted table name, quoting and whitespace stripped.
    pub name: String,
    /// Full text of the section, header line through its last non-blank
    /// line (including that line's newline when present).
    pub text: String,
    /// 1-based line number of the header line.
    pub line: usize,
    /// Byte range of `text` within the scanned document.
    pub span: Range<usize>,
}

/// Locates every section in `document`, in order of appearance.
///
/// Any line whose first non-whitespace character is `[` must be a table
/// header; a line that opens a bracket without closing it properly is a
/// malformed document, reported rather than silently misparsed.
///
/// # Example
/// ```
/// use copyist_sections::parse_sections;
///
/// let doc = "[package]\nname = \"demo\"\n\n[lints.rust]\nunsafe_code = \"deny\"\n";
/// let sections = parse_sections(doc).unwrap();
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[0].name, "package");
/// assert_eq!(sections[1].name, "lints.rust");
/// ```
pub fn parse_sections(document: &str) -> Result<Vec<Section>> {
    let lines: Vec<&str> = document.split('\n').collect();

    let mut offsets = Vec::with_capacity(lines.len());
    let mut offset = 0;
    for line in &lines {
        offsets.push(offset);
        offset += line.len() + 1;
    }

    let mut headers = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if let Some(key) = header_key(line, idx + 1)? {
            headers.push((idx, key));
        }
    }

    let mut sections = Vec::with_capacity(headers.len());
    for (pos, (start_idx, key)) in headers.iter().enumerate() {
        let limit = headers
            .get(pos + 1)
            .map(|(next_idx, _)| *next_idx)
            .unwrap_or(lines.len());

        // Last non-blank line of the section; the header line itself is
        // never blank, so this always lands.
        let mut last = *start_idx;
        for idx in *start_idx..limit {
            if !lines[idx].trim().is_empty() {
                last = idx;
            }
        }

        let mut end = offsets[last] + lines[last].len();
        if last + 1 < lines.len() {
            end += 1;
        }

        let span = offsets[*start_idx]..end;
        sections.push(Section {
            name: key.clone(),
            text: document[span.clone()].to_string(),
            line: start_idx + 1,
            span,
        });
    }

    Ok(sections)
}

/// Finds the named section in `document`.
///
/// When the document contains the same header more than once (malformed
/// input), the first occurrence is authoritative.
///
/// # Example
/// ```
/// use copyist_sections::find_section;
///
/// let doc = "[a]\nx = 1\n\n[b]\ny = 2\n";
/// let section = find_section(doc, "a").unwrap().unwrap();
/// assert_eq!(section.text, "[a]\nx = 1\n");
/// assert!(find_section(doc, "c").unwrap().is_none());
/// ```
pub fn find_section(document: &str, name: &str) -> Result<Option<Section>> {
    let target = normalize_key(name);
    Ok(parse_sections(document)?
        .into_iter()
        .find(|section| section.name == target))
}

/// Checks whether the named section exists in `document`.
pub fn has_section(document: &str, name: &str) -> Result<bool> {
    Ok(find_section(document, name)?.is_some())
}

/// Parses a single line as a table header.
///
/// Returns `Ok(None)` for non-header lines, the normalized dotted key for
/// `[key]` / `[[key]]` lines, and an error for a line that opens a header
/// without closing it.
fn header_key(line: &str, line_no: usize) -> Result<Option<String>> {
    let trimmed = line.trim_start();
    if !trimmed.starts_with('[') {
        return Ok(None);
    }

    let malformed = || Error::MalformedHeader {
        line: line_no,
        text: line.trim_end().to_string(),
    };

    let array = trimmed.starts_with("[[");
    let rest = &trimmed[if array { 2 } else { 1 }..];

    // Walk to the closing bracket, honoring quoted key segments.
    let mut in_basic = false;
    let mut in_literal = false;
    let mut close = None;
    for (i, c) in rest.char_indices() {
        match c {
            '"' if !in_literal => in_basic = !in_basic,
            '\'' if !in_basic => in_literal = !in_literal,
            ']' if !in_basic && !in_literal => {
                close = Some(i);
                break;
            }
            _ => {}
        }
    }
    let Some(close) = close else {
        return Err(malformed());
    };

    let mut after = &rest[close + 1..];
    if array {
        after = after.strip_prefix(']').ok_or_else(|| malformed())?;
    }

    // Only whitespace or a comment may follow the header.
    let after = after.trim_start();
    if !after.is_empty() && !after.starts_with('#') {
        return Err(malformed());
    }

    Ok(Some(normalize_key(&rest[..close])))
}

/// Normalizes a dotted key: whitespace around dots is insignificant and
/// quoted segments compare by their contents, so `[ tool . "isort" ]`
/// names the same section as `tool.isort` while never matching a mere
/// prefix like `tool.isortx`.
pub(crate) fn normalize_key(raw: &str) -> String {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_basic = false;
    let mut in_literal = false;
    for c in raw.chars() {
        match c {
            '"' if !in_literal => in_basic = !in_basic,
            '\'' if !in_basic => in_literal = !in_literal,
            '.' if !in_basic && !in_literal => {
                segments.push(current.trim().to_string());
                current = String::new();
            }
            _ => current.push(c),
        }
    }
    segments.push(current.trim().to_string());
    segments.join(".")
}
