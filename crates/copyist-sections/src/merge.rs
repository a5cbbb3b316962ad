//! Replace or append one named section of a document.

use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::{find_section, normalize_key, parse_sections};

/// Replaces the named section of `document` with `section_text`, or
/// appends it when absent.
///
/// Everything outside the section is preserved byte for byte; blank lines
/// separating the section from its neighbors are part of the surrounding
/// document and survive replacement. When the same header occurs more than
/// once (malformed input), the first occurrence is authoritative and later
/// ones are left alone.
///
/// `section_text` must consist of exactly one section: its own header
/// first, no further headers (a second header would split the managed span
/// on the next run). The merged section always ends with a single newline,
/// so re-filling with identical text is a no-op:
/// `fill_section(fill_section(d, n, t), n, t) == fill_section(d, n, t)`.
///
/// When the section is absent it is appended at the end of the document,
/// separated by exactly one blank line; an empty document becomes exactly
/// the section text plus trailing newline.
///
/// # Example
/// ```
/// use copyist_sections::fill_section;
///
/// let manifest = "[package]\nname = \"demo\"\n";
/// let updated =
///     fill_section(manifest, "lints.rust", "[lints.rust]\nunsafe_code = \"deny\"\n").unwrap();
/// assert_eq!(
///     updated,
///     "[package]\nname = \"demo\"\n\n[lints.rust]\nunsafe_code = \"deny\"\n"
/// );
/// ```
pub fn fill_section(document: &str, name: &str, section_text: &str) -> Result<String> {
    let block = normalize_section_text(name, section_text)?;

    match find_section(document, name)? {
        Some(section) => {
            debug!(name, line = section.line, "replacing existing section");
            let mut result = String::with_capacity(document.len() + block.len());
            result.push_str(&document[..section.span.start]);
            result.push_str(&block);
            result.push_str(&document[section.span.end..]);
            Ok(result)
        }
        None => {
            debug!(name, "appending new section");
            let body = document.trim_end();
            if body.is_empty() {
                Ok(block)
            } else {
                Ok(format!("{body}\n\n{block}"))
            }
        }
    }
}

/// Validates `section_text` for `name` and normalizes it to end with a
/// single newline.
fn normalize_section_text(name: &str, section_text: &str) -> Result<String> {
    let body = section_text.trim_end();
    let sections = parse_sections(body)?;

    let Some(first) = sections.first() else {
        return Err(Error::HeaderMismatch {
            name: name.to_string(),
        });
    };
    if first.name != normalize_key(name) || !body[..first.span.start].trim().is_empty() {
        return Err(Error::HeaderMismatch {
            name: name.to_string(),
        });
    }
    if sections.len() > 1 {
        return Err(Error::ExtraHeader {
            name: name.to_string(),
        });
    }

    Ok(format!("{}\n", &body[first.span.start..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = "\
# hand-written preamble
[package]
name = \"demo\"    # keep my alignment

[lints.rust]
unsafe_code = \"warn\"

[dependencies]
serde = \"1.0\"
";

    #[test]
    fn fill_into_empty_document() {
        let result = fill_section("", "lints.rust", "[lints.rust]\nunsafe_code = \"deny\"").unwrap();
        assert_eq!(result, "[lints.rust]\nunsafe_code = \"deny\"\n");
    }

    #[test]
    fn replace_preserves_everything_outside_the_section() {
        let result =
            fill_section(DOC, "lints.rust", "[lints.rust]\nunsafe_code = \"deny\"\n").unwrap();
        assert_eq!(
            result,
            "\
# hand-written preamble
[package]
name = \"demo\"    # keep my alignment

[lints.rust]
unsafe_code = \"deny\"

[dependencies]
serde = \"1.0\"
"
        );
    }

    #[test]
    fn append_separates_with_one_blank_line() {
        let result = fill_section(DOC, "lints.clippy", "[lints.clippy]\nall = \"warn\"").unwrap();
        assert!(result.ends_with("serde = \"1.0\"\n\n[lints.clippy]\nall = \"warn\"\n"));
        assert!(result.starts_with("# hand-written preamble\n"));
    }

    #[test]
    fn refill_with_identical_text_is_a_fixed_point() {
        let text = "[lints.rust]\nunsafe_code = \"deny\"\nmissing_docs = \"warn\"\n";
        let once = fill_section(DOC, "lints.rust", text).unwrap();
        let twice = fill_section(&once, "lints.rust", text).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn append_then_refill_is_a_fixed_point() {
        let text = "[lints.clippy]\nall = \"warn\"";
        let once = fill_section(DOC, "lints.clippy", text).unwrap();
        let twice = fill_section(&once, "lints.clippy", text).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn replacing_the_last_section_normalizes_the_trailing_newline() {
        let doc = "[a]\nx = 1\n\n[b]\ny = 2";
        let once = fill_section(doc, "b", "[b]\ny = 3").unwrap();
        assert_eq!(once, "[a]\nx = 1\n\n[b]\ny = 3\n");
        let twice = fill_section(&once, "b", "[b]\ny = 3").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn duplicate_sections_replace_only_the_first() {
        let doc = "[a]\nfirst = true\n\n[a]\nsecond = true\n";
        let result = fill_section(doc, "a", "[a]\nreplaced = true\n").unwrap();
        assert_eq!(result, "[a]\nreplaced = true\n\n[a]\nsecond = true\n");
    }

    #[test]
    fn section_text_must_open_with_the_named_header() {
        let err = fill_section(DOC, "lints.rust", "unsafe_code = \"deny\"\n").unwrap_err();
        assert!(matches!(err, Error::HeaderMismatch { .. }));

        let err = fill_section(DOC, "lints.rust", "[lints.clippy]\nall = \"warn\"\n").unwrap_err();
        assert!(matches!(err, Error::HeaderMismatch { .. }));
    }

    #[test]
    fn section_text_with_a_second_header_is_rejected() {
        let err = fill_section(DOC, "lints.rust", "[lints.rust]\nx = 1\n[lints.clippy]\ny = 2\n")
            .unwrap_err();
        assert!(matches!(err, Error::ExtraHeader { .. }));
    }

    #[test]
    fn malformed_document_fails_predictably() {
        let doc = "[a]\nx = 1\n[broken\n";
        let err = fill_section(doc, "a", "[a]\nx = 2\n").unwrap_err();
        assert!(matches!(err, Error::MalformedHeader { line: 3, .. }));
    }

    #[test]
    fn quoted_and_spaced_headers_match_the_plain_name() {
        let doc = "[ tool . \"isort\" ]\nold = true\n";
        let result = fill_section(doc, "tool.isort", "[tool.isort]\nnew = true\n").unwrap();
        assert_eq!(result, "[tool.isort]\nnew = true\n");
    }
}
