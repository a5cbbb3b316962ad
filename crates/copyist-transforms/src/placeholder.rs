//! `{key}` placeholder expansion for transform templates.

use std::sync::LazyLock;

use copyist_core::{Context, TransformError};
use regex::Regex;

/// Matches `{key}` placeholders; the key names a context entry.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_.-]+)\}").expect("Invalid placeholder regex"));

/// Expand `{key}` placeholders from string context values.
///
/// An unknown key is an error rather than being silently left in place,
/// so a typo in a template cannot end up in a managed file.
pub fn expand(template: &str, context: &Context) -> Result<String, TransformError> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(template) {
        let whole = caps.get(0).unwrap();
        let key = caps.get(1).unwrap().as_str();
        out.push_str(&template[last..whole.start()]);
        out.push_str(context.require_str(key)?);
        last = whole.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}
