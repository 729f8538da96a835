//! Page body extraction and template injection.
//!
//! ```text
//! docs/index.html                     index_template.html
//! <html><body id="x">Hello</body>     <html>__BODY__</html>
//!                    ^^^^^                  ^^^^^^^^
//!                    extract_body() ──────► inject_body()
//!
//! index.html: <html>Hello</html>
//! ```

use super::SpliceError;
use regex::Regex;
use std::sync::LazyLock;

/// Opening body tag with any attributes, on a single line.
static BODY_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<body.*?>").unwrap());

static BODY_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</body>").unwrap());

/// Return the text strictly between the first `<body ...>` tag and the
/// first `</body>` that follows it.
///
/// Both tags are matched case-insensitively. The slice is returned
/// verbatim, whitespace included.
pub fn extract_body(content: &str) -> Result<&str, SpliceError> {
    let open = BODY_OPEN
        .find(content)
        .ok_or_else(|| SpliceError::DelimiterNotFound("<body>".into()))?;

    let rest = &content[open.end()..];
    let close = BODY_CLOSE
        .find(rest)
        .ok_or_else(|| SpliceError::DelimiterNotFound("</body>".into()))?;

    Ok(&rest[..close.start()])
}

/// Replace every occurrence of `placeholder` in `template` with `body`.
pub fn inject_body(template: &str, placeholder: &str, body: &str) -> Result<String, SpliceError> {
    if placeholder.is_empty() || !template.contains(placeholder) {
        return Err(SpliceError::PlaceholderNotFound(placeholder.to_owned()));
    }
    Ok(template.replace(placeholder, body))
}

// ============================================================================
// Tests
// ============================================================================
