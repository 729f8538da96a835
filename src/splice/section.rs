//! Named comment-delimited sections.
//!
//! A section is the text between `<!-- NAME -->` and `<!-- /NAME -->`.
//! Replacing it swaps the interior and keeps both markers:
//!
//! ```text
//! <!-- HEADER -->old header<!-- /HEADER -->
//!                ^^^^^^^^^^ replaced by the fragment
//! ```

use super::SpliceError;
use regex::{Match, Regex};

/// Compiled start/end markers for one section name.
#[derive(Debug, Clone)]
pub struct SectionMarkers {
    name: String,
    start: Regex,
    end: Regex,
}

impl SectionMarkers {
    /// Build markers for `name`. Whitespace inside the comment is flexible.
    pub fn new(name: &str) -> Result<Self, SpliceError> {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed != name {
            return Err(SpliceError::InvalidSectionName(name.to_owned()));
        }

        let escaped = regex::escape(name);
        let start = Regex::new(&format!(r"<!--\s*{escaped}\s*-->"))
            .map_err(|_| SpliceError::InvalidSectionName(name.to_owned()))?;
        let end = Regex::new(&format!(r"<!--\s*/{escaped}\s*-->"))
            .map_err(|_| SpliceError::InvalidSectionName(name.to_owned()))?;

        Ok(Self {
            name: name.to_owned(),
            start,
            end,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Locate the first start and first end marker.
    fn locate<'a>(&self, content: &'a str) -> Result<(Match<'a>, Match<'a>), SpliceError> {
        let start = self
            .start
            .find(content)
            .ok_or_else(|| SpliceError::DelimiterNotFound(format!("<!-- {} -->", self.name)))?;
        let end = self
            .end
            .find(content)
            .ok_or_else(|| SpliceError::DelimiterNotFound(format!("<!-- /{} -->", self.name)))?;

        if end.start() < start.end() {
            return Err(SpliceError::MarkersOutOfOrder {
                name: self.name.clone(),
            });
        }
        Ok((start, end))
    }
}

/// A section's markers paired with the fragment that fills it.
#[derive(Debug, Clone)]
pub struct Section {
    pub markers: SectionMarkers,
    pub fragment: String,
}

impl Section {
    pub fn new(name: &str, fragment: impl Into<String>) -> Result<Self, SpliceError> {
        Ok(Self {
            markers: SectionMarkers::new(name)?,
            fragment: fragment.into(),
        })
    }
}

/// Replace the interior of the section described by `markers`.
///
/// Everything outside the marker pair, markers included, is kept byte-for-byte.
pub fn replace_section(
    content: &str,
    markers: &SectionMarkers,
    replacement: &str,
) -> Result<String, SpliceError> {
    let (start, end) = markers.locate(content)?;

    let mut out = String::with_capacity(
        start.end() + replacement.len() + (content.len() - end.start()),
    );
    out.push_str(&content[..start.end()]);
    out.push_str(replacement);
    out.push_str(&content[end.start()..]);
    Ok(out)
}

/// Apply every section in order, each on the result of the previous one.
pub fn apply_sections(content: &str, sections: &[Section]) -> Result<String, SpliceError> {
    sections
        .iter()
        .try_fold(content.to_owned(), |acc, section| {
            replace_section(&acc, &section.markers, &section.fragment)
        })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> SectionMarkers {
        SectionMarkers::new("HEADER").unwrap()
    }

    #[test]
    fn test_replace_section_basic() {
        let content = "<html><!-- HEADER -->old<!-- /HEADER --><p>x</p></html>";
        let out = replace_section(content, &header(), "new").unwrap();
        assert_eq!(out, "<html><!-- HEADER -->new<!-- /HEADER --><p>x</p></html>");
    }

    #[test]
    fn test_replace_section_flexible_whitespace() {
        let content = "a<!--HEADER-->old<!--\n  /HEADER\t-->b";
        let out = replace_section(content, &header(), "new").unwrap();
        assert_eq!(out, "a<!--HEADER-->new<!--\n  /HEADER\t-->b");
    }

    #[test]
    fn test_replace_section_preserves_outside_bytes() {
        let before = "<!DOCTYPE html>\r\n<head>\t<title>t</title></head>\r\n";
        let after = "\r\n<main>body ünïcode</main>\n";
        let content = format!("{before}<!-- HEADER -->\nold\n<!-- /HEADER -->{after}");
        let out = replace_section(&content, &header(), "<nav/>").unwrap();
        assert!(out.starts_with(&format!("{before}<!-- HEADER -->")));
        assert!(out.ends_with(&format!("<!-- /HEADER -->{after}")));
        assert!(out.contains("<!-- HEADER --><nav/><!-- /HEADER -->"));
    }

    #[test]
    fn test_replace_section_empty_interior() {
        let content = "<!-- HEADER --><!-- /HEADER -->";
        let out = replace_section(content, &header(), "x").unwrap();
        assert_eq!(out, "<!-- HEADER -->x<!-- /HEADER -->");
    }

    #[test]
    fn test_replace_section_first_match_only() {
        let content = "<!-- HEADER -->a<!-- /HEADER --><!-- HEADER -->b<!-- /HEADER -->";
        let out = replace_section(content, &header(), "x").unwrap();
        assert_eq!(out, "<!-- HEADER -->x<!-- /HEADER --><!-- HEADER -->b<!-- /HEADER -->");
    }

    #[test]
    fn test_replace_section_missing_start() {
        let err = replace_section("old<!-- /HEADER -->", &header(), "x").unwrap_err();
        assert!(matches!(err, SpliceError::DelimiterNotFound(ref m) if m == "<!-- HEADER -->"));
    }

    #[test]
    fn test_replace_section_missing_end() {
        let err = replace_section("<!-- HEADER -->old", &header(), "x").unwrap_err();
        assert!(matches!(err, SpliceError::DelimiterNotFound(ref m) if m == "<!-- /HEADER -->"));
    }

    #[test]
    fn test_replace_section_out_of_order() {
        let err = replace_section("<!-- /HEADER -->x<!-- HEADER -->", &header(), "y").unwrap_err();
        assert!(matches!(err, SpliceError::MarkersOutOfOrder { ref name } if name == "HEADER"));
    }

    #[test]
    fn test_name_is_matched_literally() {
        let markers = SectionMarkers::new("NAV.MAIN").unwrap();
        assert!(replace_section("<!-- NAVXMAIN -->a<!-- /NAVXMAIN -->", &markers, "b").is_err());
        let out = replace_section("<!-- NAV.MAIN -->a<!-- /NAV.MAIN -->", &markers, "b").unwrap();
        assert_eq!(out, "<!-- NAV.MAIN -->b<!-- /NAV.MAIN -->");
    }

    #[test]
    fn test_name_prefix_does_not_match() {
        let content = "<!-- HEADER2 -->a<!-- /HEADER2 -->";
        assert!(replace_section(content, &header(), "b").is_err());
    }

    #[test]
    fn test_invalid_section_names() {
        assert!(SectionMarkers::new("").is_err());
        assert!(SectionMarkers::new("   ").is_err());
        assert!(SectionMarkers::new(" HEADER").is_err());
        assert_eq!(SectionMarkers::new("FOOTER").unwrap().name(), "FOOTER");
    }

    #[test]
    fn test_apply_sections_in_order() {
        let content = "<!-- HEADER -->h<!-- /HEADER -->|<!-- FOOTER -->f<!-- /FOOTER -->";
        let sections = vec![
            Section::new("HEADER", "<header/>").unwrap(),
            Section::new("FOOTER", "<footer/>").unwrap(),
        ];
        let out = apply_sections(content, &sections).unwrap();
        assert_eq!(
            out,
            "<!-- HEADER --><header/><!-- /HEADER -->|<!-- FOOTER --><footer/><!-- /FOOTER -->"
        );
    }

    #[test]
    fn test_apply_sections_cumulative() {
        // The header fragment introduces the footer markers used by the next section
        let content = "<!-- HEADER --><!-- /HEADER -->";
        let sections = vec![
            Section::new("HEADER", "<!-- FOOTER --><!-- /FOOTER -->").unwrap(),
            Section::new("FOOTER", "f").unwrap(),
        ];
        let out = apply_sections(content, &sections).unwrap();
        assert_eq!(out, "<!-- HEADER --><!-- FOOTER -->f<!-- /FOOTER --><!-- /HEADER -->");
    }

    #[test]
    fn test_apply_sections_idempotent() {
        let content = "<!-- HEADER -->h<!-- /HEADER --><!-- FOOTER -->f<!-- /FOOTER -->";
        let sections = vec![
            Section::new("HEADER", "H").unwrap(),
            Section::new("FOOTER", "F").unwrap(),
        ];
        let once = apply_sections(content, &sections).unwrap();
        let twice = apply_sections(&once, &sections).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_sections_fails_on_any_missing() {
        let content = "<!-- HEADER -->h<!-- /HEADER -->";
        let sections = vec![
            Section::new("HEADER", "H").unwrap(),
            Section::new("FOOTER", "F").unwrap(),
        ];
        let err = apply_sections(content, &sections).unwrap_err();
        assert!(matches!(err, SpliceError::DelimiterNotFound(ref m) if m.contains("FOOTER")));
    }

    #[test]
    fn test_apply_no_sections_is_identity() {
        assert_eq!(apply_sections("anything", &[]).unwrap(), "anything");
    }
}
