//! YAML front matter parsing.
//!
//! A document may open with a block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-01-15
//! tags: [rust, web]
//! ---
//! Body text.
//! ```

use serde::Deserialize;

use termfolio_types::error::Result;

/// Known front matter fields. All are optional at parse time; the loaders
/// decide which ones are required.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub excerpt: Option<String>,
}

/// Split a document into its raw front matter block and body.
///
/// Returns `None` for the block when the document does not open with a
/// delimiter or the block is never closed.
pub fn split_front_matter(doc: &str) -> (Option<&str>, &str) {
    let doc = doc.strip_prefix('\u{feff}').unwrap_or(doc);
    let Some(rest) = strip_delimiter_line(doc) else {
        return (None, doc);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }
    (None, doc)
}

fn strip_delimiter_line(doc: &str) -> Option<&str> {
    doc.strip_prefix("---\r\n")
        .or_else(|| doc.strip_prefix("---\n"))
}

impl FrontMatter {
    /// Parse the front matter of `doc` and return it with the body.
    ///
    /// A document without front matter yields empty fields.
    pub fn parse(doc: &str) -> Result<(Self, &str)> {
        let (yaml, body) = split_front_matter(doc);
        let matter = match yaml {
            Some(y) if !y.trim().is_empty() => serde_yaml::from_str(y)?,
            _ => Self::default(),
        };
        Ok((matter, body))
    }

    /// Whether the fields every post needs are present and non-empty.
    pub fn has_required(&self) -> bool {
        let present = |f: &Option<String>| f.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.title) && present(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_block_and_body() {
        let doc = "---\ntitle: Hi\n---\nBody\n";
        let (yaml, body) = split_front_matter(doc);
        assert_eq!(yaml, Some("title: Hi\n"));
        assert_eq!(body, "Body\n");
    }

    #[test]
    fn crlf_delimiters() {
        let doc = "---\r\ntitle: Hi\r\n---\r\nBody";
        let (yaml, body) = split_front_matter(doc);
        assert_eq!(yaml, Some("title: Hi\r\n"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn no_front_matter() {
        let (yaml, body) = split_front_matter("# Just markdown");
        assert_eq!(yaml, None);
        assert_eq!(body, "# Just markdown");
    }

    #[test]
    fn unterminated_block_is_body() {
        let doc = "---\ntitle: Hi\nno end";
        assert_eq!(split_front_matter(doc), (None, doc));
    }

    #[test]
    fn parses_fields() {
        let doc = "---\ntitle: Hello\ndate: 2024-01-15\ntags: [rust, web]\nexcerpt: Short\n---\nText";
        let (fm, body) = FrontMatter::parse(doc).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello"));
        assert_eq!(fm.date.as_deref(), Some("2024-01-15"));
        assert_eq!(fm.tags, vec!["rust", "web"]);
        assert_eq!(fm.excerpt.as_deref(), Some("Short"));
        assert_eq!(body, "Text");
        assert!(fm.has_required());
    }

    #[test]
    fn missing_date_is_incomplete() {
        let (fm, _) = FrontMatter::parse("---\ntitle: Hello\n---\n").unwrap();
        assert!(fm.tags.is_empty());
        assert!(!fm.has_required());
    }

    #[test]
    fn empty_block_is_default() {
        let (fm, body) = FrontMatter::parse("---\n---\nBody").unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, "Body");
    }

    #[test]
    fn invalid_yaml_is_error() {
        assert!(FrontMatter::parse("---\ntitle: [oops\n---\n").is_err());
    }
}
