//! Frontmatter extraction: `---\nYAML\n---`

use gardengraph_core::{DocumentMeta, Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Matches a leading YAML frontmatter block; the YAML body may be empty.
static FRONTMATTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A---[ \t]*\r?\n(?:([\s\S]*?)\r?\n)?---[ \t]*(?:\r?\n|\z)").unwrap()
});

/// Split content into its frontmatter block and the remaining body.
///
/// Returns `(frontmatter_string, body)`; content without a complete block is
/// returned unchanged as the body.
pub fn extract_frontmatter(content: &str) -> (Option<&str>, &str) {
    match FRONTMATTER_PATTERN.captures(content) {
        Some(caps) => {
            let fm = caps.get(1).map_or("", |m| m.as_str());
            let end = caps.get(0).map_or(0, |m| m.end());
            (Some(fm), &content[end..])
        }
        None => (None, content),
    }
}

/// Deserialize frontmatter YAML into [`DocumentMeta`].
///
/// An empty or null block yields default metadata. Non-mapping YAML and
/// malformed YAML are parse errors.
pub fn parse_metadata(yaml: &str) -> Result<DocumentMeta> {
    if yaml.trim().is_empty() {
        return Ok(DocumentMeta::default());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(yaml)
        .map_err(|e| Error::parse_error(format!("Invalid frontmatter YAML: {}", e)))?;

    match value {
        serde_yaml::Value::Null => Ok(DocumentMeta::default()),
        serde_yaml::Value::Mapping(_) => serde_yaml::from_value(value)
            .map_err(|e| Error::parse_error(format!("Invalid frontmatter fields: {}", e))),
        _ => Err(Error::parse_error("Frontmatter must be a YAML mapping")),
    }
}

/// Parse a whole note: metadata from its frontmatter plus the body after it.
pub fn parse_document(content: &str) -> Result<(DocumentMeta, &str)> {
    let (fm, body) = extract_frontmatter(content);
    let meta = match fm {
        Some(yaml) => parse_metadata(yaml)?,
        None => DocumentMeta::default(),
    };
    Ok((meta, body))
}
