//! Link extraction: `[[target|label]]` wikilinks and rendered `href="/target"` anchors.
//!
//! Both notations feed the same target pipeline:
//! 1. keep the part before the first `|`
//! 2. drop a trailing `.md` / `.markdown` extension (case-insensitive, one optional whitespace)
//! 3. remove every `\`
//! 4. trim
//! 5. keep the part before the first `#`
//!
//! Extraction never deduplicates and never fails: unmatched syntax yields no targets.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `[[...|...]]`. The pipe is required; plain `[[Note]]` is not a match.
static WIKILINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(.*?\|.*?)\]\]").unwrap());

/// Matches a site-relative rendered anchor target: `href="/..."`
static RENDERED_LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="/(.*?)""#).unwrap());

/// Trailing note extension
static EXTENSION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(md|markdown)\s?$").unwrap());

/// The link notation a target was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkNotation {
    /// `[[target|label]]`
    WikiLink,
    /// `href="/target"`
    RenderedAnchor,
}

/// Fast pre-filter: skip regex if no wikilink opener exists.
#[inline]
fn has_wikilink(content: &str) -> bool {
    content.contains("[[")
}

#[inline]
fn has_rendered_link(content: &str) -> bool {
    content.contains("href=\"/")
}

/// Extract all link targets from `content`.
///
/// Wikilink targets come first, then rendered-anchor targets, each in document order.
/// Repeated links are all returned.
///
/// ```
/// use gardengraph_parser::extract_links;
///
/// let links = extract_links(r#"[[rust/Ownership#moves|moves]] and <a href="/notes/tools/">tools</a>"#);
/// assert_eq!(links, vec!["rust/Ownership", "notes/tools/"]);
/// ```
pub fn extract_links(content: &str) -> Vec<String> {
    let mut links = extract_wikilinks(content);
    links.extend(extract_rendered_links(content));
    links
}

/// Extract targets of `[[target|label]]` wikilinks.
pub fn extract_wikilinks(content: &str) -> Vec<String> {
    extract_with(&WIKILINK_PATTERN, content, LinkNotation::WikiLink)
}

/// Extract targets of rendered `href="/target"` anchors.
pub fn extract_rendered_links(content: &str) -> Vec<String> {
    extract_with(&RENDERED_LINK_PATTERN, content, LinkNotation::RenderedAnchor)
}

fn extract_with(pattern: &Regex, content: &str, notation: LinkNotation) -> Vec<String> {
    let present = match notation {
        LinkNotation::WikiLink => has_wikilink(content),
        LinkNotation::RenderedAnchor => has_rendered_link(content),
    };
    if !present {
        return Vec::new();
    }

    let targets: Vec<String> = pattern
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|inner| normalize_target(inner.as_str()))
        .collect();
    log::debug!("{:?}: {} targets", notation, targets.len());
    targets
}

/// Reduce the inside of a link to its target identifier.
///
/// ```
/// use gardengraph_parser::normalize_target;
///
/// assert_eq!(normalize_target(r" folder\/Note.MD |label"), "folder/Note");
/// assert_eq!(normalize_target("Note#Heading"), "Note");
/// ```
pub fn normalize_target(inner: &str) -> String {
    let target = inner.split('|').next().unwrap_or_default();
    let target = EXTENSION_SUFFIX.replace(target, "");
    let target = target.replace('\\', "");
    let target = target.trim();
    target.split('#').next().unwrap_or_default().to_string()
}
