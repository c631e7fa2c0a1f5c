//! Text utilities shared by the admin API and the public renderer: slug
//! derivation, HTML-to-text stripping for excerpts, and date formatting.

use chrono::{DateTime, Utc};

/// Derive a URL slug from a post title.
///
/// Lowercases, strips characters that are not ASCII letters/digits/underscore/
/// whitespace/hyphen, collapses runs of whitespace/underscore/hyphen into a
/// single hyphen, and trims leading/trailing hyphens. Idempotent.
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;
    for c in title.to_lowercase().chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
        } else if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        }
        // all other characters are dropped
    }
    slug
}

/// Strip markup from an HTML string, yielding its plain text.
///
/// Tags are removed wholesale; the handful of entities the rich-text editor
/// emits are decoded. Matches DOM `textContent` semantics: no whitespace is
/// inserted between adjacent block elements.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();
    let mut in_tag = false;
    while let Some(c) = chars.next() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
        } else if c == '<' {
            in_tag = true;
        } else if c == '&' {
            let mut entity = String::new();
            let mut terminated = false;
            while let Some(&next) = chars.peek() {
                if next == ';' {
                    chars.next();
                    terminated = true;
                    break;
                }
                if (!next.is_ascii_alphanumeric() && next != '#') || entity.len() >= 8 {
                    break;
                }
                entity.push(next);
                chars.next();
            }
            if terminated {
                match decode_entity(&entity) {
                    Some(decoded) => text.push(decoded),
                    None => {
                        text.push('&');
                        text.push_str(&entity);
                        text.push(';');
                    }
                }
            } else {
                text.push('&');
                text.push_str(&entity);
            }
        } else {
            text.push(c);
        }
    }
    text
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" | "#160" => Some(' '),
        _ => None,
    }
}

/// Plain-text excerpt of an HTML string: markup stripped, truncated to
/// `limit` characters, ellipsis appended.
pub fn excerpt(html: &str, limit: usize) -> String {
    let text = strip_html(html);
    let mut out: String = text.chars().take(limit).collect();
    out.push_str("...");
    out
}

/// Whether rich-text content is effectively empty. The editor represents an
/// empty document as a single empty paragraph (`<p><br></p>`), which counts
/// as empty.
pub fn is_content_empty(html: &str) -> bool {
    strip_html(html).trim().is_empty()
}

/// Parse a stored RFC 3339 timestamp, falling back to the Unix epoch so that
/// unparseable values sort as oldest.
pub fn timestamp_or_epoch(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Long date format for public pages, e.g. "July 4, 2026".
pub fn format_date_long(value: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.format("%B %-d, %Y").to_string())
}

/// Month-and-day format for the home carousel, e.g. "July 4".
pub fn format_date_short(value: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.format("%B %-d").to_string())
}

/// Numeric date format for the admin list, e.g. "7/4/2026".
pub fn format_date_numeric(value: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
}
