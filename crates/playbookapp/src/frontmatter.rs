//! # Metadata Header (Frontmatter)
//!
//! Every section file starts with a YAML header fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Email & Lifecycle
//! emoji: "📧"
//! order: 5
//! description: AI-powered email campaigns
//! ---
//!
//! ## Body starts here
//! ```
//!
//! - The opening fence must be the first line (a UTF-8 BOM before it is tolerated).
//! - The header ends at the first line that is exactly `---` (trailing whitespace ignored).
//! - The body is everything after the closing fence line, untouched.
//!
//! `title` is required and must be a non-empty string. `emoji`, `order` and
//! `description` default to empty/zero when absent or null. Unknown keys are ignored.

use crate::model::SectionMetadata;
use serde::Deserialize;
use serde_yaml::Value;

const FENCE: &str = "---";

#[derive(Deserialize)]
struct RawHeader {
    // Kept untyped so scalars like `123` or `true` are not coerced into a title.
    title: Option<Value>,
    emoji: Option<String>,
    order: Option<i64>,
    description: Option<String>,
}

/// Splits raw file content into `(header, body)`.
///
/// Returns `None` when there is no opening fence on the first line or the
/// header is never closed.
pub fn split_frontmatter(raw: &str) -> Option<(&str, &str)> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = raw.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != FENCE {
        return None;
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if line.trim_end() == FENCE {
            let header = &raw[header_start..offset];
            let body = &raw[offset + line.len()..];
            return Some((header, body));
        }
        offset += line.len();
    }
    None
}

/// Parses the YAML between the fences into [`SectionMetadata`].
///
/// The error string describes what is wrong; callers attach the file path.
pub fn parse_metadata(header: &str) -> Result<SectionMetadata, String> {
    if header.trim().is_empty() {
        return Err("metadata header is empty (missing `title`)".to_string());
    }

    let raw: RawHeader =
        serde_yaml::from_str(header).map_err(|e| format!("unparsable metadata header: {}", e))?;

    let title = match raw.title {
        Some(Value::String(t)) if !t.trim().is_empty() => t,
        Some(Value::String(_)) => return Err("`title` is empty".to_string()),
        None | Some(Value::Null) => return Err("missing required field `title`".to_string()),
        Some(_) => return Err("`title` must be a string".to_string()),
    };

    Ok(SectionMetadata {
        title,
        emoji: raw.emoji.unwrap_or_default(),
        order: raw.order.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
    })
}

/// Splits and parses a whole section file.
pub fn parse_section(raw: &str) -> Result<(SectionMetadata, String), String> {
    let (header, body) =
        split_frontmatter(raw).ok_or_else(|| "no metadata header found".to_string())?;
    let metadata = parse_metadata(header)?;
    Ok((metadata, body.to_string()))
}
