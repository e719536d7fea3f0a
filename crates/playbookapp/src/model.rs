//! # Domain Model
//!
//! A playbook site is a two-level tree:
//!
//! ```text
//! content/playbooks/                <-- content root
//! └── ai-marketing/                 <-- CollectionId (one directory)
//!     └── sections/
//!         ├── getting-started.mdx   <-- SectionId "getting-started"
//!         └── email.mdx
//! ```
//!
//! Identifiers are opaque strings taken straight from directory and file names.
//! They are never normalized: `Email` and `email` are different sections.
//!
//! ## Safe Identifiers
//!
//! An identifier arrives from a URL (`/{collection}/{section}`), so it must not be
//! able to escape its directory. [`is_safe_segment`] accepts only names that denote
//! a single directory entry; anything else resolves to "not found".
//!
//! ## Documents
//!
//! A [`SectionDocument`] is assembled on demand from one file: the metadata header
//! becomes [`SectionMetadata`], the rest is the body. Documents are not cached.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// A top-level content grouping ("playbook"), one directory under the content root.
    CollectionId
);

string_id!(
    /// A document inside a collection, unique within that collection only.
    SectionId
);

/// Returns true if `segment` names exactly one directory entry.
pub fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\', '\0'])
}

/// The parsed metadata header of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMetadata {
    pub title: String,
    #[serde(default)]
    pub emoji: String,
    /// Display position for navigation. Not validated beyond being an integer.
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub description: String,
}

impl SectionMetadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            emoji: String::new(),
            order: 0,
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionDocument {
    pub collection: CollectionId,
    pub section: SectionId,
    pub metadata: SectionMetadata,
    /// Raw markup body, everything after the metadata header.
    pub body: String,
}

impl SectionDocument {
    pub fn route(&self) -> String {
        route_for(&self.collection, &self.section)
    }
}

/// One page the static build must produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaticPathEntry {
    pub collection: CollectionId,
    pub section: SectionId,
}

impl StaticPathEntry {
    pub fn new(collection: CollectionId, section: SectionId) -> Self {
        Self {
            collection,
            section,
        }
    }

    /// The site route for this page: `/{collection}/{section}`.
    pub fn route(&self) -> String {
        route_for(&self.collection, &self.section)
    }
}

impl fmt::Display for StaticPathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.route())
    }
}

pub fn route_for(collection: &CollectionId, section: &SectionId) -> String {
    format!("/{}/{}", collection, section)
}

/// A curated, searchable record. Serialized with `section` as the label key,
/// which is the shape of the hand-maintained tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub title: String,
    pub path: String,
    #[serde(rename = "section")]
    pub section_label: String,
}

impl SearchEntry {
    pub fn new(
        title: impl Into<String>,
        path: impl Into<String>,
        section_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            section_label: section_label.into(),
        }
    }
}

/// A sidebar item: a section with just enough metadata to draw a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub section: SectionId,
    pub title: String,
    pub emoji: String,
    pub order: i64,
    pub path: String,
}
