use crate::error::{PlaybookError, Result};
use crate::model::SearchEntry;
use crate::store::ContentStore;
use once_cell::sync::Lazy;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// The curated table shipped with the AI Marketing playbook.
static CANONICAL: Lazy<Arc<[SearchEntry]>> = Lazy::new(|| {
    const GETTING_STARTED: &str = "/ai-marketing/getting-started";
    const STRATEGIC: &str = "/ai-marketing/strategic-foundations";
    const CONTENT: &str = "/ai-marketing/content";

    let entries = vec![
        // Getting Started
        SearchEntry::new("Getting Started - Welcome & Overview", GETTING_STARTED, "Getting Started"),
        SearchEntry::new("AI Marketing in 2025", GETTING_STARTED, "Getting Started"),
        SearchEntry::new("Maturity Assessment", GETTING_STARTED, "Getting Started"),
        SearchEntry::new("Your First Steps", GETTING_STARTED, "Getting Started"),
        SearchEntry::new("10 Essential Prompts", GETTING_STARTED, "Getting Started"),
        // Strategic Foundations
        SearchEntry::new("Strategic Foundations - Business Case", STRATEGIC, "Strategic Foundations"),
        SearchEntry::new("ROI Framework", STRATEGIC, "Strategic Foundations"),
        SearchEntry::new("Use Case Prioritization", STRATEGIC, "Strategic Foundations"),
        SearchEntry::new("Convincing Stakeholders", STRATEGIC, "Strategic Foundations"),
        SearchEntry::new("Team Organization", STRATEGIC, "Strategic Foundations"),
        // Content & SEO
        SearchEntry::new("Content & SEO - Executive Summary", CONTENT, "Content & SEO"),
        SearchEntry::new("Content Quick Wins", CONTENT, "Content & SEO"),
        SearchEntry::new("Blog Post Generation", CONTENT, "Content & SEO"),
        SearchEntry::new("Product Descriptions", CONTENT, "Content & SEO"),
        SearchEntry::new("SEO Optimization", CONTENT, "Content & SEO"),
        SearchEntry::new("Content Repurposing", CONTENT, "Content & SEO"),
        // One entry per remaining section
        SearchEntry::new("Paid Media", "/ai-marketing/paid-media", "Paid Media"),
        SearchEntry::new("Email & Lifecycle", "/ai-marketing/email", "Email"),
        SearchEntry::new("Creative & Design", "/ai-marketing/creative", "Creative"),
        SearchEntry::new("Analytics & Insights", "/ai-marketing/analytics", "Analytics"),
        SearchEntry::new("Skills & Mastery", "/ai-marketing/skills", "Skills"),
        SearchEntry::new("Governance", "/ai-marketing/governance", "Governance"),
        SearchEntry::new("Resources Hub", "/ai-marketing/resources", "Resources"),
    ];
    entries.into()
});

/// A fixed, ordered, read-only list of search entries.
///
/// Cloning is cheap (the entries are shared), so each matcher or widget can hold
/// its own handle. There is deliberately no way to add or remove entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndex {
    entries: Arc<[SearchEntry]>,
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::canonical()
    }
}

impl SearchIndex {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// The curated table that ships with the site.
    pub fn canonical() -> Self {
        Self {
            entries: Arc::clone(&CANONICAL),
        }
    }

    /// Load a curated table stored as a JSON array of `{title, path, section}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(PlaybookError::Io)?;
        let entries: Vec<SearchEntry> =
            serde_json::from_str(&content).map_err(PlaybookError::Serialization)?;
        debug!(path = %path.display(), entries = entries.len(), "loaded search index");
        Ok(Self::new(entries))
    }

    /// Derive an index from the content store: one entry per section, titled from
    /// its metadata and labelled with its collection.
    ///
    /// Sections that do not load (vanished or malformed) are skipped with a warning;
    /// I/O faults abort.
    pub fn from_catalog<S: ContentStore>(store: &S) -> Result<Self> {
        let mut entries = Vec::new();
        for collection in store.list_collection_ids()? {
            for section in store.list_section_ids(&collection)? {
                match store.load_section(&collection, &section) {
                    Ok(Some(doc)) => entries.push(SearchEntry::new(
                        doc.metadata.title.clone(),
                        doc.route(),
                        collection.as_str(),
                    )),
                    Ok(None) => {}
                    Err(PlaybookError::MalformedMetadata { path, reason }) => {
                        warn!(path = %path.display(), %reason, "section left out of search index");
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::catalog::Catalog;

    #[test]
    fn test_canonical_table() {
        let index = SearchIndex::canonical();
        assert_eq!(index.len(), 23);
        assert_eq!(index.entries()[0].title, "Getting Started - Welcome & Overview");
        assert_eq!(index.entries()[22].path, "/ai-marketing/resources");
    }

    #[test]
    fn test_canonical_is_shared() {
        let a = SearchIndex::canonical();
        let b = SearchIndex::default();
        assert!(Arc::ptr_eq(&a.entries, &b.entries));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        fs::write(
            &path,
            r#"[{"title": "Intro", "path": "/docs/intro", "section": "Docs"}]"#,
        )
        .unwrap();

        let index = SearchIndex::from_json_file(&path).unwrap();
        assert_eq!(
            index.entries(),
            &[SearchEntry::new("Intro", "/docs/intro", "Docs")]
        );
    }

    #[test]
    fn test_from_json_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            SearchIndex::from_json_file(&missing),
            Err(PlaybookError::Io(_))
        ));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{not json").unwrap();
        assert!(matches!(
            SearchIndex::from_json_file(&bad),
            Err(PlaybookError::Serialization(_))
        ));
    }

    #[test]
    fn test_from_catalog() {
        let catalog = Catalog::new_mem();
        catalog
            .backend()
            .add_file("ai-marketing", "email.mdx", "---\ntitle: Email & Lifecycle\n---\n");
        catalog
            .backend()
            .add_file("ai-marketing", "broken.mdx", "no header");

        let index = SearchIndex::from_catalog(&catalog).unwrap();
        assert_eq!(
            index.entries(),
            &[SearchEntry::new(
                "Email & Lifecycle",
                "/ai-marketing/email",
                "ai-marketing"
            )]
        );
    }
}
