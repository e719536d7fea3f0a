use crate::commands::CmdResult;
use crate::error::{PlaybookError, Result};
use crate::model::{CollectionId, SectionDocument, SectionId};
use crate::store::ContentStore;

/// Load a section, turning absence into [`PlaybookError::SectionNotFound`].
pub fn load<S: ContentStore>(
    store: &S,
    collection: &CollectionId,
    section: &SectionId,
) -> Result<SectionDocument> {
    store
        .load_section(collection, section)?
        .ok_or_else(|| PlaybookError::SectionNotFound {
            collection: collection.to_string(),
            section: section.to_string(),
        })
}

pub fn run<S: ContentStore>(
    store: &S,
    collection: &CollectionId,
    section: &SectionId,
) -> Result<CmdResult> {
    let doc = load(store, collection, section)?;
    Ok(CmdResult::default().with_document(doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::catalog::Catalog;

    #[test]
    fn test_show() {
        let catalog = Catalog::new_mem();
        catalog.backend().add_file(
            "ai-marketing",
            "governance.mdx",
            "---\ntitle: Governance\ndescription: Guardrails\n---\nRules.\n",
        );

        let result = run(&catalog, &"ai-marketing".into(), &"governance".into()).unwrap();
        let doc = result.document.unwrap();
        assert_eq!(doc.metadata.title, "Governance");
        assert_eq!(doc.metadata.description, "Guardrails");
        assert_eq!(doc.body, "Rules.\n");
    }

    #[test]
    fn test_missing_is_not_found() {
        let catalog = Catalog::new_mem();
        let err = run(&catalog, &"ai-marketing".into(), &"nope".into()).unwrap_err();
        assert!(matches!(
            err,
            PlaybookError::SectionNotFound { ref collection, ref section }
                if collection == "ai-marketing" && section == "nope"
        ));
        assert_eq!(err.to_string(), "Section not found: ai-marketing/nope");
    }
}
