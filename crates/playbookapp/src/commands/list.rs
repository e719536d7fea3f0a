use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CollectionId;
use crate::store::ContentStore;

pub fn collections<S: ContentStore>(store: &S) -> Result<CmdResult> {
    let collections = store.list_collection_ids()?;
    let mut result = CmdResult::default();
    if collections.is_empty() {
        result.add_message(CmdMessage::info("No collections found."));
    }
    Ok(result.with_collections(collections))
}

pub fn sections<S: ContentStore>(store: &S, collection: &CollectionId) -> Result<CmdResult> {
    let sections = store.list_section_ids(collection)?;
    let mut result = CmdResult::default();
    if sections.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No sections in collection {}.",
            collection
        )));
    }
    Ok(result.with_sections(sections))
}
