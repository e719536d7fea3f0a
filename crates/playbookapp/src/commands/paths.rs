use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::paths::enumerate_all_paths;
use crate::store::ContentStore;

pub fn run<S: ContentStore>(store: &S) -> Result<CmdResult> {
    let paths = enumerate_all_paths(store)?;
    let mut result = CmdResult::default();
    if paths.is_empty() {
        result.add_message(CmdMessage::warning(
            "No sections found; the static build would produce no pages.",
        ));
    }
    Ok(result.with_paths(paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::catalog::Catalog;

    #[test]
    fn test_paths() {
        let catalog = Catalog::new_mem();
        catalog.backend().add_file("a", "one.mdx", "---\ntitle: One\n---\n");
        catalog.backend().add_file("b", "two.mdx", "---\ntitle: Two\n---\n");

        let result = run(&catalog).unwrap();
        let routes: Vec<String> = result.paths.iter().map(|p| p.route()).collect();
        assert_eq!(routes, vec!["/a/one", "/b/two"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_empty_warns() {
        let result = run(&Catalog::new_mem()).unwrap();
        assert!(result.paths.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
