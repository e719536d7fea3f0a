use playbookapp::error::PlaybookError;
use playbookapp::model::{CollectionId, SectionId};
use playbookapp::paths::enumerate_all_paths;
use playbookapp::store::backend::ContentBackend;
use playbookapp::store::catalog::Catalog;
use playbookapp::store::fs_backend::FsBackend;
use playbookapp::store::{ContentStore, FileCatalog};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup() -> (TempDir, FileCatalog) {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::new_fs(dir.path().join("playbooks"));
    (dir, catalog)
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join("playbooks").join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_missing_content_root_lists_nothing() {
    let (_dir, catalog) = setup();
    assert!(catalog.list_collection_ids().unwrap().is_empty());
    assert!(enumerate_all_paths(&catalog).unwrap().is_empty());
}

#[test]
fn test_collections_are_directories_only() {
    let (dir, catalog) = setup();
    write(dir.path(), "ai-marketing/playbook.config.ts", "export default {}");
    fs::create_dir_all(dir.path().join("playbooks/sales")).unwrap();
    write(dir.path(), "README.md", "stray file at the root");

    let ids = catalog.list_collection_ids().unwrap();
    assert_eq!(
        ids,
        vec![CollectionId::new("ai-marketing"), CollectionId::new("sales")]
    );
}

#[test]
fn test_sections_filter_suffix_and_files() {
    let (dir, catalog) = setup();
    write(dir.path(), "ai-marketing/sections/email.mdx", "---\ntitle: Email\n---\n");
    write(dir.path(), "ai-marketing/sections/content.mdx", "---\ntitle: Content\n---\n");
    write(dir.path(), "ai-marketing/sections/notes.md", "---\ntitle: Notes\n---\n");
    fs::create_dir_all(dir.path().join("playbooks/ai-marketing/sections/assets.mdx")).unwrap();

    let ids = catalog.list_section_ids(&"ai-marketing".into()).unwrap();
    assert_eq!(ids, vec![SectionId::new("content"), SectionId::new("email")]);
}

#[test]
fn test_collection_without_sections_dir() {
    let (dir, catalog) = setup();
    fs::create_dir_all(dir.path().join("playbooks/sales")).unwrap();
    assert!(catalog.list_section_ids(&"sales".into()).unwrap().is_empty());
    assert!(catalog.list_section_ids(&"ghost".into()).unwrap().is_empty());
}

#[test]
fn test_custom_sections_dir_and_ext() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "docs/pages/intro.md", "---\ntitle: Intro\n---\nHi\n");
    write(dir.path(), "docs/sections/ignored.mdx", "---\ntitle: No\n---\n");

    let catalog = Catalog::new(FsBackend::new(dir.path().join("playbooks")).with_sections_dir("pages"))
        .with_file_ext(".md");
    let paths = enumerate_all_paths(&catalog).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].route(), "/docs/intro");

    let doc = catalog
        .load_section(&"docs".into(), &"intro".into())
        .unwrap()
        .unwrap();
    assert_eq!(doc.body, "Hi\n");
}

#[test]
fn test_load_section_roundtrip_from_disk() {
    let (dir, catalog) = setup();
    write(
        dir.path(),
        "ai-marketing/sections/email.mdx",
        "---\ntitle: Email & Lifecycle\nemoji: \"📧\"\norder: 5\ndescription: Nurture at scale\n---\n\n# Email\n",
    );

    let doc = catalog
        .load_section(&"ai-marketing".into(), &"email".into())
        .unwrap()
        .unwrap();
    assert_eq!(doc.metadata.title, "Email & Lifecycle");
    assert_eq!(doc.metadata.order, 5);
    assert_eq!(doc.metadata.description, "Nurture at scale");
    assert_eq!(doc.body, "\n# Email\n");
}

#[test]
fn test_load_absent_section_is_none() {
    let (dir, catalog) = setup();
    write(dir.path(), "ai-marketing/sections/email.mdx", "---\ntitle: Email\n---\n");

    assert!(catalog
        .load_section(&"ai-marketing".into(), &"missing".into())
        .unwrap()
        .is_none());
    assert!(catalog
        .load_section(&"nowhere".into(), &"email".into())
        .unwrap()
        .is_none());
}

#[test]
fn test_malformed_metadata_names_the_file() {
    let (dir, catalog) = setup();
    write(dir.path(), "ai-marketing/sections/broken.mdx", "---\nemoji: x\n---\n");

    let err = catalog
        .load_section(&"ai-marketing".into(), &"broken".into())
        .unwrap_err();
    match err {
        PlaybookError::MalformedMetadata { path, .. } => {
            assert_eq!(
                path,
                dir.path().join("playbooks/ai-marketing/sections/broken.mdx")
            );
        }
        other => panic!("expected MalformedMetadata, got {:?}", other),
    }

    // Still a page as far as enumeration is concerned.
    assert_eq!(enumerate_all_paths(&catalog).unwrap().len(), 1);
}

#[test]
fn test_invalid_utf8_is_io_error() {
    let (dir, catalog) = setup();
    let path = dir.path().join("playbooks/ai-marketing/sections/binary.mdx");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, [0xff, 0xfe, 0x00, 0x01]).unwrap();

    assert!(matches!(
        catalog.load_section(&"ai-marketing".into(), &"binary".into()),
        Err(PlaybookError::Io(_))
    ));
}

#[test]
fn test_backend_paths() {
    let backend = FsBackend::new("/site/content".into());
    assert_eq!(
        backend.section_file_path("ai-marketing", "email.mdx"),
        Path::new("/site/content/ai-marketing/sections/email.mdx")
    );
}

#[test]
fn test_collection_that_is_a_file_is_absent() {
    let (dir, catalog) = setup();
    write(dir.path(), "ai-marketing", "not a directory");

    assert!(catalog
        .load_section(&"ai-marketing".into(), &"email".into())
        .unwrap()
        .is_none());
    assert!(catalog
        .list_section_ids(&"ai-marketing".into())
        .unwrap()
        .is_empty());
}

#[cfg(unix)]
#[test]
fn test_sections_symlink_loop_is_io_error() {
    let (dir, catalog) = setup();
    let collection = dir.path().join("playbooks/ai-marketing");
    fs::create_dir_all(&collection).unwrap();
    std::os::unix::fs::symlink("sections", collection.join("sections")).unwrap();

    assert!(matches!(
        catalog.list_section_ids(&"ai-marketing".into()),
        Err(PlaybookError::Io(_))
    ));
    assert!(matches!(
        catalog.load_section(&"ai-marketing".into(), &"email".into()),
        Err(PlaybookError::Io(_))
    ));
}

#[cfg(unix)]
#[test]
fn test_unreadable_collection_is_io_error() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, catalog) = setup();
    write(dir.path(), "locked/sections/email.mdx", "---\ntitle: Email\n---\n");
    let locked = dir.path().join("playbooks/locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users ignore permission bits; nothing to observe then.
    let enforced = fs::metadata(locked.join("sections")).is_err();
    let load = catalog.load_section(&"locked".into(), &"email".into());
    let list = catalog.list_section_ids(&"locked".into());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if enforced {
        assert!(matches!(load, Err(PlaybookError::Io(_))));
        assert!(matches!(list, Err(PlaybookError::Io(_))));
    } else {
        assert!(load.unwrap().is_some());
    }
}
