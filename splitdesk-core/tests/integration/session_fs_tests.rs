//! Sessions backed by real files and on-disk settings

use std::path::Path;
use std::sync::Arc;

use splitdesk_core::workspace::PaneNode;
use splitdesk_core::{
    AlwaysConfirm, EditorSession, EditorSettings, FsContentProvider, NeverConfirm,
    SettingsManager, SplitDirection,
};
use tempfile::TempDir;

/// Creates a small project tree and returns its root
fn create_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("src")).unwrap();
    std::fs::write(dir.path().join("src/main.rs"), "fn main() {\n    run();\n}\n").unwrap();
    std::fs::write(dir.path().join("src/lib.rs"), "pub fn run() {}\n").unwrap();
    std::fs::write(dir.path().join("README.md"), "# Demo\n\nA project.\n").unwrap();
    dir
}

fn fs_session(root: &Path, settings: EditorSettings) -> EditorSession {
    EditorSession::with_settings(
        settings,
        Arc::new(FsContentProvider::with_root(root)),
        AlwaysConfirm,
    )
}

#[tokio::test]
async fn open_reads_file_content_and_infers_language() {
    let project = create_project();
    let mut session = fs_session(project.path(), EditorSettings::default());

    let main = session.open_tab("src/main.rs").await;
    let readme = session.open_tab("README.md").await;

    let tab = session.tab(main).unwrap();
    assert_eq!(tab.name, "main.rs");
    assert_eq!(tab.language, "rust");
    assert!(tab.content.starts_with("fn main()"));
    assert_eq!(tab.preview, "fn main() {");
    assert!(!tab.is_unsaved);

    assert_eq!(session.tab(readme).unwrap().language, "markdown");
    assert_eq!(session.active_tab(), Some(readme));
}

#[tokio::test]
async fn missing_file_opens_as_empty_tab() {
    let project = create_project();
    let mut session = fs_session(project.path(), EditorSettings::default());

    let id = session.open_tab("src/new_module.rs").await;
    let tab = session.tab(id).unwrap();
    assert!(tab.content.is_empty());
    assert!(tab.preview.is_empty());
    assert_eq!(session.active_tab(), Some(id));
}

#[tokio::test]
async fn binary_file_opens_empty_instead_of_failing() {
    let project = create_project();
    std::fs::write(project.path().join("logo.png"), [0x89, 0x50, 0xff, 0xfe, 0x00]).unwrap();
    let mut session = fs_session(project.path(), EditorSettings::default());

    let id = session.open_tab("logo.png").await;
    assert!(session.tab(id).unwrap().content.is_empty());
    assert_eq!(session.tab_count(), 1);
}

#[tokio::test]
async fn editing_never_writes_through_provider() {
    let project = create_project();
    let mut session = fs_session(project.path(), EditorSettings::default());

    let id = session.open_tab("src/lib.rs").await;
    assert!(session.update_tab_content(id, "pub fn run() { todo() }\n", true));

    let on_disk = std::fs::read_to_string(project.path().join("src/lib.rs")).unwrap();
    assert_eq!(on_disk, "pub fn run() {}\n");
    assert_eq!(session.unsaved_tabs(), vec![id]);
}

#[tokio::test]
async fn caller_saves_through_provider_then_marks_saved() {
    let project = create_project();
    let mut session = fs_session(project.path(), EditorSettings::default());

    let id = session.open_tab("src/lib.rs").await;
    session.update_tab_content(id, "pub fn run() -> u8 { 1 }\n", true);

    let tab = session.tab(id).unwrap();
    let (path, content) = (tab.path.clone(), tab.content.clone());
    session
        .content_provider()
        .set_content(&path, &content)
        .await
        .unwrap();
    assert!(session.mark_saved(id));

    assert!(session.unsaved_tabs().is_empty());
    let on_disk = std::fs::read_to_string(project.path().join("src/lib.rs")).unwrap();
    assert_eq!(on_disk, content);
}

#[tokio::test]
async fn settings_from_disk_shape_the_session() {
    let project = create_project();
    let config = TempDir::new().unwrap();
    let manager = SettingsManager::with_config_dir(config.path().to_path_buf());

    let mut settings = EditorSettings {
        max_panes: 2,
        preview_max_chars: 4,
        default_language: "text".to_owned(),
        ..EditorSettings::default()
    };
    settings.languages.insert("md".to_owned(), "commonmark".to_owned());
    manager.save_settings(&settings).unwrap();

    let loaded = manager.load_settings().unwrap();
    assert_eq!(loaded, settings);
    let mut session = fs_session(project.path(), loaded);

    let readme = session.open_tab("README.md").await;
    let other = session.open_tab("notes.unknown").await;
    assert_eq!(session.tab(readme).unwrap().language, "commonmark");
    assert_eq!(session.tab(readme).unwrap().preview, "# De");
    assert_eq!(session.tab(other).unwrap().language, "text");

    let pane = session.active_pane().unwrap();
    session.split_pane(pane, SplitDirection::Vertical).unwrap();
    let pane = session.active_pane().unwrap();
    assert!(session.split_pane(pane, SplitDirection::Horizontal).is_err());
    assert_eq!(session.count_panes(), 2);
}

#[tokio::test]
async fn split_workflow_over_real_files() {
    let project = create_project();
    let mut session = fs_session(project.path(), EditorSettings::default());

    let main = session.open_tab("src/main.rs").await;
    let lib = session.open_tab("src/lib.rs").await;
    let readme = session.open_tab("README.md").await;

    // readme is active in the only pane; splitting promotes it
    let first = session.active_pane().unwrap();
    let outcome = session.split_pane(first, SplitDirection::Vertical).unwrap();
    assert_eq!(outcome.promoted, Some(readme));
    assert_eq!(session.pane_of_tab(readme), Some(outcome.new_leaf_id));
    assert_eq!(session.active_pane(), Some(outcome.new_leaf_id));

    // the remaining tabs stay behind without an active tab
    let left = session.get_pane_by_id(first).and_then(PaneNode::as_leaf).unwrap();
    assert_eq!(left.tabs, vec![main, lib]);
    assert_eq!(left.active_tab, None);

    // move main next to the readme, then close the now-smaller left pane
    session.move_tab_to_pane(main, outcome.new_leaf_id).unwrap();
    assert_eq!(session.get_tabs_by_pane(outcome.new_leaf_id).len(), 2);
    assert!(session.close_pane(first).is_closed());

    assert_eq!(session.count_panes(), 1);
    assert!(session.tab(lib).is_none());
    assert_eq!(session.active_tab(), Some(main));
    assert_eq!(session.tab_count(), 2);
}

#[tokio::test]
async fn declined_gate_protects_unsaved_file() {
    let project = create_project();
    let mut session = EditorSession::new(
        Arc::new(FsContentProvider::with_root(project.path())),
        NeverConfirm,
    );

    let id = session.open_tab("src/main.rs").await;
    session.update_tab_content(id, "fn main() { changed() }\n", true);

    assert!(!session.close_tab(id).is_closed());
    assert!(!session.close_all_tabs().is_closed());
    assert_eq!(session.tab_count(), 1);

    session.set_confirmation_gate(AlwaysConfirm);
    assert!(session.close_all_tabs().is_closed());
    assert_eq!(session.tab_count(), 0);
    assert!(session.split_view().is_none());
}

#[tokio::test]
async fn snapshot_round_trips_through_json() {
    let project = create_project();
    let mut session = fs_session(project.path(), EditorSettings::default());

    session.open_tab("src/main.rs").await;
    let lib = session.open_tab("src/lib.rs").await;
    let pane = session.active_pane().unwrap();
    session.split_pane(pane, SplitDirection::Horizontal).unwrap();
    let group = session.create_group("Rust");
    session.add_tab_to_group(group, lib);

    let snapshot = session.snapshot();
    let json = snapshot.to_json().unwrap();
    assert!(json.contains("\"kind\": \"split\""));
    let restored: splitdesk_core::EditorSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, snapshot);
    assert_eq!(restored.pane_count(), 2);
    assert_eq!(restored.tab(lib).unwrap().name, "lib.rs");
}
