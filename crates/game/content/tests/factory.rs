use std::fs;
use std::path::{Path, PathBuf};

use feud_content::{ContentFactory, LoadError};
use feud_core::{PromptId, ScorePolicy};

fn bundled_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn write(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn bundled_content_loads_completely() {
    let factory = ContentFactory::new(bundled_data());

    let store = factory.load_prompt_store().unwrap();
    let names: Vec<_> = store.lists().iter().map(|list| list.name()).collect();
    assert_eq!(names, vec!["classic", "spicy"]);
    assert_eq!(store.len(), 12);
    assert_eq!(
        store.get_by_id(PromptId(0)).unwrap().text(),
        "Name something you bring to the beach"
    );

    let config = factory.load_config().unwrap();
    assert_eq!(config.game.score_policy, ScorePolicy::ResetOnStart);

    let manifest = factory.load_audio_manifest().unwrap();
    assert!(manifest.missing_cues().is_empty());
}

#[test]
fn ids_run_across_lists_in_file_name_order() {
    let dir = tempfile::tempdir().unwrap();
    let header = "Prompt,Answer 1,Answer 2,Answer 3,Answer 4\n";
    write(dir.path(), "prompts/b_second.csv", &format!("{header}B0,1,2,3,4\n"));
    write(
        dir.path(),
        "prompts/a_first.csv",
        &format!("{header}A0,1,2,3,4\nA1,1,2,3,4\n"),
    );
    write(dir.path(), "prompts/notes.txt", "not a prompt list");

    let store = ContentFactory::new(dir.path()).load_prompt_store().unwrap();
    let texts: Vec<_> = store.iter().map(|prompt| prompt.text()).collect();
    assert_eq!(texts, vec!["A0", "A1", "B0"]);
    assert_eq!(store.list_of(PromptId(2)).unwrap().name(), "b_second");
}

#[test]
fn empty_prompt_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("prompts")).unwrap();
    let err = ContentFactory::new(dir.path())
        .load_prompt_store()
        .unwrap_err();
    assert!(matches!(err, LoadError::EmptySource { .. }));
}

#[test]
fn missing_prompt_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ContentFactory::new(dir.path())
        .load_prompt_store()
        .unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn one_bad_file_fails_the_whole_store() {
    let dir = tempfile::tempdir().unwrap();
    let header = "Prompt,Answer 1,Answer 2,Answer 3,Answer 4\n";
    write(dir.path(), "prompts/good.csv", &format!("{header}Q,1,2,3,4\n"));
    write(dir.path(), "prompts/worse.csv", "Question,A,B,C,D\nQ,1,2,3,4\n");

    let err = ContentFactory::new(dir.path())
        .load_prompt_store()
        .unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn { column: "Prompt", .. }));
}
