use super::*;
use crate::parser::{parse_structure, Entry};
use std::collections::BTreeSet;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Every path under `root` as `(relative path, is_dir)`
fn list_tree(root: &Path) -> BTreeSet<(String, bool)> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let rel = e
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            (rel, e.file_type().is_dir())
        })
        .collect()
}

fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::dir("project"),
        Entry::dir("project/src"),
        Entry::file("project/src/main.py"),
        Entry::file("project/README.md"),
    ]
}

#[test]
fn test_creates_directories_and_files() {
    let tmp = TempDir::new().unwrap();
    let report = Materializer::new(tmp.path())
        .materialize(&sample_entries())
        .unwrap();

    assert_eq!(report.len(), 4);
    assert_eq!(report.count(Outcome::DirectoryCreated), 2);
    assert_eq!(report.count(Outcome::FileCreated), 2);
    assert!(tmp.path().join("project/src").is_dir());

    let main = tmp.path().join("project/src/main.py");
    assert!(main.is_file());
    assert_eq!(fs::metadata(main).unwrap().len(), 0);
}

#[test]
fn test_round_trip_reproduces_parsed_tree() {
    let lines = [
        "project/",
        "    src/",
        "        main.py",
        "        utils/",
        "            helpers.py",
        "    docs",
        "    README.md",
    ];
    let outcome = parse_structure(&lines).unwrap();

    let tmp = TempDir::new().unwrap();
    Materializer::new(tmp.path())
        .materialize(&outcome.entries)
        .unwrap();

    let expected: BTreeSet<(String, bool)> = outcome
        .entries
        .iter()
        .map(|e| (e.path.clone(), e.is_dir))
        .collect();
    assert_eq!(list_tree(tmp.path()), expected);
}

#[test]
fn test_second_run_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let materializer = Materializer::new(tmp.path());
    materializer.materialize(&sample_entries()).unwrap();

    let report = materializer.materialize(&sample_entries()).unwrap();
    assert_eq!(report.count(Outcome::DirectoryExisted), 2);
    assert_eq!(report.count(Outcome::FileSkipped), 2);
    assert_eq!(report.created(), 0);
}

#[test]
fn test_existing_file_is_not_overwritten() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("notes.txt");
    fs::write(&target, "keep me").unwrap();

    let report = Materializer::new(tmp.path())
        .materialize(&[Entry::file("notes.txt")])
        .unwrap();

    assert_eq!(report.records[0].outcome, Outcome::FileSkipped);
    assert_eq!(fs::read_to_string(target).unwrap(), "keep me");
}

#[test]
fn test_file_creates_missing_parents() {
    let tmp = TempDir::new().unwrap();
    Materializer::new(tmp.path())
        .materialize(&[Entry::file("a/b/c.txt")])
        .unwrap();
    assert!(tmp.path().join("a/b").is_dir());
    assert!(tmp.path().join("a/b/c.txt").is_file());
}

#[test]
fn test_duplicate_directory_entries_are_tolerated() {
    let tmp = TempDir::new().unwrap();
    let entries = vec![Entry::dir("src"), Entry::dir("src"), Entry::file("src/lib.rs")];
    let report = Materializer::new(tmp.path()).materialize(&entries).unwrap();

    assert_eq!(report.records[0].outcome, Outcome::DirectoryCreated);
    assert_eq!(report.records[1].outcome, Outcome::DirectoryExisted);
    assert_eq!(report.records[2].outcome, Outcome::FileCreated);
}

#[test]
fn test_directory_blocked_by_file_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("src"), "").unwrap();

    let err = Materializer::new(tmp.path())
        .materialize(&[Entry::dir("src"), Entry::file("other.txt")])
        .unwrap_err();

    assert!(matches!(err, MaterializeError::FilesystemFailure { .. }));
    // Aborted before the second entry
    assert!(!tmp.path().join("other.txt").exists());
}

#[test]
fn test_file_blocked_by_directory_fails() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("data.json")).unwrap();

    let err = Materializer::new(tmp.path())
        .materialize(&[Entry::file("data.json")])
        .unwrap_err();
    assert!(matches!(err, MaterializeError::FilesystemFailure { .. }));
}

#[test]
fn test_plan_file_blocked_by_directory_fails() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("data.json")).unwrap();
    let materializer = Materializer::new(tmp.path());
    let entries = [Entry::file("data.json")];

    let planned = materializer.plan(&entries).unwrap_err();
    assert!(matches!(planned, MaterializeError::FilesystemFailure { .. }));
    // The real run agrees with the plan
    assert!(materializer.materialize(&entries).is_err());
}

#[test]
fn test_plan_directory_blocked_by_file_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("src"), "").unwrap();
    let materializer = Materializer::new(tmp.path());
    let entries = [Entry::dir("src"), Entry::file("other.txt")];

    let planned = materializer.plan(&entries).unwrap_err();
    assert!(matches!(planned, MaterializeError::FilesystemFailure { .. }));
    assert!(materializer.materialize(&entries).is_err());
}

#[test]
fn test_plan_conflicting_entries_fail() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("out");
    let materializer = Materializer::new(&base);

    let err = materializer
        .plan(&[Entry::file("notes"), Entry::dir("notes")])
        .unwrap_err();
    assert!(matches!(err, MaterializeError::FilesystemFailure { .. }));
    assert!(!base.exists());

    let report = materializer
        .plan(&[Entry::dir("notes"), Entry::dir("notes")])
        .unwrap();
    assert_eq!(report.count(Outcome::DirectoryCreated), 1);
    assert_eq!(report.count(Outcome::DirectoryExisted), 1);
}

#[test]
fn test_unsafe_path_rejected_before_io() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("out");

    let err = Materializer::new(&base)
        .materialize(&[Entry::file("../escape.txt")])
        .unwrap_err();

    assert!(matches!(err, MaterializeError::UnsafePath(_)));
    assert!(!tmp.path().join("escape.txt").exists());
}

#[test]
fn test_plan_touches_nothing() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("planned");
    let report = Materializer::new(&base).plan(&sample_entries()).unwrap();

    assert_eq!(report.count(Outcome::DirectoryCreated), 2);
    assert_eq!(report.count(Outcome::FileCreated), 2);
    assert!(!base.exists());
}

#[test]
fn test_plan_reports_existing_entries() {
    let tmp = TempDir::new().unwrap();
    let materializer = Materializer::new(tmp.path());
    materializer.materialize(&sample_entries()).unwrap();

    let report = materializer.plan(&sample_entries()).unwrap();
    assert_eq!(report.count(Outcome::DirectoryExisted), 2);
    assert_eq!(report.count(Outcome::FileSkipped), 2);
}
