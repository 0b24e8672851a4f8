//! Integration tests for the filesystem facade and file finder.

mod common;

use common::Sandbox;
use xhelpers::fs::{self, FileFinder};
use xhelpers::XPath;

#[test]
fn finder_lists_matching_files_in_name_order() {
    let sandbox = Sandbox::new();
    sandbox.write("logs/b.txt", "b");
    sandbox.write("logs/a.txt", "a");
    sandbox.write("logs/c.log", "c");

    let mask = sandbox.join("logs/*.txt");
    let found: Vec<String> = FileFinder::new(mask.as_str())
        .map(|info| info.name().to_string())
        .collect();
    assert_eq!(found, ["a.txt", "b.txt"]);
}

#[test]
fn finder_reports_metadata() {
    let sandbox = Sandbox::new();
    sandbox.write("data/report-01.csv", "1,2,3\n");
    sandbox.write("data/report-02.csv", "4,5\n");

    let mask = sandbox.join("data/report-??.csv");
    let sizes: Vec<u64> = FileFinder::new(mask.as_str()).map(|info| info.size()).collect();
    assert_eq!(sizes, [6, 4]);
}

#[test]
fn folder_and_file_lifecycle() {
    let sandbox = Sandbox::new();
    let folder = sandbox.join("deep/nested/folder/");
    assert!(folder.ensure_folder());
    assert!(fs::is_dir_exist(folder.as_str()));

    let file = sandbox.write("deep/nested/folder/item.txt", "x");
    let copy = sandbox.join("deep/item-copy.txt");
    assert!(file.copy_to(&copy));
    assert!(fs::is_file_exist(copy.as_str()));

    let top = sandbox.join("deep");
    assert!(top.remove());
    assert!(!top.exists());
}

#[test]
fn written_file_has_recent_write_time() {
    let sandbox = Sandbox::new();
    let before = xhelpers::Timestamp::now_with_precision(0) - 5.0;
    let file = sandbox.write("fresh.txt", "now");
    let written = file.file_write_time();
    assert!(written > before, "{written} <= {before}");
}

#[test]
fn copy_of_directory_is_refused() {
    let sandbox = Sandbox::new();
    let dir = sandbox.join("dir/");
    assert!(dir.ensure_folder());
    assert!(!dir.copy_to(&sandbox.join("other")));
}

#[test]
fn relative_path_inside_sandbox() {
    let sandbox = Sandbox::new();
    let mut file = sandbox.write("a/b/c.txt", "");
    let home = sandbox.join("a/x/");
    file.make_relative_path(&home);
    assert_eq!(file.as_str(), "../b/c.txt");
}

#[test]
fn absolute_path_of_absolute_input_is_canonized() {
    let sandbox = Sandbox::new();
    let native = sandbox.path().join("file.txt");
    let text = native.to_string_lossy().into_owned();
    assert_eq!(fs::absolute_path(&text), fs::canonize_path(&text));
    assert!(XPath::from(fs::absolute_path(&text)).is_absolute_path());
}
