#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Writes `files` (relative path, content) under `root`, creating parents.
pub fn write_tree(root: &Path, files: &[(&str, &[u8])]) {
    for (relative, content) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// A template package with a `sprout.json` and a `template/` subtree.
pub fn package(root: &Path, config: &str, files: &[(&str, &[u8])]) -> PathBuf {
    let package = root.join("package");
    fs::create_dir_all(package.join("template")).unwrap();
    fs::write(package.join("sprout.json"), config).unwrap();
    write_tree(&package.join("template"), files);
    package
}

/// Relative paths of every file below `dir`, sorted.
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    files.sort();
    files
}

/// Prints files present in only one of the directories and files whose
/// content differs.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = list_files(actual);
    let expected_files = list_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {actual:?}");
    println!("Expected output: {expected:?}");

    for file in actual_files.iter().filter(|f| !expected_files.contains(f)) {
        println!("  + {file}");
    }
    for file in expected_files.iter().filter(|f| !actual_files.contains(f)) {
        println!("  - {file}");
    }
    for file in actual_files.iter().filter(|f| expected_files.contains(f)) {
        let left = fs::read(actual.join(file)).unwrap();
        let right = fs::read(expected.join(file)).unwrap();
        if left != right {
            println!("  ~ {file}");
            println!("    actual:   {}", String::from_utf8_lossy(&left));
            println!("    expected: {}", String::from_utf8_lossy(&right));
        }
    }
    println!("=== End of Comparison ===\n");
}

pub fn assert_same_tree(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}
