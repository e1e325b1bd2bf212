//! Test helpers for writing answer and rule fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Write `contents` to `path`, failing the test on error.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).expect("write fixture file");
}

/// Create a temporary workspace with a UTF-8 root path.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Interest answers scoring 86 on their own.
pub(super) const STRONG_INTEREST: &str = r#"[
    {"questionId": "interest_1", "answer": 6, "category": "psychometric", "subcategory": "interest"},
    {"questionId": "interest_2", "answer": 7, "category": "psychometric", "subcategory": "interest"},
    {"questionId": "interest_3", "answer": 5, "category": "psychometric", "subcategory": "interest"}
]"#;
