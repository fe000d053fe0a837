//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::io::Write;

use fixit_api::{AppConfig, AppState, IssueDocument};

pub const SAMPLE_ISSUES: &str = r#"[{"id": 1, "title": "Broken sink"}]"#;

/// Write `contents` to a temp file that lives as long as the returned handle.
pub fn write_issues(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Application state backed by `contents`, with the given config.
pub fn state_with(contents: &str, config: AppConfig) -> AppState {
    let file = write_issues(contents);
    let issues = IssueDocument::load(file.path()).unwrap();
    AppState::new(config, issues)
}

pub fn sample_state() -> AppState {
    state_with(SAMPLE_ISSUES, AppConfig::default())
}
