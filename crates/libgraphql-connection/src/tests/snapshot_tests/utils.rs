use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

pub fn get_fixtures_dir() -> &'static Path {
    static FIXTURES_DIR: OnceLock<PathBuf> = OnceLock::new();
    FIXTURES_DIR.get_or_init(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/tests/snapshot_tests/fixtures")
    })
}

pub fn extension_matches_ignore_case(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Values of every `# {key}: value` comment line in `content`.
pub fn comment_directive_values<'a>(content: &'a str, key: &str) -> Vec<&'a str> {
    content.lines()
        .filter_map(|line| line.trim_start().strip_prefix('#'))
        .filter_map(|comment| comment.trim_start().strip_prefix(key))
        .filter_map(|rest| rest.strip_prefix(':'))
        .map(|value| value.trim())
        .collect()
}

pub fn has_comment_flag(content: &str, flag: &str) -> bool {
    content.lines()
        .filter_map(|line| line.trim_start().strip_prefix('#'))
        .any(|comment| comment.trim() == flag)
}
