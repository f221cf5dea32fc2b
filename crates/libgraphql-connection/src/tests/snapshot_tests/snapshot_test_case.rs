use super::utils;
use crate::CacheHintConfig;
use crate::ConnectionConfig;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// What a snapshot case expects the transform to do.
#[derive(Clone, Debug)]
pub enum SnapshotExpectation {
    /// Succeed and print exactly the SDL in this file.
    Output(PathBuf),

    /// Fail with an error whose message contains every one of these
    /// substrings.
    Errors(Vec<String>),
}

#[derive(Clone, Debug)]
pub struct SnapshotTestCase {
    pub config: ConnectionConfig,
    pub expectation: SnapshotExpectation,
    pub name: String,
    pub schema_paths: Vec<PathBuf>,
}

impl SnapshotTestCase {
    pub fn discover_all(fixtures_dir: &Path) -> Vec<Self> {
        let mut cases = Self::discover_transforms(&fixtures_dir.join("transforms"));
        cases.extend(Self::discover_invalid_schemas(&fixtures_dir.join("invalid_schemas")));
        cases.sort_by(|a, b| a.name.cmp(&b.name));
        cases
    }

    fn discover_transforms(transforms_dir: &Path) -> Vec<Self> {
        let Ok(entries) = fs::read_dir(transforms_dir) else {
            return Vec::new();
        };

        entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if !path.is_dir() {
                    eprintln!("ERROR: Unexpected file in transforms/: {}", path.display());
                    eprintln!("       Each case must be a directory with schema.graphql and expected.graphql.");
                    return None;
                }

                let name = path.file_name()?.to_str()?.to_string();
                let schema_paths = Self::discover_schema_files(&path);
                if schema_paths.is_empty() {
                    eprintln!("ERROR: No schema files found in {}", path.display());
                    return None;
                }

                Some(Self {
                    config: Self::parse_config(&schema_paths),
                    expectation: SnapshotExpectation::Output(path.join("expected.graphql")),
                    name,
                    schema_paths,
                })
            })
            .collect()
    }

    fn discover_invalid_schemas(invalid_schemas_dir: &Path) -> Vec<Self> {
        let Ok(entries) = fs::read_dir(invalid_schemas_dir) else {
            return Vec::new();
        };

        entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if !path.is_file() || !utils::extension_matches_ignore_case(&path, "graphql") {
                    return None;
                }

                let name = format!("invalid/{}", path.file_stem()?.to_str()?);
                let content = fs::read_to_string(&path).ok()?;
                let expected_errors = utils::comment_directive_values(&content, "EXPECTED_ERROR")
                    .into_iter()
                    .map(|pattern| pattern.to_string())
                    .collect();
                let schema_paths = vec![path];

                Some(Self {
                    config: Self::parse_config(&schema_paths),
                    expectation: SnapshotExpectation::Errors(expected_errors),
                    name,
                    schema_paths,
                })
            })
            .collect()
    }

    /// `schema.graphql` first, then every `*.schema.graphql` in name order.
    fn discover_schema_files(dir: &Path) -> Vec<PathBuf> {
        let mut schema_files = Vec::new();

        let single_schema = dir.join("schema.graphql");
        if single_schema.is_file() {
            schema_files.push(single_schema);
        }

        let mut extra_files: Vec<PathBuf> = fs::read_dir(dir)
            .into_iter()
            .flatten()
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| name.ends_with(".schema.graphql"))
            })
            .collect();
        extra_files.sort();

        schema_files.extend(extra_files);
        schema_files
    }

    fn parse_config(schema_paths: &[PathBuf]) -> ConnectionConfig {
        let mut config = ConnectionConfig::default();
        for schema_path in schema_paths {
            let Ok(content) = fs::read_to_string(schema_path) else {
                continue;
            };
            if let Some(directive_name) = utils::comment_directive_values(&content, "DIRECTIVE_NAME").first() {
                config = config.with_directive_name(*directive_name);
            }
            if utils::has_comment_flag(&content, "CACHE_HINTS") {
                config = config.with_cache_hints(CacheHintConfig::default());
            }
        }
        config
    }
}
