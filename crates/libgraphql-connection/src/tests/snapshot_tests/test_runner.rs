use super::snapshot_test_case::SnapshotExpectation;
use super::snapshot_test_case::SnapshotTestCase;
use crate::ConnectionTransformer;
use crate::TransformedSchema;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug)]
pub struct SnapshotTestResult {
    pub error_message: Option<String>,
    pub file_path: PathBuf,
    pub passed: bool,
    pub test_name: String,
}
impl SnapshotTestResult {
    fn pass(test_case: &SnapshotTestCase) -> Self {
        Self {
            error_message: None,
            file_path: test_case.schema_paths[0].clone(),
            passed: true,
            test_name: test_case.name.to_string(),
        }
    }

    fn fail(test_case: &SnapshotTestCase, file_path: &Path, message: String) -> Self {
        Self {
            error_message: Some(message),
            file_path: file_path.to_path_buf(),
            passed: false,
            test_name: test_case.name.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SnapshotTestResults {
    pub results: Vec<SnapshotTestResult>,
}
impl SnapshotTestResults {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn failure_report(&self) -> String {
        let failures: Vec<_> = self.results.iter().filter(|r| !r.passed).collect();
        let failures_len = failures.len();
        let results_len = self.results.len();
        let failures_text = failures.iter()
            .map(|r| format_failure(r))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{failures_len} of {results_len} snapshot tests failed:\n\n{failures_text}")
    }

    pub fn summary(&self) -> String {
        let total = self.results.len();
        let failed = self.results.iter().filter(|r| !r.passed).count();
        let passed = total - failed;
        let banner = "========================================";

        if failed == 0 {
            format!("{banner}\nSNAPSHOT TEST SUMMARY\n{banner}\nTotal tests: {total}\nPassed: {passed}\nFailed: 0\n{banner}")
        } else {
            let failed_list = self.results.iter()
                .filter(|r| !r.passed)
                .map(|r| format!("  - {}", r.test_name))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{banner}\nSNAPSHOT TEST SUMMARY\n{banner}\nTotal tests: {total}\nPassed: {passed}\nFailed: {failed}\n\nFailed snapshot tests:\n{failed_list}\n{banner}")
        }
    }
}

fn format_failure(result: &SnapshotTestResult) -> String {
    let test_name = &result.test_name;
    let file_path = result.file_path.display();
    let message = result.error_message.as_deref().unwrap_or("error");
    format!("FAILED: {test_name}\n   File: {file_path}\n   {message}")
}

/// Runs every discovered case, in parallel, reporting results in case-name
/// order.
pub fn run_snapshot_tests(fixtures_dir: &Path) -> SnapshotTestResults {
    let test_cases = SnapshotTestCase::discover_all(fixtures_dir);
    let results = test_cases.par_iter()
        .map(run_test_case)
        .collect();

    SnapshotTestResults { results }
}

fn run_test_case(test_case: &SnapshotTestCase) -> SnapshotTestResult {
    let result = test_case.schema_paths.iter()
        .try_fold(
            ConnectionTransformer::new(test_case.config.clone()),
            |transformer, schema_path| transformer.load_file(schema_path),
        )
        .and_then(|transformer| transformer.transform());

    match (&test_case.expectation, result) {
        (SnapshotExpectation::Output(expected_path), Ok(transformed)) =>
            check_output(test_case, expected_path, &transformed),

        (SnapshotExpectation::Output(_), Err(err)) => SnapshotTestResult::fail(
            test_case,
            &test_case.schema_paths[0],
            format!("Expected: successful transform\nGot: {err}"),
        ),

        (SnapshotExpectation::Errors(_), Ok(_)) => SnapshotTestResult::fail(
            test_case,
            &test_case.schema_paths[0],
            "Expected: transform failure\nGot: transformed successfully (false negative!)"
                .to_string(),
        ),

        (SnapshotExpectation::Errors(patterns), Err(err)) => {
            let error_str = err.to_string();
            let unmatched: Vec<_> = patterns.iter()
                .filter(|pattern| !error_str.contains(pattern.as_str()))
                .map(|pattern| format!("  x {pattern}"))
                .collect();

            if patterns.is_empty() || !unmatched.is_empty() {
                SnapshotTestResult::fail(
                    test_case,
                    &test_case.schema_paths[0],
                    format!(
                        "Expected: every EXPECTED_ERROR pattern to match\n\
                        Unmatched patterns:\n{}\n\nActual error:\n{error_str}",
                        unmatched.join("\n"),
                    ),
                )
            } else {
                SnapshotTestResult::pass(test_case)
            }
        },
    }
}

fn check_output(
    test_case: &SnapshotTestCase,
    expected_path: &Path,
    transformed: &TransformedSchema,
) -> SnapshotTestResult {
    let expected_sdl = match fs::read_to_string(expected_path) {
        Ok(content) => content,
        Err(err) => return SnapshotTestResult::fail(
            test_case,
            expected_path,
            format!("Could not read the expected output: {err}"),
        ),
    };

    let expected = match graphql_parser::schema::parse_schema::<String>(&expected_sdl) {
        Ok(doc) => doc.to_string(),
        Err(err) => return SnapshotTestResult::fail(
            test_case,
            expected_path,
            format!("Could not parse the expected output: {err}"),
        ),
    };

    let actual = transformed.to_sdl();
    if actual == expected {
        SnapshotTestResult::pass(test_case)
    } else {
        SnapshotTestResult::fail(
            test_case,
            expected_path,
            format!("Output differs from the expected schema.\n\nExpected:\n{expected}\nActual:\n{actual}"),
        )
    }
}
