//! File-based snapshot tests for the connection transform.
//!
//! `fixtures/transforms/` holds one directory per case: a `schema.graphql`
//! (plus any `*.schema.graphql` siblings, loaded in name order) and an
//! `expected.graphql` with the exact SDL the transform should print.
//! `fixtures/invalid_schemas/` holds single-file cases that must fail, with
//! one `# EXPECTED_ERROR: <substring>` comment per expected error message.
//!
//! Schema files may also carry `# DIRECTIVE_NAME: <name>` and
//! `# CACHE_HINTS` comments to adjust the transform's configuration.

mod snapshot_test_case;
mod test_runner;
mod utils;

#[test]
fn verify_transform_snapshot_tests() {
    let fixtures_dir = utils::get_fixtures_dir();
    let results = test_runner::run_snapshot_tests(fixtures_dir);

    if results.all_passed() {
        println!("{}", results.summary());
    } else {
        eprintln!("{}", results.failure_report());
        eprintln!("\n{}", results.summary());
    }

    assert!(
        results.all_passed(),
        "Transform snapshot tests failed:\n{}",
        results.failure_report(),
    );
}
