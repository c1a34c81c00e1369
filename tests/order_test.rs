//! Integration tests for `buildorder order`

mod common;

use common::{run_buildorder, stderr, stdout, TestProject};

/// Recipes supplied in reverse dependency order come out sorted
#[test]
fn test_order_reverses_supplied_chain() {
    let project = TestProject::new();
    project.create_recipe("c", "c", &["b"]);
    project.create_recipe("b", "b", &["a"]);
    project.create_recipe("a", "a", &[]);

    let output = run_buildorder(&project, "order", &[]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "a\nb\nc\n");
}

/// A dependency cycle still prints the best-effort order but exits
/// with a failure status
#[test]
fn test_cycle_fails_with_nonzero_status() {
    let project = TestProject::new();
    project.create_recipe("a", "a", &["b"]);
    project.create_recipe("b", "b", &["a"]);

    let output = run_buildorder(&project, "order", &[]);

    assert!(!output.status.success());
    let listed = stdout(&output);
    assert!(listed.contains("a\n"));
    assert!(listed.contains("b\n"));
    assert!(stderr(&output).contains("circular"));
}

/// Version qualifiers on dependencies are ignored for ordering
#[test]
fn test_versioned_dependency_strings_are_matched_by_bare_name() {
    let project = TestProject::new();
    project.create_recipe("app", "app", &["libfoo >=1.2"]);
    project.create_recipe("libfoo", "libfoo", &[]);

    let output = run_buildorder(&project, "order", &[]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "libfoo\napp\n");
}

/// Recipes without a requirements section are listed first
#[test]
fn test_incomplete_recipes_precede_complete_ones() {
    let project = TestProject::new();
    project.create_recipe("app", "app", &["libfoo"]);
    project.create_recipe("libfoo", "libfoo", &[]);
    project.create_incomplete_recipe("zdocs", "zdocs");

    let output = run_buildorder(&project, "order", &[]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "zdocs\nlibfoo\napp\n");
}

/// Duplicate package names abort the run before ordering
#[test]
fn test_duplicate_names_are_fatal() {
    let project = TestProject::new();
    project.create_recipe("first", "samename", &[]);
    project.create_recipe("second", "samename", &[]);

    let output = run_buildorder(&project, "order", &[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Duplicate package name"));
}

/// A missing recipes directory is reported as an error
#[test]
fn test_missing_recipes_directory_is_fatal() {
    let project = TestProject::new();

    let output = run_buildorder(&project, "order", &[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Recipes directory not found"));
}

/// --output writes the report to a file instead of stdout
#[test]
fn test_output_flag_writes_to_file() {
    let project = TestProject::new();
    project.create_recipe("b", "b", &["a"]);
    project.create_recipe("a", "a", &[]);

    let output = run_buildorder(&project, "order", &["--output", "order.txt"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "");
    assert_eq!(project.read_file("order.txt"), "a\nb\n");
}

/// Two runs over the same recipes produce identical output
#[test]
fn test_repeated_runs_are_deterministic() {
    let project = TestProject::new();
    project.create_recipe("d", "d", &["b", "c"]);
    project.create_recipe("c", "c", &["a"]);
    project.create_recipe("b", "b", &["a"]);
    project.create_recipe("a", "a", &[]);

    let first = run_buildorder(&project, "order", &[]);
    let second = run_buildorder(&project, "order", &[]);

    assert!(first.status.success());
    assert_eq!(stdout(&first), stdout(&second));
}
