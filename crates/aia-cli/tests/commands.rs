//! Subcommands against a temporary repository root.

use std::fs;

use aia_cli::commands::{run_generate, run_inspect, run_package};
use aia_cli::summary::archive_table;
use aia_package::{MaterializeOptions, PackageError, ProjectLayout};
use tempfile::TempDir;

const UNCHECKED: MaterializeOptions = MaterializeOptions {
    check_conflicts: false,
};

#[test]
fn generate_then_inspect_reports_every_member() {
    let dir = TempDir::new().expect("temp dir");
    let layout = ProjectLayout::new(dir.path());

    let outcome = run_generate(&layout, UNCHECKED).expect("generate");
    assert_eq!(outcome.written.len(), 4);

    let report = run_inspect(&layout.aia_path()).expect("inspect");
    assert_eq!(report.entries, outcome.archive.entries);
    assert!(report.entries.iter().all(|entry| entry.sha256.len() == 64));
}

#[test]
fn package_after_generate_reproduces_the_archive() {
    let dir = TempDir::new().expect("temp dir");
    let layout = ProjectLayout::new(dir.path());
    run_generate(&layout, UNCHECKED).expect("generate");
    let generated = fs::read(layout.aia_path()).expect("archive");

    run_package(&layout, UNCHECKED).expect("package");
    assert_eq!(fs::read(layout.aia_path()).expect("archive"), generated);
}

#[test]
fn package_without_sources_is_a_recoverable_error() {
    let dir = TempDir::new().expect("temp dir");
    let layout = ProjectLayout::new(dir.path());

    let error = run_package(&layout, UNCHECKED).expect_err("sources are missing");
    let package_error = error
        .downcast_ref::<PackageError>()
        .expect("package error");
    assert!(package_error.is_user_recoverable());
    assert!(!layout.aia_path().exists());
}

#[test]
fn inspecting_a_missing_archive_names_it() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("nothing.aia");
    let error = run_inspect(&missing).expect_err("archive is missing");
    assert!(format!("{error:#}").contains("nothing.aia"));
}

#[test]
fn summary_table_lists_members_and_total() {
    let dir = TempDir::new().expect("temp dir");
    let layout = ProjectLayout::new(dir.path());
    let outcome = run_generate(&layout, UNCHECKED).expect("generate");

    let rendered = archive_table(&outcome.archive).to_string();
    assert!(rendered.contains("assets/.nomedia"));
    assert!(rendered.contains("TOTAL (4 members)"));
}
