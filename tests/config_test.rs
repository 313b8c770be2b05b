// tests/config_test.rs
use doc_release::config::{load_config, Config, CONFIG_FILE};
use doc_release::DocReleaseError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.project.build_file, "CMakeLists.txt");
    assert_eq!(config.project.placeholder, "%PROJECT_VERSION%");
    assert!(!config.project.fix_revision);
    assert_eq!(config.git.remote, "origin");
    assert_eq!(config.publish.branch, "gh-pages");
    assert_eq!(config.publish.docs_dir, ".github/doxygen/out/html");
    assert_eq!(config.publish.lock_file, PathBuf::from("/tmp/doc_manager.lock"));
    assert_eq!(config.publish.index_file, "versions.md");
}

#[test]
fn test_load_from_explicit_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[project]
build_file = "cmake/Version.cmake"
fix_revision = true

[git]
url_template = "git@github.com:{org}/{repo}.git"

[publish]
branch = "pages"
lock_file = "/var/lock/docs.lock"
prune_snapshots = false
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path()), Path::new(".")).unwrap();
    assert_eq!(config.project.build_file, "cmake/Version.cmake");
    assert!(config.project.fix_revision);
    assert_eq!(
        config.git.repo_url("acme", "widgets"),
        "git@github.com:acme/widgets.git"
    );
    assert_eq!(config.publish.branch, "pages");
    assert_eq!(config.publish.lock_file, PathBuf::from("/var/lock/docs.lock"));
    assert!(!config.publish.prune_snapshots);
    assert_eq!(config.publish.latest_alias, "latest-stable");
}

#[test]
fn test_load_from_project_dir() {
    let project = tempfile::tempdir().unwrap();
    fs::write(
        project.path().join(CONFIG_FILE),
        "[publish]\nindex_file = \"index.md\"\n",
    )
    .unwrap();

    let config = load_config(None, project.path()).unwrap();
    assert_eq!(config.publish.index_file, "index.md");
}

#[test]
fn test_explicit_file_missing() {
    let err = load_config(Some(Path::new("/nonexistent/docrelease.toml")), Path::new("."))
        .unwrap_err();
    assert!(matches!(err, DocReleaseError::NotFound(_)));
}

#[test]
fn test_invalid_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[publish\nbranch = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path()), Path::new(".")).unwrap_err();
    assert!(matches!(err, DocReleaseError::Config(_)));
}

#[test]
fn test_paths_resolve_against_project_dir() {
    let config = Config::default();
    let project = Path::new("/work/widgets");
    assert_eq!(
        config.build_file_path(project),
        PathBuf::from("/work/widgets/CMakeLists.txt")
    );
    assert_eq!(
        config.docs_path(project),
        PathBuf::from("/work/widgets/.github/doxygen/out/html")
    );
}
