/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Create a project with a dependency list and two shaded jars in `repository/`.
fn create_test_project(dir: &Path) {
    fs::write(
        dir.join("dependencies.txt"),
        "The following files have been resolved:\n   org.foo:bar:jar:1.2:compile\n   org.foo:qux:jar:4.0:provided\n",
    )
    .unwrap();

    install_shaded_jar(dir, "platform", "1.0", "org.foo:bar:jar:1.2\norg.foo:qux:jar:4.0\n");
    install_shaded_jar(dir, "tools", "2.0", "org.foo:qux:jar:4.0\n");
}

fn install_shaded_jar(dir: &Path, name: &str, version: &str, list: &str) {
    let jar_dir = dir
        .join("repository/org/acme")
        .join(name)
        .join(version);
    fs::create_dir_all(&jar_dir).unwrap();

    let file = fs::File::create(jar_dir.join(format!("{}-{}.jar", name, version))).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file(
            "META-INF/maven-shade-included-artifacts.list",
            zip::write::SimpleFileOptions::default(),
        )
        .unwrap();
    writer.write_all(list.as_bytes()).unwrap();
    writer.finish().unwrap();
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

const BASE_CONFIG: &str = r#"
dependencies: dependencies.txt
repository: repository
bundles:
  - group_id: org.acme
    artifact_id: platform
    version: "1.0"
"#;

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_runs_configured_bundles() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(&dir.path().join("shade-diff.config.yml"), BASE_CONFIG);

        cargo_bin_cmd!("shade-diff")
            .current_dir(dir.path())
            .assert()
            .code(0)
            .stdout("org.foo:bar:*\n");
    }

    #[test]
    fn test_auto_discovery_applies_format_and_property() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("shade-diff.config.yml"),
            &format!("{}format: properties\nproperty: shade.excludes\n", BASE_CONFIG),
        );

        cargo_bin_cmd!("shade-diff")
            .current_dir(dir.path())
            .assert()
            .code(0)
            .stdout("shade.excludes=org.foo:bar:*\n");
    }

    #[test]
    fn test_auto_discovery_applies_include_scopes() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("shade-diff.config.yml"),
            &format!("{}include_scopes: [compile, provided]\n", BASE_CONFIG),
        );

        cargo_bin_cmd!("shade-diff")
            .current_dir(dir.path())
            .assert()
            .code(0)
            .stdout("org.foo:bar:*,org.foo:qux:*\n");
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, BASE_CONFIG);

        cargo_bin_cmd!("shade-diff")
            .current_dir(dir.path())
            .arg("--config")
            .arg(&config_path)
            .assert()
            .code(0)
            .stdout("org.foo:bar:*\n");
    }

    #[test]
    fn test_explicit_config_missing_file() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("shade-diff")
            .current_dir(dir.path())
            .args(["-c", "does-not-exist.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_yaml_is_application_error() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("shade-diff.config.yml"), "bundles: [[[");

        cargo_bin_cmd!("shade-diff")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_bundle_field_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("shade-diff.config.yml"),
            "bundles:\n  - group_id: org.acme\n    artifact_id: \"\"\n    version: \"1.0\"\n",
        );

        cargo_bin_cmd!("shade-diff")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("bundles[0].artifact_id must not be empty"));
    }

    #[test]
    fn test_unknown_field_warns() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("shade-diff.config.yml"),
            &format!("{}minimize_jar: true\n", BASE_CONFIG),
        );

        cargo_bin_cmd!("shade-diff")
            .current_dir(dir.path())
            .assert()
            .code(0)
            .stderr(predicate::str::contains(
                "Unknown config field 'minimize_jar' will be ignored",
            ));
    }
}

// ============================================================================
// CLI / Config Merge Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_bundles_are_added_to_config_bundles() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("shade-diff.config.yml"),
            &format!("{}include_scopes: [compile, provided]\n", BASE_CONFIG),
        );

        cargo_bin_cmd!("shade-diff")
            .current_dir(dir.path())
            .args(["-b", "org.acme:tools:2.0"])
            .assert()
            .code(0)
            .stdout("org.foo:bar:*,org.foo:qux:*\n")
            .stderr(
                predicate::str::contains("already included in org.acme:platform:1.0").and(
                    predicate::str::contains("2 shaded jar(s)"),
                ),
            );
    }

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("shade-diff.config.yml"),
            &format!("{}format: properties\n", BASE_CONFIG),
        );

        cargo_bin_cmd!("shade-diff")
            .current_dir(dir.path())
            .args(["-f", "plain"])
            .assert()
            .code(0)
            .stdout("org.foo:bar:*\n");
    }

    #[test]
    fn test_cli_scope_overrides_config() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("shade-diff.config.yml"),
            &format!("{}include_scopes: [compile, provided]\n", BASE_CONFIG),
        );

        cargo_bin_cmd!("shade-diff")
            .current_dir(dir.path())
            .args(["--scope", "provided"])
            .assert()
            .code(0)
            .stdout("org.foo:qux:*\n");
    }

    #[test]
    fn test_invalid_format_in_config() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("shade-diff.config.yml"),
            &format!("{}format: cyclonedx\n", BASE_CONFIG),
        );

        cargo_bin_cmd!("shade-diff")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid format: cyclonedx"));
    }
}
