//! Registering resources in throwaway Go projects.

use std::{fs, path::Path};

use goscaffold_codegen::{Error, Project, read_registry, register_resource};
use goscaffold_manifest::{Layout, ScaffoldConfig};
use tempfile::TempDir;

/// A project root with a `go.mod` declaring `github.com/acme/api`.
fn go_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("go.mod"),
        "module github.com/acme/api\n\ngo 1.22\n",
    )
    .unwrap();
    temp
}

fn registry_text(root: &Path) -> String {
    fs::read_to_string(root.join("migrations").join("migrations.go")).unwrap()
}

#[test]
fn test_register_creates_registry() {
    let temp = go_project();

    let report = register_resource(temp.path(), "order", &ScaffoldConfig::default()).unwrap();

    assert_eq!(report.path, temp.path().join("migrations").join("migrations.go"));
    assert_eq!(report.resource, "order");
    assert_eq!(report.import_path, "github.com/acme/api/internal/order");
    assert_eq!(report.model_reference, "&order.Order{}");
    assert!(!report.already_registered);
    assert!(!report.has_warnings());

    let text = registry_text(temp.path());
    assert!(text.starts_with("package migrations\n"));
    assert!(text.contains("\t\"gorm.io/gorm\"\n"));
    assert!(text.contains("\t\"github.com/acme/api/internal/order\"\n"));
    assert!(text.contains("\t\t&order.Order{},\n"));
}

#[test]
fn test_register_twice_is_byte_identical() {
    let temp = go_project();
    let project = Project::open(temp.path()).unwrap();

    project.register("order").unwrap();
    let first = registry_text(temp.path());
    let report = project.register("order").unwrap();

    assert!(report.already_registered);
    assert_eq!(registry_text(temp.path()), first);
}

#[test]
fn test_second_resource_is_merged() {
    let temp = go_project();
    let project = Project::open(temp.path()).unwrap();

    project.register("order").unwrap();
    project.register("invoice").unwrap();

    let text = registry_text(temp.path());
    let invoice = text.find("internal/invoice\"").unwrap();
    let order = text.find("internal/order\"").unwrap();
    assert!(invoice < order);
    assert_eq!(text.matches("\"gorm.io/gorm\"").count(), 1);
    assert!(text.contains("\t\t&invoice.Invoice{},\n\t\t&order.Order{},\n"));
}

#[test]
fn test_unreadable_registry_is_fatal() {
    let temp = go_project();
    let registry = temp.path().join("migrations").join("migrations.go");
    fs::create_dir_all(&registry).unwrap();

    let err = register_resource(temp.path(), "order", &ScaffoldConfig::default()).unwrap_err();

    match err {
        Error::Core(goscaffold_core::Error::InputUnreadable { path, .. }) => {
            assert_eq!(path, registry)
        }
        other => panic!("expected InputUnreadable, got {other:?}"),
    }
    assert!(registry.is_dir());
}

#[test]
fn test_missing_go_mod_is_reported() {
    let temp = TempDir::new().unwrap();

    let err = Project::open(temp.path()).unwrap_err();

    assert!(matches!(
        err,
        Error::Manifest(goscaffold_manifest::Error::Io { .. })
    ));
}

#[test]
fn test_invalid_name_writes_nothing() {
    let temp = go_project();

    let err = register_resource(temp.path(), "order-item", &ScaffoldConfig::default())
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Core(goscaffold_core::Error::InvalidResourceName { .. })
    ));
    assert!(!temp.path().join("migrations").exists());
}

#[test]
fn test_scaffold_toml_controls_output() {
    let temp = go_project();
    fs::write(
        temp.path().join("scaffold.toml"),
        r#"
        layout = "src"

        [registry]
        dir = "db"
        file = "migrate.go"
        package = "db"
        function = "Migrate"
        "#,
    )
    .unwrap();

    let project = Project::open(temp.path()).unwrap();
    assert_eq!(project.config().layout, Layout::Src);
    let report = project.register("user_account").unwrap();

    assert_eq!(report.path, temp.path().join("db").join("migrate.go"));
    let text = fs::read_to_string(&report.path).unwrap();
    assert!(text.starts_with("package db\n"));
    assert!(text.contains("\t\"github.com/acme/api/src/user_account\"\n"));
    assert!(text.contains("func Migrate(db *gorm.DB) error {\n"));
    assert!(text.contains("\t\t&user_account.UserAccount{},\n"));

    // The custom function header is recognized on the next run.
    project.register("user_account").unwrap();
    assert_eq!(fs::read_to_string(&report.path).unwrap(), text);
}

#[test]
fn test_invalid_scaffold_toml_is_reported() {
    let temp = go_project();
    fs::write(
        temp.path().join("scaffold.toml"),
        "[registry]\nfunction = \"func\"\n",
    )
    .unwrap();

    let err = Project::open(temp.path()).unwrap_err();

    assert!(matches!(
        err,
        Error::Manifest(goscaffold_manifest::Error::Validation { .. })
    ));
}

#[test]
fn test_read_registry_does_not_write() {
    let temp = go_project();
    let config = ScaffoldConfig::default();

    assert!(read_registry(temp.path(), &config).unwrap().is_none());
    assert!(!temp.path().join("migrations").exists());

    register_resource(temp.path(), "order", &config).unwrap();
    let parsed = read_registry(temp.path(), &config).unwrap().unwrap();

    assert!(parsed.is_clean());
    assert_eq!(
        parsed.document.models().collect::<Vec<_>>(),
        ["&order.Order{}"]
    );
}

#[test]
fn test_hand_edits_are_reported() {
    let temp = go_project();
    let registry = temp.path().join("migrations").join("migrations.go");
    fs::create_dir_all(registry.parent().unwrap()).unwrap();
    fs::write(
        &registry,
        "package migrations\n\nvar Enabled = true\n\nimport (\n\t\"gorm.io/gorm\"\n)\n",
    )
    .unwrap();

    let project = Project::open(temp.path()).unwrap();
    let before = project.read_registry().unwrap().unwrap();
    assert_eq!(before.skipped.len(), 1);

    let report = project.register("order").unwrap();

    assert!(report.has_warnings());
    assert_eq!(report.skipped_lines[0].number, 3);
    assert_eq!(report.skipped_lines[0].text, "var Enabled = true");
    assert!(!registry_text(temp.path()).contains("Enabled"));
}

#[test]
fn test_module_path_with_quote_is_refused() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("go.mod"), "module github.com/ac\"me/api\n").unwrap();

    let err = register_resource(temp.path(), "order", &ScaffoldConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        Error::Manifest(goscaffold_manifest::Error::Validation { .. })
    ));
    assert!(!temp.path().join("migrations").exists());
}

#[test]
fn test_module_path_is_checked_without_go_mod() {
    let temp = TempDir::new().unwrap();
    let module = goscaffold_manifest::GoModule::new("github.com/acme api");
    let project = Project::new(temp.path(), module, ScaffoldConfig::default());

    let err = project.register("order").unwrap_err();

    assert!(matches!(
        err,
        Error::Core(goscaffold_core::Error::InvalidModulePath { .. })
    ));
    assert!(!temp.path().join("migrations").exists());
}
