mod common;

use common::{Fixture, php_class};
use nslocate_core::NamespaceRegistry;

fn app_registry(fx: &Fixture) -> NamespaceRegistry {
    let mut registry = NamespaceRegistry::new();
    registry.add_namespace("App", [fx.path("app")]);
    registry.set_system_namespace("CodeIgniter", fx.path("system"));
    registry
}

#[test]
fn test_namespaced_reference_resolves() {
    let fx = Fixture::new();
    let user = fx.write("app/Models/User.php", &php_class("App\\Models", "User"));
    let locator = fx.locator(app_registry(&fx), None);

    assert_eq!(
        locator.locate_file("App\\Models\\User", None, "php").unwrap(),
        Some(user.clone())
    );
    // Leading separator and mixed separators are normalized.
    assert_eq!(
        locator.locate_file("\\App\\Models\\User", None, "php").unwrap(),
        Some(user.clone())
    );
    assert_eq!(
        locator.locate_file("App\\Models/User", None, "php").unwrap(),
        Some(user)
    );
}

#[test]
fn test_every_registered_file_resolves() {
    let fx = Fixture::new();
    let mut registry = NamespaceRegistry::new();
    registry.add_namespace("App", [fx.path("app")]);
    registry.add_namespace("Acme\\Blog", [fx.path("vendor/acme/blog/src")]);
    registry.set_system_namespace("CodeIgniter", fx.path("system"));

    let triples = [
        ("App", "app", "Controllers/Home"),
        ("App", "app", "Config/Routes"),
        ("Acme\\Blog", "vendor/acme/blog/src", "Post"),
        ("Acme\\Blog", "vendor/acme/blog/src", "Admin/Editor"),
        ("CodeIgniter", "system", "HTTP/Request"),
    ];
    for (_, base, rel) in &triples {
        fx.write(&format!("{base}/{rel}.php"), "<?php\n");
    }

    let locator = fx.locator(registry, None);
    for (prefix, base, rel) in &triples {
        let reference = format!("{prefix}\\{}", rel.replace('/', "\\"));
        assert_eq!(
            locator.locate_file(&reference, None, "php").unwrap(),
            Some(fx.path(&format!("{base}/{rel}.php"))),
            "reference {reference}"
        );
    }
}

#[test]
fn test_extension_not_duplicated() {
    let fx = Fixture::new();
    let user = fx.write("app/Models/User.php", "<?php\n");
    fx.write("app/Models/User.php.php", "<?php\n");
    let locator = fx.locator(app_registry(&fx), None);

    assert_eq!(
        locator.locate_file("App\\Models\\User.php", None, "php").unwrap(),
        Some(user)
    );
}

#[test]
fn test_other_extensions() {
    let fx = Fixture::new();
    let view = fx.write("app/Views/home.phtml", "<p>home</p>");
    let locator = fx.locator(app_registry(&fx), None);

    assert_eq!(
        locator.locate_file("App\\Views\\home", None, "phtml").unwrap(),
        Some(view)
    );
    assert_eq!(
        locator.locate_file("App\\Views\\home", None, "php").unwrap(),
        None
    );
}

#[test]
fn test_application_reference() {
    let fx = Fixture::new();
    let user = fx.write("app/Models/User.php", "<?php\n");
    let locator = fx.locator(app_registry(&fx), None);

    assert_eq!(
        locator.locate_file("Models/User", None, "php").unwrap(),
        Some(user)
    );
    assert_eq!(locator.locate_file("Models/Missing", None, "php").unwrap(), None);
    assert_eq!(locator.locate_file("Nothing", None, "php").unwrap(), None);
}

#[test]
fn test_application_reference_with_folder() {
    let fx = Fixture::new();
    let home = fx.write("app/Views/home.php", "<?php\n");
    fx.write("app/Views/bar.php", "<?php\n");
    let locator = fx.locator(app_registry(&fx), None);

    assert_eq!(
        locator.locate_file("home", Some("Views"), "php").unwrap(),
        Some(home.clone())
    );
    // A leading `Views/` is not repeated.
    assert_eq!(
        locator.locate_file("Views/home", Some("Views"), "php").unwrap(),
        Some(home)
    );
    // Only a whole leading segment is stripped.
    assert_eq!(
        locator.locate_file("Viewsbar", Some("Views"), "php").unwrap(),
        None
    );
}

#[test]
fn test_folder_inserted_for_namespaced_reference() {
    let fx = Fixture::new();
    let home = fx.write("app/Views/Home.php", "<?php\n");
    fx.write("app/Home.php", "<?php\n");
    let locator = fx.locator(app_registry(&fx), None);

    assert_eq!(
        locator.locate_file("App\\Home", Some("Views"), "php").unwrap(),
        Some(home.clone())
    );
    // Already under the folder: no second insertion.
    assert_eq!(
        locator.locate_file("App\\Views\\Home", Some("Views"), "php").unwrap(),
        Some(home)
    );
}

#[test]
fn test_unregistered_namespace_not_found() {
    let fx = Fixture::new();
    fx.write("app/Models/User.php", "<?php\n");
    let locator = fx.locator(app_registry(&fx), None);

    assert_eq!(
        locator.locate_file("Vendor\\Models\\User", None, "php").unwrap(),
        None
    );
    // Prefix must be followed by a separator.
    assert_eq!(
        locator.locate_file("Application\\Models\\User", None, "php").unwrap(),
        None
    );
}

#[test]
fn test_first_path_with_file_wins() {
    let fx = Fixture::new();
    let mut registry = NamespaceRegistry::new();
    registry.add_namespace("App", [fx.path("first"), fx.path("second")]);
    let only_second = fx.write("second/Only.php", "<?php\n");
    let both_first = fx.write("first/Both.php", "<?php\n");
    fx.write("second/Both.php", "<?php\n");
    let locator = fx.locator(registry, None);

    assert_eq!(
        locator.locate_file("App\\Only", None, "php").unwrap(),
        Some(only_second)
    );
    assert_eq!(
        locator.locate_file("App\\Both", None, "php").unwrap(),
        Some(both_first)
    );
}

#[test]
fn test_last_matching_prefix_wins() {
    let fx = Fixture::new();
    let general = fx.write("app/Models/User.php", "<?php\n");
    let specific = fx.write("models/User.php", "<?php\n");

    let mut registry = NamespaceRegistry::new();
    registry.add_namespace("App", [fx.path("app")]);
    registry.add_namespace("App\\Models", [fx.path("models")]);
    let locator = fx.locator(registry, None);
    assert_eq!(
        locator.locate_file("App\\Models\\User", None, "php").unwrap(),
        Some(specific)
    );

    // Registry order decides, not prefix length.
    let mut registry = NamespaceRegistry::new();
    registry.add_namespace("App\\Models", [fx.path("models")]);
    registry.add_namespace("App", [fx.path("app")]);
    let locator = fx.locator(registry, None);
    assert_eq!(
        locator.locate_file("App\\Models\\User", None, "php").unwrap(),
        Some(general)
    );
}

#[test]
fn test_matched_prefix_without_file_does_not_fall_back() {
    let fx = Fixture::new();
    fx.write("app/Models/User.php", "<?php\n");

    let mut registry = NamespaceRegistry::new();
    registry.add_namespace("App", [fx.path("app")]);
    registry.add_namespace("App\\Models", [fx.path("empty")]);
    let locator = fx.locator(registry, None);

    assert_eq!(
        locator.locate_file("App\\Models\\User", None, "php").unwrap(),
        None
    );
}
