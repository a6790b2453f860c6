use nslocate_core::FileLocator;
use std::path::Path;
use tracing::info;

pub fn run(
    locator: &FileLocator,
    reference: &str,
    folder: Option<&str>,
    ext: &str,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    match locator.locate_file(reference, folder, ext)? {
        Some(path) => {
            if json {
                println!("{}", serde_json::json!({ "reference": reference, "path": path }));
            } else {
                println!("{}", path.display());
            }
            Ok(true)
        }
        None => {
            info!("No file found for {}", reference);
            if json {
                println!("{}", serde_json::json!({ "reference": reference, "path": null }));
            }
            Ok(false)
        }
    }
}

pub fn classname(
    locator: &FileLocator,
    file: &Path,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let name = locator.get_classname(file);
    if json {
        println!("{}", serde_json::json!({ "file": file, "class": name }));
    } else if !name.is_empty() {
        println!("{name}");
    }
    Ok(!name.is_empty())
}

pub fn qualify(
    locator: &FileLocator,
    file: &Path,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let name = locator.find_qualified_name_from_path(file)?;
    if json {
        println!("{}", serde_json::json!({ "file": file, "class": name }));
    } else if let Some(name) = &name {
        println!("{name}");
    }
    Ok(name.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn project() -> (tempfile::TempDir, FileLocator) {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join("nslocate.json"), r#"{"psr4": {"App": "app"}}"#).unwrap();
        fs::create_dir_all(root.join("app/Models")).unwrap();
        fs::write(
            root.join("app/Models/User.php"),
            "<?php\nnamespace App\\Models;\nclass User {}\n",
        )
        .unwrap();
        fs::write(root.join("app/notes.php"), "<?php echo 1;\n").unwrap();

        let locator = nslocate_runtime::build_default_locator(root, None).unwrap();
        (temp, locator)
    }

    #[test]
    fn test_locate_reports_whether_found() {
        let (_temp, locator) = project();
        assert!(run(&locator, "App\\Models\\User", None, "php", false).unwrap());
        assert!(run(&locator, "App\\Models\\User", None, "php", true).unwrap());
        assert!(!run(&locator, "App\\Models\\Missing", None, "php", false).unwrap());
    }

    #[test]
    fn test_classname_and_qualify() {
        let (temp, locator) = project();
        let user = temp.path().join("app/Models/User.php");
        let notes = temp.path().join("app/notes.php");

        assert!(classname(&locator, &user, false).unwrap());
        assert!(!classname(&locator, &notes, true).unwrap());
        assert!(qualify(&locator, &user, false).unwrap());
        assert!(!qualify(&locator, &notes, false).unwrap());
    }
}
