use nslocate_api::NamespaceSource;
use nslocate_core::FileLocator;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct NamespaceRow {
    #[tabled(rename = "#")]
    order: usize,
    #[tabled(rename = "Prefix")]
    prefix: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Exists")]
    exists: bool,
}

pub fn run(locator: &FileLocator, json: bool) -> Result<bool, Box<dyn std::error::Error>> {
    let entries = locator.source().flattened();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(!entries.is_empty());
    }

    let rows: Vec<NamespaceRow> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| NamespaceRow {
            order: i + 1,
            prefix: entry.prefix.clone(),
            path: entry.path.display().to_string(),
            exists: entry.path.is_dir(),
        })
        .collect();

    if rows.is_empty() {
        println!("No namespaces registered.");
    } else {
        println!("{}", Table::new(rows));
        println!("Application path: {}", locator.app_path().display());
    }
    Ok(!entries.is_empty())
}
