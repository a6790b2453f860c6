use crate::print_paths;
use nslocate_core::FileLocator;

pub fn run(
    locator: &FileLocator,
    subpath: &str,
    namespace: Option<&str>,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let files = match namespace {
        Some(prefix) => locator.list_namespace_files(prefix, subpath)?,
        None => locator.list_files(subpath)?,
    };
    print_paths(&files, json)?;
    Ok(!files.is_empty())
}
