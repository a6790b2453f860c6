use crate::print_paths;
use nslocate_core::FileLocator;

pub fn run(
    locator: &FileLocator,
    subpath: &str,
    ext: &str,
    prioritize_app: bool,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let found = locator.search(subpath, ext, prioritize_app)?;
    print_paths(&found, json)?;
    Ok(!found.is_empty())
}
