use super::{FileLocator, ensure_ext};
use crate::error::Result;
use crate::util::{is_file, join_base};
use nslocate_api::{NAMESPACE_SEPARATOR, NamespaceSource};
use std::path::PathBuf;
use tracing::{debug, trace};

impl FileLocator {
    /// Find the file a logical reference points at.
    ///
    /// `reference` is either namespaced (`App\Config\Routes`) and looked up
    /// through the registry, or a plain relative path looked up under the
    /// application directory. `folder` restricts namespaced lookups to a
    /// sub-folder of each base path.
    pub fn locate_file(
        &self,
        reference: &str,
        folder: Option<&str>,
        ext: &str,
    ) -> Result<Option<PathBuf>> {
        let mut file = ensure_ext(reference, ext);
        let folder = folder.filter(|f| !f.is_empty());

        if let Some(folder) = folder {
            if let Some(rest) = file.strip_prefix(&format!("{folder}/")) {
                file = rest.to_string();
            }
        }

        if !file.contains(NAMESPACE_SEPARATOR) {
            return self.locate_app_file(&file, folder);
        }

        let found = resolve_namespaced(self.source.as_ref(), &file, folder)?;
        debug!("locate_file({}) -> {:?}", reference, found);
        Ok(found)
    }

    fn locate_app_file(&self, file: &str, folder: Option<&str>) -> Result<Option<PathBuf>> {
        let relative = match folder {
            Some(folder) => format!("{folder}/{file}"),
            None => file.to_string(),
        };
        let candidate = join_base(&self.app_path, &relative);
        trace!("Application candidate: {}", candidate.display());

        Ok(is_file(&candidate)?.then_some(candidate))
    }
}

/// Resolve a namespaced reference (extension already applied) through the
/// registry.
///
/// Path separators are folded into namespace separators first, so
/// `App\Views/home.php` and `App\Views\home.php` are the same reference.
pub fn resolve_namespaced(
    source: &dyn NamespaceSource,
    reference: &str,
    folder: Option<&str>,
) -> Result<Option<PathBuf>> {
    let normalized = reference.replace('/', "\\");
    let file = normalized
        .strip_prefix(NAMESPACE_SEPARATOR)
        .unwrap_or(&normalized);

    let mut matched: Option<(Vec<PathBuf>, String)> = None;
    for entry in source.namespaces() {
        let Some(rest) = file
            .strip_prefix(entry.prefix.as_str())
            .and_then(|rest| rest.strip_prefix(NAMESPACE_SEPARATOR))
        else {
            continue;
        };
        let filename = rest
            .replace(NAMESPACE_SEPARATOR, "/")
            .trim_start_matches('/')
            .to_string();
        // Last match wins, by registry order rather than prefix length.
        matched = Some((entry.paths, filename));
    }

    let Some((paths, filename)) = matched else {
        trace!("No namespace matches {}", file);
        return Ok(None);
    };

    for base in paths {
        let mut dir = format!("{}/", base.to_string_lossy().trim_end_matches('/'));

        if let Some(folder) = folder {
            let marker = format!("/{folder}/");
            if !format!("{dir}{filename}").contains(&marker) {
                dir.push_str(folder.trim_matches('/'));
                dir.push('/');
            }
        }

        let candidate = PathBuf::from(format!("{dir}{filename}"));
        trace!("Namespace candidate: {}", candidate.display());
        if is_file(&candidate)? {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}
