//! Line definition lookup.

use crate::TransectError;
use std::path::{Path, PathBuf};

/// Locates named line definition files (`<name>.csv`).
///
/// The optional config directory is checked first; the bundled
/// resource directory is the fallback.
#[derive(Debug, Clone)]
pub struct Resources {
    config_dir: Option<PathBuf>,
    bundled_dir: PathBuf,
}

impl Resources {
    /// Returns a resolver that checks `config_dir` (when given) before
    /// the bundled line definitions.
    pub fn new(config_dir: Option<PathBuf>) -> Self {
        Self {
            config_dir,
            bundled_dir: bundled_dir(),
        }
    }

    /// Returns a resolver whose config directory is the `config`
    /// directory next to the current working directory.
    ///
    /// When the working directory itself is named `lib`, its parent
    /// is used as the base instead.
    pub fn from_working_dir() -> Self {
        let config_dir = std::env::current_dir().ok().map(|cwd| {
            let base = match (cwd.file_name(), cwd.parent()) {
                (Some(name), Some(parent)) if name == "lib" => parent.to_path_buf(),
                _ => cwd,
            };
            base.join("config")
        });
        Self::new(config_dir)
    }

    /// Returns the full path of `file_name` within the first search
    /// directory that has it.
    pub fn resolve(&self, file_name: &str) -> Result<PathBuf, TransectError> {
        for dir in self.search_dirs() {
            let path = dir.join(file_name);
            if path.exists() {
                return Ok(path);
            }
        }
        Err(TransectError::ResourceNotFound(
            file_name.to_string(),
            self.bundled_dir.clone(),
        ))
    }

    /// Returns the sorted names of all available line definitions.
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for dir in self.search_dirs() {
            let Ok(entries) = std::fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if Some("csv") == path.extension().and_then(std::ffi::OsStr::to_str) {
                    if let Some(stem) = path.file_stem().and_then(std::ffi::OsStr::to_str) {
                        names.push(stem.to_string());
                    }
                }
            }
        }
        names.sort();
        names.dedup();
        names
    }

    fn search_dirs(&self) -> impl Iterator<Item = &Path> {
        self.config_dir
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.bundled_dir.as_path()))
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Line definitions shipped with the crate.
fn bundled_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("resources")
}

#[cfg(test)]
mod tests {
    use super::Resources;
    use crate::TransectError;

    #[test]
    fn test_resolve_bundled() {
        let resources = Resources::new(None);
        let path = resources.resolve("ar7w.csv").unwrap();
        assert!(path.ends_with("resources/ar7w.csv"));
    }

    #[test]
    fn test_resolve_missing_names_directory() {
        let resources = Resources::new(None);
        let err = resources.resolve("no-such-line.csv").unwrap_err();
        match &err {
            TransectError::ResourceNotFound(name, dir) => {
                assert_eq!(name, "no-such-line.csv");
                assert!(dir.ends_with("resources"));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().contains("resources"));
    }

    #[test]
    fn test_names_lists_bundled_lines() {
        let names = Resources::new(None).names();
        assert!(names.contains(&"ar7w".to_string()));
        assert!(names.contains(&"ovide".to_string()));
    }
}
