//! Shaders read from a directory on disk.

use super::ShaderSource;
use std::path::{Component, Path, PathBuf};

/// Resolves logical paths like `/glarea/v.glsl` under `root`.
#[derive(Debug, Clone)]
pub struct DirectoryShaders {
    root: PathBuf,
}

impl DirectoryShaders {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path for `logical`, or `None` if it would escape `root`.
    pub fn resolve(&self, logical: &str) -> Option<PathBuf> {
        let relative = Path::new(logical.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl ShaderSource for DirectoryShaders {
    fn load(&self, path: &str) -> Option<String> {
        let Some(file) = self.resolve(path) else {
            tracing::warn!("refusing shader path outside {}: {path}", self.root.display());
            return None;
        };
        match std::fs::read_to_string(&file) {
            Ok(source) => Some(source),
            Err(e) => {
                tracing::debug!("failed to read shader {}: {e}", file.display());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_slash() {
        let shaders = DirectoryShaders::new("/srv/shaders");
        assert_eq!(
            shaders.resolve("/glarea/v.glsl"),
            Some(PathBuf::from("/srv/shaders/glarea/v.glsl"))
        );
    }

    #[test]
    fn rejects_parent_components() {
        let shaders = DirectoryShaders::new("/srv/shaders");
        assert!(shaders.resolve("/../etc/passwd").is_none());
        assert!(shaders.load("../secret.glsl").is_none());
    }

    #[test]
    fn loads_nested_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("glarea")).unwrap();
        std::fs::write(dir.path().join("glarea").join("f.glsl"), "void main() {}").unwrap();

        let shaders = DirectoryShaders::new(dir.path());
        assert_eq!(shaders.load("/glarea/f.glsl").as_deref(), Some("void main() {}"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let shaders = DirectoryShaders::new(dir.path());
        assert!(shaders.load("/glarea/v.glsl").is_none());
    }
}
