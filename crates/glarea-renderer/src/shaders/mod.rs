//! Where shader source text comes from.
//!
//! The pipeline asks a [`ShaderSource`] for each stage by logical path
//! and treats a missing source as an initialization failure.

mod directory;
mod embedded;

pub use directory::*;
pub use embedded::*;

use glarea_config::schema::ShaderConfig;
use std::collections::HashMap;

/// Provider of GLSL source text by logical path.
pub trait ShaderSource {
    /// The source for `path`, or `None` if there is no such shader.
    fn load(&self, path: &str) -> Option<String>;
}

impl ShaderSource for HashMap<String, String> {
    fn load(&self, path: &str) -> Option<String> {
        self.get(path).cloned()
    }
}

/// Pick the provider named by config: a directory on disk when
/// `shaders.directory` is set, the built-in sources otherwise.
pub fn shader_source_from_config(config: &ShaderConfig) -> Box<dyn ShaderSource> {
    match &config.directory {
        Some(root) => Box::new(DirectoryShaders::new(root.clone())),
        None => Box::new(EmbeddedShaders),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn hashmap_source_lookup() {
        let mut sources = HashMap::new();
        sources.insert("/a.glsl".to_string(), "void main() {}".to_string());
        assert_eq!(sources.load("/a.glsl").as_deref(), Some("void main() {}"));
        assert!(sources.load("/b.glsl").is_none());
    }

    #[test]
    fn config_without_directory_uses_embedded() {
        let source = shader_source_from_config(&ShaderConfig::default());
        assert!(source.load(glarea_config::schema::DEFAULT_VERTEX_SHADER).is_some());
    }

    #[test]
    fn config_with_directory_reads_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("v.glsl"), "void main() {}").unwrap();
        let config = ShaderConfig {
            directory: Some(PathBuf::from(dir.path())),
            ..ShaderConfig::default()
        };
        let source = shader_source_from_config(&config);
        assert_eq!(source.load("/v.glsl").as_deref(), Some("void main() {}"));
        // embedded paths are not visible through a directory provider
        assert!(source.load("/glarea/v.glsl").is_none());
    }
}
