//! Shader source selection.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logical path of the built-in vertex shader.
pub const DEFAULT_VERTEX_SHADER: &str = "/glarea/v.glsl";
/// Logical path of the built-in fragment shader.
pub const DEFAULT_FRAGMENT_SHADER: &str = "/glarea/f.glsl";

/// Which vertex/fragment sources the pipeline compiles.
///
/// `vertex` and `fragment` are logical paths. With `directory` unset they
/// resolve against the shaders embedded in the renderer; otherwise they
/// are read from disk relative to `directory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderConfig {
    pub vertex: String,
    pub fragment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            vertex: DEFAULT_VERTEX_SHADER.into(),
            fragment: DEFAULT_FRAGMENT_SHADER.into(),
            directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_embedded_shaders() {
        let config = ShaderConfig::default();
        assert_eq!(config.vertex, "/glarea/v.glsl");
        assert_eq!(config.fragment, "/glarea/f.glsl");
        assert!(config.directory.is_none());
    }

    #[test]
    fn directory_parses_from_toml() {
        let config: ShaderConfig = toml::from_str(r#"directory = "/opt/shaders""#).unwrap();
        assert_eq!(config.directory, Some(PathBuf::from("/opt/shaders")));
        assert_eq!(config.vertex, DEFAULT_VERTEX_SHADER);
    }
}
