//! Shaders compiled into the crate.

use super::ShaderSource;
use glarea_config::schema::{DEFAULT_FRAGMENT_SHADER, DEFAULT_VERTEX_SHADER};

const VERTEX_SOURCE: &str = include_str!("v.glsl");
const FRAGMENT_SOURCE: &str = include_str!("f.glsl");

/// The default vertex/fragment pair, served under
/// [`DEFAULT_VERTEX_SHADER`] and [`DEFAULT_FRAGMENT_SHADER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedShaders;

impl ShaderSource for EmbeddedShaders {
    fn load(&self, path: &str) -> Option<String> {
        match path {
            DEFAULT_VERTEX_SHADER => Some(VERTEX_SOURCE.to_string()),
            DEFAULT_FRAGMENT_SHADER => Some(FRAGMENT_SOURCE.to_string()),
            _ => {
                tracing::debug!("no embedded shader at {path}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_both_stages() {
        let vertex = EmbeddedShaders.load("/glarea/v.glsl").unwrap();
        let fragment = EmbeddedShaders.load("/glarea/f.glsl").unwrap();
        assert!(vertex.contains("uniform mat4 mvp;"));
        assert!(vertex.contains("layout(location = 0) in vec4 position;"));
        assert!(fragment.contains("void main()"));
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert!(EmbeddedShaders.load("/glarea/missing.glsl").is_none());
    }
}
