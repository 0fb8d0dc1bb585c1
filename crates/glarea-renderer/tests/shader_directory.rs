//! Loading shader sources from a directory named in the config.

use glarea_config::GlAreaConfig;
use glarea_renderer::backend::ObjectKind;
use glarea_renderer::{GlArea, PipelineState, RecordingBackend, RendererError};
use std::fs;

const VERT: &str = "#version 330\nuniform mat4 mvp;\nvoid main() { gl_Position = mvp * position; }\n";
const FRAG: &str = "#version 330\nout vec4 color;\nvoid main() { color = vec4(1.0); }\n";

fn config_for(dir: &std::path::Path) -> GlAreaConfig {
    let mut config = GlAreaConfig::default();
    config.shaders.directory = Some(dir.to_path_buf());
    config.shaders.vertex = "/shaders/tri.vert".into();
    config.shaders.fragment = "/shaders/tri.frag".into();
    config
}

#[test]
fn realizes_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("shaders")).unwrap();
    fs::write(dir.path().join("shaders/tri.vert"), VERT).unwrap();
    fs::write(dir.path().join("shaders/tri.frag"), FRAG).unwrap();

    let mut area = GlArea::from_config(RecordingBackend::new(), &config_for(dir.path()));
    area.realize().unwrap();
    assert_eq!(area.pipeline().state(), PipelineState::Ready);
    assert!(area.pipeline().has_mvp_uniform());

    area.render().unwrap();
    assert_eq!(area.backend().draw_count(), 1);
}

#[test]
fn missing_file_is_resource_not_found() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("shaders")).unwrap();
    fs::write(dir.path().join("shaders/tri.vert"), VERT).unwrap();

    let mut area = GlArea::from_config(RecordingBackend::new(), &config_for(dir.path()));
    match area.realize() {
        Err(RendererError::ResourceNotFound { path, .. }) => {
            assert_eq!(path, "/shaders/tri.frag");
        }
        other => panic!("expected ResourceNotFound, got {other:?}"),
    }
    assert_eq!(area.pipeline().state(), PipelineState::Failed);
    assert_eq!(area.backend().live_count(ObjectKind::Shader), 0);
}

#[test]
fn config_file_drives_shader_lookup() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("v.glsl"), VERT).unwrap();
    fs::write(dir.path().join("f.glsl"), FRAG).unwrap();

    let config_path = dir.path().join("config.toml");
    let toml = format!(
        "[shaders]\nvertex = \"/v.glsl\"\nfragment = \"/f.glsl\"\ndirectory = {:?}\n\n[rotation]\nz = 30.0\n",
        dir.path().display().to_string()
    );
    fs::write(&config_path, toml).unwrap();

    let config = glarea_config::load_from_path(&config_path).unwrap();
    let mut area = GlArea::from_config(RecordingBackend::new(), &config);
    area.realize().unwrap();
    area.render().unwrap();

    assert_eq!(
        area.backend().last_uniform_matrix(),
        Some(glarea_renderer::compute_matrix(0.0, 0.0, 30.0))
    );
}
