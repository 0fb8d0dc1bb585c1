//! Tests for the full validation pipeline.

use super::*;
use std::path::PathBuf;

#[test]
fn default_config_validates() {
    let config = GlAreaConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_vertex_path() {
    let mut config = GlAreaConfig::default();
    config.shaders.vertex = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("shaders.vertex"));
}

#[test]
fn catches_empty_shader_directory() {
    let mut config = GlAreaConfig::default();
    config.shaders.directory = Some(PathBuf::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("shaders.directory"));
}

#[test]
fn catches_clear_color_out_of_range() {
    let mut config = GlAreaConfig::default();
    config.render.clear_color = [0.1, -0.5, 0.1, 1.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("render.clear_color[1]"));
}

#[test]
fn catches_nan_clear_color() {
    let mut config = GlAreaConfig::default();
    config.render.clear_color[3] = f32::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("render.clear_color[3]"));
}

#[test]
fn large_angles_are_accepted() {
    let mut config = GlAreaConfig::default();
    config.rotation.x = 720.0;
    config.rotation.z = -1080.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_infinite_angle() {
    let mut config = GlAreaConfig::default();
    config.rotation.y = f32::INFINITY;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("rotation.y"));
}

#[test]
fn log_level_is_case_insensitive() {
    let mut config = GlAreaConfig::default();
    config.logging.level = "WARN".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_unknown_log_level() {
    let mut config = GlAreaConfig::default();
    config.logging.level = "verbose".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("logging.level"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = GlAreaConfig::default();
    config.shaders.fragment = String::new();
    config.logging.level = "loud".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("shaders.fragment"));
    assert!(err.contains("logging.level"));
    assert!(err.contains("; "));
}
