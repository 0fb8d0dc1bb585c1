//! Per-section validation: shaders, render, rotation, logging.

use crate::schema::{GlAreaConfig, LOG_LEVELS};

use super::helpers::{validate_finite, validate_non_empty, validate_range_f64};

pub(crate) fn validate_shaders(errors: &mut Vec<String>, config: &GlAreaConfig) {
    validate_non_empty(errors, "shaders.vertex", &config.shaders.vertex);
    validate_non_empty(errors, "shaders.fragment", &config.shaders.fragment);
    if let Some(dir) = &config.shaders.directory {
        if dir.as_os_str().is_empty() {
            errors.push("shaders.directory must not be empty when set".into());
        }
    }
}

/// Each clear colour channel must be in `[0, 1]`.
pub(crate) fn validate_render(errors: &mut Vec<String>, config: &GlAreaConfig) {
    for (i, channel) in config.render.clear_color.iter().enumerate() {
        validate_range_f64(
            errors,
            &format!("render.clear_color[{i}]"),
            f64::from(*channel),
            0.0,
            1.0,
        );
    }
}

/// Initial angles are unconstrained but must be finite.
pub(crate) fn validate_rotation(errors: &mut Vec<String>, config: &GlAreaConfig) {
    validate_finite(errors, "rotation.x", f64::from(config.rotation.x));
    validate_finite(errors, "rotation.y", f64::from(config.rotation.y));
    validate_finite(errors, "rotation.z", f64::from(config.rotation.z));
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &GlAreaConfig) {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} is not one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
