//! Initial rotation angles.

use serde::{Deserialize, Serialize};

/// Angles in degrees the surface starts with, one per axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
