//! Rotation angles driven by the three axis controls.

use crate::matrix::{compute_matrix, Mat4};
use glarea_config::schema::RotationConfig;
use std::fmt;

/// Axis identifier carried by a parameter-change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Current angle per axis, in degrees.
///
/// Values are stored as given: no wraparound, no clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn from_config(config: &RotationConfig) -> Self {
        Self {
            x: config.x,
            y: config.y,
            z: config.z,
        }
    }

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn set(&mut self, axis: Axis, degrees: f32) {
        match axis {
            Axis::X => self.x = degrees,
            Axis::Y => self.y = degrees,
            Axis::Z => self.z = degrees,
        }
    }

    /// The `mvp` matrix for these angles.
    pub fn matrix(&self) -> Mat4 {
        compute_matrix(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::IDENTITY;

    #[test]
    fn default_is_zero_and_identity() {
        let state = RotationState::default();
        for axis in Axis::ALL {
            assert_eq!(state.get(axis), 0.0);
        }
        assert_eq!(state.matrix(), IDENTITY);
    }

    #[test]
    fn set_touches_only_one_axis() {
        let mut state = RotationState::default();
        state.set(Axis::Y, 45.0);
        assert_eq!(state.get(Axis::X), 0.0);
        assert_eq!(state.get(Axis::Y), 45.0);
        assert_eq!(state.get(Axis::Z), 0.0);
    }

    #[test]
    fn values_are_not_wrapped() {
        let mut state = RotationState::default();
        state.set(Axis::X, 725.0);
        state.set(Axis::Z, -400.0);
        assert_eq!(state.x, 725.0);
        assert_eq!(state.z, -400.0);
    }

    #[test]
    fn from_config_copies_angles() {
        let config = RotationConfig {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        };
        let state = RotationState::from_config(&config);
        assert_eq!((state.x, state.y, state.z), (1.0, 2.0, 3.0));
    }

    #[test]
    fn axis_display() {
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(Axis::Z.to_string(), "z");
    }
}
