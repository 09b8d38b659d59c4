use glam::Vec2;

use crate::config::CameraTuning;

/// Follow camera for the playfield.
///
/// The world feeds it the player's center every step; hosts read the
/// position and zoom when they build their projection. Zoom is always held
/// inside the configured range.
#[derive(Debug, Clone)]
pub struct ChaseCamera {
    position: Vec2,
    zoom: f32,
    zoom_min: f32,
    zoom_max: f32,
    smoothing: f32,
}

impl ChaseCamera {
    pub fn new(tuning: &CameraTuning) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0f32.clamp(tuning.zoom_min, tuning.zoom_max),
            zoom_min: tuning.zoom_min,
            zoom_max: tuning.zoom_max,
            smoothing: tuning.follow_smoothing.clamp(0.0, 0.99),
        }
    }

    /// Move toward `target`, instantly at zero smoothing, otherwise on an
    /// exponential approach that is stable across step sizes.
    pub fn follow(&mut self, target: Vec2, dt: f32) {
        if self.smoothing <= 0.0 {
            self.position = target;
        } else {
            let lerp = 1.0 - self.smoothing.powf(dt * 60.0);
            self.position += (target - self.position) * lerp;
        }
    }

    /// Jump straight to `target`, ignoring smoothing. Used on level loads so
    /// the camera never sweeps across the map to a fresh spawn.
    pub fn snap_to(&mut self, target: Vec2) {
        self.position = target;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.zoom_min, self.zoom_max);
    }

    /// Adjust zoom relative to the current value, still clamped.
    pub fn zoom_by(&mut self, amount: f32) {
        self.set_zoom(self.zoom + amount);
    }
}
