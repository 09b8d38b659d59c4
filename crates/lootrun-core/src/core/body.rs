use glam::Vec2;

use crate::core::rect::Rect;

/// Kinematic state shared by every simulated object.
///
/// Motion is integrated per axis with the same rule on both axes: friction
/// decays the current velocity toward zero, acceleration is applied on top,
/// and the result is clamped to the terminal velocity before the position
/// update. There is no mass and no impulse model.
#[derive(Debug, Clone)]
pub struct Body {
    /// Position of the local origin in world space.
    pub position: Vec2,
    /// Logical size in world units.
    pub dimension: Vec2,
    /// Offset from `position` to the visual/rotational center.
    pub origin: Vec2,
    /// Render scale factor, carried through to the view pass.
    pub scale: Vec2,
    /// Rotation in radians, carried through to the view pass.
    pub rotation: f32,
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Per-axis speed cap applied after friction and acceleration.
    pub terminal_velocity: Vec2,
    /// Per-axis deceleration toward zero, in units per second squared.
    pub friction: Vec2,
    /// Constant per-axis acceleration, in units per second squared.
    pub acceleration: Vec2,
    /// Collision rect relative to `position`.
    pub bounds: Rect,
}

impl Body {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            dimension: Vec2::ONE,
            origin: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
            velocity: Vec2::ZERO,
            terminal_velocity: Vec2::new(1.0, 1.0),
            friction: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            bounds: Rect::new(0.0, 0.0, 1.0, 1.0),
        }
    }

    /// Advance the horizontal velocity by one step of the axis rule.
    pub fn update_velocity_x(&mut self, dt: f32) {
        self.velocity.x = step_axis(
            self.velocity.x,
            self.friction.x,
            self.acceleration.x,
            self.terminal_velocity.x,
            dt,
        );
    }

    /// Advance the vertical velocity by one step of the axis rule.
    pub fn update_velocity_y(&mut self, dt: f32) {
        self.velocity.y = step_axis(
            self.velocity.y,
            self.friction.y,
            self.acceleration.y,
            self.terminal_velocity.y,
            dt,
        );
    }

    /// One full integration step: velocity update on both axes, then the
    /// position update with the new velocity.
    pub fn update(&mut self, dt: f32) {
        self.update_velocity_x(dt);
        self.update_velocity_y(dt);
        self.position += self.velocity * dt;
    }

    /// Collision rect in world space.
    pub fn world_bounds(&self) -> Rect {
        self.bounds.offset_by(self.position)
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-axis velocity step: friction decays toward zero without crossing
/// it, acceleration is applied, and the result is clamped to the terminal
/// speed in both directions.
fn step_axis(velocity: f32, friction: f32, acceleration: f32, terminal: f32, dt: f32) -> f32 {
    let mut v = velocity;
    if friction > 0.0 {
        if v > 0.0 {
            v = (v - friction * dt).max(0.0);
        } else if v < 0.0 {
            v = (v + friction * dt).min(0.0);
        }
    }
    v += acceleration * dt;
    v.clamp(-terminal, terminal)
}
