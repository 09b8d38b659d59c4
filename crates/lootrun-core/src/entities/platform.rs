use glam::Vec2;

use crate::core::body::Body;
use crate::core::rect::Rect;

/// Tile footprint of a single platform segment, world units.
const SEGMENT_SIZE: Vec2 = Vec2::new(1.0, 1.5);

/// A static run of walkable tiles.
///
/// The decoder merges horizontally adjacent platform pixels into one
/// `Platform` by extending its length; the collision rect always spans the
/// full merged run.
#[derive(Debug, Clone)]
pub struct Platform {
    pub body: Body,
    length: u32,
}

impl Platform {
    pub fn new() -> Self {
        let mut body = Body::new();
        body.dimension = SEGMENT_SIZE;
        let mut platform = Self { body, length: 0 };
        platform.set_length(1);
        platform
    }

    /// Replace the run length and resize the collision rect to match.
    pub fn set_length(&mut self, length: u32) {
        self.length = length.max(1);
        self.body.bounds = Rect::new(
            0.0,
            0.0,
            self.body.dimension.x * self.length as f32,
            self.body.dimension.y,
        );
    }

    /// Grow the run by `amount` tiles.
    pub fn extend(&mut self, amount: u32) {
        self.set_length(self.length + amount);
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// World-space height of the walkable surface.
    pub fn top(&self) -> f32 {
        self.body.position.y + self.body.bounds.h
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_platform_is_one_segment_wide() {
        let p = Platform::new();
        assert_eq!(p.length(), 1);
        assert_eq!(p.body.bounds, Rect::new(0.0, 0.0, 1.0, 1.5));
    }

    #[test]
    fn extend_grows_the_collision_rect() {
        let mut p = Platform::new();
        p.extend(1);
        p.extend(1);
        assert_eq!(p.length(), 3);
        assert_eq!(p.body.bounds.w, 3.0);
        assert_eq!(p.body.bounds.h, 1.5);
    }

    #[test]
    fn zero_length_is_clamped_to_one() {
        let mut p = Platform::new();
        p.set_length(0);
        assert_eq!(p.length(), 1);
    }

    #[test]
    fn top_tracks_position_and_height() {
        let mut p = Platform::new();
        p.body.position = Vec2::new(4.0, 2.0);
        assert_eq!(p.top(), 3.5);
    }
}
