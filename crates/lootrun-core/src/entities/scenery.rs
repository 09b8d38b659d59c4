use glam::Vec2;

use crate::core::body::Body;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneryKind {
    /// Scrolling background band behind the playfield.
    Backdrop,
    /// Hazard strip dressing the bottom of the level, below the death line.
    SpikeStrip,
}

/// Non-colliding dressing derived from the level width. Scenery never moves
/// and the collision pass ignores it; it exists so the view pass can place
/// the background and the floor hazard without re-deriving level geometry.
#[derive(Debug, Clone)]
pub struct Scenery {
    pub kind: SceneryKind,
    pub body: Body,
    length: u32,
}

impl Scenery {
    pub fn backdrop(level_width: u32) -> Self {
        let mut body = Body::new();
        body.dimension = Vec2::new(10.0, 2.0);
        // Pull the band left of the level start so it covers the camera at
        // the spawn, and extend the span to match.
        body.origin.x = -body.dimension.x * 2.0;
        body.position = Vec2::new(-1.0, -1.0);
        Self {
            kind: SceneryKind::Backdrop,
            body,
            length: level_width + 20,
        }
    }

    pub fn spike_strip(level_width: u32) -> Self {
        let mut body = Body::new();
        body.dimension = Vec2::new(level_width as f32 * 10.0, 3.0);
        body.origin.x = -body.dimension.x / 2.0;
        body.position = Vec2::new(0.0, -3.75);
        Self {
            kind: SceneryKind::SpikeStrip,
            body,
            length: level_width,
        }
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// World-space width of the whole band. The backdrop repeats its tile;
    /// rounding up to whole repeats plus one keeps the band past the level
    /// edge even though it starts left of the level. The spike strip already
    /// carries the full strip in its dimension.
    pub fn span(&self) -> f32 {
        match self.kind {
            SceneryKind::Backdrop => {
                let tile = self.body.dimension.x;
                ((self.length as f32 / tile).ceil() + 1.0) * tile
            }
            SceneryKind::SpikeStrip => self.body.dimension.x,
        }
    }
}
