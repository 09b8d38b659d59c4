use glam::Vec2;

use crate::core::body::Body;
use crate::core::rect::Rect;

pub const COIN_SCORE: i32 = 100;
pub const POWERUP_SCORE: i32 = 250;

const PICKUP_SIZE: Vec2 = Vec2::new(0.5, 0.5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    Coin,
    Powerup,
}

/// A collectible sitting in the level.
///
/// Collection only flips `collected`; the entity stays in place so the level
/// keeps a stable entity list across the whole session. Collected pickups
/// are ignored by collision and skipped by the view pass.
#[derive(Debug, Clone)]
pub struct Pickup {
    pub body: Body,
    pub kind: PickupKind,
    pub collected: bool,
}

impl Pickup {
    pub fn coin() -> Self {
        Self::new(PickupKind::Coin)
    }

    pub fn powerup() -> Self {
        Self::new(PickupKind::Powerup)
    }

    fn new(kind: PickupKind) -> Self {
        let mut body = Body::new();
        body.dimension = PICKUP_SIZE;
        body.bounds = Rect::new(0.0, 0.0, PICKUP_SIZE.x, PICKUP_SIZE.y);
        Self {
            body,
            kind,
            collected: false,
        }
    }

    /// Points awarded on collection.
    pub fn score_value(&self) -> i32 {
        match self.kind {
            PickupKind::Coin => COIN_SCORE,
            PickupKind::Powerup => POWERUP_SCORE,
        }
    }
}
