use bytemuck::{Pod, Zeroable};

use crate::entities::player::ViewDirection;
use crate::entities::scenery::SceneryKind;
use crate::level::Level;

/// Which sprite a view instance shows. The numeric value is what lands in
/// [`SpriteInstance::sprite`]; hosts map it to their own atlas layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKey {
    Backdrop = 0,
    Platform = 1,
    Coin = 2,
    Powerup = 3,
    Player = 4,
    SpikeStrip = 5,
}

impl SpriteKey {
    pub fn index(self) -> f32 {
        self as u32 as f32
    }
}

/// Per-sprite view data, plain floats so a host can copy the whole buffer
/// to a GPU instance buffer or across an FFI boundary unchanged.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Bottom-left corner in world space.
    pub x: f32,
    pub y: f32,
    /// Rendered size in world units.
    pub w: f32,
    pub h: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// 1.0 when the sprite is mirrored horizontally.
    pub flip_x: f32,
    /// [`SpriteKey`] value.
    pub sprite: f32,
    /// 1.0 marks the powered-up player for tinting.
    pub highlight: f32,
}

impl SpriteInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Reusable instance list, refilled by [`build_view_buffer`] once per
/// rendered frame.
pub struct ViewBuffer {
    pub instances: Vec<SpriteInstance>,
}

impl ViewBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(256),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: SpriteInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// The whole buffer as raw bytes, for memcpy-style hand-off.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for ViewBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot the level into draw order: backdrop, platforms, coins, powerups,
/// player, spike strip. Collected pickups are skipped.
///
/// Platforms emit one instance spanning the whole merged run. Scenery emits
/// one instance covering its whole band and bakes the origin offset into
/// the position, since for scenery the origin is placement rather than a
/// rotation pivot.
pub fn build_view_buffer(level: &Level, buffer: &mut ViewBuffer) {
    buffer.clear();

    push_scenery(level, SceneryKind::Backdrop, buffer);

    for platform in &level.platforms {
        let body = &platform.body;
        buffer.push(SpriteInstance {
            x: body.position.x,
            y: body.position.y,
            w: body.bounds.w * body.scale.x,
            h: body.dimension.y * body.scale.y,
            rotation: body.rotation,
            sprite: SpriteKey::Platform.index(),
            ..SpriteInstance::default()
        });
    }

    for (pickups, key) in [
        (&level.coins, SpriteKey::Coin),
        (&level.powerups, SpriteKey::Powerup),
    ] {
        for pickup in pickups.iter().filter(|p| !p.collected) {
            let body = &pickup.body;
            buffer.push(SpriteInstance {
                x: body.position.x,
                y: body.position.y,
                w: body.dimension.x * body.scale.x,
                h: body.dimension.y * body.scale.y,
                rotation: body.rotation,
                sprite: key.index(),
                ..SpriteInstance::default()
            });
        }
    }

    if let Some(player) = level.player.as_ref() {
        let body = &player.body;
        buffer.push(SpriteInstance {
            x: body.position.x,
            y: body.position.y,
            w: body.dimension.x * body.scale.x,
            h: body.dimension.y * body.scale.y,
            rotation: body.rotation,
            flip_x: if player.view_direction == ViewDirection::Left {
                1.0
            } else {
                0.0
            },
            sprite: SpriteKey::Player.index(),
            highlight: if player.has_powerup() { 1.0 } else { 0.0 },
        });
    }

    push_scenery(level, SceneryKind::SpikeStrip, buffer);
}

fn push_scenery(level: &Level, kind: SceneryKind, buffer: &mut ViewBuffer) {
    for scenery in level.scenery.iter().filter(|s| s.kind == kind) {
        let body = &scenery.body;
        buffer.push(SpriteInstance {
            x: body.position.x + body.origin.x,
            y: body.position.y + body.origin.y,
            w: scenery.span() * body.scale.x,
            h: body.dimension.y * body.scale.y,
            rotation: body.rotation,
            sprite: match kind {
                SceneryKind::Backdrop => SpriteKey::Backdrop.index(),
                SceneryKind::SpikeStrip => SpriteKey::SpikeStrip.index(),
            },
            ..SpriteInstance::default()
        });
    }
}
