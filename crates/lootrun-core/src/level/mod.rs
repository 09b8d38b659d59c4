pub mod bitmap;
pub mod decode;

pub use bitmap::LevelBitmap;
pub use decode::TileKind;

use crate::config::Tuning;
use crate::entities::pickup::Pickup;
use crate::entities::platform::Platform;
use crate::entities::player::Player;
use crate::entities::scenery::Scenery;

/// Everything decoded from one level bitmap: static platforms, pickups, the
/// player, and non-colliding scenery.
///
/// A `Level` is cheap to rebuild; the world throws it away and re-decodes
/// the retained bitmap on every respawn instead of rewinding entity state.
#[derive(Debug, Clone)]
pub struct Level {
    pub platforms: Vec<Platform>,
    pub coins: Vec<Pickup>,
    pub powerups: Vec<Pickup>,
    pub scenery: Vec<Scenery>,
    /// Absent when the bitmap has no spawn pixel; the world then runs the
    /// static parts only.
    pub player: Option<Player>,
    width: u32,
    height: u32,
}

impl Level {
    /// Decode a bitmap into a fresh level. Never fails: pixels outside the
    /// authoring palette are reported and skipped by the scanner.
    pub fn from_bitmap(bitmap: &LevelBitmap, tuning: &Tuning) -> Self {
        let decoded = decode::decode(bitmap, tuning);
        if decoded.player.is_none() {
            log::warn!("level has no spawn pixel; running without a player");
        }
        let level = Self {
            platforms: decoded.platforms,
            coins: decoded.coins,
            powerups: decoded.powerups,
            scenery: vec![
                Scenery::backdrop(bitmap.width()),
                Scenery::spike_strip(bitmap.width()),
            ],
            player: decoded.player,
            width: bitmap.width(),
            height: bitmap.height(),
        };
        log::debug!(
            "level decoded: {} platforms, {} coins, {} powerups",
            level.platforms.len(),
            level.coins.len(),
            level.powerups.len()
        );
        level
    }

    /// Advance every entity by one motion step. Collision response runs
    /// separately, after this.
    pub fn update(&mut self, dt: f32) {
        if let Some(player) = self.player.as_mut() {
            player.update(dt);
        }
        for platform in &mut self.platforms {
            platform.body.update(dt);
        }
        for coin in &mut self.coins {
            coin.body.update(dt);
        }
        for powerup in &mut self.powerups {
            powerup.body.update(dt);
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Coins still on the field.
    pub fn coins_remaining(&self) -> usize {
        self.coins.iter().filter(|c| !c.collected).count()
    }
}

/// Paint a bitmap from ascii art rows: `#` platform, `S` spawn, `o` coin,
/// `*` powerup, `?` off-palette, anything else empty.
#[cfg(test)]
pub(crate) fn bitmap_from_ascii(rows: &[&str]) -> LevelBitmap {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for row in rows {
        assert_eq!(row.len() as u32, width, "ragged ascii bitmap");
        for ch in row.chars() {
            let rgba: [u8; 4] = match ch {
                '#' => [255, 255, 255, 255],
                'S' => [0, 255, 0, 255],
                'o' => [255, 255, 0, 255],
                '*' => [255, 0, 255, 255],
                '?' => [123, 45, 67, 255],
                _ => [0, 0, 0, 255],
            };
            data.extend_from_slice(&rgba);
        }
    }
    LevelBitmap::from_raw(width, height, data)
}
