use crate::config::Tuning;
use crate::entities::pickup::Pickup;
use crate::entities::platform::Platform;
use crate::entities::player::Player;
use crate::level::bitmap::LevelBitmap;

/// What a single authoring pixel means. Colors are matched exactly, alpha
/// included; anything else is reported and skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Empty,
    Platform,
    Spawn,
    Powerup,
    Coin,
}

impl TileKind {
    /// `None` means the color is not part of the authoring palette.
    pub fn classify(rgba: [u8; 4]) -> Option<TileKind> {
        let [r, g, b, a] = rgba;
        if a != 255 {
            return None;
        }
        match [r, g, b] {
            [0, 0, 0] => Some(TileKind::Empty),
            [255, 255, 255] => Some(TileKind::Platform),
            [0, 255, 0] => Some(TileKind::Spawn),
            [255, 0, 255] => Some(TileKind::Powerup),
            [255, 255, 0] => Some(TileKind::Coin),
            _ => None,
        }
    }
}

/// Entities produced by one scan of a level bitmap.
pub(crate) struct DecodedEntities {
    pub platforms: Vec<Platform>,
    pub coins: Vec<Pickup>,
    pub powerups: Vec<Pickup>,
    pub player: Option<Player>,
}

/// Scan the bitmap row-major from the top-left and instantiate entities.
///
/// Horizontally adjacent platform pixels merge into one platform run. The
/// merge marker is only reset by a non-platform pixel, never by the end of
/// a row, so a run can continue from the last column into the first column
/// of the next row; existing levels are drawn with that in mind.
pub(crate) fn decode(bitmap: &LevelBitmap, tuning: &Tuning) -> DecodedEntities {
    let mut decoded = DecodedEntities {
        platforms: Vec::new(),
        coins: Vec::new(),
        powerups: Vec::new(),
        player: None,
    };
    let mut last_kind = TileKind::Empty;

    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            // Height in rows measured from the bottom edge of the bitmap.
            let base_height = (bitmap.height() - y) as f32;
            let rgba = bitmap.pixel(x, y);
            let kind = match TileKind::classify(rgba) {
                Some(kind) => kind,
                None => {
                    let [r, g, b, a] = rgba;
                    log::warn!(
                        "ignoring unknown level pixel at ({x}, {y}): rgba({r}, {g}, {b}, {a})"
                    );
                    last_kind = TileKind::Empty;
                    continue;
                }
            };

            match kind {
                TileKind::Empty => {}
                TileKind::Platform => {
                    if last_kind == TileKind::Platform {
                        if let Some(run) = decoded.platforms.last_mut() {
                            run.extend(1);
                        }
                    } else {
                        let mut platform = Platform::new();
                        platform.body.position.x = x as f32;
                        platform.body.position.y = base_height
                            * platform.body.dimension.y
                            * tuning.level.platform_height_factor
                            + tuning.level.platform_y_offset;
                        decoded.platforms.push(platform);
                    }
                }
                TileKind::Spawn => {
                    let mut player = Player::new(&tuning.player);
                    player.body.position.x = x as f32;
                    player.body.position.y =
                        base_height * player.body.dimension.y + tuning.level.spawn_y_offset;
                    if decoded.player.is_some() {
                        log::debug!("spawn point replaced by pixel at ({x}, {y})");
                    }
                    decoded.player = Some(player);
                }
                TileKind::Coin => {
                    let mut coin = Pickup::coin();
                    coin.body.position.x = x as f32;
                    coin.body.position.y =
                        base_height * coin.body.dimension.y + tuning.level.item_y_offset;
                    decoded.coins.push(coin);
                }
                TileKind::Powerup => {
                    let mut powerup = Pickup::powerup();
                    powerup.body.position.x = x as f32;
                    powerup.body.position.y =
                        base_height * powerup.body.dimension.y + tuning.level.item_y_offset;
                    decoded.powerups.push(powerup);
                }
            }
            last_kind = kind;
        }
    }
    decoded
}
