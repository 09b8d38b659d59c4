use crate::config::CollisionTuning;
use crate::entities::platform::Platform;
use crate::entities::player::{JumpState, Player};
use crate::events::WorldEvent;
use crate::level::Level;

/// One collision pass, run directly after the motion step.
///
/// Platforms are tested first and every platform is visited, so a push-out
/// from one platform still gets edge-checked against its neighbours. Items
/// come after, against the settled player position; every overlapping
/// uncollected item is taken in the same pass, one event per item. Score
/// and gameplay events accumulate into the caller's state.
pub fn resolve_collisions(
    level: &mut Level,
    tuning: &CollisionTuning,
    score: &mut i32,
    events: &mut Vec<WorldEvent>,
) {
    let Some(player) = level.player.as_mut() else {
        return;
    };

    for platform in &level.platforms {
        resolve_platform_contact(player, platform, tuning);
    }

    let player_rect = player.body.world_bounds();
    for coin in &mut level.coins {
        if coin.collected || !player_rect.overlaps(&coin.body.world_bounds()) {
            continue;
        }
        coin.collected = true;
        let value = coin.score_value();
        *score += value;
        events.push(WorldEvent::CoinCollected { score: value });
        log::info!("coin collected");
    }
    for powerup in &mut level.powerups {
        if powerup.collected || !player_rect.overlaps(&powerup.body.world_bounds()) {
            continue;
        }
        powerup.collected = true;
        let value = powerup.score_value();
        *score += value;
        player.arm_powerup();
        events.push(WorldEvent::PowerupCollected { score: value });
        log::info!("powerup collected");
    }
}

/// Classify and resolve one player/platform overlap.
///
/// The vertical distance between the player origin and the platform top
/// decides the kind of contact: past the threshold it is a side hit and the
/// player is pushed out horizontally, otherwise the player is snapped flush
/// onto the platform top. Only a downward-moving player gets grounded; a
/// rising player keeps its jump state and continues upward next step.
fn resolve_platform_contact(player: &mut Player, platform: &Platform, tuning: &CollisionTuning) {
    let player_rect = player.body.world_bounds();
    let platform_rect = platform.body.world_bounds();
    if !player_rect.overlaps(&platform_rect) {
        return;
    }

    let height_difference = (player.body.position.y - platform.top()).abs();
    if height_difference > tuning.side_hit_threshold {
        let hit_right_edge = player.body.position.x > platform_rect.center_x();
        if hit_right_edge {
            player.body.position.x = platform.body.position.x + platform.body.bounds.w;
        } else {
            player.body.position.x = platform.body.position.x - player.body.bounds.w;
        }
        return;
    }

    match player.jump_state {
        JumpState::Grounded => {}
        JumpState::Falling | JumpState::JumpFalling => {
            player.body.position.y =
                platform.body.position.y + player.body.bounds.h + player.body.origin.y;
            player.jump_state = JumpState::Grounded;
        }
        JumpState::JumpRising => {
            player.body.position.y =
                platform.body.position.y + player.body.bounds.h + player.body.origin.y;
        }
    }
}
