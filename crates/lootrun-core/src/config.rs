use serde::{Deserialize, Serialize};

/// Every gameplay number the simulation consumes, grouped by subsystem.
/// Loaded from JSON at startup; any omitted field falls back to the shipped
/// default, so a tuning file only has to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub collision: CollisionTuning,
    pub level: LevelTuning,
    pub camera: CameraTuning,
    pub world: WorldTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player: PlayerTuning::default(),
            collision: CollisionTuning::default(),
            level: LevelTuning::default(),
            camera: CameraTuning::default(),
            world: WorldTuning::default(),
        }
    }
}

impl Tuning {
    /// Parse a tuning file from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Player kinematics and jump timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Per-axis speed cap, world units per second.
    pub terminal_velocity: [f32; 2],
    /// Per-axis deceleration toward zero. Zero on y: gravity is undamped.
    pub friction: [f32; 2],
    /// Constant acceleration, normally pure gravity.
    pub gravity: [f32; 2],
    /// Longest time the jump key can keep feeding upward velocity.
    pub jump_time_max: f32,
    /// Shortest airborne time that still receives upward velocity after an
    /// early key release.
    pub jump_time_min: f32,
    /// While the powerup is active, a held jump key re-arms the jump timer to
    /// `jump_time_max` minus this lead, so each step grants one short slice
    /// of lift. Sustained hold reads as flight.
    pub flight_rearm_lead: f32,
    /// Seconds of flight granted by one powerup pickup.
    pub powerup_duration: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            terminal_velocity: [3.0, 4.0],
            friction: [12.0, 0.0],
            gravity: [0.0, -25.0],
            jump_time_max: 0.6,
            jump_time_min: 0.2,
            flight_rearm_lead: 0.036,
            powerup_duration: 9.0,
        }
    }
}

/// Contact classification knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionTuning {
    /// A platform overlap whose player-to-platform-top height difference
    /// exceeds this is a side hit (horizontal push-out); at or below it the
    /// contact resolves vertically.
    pub side_hit_threshold: f32,
}

impl Default for CollisionTuning {
    fn default() -> Self {
        Self {
            side_hit_threshold: 0.25,
        }
    }
}

/// Vertical placement rules applied while decoding a level bitmap.
/// Each entity lands at `base_height * dimension.y * factor + offset`, where
/// `base_height` counts pixel rows up from the bitmap's bottom edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelTuning {
    /// Height factor for platforms; everything else uses a factor of one.
    pub platform_height_factor: f32,
    pub platform_y_offset: f32,
    pub spawn_y_offset: f32,
    /// Shared by coins and powerups.
    pub item_y_offset: f32,
}

impl Default for LevelTuning {
    fn default() -> Self {
        Self {
            platform_height_factor: 0.25,
            platform_y_offset: -2.5,
            spawn_y_offset: -3.0,
            item_y_offset: -1.5,
        }
    }
}

/// Chase camera limits and feel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// 0.0 snaps to the target every step; toward 1.0 the camera trails it.
    pub follow_smoothing: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            zoom_min: 0.25,
            zoom_max: 10.0,
            follow_smoothing: 0.0,
        }
    }
}

/// Session rules: lives, death, game over, HUD smoothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    pub starting_lives: i32,
    /// Falling below this world-space height costs a life.
    pub death_line_y: f32,
    /// Seconds the game-over screen holds before the policy action fires.
    pub game_over_delay: f32,
    pub game_over_policy: GameOverPolicy,
    /// Displayed lives drift toward the real count at this rate per second.
    pub lives_visual_rate: f32,
    /// Displayed score climbs toward the real score at this rate per second.
    pub score_visual_rate: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            death_line_y: -5.0,
            game_over_delay: 3.0,
            game_over_policy: GameOverPolicy::ReturnToMenu,
            lives_visual_rate: 1.0,
            score_visual_rate: 250.0,
        }
    }
}

/// What the world does once the game-over delay runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverPolicy {
    /// Emit a single hand-off event and hold; the host owns what comes next.
    ReturnToMenu,
    /// Restart the session in place with fresh lives.
    RestartWorld,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_gameplay_numbers() {
        let t = Tuning::default();
        assert_eq!(t.player.terminal_velocity, [3.0, 4.0]);
        assert_eq!(t.player.gravity, [0.0, -25.0]);
        assert_eq!(t.collision.side_hit_threshold, 0.25);
        assert_eq!(t.world.starting_lives, 3);
        assert_eq!(t.world.game_over_policy, GameOverPolicy::ReturnToMenu);
    }

    #[test]
    fn empty_json_yields_defaults() {
        let t = Tuning::from_json("{}").unwrap();
        assert_eq!(t, Tuning::default());
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let t = Tuning::from_json(
            r#"{
                "player": { "jump_time_max": 0.8 },
                "world": { "starting_lives": 5, "game_over_policy": "restart_world" }
            }"#,
        )
        .unwrap();
        assert_eq!(t.player.jump_time_max, 0.8);
        assert_eq!(t.player.jump_time_min, 0.2);
        assert_eq!(t.world.starting_lives, 5);
        assert_eq!(t.world.game_over_policy, GameOverPolicy::RestartWorld);
        assert_eq!(t.level, LevelTuning::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Tuning::from_json("{ player: ").is_err());
    }
}
