use crate::camera::ChaseCamera;
use crate::config::{GameOverPolicy, Tuning};
use crate::events::WorldEvent;
use crate::input::Intents;
use crate::level::{Level, LevelBitmap};
use crate::systems::collision::resolve_collisions;

/// The complete simulation session: the current level, lives and score,
/// the chase camera, and the game-over countdown.
///
/// One `update` is one simulation step, in a fixed order: intents, motion,
/// collisions, camera, death check, HUD smoothing. The source bitmap is
/// retained so every respawn decodes the identical level.
pub struct World {
    tuning: Tuning,
    bitmap: LevelBitmap,
    level: Level,
    camera: ChaseCamera,
    lives: i32,
    score: i32,
    lives_visual: f32,
    score_visual: f32,
    time_left_game_over: f32,
    session_ended: bool,
    events: Vec<WorldEvent>,
}

impl World {
    pub fn new(bitmap: LevelBitmap, tuning: Tuning) -> Self {
        let mut world = Self {
            level: Level::from_bitmap(&bitmap, &tuning),
            camera: ChaseCamera::new(&tuning.camera),
            lives: tuning.world.starting_lives,
            lives_visual: tuning.world.starting_lives as f32,
            score: 0,
            score_visual: 0.0,
            time_left_game_over: 0.0,
            session_ended: false,
            events: Vec::new(),
            bitmap,
            tuning,
        };
        world.snap_camera_to_player();
        world.events.push(WorldEvent::LevelLoaded);
        world
    }

    /// Advance the session by `dt` seconds under the given player intents.
    pub fn update(&mut self, dt: f32, intents: &Intents) {
        if intents.reset_requested {
            log::debug!("session restart requested");
            self.restart();
        }

        if self.is_game_over() {
            // The playfield holds still on the game-over screen; only the
            // countdown and the HUD smoothing keep moving.
            self.update_game_over(dt);
        } else {
            self.apply_intents(intents);
            let had_powerup = self.player_has_powerup();
            self.level.update(dt);
            resolve_collisions(
                &mut self.level,
                &self.tuning.collision,
                &mut self.score,
                &mut self.events,
            );
            if had_powerup && !self.player_has_powerup() {
                self.events.push(WorldEvent::PowerupExpired);
            }
            if let Some(player) = self.level.player.as_ref() {
                self.camera
                    .follow(player.body.position + player.body.origin, dt);
            }
            if self.player_fell_out() {
                self.on_player_death();
            }
        }

        self.update_visuals(dt);
    }

    /// Start the session over: fresh lives, fresh level, camera on spawn.
    pub fn restart(&mut self) {
        self.lives = self.tuning.world.starting_lives;
        self.lives_visual = self.lives as f32;
        self.time_left_game_over = 0.0;
        self.session_ended = false;
        self.camera = ChaseCamera::new(&self.tuning.camera);
        self.reload_level();
    }

    /// Take all events queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_game_over(&self) -> bool {
        self.lives < 0
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Lives as shown by the HUD, trailing the real count on the way down.
    pub fn lives_visual(&self) -> f32 {
        self.lives_visual
    }

    /// Score as shown by the HUD, counting up toward the real total.
    pub fn score_visual(&self) -> f32 {
        self.score_visual
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn camera(&self) -> &ChaseCamera {
        &self.camera
    }

    /// Host-side camera control, e.g. pinch or wheel zoom.
    pub fn camera_mut(&mut self) -> &mut ChaseCamera {
        &mut self.camera
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    fn apply_intents(&mut self, intents: &Intents) {
        let Some(player) = self.level.player.as_mut() else {
            return;
        };
        if intents.move_left {
            player.body.velocity.x = -player.body.terminal_velocity.x;
        } else if intents.move_right {
            player.body.velocity.x = player.body.terminal_velocity.x;
        }
        player.set_jumping(intents.jump_held);
    }

    fn update_game_over(&mut self, dt: f32) {
        self.time_left_game_over -= dt;
        if self.time_left_game_over < 0.0 && !self.session_ended {
            match self.tuning.world.game_over_policy {
                GameOverPolicy::ReturnToMenu => {
                    self.session_ended = true;
                    self.events.push(WorldEvent::ReturnToMenu);
                    log::info!("game over; handing control back to the host");
                }
                GameOverPolicy::RestartWorld => {
                    log::info!("game over; restarting the session");
                    self.restart();
                }
            }
        }
    }

    fn on_player_death(&mut self) {
        self.lives -= 1;
        self.events.push(WorldEvent::LifeLost {
            lives_left: self.lives,
        });
        if self.is_game_over() {
            self.time_left_game_over = self.tuning.world.game_over_delay;
            self.events.push(WorldEvent::GameOver);
            log::info!("game over: final score {}", self.score);
        } else {
            log::info!("life lost, {} remaining", self.lives);
            self.reload_level();
        }
    }

    /// Decode the retained bitmap into a fresh level and zero the level
    /// score. Used for the initial load, respawns, and restarts.
    fn reload_level(&mut self) {
        self.score = 0;
        self.score_visual = 0.0;
        self.level = Level::from_bitmap(&self.bitmap, &self.tuning);
        self.snap_camera_to_player();
        self.events.push(WorldEvent::LevelLoaded);
    }

    fn snap_camera_to_player(&mut self) {
        if let Some(player) = self.level.player.as_ref() {
            self.camera.snap_to(player.body.position + player.body.origin);
        }
    }

    fn player_has_powerup(&self) -> bool {
        self.level.player.as_ref().map_or(false, |p| p.has_powerup())
    }

    fn player_fell_out(&self) -> bool {
        self.level
            .player
            .as_ref()
            .map_or(false, |p| p.body.position.y < self.tuning.world.death_line_y)
    }

    fn update_visuals(&mut self, dt: f32) {
        let lives = self.lives as f32;
        if self.lives_visual > lives {
            self.lives_visual =
                lives.max(self.lives_visual - self.tuning.world.lives_visual_rate * dt);
        }
        let score = self.score as f32;
        if self.score_visual < score {
            self.score_visual =
                score.min(self.score_visual + self.tuning.world.score_visual_rate * dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::player::JumpState;
    use crate::level::bitmap_from_ascii;

    const DT: f32 = 1.0 / 60.0;

    fn world_from(rows: &[&str]) -> World {
        World::new(bitmap_from_ascii(rows), Tuning::default())
    }

    /// Spawn over a wide platform; the player lands after a short fall.
    fn grounded_world() -> World {
        let mut world = world_from(&["S....", ".....", "#####"]);
        for _ in 0..120 {
            world.update(DT, &Intents::none());
        }
        assert_eq!(
            world.level().player.as_ref().unwrap().jump_state,
            JumpState::Grounded
        );
        world
    }

    fn step_until_death(world: &mut World, max_steps: u32) -> Vec<WorldEvent> {
        let mut seen = Vec::new();
        for _ in 0..max_steps {
            world.update(0.05, &Intents::none());
            seen.extend(world.drain_events());
            if seen
                .iter()
                .any(|e| matches!(e, WorldEvent::LifeLost { .. }))
            {
                return seen;
            }
        }
        panic!("player never fell out within {max_steps} steps");
    }

    #[test]
    fn new_world_announces_the_initial_level() {
        let mut world = world_from(&["S"]);
        assert_eq!(world.lives(), 3);
        assert_eq!(world.score(), 0);
        assert!(!world.is_game_over());
        assert_eq!(world.drain_events(), vec![WorldEvent::LevelLoaded]);
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn player_settles_onto_the_platform_and_holds() {
        let mut world = grounded_world();
        let y = world.level().player.as_ref().unwrap().body.position.y;
        for _ in 0..60 {
            world.update(DT, &Intents::none());
        }
        let player = world.level().player.as_ref().unwrap();
        assert_eq!(player.body.position.y, y);
        assert_eq!(player.jump_state, JumpState::Grounded);
    }

    #[test]
    fn jump_rises_then_returns_to_the_ground() {
        let mut world = grounded_world();
        let rest_y = world.level().player.as_ref().unwrap().body.position.y;
        world.update(DT, &Intents::none().with_jump());
        let rising = world.level().player.as_ref().unwrap();
        assert_eq!(rising.jump_state, JumpState::JumpRising);
        assert!(rising.body.position.y > rest_y);

        let mut landed = false;
        for _ in 0..300 {
            world.update(DT, &Intents::none());
            if world.level().player.as_ref().unwrap().jump_state == JumpState::Grounded {
                landed = true;
                break;
            }
        }
        assert!(landed, "jump never came back down");
        let player = world.level().player.as_ref().unwrap();
        assert!((player.body.position.y - rest_y).abs() < 1e-4);
    }

    #[test]
    fn walking_right_hits_terminal_speed_and_friction_stops_it() {
        let mut world = grounded_world();
        world.update(DT, &Intents::right());
        let player = world.level().player.as_ref().unwrap();
        let terminal_x = player.body.terminal_velocity.x;
        assert!(player.body.velocity.x > 0.0);
        assert!(player.body.velocity.x <= terminal_x);
        let x_before_stop = player.body.position.x;

        for _ in 0..60 {
            world.update(DT, &Intents::none());
        }
        let player = world.level().player.as_ref().unwrap();
        assert_eq!(player.body.velocity.x, 0.0);
        assert!(player.body.position.x > x_before_stop);
    }

    #[test]
    fn camera_tracks_the_player_center() {
        let mut world = grounded_world();
        for _ in 0..30 {
            world.update(DT, &Intents::right());
        }
        let player = world.level().player.as_ref().unwrap();
        let expected = player.body.position + player.body.origin;
        assert_eq!(world.camera().position(), expected);
    }

    #[test]
    fn falling_below_the_death_line_respawns_with_one_less_life() {
        let mut world = world_from(&["S"]);
        world.drain_events();
        let events = step_until_death(&mut world, 200);
        assert!(events.contains(&WorldEvent::LifeLost { lives_left: 2 }));
        assert!(events.contains(&WorldEvent::LevelLoaded));
        assert_eq!(world.lives(), 2);
        assert!(!world.is_game_over());
        // Respawned at the spawn point, not where the player died.
        let player = world.level().player.as_ref().unwrap();
        assert!(player.body.position.y > world.tuning().world.death_line_y);
    }

    #[test]
    fn death_zeroes_the_score_for_the_fresh_level() {
        let mut world = world_from(&["S"]);
        world.score = 700;
        world.score_visual = 700.0;
        step_until_death(&mut world, 200);
        assert_eq!(world.score(), 0);
        assert_eq!(world.score_visual(), 0.0);
    }

    #[test]
    fn last_death_starts_the_game_over_countdown_without_a_respawn() {
        let mut world = World::new(
            bitmap_from_ascii(&["S"]),
            Tuning::from_json(r#"{ "world": { "starting_lives": 0 } }"#).unwrap(),
        );
        world.drain_events();
        let events = step_until_death(&mut world, 200);
        assert!(events.contains(&WorldEvent::LifeLost { lives_left: -1 }));
        assert!(events.contains(&WorldEvent::GameOver));
        assert!(!events.contains(&WorldEvent::LevelLoaded));
        assert!(world.is_game_over());
        // Still where it died: no respawn happened.
        let player = world.level().player.as_ref().unwrap();
        assert!(player.body.position.y < world.tuning().world.death_line_y);
    }

    #[test]
    fn the_playfield_freezes_during_the_game_over_delay() {
        let mut world = World::new(
            bitmap_from_ascii(&["S"]),
            Tuning::from_json(r#"{ "world": { "starting_lives": 0 } }"#).unwrap(),
        );
        step_until_death(&mut world, 200);
        let frozen_y = world.level().player.as_ref().unwrap().body.position.y;
        world.update(1.0, &Intents::right().with_jump());
        assert_eq!(
            world.level().player.as_ref().unwrap().body.position.y,
            frozen_y
        );
        assert!(world.is_game_over());
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn menu_hand_off_fires_once_after_the_delay() {
        let mut world = World::new(
            bitmap_from_ascii(&["S"]),
            Tuning::from_json(r#"{ "world": { "starting_lives": 0 } }"#).unwrap(),
        );
        step_until_death(&mut world, 200);
        let delay = world.tuning().world.game_over_delay;

        world.update(delay - 0.1, &Intents::none());
        assert!(world.drain_events().is_empty());

        world.update(0.2, &Intents::none());
        assert_eq!(world.drain_events(), vec![WorldEvent::ReturnToMenu]);

        world.update(1.0, &Intents::none());
        assert!(world.drain_events().is_empty());
        assert!(world.is_game_over());
    }

    #[test]
    fn restart_policy_begins_a_new_session_after_the_delay() {
        let mut world = World::new(
            bitmap_from_ascii(&["S"]),
            Tuning::from_json(
                r#"{ "world": { "starting_lives": 1, "game_over_policy": "restart_world" } }"#,
            )
            .unwrap(),
        );
        step_until_death(&mut world, 200); // lives 1 -> 0, respawn
        step_until_death(&mut world, 200); // lives 0 -> -1, game over
        assert!(world.is_game_over());

        let mut restarted = false;
        for _ in 0..100 {
            world.update(0.1, &Intents::none());
            if !world.is_game_over() {
                restarted = true;
                break;
            }
        }
        assert!(restarted, "restart policy never restarted the session");
        assert_eq!(world.lives(), 1);
        assert!(world.drain_events().contains(&WorldEvent::LevelLoaded));
    }

    #[test]
    fn reset_request_restarts_on_the_spot() {
        let mut world = world_from(&["S"]);
        world.score = 500;
        world.lives = 1;
        world.update(
            DT,
            &Intents {
                reset_requested: true,
                ..Intents::default()
            },
        );
        assert_eq!(world.lives(), 3);
        assert_eq!(world.score(), 0);
        assert!(world.drain_events().contains(&WorldEvent::LevelLoaded));
    }

    #[test]
    fn hud_lives_drift_down_at_the_configured_rate() {
        let mut world = grounded_world();
        world.lives = 2;
        for _ in 0..30 {
            world.update(DT, &Intents::none());
        }
        assert!((world.lives_visual() - 2.5).abs() < 1e-3);
        for _ in 0..120 {
            world.update(DT, &Intents::none());
        }
        assert_eq!(world.lives_visual(), 2.0);
    }

    #[test]
    fn hud_score_climbs_toward_the_real_total() {
        let mut world = grounded_world();
        world.score = 1000;
        for _ in 0..60 {
            world.update(DT, &Intents::none());
        }
        assert!((world.score_visual() - 250.0).abs() < 1.0);
        for _ in 0..240 {
            world.update(DT, &Intents::none());
        }
        assert_eq!(world.score_visual(), 1000.0);
    }

    #[test]
    fn powerup_expiry_surfaces_as_an_event() {
        let mut world = World::new(
            bitmap_from_ascii(&["S"]),
            Tuning::from_json(r#"{ "player": { "powerup_duration": 0.05 } }"#).unwrap(),
        );
        world.level.player.as_mut().unwrap().arm_powerup();
        world.update(0.1, &Intents::none());
        assert!(world.drain_events().contains(&WorldEvent::PowerupExpired));
    }

    #[test]
    fn a_level_without_a_spawn_keeps_running_quietly() {
        let mut world = world_from(&["##"]);
        world.drain_events();
        for _ in 0..100 {
            world.update(0.1, &Intents::right().with_jump());
        }
        assert_eq!(world.lives(), 3);
        assert!(world.drain_events().is_empty());
    }
}
