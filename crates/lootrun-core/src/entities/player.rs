use glam::Vec2;

use crate::config::PlayerTuning;
use crate::core::body::Body;
use crate::core::rect::Rect;

const PLAYER_SIZE: Vec2 = Vec2::new(1.0, 1.0);

/// Facing, derived from the sign of the horizontal velocity. Render-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewDirection {
    Left,
    Right,
}

/// Vertical contact/jump state.
///
/// `Grounded` is only ever entered by the collision pass landing the player
/// on a platform; the motion step immediately demotes it to `Falling`, so a
/// player standing on a platform cycles Grounded -> Falling -> Grounded
/// every step and walking off an edge needs no extra logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpState {
    Grounded,
    Falling,
    JumpRising,
    JumpFalling,
}

/// The player avatar: a kinematic body plus the jump state machine and the
/// flight powerup timer.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub view_direction: ViewDirection,
    pub jump_state: JumpState,
    /// Seconds since the current jump started. While the powerup re-arms the
    /// jump, this sits just under the rise cap instead of restarting at zero.
    pub time_jumping: f32,
    has_powerup: bool,
    time_left_powerup: f32,
    tuning: PlayerTuning,
}

impl Player {
    pub fn new(tuning: &PlayerTuning) -> Self {
        let mut body = Body::new();
        body.dimension = PLAYER_SIZE;
        body.origin = PLAYER_SIZE / 2.0;
        body.bounds = Rect::new(0.0, 0.0, PLAYER_SIZE.x, PLAYER_SIZE.y);
        body.terminal_velocity = Vec2::from(tuning.terminal_velocity);
        body.friction = Vec2::from(tuning.friction);
        body.acceleration = Vec2::from(tuning.gravity);
        Self {
            body,
            view_direction: ViewDirection::Right,
            jump_state: JumpState::Falling,
            time_jumping: 0.0,
            has_powerup: false,
            time_left_powerup: 0.0,
            tuning: tuning.clone(),
        }
    }

    /// Feed the jump key state for this step, before the motion update.
    ///
    /// Held key: starts a jump from the ground, keeps a rise going, and with
    /// the powerup active re-arms the jump timer mid-air so the rise never
    /// runs out. Released key: cuts a rise over to `JumpFalling`, where only
    /// the minimum-jump window still feeds lift.
    pub fn set_jumping(&mut self, jump_held: bool) {
        match self.jump_state {
            JumpState::Grounded => {
                if jump_held {
                    self.time_jumping = 0.0;
                    self.jump_state = JumpState::JumpRising;
                }
            }
            JumpState::JumpRising => {
                if !jump_held {
                    self.jump_state = JumpState::JumpFalling;
                } else if self.has_powerup {
                    self.time_jumping = self.flight_rearm_time();
                }
            }
            JumpState::Falling | JumpState::JumpFalling => {
                if jump_held && self.has_powerup {
                    self.time_jumping = self.flight_rearm_time();
                    self.jump_state = JumpState::JumpRising;
                }
            }
        }
    }

    /// Activate the flight powerup and start its timer over.
    pub fn arm_powerup(&mut self) {
        self.has_powerup = true;
        self.time_left_powerup = self.tuning.powerup_duration;
    }

    pub fn has_powerup(&self) -> bool {
        self.has_powerup
    }

    pub fn time_left_powerup(&self) -> f32 {
        self.time_left_powerup
    }

    /// One simulation step: motion, then facing, then the powerup countdown.
    pub fn update(&mut self, dt: f32) {
        self.body.update_velocity_x(dt);
        self.update_motion_y(dt);
        self.body.position += self.body.velocity * dt;

        if self.body.velocity.x != 0.0 {
            self.view_direction = if self.body.velocity.x < 0.0 {
                ViewDirection::Left
            } else {
                ViewDirection::Right
            };
        }

        if self.time_left_powerup > 0.0 {
            self.time_left_powerup -= dt;
            if self.time_left_powerup <= 0.0 {
                // Expire cleanly even when the countdown lands on zero, so
                // the flag can never outlive the timer.
                self.time_left_powerup = 0.0;
                self.has_powerup = false;
            }
        }
    }

    /// Vertical velocity step, gated by the jump state machine.
    ///
    /// A rise pins the vertical velocity to the terminal speed while its
    /// window is open; gravity applies afterwards in all airborne states, so
    /// the final speed still feels the clamp each step.
    fn update_motion_y(&mut self, dt: f32) {
        match self.jump_state {
            JumpState::Grounded => {
                // Contact is re-proven by the collision pass each step.
                self.jump_state = JumpState::Falling;
            }
            JumpState::JumpRising => {
                self.time_jumping += dt;
                if self.time_jumping <= self.tuning.jump_time_max {
                    self.body.velocity.y = self.body.terminal_velocity.y;
                }
            }
            JumpState::Falling => {}
            JumpState::JumpFalling => {
                self.time_jumping += dt;
                if self.time_jumping > 0.0 && self.time_jumping <= self.tuning.jump_time_min {
                    self.body.velocity.y = self.body.terminal_velocity.y;
                }
            }
        }
        if self.jump_state != JumpState::Grounded {
            self.body.update_velocity_y(dt);
        }
    }

    fn flight_rearm_time(&self) -> f32 {
        self.tuning.jump_time_max - self.tuning.flight_rearm_lead
    }
}
