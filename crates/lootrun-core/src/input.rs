/// Player intent sampled by the host for one simulation step.
///
/// The world never reads devices. Whatever the host maps keys, touch zones,
/// or a replay track onto these flags is what the step sees; feeding a
/// recorded sequence reproduces a run exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intents {
    pub move_left: bool,
    pub move_right: bool,
    /// True while the jump key is held, not just on the press edge.
    pub jump_held: bool,
    /// One-shot request to restart the session.
    pub reset_requested: bool,
}

impl Intents {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn right() -> Self {
        Self {
            move_right: true,
            ..Self::default()
        }
    }

    pub fn left() -> Self {
        Self {
            move_left: true,
            ..Self::default()
        }
    }

    pub fn with_jump(mut self) -> Self {
        self.jump_held = true;
        self
    }
}
