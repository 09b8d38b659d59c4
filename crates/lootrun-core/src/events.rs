/// Observable moments in a simulation step, queued on the world and drained
/// by the host after each update.
///
/// Sound, score popups, and screen transitions all hang off these; the core
/// itself has no audio or UI coupling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    /// A level was decoded and installed, either at startup or after a death
    /// respawn or restart.
    LevelLoaded,
    /// Coin picked up; `score` is the amount awarded, not the running total.
    CoinCollected { score: i32 },
    /// Powerup picked up and armed; `score` is the amount awarded.
    PowerupCollected { score: i32 },
    /// The powerup timer ran out this step.
    PowerupExpired,
    /// The player fell below the death line. `lives_left` is already
    /// decremented and is negative when this death ended the session.
    LifeLost { lives_left: i32 },
    /// Lives just went negative; the game-over delay starts now.
    GameOver,
    /// The game-over delay elapsed under the hand-off policy. Emitted once
    /// per session end; the world holds frozen afterwards.
    ReturnToMenu,
}
