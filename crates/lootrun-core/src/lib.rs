//! Headless simulation core for a side-scrolling coin-run platformer.
//!
//! The crate owns gameplay only: kinematics, the level decoder, the jump
//! state machine, collision response, and session rules. Hosts drive
//! [`World::update`] with sampled [`Intents`], drain [`WorldEvent`]s for
//! sound and UI, and read [`systems::view::ViewBuffer`] snapshots to draw.
//! Given the same bitmap, tuning, and intent sequence, a run is
//! deterministic.

pub mod camera;
pub mod config;
pub mod core;
pub mod entities;
pub mod events;
pub mod input;
pub mod level;
pub mod systems;
pub mod world;

// Re-export key types at crate root for convenience
pub use camera::ChaseCamera;
pub use config::{
    CameraTuning, CollisionTuning, GameOverPolicy, LevelTuning, PlayerTuning, Tuning, WorldTuning,
};
pub use core::body::Body;
pub use core::rect::Rect;
pub use core::time::FixedTimestep;
pub use entities::pickup::{Pickup, PickupKind};
pub use entities::platform::Platform;
pub use entities::player::{JumpState, Player, ViewDirection};
pub use entities::scenery::{Scenery, SceneryKind};
pub use events::WorldEvent;
pub use input::Intents;
pub use level::{Level, LevelBitmap, TileKind};
pub use systems::collision::resolve_collisions;
pub use systems::view::{build_view_buffer, SpriteInstance, SpriteKey, ViewBuffer};
pub use world::World;
