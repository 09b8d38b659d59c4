pub mod pickup;
pub mod platform;
pub mod player;
pub mod scenery;
