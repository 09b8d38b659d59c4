pub mod body;
pub mod rect;
pub mod time;
