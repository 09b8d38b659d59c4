pub mod collision;
pub mod view;
