pub mod app;
pub mod controls;
pub mod gauge;
pub mod navbar;
pub mod player;
pub mod spinner;
