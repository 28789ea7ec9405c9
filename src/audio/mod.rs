pub mod element;
pub mod error;
pub mod playback;
pub mod player;
pub mod progress;
pub mod state;
pub mod util;
