pub mod playlist;

pub use playlist::{PlaylistView, SongGrid};
