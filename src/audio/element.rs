use std::time::Duration;

use crate::audio::error::AudioError;

/// The media element the player drives: one source at a time, loaded
/// asynchronously.
///
/// `load` returns a generation number. The element later reports
/// `Event::SourceReady`, `Event::SourceFailed` and `Event::TrackEnded` tagged
/// with that generation, so the player can drop notifications that belong to
/// a source it has already replaced.
pub trait AudioElement {
    fn load(&mut self, url: &str) -> u64;
    fn play(&mut self);
    fn pause(&mut self);
    fn current_time(&self) -> Duration;
    /// `None` until the source is decoded, or when the container has no length.
    fn duration(&self) -> Option<Duration>;
    fn seek(&mut self, position: Duration) -> Result<(), AudioError>;
    fn set_volume(&mut self, volume: f32);
}
