use crate::http::model::Song;

/// Messages sent from background tasks to the event loop.
#[derive(Debug, Clone)]
pub enum Event {
    SongsFetched(Vec<Song>),
    FetchError(String),

    /// The audio element finished loading the source of the given load generation.
    SourceReady(u64),
    SourceFailed(u64, String),
    TrackEnded(u64),

    /// Emitted by the polling task.
    ProgressTick,
}
