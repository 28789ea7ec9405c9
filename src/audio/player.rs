use std::time::Duration;

use flume::Sender;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::{
    audio::{element::AudioElement, error::AudioError, progress, state::PlaybackState},
    config::PlayerSettings,
    event::events::Event,
    http::model::Song,
    util::task::TaskManager,
};

pub const TICKER_TASK: &str = "progress_ticker";

/// "Now playing" state for the song grid.
///
/// States are idle (no song), paused and playing. Every mutation happens on the
/// event loop; the only concurrent piece is the polling task, which just sends
/// [`Event::ProgressTick`] and is kept unique by [`TaskManager`].
pub struct Player<E: AudioElement> {
    element: E,
    event_tx: Sender<Event>,
    tasks: TaskManager,
    settings: PlayerSettings,

    current: Option<Song>,
    is_playing: bool,
    progress: f64,

    generation: Option<u64>,
    loading: bool,
    source_ready: bool,

    volume: u8,
    is_muted: bool,
}

impl<E: AudioElement> Player<E> {
    pub fn new(mut element: E, event_tx: Sender<Event>, settings: PlayerSettings) -> Self {
        let volume = settings.volume.min(100);
        element.set_volume(volume as f32 / 100.0);

        Self {
            element,
            event_tx,
            tasks: TaskManager::new(),
            settings,
            current: None,
            is_playing: false,
            progress: 0.0,
            generation: None,
            loading: false,
            source_ready: false,
            volume,
            is_muted: false,
        }
    }

    /// Makes `song` current and requests playback. Playback itself starts on
    /// [`Player::on_source_ready`], once the element has the new source.
    pub fn select(&mut self, song: Song) {
        self.stop_ticker();
        self.progress = 0.0;
        self.source_ready = false;

        match song.stream_url(self.settings.audio_quality_index) {
            Some(url) => {
                info!(id = song.id.as_str(), name = song.name.as_str(), "player_select");
                self.generation = Some(self.element.load(url));
                self.loading = true;
                self.is_playing = true;
            }
            None => {
                let e = AudioError::NoSource(song.id.clone());
                warn!(error = %e, "player_select_without_source");
                self.generation = None;
                self.loading = false;
                self.is_playing = false;
            }
        }

        self.current = Some(song);
    }

    pub fn on_source_ready(&mut self, generation: u64) {
        if !self.is_current(generation) {
            debug!(generation, "player_stale_source_ready");
            return;
        }

        self.loading = false;
        self.source_ready = true;
        if self.is_playing {
            self.element.play();
            self.start_ticker();
        }
    }

    pub fn on_source_failed(&mut self, generation: u64, reason: &str) {
        if !self.is_current(generation) {
            return;
        }

        error!(generation, reason, "player_source_failed");
        self.loading = false;
        self.source_ready = false;
        self.is_playing = false;
        self.progress = 0.0;
        self.stop_ticker();
    }

    /// Flips play/pause. No-op while idle.
    ///
    /// Resuming with nothing loaded or loading (failed load, finished track,
    /// song without a stream) reloads the current song from the start.
    pub fn toggle(&mut self) {
        if self.current.is_none() {
            return;
        }

        if self.is_playing {
            self.element.pause();
            self.stop_ticker();
            self.is_playing = false;
        } else if self.source_ready {
            self.element.play();
            self.start_ticker();
            self.is_playing = true;
        } else if self.loading {
            self.is_playing = true;
        } else if let Some(song) = self.current.clone() {
            self.select(song);
        }
    }

    pub fn on_tick(&mut self) {
        if !self.is_playing || !self.source_ready {
            return;
        }

        let current = self.element.current_time();
        let Some(duration) = self.element.duration().filter(|d| !d.is_zero()) else {
            return;
        };

        self.progress = progress::percent(current, Some(duration));

        if current >= duration {
            self.is_playing = false;
            self.source_ready = false;
            self.stop_ticker();
        }
    }

    /// Seeks to `fraction` of the total duration, `fraction` in `[0, 1]`.
    pub fn seek_fraction(&mut self, fraction: f64) {
        if self.current.is_none() {
            return;
        }

        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let duration = self.element.duration().unwrap_or(Duration::ZERO);
        self.seek_to(duration.mul_f64(fraction));
        self.progress = fraction * 100.0;
    }

    pub fn seek_forward(&mut self) {
        let step = Duration::from_secs(self.settings.seek_step_secs);
        let target = self.element.current_time().saturating_add(step);
        self.seek_clamped(target);
    }

    pub fn seek_backward(&mut self) {
        let step = Duration::from_secs(self.settings.seek_step_secs);
        let target = self.element.current_time().saturating_sub(step);
        self.seek_clamped(target);
    }

    fn seek_clamped(&mut self, target: Duration) {
        if self.current.is_none() || !self.source_ready {
            return;
        }
        let Some(duration) = self.element.duration() else {
            return;
        };

        let target = target.min(duration);
        self.seek_to(target);
        self.progress = progress::percent(target, Some(duration));
    }

    fn seek_to(&mut self, position: Duration) {
        if let Err(e) = self.element.seek(position) {
            warn!(error = %e, position_ms = position.as_millis() as u64, "player_seek_failed");
        }
    }

    pub fn on_ended(&mut self, generation: u64) {
        if !self.is_current(generation) {
            return;
        }

        info!(generation, "player_track_ended");
        self.is_playing = false;
        self.source_ready = false;
        self.progress = 0.0;
        self.stop_ticker();
    }

    pub fn volume_up(&mut self) {
        self.set_volume(self.volume.saturating_add(self.settings.volume_step));
    }

    pub fn volume_down(&mut self) {
        self.set_volume(self.volume.saturating_sub(self.settings.volume_step));
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
        self.is_muted = false;
        self.apply_volume();
    }

    pub fn toggle_mute(&mut self) {
        self.is_muted = !self.is_muted;
        self.apply_volume();
    }

    fn apply_volume(&mut self) {
        let volume = if self.is_muted {
            0.0
        } else {
            self.volume as f32 / 100.0
        };
        self.element.set_volume(volume);
    }

    /// Tears the player down: stops the poller and silences the element.
    pub fn shutdown(&mut self) {
        self.stop_ticker();
        if self.is_playing {
            self.element.pause();
            self.is_playing = false;
        }
    }

    fn start_ticker(&mut self) {
        let event_tx = self.event_tx.clone();
        let period = Duration::from_millis(self.settings.tick_interval_ms.max(1));

        self.tasks.spawn(
            TICKER_TASK,
            tokio::spawn(async move {
                let mut interval = tokio::time::interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    interval.tick().await;
                    if event_tx.send_async(Event::ProgressTick).await.is_err() {
                        break;
                    }
                }
            }),
        );
    }

    fn stop_ticker(&mut self) {
        self.tasks.abort(TICKER_TASK);
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation == Some(generation)
    }

    pub fn current(&self) -> Option<&Song> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn state(&self) -> PlaybackState {
        match (&self.current, self.is_playing) {
            (None, _) => PlaybackState::Idle,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        }
    }

    pub fn elapsed(&self) -> Duration {
        if self.source_ready {
            self.element.current_time()
        } else {
            Duration::ZERO
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        self.element.duration()
    }

    pub fn volume(&self) -> u8 {
        if self.is_muted { 0 } else { self.volume }
    }

    pub fn is_ticking(&self) -> bool {
        self.tasks.is_running(TICKER_TASK)
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    #[cfg(test)]
    pub(crate) fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }
}

#[cfg(test)]
mod tests;
