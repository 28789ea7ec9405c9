use std::{
    io::Cursor,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    time::Duration,
};

use arc_swap::ArcSwapOption;
use flume::Sender;
use reqwest::Client;
use rodio::{Decoder, OutputStream, Sink, Source};
use tracing::{error, info};

use crate::{
    audio::{
        element::AudioElement,
        error::AudioError,
        util::{codec_hint, open_output_stream},
    },
    event::events::Event,
    util::task::TaskManager,
};

const LOAD_TASK: &str = "source_load";
const MONITOR_TASK: &str = "end_monitor";
const MONITOR_PERIOD: Duration = Duration::from_millis(100);

type DecodedSource = Decoder<Cursor<Vec<u8>>>;

/// [`AudioElement`] backed by a rodio sink on the default output device.
///
/// Each `load` gets a fresh sink, so `get_pos` restarts at zero and the old
/// source is silenced when its sink is dropped.
pub struct RodioElement {
    stream: OutputStream,
    sink: Arc<ArcSwapOption<Sink>>,
    http: Client,
    event_tx: Sender<Event>,
    tasks: TaskManager,

    generation: Arc<AtomicU64>,
    duration_millis: Arc<AtomicU64>,
    armed: Arc<AtomicBool>,
    volume: f32,
}

impl RodioElement {
    pub fn new(http: Client, event_tx: Sender<Event>) -> Result<Self, AudioError> {
        let stream = open_output_stream()?;

        let mut element = Self {
            stream,
            sink: Arc::new(ArcSwapOption::empty()),
            http,
            event_tx,
            tasks: TaskManager::new(),
            generation: Arc::new(AtomicU64::new(0)),
            duration_millis: Arc::new(AtomicU64::new(0)),
            armed: Arc::new(AtomicBool::new(false)),
            volume: 1.0,
        };
        element.start_monitor();
        Ok(element)
    }

    /// Reports `TrackEnded` once an unpaused sink runs dry.
    fn start_monitor(&mut self) {
        let sink = self.sink.clone();
        let armed = self.armed.clone();
        let generation = self.generation.clone();
        let event_tx = self.event_tx.clone();

        self.tasks.spawn(
            MONITOR_TASK,
            tokio::spawn(async move {
                loop {
                    tokio::time::sleep(MONITOR_PERIOD).await;

                    if !armed.load(Ordering::Acquire) {
                        continue;
                    }
                    let drained = sink
                        .load()
                        .as_ref()
                        .is_some_and(|s| !s.is_paused() && s.empty());

                    if drained && armed.swap(false, Ordering::AcqRel) {
                        let generation = generation.load(Ordering::Acquire);
                        if event_tx.send(Event::TrackEnded(generation)).is_err() {
                            break;
                        }
                    }
                }
            }),
        );
    }

    async fn fetch(http: &Client, url: &str) -> Result<Vec<u8>, AudioError> {
        let response = http
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AudioError::NetworkError(e.to_string()))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AudioError::NetworkError(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    fn decode(bytes: Vec<u8>, hint: Option<String>) -> Result<DecodedSource, AudioError> {
        let byte_len = bytes.len() as u64;
        let mut builder = Decoder::builder()
            .with_data(Cursor::new(bytes))
            .with_byte_len(byte_len)
            .with_seekable(true)
            .with_coarse_seek(true);
        if let Some(hint) = hint.as_deref() {
            builder = builder.with_hint(hint);
        }
        builder
            .build()
            .map_err(|e| AudioError::DecodingError(e.to_string()))
    }

    fn current_sink(&self) -> Option<Arc<Sink>> {
        self.sink.load_full()
    }
}

impl AudioElement for RodioElement {
    fn load(&mut self, url: &str) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.armed.store(false, Ordering::Release);
        self.duration_millis.store(0, Ordering::Release);

        let sink = Arc::new(Sink::connect_new(self.stream.mixer()));
        sink.pause();
        sink.set_volume(self.volume);
        self.sink.store(Some(sink.clone()));

        let http = self.http.clone();
        let url = url.to_string();
        let current_generation = self.generation.clone();
        let duration_millis = self.duration_millis.clone();
        let armed = self.armed.clone();
        let event_tx = self.event_tx.clone();

        self.tasks.spawn(
            LOAD_TASK,
            tokio::spawn(async move {
                let start = std::time::Instant::now();
                let hint = codec_hint(&url).map(str::to_string);

                let result = match Self::fetch(&http, &url).await {
                    Ok(bytes) => tokio::task::spawn_blocking(move || Self::decode(bytes, hint))
                        .await
                        .unwrap_or_else(|e| Err(AudioError::DecodingError(e.to_string()))),
                    Err(e) => Err(e),
                };

                if current_generation.load(Ordering::Acquire) != generation {
                    return;
                }

                match result {
                    Ok(source) => {
                        if let Some(total) = source.total_duration() {
                            duration_millis.store(total.as_millis() as u64, Ordering::Release);
                        }
                        sink.append(source);
                        armed.store(true, Ordering::Release);
                        info!(
                            generation,
                            elapsed_ms = start.elapsed().as_millis() as u64,
                            "element_source_ready"
                        );
                        let _ = event_tx.send(Event::SourceReady(generation));
                    }
                    Err(e) => {
                        error!(generation, error = %e, url = url.as_str(), "element_source_failed");
                        let _ = event_tx.send(Event::SourceFailed(generation, e.to_string()));
                    }
                }
            }),
        );

        generation
    }

    fn play(&mut self) {
        if let Some(sink) = self.current_sink() {
            sink.play();
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = self.current_sink() {
            sink.pause();
        }
    }

    fn current_time(&self) -> Duration {
        self.current_sink()
            .map(|sink| sink.get_pos())
            .unwrap_or(Duration::ZERO)
    }

    fn duration(&self) -> Option<Duration> {
        match self.duration_millis.load(Ordering::Acquire) {
            0 => None,
            millis => Some(Duration::from_millis(millis)),
        }
    }

    fn seek(&mut self, position: Duration) -> Result<(), AudioError> {
        let Some(sink) = self.current_sink() else {
            return Ok(());
        };
        sink.try_seek(position)
            .map_err(|e| AudioError::SeekError(e.to_string()))
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(sink) = self.current_sink() {
            sink.set_volume(volume);
        }
    }
}
