use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub player: PlayerSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Root of the JioSaavn mirror. Keep the trailing slash.
    pub base_url: String,
    /// Search query issued once at startup.
    pub query: String,
    /// Result count requested from the search endpoint.
    pub limit: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://saavn.dev/".to_string(),
            query: "sonunigam".to_string(),
            limit: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Period of the progress polling task (milliseconds).
    pub tick_interval_ms: u64,
    /// Seconds to scrub when pressing `H` / `L`.
    pub seek_step_secs: u64,
    /// Initial output volume, 0..=100.
    pub volume: u8,
    pub volume_step: u8,
    /// Index into a song's ranked download list used for playback.
    pub audio_quality_index: usize,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            seek_step_secs: 5,
            volume: 100,
            volume_step: 5,
            audio_quality_index: 4,
        }
    }
}
