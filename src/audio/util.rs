use rodio::{OutputStream, OutputStreamBuilder, cpal::BufferSize};

use crate::audio::error::AudioError;

/// Opens the default output device, falling back to any working config.
pub fn open_output_stream() -> Result<OutputStream, AudioError> {
    let mut stream = OutputStreamBuilder::from_default_device()
        .map_err(|e| AudioError::DeviceError(e.to_string()))?
        .with_buffer_size(BufferSize::Fixed(4096))
        .open_stream_or_fallback()
        .map_err(|e| AudioError::DeviceError(e.to_string()))?;
    stream.log_on_drop(false);
    Ok(stream)
}

/// Container hint for the decoder, taken from the URL path extension.
pub fn codec_hint(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let file = path.rsplit('/').next()?;
    let (_, extension) = file.rsplit_once('.')?;
    match extension {
        "mp4" | "m4a" => Some("mp4"),
        "mp3" => Some("mp3"),
        "flac" => Some("flac"),
        "aac" => Some("aac"),
        _ => None,
    }
}
