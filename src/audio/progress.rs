use std::time::Duration;

/// Elapsed share of the track as a percentage in `[0, 100]`.
///
/// An unknown or zero duration yields 0.
pub fn percent(current: Duration, duration: Option<Duration>) -> f64 {
    match duration {
        Some(total) if !total.is_zero() => {
            (current.as_secs_f64() / total.as_secs_f64() * 100.0).clamp(0.0, 100.0)
        }
        _ => 0.0,
    }
}

/// `m:ss`, minutes unpadded.
pub fn format_time(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes}:{seconds:02}")
}
