pub mod handler;

use std::time::{SystemTime, UNIX_EPOCH};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pulsing marker for the tile that is currently playing.
pub fn get_active_track_icon(is_playing: bool) -> &'static str {
    if is_playing {
        const FRAME_STEP_MS: u128 = 100;

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();

        match (now / FRAME_STEP_MS) % 6 {
            1 | 4 => "•",
            2 | 3 => "●",
            _ => "·",
        }
    } else {
        "•"
    }
}

/// Cuts `text` to at most `width` terminal columns, ending with `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("Kal Ho Naa Ho", 20), "Kal Ho Naa Ho");
        assert_eq!(truncate("Kal Ho Naa Ho", 6), "Kal H…");
        assert_eq!(truncate("तेरे नाम", 0), "");
        assert!(truncate("तेरे नाम हमने किया है", 8).width() <= 8);
    }

    #[test]
    fn idle_icon_is_static() {
        assert_eq!(get_active_track_icon(false), "•");
    }
}
