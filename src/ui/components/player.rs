use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{
    audio::progress::format_time,
    ui::{
        components::{controls::PlayerControlsWidget, gauge::CustomGauge},
        layout::PlayerLayout,
        util::truncate,
    },
    util::colors,
};

/// Fixed bottom bar: title and artist, transport glyphs, volume, and the
/// clickable progress bar between the elapsed and total times.
pub struct PlayerWidget<'a> {
    title: &'a str,
    artist: String,
    is_playing: bool,
    progress: f64,
    elapsed: Duration,
    total: Option<Duration>,
    volume: u8,
}

impl<'a> PlayerWidget<'a> {
    pub fn new(title: &'a str, artist: String, is_playing: bool, progress: f64) -> Self {
        Self {
            title,
            artist,
            is_playing,
            progress,
            elapsed: Duration::ZERO,
            total: None,
            volume: 100,
        }
    }

    pub fn times(mut self, elapsed: Duration, total: Option<Duration>) -> Self {
        self.elapsed = elapsed;
        self.total = total;
        self
    }

    pub fn volume(mut self, volume: u8) -> Self {
        self.volume = volume;
        self
    }
}

impl Widget for PlayerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::MUTED))
            .render(area, buf);

        let layout = PlayerLayout::new(area);

        let width = layout.info.width as usize;
        let mut info = vec![Span::from(truncate(self.title, width)).fg(colors::NAVBAR).bold()];
        if !self.artist.is_empty() {
            let used = info[0].width() + 3;
            info.push(" · ".fg(colors::NEUTRAL));
            info.push(truncate(&self.artist, width.saturating_sub(used)).fg(colors::NEUTRAL));
        }
        Paragraph::new(Line::from(info)).render(layout.info, buf);

        PlayerControlsWidget::new(&layout, self.is_playing).render(area, buf);

        let volume = if self.volume == 0 {
            "muted".to_string()
        } else {
            format!("vol {}%", self.volume)
        };
        Paragraph::new(volume.fg(colors::NEUTRAL))
            .right_aligned()
            .render(layout.volume, buf);

        Paragraph::new(format_time(self.elapsed).fg(colors::NEUTRAL))
            .left_aligned()
            .render(layout.elapsed, buf);
        Paragraph::new(format_time(self.total.unwrap_or_default()).fg(colors::NEUTRAL))
            .right_aligned()
            .render(layout.total, buf);

        CustomGauge::default()
            .ratio(self.progress / 100.0)
            .played_style(Style::new().fg(colors::PRIMARY))
            .remaining_style(Style::new().fg(colors::MUTED))
            .use_unicode(true)
            .render(layout.bar, buf);
    }
}
