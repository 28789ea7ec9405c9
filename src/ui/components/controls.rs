use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Stylize,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::{ui::layout::PlayerLayout, util::colors};

/// Skip-back, play/pause and skip-forward glyphs. Only play/pause reacts to
/// clicks; the skip glyphs are decorative.
pub struct PlayerControlsWidget<'a> {
    layout: &'a PlayerLayout,
    is_playing: bool,
}

impl<'a> PlayerControlsWidget<'a> {
    pub fn new(layout: &'a PlayerLayout, is_playing: bool) -> Self {
        Self { layout, is_playing }
    }
}

impl Widget for PlayerControlsWidget<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let play = if self.is_playing { "⏸" } else { "▶" };

        Paragraph::new(Line::from("⏮".fg(colors::NEUTRAL)))
            .centered()
            .render(self.layout.prev_button, buf);
        Paragraph::new(Line::from(play.fg(colors::PRIMARY).bold()))
            .centered()
            .render(self.layout.play_button, buf);
        Paragraph::new(Line::from("⏭".fg(colors::NEUTRAL)))
            .centered()
            .render(self.layout.next_button, buf);
    }
}
