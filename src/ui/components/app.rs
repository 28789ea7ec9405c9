use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::{
    audio::element::AudioElement,
    ui::{
        app::App,
        components::{navbar::Navbar, player::PlayerWidget},
        layout::{AppLayout, GridGeometry},
        views::SongGrid,
    },
    util::colors,
};

impl<E: AudioElement> Widget for &App<E> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let current = self.player.current();
        let layout = AppLayout::new(area, current.is_some());
        let grid = GridGeometry::new(layout.main, self.playlist.selected());

        Navbar.render(layout.navbar, buf);

        SongGrid::new(self.playlist.songs(), &grid, self.playlist.selected())
            .current(current.map(|s| s.id.as_str()), self.player.is_playing())
            .render(layout.main, buf);

        if let (Some(song), Some(player_area)) = (current, layout.player) {
            PlayerWidget::new(
                &song.name,
                song.artist_line(),
                self.player.is_playing(),
                self.player.progress(),
            )
            .times(self.player.elapsed(), self.player.duration())
            .volume(self.player.volume())
            .render(player_area, buf);
        }
    }
}
