use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{
    http::model::Song,
    ui::{
        components::spinner::Spinner,
        layout::GridGeometry,
        message::NavDirection,
        util::{get_active_track_icon, truncate},
    },
    util::colors,
};

/// Fetched songs and the keyboard selection over them.
#[derive(Debug, Default)]
pub struct PlaylistView {
    songs: Vec<Song>,
    selected: usize,
}

impl PlaylistView {
    pub fn set_songs(&mut self, songs: Vec<Song>) {
        self.songs = songs;
        self.selected = 0;
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        if index < self.songs.len() {
            self.selected = index;
        }
    }

    /// Moves the selection on a grid with `columns` tiles per row. Moves that
    /// would leave the list are ignored.
    pub fn move_selection(&mut self, direction: NavDirection, columns: usize) {
        let len = self.songs.len();
        if len == 0 {
            return;
        }
        let columns = columns.max(1);

        let i = self.selected;
        self.selected = match direction {
            NavDirection::Left => i.saturating_sub(1),
            NavDirection::Right => (i + 1).min(len - 1),
            NavDirection::Up if i >= columns => i - columns,
            NavDirection::Down if i + columns < len => i + columns,
            _ => i,
        };
    }
}

/// Grid of song tiles. The tile of the current song is drawn in the primary
/// colour; the keyboard selection gets a bold border.
pub struct SongGrid<'a> {
    songs: &'a [Song],
    geometry: &'a GridGeometry,
    selected: usize,
    current_id: Option<&'a str>,
    is_playing: bool,
}

impl<'a> SongGrid<'a> {
    pub fn new(songs: &'a [Song], geometry: &'a GridGeometry, selected: usize) -> Self {
        Self {
            songs,
            geometry,
            selected,
            current_id: None,
            is_playing: false,
        }
    }

    pub fn current(mut self, id: Option<&'a str>, is_playing: bool) -> Self {
        self.current_id = id;
        self.is_playing = is_playing;
        self
    }

    fn render_tile(&self, index: usize, song: &Song, area: Rect, buf: &mut Buffer) {
        let is_current = self.current_id == Some(song.id.as_str());
        let is_selected = index == self.selected;

        let accent = if is_current {
            colors::PRIMARY
        } else {
            colors::MUTED
        };
        let mut border_style = Style::new().fg(accent);
        if is_selected {
            border_style = border_style.add_modifier(Modifier::BOLD);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(if is_selected {
                border::THICK
            } else {
                border::ROUNDED
            })
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let title = if is_current {
            let icon = get_active_track_icon(self.is_playing);
            Line::from(vec![
                format!("{icon} ").fg(colors::PRIMARY),
                truncate(&song.name, width.saturating_sub(2))
                    .fg(colors::PRIMARY)
                    .bold(),
            ])
        } else {
            Line::from(truncate(&song.name, width).fg(colors::NAVBAR).bold())
        };

        let lines = vec![
            title,
            Line::from(truncate(&song.artist_line(), width).fg(colors::NEUTRAL)),
            Line::from(truncate(song.year.as_deref().unwrap_or_default(), width).fg(colors::MUTED)),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for SongGrid<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from("Playlists".fg(colors::NAVBAR).bold()))
            .render(self.geometry.header, buf);

        if self.songs.is_empty() {
            Spinner::default()
                .with_style(Style::new().fg(colors::PRIMARY))
                .with_label("Loading songs...")
                .render(self.geometry.area, buf);
            return;
        }

        for index in self.geometry.visible_range(self.songs.len()) {
            if let Some(rect) = self.geometry.tile_rect(index) {
                self.render_tile(index, &self.songs[index], rect, buf);
            }
        }
    }
}
