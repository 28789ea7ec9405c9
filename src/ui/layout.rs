use std::ops::Range;

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

pub const NAVBAR_HEIGHT: u16 = 3;
pub const PLAYER_HEIGHT: u16 = 4;
pub const HEADER_HEIGHT: u16 = 1;
pub const TILE_HEIGHT: u16 = 5;

const CONTROL_WIDTH: u16 = 3;
const TIME_WIDTH: u16 = 6;

/// Screen split into navbar, grid and the optional bottom player bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub navbar: Rect,
    pub main: Rect,
    pub player: Option<Rect>,
}

impl AppLayout {
    pub fn new(area: Rect, has_player: bool) -> Self {
        let player_height = if has_player { PLAYER_HEIGHT } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(NAVBAR_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(player_height),
            ])
            .split(area);

        Self {
            navbar: chunks[0],
            main: chunks[1],
            player: has_player.then_some(chunks[2]),
        }
    }
}

/// Number of grid columns for a given width.
pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..60 => 2,
        60..90 => 3,
        90..120 => 4,
        _ => 5,
    }
}

/// Tile placement inside the main area. Scrolling is derived from the
/// selection so the selected row is always visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub header: Rect,
    pub area: Rect,
    pub columns: usize,
    pub tile_width: u16,
    pub first_row: usize,
    pub visible_rows: usize,
}

impl GridGeometry {
    pub fn new(main: Rect, selected: usize) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
            .split(main);
        let area = chunks[1];

        let columns = columns_for_width(area.width);
        let tile_width = area.width / columns as u16;
        let visible_rows = ((area.height / TILE_HEIGHT) as usize).max(1);

        let selected_row = selected / columns;
        let first_row = (selected_row + 1).saturating_sub(visible_rows);

        Self {
            header: chunks[0],
            area,
            columns,
            tile_width,
            first_row,
            visible_rows,
        }
    }

    /// Song indices that have a tile on screen.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = (self.first_row * self.columns).min(len);
        let end = ((self.first_row + self.visible_rows) * self.columns).min(len);
        start..end
    }

    pub fn tile_rect(&self, index: usize) -> Option<Rect> {
        let row = index / self.columns;
        if row < self.first_row || row >= self.first_row + self.visible_rows {
            return None;
        }

        let col = (index % self.columns) as u16;
        let y = self.area.y + (row - self.first_row) as u16 * TILE_HEIGHT;
        let rect = Rect::new(
            self.area.x + col * self.tile_width,
            y,
            self.tile_width,
            TILE_HEIGHT,
        );

        let clipped = rect.intersection(self.area);
        (!clipped.is_empty()).then_some(clipped)
    }

    /// Index of the tile under a terminal cell, if any.
    pub fn tile_at(&self, position: Position) -> Option<usize> {
        if !self.area.contains(position) || self.tile_width == 0 {
            return None;
        }

        let col = ((position.x - self.area.x) / self.tile_width) as usize;
        if col >= self.columns {
            return None;
        }
        let offset = ((position.y - self.area.y) / TILE_HEIGHT) as usize;
        if offset >= self.visible_rows {
            return None;
        }
        Some((self.first_row + offset) * self.columns + col)
    }
}

/// Regions of the player bar. Rendering and mouse hit-testing both read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLayout {
    pub info: Rect,
    pub prev_button: Rect,
    pub play_button: Rect,
    pub next_button: Rect,
    pub volume: Rect,
    pub elapsed: Rect,
    pub bar: Rect,
    pub total: Rect,
}

impl PlayerLayout {
    pub fn new(area: Rect) -> Self {
        let inner = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(CONTROL_WIDTH * 3),
                Constraint::Fill(1),
            ])
            .split(rows[0]);

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CONTROL_WIDTH); 3])
            .split(top[1]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(TIME_WIDTH),
                Constraint::Fill(1),
                Constraint::Length(TIME_WIDTH),
            ])
            .split(rows[1]);

        Self {
            info: top[0],
            prev_button: controls[0],
            play_button: controls[1],
            next_button: controls[2],
            volume: top[2],
            elapsed: bottom[0],
            bar: bottom[1],
            total: bottom[2],
        }
    }

    /// Horizontal position of `x` inside the progress bar, in `[0, 1)`.
    pub fn bar_fraction(&self, position: Position) -> Option<f64> {
        if !self.bar.contains(position) || self.bar.width == 0 {
            return None;
        }
        Some((position.x - self.bar.x) as f64 / self.bar.width as f64)
    }
}
