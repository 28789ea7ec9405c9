use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    layout::Position,
};

use crate::ui::{
    layout::{AppLayout, GridGeometry, PlayerLayout},
    message::{AppMessage, NavDirection},
};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Char(' '), _) => Some(AppMessage::TogglePlayPause),
            (KeyCode::Enter, _) => Some(AppMessage::PlaySelected),
            (KeyCode::Char('+'), _) => Some(AppMessage::VolumeUp),
            (KeyCode::Char('='), _) => Some(AppMessage::VolumeUp),
            (KeyCode::Char('-'), _) => Some(AppMessage::VolumeDown),
            (KeyCode::Char('H'), _) => Some(AppMessage::SeekBackward),
            (KeyCode::Char('L'), _) => Some(AppMessage::SeekForward),
            (KeyCode::Char('m'), _) => Some(AppMessage::ToggleMute),
            (KeyCode::Char('h') | KeyCode::Left, _) => Some(AppMessage::Move(NavDirection::Left)),
            (KeyCode::Char('j') | KeyCode::Down, _) => Some(AppMessage::Move(NavDirection::Down)),
            (KeyCode::Char('k') | KeyCode::Up, _) => Some(AppMessage::Move(NavDirection::Up)),
            (KeyCode::Char('l') | KeyCode::Right, _) => {
                Some(AppMessage::Move(NavDirection::Right))
            }
            _ => None,
        }
    }

    /// Maps a mouse event onto the screen regions. `song_count` bounds tile
    /// hits so clicks on empty grid cells do nothing.
    pub fn handle_mouse(
        evt: MouseEvent,
        layout: &AppLayout,
        grid: &GridGeometry,
        song_count: usize,
    ) -> Option<AppMessage> {
        let position = Position::new(evt.column, evt.row);

        match evt.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(player) = layout.player.map(PlayerLayout::new) {
                    if let Some(fraction) = player.bar_fraction(position) {
                        return Some(AppMessage::SeekTo(fraction));
                    }
                    if player.play_button.contains(position) {
                        return Some(AppMessage::TogglePlayPause);
                    }
                }

                grid.tile_at(position)
                    .filter(|&index| index < song_count)
                    .map(AppMessage::PlayIndex)
            }
            MouseEventKind::ScrollUp => Some(AppMessage::Move(NavDirection::Up)),
            MouseEventKind::ScrollDown => Some(AppMessage::Move(NavDirection::Down)),
            _ => None,
        }
    }
}
