use ratatui::crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};
use tracing::{debug, info};

use crate::{
    audio::element::AudioElement,
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events<E: AudioElement>(
        app: &mut App<E>,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await
            && Self::handle_event(app, evt, tui)?
        {
            should_render = true;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event<E: AudioElement>(
        app: &mut App<E>,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse),
            TerminalEvent::Resize(..) => {}
            TerminalEvent::Tick => {
                return Ok(app.has_focus);
            }
        }

        Ok(true)
    }

    /// Applies an event sent by a background task.
    pub fn handle_action<E: AudioElement>(app: &mut App<E>, evt: Event) {
        match evt {
            Event::SongsFetched(songs) => {
                info!(count = songs.len(), "songs_fetched");
                app.playlist.set_songs(songs);
            }
            Event::FetchError(reason) => {
                debug!(%reason, "songs_unavailable");
            }
            Event::SourceReady(generation) => app.player.on_source_ready(generation),
            Event::SourceFailed(generation, reason) => {
                app.player.on_source_failed(generation, &reason)
            }
            Event::TrackEnded(generation) => app.player.on_ended(generation),
            Event::ProgressTick => app.player.on_tick(),
        }
    }

    pub fn handle_key_event<E: AudioElement>(app: &mut App<E>, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }
        if let Some(msg) = InputHandler::handle_key(evt) {
            app.update(msg);
        }
    }

    pub fn handle_mouse_event<E: AudioElement>(app: &mut App<E>, evt: MouseEvent) {
        let (layout, grid) = app.layout();
        if let Some(msg) =
            InputHandler::handle_mouse(evt, &layout, &grid, app.playlist.songs().len())
        {
            app.update(msg);
        }
    }
}
