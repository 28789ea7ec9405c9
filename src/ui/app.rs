use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::{Frame, layout::Rect};
use tracing::{error, info};

use crate::{
    audio::{element::AudioElement, playback::RodioElement, player::Player},
    config::Settings,
    event::events::Event,
    http::ApiService,
    util::task::TaskManager,
};

use super::{
    layout::{AppLayout, GridGeometry},
    message::AppMessage,
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
    views::PlaylistView,
};

const FETCH_TASK: &str = "fetch_songs";

pub struct App<E: AudioElement = RodioElement> {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub api: Arc<ApiService>,
    pub player: Player<E>,
    pub playlist: PlaylistView,
    pub tasks: TaskManager,
    pub area: Rect,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App<RodioElement> {
    pub fn new(settings: Settings) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let api = ApiService::new(settings.api.clone())?;
        let element = RodioElement::new(api.client().clone(), event_tx.clone())?;

        Ok(Self::with_parts(settings, api, element, event_tx, event_rx))
    }
}

impl<E: AudioElement> App<E> {
    pub fn with_parts(
        settings: Settings,
        api: ApiService,
        element: E,
        event_tx: Sender<Event>,
        event_rx: Receiver<Event>,
    ) -> Self {
        Self {
            player: Player::new(element, event_tx.clone(), settings.player),
            event_rx,
            event_tx,
            api: Arc::new(api),
            playlist: PlaylistView::default(),
            tasks: TaskManager::new(),
            area: Rect::default(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        self.fetch_songs();

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui)?;
        while !self.should_quit {
            tui.draw(|f| {
                self.area = f.area();
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.player.shutdown();
        self.tasks.abort_all();
        tui.exit()?;
        Ok(())
    }

    /// One search request; the result comes back as an [`Event`].
    pub fn fetch_songs(&mut self) {
        let api = self.api.clone();
        let tx = self.event_tx.clone();

        self.tasks.spawn(
            FETCH_TASK,
            tokio::spawn(async move {
                match api.fetch_songs().await {
                    Ok(songs) => {
                        let _ = tx.send(Event::SongsFetched(songs));
                    }
                    Err(e) => {
                        error!(error = %e, "fetch_songs_failed");
                        let _ = tx.send(Event::FetchError(e.to_string()));
                    }
                }
            }),
        );
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::TogglePlayPause => self.player.toggle(),
            AppMessage::VolumeUp => self.player.volume_up(),
            AppMessage::VolumeDown => self.player.volume_down(),
            AppMessage::SeekForward => self.player.seek_forward(),
            AppMessage::SeekBackward => self.player.seek_backward(),
            AppMessage::ToggleMute => self.player.toggle_mute(),
            AppMessage::Move(direction) => {
                let columns = self.layout().1.columns;
                self.playlist.move_selection(direction, columns);
            }
            AppMessage::PlaySelected => self.play_index(self.playlist.selected()),
            AppMessage::PlayIndex(index) => {
                self.playlist.select(index);
                self.play_index(index);
            }
            AppMessage::SeekTo(fraction) => self.player.seek_fraction(fraction),
        }
    }

    fn play_index(&mut self, index: usize) {
        if let Some(song) = self.playlist.get(index).cloned() {
            info!(index, id = song.id.as_str(), "play_index");
            self.player.select(song);
        }
    }

    /// Screen regions for the last drawn frame.
    pub fn layout(&self) -> (AppLayout, GridGeometry) {
        let layout = AppLayout::new(self.area, self.player.current().is_some());
        let grid = GridGeometry::new(layout.main, self.playlist.selected());
        (layout, grid)
    }

    fn ui(&self, frame: &mut Frame) {
        if self.has_focus {
            frame.render_widget(self, frame.area());
        }
    }
}

#[cfg(test)]
mod tests;
