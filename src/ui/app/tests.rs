use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
    widgets::Widget,
};

use super::App;
use crate::{
    audio::{element::testing::MockElement, state::PlaybackState},
    config::Settings,
    event::events::Event,
    http::{ApiService, model::testing::song},
    ui::{layout::PlayerLayout, util::handler::EventHandler},
};

fn app() -> App<MockElement> {
    let settings = Settings::default();
    let (tx, rx) = flume::unbounded();
    let api = ApiService::new(settings.api.clone()).unwrap();
    let element = MockElement {
        total: Some(Duration::from_secs(200)),
        ..Default::default()
    };

    let mut app = App::with_parts(settings, api, element, tx, rx);
    app.area = Rect::new(0, 0, 100, 40);
    app
}

fn click(x: u16, y: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn screen(app: &App<MockElement>) -> String {
    let mut buf = Buffer::empty(app.area);
    app.render(app.area, &mut buf);
    (buf.area.top()..buf.area.bottom())
        .map(|y| {
            (buf.area.left()..buf.area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn fetched(app: &mut App<MockElement>, ids: &[&str]) {
    let songs = ids.iter().map(|id| song(id)).collect();
    EventHandler::handle_action(app, Event::SongsFetched(songs));
}

#[tokio::test]
async fn click_tile_then_seek_half_way() {
    let mut app = app();
    fetched(&mut app, &["a", "b", "c"]);

    let (_, grid) = app.layout();
    let tiles = grid
        .visible_range(app.playlist.songs().len())
        .filter_map(|i| grid.tile_rect(i))
        .count();
    assert_eq!(tiles, 3);
    assert_eq!(screen(&app).matches("Song ").count(), 3);

    let tile = grid.tile_rect(1).unwrap();
    EventHandler::handle_mouse_event(&mut app, click(tile.x + 2, tile.y + 1));

    assert_eq!(app.player.current().map(|s| s.id.as_str()), Some("b"));
    assert_eq!(app.player.state(), PlaybackState::Playing);
    assert_eq!(app.player.element().loads, vec!["https://cdn/b/4.mp4"]);

    let generation = app.player.element().generation;
    EventHandler::handle_action(&mut app, Event::SourceReady(generation));
    assert_eq!(app.player.element().plays, 1);

    let (layout, _) = app.layout();
    let bar = PlayerLayout::new(layout.player.unwrap()).bar;
    let half = bar.width / 2;
    EventHandler::handle_mouse_event(&mut app, click(bar.x + half, bar.y));

    let position = app.player.element().position;
    let expected = Duration::from_secs(200).mul_f64(half as f64 / bar.width as f64);
    assert_eq!(position, expected);
    assert!((position.as_secs_f64() - 100.0).abs() <= 200.0 / bar.width as f64);
}

#[tokio::test]
async fn space_without_song_does_nothing() {
    let mut app = app();
    fetched(&mut app, &["a"]);

    EventHandler::handle_key_event(&mut app, key(KeyCode::Char(' ')));

    assert_eq!(app.player.state(), PlaybackState::Idle);
    assert!(!app.player.is_ticking());
    assert_eq!(app.player.element().plays, 0);
}

#[tokio::test]
async fn keyboard_selects_and_plays() {
    let mut app = app();
    fetched(&mut app, &["a", "b", "c", "d", "e", "f"]);

    EventHandler::handle_key_event(&mut app, key(KeyCode::Char('j')));
    assert_eq!(app.playlist.selected(), 4);
    EventHandler::handle_key_event(&mut app, key(KeyCode::Char('l')));
    EventHandler::handle_key_event(&mut app, key(KeyCode::Enter));

    assert_eq!(app.player.current().map(|s| s.id.as_str()), Some("f"));
    assert!(app.player.is_playing());
}

#[tokio::test]
async fn fetch_error_keeps_loading_placeholder() {
    let mut app = app();
    EventHandler::handle_action(&mut app, Event::FetchError("timeout".into()));

    assert!(app.playlist.songs().is_empty());
    assert!(screen(&app).contains("Loading songs..."));
}

#[tokio::test]
async fn ticks_and_track_end_flow_through_events() {
    let mut app = app();
    fetched(&mut app, &["a"]);
    EventHandler::handle_key_event(&mut app, key(KeyCode::Enter));
    let generation = app.player.element().generation;
    EventHandler::handle_action(&mut app, Event::SourceReady(generation));

    app.player.element_mut().position = Duration::from_secs(50);
    EventHandler::handle_action(&mut app, Event::ProgressTick);
    assert_eq!(app.player.progress(), 25.0);
    assert!(screen(&app).contains("0:50"));

    EventHandler::handle_action(&mut app, Event::TrackEnded(generation + 1));
    assert!(app.player.is_playing());

    EventHandler::handle_action(&mut app, Event::TrackEnded(generation));
    assert_eq!(app.player.progress(), 0.0);
    assert_eq!(app.player.state(), PlaybackState::Paused);
}

#[tokio::test]
async fn play_glyph_click_toggles() {
    let mut app = app();
    fetched(&mut app, &["a"]);
    EventHandler::handle_key_event(&mut app, key(KeyCode::Enter));
    let generation = app.player.element().generation;
    EventHandler::handle_action(&mut app, Event::SourceReady(generation));

    let (layout, _) = app.layout();
    let play = PlayerLayout::new(layout.player.unwrap()).play_button;
    EventHandler::handle_mouse_event(&mut app, click(play.x + 1, play.y));

    assert_eq!(app.player.state(), PlaybackState::Paused);
    assert!(!app.player.is_ticking());
}

#[tokio::test]
async fn quit_key_stops_the_loop() {
    let mut app = app();
    EventHandler::handle_key_event(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit);
}
