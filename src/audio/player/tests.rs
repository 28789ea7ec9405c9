use std::time::Duration;

use super::Player;
use crate::{
    audio::{element::testing::MockElement, state::PlaybackState},
    config::PlayerSettings,
    event::events::Event,
    http::model::{Song, testing::song},
};

fn player() -> (Player<MockElement>, flume::Receiver<Event>) {
    let (tx, rx) = flume::unbounded();
    let element = MockElement {
        total: Some(Duration::from_secs(200)),
        ..Default::default()
    };
    (Player::new(element, tx, PlayerSettings::default()), rx)
}

/// Selects `song` and delivers the ready notification.
fn play(player: &mut Player<MockElement>, song: Song) -> u64 {
    player.select(song);
    let generation = player.element().generation;
    player.on_source_ready(generation);
    generation
}

#[tokio::test]
async fn toggle_while_idle_is_a_no_op() {
    let (mut player, _rx) = player();
    player.toggle();

    assert_eq!(player.state(), PlaybackState::Idle);
    assert!(!player.is_playing());
    assert!(!player.is_ticking());
    assert_eq!(player.element().plays, 0);
    assert_eq!(player.element().pauses, 0);
}

#[tokio::test]
async fn select_sets_current_and_plays_once_source_is_ready() {
    let (mut player, _rx) = player();
    player.select(song("a"));

    assert_eq!(player.current().map(|s| s.id.as_str()), Some("a"));
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.element().loads, vec!["https://cdn/a/4.mp4"]);
    assert_eq!(player.element().plays, 0);

    let generation = player.element().generation;
    player.on_source_ready(generation);

    assert_eq!(player.element().plays, 1);
    assert!(player.is_ticking());
}

#[tokio::test]
async fn stale_ready_is_ignored() {
    let (mut player, _rx) = player();
    player.select(song("a"));
    let first = player.element().generation;
    player.select(song("b"));

    player.on_source_ready(first);
    assert_eq!(player.element().plays, 0);
    assert!(!player.is_ticking());

    player.on_source_ready(first + 1);
    assert_eq!(player.element().plays, 1);
    assert_eq!(player.current().map(|s| s.id.as_str()), Some("b"));
}

#[tokio::test]
async fn toggle_pauses_and_resumes_with_ticker() {
    let (mut player, _rx) = player();
    play(&mut player, song("a"));

    player.toggle();
    assert_eq!(player.state(), PlaybackState::Paused);
    assert_eq!(player.element().pauses, 1);
    assert!(!player.is_ticking());

    player.toggle();
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.element().plays, 2);
    assert!(player.is_ticking());
}

#[tokio::test]
async fn pause_before_ready_keeps_song_paused() {
    let (mut player, _rx) = player();
    player.select(song("a"));
    player.toggle();

    let generation = player.element().generation;
    player.on_source_ready(generation);

    assert_eq!(player.state(), PlaybackState::Paused);
    assert_eq!(player.element().plays, 0);
    assert!(!player.is_ticking());
}

#[tokio::test]
async fn progress_follows_element_and_never_decreases_while_playing() {
    let (mut player, _rx) = player();
    play(&mut player, song("a"));

    let mut last = player.progress();
    for secs in [10, 50, 51, 120, 199] {
        player.element_mut().position = Duration::from_secs(secs);
        player.on_tick();
        assert!(player.progress() >= last);
        last = player.progress();
    }
    assert!((player.progress() - 99.5).abs() < 1e-9);
    assert!(player.is_playing());
}

#[tokio::test]
async fn tick_at_end_stops_playback_and_ticker() {
    let (mut player, _rx) = player();
    play(&mut player, song("a"));

    player.element_mut().position = Duration::from_secs(200);
    player.on_tick();

    assert_eq!(player.progress(), 100.0);
    assert_eq!(player.state(), PlaybackState::Paused);
    assert!(!player.is_ticking());
}

#[tokio::test]
async fn tick_without_duration_leaves_progress() {
    let (mut player, _rx) = player();
    play(&mut player, song("a"));
    player.element_mut().total = None;
    player.element_mut().position = Duration::from_secs(30);

    player.on_tick();

    assert_eq!(player.progress(), 0.0);
    assert!(player.is_playing());
}

#[tokio::test]
async fn seek_fraction_maps_onto_duration() {
    let (mut player, _rx) = player();
    play(&mut player, song("a"));

    for p in [0.0, 0.25, 0.5, 1.0] {
        player.seek_fraction(p);
        assert_eq!(
            player.element().position,
            Duration::from_secs(200).mul_f64(p)
        );
        assert_eq!(player.progress(), p * 100.0);
    }

    player.seek_fraction(1.7);
    assert_eq!(player.element().position, Duration::from_secs(200));
}

#[tokio::test]
async fn seek_without_song_does_nothing() {
    let (mut player, _rx) = player();
    player.seek_fraction(0.5);
    player.seek_forward();

    assert!(player.element().seeks.is_empty());
    assert_eq!(player.progress(), 0.0);
}

#[tokio::test]
async fn failed_seek_still_updates_progress() {
    let (mut player, _rx) = player();
    play(&mut player, song("a"));
    player.element_mut().fail_seek = true;

    player.seek_fraction(0.5);
    assert_eq!(player.progress(), 50.0);
}

#[tokio::test]
async fn step_seeks_are_clamped() {
    let (mut player, _rx) = player();
    play(&mut player, song("a"));

    player.seek_backward();
    assert_eq!(player.element().position, Duration::ZERO);

    player.element_mut().position = Duration::from_secs(198);
    player.seek_forward();
    assert_eq!(player.element().position, Duration::from_secs(200));
    assert_eq!(player.progress(), 100.0);
}

#[tokio::test]
async fn track_end_resets_state() {
    let (mut player, _rx) = player();
    let generation = play(&mut player, song("a"));
    player.element_mut().position = Duration::from_secs(100);
    player.on_tick();

    player.on_ended(generation);

    assert_eq!(player.progress(), 0.0);
    assert_eq!(player.state(), PlaybackState::Paused);
    assert!(!player.is_ticking());
}

#[tokio::test]
async fn stale_end_does_not_touch_new_song() {
    let (mut player, _rx) = player();
    let old = play(&mut player, song("a"));
    play(&mut player, song("b"));

    player.on_ended(old);
    assert!(player.is_playing());
    assert!(player.is_ticking());
}

#[tokio::test]
async fn new_selection_resets_progress() {
    let (mut player, _rx) = player();
    play(&mut player, song("a"));
    player.seek_fraction(0.5);

    player.select(song("b"));
    assert_eq!(player.progress(), 0.0);
    assert!(!player.is_ticking());
}

#[tokio::test]
async fn source_failure_drops_to_paused() {
    let (mut player, _rx) = player();
    player.select(song("a"));
    let generation = player.element().generation;

    player.on_source_failed(generation, "403");

    assert_eq!(player.state(), PlaybackState::Paused);
    assert_eq!(player.element().plays, 0);
}

#[tokio::test]
async fn song_without_stream_is_selected_but_not_loaded() {
    let (mut player, _rx) = player();
    let mut silent = song("x");
    silent.download_url.clear();

    player.select(silent);

    assert_eq!(player.state(), PlaybackState::Paused);
    assert!(player.element().loads.is_empty());
}

#[tokio::test]
async fn ticker_emits_progress_ticks() {
    let (tx, rx) = flume::unbounded();
    let settings = PlayerSettings {
        tick_interval_ms: 5,
        ..Default::default()
    };
    let element = MockElement {
        total: Some(Duration::from_secs(10)),
        ..Default::default()
    };
    let mut player = Player::new(element, tx, settings);
    play(&mut player, song("a"));

    let event = tokio::time::timeout(Duration::from_secs(2), rx.recv_async())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(event, Event::ProgressTick));
}

#[tokio::test]
async fn volume_is_clamped_and_mute_restores() {
    let (mut player, _rx) = player();
    player.set_volume(90);
    player.volume_up();
    player.volume_up();
    assert_eq!(player.volume(), 100);

    player.toggle_mute();
    assert_eq!(player.volume(), 0);
    assert_eq!(player.element().volume, 0.0);

    player.toggle_mute();
    assert_eq!(player.element().volume, 1.0);
}

#[tokio::test]
async fn shutdown_stops_ticker() {
    let (mut player, _rx) = player();
    play(&mut player, song("a"));
    player.shutdown();

    assert!(!player.is_ticking());
    assert!(!player.is_playing());
    assert_eq!(player.element().pauses, 1);
}

#[tokio::test]
async fn toggle_after_source_failure_retries_the_load() {
    let (mut player, _rx) = player();
    player.select(song("a"));
    let first = player.element().generation;
    player.on_source_failed(first, "403");

    player.toggle();

    assert_eq!(player.element().loads.len(), 2);
    assert_eq!(player.element().plays, 0);
    assert!(!player.is_ticking());

    player.on_source_failed(first + 1, "403");
    assert!(!player.is_playing());

    player.toggle();
    let generation = player.element().generation;
    player.on_source_ready(generation);
    assert_eq!(player.element().plays, 1);
    assert!(player.is_playing());
    assert!(player.is_ticking());
}

#[tokio::test]
async fn toggle_on_song_without_stream_stays_paused() {
    let (mut player, _rx) = player();
    let mut silent = song("x");
    silent.download_url.clear();
    player.select(silent);

    player.toggle();

    assert_eq!(player.state(), PlaybackState::Paused);
    assert!(!player.is_playing());
    assert!(!player.is_ticking());
    assert!(player.element().loads.is_empty());
    assert_eq!(player.element().plays, 0);
}

#[tokio::test]
async fn toggle_after_track_end_replays_from_start() {
    let (mut player, _rx) = player();
    let generation = play(&mut player, song("a"));
    player.element_mut().position = Duration::from_secs(150);
    player.on_ended(generation);

    player.toggle();
    assert_eq!(player.element().plays, 1);
    assert_eq!(player.element().loads.len(), 2);
    assert!(!player.is_ticking());

    let reloaded = player.element().generation;
    player.on_source_ready(reloaded);
    assert_eq!(player.element().plays, 2);
    assert_eq!(player.element().position, Duration::ZERO);
    assert!(player.is_ticking());
}

#[tokio::test]
async fn toggle_after_tick_at_end_reloads() {
    let (mut player, _rx) = player();
    play(&mut player, song("a"));
    player.element_mut().position = Duration::from_secs(200);
    player.on_tick();

    player.toggle();

    assert_eq!(player.element().loads.len(), 2);
    assert_eq!(player.element().plays, 1);
    assert_eq!(player.progress(), 0.0);
}
