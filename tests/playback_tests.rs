// Integration tests for the room video playback panel

use camera_dashboard::config::PlaybackConfig;
use camera_dashboard::playback::{
    MediaElement, PlayAffordance, PlaybackController, PlaybackSurface, SimulatedMedia,
};
use std::time::Duration;

#[derive(Debug, Default)]
struct FakePlayer {
    affordance: Option<PlayAffordance>,
    displays: Vec<String>,
}

impl FakePlayer {
    fn last_display(&self) -> Option<&str> {
        self.displays.last().map(String::as_str)
    }
}

impl PlaybackSurface for FakePlayer {
    fn set_play_affordance(&mut self, affordance: PlayAffordance) {
        self.affordance = Some(affordance);
    }

    fn set_time_display(&mut self, text: &str) {
        self.displays.push(text.to_string());
    }
}

/// Media element that accepts any position, like a browser before clamping
#[derive(Debug)]
struct RawMedia {
    current: f64,
    duration: f64,
    paused: bool,
}

impl MediaElement for RawMedia {
    fn current_time(&self) -> f64 {
        self.current
    }

    fn set_current_time(&mut self, secs: f64) {
        self.current = secs;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_ended(&self) -> bool {
        false
    }

    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }
}

fn player(duration: f64) -> PlaybackController<SimulatedMedia, FakePlayer> {
    PlaybackController::attach(
        SimulatedMedia::new(duration),
        FakePlayer::default(),
        &PlaybackConfig::default(),
    )
}

#[test]
fn test_loaded_metadata_shows_duration() {
    let mut player = player(150.0);
    player.on_loaded_metadata();

    assert_eq!(player.surface().last_display(), Some("00:00 / 02:30"));
}

#[test]
fn test_toggle_plays_then_pauses() {
    let mut player = player(150.0);
    assert!(player.media().is_paused());

    player.toggle_play_pause();
    assert!(!player.media().is_paused());
    assert_eq!(player.surface().affordance, Some(PlayAffordance::Pause));
    assert_eq!(PlayAffordance::Pause.aria_label(), "Pause video");

    player.toggle_play_pause();
    assert!(player.media().is_paused());
    assert_eq!(player.surface().affordance, Some(PlayAffordance::Play));
    assert_eq!(PlayAffordance::Play.aria_label(), "Play video");
}

#[test]
fn test_skip_forward_adds_ten_seconds() {
    let mut player = player(150.0);

    player.skip_forward();
    player.skip_forward();
    player.on_time_update();

    assert_eq!(player.media().current_time(), 20.0);
    assert_eq!(player.surface().last_display(), Some("00:20 / 02:30"));
}

#[test]
fn test_skip_forward_leaves_range_to_media() {
    let media = RawMedia {
        current: 95.0,
        duration: 100.0,
        paused: true,
    };
    let mut player =
        PlaybackController::attach(media, FakePlayer::default(), &PlaybackConfig::default());

    player.skip_forward();

    assert_eq!(player.media().current_time(), 105.0);
}

#[tokio::test(start_paused = true)]
async fn test_toggle_after_end_restarts_playback() {
    let mut player = player(15.0);
    player.skip_forward();
    player.skip_forward();
    assert!(player.media().is_ended());

    player.toggle_play_pause();

    assert!(!player.media().is_ended());
    assert_eq!(player.media().current_time(), 0.0);
    assert_eq!(player.surface().affordance, Some(PlayAffordance::Pause));
}

#[tokio::test(start_paused = true)]
async fn test_time_update_follows_playback() {
    let mut player = player(150.0);
    player.on_loaded_metadata();
    player.toggle_play_pause();

    tokio::time::advance(Duration::from_millis(65_500)).await;
    player.on_time_update();
    assert_eq!(player.surface().last_display(), Some("01:05 / 02:30"));

    // Pausing freezes the position
    player.toggle_play_pause();
    tokio::time::advance(Duration::from_secs(30)).await;
    player.on_time_update();
    assert_eq!(player.surface().last_display(), Some("01:05 / 02:30"));
}

#[tokio::test(start_paused = true)]
async fn test_playback_stops_at_end() {
    let mut player = player(20.0);
    player.toggle_play_pause();

    tokio::time::advance(Duration::from_secs(25)).await;
    player.on_time_update();

    assert!(player.media().is_ended());
    assert!(player.media().is_paused());
    assert_eq!(player.surface().last_display(), Some("00:20 / 00:20"));
}
