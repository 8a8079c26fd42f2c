use super::media::MediaElement;
use crate::config::PlaybackConfig;
use crate::format::format_media_time;
use tracing::debug;

/// Glyph and accessible label of the play/pause control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAffordance {
    Play,
    Pause,
}

impl PlayAffordance {
    pub fn icon_class(self) -> &'static str {
        match self {
            PlayAffordance::Play => "fa-play",
            PlayAffordance::Pause => "fa-pause",
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            PlayAffordance::Play => "Play video",
            PlayAffordance::Pause => "Pause video",
        }
    }
}

/// Presentation-layer hooks for the playback panel
pub trait PlaybackSurface: Send {
    fn set_play_affordance(&mut self, affordance: PlayAffordance);
    fn set_time_display(&mut self, text: &str);
}

pub struct PlaybackController<M: MediaElement, S: PlaybackSurface> {
    media: M,
    surface: S,
    skip_secs: f64,
}

impl<M: MediaElement, S: PlaybackSurface> PlaybackController<M, S> {
    pub fn attach(media: M, surface: S, config: &PlaybackConfig) -> Self {
        Self {
            media,
            surface,
            skip_secs: config.skip_secs,
        }
    }

    /// Bound to both the play/pause control and a click on the video
    pub fn toggle_play_pause(&mut self) {
        let affordance = if self.media.is_paused() || self.media.is_ended() {
            self.media.play();
            PlayAffordance::Pause
        } else {
            self.media.pause();
            PlayAffordance::Play
        };
        debug!(label = affordance.aria_label(), "Playback toggled");
        self.surface.set_play_affordance(affordance);
    }

    pub fn skip_forward(&mut self) {
        let target = self.media.current_time() + self.skip_secs;
        self.media.set_current_time(target);
    }

    pub fn on_loaded_metadata(&mut self) {
        let text = format!("00:00 / {}", format_media_time(self.media.duration()));
        self.surface.set_time_display(&text);
    }

    pub fn on_time_update(&mut self) {
        let text = format!(
            "{} / {}",
            format_media_time(self.media.current_time()),
            format_media_time(self.media.duration())
        );
        self.surface.set_time_display(&text);
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
