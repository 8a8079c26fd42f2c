use tokio::time::Instant;

/// The media element a playback panel controls.
///
/// Times are in seconds. `duration` is NaN until metadata is available.
pub trait MediaElement: Send {
    fn current_time(&self) -> f64;

    /// Seek. Range handling is up to the element.
    fn set_current_time(&mut self, secs: f64);

    fn duration(&self) -> f64;
    fn is_paused(&self) -> bool;
    fn is_ended(&self) -> bool;
    fn play(&mut self);
    fn pause(&mut self);
}

/// In-process media with a fixed duration whose position advances with the
/// tokio clock while playing.
#[derive(Debug, Clone)]
pub struct SimulatedMedia {
    duration: f64,
    /// Position at the last play, pause or seek
    position: f64,
    playing_since: Option<Instant>,
}

impl SimulatedMedia {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration: duration_secs.max(0.0),
            position: 0.0,
            playing_since: None,
        }
    }

    fn position_now(&self) -> f64 {
        let advanced = match self.playing_since {
            Some(since) => self.position + since.elapsed().as_secs_f64(),
            None => self.position,
        };
        advanced.min(self.duration)
    }
}

impl MediaElement for SimulatedMedia {
    fn current_time(&self) -> f64 {
        self.position_now()
    }

    fn set_current_time(&mut self, secs: f64) {
        self.position = secs.clamp(0.0, self.duration);
        if self.playing_since.is_some() {
            self.playing_since = Some(Instant::now());
        }
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn is_paused(&self) -> bool {
        self.playing_since.is_none() || self.is_ended()
    }

    fn is_ended(&self) -> bool {
        self.position_now() >= self.duration
    }

    fn play(&mut self) {
        // Playing from the end restarts from the beginning
        self.position = if self.is_ended() { 0.0 } else { self.position_now() };
        self.playing_since = Some(Instant::now());
    }

    fn pause(&mut self) {
        self.position = self.position_now();
        self.playing_since = None;
    }
}
