use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub recording: RecordingConfig,
    pub playback: PlaybackConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecordingConfig {
    /// Period of the elapsed-time tick (default: 1000 ms)
    pub tick_interval_ms: u64,
    /// Period of the wall-clock refresh (default: 30 s)
    pub clock_refresh_secs: u64,
}

impl RecordingConfig {
    /// Never zero; timers cannot run with an empty period
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// Never zero; timers cannot run with an empty period
    pub fn clock_refresh(&self) -> Duration {
        Duration::from_secs(self.clock_refresh_secs.max(1))
    }
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            clock_refresh_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Fixed offset applied by skip-forward
    pub skip_secs: f64,
    /// Length of the simulated media used by the terminal front end
    pub media_duration_secs: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            skip_secs: 10.0,
            media_duration_secs: 150.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Relative location reached after a decision
    pub redirect_target: String,
    pub redirect_delay_ms: u64,
    /// Placeholder image endpoint; the title is appended as `?text=`
    pub placeholder_base: String,
    pub error_placeholder: String,
}

impl ValidationConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            redirect_target: "gallery.html".to_string(),
            redirect_delay_ms: 2000,
            placeholder_base: "https://placehold.co/800x600/1f2937/ffffff".to_string(),
            error_placeholder: "https://placehold.co/800x600/ef4444/ffffff?text=Image+Load+Error"
                .to_string(),
        }
    }
}

impl Config {
    /// Load configuration from an optional file (any format the `config`
    /// crate recognises by extension) layered under `DASHBOARD__*`
    /// environment variables. Missing keys keep their defaults.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path))?;

        let cfg: Self = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        cfg.validate()?;

        Ok(cfg)
    }

    /// Reject values the controllers cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.recording.tick_interval_ms > 0,
            "recording.tick_interval_ms must be greater than zero"
        );
        ensure!(
            self.recording.clock_refresh_secs > 0,
            "recording.clock_refresh_secs must be greater than zero"
        );
        ensure!(
            self.playback.skip_secs.is_finite(),
            "playback.skip_secs must be a finite number"
        );
        ensure!(
            self.playback.media_duration_secs.is_finite() && self.playback.media_duration_secs >= 0.0,
            "playback.media_duration_secs must be a non-negative number"
        );
        Ok(())
    }
}
