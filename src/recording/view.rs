use super::state::RecordingState;

/// Label and glyph of the combined pause/resume control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseAffordance {
    Pause,
    Resume,
}

impl PauseAffordance {
    pub fn label(self) -> &'static str {
        match self {
            PauseAffordance::Pause => "PAUSE RECORDING",
            PauseAffordance::Resume => "RESUME RECORDING",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            PauseAffordance::Pause => "fa-pause",
            PauseAffordance::Resume => "fa-play",
        }
    }
}

/// Border around the camera feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Idle grey
    Neutral,
    /// Red while recording
    Live,
    /// Amber while paused
    Held,
}

impl Framing {
    pub fn css_border(self) -> &'static str {
        match self {
            Framing::Neutral => "1px solid #aaa",
            Framing::Live => "2px solid red",
            Framing::Held => "2px solid #f0ad4e",
        }
    }
}

/// Everything the recording panel shows for a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingView {
    pub start_button_visible: bool,
    pub controls_visible: bool,
    pub indicator_active: bool,
    pub playback_icon_visible: bool,
    /// `None` while the controls are hidden
    pub pause_affordance: Option<PauseAffordance>,
    pub framing: Framing,
    /// Whether the elapsed display is reset to `00:00`
    pub reset_elapsed: bool,
}

impl RecordingView {
    pub fn for_state(state: RecordingState) -> Self {
        match state {
            RecordingState::Stopped => Self {
                start_button_visible: true,
                controls_visible: false,
                indicator_active: false,
                playback_icon_visible: false,
                pause_affordance: None,
                framing: Framing::Neutral,
                reset_elapsed: true,
            },
            RecordingState::Recording => Self {
                start_button_visible: false,
                controls_visible: true,
                indicator_active: true,
                playback_icon_visible: true,
                pause_affordance: Some(PauseAffordance::Pause),
                framing: Framing::Live,
                reset_elapsed: false,
            },
            RecordingState::Paused => Self {
                start_button_visible: false,
                controls_visible: true,
                indicator_active: false,
                playback_icon_visible: true,
                pause_affordance: Some(PauseAffordance::Resume),
                framing: Framing::Held,
                reset_elapsed: false,
            },
        }
    }
}

/// Presentation-layer hooks for the live camera panel
pub trait RecordingSurface: Send + 'static {
    fn show_start_button(&mut self, visible: bool);
    fn show_controls(&mut self, visible: bool);
    fn set_indicator_active(&mut self, active: bool);
    fn show_playback_icon(&mut self, visible: bool);
    fn set_pause_affordance(&mut self, affordance: PauseAffordance);
    fn set_framing(&mut self, framing: Framing);
    fn set_elapsed(&mut self, text: &str);
    fn set_wall_clock(&mut self, date: &str, time_of_day: &str);

    /// Push a full view to the surface
    fn render(&mut self, view: &RecordingView) {
        self.show_start_button(view.start_button_visible);
        self.show_controls(view.controls_visible);
        self.set_indicator_active(view.indicator_active);
        self.show_playback_icon(view.playback_icon_visible);
        if let Some(affordance) = view.pause_affordance {
            self.set_pause_affordance(affordance);
        }
        self.set_framing(view.framing);
        if view.reset_elapsed {
            self.set_elapsed("00:00");
        }
    }
}
