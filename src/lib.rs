pub mod config;
pub mod console;
pub mod format;
pub mod playback;
pub mod recording;
pub mod sidebar;
pub mod validation;

pub use config::Config;
pub use format::{format_clock, format_media_time};
pub use playback::{MediaElement, PlaybackController, PlaybackSurface, SimulatedMedia};
pub use recording::{
    RecordingController, RecordingError, RecordingEvent, RecordingHandle, RecordingSession,
    RecordingSnapshot, RecordingState, RecordingSurface,
};
pub use sidebar::{derive_icon_and_aria, SidebarSurface, SidebarToggle};
pub use validation::{
    parse_query, Decision, LogSink, Navigator, SubmissionSink, ValidationController,
    ValidationRecord, ValidationSurface,
};
