//! Terminal front end
//!
//! Renders every page surface as status lines on stdout and drives the
//! controllers from one-line commands read on stdin.

mod pages;
mod surfaces;

pub use pages::{run_dashboard, run_live_cam, run_room_video, run_validation, DEFAULT_PAGE_URL};
pub use surfaces::{
    ConsoleNavigator, ConsolePlayer, ConsoleRecordingPanel, ConsoleReviewPage, ConsoleSidebar,
};
