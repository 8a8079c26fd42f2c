use crate::playback::{PlayAffordance, PlaybackSurface};
use crate::recording::{Framing, PauseAffordance, RecordingSurface};
use crate::sidebar::{AriaExpanded, MenuIcon, SidebarSurface};
use crate::validation::{MessageTone, Navigator, ValidationRecord, ValidationSurface};
use url::Url;

fn shown(visible: bool) -> &'static str {
    if visible {
        "shown"
    } else {
        "hidden"
    }
}

/// Sidebar rendered as status lines
#[derive(Debug, Default)]
pub struct ConsoleSidebar {
    hidden: bool,
    icon: Option<MenuIcon>,
}

impl ConsoleSidebar {
    pub fn new(hidden: bool) -> Self {
        Self { hidden, icon: None }
    }
}

impl SidebarSurface for ConsoleSidebar {
    fn is_panel_hidden(&self) -> bool {
        self.hidden
    }

    fn toggle_panel(&mut self) {
        self.hidden = !self.hidden;
        println!("[sidebar] panel {}", shown(!self.hidden));
    }

    fn set_aria_expanded(&mut self, expanded: AriaExpanded) {
        println!("[sidebar] aria-expanded={}", expanded.as_str());
    }

    fn set_icon(&mut self, icon: MenuIcon) {
        if self.icon != Some(icon) {
            println!("[sidebar] icon {}", icon.class_name());
        }
        self.icon = Some(icon);
    }
}

#[derive(Debug, Default)]
pub struct ConsoleRecordingPanel;

impl RecordingSurface for ConsoleRecordingPanel {
    fn show_start_button(&mut self, visible: bool) {
        println!("[camera] start button {}", shown(visible));
    }

    fn show_controls(&mut self, visible: bool) {
        println!("[camera] recording controls {}", shown(visible));
    }

    fn set_indicator_active(&mut self, active: bool) {
        println!("[camera] REC indicator {}", if active { "on" } else { "off" });
    }

    fn show_playback_icon(&mut self, visible: bool) {
        println!("[camera] playback icon {}", shown(visible));
    }

    fn set_pause_affordance(&mut self, affordance: PauseAffordance) {
        println!("[camera] {} ({})", affordance.label(), affordance.icon_class());
    }

    fn set_framing(&mut self, framing: Framing) {
        println!("[camera] feed border: {}", framing.css_border());
    }

    fn set_elapsed(&mut self, text: &str) {
        println!("[camera] {}", text);
    }

    fn set_wall_clock(&mut self, date: &str, time_of_day: &str) {
        println!("[camera] {} | {}", date, time_of_day);
    }
}

#[derive(Debug, Default)]
pub struct ConsolePlayer {
    last_display: String,
}

impl PlaybackSurface for ConsolePlayer {
    fn set_play_affordance(&mut self, affordance: PlayAffordance) {
        println!("[video] {} ({})", affordance.aria_label(), affordance.icon_class());
    }

    fn set_time_display(&mut self, text: &str) {
        // timeupdate fires several times a second; only print changes
        if self.last_display != text {
            println!("[video] {}", text);
            self.last_display = text.to_string();
        }
    }
}

#[derive(Debug, Default)]
pub struct ConsoleReviewPage {
    comments: String,
}

impl ConsoleReviewPage {
    pub fn set_comments(&mut self, text: &str) {
        self.comments = text.to_string();
    }
}

impl ValidationSurface for ConsoleReviewPage {
    fn show_record(&mut self, record: &ValidationRecord) {
        println!("[review] Image ID: {}", record.id);
        println!("[review] Title: {}", record.title);
        println!("[review] Captured: {}", record.reviewed_at);
    }

    fn set_image_source(&mut self, src: &str) {
        println!("[review] image {}", src);
    }

    fn comments(&self) -> String {
        self.comments.clone()
    }

    fn show_message(&mut self, text: &str, tone: MessageTone) {
        println!("[review] {} [{}]", text, tone.css_classes().join(" "));
    }

    fn set_decision_enabled(&mut self, enabled: bool) {
        println!(
            "[review] accept/reject {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, target: &Url) {
        println!("[page] -> {}", target);
    }
}
