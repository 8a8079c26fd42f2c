// Integration tests for the shared sidebar toggle
//
// These tests verify that the toggle's aria-expanded flag and glyph always
// follow the panel's visibility.

use camera_dashboard::sidebar::{
    derive_icon_and_aria, AriaExpanded, MenuIcon, SidebarSurface, SidebarToggle,
};

#[derive(Debug, Default)]
struct FakePanel {
    hidden: bool,
    aria: Option<AriaExpanded>,
    /// Glyph classes currently on the icon element
    icon_classes: Vec<&'static str>,
    toggles: usize,
}

impl FakePanel {
    fn with_hidden(hidden: bool) -> Self {
        Self {
            hidden,
            ..Default::default()
        }
    }
}

impl SidebarSurface for FakePanel {
    fn is_panel_hidden(&self) -> bool {
        self.hidden
    }

    fn toggle_panel(&mut self) {
        self.hidden = !self.hidden;
        self.toggles += 1;
    }

    fn set_aria_expanded(&mut self, expanded: AriaExpanded) {
        self.aria = Some(expanded);
    }

    fn set_icon(&mut self, icon: MenuIcon) {
        self.icon_classes.clear();
        self.icon_classes.push(icon.class_name());
    }
}

#[test]
fn test_derive_icon_and_aria_mapping() {
    assert_eq!(derive_icon_and_aria(true), (AriaExpanded(false), MenuIcon::Bars));
    assert_eq!(derive_icon_and_aria(false), (AriaExpanded(true), MenuIcon::Arrow));
    assert_eq!(AriaExpanded(false).as_str(), "false");
    assert_eq!(AriaExpanded(true).as_str(), "true");
}

#[test]
fn test_attach_to_hidden_panel() {
    let sidebar = SidebarToggle::attach(FakePanel::with_hidden(true));

    assert!(sidebar.is_hidden());
    assert_eq!(sidebar.surface().aria, Some(AriaExpanded(false)));
    assert_eq!(sidebar.surface().icon_classes, vec!["fa-bars"]);
    assert_eq!(sidebar.surface().toggles, 0, "Attach must not toggle the panel");
}

#[test]
fn test_attach_to_visible_panel() {
    let sidebar = SidebarToggle::attach(FakePanel::with_hidden(false));

    assert!(!sidebar.is_hidden());
    assert_eq!(sidebar.surface().aria, Some(AriaExpanded(true)));
    assert_eq!(sidebar.surface().icon_classes, vec!["fa-arrow-right"]);
}

#[test]
fn test_toggle_flips_panel_and_rederives_displays() {
    let mut sidebar = SidebarToggle::attach(FakePanel::with_hidden(true));

    sidebar.toggle();

    assert!(!sidebar.is_hidden());
    assert_eq!(sidebar.surface().aria, Some(AriaExpanded(true)));
    assert_eq!(sidebar.surface().icon_classes, vec!["fa-arrow-right"]);
}

#[test]
fn test_toggle_twice_restores_original_state() {
    for hidden in [true, false] {
        let mut sidebar = SidebarToggle::attach(FakePanel::with_hidden(hidden));
        let aria = sidebar.surface().aria;
        let icon = sidebar.surface().icon_classes.clone();

        sidebar.toggle();
        sidebar.toggle();

        assert_eq!(sidebar.is_hidden(), hidden);
        assert_eq!(sidebar.surface().aria, aria);
        assert_eq!(sidebar.surface().icon_classes, icon);
        assert_eq!(sidebar.surface().toggles, 2);
    }
}
