//! Collapsible navigation sidebar shared by every page
//!
//! The panel itself lives in the presentation layer. This module owns the
//! mapping from panel visibility to the toggle's `aria-expanded` flag and
//! menu glyph, and keeps the two in step whenever the panel is toggled.

use tracing::debug;

/// Glyph shown on the sidebar toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuIcon {
    /// Hamburger glyph, shown while the panel is collapsed
    Bars,
    /// Arrow glyph, shown while the panel is open
    Arrow,
}

impl MenuIcon {
    /// Icon-library class name for this glyph
    pub fn class_name(self) -> &'static str {
        match self {
            MenuIcon::Bars => "fa-bars",
            MenuIcon::Arrow => "fa-arrow-right",
        }
    }
}

/// Value of the toggle's `aria-expanded` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AriaExpanded(pub bool);

impl AriaExpanded {
    pub fn as_str(self) -> &'static str {
        if self.0 {
            "true"
        } else {
            "false"
        }
    }
}

/// Derive the toggle's accessibility flag and glyph from panel visibility.
pub fn derive_icon_and_aria(hidden: bool) -> (AriaExpanded, MenuIcon) {
    if hidden {
        (AriaExpanded(false), MenuIcon::Bars)
    } else {
        (AriaExpanded(true), MenuIcon::Arrow)
    }
}

/// Presentation-layer hooks for the panel and its toggle control
pub trait SidebarSurface: Send {
    /// Whether the panel currently carries its hidden flag
    fn is_panel_hidden(&self) -> bool;

    /// Flip the panel's hidden flag
    fn toggle_panel(&mut self);

    fn set_aria_expanded(&mut self, expanded: AriaExpanded);

    /// Show `icon`, replacing whichever glyph was shown before
    fn set_icon(&mut self, icon: MenuIcon);
}

pub struct SidebarToggle<S: SidebarSurface> {
    surface: S,
}

impl<S: SidebarSurface> SidebarToggle<S> {
    /// Bind to the panel and bring the toggle in line with its current state
    pub fn attach(surface: S) -> Self {
        let mut toggle = Self { surface };
        toggle.sync();
        toggle
    }

    /// Handle activation of the toggle control
    pub fn toggle(&mut self) {
        self.surface.toggle_panel();
        self.sync();
    }

    pub fn is_hidden(&self) -> bool {
        self.surface.is_panel_hidden()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn sync(&mut self) {
        let hidden = self.surface.is_panel_hidden();
        let (aria, icon) = derive_icon_and_aria(hidden);
        debug!(hidden, aria = aria.as_str(), icon = icon.class_name(), "Sidebar synced");
        self.surface.set_aria_expanded(aria);
        self.surface.set_icon(icon);
    }
}
