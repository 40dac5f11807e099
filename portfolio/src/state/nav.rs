//! Active section and mobile menu.

use super::section::{probe_active_section, Section, SectionBounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub active_section: Section,
    pub menu_open: bool,
}

impl NavigationState {
    /// Re-probe after a scroll. Keeps the current section when the probe
    /// falls outside every anchored section. Never touches the menu.
    ///
    /// Returns whether the active section changed.
    pub fn on_scroll<F>(&mut self, scroll_y: f64, probe_offset: f64, bounds_of: F) -> bool
    where
        F: FnMut(Section) -> Option<SectionBounds>,
    {
        match probe_active_section(scroll_y, probe_offset, bounds_of) {
            Some(section) if section != self.active_section => {
                tracing::debug!(from = %self.active_section, to = %section, "active section changed");
                self.active_section = section;
                true
            }
            _ => false,
        }
    }

    /// Nav click: activate immediately, without waiting for the scroll to
    /// land, and close the mobile menu.
    pub fn navigate_to(&mut self, section: Section) {
        tracing::debug!(%section, "navigate");
        self.active_section = section;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        tracing::debug!(open = self.menu_open, "menu toggled");
    }

    /// Viewports wider than `breakpoint` use the desktop nav, so a menu left
    /// open from the mobile layout is closed. Returns whether it was open.
    pub fn on_resize(&mut self, width: f64, breakpoint: f64) -> bool {
        if width > breakpoint && self.menu_open {
            tracing::debug!(width, "closing mobile menu on desktop viewport");
            self.menu_open = false;
            return true;
        }
        false
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }
}
