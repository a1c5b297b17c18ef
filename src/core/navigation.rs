//! Navigation state: navbar styling, active section tracking, mobile menu

/// Scroll offset past which the navbar switches to its compact style
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Distance above a section's top at which it already counts as current
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 100.0;

/// Vertical extent of a `section[id]` element, in document coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Whether `scroll_y` falls inside this section's activation window
    pub fn contains(&self, scroll_y: f64) -> bool {
        let start = self.top - SECTION_ACTIVATION_OFFSET_PX;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Whether the navbar should carry the `scrolled` class
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// Id of the section the reader is currently looking at
///
/// When sections overlap the last one in document order wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(scroll_y))
        .map(|section| section.id.as_str())
}

/// Target id of an in-page anchor (`#pricing` -> `pricing`)
///
/// Bare `#` and anything that is not a fragment link are left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Open/closed state of the mobile menu
///
/// The hamburger icon and the menu panel both render from this one flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu, returning whether it was open
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Class list for the hamburger icon and the menu panel
    pub fn class(&self) -> &'static str {
        if self.open { "active" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("features", 800.0, 600.0),
            SectionBounds::new("pricing", 1400.0, 700.0),
            SectionBounds::new("contact", 2100.0, 500.0),
        ]
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(60.0));
        assert!(!is_scrolled(49.0));
    }

    #[test]
    fn test_active_section_at_top() {
        let sections = page_sections();
        assert_eq!(active_section(0.0, &sections), Some("home"));
    }

    #[test]
    fn test_active_section_switches_before_top() {
        let sections = page_sections();
        assert_eq!(active_section(650.0, &sections), Some("home"));
        assert_eq!(active_section(700.0, &sections), Some("features"));
        assert_eq!(active_section(1350.0, &sections), Some("pricing"));
        assert_eq!(active_section(2400.0, &sections), Some("contact"));
    }

    #[test]
    fn test_active_section_none_past_end() {
        let sections = page_sections();
        assert_eq!(active_section(5000.0, &sections), None);
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn test_overlapping_sections_last_wins() {
        let sections = vec![
            SectionBounds::new("a", 0.0, 1000.0),
            SectionBounds::new("b", 200.0, 300.0),
        ];
        assert_eq!(active_section(250.0, &sections), Some("b"));
        assert_eq!(active_section(600.0, &sections), Some("a"));
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#pricing"), Some("pricing"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/app"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.class(), "");

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.class(), "active");

        assert!(menu.close());
        assert!(!menu.is_open());
        assert!(!menu.close());
    }

    #[test]
    fn test_menu_double_toggle_restores() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }
}
