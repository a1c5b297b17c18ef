//! Landing page controller
//!
//! Owns every piece of transient page state as signals and exposes named
//! methods for mutating it, so the cyclic testimonial index, the single
//! menu flag and the one-shot analytics rules cannot be bypassed by
//! individual components.

use leptos::prelude::*;

use crate::core::analytics::AnalyticsEvent;
use crate::core::content::TESTIMONIALS;
use crate::core::navigation::{self, anchor_target};
use crate::core::{
    AnalyticsLog, CardEmphasis, ContactForm, ContactInbox, MenuState, Notification, SectionBounds,
    TestimonialRotation,
};

/// Reactive state shared by all landing page sections
#[derive(Clone, Copy)]
pub struct LandingController {
    menu: RwSignal<MenuState>,
    scrolled: RwSignal<bool>,
    active_section: RwSignal<Option<String>>,
    rotation: RwSignal<TestimonialRotation>,
    inbox: RwSignal<ContactInbox>,
    analytics: RwSignal<AnalyticsLog>,
    /// Characters of the hero title revealed so far
    pub typed_chars: RwSignal<usize>,
    stats_shown: RwSignal<usize>,
}

impl LandingController {
    pub fn new(testimonial_count: usize) -> Self {
        Self {
            menu: RwSignal::new(MenuState::default()),
            scrolled: RwSignal::new(false),
            active_section: RwSignal::new(None),
            rotation: RwSignal::new(TestimonialRotation::new(testimonial_count)),
            inbox: RwSignal::new(ContactInbox::new()),
            analytics: RwSignal::new(AnalyticsLog::new()),
            typed_chars: RwSignal::new(0),
            stats_shown: RwSignal::new(0),
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn is_menu_open(&self) -> bool {
        self.menu.get().is_open()
    }

    pub fn is_menu_open_untracked(&self) -> bool {
        self.menu.get_untracked().is_open()
    }

    /// Class shared by the hamburger icon and the menu panel
    pub fn menu_class(&self) -> &'static str {
        self.menu.get().class()
    }

    pub fn toggle_menu(&self) {
        self.menu.update(|menu| menu.toggle());
    }

    /// Close the mobile menu, returning whether it was open
    pub fn close_menu(&self) -> bool {
        if !self.is_menu_open_untracked() {
            return false;
        }
        self.menu.update(|menu| {
            menu.close();
        });
        true
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.get()
    }

    pub fn active_section(&self) -> Option<String> {
        self.active_section.get()
    }

    pub fn is_active_section(&self, id: &str) -> bool {
        self.active_section.with(|active| active.as_deref() == Some(id))
    }

    /// Recompute the navbar style and active link from a scroll position
    pub fn on_scroll(&self, scroll_y: f64, sections: &[SectionBounds]) {
        let scrolled = navigation::is_scrolled(scroll_y);
        if self.scrolled.get_untracked() != scrolled {
            self.scrolled.set(scrolled);
        }

        let active = navigation::active_section(scroll_y, sections).map(str::to_string);
        if self.active_section.get_untracked() != active {
            self.active_section.set(active);
        }
    }

    /// Handle a click on a link, smooth-scrolling in-page anchors
    ///
    /// Returns the section id when the default navigation was suppressed.
    pub fn follow_link(&self, ev: &leptos::ev::MouseEvent, href: &str) -> Option<String> {
        let target = anchor_target(href)?;
        ev.prevent_default();

        #[cfg(not(feature = "ssr"))]
        crate::ui::dom::scroll_to_section(target);

        self.close_menu();
        Some(target.to_string())
    }

    // ------------------------------------------------------------------
    // Hero
    // ------------------------------------------------------------------

    /// Mark the statistic at `index`, and every one before it, as faded in
    pub fn show_stat(&self, index: usize) {
        self.stats_shown.update(|shown| *shown = (*shown).max(index + 1));
    }

    pub fn is_stat_shown(&self, index: usize) -> bool {
        self.stats_shown.get() > index
    }

    // ------------------------------------------------------------------
    // Testimonials
    // ------------------------------------------------------------------

    pub fn advance_testimonial(&self) -> Option<usize> {
        self.rotation.try_update(|rotation| rotation.advance()).flatten()
    }

    #[cfg(test)]
    pub fn current_testimonial(&self) -> Option<usize> {
        self.rotation.get().current()
    }

    pub fn testimonial_emphasis(&self, index: usize) -> CardEmphasis {
        self.rotation.with(|rotation| rotation.emphasis(index))
    }

    // ------------------------------------------------------------------
    // Contact form
    // ------------------------------------------------------------------

    /// Accept a contact submission and schedule its notification's removal
    pub fn submit_contact(&self, form: &ContactForm) -> Option<Notification> {
        let notification = self.inbox.try_update(|inbox| inbox.submit(form))?;
        if form.is_blank() {
            leptos::logging::warn!("Empty contact form submitted");
        }
        leptos::logging::log!("Contact form submitted (notification {})", notification.id);

        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::contact::NOTIFICATION_DURATION_MS;
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            let controller = *self;
            let id = notification.id;
            spawn_local(async move {
                TimeoutFuture::new(NOTIFICATION_DURATION_MS).await;
                controller.expire_notification(id);
            });
        }

        Some(notification)
    }

    pub fn expire_notification(&self, id: u64) -> bool {
        self.inbox.try_update(|inbox| inbox.expire(id)).unwrap_or(false)
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.inbox.with(|inbox| inbox.pending().to_vec())
    }

    // ------------------------------------------------------------------
    // Analytics
    // ------------------------------------------------------------------

    pub fn record_click(&self, label: &str) {
        if let Some(event) = self
            .analytics
            .try_update_untracked(|log| log.button_click(label))
        {
            report(&event);
        }
    }

    pub fn record_feature_view(&self, feature: &str) {
        if let Some(event) = self
            .analytics
            .try_update_untracked(|log| log.feature_view(feature))
            .flatten()
        {
            report(&event);
        }
    }

    #[cfg(test)]
    pub fn analytics_recorded(&self) -> usize {
        self.analytics.with_untracked(|log| log.recorded())
    }
}

fn report(event: &AnalyticsEvent) {
    leptos::logging::log!("{}", event.log_line());
}

/// Create the controller and provide it to the component tree
pub fn provide_landing_controller() -> LandingController {
    let controller = LandingController::new(TESTIMONIALS.len());
    provide_context(controller);
    controller
}

/// Use the landing controller from anywhere below the landing page
pub fn use_landing_controller() -> LandingController {
    use_context::<LandingController>().expect("LandingController should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_controller(len: usize, f: impl FnOnce(LandingController)) {
        let owner = Owner::new();
        owner.with(|| f(LandingController::new(len)));
    }

    #[test]
    fn test_menu_flag_drives_both_elements() {
        with_controller(3, |controller| {
            assert_eq!(controller.menu_class(), "");
            controller.toggle_menu();
            assert!(controller.is_menu_open());
            assert_eq!(controller.menu_class(), "active");
            assert!(controller.close_menu());
            assert!(!controller.close_menu());
            assert_eq!(controller.menu_class(), "");
        });
    }

    #[test]
    fn test_scroll_threshold_toggles_navbar() {
        with_controller(3, |controller| {
            controller.on_scroll(0.0, &[]);
            assert!(!controller.is_scrolled());
            controller.on_scroll(60.0, &[]);
            assert!(controller.is_scrolled());
            controller.on_scroll(40.0, &[]);
            assert!(!controller.is_scrolled());
        });
    }

    #[test]
    fn test_scroll_sets_active_section() {
        with_controller(3, |controller| {
            let sections = vec![
                SectionBounds::new("home", 0.0, 900.0),
                SectionBounds::new("pricing", 900.0, 900.0),
            ];
            controller.on_scroll(100.0, &sections);
            assert!(controller.is_active_section("home"));
            controller.on_scroll(850.0, &sections);
            assert_eq!(controller.active_section().as_deref(), Some("pricing"));
        });
    }

    #[test]
    fn test_stats_fade_in_by_index() {
        with_controller(3, |controller| {
            assert!(!controller.is_stat_shown(0));

            controller.show_stat(1);
            assert!(controller.is_stat_shown(0));
            assert!(controller.is_stat_shown(1));
            assert!(!controller.is_stat_shown(2));

            // a late timer for an earlier index never hides later stats
            controller.show_stat(0);
            assert!(controller.is_stat_shown(1));
        });
    }

    #[test]
    fn test_testimonial_rotation_cycles() {
        with_controller(3, |controller| {
            assert_eq!(controller.current_testimonial(), Some(0));
            assert_eq!(controller.advance_testimonial(), Some(1));
            assert_eq!(controller.advance_testimonial(), Some(2));
            assert_eq!(controller.advance_testimonial(), Some(0));

            let emphasized = (0..3)
                .filter(|i| controller.testimonial_emphasis(*i).is_emphasized())
                .count();
            assert_eq!(emphasized, 1);
        });
    }

    #[test]
    fn test_contact_submission_lifecycle() {
        with_controller(3, |controller| {
            let notification = controller
                .submit_contact(&ContactForm::default())
                .unwrap();
            assert_eq!(controller.notifications().len(), 1);
            assert!(controller.expire_notification(notification.id));
            assert!(controller.notifications().is_empty());
        });
    }

    #[test]
    fn test_feature_views_recorded_once() {
        with_controller(3, |controller| {
            controller.record_feature_view("ControlNet");
            controller.record_feature_view("ControlNet");
            controller.record_click("Start Creating");
            assert_eq!(controller.analytics_recorded(), 2);
        });
    }
}
