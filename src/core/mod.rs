//! Page state and rules, independent of the DOM

pub mod analytics;
pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod motion;
pub mod navigation;
pub mod utils;

pub use analytics::{AnalyticsEvent, AnalyticsLog};
pub use carousel::{CardEmphasis, TestimonialRotation};
pub use contact::{ContactForm, ContactInbox, Notification};
pub use motion::{HoverLift, LazyImage, Typewriter};
pub use navigation::{MenuState, SectionBounds};
pub use utils::DeviceClass;
