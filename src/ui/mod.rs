pub mod button;
pub mod controller;
#[cfg(not(feature = "ssr"))]
pub mod dom;
pub mod form;
pub mod icon;
#[cfg(not(feature = "ssr"))]
pub mod namespace;
pub mod notifications;
pub mod pages;

pub use controller::{LandingController, provide_landing_controller, use_landing_controller};
pub use icon::{Icon, icons};
