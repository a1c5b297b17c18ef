//! Browser-side helpers for the landing page
//!
//! Everything here talks to `web_sys` directly. Missing elements turn a helper
//! into a no-op; registered closures are leaked for the lifetime of the page.

use leptos::logging::{error, log, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::core::content::PRELOADS;
use crate::core::motion::{
    LAZY_IMAGE_ROOT_MARGIN, LazyImage, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, VISIBLE_CLASS,
};
use crate::core::navigation::SectionBounds;
use crate::core::utils::{DeviceClass, FOCUSABLE_SELECTOR, focus_trap_target};
use crate::ui::controller::LandingController;

/// Elements revealed with the fade-in-up animation
pub const REVEAL_SELECTOR: &str =
    ".feature-card, .pricing-card, .testimonial-card, .reveal-on-scroll";

/// Images whose `src` is deferred until they approach the viewport
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// All elements matching `selector`, in document order
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Observe every match of `selector` and run `on_enter` the first time each
/// one intersects the viewport. The element is unobserved right after.
pub fn observe_once(
    selector: &str,
    threshold: f64,
    root_margin: &str,
    on_enter: impl Fn(&Element) + 'static,
) -> Option<IntersectionObserver> {
    let targets = query_all(selector);
    if targets.is_empty() {
        return None;
    }

    let callback = Closure::<dyn Fn(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_enter(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver unavailable: {:?}", err);
                return None;
            }
        };
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    Some(observer)
}

/// Add the `visible` class to cards the first time they scroll into view
pub fn init_scroll_animations() {
    observe_once(REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN, |el| {
        let _ = el.class_list().add_1(VISIBLE_CLASS);
    });
}

/// Swap `data-src` into `src` once an image nears the viewport
pub fn init_lazy_loading() {
    observe_once(LAZY_IMAGE_SELECTOR, 0.0, LAZY_IMAGE_ROOT_MARGIN, |el| {
        let mut image = LazyImage::new(el.get_attribute("src"), el.get_attribute("data-src"));
        if let Some(src) = image.load() {
            let _ = el.set_attribute("src", src);
            let _ = el.remove_attribute("data-src");
            let _ = el.class_list().remove_1("lazy");
        }
    });
}

/// Log the first viewport entry of every feature card
pub fn track_feature_views(controller: LandingController) {
    observe_once(".feature-card", REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN, move |el| {
        let feature = el
            .get_attribute("data-feature")
            .unwrap_or_else(|| el.id());
        controller.record_feature_view(&feature);
    });
}

/// Insert `<link rel="preload">` hints for the hero image and stylesheet
pub fn preload_resources() {
    let Some(document) = document() else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };

    for preload in PRELOADS {
        let selector = format!("link[rel=\"preload\"][href=\"{}\"]", preload.href);
        if let Ok(Some(_)) = document.query_selector(&selector) {
            continue;
        }
        let Ok(link) = document.create_element("link") else {
            continue;
        };
        let _ = link.set_attribute("rel", "preload");
        let _ = link.set_attribute("href", preload.href);
        let _ = link.set_attribute("as", preload.kind);
        if head.append_child(&link).is_ok() {
            log!("Preloading {} ({})", preload.href, preload.kind);
        }
    }
}

/// Geometry of every `section[id]` on the page
pub fn section_bounds() -> Vec<SectionBounds> {
    query_all("section[id]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| {
            SectionBounds::new(
                el.id(),
                f64::from(el.offset_top()),
                f64::from(el.offset_height()),
            )
        })
        .collect()
}

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Feed scroll positions into the controller, starting with the current one
pub fn install_scroll_handler(controller: LandingController) {
    let Some(window) = web_sys::window() else {
        return;
    };

    controller.on_scroll(scroll_y(), &section_bounds());

    let on_scroll = Closure::<dyn Fn()>::new(move || {
        controller.on_scroll(scroll_y(), &section_bounds());
    });
    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}

/// Smoothly bring the section with the given id to the top of the viewport
pub fn scroll_to_section(id: &str) {
    let Some(target) = document().and_then(|doc| doc.get_element_by_id(id)) else {
        warn!("No section with id {:?}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Close the mobile menu when Escape is pressed
pub fn install_escape_handler(controller: LandingController) {
    let Some(document) = document() else {
        return;
    };
    let on_keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            controller.close_menu();
        }
    });
    let _ =
        document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

/// Keep Tab focus cycling inside `container` while `is_active` holds
pub fn trap_focus(container: &Element, is_active: impl Fn() -> bool + 'static) {
    let scope = container.clone();
    let on_keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
        if ev.key() != "Tab" || !is_active() {
            return;
        }
        let Ok(list) = scope.query_selector_all(FOCUSABLE_SELECTOR) else {
            return;
        };
        let focusable: Vec<HtmlElement> = (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect();

        let active = document().and_then(|doc| doc.active_element());
        let position = active.and_then(|active| {
            focusable
                .iter()
                .position(|el| el.unchecked_ref::<Element>() == &active)
        });

        if let Some(index) = focus_trap_target(focusable.len(), position, ev.shift_key()) {
            ev.prevent_default();
            let _ = focusable[index].focus();
        }
    });
    let _ =
        container.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

/// Log uncaught script errors and unhandled promise rejections
pub fn install_error_handlers() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_error = Closure::<dyn Fn(web_sys::ErrorEvent)>::new(|ev: web_sys::ErrorEvent| {
        error!(
            "Uncaught error: {} ({}:{}:{})",
            ev.message(),
            ev.filename(),
            ev.lineno(),
            ev.colno()
        );
    });
    let _ = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    on_error.forget();

    let on_rejection = Closure::<dyn Fn(web_sys::PromiseRejectionEvent)>::new(
        |ev: web_sys::PromiseRejectionEvent| {
            error!("Unhandled promise rejection: {:?}", ev.reason());
        },
    );
    let _ = window.add_event_listener_with_callback(
        "unhandledrejection",
        on_rejection.as_ref().unchecked_ref(),
    );
    on_rejection.forget();
}

/// Device class of the current viewport
pub fn device_class() -> DeviceClass {
    let width = web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::INFINITY);
    DeviceClass::from_width(width)
}
