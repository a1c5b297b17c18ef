//! `window.CapsuleAI`: helpers exposed to other scripts on the page

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Function, Object, Reflect};
use leptos::logging::{error, log};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::core::utils::{DeviceClass, Throttle};
use crate::ui::dom;

/// Name of the global object the helpers are attached to
pub const NAMESPACE: &str = "CapsuleAI";

fn invoke(func: &Function) {
    if let Err(err) = func.call0(&JsValue::NULL) {
        error!("CapsuleAI callback failed: {:?}", err);
    }
}

/// Wrap `func` so it runs once, `wait_ms` after the last call
pub fn debounce(func: Function, wait_ms: u32) -> Function {
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let wrapped = Closure::<dyn FnMut()>::new(move || {
        let func = func.clone();
        let timeout = Timeout::new(wait_ms, move || invoke(&func));
        // dropping the previous timeout cancels it
        pending.borrow_mut().replace(timeout);
    });
    wrapped.into_js_value().unchecked_into()
}

/// Wrap `func` so it runs on the first call and then at most once per `limit_ms`
pub fn throttle(func: Function, limit_ms: u32) -> Function {
    let mut gate = Throttle::new(f64::from(limit_ms));
    let wrapped = Closure::<dyn FnMut()>::new(move || {
        if gate.try_fire(js_sys::Date::now()) {
            invoke(&func);
        }
    });
    wrapped.into_js_value().unchecked_into()
}

fn set(target: &Object, name: &str, value: JsValue) {
    if let Err(err) = Reflect::set(target, &JsValue::from_str(name), &value) {
        error!("Failed to register CapsuleAI.{}: {:?}", name, err);
    }
}

/// Attach the helper namespace to `window`
pub fn install() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let ns = Object::new();

    set(
        &ns,
        "debounce",
        Closure::<dyn Fn(Function, u32) -> Function>::new(debounce).into_js_value(),
    );
    set(
        &ns,
        "throttle",
        Closure::<dyn Fn(Function, u32) -> Function>::new(throttle).into_js_value(),
    );
    set(
        &ns,
        "deviceClass",
        Closure::<dyn Fn() -> String>::new(|| dom::device_class().as_str().to_string())
            .into_js_value(),
    );
    set(
        &ns,
        "isMobile",
        Closure::<dyn Fn() -> bool>::new(|| dom::device_class() == DeviceClass::Mobile)
            .into_js_value(),
    );
    set(
        &ns,
        "isTablet",
        Closure::<dyn Fn() -> bool>::new(|| dom::device_class() == DeviceClass::Tablet)
            .into_js_value(),
    );
    set(
        &ns,
        "isDesktop",
        Closure::<dyn Fn() -> bool>::new(|| dom::device_class() == DeviceClass::Desktop)
            .into_js_value(),
    );
    set(
        &ns,
        "trapFocus",
        Closure::<dyn Fn(web_sys::Element)>::new(|el: web_sys::Element| {
            dom::trap_focus(&el, || true)
        })
        .into_js_value(),
    );
    set(
        &ns,
        "initLazyLoading",
        Closure::<dyn Fn()>::new(dom::init_lazy_loading).into_js_value(),
    );
    set(
        &ns,
        "initScrollAnimations",
        Closure::<dyn Fn()>::new(dom::init_scroll_animations).into_js_value(),
    );
    set(
        &ns,
        "preloadResources",
        Closure::<dyn Fn()>::new(dom::preload_resources).into_js_value(),
    );

    if Reflect::set(&window, &JsValue::from_str(NAMESPACE), &ns).is_ok() {
        log!("window.{} helpers registered", NAMESPACE);
    }
}
