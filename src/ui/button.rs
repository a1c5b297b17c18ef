//! Call-to-action buttons

use leptos::prelude::*;

use crate::core::HoverLift;
use crate::ui::controller::use_landing_controller;

/// Button variant types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
}

/// Button size options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonSize {
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-large",
        }
    }
}

/// Link styled as a `.btn`
///
/// Lifts on hover, logs an analytics event on click and smooth-scrolls when
/// `href` is an in-page anchor. Other targets (such as `/app`, answered by
/// the server) bypass the client-side router.
#[component]
pub fn LinkButton(
    /// Visible label, also used as the analytics label
    label: &'static str,
    /// Link target
    href: &'static str,
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
) -> impl IntoView {
    let controller = use_landing_controller();
    let (hovered, set_hovered) = signal(false);
    let classes = format!("btn {} {}", variant.class(), size.class());

    view! {
        <a
            href=href
            rel="external"
            class=classes
            style=move || HoverLift::Button.style(hovered.get())
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
            on:click=move |ev| {
                controller.record_click(label);
                controller.follow_link(&ev, href);
            }
        >
            {label}
        </a>
    }
}

/// Form submit button styled as a `.btn`
#[component]
pub fn SubmitButton(
    /// Visible label, also used as the analytics label
    label: &'static str,
) -> impl IntoView {
    let controller = use_landing_controller();
    let (hovered, set_hovered) = signal(false);

    view! {
        <button
            type="submit"
            class="btn btn-primary btn-block"
            style=move || HoverLift::Button.style(hovered.get())
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
            on:click=move |_| controller.record_click(label)
        >
            {label}
        </button>
    }
}
