use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name without the `.svg` extension
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/static/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped under `/static/icons`
pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const CHECK: &str = "check";
    pub const STAR: &str = "star";
    pub const QUOTE: &str = "quote";
    pub const MAIL: &str = "mail";
}
