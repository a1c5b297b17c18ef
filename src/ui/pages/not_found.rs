//! Not found page component
//!
//! Shown when the client router lands on a path the site does not have. The
//! server answers the same paths with a redirect home.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <div class="container">
                <h1 class="section-title">"404"</h1>
                <p class="section-subtitle">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <A href="/" attr:class="btn btn-primary">
                    "Back to Capsule AI"
                </A>
            </div>
        </section>
    }
}
