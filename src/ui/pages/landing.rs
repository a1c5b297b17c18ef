//! Landing page component
//!
//! The Capsule AI marketing page:
//! - SEO meta tags
//! - Navbar with active-section highlighting and a mobile menu
//! - Hero section with a typewriter heading and staggered statistics
//! - Features grid with lazily loaded previews
//! - Credit package pricing cards
//! - Rotating testimonials
//! - Contact form with a local acknowledgment
//! - Footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::carousel::ROTATION_INTERVAL_MS;
use crate::core::content::{
    CREDIT_PACKAGES, CreditPackage, FEATURES, FREE_CREDITS, Feature, HERO_IMAGE_PATH,
    HERO_SUBTITLE, HERO_TITLE, NAV_LINKS, STATS, STYLESHEET_PATH, TESTIMONIALS, Testimonial,
};
use crate::core::motion::stagger_delay_ms;
use crate::core::{ContactForm, HoverLift, Typewriter};
use crate::ui::button::{ButtonSize, ButtonVariant, LinkButton, SubmitButton};
use crate::ui::controller::{provide_landing_controller, use_landing_controller};
use crate::ui::form::{FormField, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::NotificationsContainer;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    #[cfg_attr(feature = "ssr", allow(unused_variables))]
    let controller = provide_landing_controller();

    // Page-wide listeners and observers, once the markup is mounted
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use crate::ui::dom;

        dom::preload_resources();
        dom::install_scroll_handler(controller);
        dom::install_escape_handler(controller);
        dom::init_scroll_animations();
        dom::init_lazy_loading();
        dom::track_feature_views(controller);
    });

    view! {
        <SeoMeta />

        <Navbar />
        <main>
            <HeroSection />
            <FeaturesSection />
            <PricingSection />
            <TestimonialsSection />
            <ContactSection />
        </main>
        <Footer />

        <NotificationsContainer />
    }
}

/// SEO meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Capsule AI - Professional AI Image Generation" />
        <Meta name="description" content="Create stunning images with Stable Diffusion XL, ControlNet and smart segmentation. Pay per credit, no GPU required." />
        <Meta name="keywords" content="AI art, image generation, Stable Diffusion, SDXL, ControlNet, inpainting, AI images" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Capsule AI - Professional AI Image Generation" />
        <Meta property="og:description" content="Create stunning AI art in seconds. 50 free credits for every new account." />
        <Meta property="og:image" content=HERO_IMAGE_PATH />

        <Link rel="stylesheet" href=STYLESHEET_PATH />
    }
}

/// Fixed navigation bar
#[component]
fn Navbar() -> impl IntoView {
    let controller = use_landing_controller();
    let menu_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    menu_ref.on_load(move |menu| {
        crate::ui::dom::trap_focus(&menu, move || controller.is_menu_open_untracked());
    });

    view! {
        <nav class="navbar" class:scrolled=move || controller.is_scrolled()>
            <div class="nav-container">
                <a
                    href="#home"
                    class="nav-logo"
                    on:click=move |ev| {
                        controller.follow_link(&ev, "#home");
                    }
                >
                    <span class="nav-logo-mark" aria-hidden="true">"◆"</span>
                    "Capsule AI"
                </a>

                <div node_ref=menu_ref class=move || format!("nav-menu {}", controller.menu_class())>
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let href = format!("#{}", link.section);
                            let target = href.clone();
                            let section = link.section;
                            view! {
                                <a
                                    href=href
                                    class="nav-link"
                                    class:active=move || controller.is_active_section(section)
                                    on:click=move |ev| {
                                        controller.follow_link(&ev, &target);
                                    }
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <LinkButton label="Launch App" href="/app" />
                </div>

                <button
                    class=move || format!("hamburger {}", controller.menu_class())
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || controller.is_menu_open()
                    on:click=move |_| controller.toggle_menu()
                >
                    {move || {
                        if controller.is_menu_open() {
                            view! { <Icon name=icons::X /> }
                        } else {
                            view! { <Icon name=icons::MENU /> }
                        }
                    }}
                </button>
            </div>
        </nav>
    }
}

/// Hero section with the typewriter heading
#[component]
fn HeroSection() -> impl IntoView {
    let controller = use_landing_controller();
    let typewriter = StoredValue::new(Typewriter::new(HERO_TITLE));

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use crate::core::motion::{TYPEWRITER_CHAR_INTERVAL_MS, TYPEWRITER_START_DELAY_MS};
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        // Typed length follows wall-clock time so throttled timers catch up
        let len = typewriter.with_value(|tw| tw.len());
        let started = js_sys::Date::now();
        spawn_local(async move {
            TimeoutFuture::new(TYPEWRITER_START_DELAY_MS).await;
            loop {
                let elapsed = (js_sys::Date::now() - started).max(0.0) as u64;
                let shown = typewriter.with_value(|tw| tw.visible_at(elapsed));
                controller.typed_chars.set(shown);
                if shown >= len {
                    break;
                }
                TimeoutFuture::new(TYPEWRITER_CHAR_INTERVAL_MS).await;
            }
        });

        for index in 0..STATS.len() {
            spawn_local(async move {
                TimeoutFuture::new(stagger_delay_ms(index)).await;
                controller.show_stat(index);
            });
        }
    });

    let typed = move || typewriter.with_value(|tw| tw.prefix(controller.typed_chars.get()));

    view! {
        <section id="home" class="hero">
            <div class="hero-container">
                <div class="hero-content">
                    <h1 class="hero-title" aria-label=HERO_TITLE>
                        <span aria-hidden="true">{typed}</span>
                        <span class="hero-caret" aria-hidden="true">"|"</span>
                    </h1>
                    <p class="hero-subtitle">{HERO_SUBTITLE}</p>

                    <div class="hero-buttons">
                        <LinkButton label="Start Creating" href="/app" size=ButtonSize::Large />
                        <LinkButton
                            label="View Pricing"
                            href="#pricing"
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Large
                        />
                    </div>

                    <div class="hero-stats">
                        {STATS
                            .iter()
                            .enumerate()
                            .map(|(index, stat)| {
                                view! {
                                    <div
                                        class="stat"
                                        class:visible=move || controller.is_stat_shown(index)
                                    >
                                        <span class="stat-value">{stat.value}</span>
                                        <span class="stat-label">{stat.label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="hero-image">
                    <img src=HERO_IMAGE_PATH alt="Gallery of images generated with Capsule AI" />
                </div>
            </div>
        </section>
    }
}

/// Features grid
#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header reveal-on-scroll">
                    <h2 class="section-title">"Everything You Need to Create"</h2>
                    <p class="section-subtitle">
                        "A complete Stable Diffusion toolkit, hosted and ready to use."
                    </p>
                </div>

                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=*feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature card component
#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="feature-card" data-feature=feature.title>
            <div class="feature-icon">
                <Icon name=feature.icon />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
            <img class="feature-preview lazy" data-src=feature.image alt=feature.title />
        </article>
    }
}

/// Pricing section component
#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header reveal-on-scroll">
                    <h2 class="section-title">"Simple Credit Pricing"</h2>
                    <p class="section-subtitle">
                        {format!(
                            "Every account starts with {} free credits. Top up only when you need more.",
                            FREE_CREDITS,
                        )}
                    </p>
                </div>

                <div class="pricing-grid">
                    {CREDIT_PACKAGES
                        .iter()
                        .map(|package| view! { <PricingCard package=*package /> })
                        .collect_view()}
                </div>

                <p class="pricing-note reveal-on-scroll">
                    "Credits never expire. Pay by card or cryptocurrency."
                </p>
            </div>
        </section>
    }
}

/// Pricing card component
#[component]
fn PricingCard(package: CreditPackage) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let cta_variant = if package.highlighted {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };

    view! {
        <div
            class=if package.highlighted { "pricing-card featured" } else { "pricing-card" }
            data-package=package.id
            style=move || HoverLift::PricingCard.style(hovered.get())
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            {package.highlighted.then(|| view! { <div class="pricing-badge">"Most Popular"</div> })}

            <h3 class="pricing-name">{package.name}</h3>
            <div class="pricing-price">{package.price_label()}</div>
            <div class="pricing-credits">{format!("{} credits", package.credits)}</div>

            <ul class="pricing-features">
                <li>
                    <Icon name=icons::CHECK />
                    {format!("{} per credit", package.per_credit_label())}
                </li>
                <li>
                    <Icon name=icons::CHECK />
                    "All models and styles"
                </li>
                <li>
                    <Icon name=icons::CHECK />
                    "Commercial usage rights"
                </li>
            </ul>

            <LinkButton label="Get Credits" href="/app" variant=cta_variant />
        </div>
    }
}

/// Testimonials carousel
#[component]
fn TestimonialsSection() -> impl IntoView {
    let controller = use_landing_controller();

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use gloo_timers::callback::Interval;

        // Runs for the lifetime of the page
        Interval::new(ROTATION_INTERVAL_MS, move || {
            controller.advance_testimonial();
        })
        .forget();
    });

    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header reveal-on-scroll">
                    <h2 class="section-title">"Loved by Creators"</h2>
                    <p class="section-subtitle">
                        {format!("A new story every {} seconds.", ROTATION_INTERVAL_MS / 1000)}
                    </p>
                </div>

                <div class="testimonials-track">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, testimonial)| {
                            view! { <TestimonialCard index=index testimonial=*testimonial /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(index: usize, testimonial: Testimonial) -> impl IntoView {
    let controller = use_landing_controller();
    let emphasis = move || controller.testimonial_emphasis(index);

    view! {
        <blockquote
            class="testimonial-card"
            class:current=move || emphasis().is_emphasized()
            style=move || emphasis().style()
        >
            <Icon name=icons::QUOTE class="testimonial-quote-icon" />
            <p class="testimonial-text">{testimonial.quote}</p>
            <footer class="testimonial-author">
                <span class="testimonial-name">{testimonial.author}</span>
                <span class="testimonial-role">{testimonial.role}</span>
                <span class="testimonial-rating" aria-label="5 out of 5 stars">
                    {(0..5).map(|_| view! { <Icon name=icons::STAR class="star" /> }).collect_view()}
                </span>
            </footer>
        </blockquote>
    }
}

/// Contact form section
#[component]
fn ContactSection() -> impl IntoView {
    let controller = use_landing_controller();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        controller.submit_contact(&form);

        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
    };

    view! {
        <section id="contact" class="contact">
            <div class="container contact-container">
                <div class="contact-info reveal-on-scroll">
                    <h2 class="section-title">"Get in Touch"</h2>
                    <p class="section-subtitle">
                        "Questions about credits, teams or custom models? Send us a message."
                    </p>
                    <p class="contact-email">
                        <Icon name=icons::MAIL />
                        "support@capsule.ai"
                    </p>
                </div>

                <form id="contact-form" class="contact-form reveal-on-scroll" on:submit=on_submit>
                    <FormField label="Name" name="name" placeholder="Your name" value=name />
                    <FormField
                        label="Email"
                        name="email"
                        input_type="email"
                        placeholder="you@example.com"
                        value=email
                    />
                    <TextAreaField
                        label="Message"
                        name="message"
                        placeholder="How can we help?"
                        value=message
                    />
                    <SubmitButton label="Send Message" />
                </form>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let controller = use_landing_controller();

    view! {
        <footer class="footer">
            <div class="container footer-container">
                <div class="footer-brand">
                    <span class="nav-logo-mark" aria-hidden="true">"◆"</span>
                    "Capsule AI"
                </div>
                <nav class="footer-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let href = format!("#{}", link.section);
                            let target = href.clone();
                            view! {
                                <a
                                    href=href
                                    on:click=move |ev| {
                                        controller.follow_link(&ev, &target);
                                    }
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <p class="footer-copy">"© 2025 Capsule AI. All rights reserved."</p>
            </div>
        </footer>
    }
}
