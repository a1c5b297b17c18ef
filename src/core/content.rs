//! Static copy rendered on the landing page

/// Hero heading revealed by the typewriter
pub const HERO_TITLE: &str = "Create Stunning AI Art in Seconds";

pub const HERO_SUBTITLE: &str = "Professional Stable Diffusion image generation with ControlNet, \
inpainting and smart segmentation. No setup, no GPU, just pay for what you create.";

/// Hero illustration, preloaded before it is needed
pub const HERO_IMAGE_PATH: &str = "/static/images/hero-image.jpg";

/// Site stylesheet, preloaded and linked from the page head
pub const STYLESHEET_PATH: &str = "/static/css/capsule-ai.css";

/// Resource hint emitted as `<link rel="preload">`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preload {
    pub href: &'static str,
    /// Value of the `as` attribute
    pub kind: &'static str,
}

pub const PRELOADS: &[Preload] = &[
    Preload {
        href: HERO_IMAGE_PATH,
        kind: "image",
    },
    Preload {
        href: STYLESHEET_PATH,
        kind: "style",
    },
];

/// Entry of the top navigation bar, pointing at a `section[id]`
#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub section: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        section: "home",
        label: "Home",
    },
    NavLink {
        section: "features",
        label: "Features",
    },
    NavLink {
        section: "pricing",
        label: "Pricing",
    },
    NavLink {
        section: "testimonials",
        label: "Reviews",
    },
    NavLink {
        section: "contact",
        label: "Contact",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "50K+",
        label: "Images Generated",
    },
    Stat {
        value: "10K+",
        label: "Happy Creators",
    },
    Stat {
        value: "99.9%",
        label: "Uptime",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Lazily loaded preview image
    pub image: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "sparkles",
        title: "SDXL Generation",
        description: "High resolution images from a single prompt, tuned presets included.",
        image: "/static/images/feature-sdxl.jpg",
    },
    Feature {
        icon: "control",
        title: "ControlNet",
        description: "Guide composition with pose, depth and edge maps for precise results.",
        image: "/static/images/feature-controlnet.jpg",
    },
    Feature {
        icon: "brush",
        title: "Inpainting & Outpainting",
        description: "Repair details or extend the canvas beyond the original frame.",
        image: "/static/images/feature-inpaint.jpg",
    },
    Feature {
        icon: "target",
        title: "Smart Segmentation",
        description: "SAM and GroundingDINO pick out objects from a text description.",
        image: "/static/images/feature-segment.jpg",
    },
    Feature {
        icon: "layers",
        title: "Style Presets",
        description: "Hundreds of curated styles, from photography to anime.",
        image: "/static/images/feature-styles.jpg",
    },
    Feature {
        icon: "bolt",
        title: "Fast Cloud GPUs",
        description: "Nothing to install. Generation runs on dedicated hardware.",
        image: "/static/images/feature-gpu.jpg",
    },
];

/// Purchasable credit bundle, displayed for information only
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CreditPackage {
    pub id: &'static str,
    pub name: &'static str,
    pub credits: u32,
    pub price_usd: f64,
    pub highlighted: bool,
}

impl CreditPackage {
    /// Price formatted for display, e.g. `$22.50`
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price_usd)
    }

    /// Price of one credit in US cents
    pub fn cents_per_credit(&self) -> f64 {
        if self.credits == 0 {
            return 0.0;
        }
        self.price_usd * 100.0 / f64::from(self.credits)
    }

    /// Per-credit price with one decimal, e.g. `7.5¢`
    pub fn per_credit_label(&self) -> String {
        format!("{:.1}¢", self.cents_per_credit())
    }
}

pub const CREDIT_PACKAGES: &[CreditPackage] = &[
    CreditPackage {
        id: "starter",
        name: "Starter",
        credits: 100,
        price_usd: 10.00,
        highlighted: false,
    },
    CreditPackage {
        id: "creator",
        name: "Creator",
        credits: 250,
        price_usd: 22.50,
        highlighted: true,
    },
    CreditPackage {
        id: "professional",
        name: "Professional",
        credits: 500,
        price_usd: 40.00,
        highlighted: false,
    },
    CreditPackage {
        id: "studio",
        name: "Studio",
        credits: 1200,
        price_usd: 90.00,
        highlighted: false,
    },
];

/// Credits granted to every new account
pub const FREE_CREDITS: u32 = 50;

#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Capsule AI replaced three tools in my workflow. ControlNet support alone is worth it.",
        author: "Maya R.",
        role: "Concept Artist",
    },
    Testimonial {
        quote: "I generate product shots for our store in minutes instead of booking a photographer.",
        author: "Daniel K.",
        role: "E-commerce Owner",
    },
    Testimonial {
        quote: "Pay-per-credit pricing is exactly what a freelancer needs. No subscription guilt.",
        author: "Sofia L.",
        role: "Freelance Designer",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_package_prices() {
        let labels: Vec<String> = CREDIT_PACKAGES.iter().map(|p| p.price_label()).collect();
        assert_eq!(labels, vec!["$10.00", "$22.50", "$40.00", "$90.00"]);
    }

    #[test]
    fn test_bigger_packages_are_cheaper_per_credit() {
        let per_credit: Vec<String> = CREDIT_PACKAGES.iter().map(|p| p.per_credit_label()).collect();
        assert_eq!(per_credit, vec!["10.0¢", "9.0¢", "8.0¢", "7.5¢"]);

        // larger packages are strictly cheaper per credit
        assert!(
            CREDIT_PACKAGES
                .windows(2)
                .all(|pair| pair[1].cents_per_credit() < pair[0].cents_per_credit())
        );
    }

    #[test]
    fn test_single_highlighted_package() {
        let highlighted = CREDIT_PACKAGES.iter().filter(|p| p.highlighted).count();
        assert_eq!(highlighted, 1);
    }

    #[test]
    fn test_nav_links_unique() {
        let mut sections: Vec<&str> = NAV_LINKS.iter().map(|l| l.section).collect();
        sections.sort();
        sections.dedup();
        assert_eq!(sections.len(), NAV_LINKS.len());
    }

    #[test]
    fn test_preloads_cover_hero_and_stylesheet() {
        assert!(PRELOADS.iter().any(|p| p.href == HERO_IMAGE_PATH && p.kind == "image"));
        assert!(PRELOADS.iter().any(|p| p.href == STYLESHEET_PATH && p.kind == "style"));
    }
}
