//! Timing and transform rules for the page's entrance and hover effects

/// Delay before the hero title starts typing
pub const TYPEWRITER_START_DELAY_MS: u32 = 1000;

/// Time between two typed characters
pub const TYPEWRITER_CHAR_INTERVAL_MS: u32 = 50;

/// Offset between two consecutive statistic widgets fading in
pub const STAT_STAGGER_MS: u32 = 200;

/// Fraction of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin for reveal observation; shrinks the viewport bottom by 50px
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Root margin for lazy images; starts loading 50px before the viewport
pub const LAZY_IMAGE_ROOT_MARGIN: &str = "50px";

/// Class added to an element once it has been revealed
pub const VISIBLE_CLASS: &str = "visible";

/// Character-by-character reveal of a heading
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Number of characters to type
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Prefix made of the first `count` characters
    pub fn prefix(&self, count: usize) -> String {
        self.chars.iter().take(count).collect()
    }

    /// Characters visible `elapsed_ms` after the page mounted
    pub fn visible_at(&self, elapsed_ms: u64) -> usize {
        let start = u64::from(TYPEWRITER_START_DELAY_MS);
        if elapsed_ms < start {
            return 0;
        }
        let typed = (elapsed_ms - start) / u64::from(TYPEWRITER_CHAR_INTERVAL_MS) + 1;
        (typed as usize).min(self.len())
    }
}

/// Fade-in delay for the statistic widget at `index`
pub fn stagger_delay_ms(index: usize) -> u32 {
    STAT_STAGGER_MS.saturating_mul(index as u32)
}

/// Pointer-hover lift applied to interactive cards and buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverLift {
    /// Call-to-action buttons (`.btn`)
    Button,
    /// Pricing cards
    PricingCard,
}

impl HoverLift {
    /// CSS transform for the hovered or resting state
    pub fn transform(&self, hovered: bool) -> &'static str {
        match (self, hovered) {
            (HoverLift::Button, true) => "translateY(-2px) scale(1.05)",
            (HoverLift::PricingCard, true) => "translateY(-10px) scale(1.02)",
            (_, false) => "translateY(0) scale(1)",
        }
    }

    pub fn style(&self, hovered: bool) -> String {
        format!("transform: {};", self.transform(hovered))
    }
}

/// Deferred image source held in `data-src` until the image is loaded
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LazyImage {
    src: Option<String>,
    data_src: Option<String>,
}

impl LazyImage {
    pub fn new(src: Option<String>, data_src: Option<String>) -> Self {
        Self { src, data_src }
    }

    /// Move the deferred URL into `src`; only the first call returns it
    pub fn load(&mut self) -> Option<&str> {
        let url = self.data_src.take()?;
        self.src = Some(url);
        self.src.as_deref()
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }
}
