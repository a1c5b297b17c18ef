//! Testimonial rotation state
//!
//! A round-robin selector over the testimonial cards. One card is emphasized at
//! a time; every other card is dimmed. The index only moves through
//! [`TestimonialRotation::advance`], so it always stays within bounds.

/// Interval between two rotation ticks
pub const ROTATION_INTERVAL_MS: u32 = 5000;

/// Visual treatment of a single testimonial card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEmphasis {
    /// Full opacity, neutral position
    Emphasized,
    /// Faded and shifted aside
    Dimmed,
}

impl CardEmphasis {
    /// Inline style applied to the card element
    pub fn style(&self) -> &'static str {
        match self {
            CardEmphasis::Emphasized => "opacity: 1; transform: translateX(0);",
            CardEmphasis::Dimmed => "opacity: 0.5; transform: translateX(20px);",
        }
    }

    pub fn is_emphasized(&self) -> bool {
        matches!(self, CardEmphasis::Emphasized)
    }
}

/// Cyclic index over `len` testimonial cards
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestimonialRotation {
    current: usize,
    len: usize,
}

impl TestimonialRotation {
    /// Start at the first card
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    /// Index of the emphasized card, `None` when there are no cards
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.current)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the next card, wrapping after the last one
    ///
    /// Returns the new index. With no cards this is a no-op.
    pub fn advance(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.current = (self.current + 1) % self.len;
        Some(self.current)
    }

    /// Emphasis for the card at `index`
    pub fn emphasis(&self, index: usize) -> CardEmphasis {
        if self.current() == Some(index) {
            CardEmphasis::Emphasized
        } else {
            CardEmphasis::Dimmed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_card() {
        let rotation = TestimonialRotation::new(3);
        assert_eq!(rotation.current(), Some(0));
        assert_eq!(rotation.emphasis(0), CardEmphasis::Emphasized);
        assert_eq!(rotation.emphasis(1), CardEmphasis::Dimmed);
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let mut rotation = TestimonialRotation::new(4);
        for _ in 0..50 {
            let index = rotation.advance().unwrap();
            assert!(index < 4);
        }
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut rotation = TestimonialRotation::new(5);
        let start = rotation.current();
        for _ in 0..5 {
            rotation.advance();
        }
        assert_eq!(rotation.current(), start);
    }

    #[test]
    fn test_exactly_one_card_emphasized() {
        let mut rotation = TestimonialRotation::new(3);
        for _ in 0..7 {
            let emphasized = (0..3)
                .filter(|i| rotation.emphasis(*i).is_emphasized())
                .count();
            assert_eq!(emphasized, 1);
            rotation.advance();
        }
    }

    #[test]
    fn test_three_card_timeline() {
        let mut rotation = TestimonialRotation::new(3);
        assert_eq!(rotation.current(), Some(0));

        // t = 5000ms
        rotation.advance();
        assert_eq!(rotation.current(), Some(1));

        // t = 10000ms
        rotation.advance();
        assert_eq!(rotation.current(), Some(2));

        // t = 15000ms
        rotation.advance();
        assert_eq!(rotation.current(), Some(0));
    }

    /// Card shown after `elapsed_ms`, with one tick per rotation interval
    fn index_at(len: usize, elapsed_ms: u64) -> Option<usize> {
        let mut rotation = TestimonialRotation::new(len);
        for _ in 0..elapsed_ms / u64::from(ROTATION_INTERVAL_MS) {
            rotation.advance();
        }
        rotation.current()
    }

    #[test]
    fn test_index_follows_elapsed_ticks() {
        assert_eq!(index_at(3, 0), Some(0));
        assert_eq!(index_at(3, 4999), Some(0));
        assert_eq!(index_at(3, 5000), Some(1));
        assert_eq!(index_at(3, 10000), Some(2));
        assert_eq!(index_at(3, 15000), Some(0));
        assert_eq!(index_at(0, 15000), None);
    }

    #[test]
    fn test_empty_rotation() {
        let mut rotation = TestimonialRotation::new(0);
        assert!(rotation.is_empty());
        assert_eq!(rotation.current(), None);
        assert_eq!(rotation.advance(), None);
        assert_eq!(rotation.emphasis(0), CardEmphasis::Dimmed);
    }

    #[test]
    fn test_single_card_always_emphasized() {
        let mut rotation = TestimonialRotation::new(1);
        rotation.advance();
        rotation.advance();
        assert_eq!(rotation.current(), Some(0));
        assert!(rotation.emphasis(0).is_emphasized());
    }

    #[test]
    fn test_emphasis_styles_differ() {
        assert!(CardEmphasis::Emphasized.style().contains("opacity: 1"));
        assert!(CardEmphasis::Dimmed.style().contains("opacity: 0.5"));
    }
}
