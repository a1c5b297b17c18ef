//! Small helpers shared by the page scripts: device classes, throttling,
//! and focus trapping
//!
//! Timing is expressed as millisecond timestamps supplied by the caller
//! (`Date.now()` in the browser), so the rules can be exercised without a
//! clock.

/// Viewport width below which the page is laid out for phones
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

/// Viewport width below which the page is laid out for tablets
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

/// Coarse device class derived from the viewport width
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_MAX_WIDTH {
            DeviceClass::Mobile
        } else if width < TABLET_MAX_WIDTH {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Desktop => "desktop",
        }
    }
}

/// Leading-edge throttle: the first call passes, later calls pass at most once
/// per `limit_ms`
#[derive(Clone, Debug)]
pub struct Throttle {
    limit_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_fired: None,
        }
    }

    /// Whether a call made at `now_ms` should run; records it if so
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        let ready = match self.last_fired {
            Some(last) => now_ms - last >= self.limit_ms,
            None => true,
        };
        if ready {
            self.last_fired = Some(now_ms);
        }
        ready
    }
}

/// Index to move focus to when Tab is pressed inside a focus trap
///
/// `active` is the position of the focused element among the container's
/// `len` focusable descendants, or `None` when focus is elsewhere. Only the
/// boundaries wrap; everywhere else the browser's own tab order applies and
/// `None` is returned.
pub fn focus_trap_target(len: usize, active: Option<usize>, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (active, shift) {
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}

/// Selector for elements that can receive keyboard focus
pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_class_boundaries() {
        assert_eq!(DeviceClass::from_width(375.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(767.9), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(768.0), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1023.0), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1024.0), DeviceClass::Desktop);
        assert_eq!(DeviceClass::Desktop.as_str(), "desktop");
    }

    #[test]
    fn test_throttle_leading_call_passes() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.try_fire(0.0));
        assert!(!throttle.try_fire(50.0));
        assert!(!throttle.try_fire(99.0));
        assert!(throttle.try_fire(100.0));
        assert!(!throttle.try_fire(150.0));
    }

    #[test]
    fn test_focus_trap_wraps_forward_from_last() {
        assert_eq!(focus_trap_target(4, Some(3), false), Some(0));
    }

    #[test]
    fn test_focus_trap_wraps_backward_from_first() {
        assert_eq!(focus_trap_target(4, Some(0), true), Some(3));
    }

    #[test]
    fn test_focus_trap_leaves_middle_alone() {
        assert_eq!(focus_trap_target(4, Some(1), false), None);
        assert_eq!(focus_trap_target(4, Some(2), true), None);
        assert_eq!(focus_trap_target(4, Some(0), false), None);
    }

    #[test]
    fn test_focus_trap_ignores_focus_outside() {
        assert_eq!(focus_trap_target(3, None, false), None);
        assert_eq!(focus_trap_target(3, None, true), None);
        assert_eq!(focus_trap_target(0, None, false), None);
    }

    #[test]
    fn test_focus_trap_single_element() {
        assert_eq!(focus_trap_target(1, Some(0), false), Some(0));
        assert_eq!(focus_trap_target(1, Some(0), true), Some(0));
    }
}
