//! Client-side analytics
//!
//! Events are only written to the diagnostic log. There is no collector
//! endpoint, so nothing is transmitted.

use serde::Serialize;
use std::collections::HashSet;

/// Something worth recording about a visit
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    /// A `.btn` element was clicked
    ButtonClick { label: String },
    /// A feature card entered the viewport for the first time
    FeatureView { feature: String },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::ButtonClick { .. } => "button_click",
            AnalyticsEvent::FeatureView { .. } => "feature_view",
        }
    }

    /// Single diagnostic line describing the event
    pub fn log_line(&self) -> String {
        let payload = serde_json::to_string(self)
            .unwrap_or_else(|_| format!("{{\"event\":\"{}\"}}", self.name()));
        format!("[Analytics] {}", payload)
    }
}

/// Tracks which one-shot events have already been recorded
#[derive(Clone, Debug, Default)]
pub struct AnalyticsLog {
    seen_features: HashSet<String>,
    recorded: usize,
}

impl AnalyticsLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Button clicks are recorded every time
    pub fn button_click(&mut self, label: &str) -> AnalyticsEvent {
        self.recorded += 1;
        AnalyticsEvent::ButtonClick {
            label: label.trim().to_string(),
        }
    }

    /// Feature views are recorded on the first viewport entry only
    pub fn feature_view(&mut self, feature: &str) -> Option<AnalyticsEvent> {
        if !self.seen_features.insert(feature.to_string()) {
            return None;
        }
        self.recorded += 1;
        Some(AnalyticsEvent::FeatureView {
            feature: feature.to_string(),
        })
    }

    /// Total number of events recorded so far
    pub fn recorded(&self) -> usize {
        self.recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_click_is_recorded() {
        let mut log = AnalyticsLog::new();
        log.button_click("Start Creating");
        log.button_click("Start Creating");
        assert_eq!(log.recorded(), 2);
    }

    #[test]
    fn test_feature_view_recorded_once() {
        let mut log = AnalyticsLog::new();
        assert!(log.feature_view("ControlNet").is_some());
        assert!(log.feature_view("ControlNet").is_none());
        assert!(log.feature_view("Inpainting").is_some());
        assert_eq!(log.recorded(), 2);
    }

    #[test]
    fn test_click_label_is_trimmed() {
        let mut log = AnalyticsLog::new();
        let event = log.button_click("  Get Started \n");
        assert_eq!(
            event,
            AnalyticsEvent::ButtonClick {
                label: "Get Started".to_string()
            }
        );
    }

    #[test]
    fn test_log_line_format() {
        let event = AnalyticsEvent::FeatureView {
            feature: "SDXL".to_string(),
        };
        assert_eq!(
            event.log_line(),
            r#"[Analytics] {"event":"feature_view","feature":"SDXL"}"#
        );
        assert_eq!(event.name(), "feature_view");
    }
}
