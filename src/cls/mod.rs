//! # CLS Module
//!
//! Cumulative Layout Shift measurement. The platform capability is reached through the
//! [`LayoutShiftSource`](observer::LayoutShiftSource) port so that the accumulation and
//! classification logic runs the same with a real webview, an in-process test source or no source
//! at all.

use serde::{Deserialize, Serialize};

pub mod hooks;
pub mod observer;
pub mod session;
pub mod webview;

/// Scores strictly below this are `good`
pub const GOOD_THRESHOLD: f64 = 0.1;
/// Scores at or above this are `poor`
pub const POOR_THRESHOLD: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClsRating {
    Good,
    NeedsImprovement,
    Poor,
}

impl ClsRating {
    pub fn classify(score: f64) -> Self {
        if score < GOOD_THRESHOLD {
            Self::Good
        } else if score < POOR_THRESHOLD {
            Self::NeedsImprovement
        } else {
            Self::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::NeedsImprovement => "needs-improvement",
            Self::Poor => "poor",
        }
    }
}

impl core::fmt::Display for ClsRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub mod prelude {
    pub use super::hooks::{use_cls_measurement, LayoutShiftPort};
    pub use super::webview::WebviewLayoutShiftSource;
    pub use super::ClsRating;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries() {
        assert_eq!(ClsRating::classify(0.0), ClsRating::Good);
        assert_eq!(ClsRating::classify(0.0999), ClsRating::Good);
        assert_eq!(ClsRating::classify(0.1), ClsRating::NeedsImprovement);
        assert_eq!(ClsRating::classify(0.2499), ClsRating::NeedsImprovement);
        assert_eq!(ClsRating::classify(0.25), ClsRating::Poor);
        assert_eq!(ClsRating::classify(3.0), ClsRating::Poor);
    }

    #[test]
    fn rating_names() {
        assert_eq!(ClsRating::NeedsImprovement.to_string(), "needs-improvement");
        assert_eq!(ClsRating::Good.as_str(), "good");
        assert_eq!(ClsRating::Poor.as_str(), "poor");
    }
}
