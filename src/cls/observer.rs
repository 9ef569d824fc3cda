use std::{cell::Cell, rc::Rc};

use serde::{Deserialize, Serialize};

use super::ClsRating;

/// One layout-shift measurement reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutShiftEntry {
    pub value: f64,
    /// Shifts right after user input are expected and do not count
    pub had_recent_input: bool,
    #[serde(default)]
    pub start_time: f64,
}

impl LayoutShiftEntry {
    pub fn unexpected(value: f64) -> Self {
        Self {
            value,
            had_recent_input: false,
            start_time: 0.0,
        }
    }

    pub fn after_input(value: f64) -> Self {
        Self {
            value,
            had_recent_input: true,
            start_time: 0.0,
        }
    }

    /// Whether the entry contributes to the cumulative score
    pub fn counts(&self) -> bool {
        // NaN fails the comparison
        !self.had_recent_input && self.value >= 0.0
    }
}

pub type LayoutShiftSink = Rc<dyn Fn(LayoutShiftEntry)>;

/// A live observation, stopped by [`disconnect`](LayoutShiftSubscription::disconnect)
pub trait LayoutShiftSubscription {
    fn disconnect(&mut self);
}

/// Platform capability reporting layout shifts
pub trait LayoutShiftSource {
    /// Starts delivering every reported shift to `sink`.
    ///
    /// Returns `None` when the platform cannot observe layout shifts.
    fn observe(&self, sink: LayoutShiftSink) -> Option<Box<dyn LayoutShiftSubscription>>;
}

/// Running CLS total of one observation
pub struct ClsObserver {
    subscription: Option<Box<dyn LayoutShiftSubscription>>,
    score: Rc<Cell<f64>>,
}

impl ClsObserver {
    pub fn cumulative_score(&self) -> f64 {
        self.score.get()
    }

    pub fn rating(&self) -> ClsRating {
        ClsRating::classify(self.cumulative_score())
    }

    pub fn is_connected(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stops the observation, the score keeps its last value
    pub fn disconnect(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            log::debug!("ClsObserver - disconnect");
            subscription.disconnect();
        }
    }
}

impl Drop for ClsObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl core::fmt::Debug for ClsObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClsObserver")
            .field("connected", &self.is_connected())
            .field("score", &self.score.get())
            .finish()
    }
}

/// Observes layout shifts from `source`, calling `callback` with the new cumulative score
/// after every shift that was not caused by recent user input.
///
/// Returns `None`, without ever calling `callback`, when `source` cannot observe shifts.
pub fn measure_cls(source: &dyn LayoutShiftSource, callback: impl Fn(f64) + 'static) -> Option<ClsObserver> {
    let score = Rc::new(Cell::new(0.0));
    let sink_score = score.clone();
    let sink: LayoutShiftSink = Rc::new(move |entry: LayoutShiftEntry| {
        if !entry.counts() {
            return;
        }
        let total = sink_score.get() + entry.value;
        sink_score.set(total);
        if entry.value > 0.01 {
            log::debug!("layout shift detected: {:.4} (cls {total:.4})", entry.value);
        }
        callback(total);
    });

    let Some(subscription) = source.observe(sink) else {
        log::warn!("layout-shift observation not supported, CLS will not be measured");
        return None;
    };
    Some(ClsObserver {
        subscription: Some(subscription),
        score,
    })
}

/// A source for platforms without layout-shift reporting
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedLayoutShiftSource;

impl LayoutShiftSource for UnsupportedLayoutShiftSource {
    fn observe(&self, _sink: LayoutShiftSink) -> Option<Box<dyn LayoutShiftSubscription>> {
        None
    }
}
