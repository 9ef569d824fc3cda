use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{observer::LayoutShiftEntry, ClsRating, GOOD_THRESHOLD};
use crate::utils::CCStr;

/// A shift recorded while a loading session was active
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordedShift {
    pub value: f64,
    pub start_time: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveSession {
    id: CCStr,
    component: CCStr,
    started_at: DateTime<Utc>,
    shifts: Vec<RecordedShift>,
}

/// Outcome of one loading session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub id: CCStr,
    pub component: CCStr,
    pub started_at: DateTime<Utc>,
    pub duration_ms: i64,
    pub cls_during_loading: f64,
    pub shifts: Vec<RecordedShift>,
    pub rating: ClsRating,
    pub passed: bool,
}

impl SessionResult {
    pub fn shift_count(&self) -> usize {
        self.shifts.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClsSummary {
    pub total_measurements: usize,
    pub average_cls: f64,
    pub max_cls: f64,
    pub min_cls: f64,
    pub passed_count: usize,
    pub failed_count: usize,
    /// Percentage of passed sessions
    pub pass_rate: f64,
}

/// Layout shift bookkeeping scoped to loading phases of named components.
///
/// At most one session is active: shifts fed through [`record_shift`](Self::record_shift)
/// are attributed to it, and ending it stores a [`SessionResult`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClsLoadingMeasurement {
    current: Option<ActiveSession>,
    measurements: Vec<SessionResult>,
}

impl ClsLoadingMeasurement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session for `component` and returns its id.
    ///
    /// A session still active is abandoned without producing a result.
    pub fn start_session(&mut self, component: impl Into<CCStr>) -> CCStr {
        let component = component.into();
        let id = CCStr::from(format!("{component}-{}", uuid::Uuid::new_v4()));
        if let Some(previous) = self.current.take() {
            log::warn!("abandoning CLS session {} for {}", previous.id, previous.component);
        }
        log::debug!("started CLS measurement for {component}");
        self.current = Some(ActiveSession {
            id: id.clone(),
            component,
            started_at: Utc::now(),
            shifts: Vec::new(),
        });
        id
    }

    pub fn active_session(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.id.as_ref())
    }

    /// Attributes `entry` to the active session, if any and if it counts towards CLS
    pub fn record_shift(&mut self, entry: LayoutShiftEntry) {
        if !entry.counts() {
            return;
        }
        if let Some(session) = self.current.as_mut() {
            session.shifts.push(RecordedShift {
                value: entry.value,
                start_time: entry.start_time,
            });
        }
    }

    /// Closes session `id`, `None` when it is not the active session
    pub fn end_session(&mut self, id: &str) -> Option<SessionResult> {
        if self.active_session() != Some(id) {
            log::warn!("no active CLS session {id}");
            return None;
        }
        let session = self.current.take()?;
        let cls: f64 = session.shifts.iter().map(|s| s.value).sum();
        let result = SessionResult {
            id: session.id,
            component: session.component,
            started_at: session.started_at,
            duration_ms: (Utc::now() - session.started_at).num_milliseconds(),
            cls_during_loading: cls,
            shifts: session.shifts,
            rating: ClsRating::classify(cls),
            passed: cls < GOOD_THRESHOLD,
        };
        log_result(&result);
        self.measurements.push(result.clone());
        Some(result)
    }

    pub fn measurements(&self) -> &[SessionResult] {
        &self.measurements
    }

    pub fn measurements_for<'a>(&'a self, component: &'a str) -> impl Iterator<Item = &'a SessionResult> {
        self.measurements
            .iter()
            .filter(move |m| &*m.component == component)
    }

    pub fn failed_measurements(&self) -> impl Iterator<Item = &SessionResult> {
        self.measurements.iter().filter(|m| !m.passed)
    }

    pub fn summary(&self) -> ClsSummary {
        if self.measurements.is_empty() {
            return ClsSummary::default();
        }
        let values = self.measurements.iter().map(|m| m.cls_during_loading);
        let total = self.measurements.len();
        let passed = self.measurements.iter().filter(|m| m.passed).count();
        ClsSummary {
            total_measurements: total,
            average_cls: values.clone().sum::<f64>() / total as f64,
            max_cls: values.clone().fold(f64::MIN, f64::max),
            min_cls: values.fold(f64::MAX, f64::min),
            passed_count: passed,
            failed_count: total - passed,
            pass_rate: passed as f64 / total as f64 * 100.0,
        }
    }

    /// Forgets every stored result; an active session is kept
    pub fn clear(&mut self) {
        self.measurements.clear();
    }

    pub fn log_report(&self) {
        let summary = self.summary();
        log::info!(
            "CLS loading report: {} measurements, average {:.4}, max {:.4}, min {:.4}, pass rate {:.1}% ({}/{})",
            summary.total_measurements,
            summary.average_cls,
            summary.max_cls,
            summary.min_cls,
            summary.pass_rate,
            summary.passed_count,
            summary.total_measurements
        );
        for m in self.failed_measurements() {
            log::warn!(
                "CLS loading failure - {}: {:.4} ({} shifts)",
                m.component,
                m.cls_during_loading,
                m.shift_count()
            );
        }
    }
}

fn log_result(result: &SessionResult) {
    log::info!(
        "CLS measurement {}: {:.4} ({}) over {}ms, {} shifts",
        result.component,
        result.cls_during_loading,
        result.rating,
        result.duration_ms,
        result.shift_count()
    );
    if !result.passed {
        log::warn!("CLS of {} exceeds {GOOD_THRESHOLD}", result.component);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(m: &mut ClsLoadingMeasurement, component: &str, shifts: &[f64]) -> SessionResult {
        let id = m.start_session(component);
        for v in shifts {
            m.record_shift(LayoutShiftEntry::unexpected(*v));
        }
        m.end_session(&id).expect("session is active")
    }

    #[test]
    fn session_collects_shifts() {
        let mut m = ClsLoadingMeasurement::new();
        let id = m.start_session("JobList");
        assert!(id.starts_with("JobList-"));
        m.record_shift(LayoutShiftEntry::unexpected(0.02));
        m.record_shift(LayoutShiftEntry::after_input(0.4));
        m.record_shift(LayoutShiftEntry::unexpected(0.03));
        let result = m.end_session(&id).expect("session is active");
        assert_eq!(result.shift_count(), 2);
        assert!((result.cls_during_loading - 0.05).abs() < 1e-12);
        assert_eq!(result.rating, ClsRating::Good);
        assert!(result.passed);
        assert!(result.duration_ms >= 0);
        assert_eq!(m.active_session(), None);
    }

    #[test]
    fn shifts_outside_sessions_are_ignored() {
        let mut m = ClsLoadingMeasurement::new();
        m.record_shift(LayoutShiftEntry::unexpected(0.5));
        let result = session_with(&mut m, "Profile", &[]);
        assert_eq!(result.cls_during_loading, 0.0);
    }

    #[test]
    fn ending_unknown_session() {
        let mut m = ClsLoadingMeasurement::new();
        assert!(m.end_session("nope").is_none());
        let first = m.start_session("A");
        let second = m.start_session("B");
        assert!(m.end_session(&first).is_none());
        assert!(m.end_session(&second).is_some());
        assert!(m.end_session(&second).is_none());
        assert_eq!(m.measurements().len(), 1);
    }

    #[test]
    fn summary_of_sessions() {
        let mut m = ClsLoadingMeasurement::new();
        assert_eq!(m.summary(), ClsSummary::default());

        session_with(&mut m, "JobList", &[0.05]);
        session_with(&mut m, "JobList", &[0.1, 0.2]);
        session_with(&mut m, "Courses", &[]);

        let summary = m.summary();
        assert_eq!(summary.total_measurements, 3);
        assert_eq!(summary.passed_count, 2);
        assert_eq!(summary.failed_count, 1);
        assert!((summary.max_cls - 0.3).abs() < 1e-12);
        assert_eq!(summary.min_cls, 0.0);
        assert!((summary.average_cls - 0.35 / 3.0).abs() < 1e-12);
        assert!((summary.pass_rate - 200.0 / 3.0).abs() < 1e-9);

        assert_eq!(m.measurements_for("JobList").count(), 2);
        let failed: Vec<_> = m.failed_measurements().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].rating, ClsRating::Poor);

        m.clear();
        assert_eq!(m.summary().total_measurements, 0);
    }
}
