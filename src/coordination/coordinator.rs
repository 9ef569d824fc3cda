use crate::{
    layout::{dimensions::reserve_space, style::CssLength, style::Style},
    utils::{format_px, CCStr},
};

/// One independently tracked loading region
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: CCStr,
    pub min_height: CssLength,
    pub loading: bool,
}

impl Section {
    pub fn new(id: impl Into<CCStr>, min_height: impl Into<CssLength>, loading: bool) -> Self {
        Self {
            id: id.into(),
            min_height: min_height.into(),
            loading,
        }
    }
}

/// A [`Section`] together with the style reserving its space
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatedSection {
    pub section: Section,
    pub style: Style,
}

impl core::ops::Deref for CoordinatedSection {
    type Target = Section;

    fn deref(&self) -> &Self::Target {
        &self.section
    }
}

/// Merged view over a set of sections
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatedView {
    /// Sections in input order
    pub sections: Vec<CoordinatedSection>,
    pub total_min_height: String,
    pub loading_count: usize,
    pub all_loaded: bool,
}

impl CoordinatedView {
    /// Share of sections done loading, rounded to a whole percent, 100 when empty
    pub fn loading_percentage(&self) -> u8 {
        let total = self.sections.len();
        if total == 0 {
            return 100;
        }
        let loaded = total - self.loading_count;
        (loaded as f64 / total as f64 * 100.0).round() as u8
    }

    /// Screen-reader text describing the progress, `None` once nothing is loading
    pub fn progress_announcement(&self) -> Option<String> {
        (self.loading_count > 0).then(|| {
            format!(
                "Loading: {}% complete. {} sections remaining.",
                self.loading_percentage(),
                self.loading_count
            )
        })
    }
}

/// Merges `sections` into a [`CoordinatedView`].
///
/// Heights are summed from the leading integer of each `min_height` (values without one
/// count as 0). The order of `sections` is preserved.
pub fn coordinate_loading_states(sections: &[Section]) -> CoordinatedView {
    let total = sections
        .iter()
        .fold(0.0, |total, s| total + s.min_height.leading_int());
    let loading_count = sections.iter().filter(|s| s.loading).count();

    CoordinatedView {
        sections: sections
            .iter()
            .map(|s| CoordinatedSection {
                style: reserve_space(s.min_height.clone()),
                section: s.clone(),
            })
            .collect(),
        total_min_height: format_px(total),
        loading_count,
        all_loaded: loading_count == 0,
    }
}

/// The mutable set of sections owned by one coordinator.
///
/// Completion is only ever reported by [`update`](Self::update): registering adds a loading
/// section and unregistering happens when content goes away, neither finishes a load.
/// Unknown ids are ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with `sections`, duplicates after the first are dropped
    pub fn with_sections(sections: impl IntoIterator<Item = Section>) -> Self {
        let mut registry = Self::new();
        for section in sections {
            if !registry.contains(&section.id) {
                registry.sections.push(section);
            }
        }
        registry
    }

    /// Appends a loading section unless `id` is already registered (first one wins).
    ///
    /// Returns whether the section was added.
    pub fn register(&mut self, id: impl Into<CCStr>, min_height: impl Into<CssLength>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            log::debug!("section {id} already registered, ignoring");
            return false;
        }
        log::debug!("section {id} registered");
        self.sections.push(Section::new(id, min_height, true));
        true
    }

    /// Removes `id`, returns whether it was registered
    pub fn unregister(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        log::debug!("section {id} unregistered");
        self.sections.retain(|s| &*s.id != id);
        true
    }

    /// Sets the loading flag of `id`.
    ///
    /// Returns `true` when this moved the registry from "something is loading" to "nothing
    /// is loading"; that is the only moment completion should be signalled.
    pub fn update(&mut self, id: &str, loading: bool) -> bool {
        let before = self.loading_count();
        if let Some(section) = self.sections.iter_mut().find(|s| &*s.id == id) {
            section.loading = loading;
        }
        let completed = before > 0 && self.loading_count() == 0;
        if completed {
            log::debug!("all {} sections loaded", self.sections.len());
        }
        completed
    }

    /// Loading flag of `id`, `false` when it is not registered
    pub fn is_loading(&self, id: &str) -> bool {
        self.sections
            .iter()
            .find(|s| &*s.id == id)
            .is_some_and(|s| s.loading)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sections.iter().any(|s| &*s.id == id)
    }

    pub fn loading_count(&self) -> usize {
        self.sections.iter().filter(|s| s.loading).count()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn view(&self) -> CoordinatedView {
        coordinate_loading_states(&self.sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Section> {
        vec![
            Section::new("header", "100px", true),
            Section::new("content", 400, true),
            Section::new("footer", "80px", false),
        ]
    }

    #[test]
    fn aggregates_sample() {
        let view = coordinate_loading_states(&sample());
        assert_eq!(view.total_min_height, "580px");
        assert_eq!(view.loading_count, 2);
        assert!(!view.all_loaded);
        let ids: Vec<&str> = view.sections.iter().map(|s| &*s.id).collect();
        assert_eq!(ids, ["header", "content", "footer"]);
        assert_eq!(view.sections[1].style.get("min-height"), Some("400px"));
        assert_eq!(view.sections[0].style.get("min-height"), Some("100px"));
    }

    #[test]
    fn empty_is_vacuously_loaded() {
        let view = coordinate_loading_states(&[]);
        assert_eq!(view.loading_count, 0);
        assert!(view.all_loaded);
        assert_eq!(view.total_min_height, "0px");
        assert_eq!(view.loading_percentage(), 100);
        assert_eq!(view.progress_announcement(), None);
    }

    #[test]
    fn lenient_height_parsing() {
        let view = coordinate_loading_states(&[
            Section::new("a", "auto", false),
            Section::new("b", "12.7rem", false),
            Section::new("c", "", false),
            Section::new("d", 30.9, false),
        ]);
        assert_eq!(view.total_min_height, "42px");
        assert_eq!(view.sections[0].style.get("min-height"), Some("auto"));
    }

    #[test]
    fn aggregate_invariant_holds_for_all_flag_patterns() {
        for len in 0..=10usize {
            for mask in 0u32..(1 << len) {
                let sections: Vec<Section> = (0..len)
                    .map(|i| Section::new(format!("s{i}"), 10, mask & (1 << i) != 0))
                    .collect();
                let view = coordinate_loading_states(&sections);
                let expected = sections.iter().filter(|s| s.loading).count();
                assert_eq!(view.loading_count, expected);
                assert_eq!(view.all_loaded, expected == 0);
                assert_eq!(view.total_min_height, format!("{}px", 10 * len));
            }
        }
    }

    #[test]
    fn announcement_text() {
        let view = coordinate_loading_states(&sample());
        assert_eq!(view.loading_percentage(), 33);
        assert_eq!(
            view.progress_announcement().as_deref(),
            Some("Loading: 33% complete. 2 sections remaining.")
        );
    }

    #[test]
    fn first_registration_wins() {
        let mut registry = SectionRegistry::new();
        registry.register("jobs", "600px");
        registry.update("jobs", false);
        registry.register("jobs", "10px");
        assert_eq!(registry.sections().len(), 1);
        assert_eq!(registry.sections()[0].min_height, CssLength::from("600px"));
        assert!(!registry.is_loading("jobs"));
    }

    #[test]
    fn registration_order_is_display_order() {
        let mut registry = SectionRegistry::new();
        for id in ["filters", "job-list", "featured"] {
            registry.register(id, 100);
        }
        registry.unregister("job-list");
        registry.register("job-list", 100);
        let view = registry.view();
        let ids: Vec<&str> = view.sections.iter().map(|s| &*s.id).collect();
        assert_eq!(ids, ["filters", "featured", "job-list"]);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut registry = SectionRegistry::new();
        registry.register("a", 10);
        assert!(!registry.update("nonexistent", false));
        assert!(!registry.unregister("nonexistent"));
        assert!(!registry.is_loading("nonexistent"));
        assert_eq!(registry.loading_count(), 1);
    }

    #[test]
    fn completion_fires_once_per_transition() {
        let mut registry = SectionRegistry::new();
        for id in ["a", "b", "c"] {
            assert!(registry.register(id, 100));
        }
        let fired: Vec<bool> = ["a", "b", "c"]
            .into_iter()
            .map(|id| registry.update(id, false))
            .collect();
        assert_eq!(fired, [false, false, true]);

        // Already all loaded: repeating updates does not fire again
        assert!(!registry.update("c", false));
        assert!(registry.unregister("a"));

        // A new loading round fires again when it completes
        assert!(!registry.update("b", true));
        assert!(registry.update("b", false));
    }

    #[test]
    fn unregistering_never_reports_completion() {
        let mut registry = SectionRegistry::with_sections([
            Section::new("a", 10, false),
            Section::new("b", 10, true),
        ]);
        assert!(registry.unregister("b"));
        assert!(registry.view().all_loaded);
        // Removing the last loading section only shrinks the registry
        assert!(!registry.update("a", false));
    }

    #[test]
    fn huge_heights_do_not_overflow() {
        let view = coordinate_loading_states(&[
            Section::new("a", "9223372036854775807px", true),
            Section::new("b", 1e300, true),
            Section::new("c", "123456789012345678901234567890px", true),
        ]);
        assert_eq!(view.loading_count, 3);
        let total: f64 = view
            .total_min_height
            .strip_suffix("px")
            .and_then(|t| t.parse().ok())
            .unwrap_or_default();
        assert!(total >= 1e300);
        assert!(total.is_finite());
    }

    #[test]
    fn with_sections_drops_duplicates() {
        let registry = SectionRegistry::with_sections([
            Section::new("a", 10, true),
            Section::new("a", 20, false),
        ]);
        assert_eq!(registry.sections().len(), 1);
        assert!(registry.is_loading("a"));
    }
}
