use dioxus::prelude::*;

use super::coordinator::{CoordinatedView, SectionRegistry};
use crate::{
    config::use_layout_config,
    layout::{dimensions::reserve_space, style::CssLength},
    utils::CCStr,
};

/// Handle on the section registry of the closest [`LoadingCoordinator`].
///
/// All operations silently ignore unknown section ids: mount, unmount and updates of
/// sibling sections race freely and must never break rendering.
#[derive(Clone, Copy, PartialEq)]
pub struct LoadingCoordinatorContext {
    registry: Signal<SectionRegistry>,
    on_all_loaded: Option<EventHandler>,
}

impl LoadingCoordinatorContext {
    pub fn register_section(&self, id: impl Into<CCStr>, min_height: impl Into<CssLength>) {
        let (id, min_height) = (id.into(), min_height.into());
        self.write(move |r| r.register(id, min_height));
    }

    /// Removes `id`. Never counts as completion, even when `id` was the last one loading.
    pub fn unregister_section(&self, id: &str) {
        self.write(|r| r.unregister(id));
    }

    pub fn update_section(&self, id: &str, loading: bool) {
        if self.write(|r| r.update(id, loading)) == Some(true) {
            log::info!("LoadingCoordinator - all sections loaded");
            if let Some(handler) = self.on_all_loaded {
                handler.call(());
            }
        }
    }

    /// Loading flag of `id`, `false` for sections that are not registered
    pub fn get_section_loading(&self, id: &str) -> bool {
        self.registry.read().is_loading(id)
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registry.read().contains(id)
    }

    /// Current merged view, subscribing the caller to every section change
    pub fn view(&self) -> CoordinatedView {
        self.registry.read().view()
    }

    fn write<T>(&self, f: impl FnOnce(&mut SectionRegistry) -> T) -> Option<T> {
        let mut registry = self.registry;
        // The registry can already be gone when sections unmount with their coordinator
        let result = match registry.try_write() {
            Ok(mut r) => Some(f(&mut r)),
            Err(e) => {
                log::debug!("LoadingCoordinator - registry unavailable: {e}");
                None
            }
        };
        result
    }
}

/// Coordinator of the closest [`LoadingCoordinator`] ancestor
///
/// # Panics
///
/// When called outside of a [`LoadingCoordinator`].
pub fn use_loading_coordinator() -> LoadingCoordinatorContext {
    use_context()
}

/// Coordinates the loading state of every [`LoadingSection`] below it.
///
/// While at least one section is loading, a polite live region announces the progress
/// to assistive technologies (unless disabled by `announce_progress` or by the layout
/// configuration). `on_all_loaded` runs each time an update finishes the last loading
/// section; sections going away, including the teardown of the whole tree, never trigger it.
///
/// # Examples
///
/// ```rust
/// rsx! {
///     LoadingCoordinator { on_all_loaded: move |_| log::info!("page ready"),
///         LoadingSection { id: "header", min_height: "100px", Header {} }
///         LoadingSection { id: "content", min_height: 400, Content {} }
///     }
/// }
/// ```
#[component]
pub fn LoadingCoordinator(
    on_all_loaded: Option<EventHandler>,
    announce_progress: Option<bool>,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    log::debug!("LoadingCoordinator Rendered");

    let config = use_layout_config();
    let registry = use_signal(SectionRegistry::new);
    let coordinator = use_context_provider(|| LoadingCoordinatorContext {
        registry,
        on_all_loaded,
    });

    let view = coordinator.view();
    let announce = announce_progress.unwrap_or(config.announce_progress);

    use_drop(|| log::debug!("LoadingCoordinator Dropped"));

    rsx! {
        div {
            class: "loading-coordinator {class}",
            "data-loading-count": "{view.loading_count}",
            "data-total-min-height": "{view.total_min_height}",
            if announce {
                if let Some(text) = view.progress_announcement() {
                    div {
                        class: "sr-only",
                        role: "status",
                        aria_live: "polite",
                        aria_atomic: "true",
                        "{text}"
                    }
                }
            }
            {children}
        }
    }
}

/// Handle given to the content of a [`LoadingSection`]
#[derive(Clone, PartialEq)]
pub struct SectionHandle {
    coordinator: LoadingCoordinatorContext,
    id: CCStr,
}

impl SectionHandle {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `true` until the content reports itself loaded, including before registration
    pub fn loading(&self) -> bool {
        !self.coordinator.is_registered(&self.id) || self.coordinator.get_section_loading(&self.id)
    }

    pub fn set_loading(&self, loading: bool) {
        self.coordinator.update_section(&self.id, loading);
    }
}

/// Section handle of the closest [`LoadingSection`] ancestor
///
/// # Panics
///
/// When called outside of a [`LoadingSection`].
pub fn use_section() -> SectionHandle {
    use_context()
}

/// A region whose height is reserved until its content reports itself loaded.
///
/// The section registers itself (loading) with the enclosing [`LoadingCoordinator`] once
/// mounted and unregisters when dropped. Its content marks it loaded through
/// [`use_section`].
#[component]
pub fn LoadingSection(
    #[props(into)] id: CCStr,
    #[props(into)] min_height: CssLength,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let coordinator = use_loading_coordinator();

    let handle = use_hook(|| SectionHandle {
        coordinator,
        id: id.clone(),
    });
    use_context_provider(|| handle.clone());

    let register_id = id.clone();
    let register_height = min_height.clone();
    use_effect(move || {
        coordinator.register_section(register_id.clone(), register_height.clone())
    });

    let drop_id = id.clone();
    use_drop(move || coordinator.unregister_section(&drop_id));

    let loading = handle.loading();
    let style = reserve_space(min_height);

    rsx! {
        section {
            class: "loading-section {class}",
            "data-section-id": "{id}",
            aria_busy: "{loading}",
            style: "{style}",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{use_layout_config_provider, LayoutConfig};
    use dioxus::dioxus_core::ScopeId;
    use std::{cell::Cell, rc::Rc};

    #[derive(Clone)]
    struct Board {
        sections: Vec<(&'static str, bool)>,
        visible: Rc<Cell<usize>>,
        fired: Rc<Cell<usize>>,
        announce: bool,
    }

    impl Board {
        fn new(sections: &[(&'static str, bool)]) -> Self {
            Self {
                sections: sections.to_vec(),
                visible: Rc::new(Cell::new(sections.len())),
                fired: Rc::new(Cell::new(0)),
                announce: true,
            }
        }
    }

    /// Content that reports its section loaded once mounted when `finishes` is set
    #[component]
    fn Content(finishes: bool) -> Element {
        let section = use_section();
        use_effect(move || {
            if finishes {
                section.set_loading(false);
            }
        });
        rsx! {
            p { "content" }
        }
    }

    fn board(props: Board) -> Element {
        let fired = props.fired.clone();
        let count = props.visible.get();
        rsx! {
            LoadingCoordinator {
                announce_progress: props.announce,
                on_all_loaded: move |_| fired.set(fired.get() + 1),
                for (id , finishes) in props.sections.iter().take(count).copied() {
                    LoadingSection { key: "{id}", id, min_height: 100,
                        Content { finishes }
                    }
                }
            }
        }
    }

    fn quiet_board() -> Element {
        use_layout_config_provider(|| LayoutConfig {
            announce_progress: false,
            ..Default::default()
        });
        rsx! {
            LoadingCoordinator {
                LoadingSection { id: "a", min_height: 100, Content { finishes: false } }
            }
        }
    }

    /// Runs renders until effects and the writes they make have all been applied
    fn settle(dom: &mut VirtualDom) {
        for _ in 0..10 {
            dom.render_immediate_to_vec();
        }
    }

    fn mount(props: Board) -> VirtualDom {
        let mut dom = VirtualDom::new_with_props(board, props);
        dom.rebuild_in_place();
        settle(&mut dom);
        dom
    }

    #[test]
    fn announces_progress_while_loading() {
        let props = Board::new(&[("a", false), ("b", false)]);
        let dom = mount(props.clone());
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Loading: 0% complete. 2 sections remaining."));
        assert!(html.contains(r#"role="status""#));
        assert!(html.contains(r#"aria-live="polite""#));
        assert!(html.contains(r#"data-loading-count="2""#));
        assert!(html.contains(r#"data-total-min-height="200px""#));
        assert_eq!(html.matches(r#"aria-busy="true""#).count(), 2);
        assert_eq!(props.fired.get(), 0);
    }

    #[test]
    fn teardown_mid_load_does_not_report_completion() {
        let props = Board::new(&[("a", false), ("b", false)]);
        let dom = mount(props.clone());
        assert_eq!(props.fired.get(), 0);
        drop(dom);
        assert_eq!(props.fired.get(), 0);
    }

    #[test]
    fn partial_progress() {
        let props = Board::new(&[("a", true), ("b", false)]);
        let dom = mount(props.clone());
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Loading: 50% complete. 1 sections remaining."));
        assert_eq!(html.matches(r#"aria-busy="true""#).count(), 1);
        assert_eq!(props.fired.get(), 0);
    }

    #[test]
    fn completion_fires_once_when_content_finishes() {
        let props = Board::new(&[("a", true), ("b", true)]);
        let dom = mount(props.clone());
        let html = dioxus_ssr::render(&dom);
        assert_eq!(props.fired.get(), 1);
        assert!(html.contains(r#"data-loading-count="0""#));
        assert!(!html.contains(r#"role="status""#));
        assert_eq!(html.matches(r#"aria-busy="false""#).count(), 2);

        drop(dom);
        assert_eq!(props.fired.get(), 1);
    }

    #[test]
    fn sections_unregister_when_dropped() {
        let props = Board::new(&[("a", false), ("b", false)]);
        let mut dom = mount(props.clone());

        props.visible.set(1);
        dom.mark_dirty(ScopeId::APP);
        settle(&mut dom);

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"data-loading-count="1""#));
        assert!(html.contains(r#"data-total-min-height="100px""#));
        assert_eq!(html.matches("data-section-id").count(), 1);
        assert!(html.contains("Loading: 0% complete. 1 sections remaining."));
        assert_eq!(props.fired.get(), 0);
    }

    #[test]
    fn announcement_can_be_turned_off_per_coordinator() {
        let props = Board {
            announce: false,
            ..Board::new(&[("a", false)])
        };
        let dom = mount(props);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"data-loading-count="1""#));
        assert!(!html.contains(r#"role="status""#));
        assert!(!html.contains("Loading:"));
    }

    #[test]
    fn announcement_follows_layout_config() {
        let mut dom = VirtualDom::new(quiet_board);
        dom.rebuild_in_place();
        settle(&mut dom);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"data-loading-count="1""#));
        assert!(!html.contains(r#"aria-live="polite""#));
    }
}
