use dioxus::prelude::*;

use super::coordinator::{CoordinatedSection, CoordinatedView, Section, SectionRegistry};

/// Coordination of a fixed list of sections owned by a single component.
///
/// Lighter than a [`LoadingCoordinator`](super::component::LoadingCoordinator) when the
/// sections are all rendered by the same component and no context is needed.
#[derive(Clone, Copy, PartialEq)]
pub struct CoordinatedLoading {
    registry: Signal<SectionRegistry>,
}

impl CoordinatedLoading {
    pub fn update_section(&self, id: &str, loading: bool) {
        let mut registry = self.registry;
        if registry.write().update(id, loading) {
            log::debug!("use_coordinated_loading - all sections loaded");
        }
    }

    pub fn view(&self) -> CoordinatedView {
        self.registry.read().view()
    }

    pub fn sections(&self) -> Vec<CoordinatedSection> {
        self.view().sections
    }

    pub fn all_loaded(&self) -> bool {
        self.registry.read().loading_count() == 0
    }

    pub fn loading_count(&self) -> usize {
        self.registry.read().loading_count()
    }

    pub fn total_min_height(&self) -> String {
        self.view().total_min_height
    }

    pub fn loading_percentage(&self) -> u8 {
        self.view().loading_percentage()
    }
}

pub fn use_coordinated_loading(
    initial_sections: impl FnOnce() -> Vec<Section>,
) -> CoordinatedLoading {
    let registry = use_signal(|| SectionRegistry::with_sections(initial_sections()));
    CoordinatedLoading { registry }
}
