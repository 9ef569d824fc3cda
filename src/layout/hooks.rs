use dioxus::prelude::*;

use super::{
    dimensions::{
        get_image_container_styles, get_list_container_styles, reserve_space,
        ImageContainerOptions, ImageContainerStyles,
    },
    style::{CssLength, Style},
    transition::get_loading_transition_styles,
};

/// A local loading flag paired with the style that reserves the space of its content
#[derive(Clone, PartialEq)]
pub struct ReservedRegion<S> {
    pub styles: S,
    pub loading: Signal<bool>,
}

/// Reserves `min_height` for content that starts out loading
pub fn use_reserved_space(min_height: impl Into<CssLength>) -> ReservedRegion<Style> {
    let loading = use_signal(|| true);
    ReservedRegion {
        styles: reserve_space(min_height),
        loading,
    }
}

/// Aspect-ratio container for an image that starts out loading
pub fn use_image_container(
    width: impl Into<Option<f64>>,
    height: impl Into<Option<f64>>,
    options: &ImageContainerOptions,
) -> ReservedRegion<ImageContainerStyles> {
    let loading = use_signal(|| true);
    ReservedRegion {
        styles: get_image_container_styles(width, height, options),
        loading,
    }
}

/// Reserves `item_count` rows of `item_height` pixels for a list that starts out loading
pub fn use_stable_list(item_count: usize, item_height: f64) -> ReservedRegion<Style> {
    let loading = use_signal(|| true);
    ReservedRegion {
        styles: get_list_container_styles(item_count, item_height),
        loading,
    }
}

/// Loading flag whose transition style follows it
#[derive(Clone, Copy, PartialEq)]
pub struct LoadingTransitionState {
    pub loading: Signal<bool>,
    pub style: Memo<Style>,
}

pub fn use_loading_transition(initial_loading: bool) -> LoadingTransitionState {
    let loading = use_signal(|| initial_loading);
    let style = use_memo(move || get_loading_transition_styles(loading()).to_style());
    LoadingTransitionState { loading, style }
}
