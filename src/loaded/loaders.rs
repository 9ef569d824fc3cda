use dioxus::prelude::*;

/// A trait for defining strategies to display components in loading state.
///
/// Loader implementations decide how the skeleton of a `LoadedElement` is presented while
/// its data is pending, and how it is presented when loading failed. Each `LoadedElement`
/// type picks its strategy through its `Loader` associated type.
///
/// # Examples
///
/// ```rust
/// use dioxus::prelude::*;
/// use crate::loaded::loaders::Loader;
///
/// struct DimmedLoader;
/// impl Loader for DimmedLoader {
///     fn load(skeleton: Element) -> Element {
///         rsx! { div { class: "opacity-50", {skeleton} } }
///     }
///
///     fn error(skeleton: Element, message: &str) -> Element {
///         rsx! { div { title: "{message}", {skeleton} } }
///     }
/// }
/// ```
pub trait Loader {
    /// Presents the skeleton of a component whose data is loading
    fn load(skeleton: Element) -> Element;

    /// Presents the skeleton of a component whose data failed to load.
    ///
    /// The skeleton keeps the footprint of the content so the failure does not move the
    /// rest of the page.
    fn error(skeleton: Element, message: &str) -> Element;
}

/// A loader that shows the skeleton as-is and overlays failures on top of it.
pub struct SkeletonLoader;
impl Loader for SkeletonLoader {
    #[inline(always)]
    fn load(skeleton: Element) -> Element {
        skeleton
    }
    #[inline(always)]
    fn error(skeleton: Element, message: &str) -> Element {
        rsx! {
            div { class: "loaded-error",
                div { class: "loaded-error-overlay", role: "alert", title: "{message}", "ERROR" }
                div { class: "invisible", aria_hidden: "true", {skeleton} }
            }
        }
    }
}

/// A loader that passes the skeleton through, failures included.
///
/// Used by container elements whose children already present their own state.
pub struct TransparentLoader;
impl Loader for TransparentLoader {
    #[inline(always)]
    fn load(skeleton: Element) -> Element {
        skeleton
    }
    #[inline(always)]
    fn error(skeleton: Element, _message: &str) -> Element {
        skeleton
    }
}
