use dioxus::prelude::*;

/// Number of skeleton rows shown for a list whose length is not known yet
pub const LIST_PLACEHOLDER_COUNT: usize = 3;

/// A trait representing UI components that have a skeleton counterpart.
///
/// By implementing this trait, a type declares how it renders once its data is available
/// and which placeholder stands in for it meanwhile. The placeholder should have the same
/// footprint as the element so that swapping one for the other does not move anything.
///
/// # Examples
///
/// ```rust
/// use crate::loaded::prelude::*;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Headline(String);
///
/// impl LoadedElement for Headline {
///     type Loader = SkeletonLoader;
///
///     fn element(self) -> Element {
///         rsx! { h2 { class: "headline", {self.0} } }
///     }
///
///     fn skeleton() -> Element {
///         rsx! { Skeleton { content_type: ContentType::Text } }
///     }
/// }
/// ```
pub trait LoadedElement: Clone + PartialEq + 'static {
    /// The loader strategy presenting the skeleton
    type Loader: super::loaders::Loader;

    /// Renders the loaded element
    fn element(self) -> Element;

    /// Renders the placeholder shown while the element is loading
    fn skeleton() -> Element;
}

impl LoadedElement for () {
    type Loader = super::loaders::TransparentLoader;
    #[inline(always)]
    fn element(self) -> Element {
        rsx! {}
    }

    fn skeleton() -> Element {
        rsx! {}
    }
}

impl<T: LoadedElement> LoadedElement for Vec<T> {
    type Loader = super::loaders::TransparentLoader;
    #[inline(always)]
    fn element(self) -> Element {
        rsx! {
            for item in self {
                {item.element()}
            }
        }
    }

    fn skeleton() -> Element {
        rsx! {
            for _ in 0..LIST_PLACEHOLDER_COUNT {
                {T::skeleton()}
            }
        }
    }
}
