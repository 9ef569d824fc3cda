use dioxus::prelude::*;

use super::{element::LoadedElement, loaders::Loader};
use crate::utils::CCStr;

/// Represents the different states of a component during loading.
///
/// # Examples
///
/// ```rust
/// use crate::loaded::prelude::*;
///
/// let jobs = use_resource(fetch_jobs);
/// rsx! {
///     LoadedComponent::<Vec<JobCard>> { input: jobs.cloned().into() }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedComponentInput<T: LoadedElement> {
    /// The data is pending, the skeleton is displayed
    Loading,
    /// The data is there
    LoadedSuccess(T),
    /// The data could not be loaded
    LoadedError(CCStr),
}

impl<T: LoadedElement> LoadedComponentInput<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl<T: LoadedElement> From<Option<Result<T, CCStr>>> for LoadedComponentInput<T> {
    fn from(value: Option<Result<T, CCStr>>) -> Self {
        match value {
            None => Self::Loading,
            Some(Ok(t)) => Self::LoadedSuccess(t),
            Some(Err(e)) => Self::LoadedError(e),
        }
    }
}

impl<T: LoadedElement> From<Option<T>> for LoadedComponentInput<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            None => Self::Loading,
            Some(t) => Self::LoadedSuccess(t),
        }
    }
}

/// Displays `T` or its skeleton depending on the loading state.
///
/// - Loading: the skeleton of `T`, presented by `T::Loader`
/// - Success: the element itself
/// - Error: logs the error and lets `T::Loader` present the skeleton as failed
#[component]
pub fn LoadedComponent<T: LoadedElement>(input: LoadedComponentInput<T>) -> Element {
    match input {
        LoadedComponentInput::Loading => T::Loader::load(T::skeleton()),
        LoadedComponentInput::LoadedSuccess(t) => t.element(),
        LoadedComponentInput::LoadedError(e) => {
            log::error!("{e}");
            T::Loader::error(T::skeleton(), &e)
        }
    }
}

/// Displays static `children` once `input` is loaded, `skeleton` before that.
///
/// # Examples
///
/// ```rust
/// rsx! {
///     StaticLoadedComponent {
///         input: if ready() { LoadedComponentInput::LoadedSuccess(()) } else { LoadedComponentInput::Loading },
///         skeleton: rsx! { Skeleton { content_type: ContentType::Text } },
///         p { "Welcome back" }
///     }
/// }
/// ```
#[component]
pub fn StaticLoadedComponent(
    input: LoadedComponentInput<()>,
    skeleton: Element,
    children: Element,
) -> Element {
    use super::loaders::SkeletonLoader;
    match input {
        LoadedComponentInput::Loading => SkeletonLoader::load(skeleton),
        LoadedComponentInput::LoadedSuccess(_) => children,
        LoadedComponentInput::LoadedError(e) => {
            log::error!("{e}");
            SkeletonLoader::error(skeleton, &e)
        }
    }
}
