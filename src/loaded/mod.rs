//! # Loaded Module
//!
//! Declarative switching between a component and its skeleton.
//!
//! A component that implements [`LoadedElement`](element::LoadedElement) declares both its
//! loaded rendering and the placeholder that stands in for it. The
//! [`LoadedComponent`](component::LoadedComponent) wrapper then picks one or the other from
//! a [`LoadedComponentInput`](component::LoadedComponentInput), so pages never hand-write
//! `if loading { skeleton } else { content }`.
//!
//! - [`LoadedElement`](element::LoadedElement): element + skeleton pair
//! - [`LoadedComponent`](component::LoadedComponent): the switching wrapper
//! - Loaders: how the skeleton is presented (as-is with failure overlay, or transparent)

pub mod component;
mod element;
pub mod loaders;

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
    pub use super::component::{LoadedComponent, LoadedComponentInput, StaticLoadedComponent};
    pub use super::element::LoadedElement;
    pub use super::loaders::SkeletonLoader;
}
