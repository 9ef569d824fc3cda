//! # Layout Module
//!
//! Pure style computations used to keep the page geometry stable while content loads:
//! reserved heights, intrinsic-ratio containers, skeleton presets and loading transitions.
//! Results are [`Style`](style::Style) declaration lists that render straight into a
//! `style` attribute.

pub mod dimensions;
pub mod hooks;
pub mod style;
pub mod transition;

pub mod prelude {
    pub use super::dimensions::{get_stable_grid_styles, ContentType, GridOptions, ImageContainerOptions};
    pub use super::hooks::{
        use_image_container, use_loading_transition, use_reserved_space, use_stable_list,
    };
    pub use super::style::Style;
}
