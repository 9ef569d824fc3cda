//! # Coordination Module
//!
//! Merges the loading flags of several page regions ("sections") into one view: reserved
//! height of the whole set, number of sections still loading and whether everything is
//! loaded.
//!
//! - [`coordinator`]: the pure merge ([`coordinate_loading_states`](coordinator::coordinate_loading_states))
//!   and the [`SectionRegistry`](coordinator::SectionRegistry) state machine
//! - [`component`]: the [`LoadingCoordinator`](component::LoadingCoordinator) /
//!   [`LoadingSection`](component::LoadingSection) pair binding a registry to a component tree
//! - [`hooks`]: context-free coordination for a single component

pub mod component;
pub mod coordinator;
pub mod hooks;

pub mod prelude {
    pub use super::component::{use_section, LoadingCoordinator, LoadingSection};
    pub use super::coordinator::Section;
    pub use super::hooks::use_coordinated_loading;
}
