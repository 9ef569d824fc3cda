pub mod cards;
pub mod skeletons;
