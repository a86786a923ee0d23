//! Presentational fragments
//!
//! Stateless renderers taking already-resolved plain values. None of them
//! branch on domain data beyond iterating their input.

pub mod section;
pub mod skill_bar;
pub mod timeline;
pub mod cards;

pub use section::section;
pub use skill_bar::skill_bar;
pub use timeline::timeline;
pub use cards::{about_card, evaluation_list, gallery_grid, goal_lists, hobby_grid, project_card};
