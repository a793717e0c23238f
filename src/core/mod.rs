//! Core domain types for morpheme analysis
//!
//! Roles, fragments and per-role maps shared by the segmenters and the game.

mod fragment;
mod role;

pub use fragment::{Fragment, hyphenated, joined_text};
pub use role::{Role, RoleMap};
