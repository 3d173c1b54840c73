//! Input mapping: raw pointer and key state turned into field actions.
//!
//! # Invariants
//! - The field consumes actions, never raw window events.

pub mod action;
pub mod pointer;

pub use action::Action;
pub use pointer::{PointerButton, PointerTracker};
