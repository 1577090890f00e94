//! Drag surface integration.
//!
//! The drag surface itself is external: it tracks pointers and hit-tests
//! droppables. This module defines what it reports (`DragEvent`) and the
//! `Board` controller that applies those reports to a `PlacementStore`.
//!
//! Control flow: surface → `Board::handle` → store move/reset → renderer.

mod event;
mod board;

pub use event::DragEvent;
pub use board::Board;
