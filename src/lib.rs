//! Gridfall - a falling-block puzzle engine with a terminal frontend.
//!
//! The `core` module is the whole game: a synchronous, single-writer
//! simulation driven by discrete commands and a host-supplied clock.
//! `input` and `term` are thin collaborators that map key events onto
//! commands and draw snapshots; they contain no game logic.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
