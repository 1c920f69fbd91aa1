// TabDeck - core/mod.rs
//
// Core widget logic layer: pure functions over plain data.
// Dependencies: standard library, chrono, and egui's math types
// (Rect/Pos2/Vec2) only — no panels, no I/O, no app state.

pub mod filter;
pub mod layout;
pub mod model;
pub mod preview;
