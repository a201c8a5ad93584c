//! Shared plain-data types for the randomizer save-select screen.
//!
//! Carries the already-computed structures produced by the fill engine
//! (placements, accessibility chain) and the seed identity persisted in
//! save files. Nothing in this crate computes placement or accessibility.

mod item_location;
mod progression;
mod requirement;
mod seed;

pub use item_location::{ItemLocation, Location};
pub use progression::ProgressionChain;
pub use requirement::Requirement;
pub use seed::{FillingMethod, Seed, SeedId, SeedOptions};
