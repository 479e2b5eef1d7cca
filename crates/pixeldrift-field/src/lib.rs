//! Ambient sprite field simulation.
//!
//! A fixed population of decorative bitmaps drifts diagonally up-right
//! across a pixel canvas; sprites that leave the visible area respawn at a
//! random free position just outside the bottom or left edge. Non-overlap
//! between visible sprites is best-effort: placement retries a bounded
//! number of times and then gives up silently.
//!
//! The crate is host-free. It draws through the [`DrawSurface`] trait and
//! is driven by an external clock calling [`SpriteField::tick`] once per
//! frame; scheduling, terminals and asset decoding live elsewhere.

mod field;
mod gate;
pub mod placement;

pub use field::{DrawSurface, Sprite, SpriteField};
pub use gate::PreloadGate;
pub use placement::{Placement, PlacementMode};
