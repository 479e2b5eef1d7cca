//! Core types for the pixeldrift ambient sprite field.
//!
//! This crate holds the vocabulary shared by the asset, field and host
//! crates: 2-D geometry in canvas pixel space, decoded bitmaps, and the
//! field configuration with its named defaults.

mod bitmap;
mod config;
mod geometry;

pub use bitmap::{Bitmap, Rgb};
pub use config::FieldConfig;
pub use geometry::{Rect, Size, Vec2};
