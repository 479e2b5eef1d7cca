//! Collision-free position search.
//!
//! Pure functions: candidates are sampled from the caller's RNG and tested
//! against the current population, with an explicit bounded-retry give-up
//! policy. Nothing here draws or schedules.

use pixeldrift_core::{FieldConfig, Rect, Size, Vec2};
use rand::Rng;

use crate::field::Sprite;

/// Where candidate positions are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// Uniformly anywhere in the visible canvas. Used for initial population.
    Interior,
    /// Just outside the bottom or left boundary (50/50). Used for respawn.
    Edge,
}

/// Outcome of a bounded position search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The chosen position. When the search gave up this is the last
    /// sampled candidate and may overlap another sprite.
    pub position: Vec2,
    /// Whether the position passed the collision test.
    pub settled: bool,
}

/// Draw one candidate position for a sprite of the given intrinsic size.
pub fn sample_position(
    width: f32,
    height: f32,
    size: Size,
    mode: PlacementMode,
    config: &FieldConfig,
    rng: &mut impl Rng,
) -> Vec2 {
    let (scaled_w, scaled_h) = size.scaled(config.scale_factor);
    match mode {
        PlacementMode::Interior => Vec2::new(rng.r#gen::<f32>() * width, rng.r#gen::<f32>() * height),
        PlacementMode::Edge => {
            if rng.gen_bool(0.5) {
                // Below the bottom edge, fully outside the visible area.
                Vec2::new(rng.r#gen::<f32>() * width, height + scaled_h)
            } else {
                // Left of the left edge, one buffer further out.
                Vec2::new(-scaled_w - config.buffer, rng.r#gen::<f32>() * height)
            }
        }
    }
}

/// Whether a candidate position keeps its scaled+buffered bounding box
/// clear of every tracked sprite, skipping `exclude` (the sprite's own
/// slot when repositioning).
pub fn position_is_free(
    sprites: &[Sprite],
    position: Vec2,
    size: Size,
    exclude: Option<usize>,
    config: &FieldConfig,
) -> bool {
    let (scaled_w, scaled_h) = size.scaled(config.scale_factor);
    let candidate = Rect::new(position.x, position.y, scaled_w, scaled_h);

    for (idx, sprite) in sprites.iter().enumerate() {
        if Some(idx) == exclude {
            continue;
        }
        if candidate.intersects_padded(&sprite.scaled_rect(config.scale_factor), config.buffer) {
            return false;
        }
    }
    true
}

/// Search for a collision-free position, resampling up to `max_attempts`
/// times.
///
/// On exhaustion the last candidate is returned with `settled == false`;
/// the caller places the sprite there anyway, trading a rare visible
/// overlap for a startup that never blocks.
#[allow(clippy::too_many_arguments)]
pub fn search_position(
    sprites: &[Sprite],
    size: Size,
    mode: PlacementMode,
    exclude: Option<usize>,
    width: f32,
    height: f32,
    max_attempts: u32,
    config: &FieldConfig,
    rng: &mut impl Rng,
) -> Placement {
    let mut candidate = sample_position(width, height, size, mode, config, rng);
    for attempt in 1..=max_attempts {
        if position_is_free(sprites, candidate, size, exclude, config) {
            return Placement {
                position: candidate,
                settled: true,
            };
        }
        if attempt < max_attempts {
            candidate = sample_position(width, height, size, mode, config, rng);
        }
    }
    Placement {
        position: candidate,
        settled: false,
    }
}
