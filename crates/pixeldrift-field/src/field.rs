//! The sprite population and its per-frame update.

use std::rc::Rc;

use pixeldrift_core::{Bitmap, FieldConfig, Rect, Size, Vec2};
use rand::Rng;

use crate::placement::{self, PlacementMode};

/// A drawing target in canvas pixel space.
///
/// The field never talks to a terminal or window directly; the host hands
/// in whatever implements this. Dimensions may change between frames (an
/// external resize); the field just reads them fresh each tick.
pub trait DrawSurface {
    /// Current canvas width in pixels.
    fn width(&self) -> f32;
    /// Current canvas height in pixels.
    fn height(&self) -> f32;
    /// Erase the whole canvas.
    fn clear(&mut self);
    /// Draw a bitmap scaled to `dest`, pixel-exact (no smoothing).
    fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: Rect);
}

/// One tracked sprite.
///
/// Only `position` mutates after creation; the bitmap, intrinsic size and
/// velocity are fixed for the sprite's lifetime.
#[derive(Debug, Clone)]
pub struct Sprite {
    position: Vec2,
    size: Size,
    image: Rc<Bitmap>,
    velocity: Vec2,
}

impl Sprite {
    pub(crate) fn new(position: Vec2, size: Size, image: Rc<Bitmap>, velocity: Vec2) -> Self {
        Self {
            position,
            size,
            image,
            velocity,
        }
    }

    /// Current top-left position in canvas pixels.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Intrinsic bitmap size in source pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The bitmap this sprite draws.
    pub fn image(&self) -> &Rc<Bitmap> {
        &self.image
    }

    /// Per-frame drift (x moves right, y moves up).
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// The sprite's drawn bounding box under the given scale factor.
    pub fn scaled_rect(&self, scale_factor: f32) -> Rect {
        let (w, h) = self.size.scaled(scale_factor);
        Rect::new(self.position.x, self.position.y, w, h)
    }
}

/// The ambient sprite field: a fixed-size population of drifting bitmaps.
#[derive(Debug)]
pub struct SpriteField {
    sprites: Vec<Sprite>,
    pool: Vec<Rc<Bitmap>>,
    config: FieldConfig,
}

impl SpriteField {
    /// Build the population once, before the first tick.
    ///
    /// Each sprite picks a uniformly random bitmap from the pool and a
    /// collision-free interior position (best-effort, bounded retries).
    /// An empty pool yields an empty field; ticking it is harmless.
    pub fn populate(
        pool: Vec<Rc<Bitmap>>,
        width: f32,
        height: f32,
        config: FieldConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let mut field = Self {
            sprites: Vec::with_capacity(if pool.is_empty() { 0 } else { config.population }),
            pool,
            config,
        };
        if field.pool.is_empty() {
            return field;
        }

        for _ in 0..field.config.population {
            let image = field.pool[rng.gen_range(0..field.pool.len())].clone();
            let size = image.size();
            let placement = placement::search_position(
                &field.sprites,
                size,
                PlacementMode::Interior,
                None,
                width,
                height,
                field.config.initial_attempts,
                &field.config,
                rng,
            );
            let velocity = Vec2::new(field.config.speed_x, field.config.speed_y);
            field
                .sprites
                .push(Sprite::new(placement.position, size, image, velocity));
        }
        field
    }

    /// Advance one frame: clear, move, draw, and respawn exited sprites.
    ///
    /// A sprite has exited once its bottom edge is more than the exit
    /// tolerance above the top boundary or its left edge is more than the
    /// tolerance past the right boundary. Respawn reuses the placement
    /// search in edge mode with the lower attempt ceiling, excluding the
    /// sprite's own stale slot from the collision test.
    pub fn tick(&mut self, surface: &mut impl DrawSurface, rng: &mut impl Rng) {
        surface.clear();
        let width = surface.width();
        let height = surface.height();

        for idx in 0..self.sprites.len() {
            let velocity = self.sprites[idx].velocity;
            self.sprites[idx].position.x += velocity.x;
            self.sprites[idx].position.y -= velocity.y;

            let sprite = &self.sprites[idx];
            let dest = sprite.scaled_rect(self.config.scale_factor);
            surface.draw_bitmap(&sprite.image, dest);

            let exited = dest.y + dest.height < -self.config.exit_tolerance
                || dest.x > width + self.config.exit_tolerance;
            if exited {
                let placement = placement::search_position(
                    &self.sprites,
                    self.sprites[idx].size,
                    PlacementMode::Edge,
                    Some(idx),
                    width,
                    height,
                    self.config.respawn_attempts,
                    &self.config,
                    rng,
                );
                self.sprites[idx].position = placement.position;
            }
        }
    }

    /// The tracked sprites, in insertion (draw-stacking) order.
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Number of tracked sprites.
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Whether the field tracks no sprites (empty bitmap pool).
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// The configuration the field was built with.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixeldrift_core::Rgb;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Recording stub surface.
    struct TestSurface {
        width: f32,
        height: f32,
        clears: usize,
        draws: Vec<Rect>,
    }

    impl TestSurface {
        fn new(width: f32, height: f32) -> Self {
            Self {
                width,
                height,
                clears: 0,
                draws: Vec::new(),
            }
        }
    }

    impl DrawSurface for TestSurface {
        fn width(&self) -> f32 {
            self.width
        }
        fn height(&self) -> f32 {
            self.height
        }
        fn clear(&mut self) {
            self.clears += 1;
            self.draws.clear();
        }
        fn draw_bitmap(&mut self, _bitmap: &Bitmap, dest: Rect) {
            self.draws.push(dest);
        }
    }

    fn test_bitmap(width: u32, height: u32) -> Rc<Bitmap> {
        let pixels = vec![Some(Rgb(200, 200, 200)); (width * height) as usize];
        Rc::new(Bitmap::from_pixels("test", width, height, pixels).unwrap())
    }

    #[test]
    fn test_empty_pool_yields_inert_field() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field =
            SpriteField::populate(Vec::new(), 1000.0, 800.0, FieldConfig::default(), &mut rng);
        assert!(field.is_empty());

        // Ticking an empty field clears but never draws.
        let mut surface = TestSurface::new(1000.0, 800.0);
        for _ in 0..10 {
            field.tick(&mut surface, &mut rng);
        }
        assert_eq!(surface.clears, 10);
        assert!(surface.draws.is_empty());
        assert!(field.is_empty());
    }

    #[test]
    fn test_population_size_is_invariant() {
        let mut rng = StdRng::seed_from_u64(2);
        let pool = vec![test_bitmap(8, 8), test_bitmap(4, 4)];
        let mut field =
            SpriteField::populate(pool, 4000.0, 4000.0, FieldConfig::default(), &mut rng);
        assert_eq!(field.len(), 20);

        let mut surface = TestSurface::new(4000.0, 4000.0);
        for _ in 0..200 {
            field.tick(&mut surface, &mut rng);
            assert_eq!(field.len(), 20);
        }
    }

    #[test]
    fn test_initial_placement_avoids_overlap_when_settled() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = FieldConfig::default();
        // Plenty of room: every placement should settle.
        let field = SpriteField::populate(
            vec![test_bitmap(8, 8)],
            6000.0,
            6000.0,
            config.clone(),
            &mut rng,
        );

        let sprites = field.sprites();
        for i in 0..sprites.len() {
            for j in (i + 1)..sprites.len() {
                let a = sprites[i].scaled_rect(config.scale_factor);
                let b = sprites[j].scaled_rect(config.scale_factor);
                assert!(
                    !a.intersects_padded(&b, config.buffer),
                    "sprites {i} and {j} overlap"
                );
            }
        }
    }

    #[test]
    fn test_overcrowded_canvas_still_populates_fully() {
        // Two scaled 80x80 sprites cannot both fit on 60x60 with a 50px
        // buffer; the second search exhausts its ceiling but the sprite is
        // still placed at the last candidate.
        let mut rng = StdRng::seed_from_u64(4);
        let config = FieldConfig {
            population: 2,
            ..FieldConfig::default()
        };
        let field = SpriteField::populate(vec![test_bitmap(8, 8)], 60.0, 60.0, config, &mut rng);
        assert_eq!(field.len(), 2);
    }

    #[test]
    fn test_drift_is_up_right_between_frames() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = SpriteField::populate(
            vec![test_bitmap(8, 8)],
            4000.0,
            4000.0,
            FieldConfig::default(),
            &mut rng,
        );
        let mut surface = TestSurface::new(4000.0, 4000.0);

        for _ in 0..30 {
            let before: Vec<Vec2> = field.sprites().iter().map(|s| s.position()).collect();
            field.tick(&mut surface, &mut rng);
            for (prev, sprite) in before.iter().zip(field.sprites()) {
                let pos = sprite.position();
                // A respawn moves the sprite to an edge; everything else
                // drifts strictly right and up.
                let respawned = pos.y > prev.y || pos.x < prev.x;
                if !respawned {
                    assert_eq!(pos.x, prev.x + 0.5);
                    assert_eq!(pos.y, prev.y - 0.5);
                }
            }
        }
    }

    #[test]
    fn test_single_sprite_exits_and_respawns_at_edge() {
        // 1000x800 canvas, scale 10, one 8x8 bitmap, a single sprite.
        let mut rng = StdRng::seed_from_u64(6);
        let config = FieldConfig {
            population: 1,
            ..FieldConfig::default()
        };
        let mut field = SpriteField::populate(
            vec![test_bitmap(8, 8)],
            1000.0,
            800.0,
            config.clone(),
            &mut rng,
        );
        assert_eq!(field.len(), 1);
        let start = field.sprites()[0].position();
        assert!((0.0..1000.0).contains(&start.x));
        assert!((0.0..800.0).contains(&start.y));

        let mut surface = TestSurface::new(1000.0, 800.0);
        let mut respawns = 0;
        let mut prev = start;
        // Worst case the sprite crosses the full canvas plus the scaled
        // size and tolerance at 0.5 px/frame; 4000 frames is ample.
        for _ in 0..4000 {
            field.tick(&mut surface, &mut rng);
            let pos = field.sprites()[0].position();
            if pos.y > prev.y || pos.x < prev.x {
                respawns += 1;
                // Edge mode: at or beyond the bottom or left boundary.
                assert!(pos.y >= 800.0 || pos.x < 0.0);
            }
            prev = pos;
            if respawns == 1 {
                break;
            }
        }
        assert_eq!(respawns, 1);
    }

    #[test]
    fn test_tick_draws_scaled_rects() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = FieldConfig {
            population: 3,
            ..FieldConfig::default()
        };
        let mut field = SpriteField::populate(
            vec![test_bitmap(8, 8)],
            4000.0,
            4000.0,
            config,
            &mut rng,
        );
        let mut surface = TestSurface::new(4000.0, 4000.0);
        field.tick(&mut surface, &mut rng);

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.draws.len(), 3);
        for dest in &surface.draws {
            assert_eq!(dest.width, 80.0);
            assert_eq!(dest.height, 80.0);
        }
    }

    #[test]
    fn test_resize_does_not_move_sprites() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut field = SpriteField::populate(
            vec![test_bitmap(8, 8)],
            4000.0,
            4000.0,
            FieldConfig::default(),
            &mut rng,
        );
        let mut surface = TestSurface::new(4000.0, 4000.0);
        field.tick(&mut surface, &mut rng);
        let before: Vec<Vec2> = field.sprites().iter().map(|s| s.position()).collect();

        // Shrinking the surface alone must not touch sprite state; only
        // the next tick reads the new bounds.
        surface.width = 100.0;
        surface.height = 100.0;
        let after: Vec<Vec2> = field.sprites().iter().map(|s| s.position()).collect();
        assert_eq!(before, after);
    }
}
