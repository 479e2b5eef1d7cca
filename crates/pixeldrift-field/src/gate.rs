//! Asset preload gate.

use std::rc::Rc;

use pixeldrift_core::Bitmap;

/// Waits for every candidate asset to finish loading before releasing the
/// bitmap pool exactly once.
///
/// Each candidate is recorded once, success or failure; failures simply
/// shrink the pool and never block startup. The gate is not re-entrant:
/// [`PreloadGate::take_pool`] yields `Some` a single time.
#[derive(Debug)]
pub struct PreloadGate {
    expected: usize,
    attempted: usize,
    loaded: Vec<Rc<Bitmap>>,
    released: bool,
}

impl PreloadGate {
    /// Create a gate expecting `expected` load outcomes.
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            attempted: 0,
            loaded: Vec::new(),
            released: false,
        }
    }

    /// Record one load outcome. Outcomes past the expected count are
    /// ignored; every identifier reports exactly once.
    pub fn record<E>(&mut self, outcome: Result<Bitmap, E>) {
        if self.attempted >= self.expected {
            return;
        }
        self.attempted += 1;
        if let Ok(bitmap) = outcome {
            self.loaded.push(Rc::new(bitmap));
        }
    }

    /// Whether every candidate has reported.
    pub fn is_ready(&self) -> bool {
        self.attempted >= self.expected
    }

    /// Release the pool of successfully loaded bitmaps.
    ///
    /// Returns `Some` exactly once, after the gate is ready; the pool may
    /// be empty when every load failed.
    pub fn take_pool(&mut self) -> Option<Vec<Rc<Bitmap>>> {
        if !self.is_ready() || self.released {
            return None;
        }
        self.released = true;
        Some(std::mem::take(&mut self.loaded))
    }
}
