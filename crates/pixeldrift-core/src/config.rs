//! Field configuration with named defaults.

use serde::Deserialize;

/// Tuning constants for the ambient sprite field.
///
/// The retry ceilings and collision buffer are deliberate tuning values;
/// change them together or the field gets visibly more crowded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    /// Number of sprites in the field once populated.
    pub population: usize,
    /// Uniform magnification applied to sprite geometry and drawn size.
    pub scale_factor: f32,
    /// Extra margin around scaled bounding boxes in the collision test.
    pub buffer: f32,
    /// Attempt ceiling for initial placement.
    pub initial_attempts: u32,
    /// Attempt ceiling for edge respawn.
    pub respawn_attempts: u32,
    /// How far past a boundary a sprite must travel to count as exited.
    pub exit_tolerance: f32,
    /// Horizontal drift per frame (rightward).
    pub speed_x: f32,
    /// Vertical drift per frame (upward).
    pub speed_y: f32,
}

impl FieldConfig {
    pub const DEFAULT_POPULATION: usize = 20;
    pub const DEFAULT_SCALE_FACTOR: f32 = 10.0;
    pub const DEFAULT_BUFFER: f32 = 50.0;
    pub const DEFAULT_INITIAL_ATTEMPTS: u32 = 150;
    pub const DEFAULT_RESPAWN_ATTEMPTS: u32 = 50;
    pub const DEFAULT_EXIT_TOLERANCE: f32 = 20.0;
    pub const DEFAULT_SPEED: f32 = 0.5;
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            population: Self::DEFAULT_POPULATION,
            scale_factor: Self::DEFAULT_SCALE_FACTOR,
            buffer: Self::DEFAULT_BUFFER,
            initial_attempts: Self::DEFAULT_INITIAL_ATTEMPTS,
            respawn_attempts: Self::DEFAULT_RESPAWN_ATTEMPTS,
            exit_tolerance: Self::DEFAULT_EXIT_TOLERANCE,
            speed_x: Self::DEFAULT_SPEED,
            speed_y: Self::DEFAULT_SPEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_observed_constants() {
        let config = FieldConfig::default();
        assert_eq!(config.population, 20);
        assert_eq!(config.scale_factor, 10.0);
        assert_eq!(config.buffer, 50.0);
        assert_eq!(config.initial_attempts, 150);
        assert_eq!(config.respawn_attempts, 50);
        assert_eq!(config.exit_tolerance, 20.0);
        assert_eq!(config.speed_x, 0.5);
        assert_eq!(config.speed_y, 0.5);
    }
}
