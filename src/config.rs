use crate::surface::Rgba;

pub const STROKE_COLOR: Rgba = Rgba::WHITE;
/// Stroke width of a star at depth 1.0, in surface pixels.
pub const STAR_SIZE: f64 = 3.0;
pub const MIN_DEPTH: f64 = 0.2;
pub const MAX_PARTICLES: usize = 100;
/// One star per this many pixels of `width + height`.
pub const PIXELS_PER_STAR: f64 = 8.0;
pub const MAX_SPEED: f64 = 0.05;
pub const MIN_ALPHA: f64 = 0.5;
pub const MAX_ALPHA: f64 = 1.0;
pub const TARGET_FPS: f32 = 60.0;

/// `min(MAX_PARTICLES, floor((width + height) / 8))`
pub fn particle_count(width: f64, height: f64) -> usize {
    let wanted = ((width + height) / PIXELS_PER_STAR).floor();
    if wanted.is_nan() || wanted <= 0.0 {
        return 0;
    }
    (wanted as usize).min(MAX_PARTICLES)
}

/// Everything about a star field's look is fixed by the constants above;
/// only the random source can be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarFieldConfig {
    /// Seeds every binding's generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl StarFieldConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}
