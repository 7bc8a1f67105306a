use rand::Rng;

use crate::config::{MAX_SPEED, MIN_DEPTH};
use crate::surface::Size;

/// A single star. `z` and the velocity are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, bounds: Size) -> Self {
        let (x, y) = random_point(rng, bounds);
        Self {
            x,
            y,
            z: rng.gen_range(MIN_DEPTH..=1.0),
            vx: rng.gen_range(-MAX_SPEED..MAX_SPEED),
            vy: rng.gen_range(-MAX_SPEED..MAX_SPEED),
        }
    }

    /// Moves the particle by its velocity, then wraps each coordinate that
    /// left `[0, dimension]` onto the opposite edge.
    pub fn step(&mut self, bounds: Size) {
        self.x = wrap(self.x + self.vx, bounds.width);
        self.y = wrap(self.y + self.vy, bounds.height);
    }

    pub fn reposition<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Size) {
        let (x, y) = random_point(rng, bounds);
        self.x = x;
        self.y = y;
    }
}

fn wrap(value: f64, max: f64) -> f64 {
    if value < 0.0 {
        max
    } else if value > max {
        0.0
    } else {
        value
    }
}

fn random_point<R: Rng + ?Sized>(rng: &mut R, bounds: Size) -> (f64, f64) {
    (
        rng.gen::<f64>() * bounds.width,
        rng.gen::<f64>() * bounds.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle { x, y, z: 0.5, vx, vy }
    }

    #[test]
    fn new_particle_is_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Size::new(640.0, 480.0);
        for _ in 0..1000 {
            let p = Particle::new(&mut rng, bounds);
            assert!(p.x >= 0.0 && p.x < 640.0);
            assert!(p.y >= 0.0 && p.y < 480.0);
            assert!(p.z >= 0.2 && p.z <= 1.0);
            assert!(p.vx >= -0.05 && p.vx < 0.05);
            assert!(p.vy >= -0.05 && p.vy < 0.05);
        }
    }

    #[test]
    fn step_adds_velocity() {
        let mut p = particle(10.0, 20.0, 0.04, -0.03);
        p.step(Size::new(100.0, 100.0));
        assert!((p.x - 10.04).abs() < 1e-12);
        assert!((p.y - 19.97).abs() < 1e-12);
    }

    #[test]
    fn step_wraps_to_opposite_edge() {
        let bounds = Size::new(100.0, 50.0);

        let mut p = particle(0.01, 49.99, -0.05, 0.05);
        p.step(bounds);
        assert_eq!((p.x, p.y), (100.0, 0.0));

        let mut p = particle(99.99, 0.01, 0.05, -0.05);
        p.step(bounds);
        assert_eq!((p.x, p.y), (0.0, 50.0));
    }

    #[test]
    fn step_keeps_edges_inclusive() {
        let mut p = particle(100.0, 0.0, 0.0, 0.0);
        p.step(Size::new(100.0, 50.0));
        assert_eq!((p.x, p.y), (100.0, 0.0));
    }

    #[test]
    fn step_snaps_positions_left_outside_by_a_shrink() {
        let mut p = particle(500.0, 300.0, 0.01, 0.01);
        p.step(Size::new(100.0, 50.0));
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }

    #[test]
    fn reposition_keeps_depth_and_velocity() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = particle(1.0, 1.0, 0.02, -0.01);
        p.reposition(&mut rng, Size::new(800.0, 400.0));
        assert_eq!((p.z, p.vx, p.vy), (0.5, 0.02, -0.01));
        assert!(p.x >= 0.0 && p.x < 800.0);
        assert!(p.y >= 0.0 && p.y < 400.0);
    }
}
