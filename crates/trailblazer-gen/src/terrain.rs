//! Fractal terrain generation via diamond-square subdivision.

use rand::{Rng, RngExt};
use trailblazer_core::{Loc, World};

/// Diamond-square terrain generator.
///
/// Produces a square `(2^order)+1` grid of elevations: corners are seeded
/// randomly, then alternating diamond and square passes fill midpoints with
/// neighbor averages plus a perturbation whose amplitude halves at each
/// subdivision level. A 3x3 mean filter smooths the result before it is
/// normalized to `[0, 1]`.
pub struct TerrainGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> TerrainGen<R> {
    /// Create a generator using the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `(2^order)+1` square terrain world.
    ///
    /// `roughness` scales the initial perturbation amplitude; 0 yields a
    /// plain interpolated surface. Panics on a zero or absurdly large order,
    /// or on a negative/NaN roughness.
    pub fn generate(&mut self, order: u32, roughness: f64) -> World {
        assert!((1..=12).contains(&order), "terrain order {order} out of range");
        assert!(
            roughness >= 0.0,
            "terrain roughness must be non-negative, got {roughness}"
        );

        let size = (1usize << order) + 1;
        let last = (size - 1) as i32;
        let mut world = World::new(size, size, 0.0);

        for corner in [
            Loc::new(0, 0),
            Loc::new(0, last),
            Loc::new(last, 0),
            Loc::new(last, last),
        ] {
            let seed = self.rng.random::<f64>();
            world.set(corner, seed);
        }

        let mut step = size - 1;
        let mut amp = roughness;
        while step > 1 {
            let half = step / 2;

            // Diamond pass: square centers from their four corners.
            for r in (half..size).step_by(step) {
                for c in (half..size).step_by(step) {
                    let (r, c, h) = (r as i32, c as i32, half as i32);
                    let avg = (world.at(Loc::new(r - h, c - h))
                        + world.at(Loc::new(r - h, c + h))
                        + world.at(Loc::new(r + h, c - h))
                        + world.at(Loc::new(r + h, c + h)))
                        / 4.0;
                    world.set(Loc::new(r, c), avg + self.perturb(amp));
                }
            }

            // Square pass: edge midpoints from their orthogonal neighbors.
            for r in (0..size).step_by(half) {
                let start_c = if (r / half) % 2 == 0 { half } else { 0 };
                for c in (start_c..size).step_by(step) {
                    let (r, c, h) = (r as i32, c as i32, half as i32);
                    let mut sum = 0.0;
                    let mut n = 0;
                    for p in [
                        Loc::new(r - h, c),
                        Loc::new(r + h, c),
                        Loc::new(r, c - h),
                        Loc::new(r, c + h),
                    ] {
                        if let Some(v) = world.get(p) {
                            sum += v;
                            n += 1;
                        }
                    }
                    world.set(Loc::new(r, c), sum / n as f64 + self.perturb(amp));
                }
            }

            step = half;
            amp *= 0.5;
        }

        let mut world = smooth(&world);
        normalize(&mut world);
        log::debug!("generated {size}x{size} terrain, roughness {roughness}");
        world
    }

    fn perturb(&mut self, amp: f64) -> f64 {
        if amp <= 0.0 {
            return 0.0;
        }
        self.rng.random_range(-amp..amp)
    }
}

/// One 3x3 mean-filter pass; boundary cells average over what exists.
fn smooth(world: &World) -> World {
    World::from_fn(world.num_rows(), world.num_cols(), |l| {
        let mut sum = world.at(l);
        let mut n = 1;
        for adj in l.neighbors_8() {
            if let Some(v) = world.get(adj) {
                sum += v;
                n += 1;
            }
        }
        sum / n as f64
    })
}

/// Rescale all elevations into `[0, 1]`. A flat world maps to 0.5.
fn normalize(world: &mut World) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (_, v) in world.iter() {
        min = min.min(v);
        max = max.max(v);
    }
    let span = max - min;
    for loc in world.locations() {
        let v = world.at(loc);
        let scaled = if span <= f64::EPSILON {
            0.5
        } else {
            (v - min) / span
        };
        world.set(loc, scaled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_expected_dimensions() {
        let mut generator = TerrainGen::new(StdRng::seed_from_u64(1));
        let w = generator.generate(3, 0.5);
        assert_eq!(w.num_rows(), 9);
        assert_eq!(w.num_cols(), 9);
    }

    #[test]
    fn elevations_are_normalized() {
        let mut generator = TerrainGen::new(StdRng::seed_from_u64(2));
        let w = generator.generate(4, 1.0);
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (_, v) in w.iter() {
            assert!((0.0..=1.0).contains(&v));
            min = min.min(v);
            max = max.max(v);
        }
        assert!(min.abs() < 1e-12);
        assert!((max - 1.0).abs() < 1e-12);
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = TerrainGen::new(StdRng::seed_from_u64(42)).generate(3, 0.8);
        let b = TerrainGen::new(StdRng::seed_from_u64(42)).generate(3, 0.8);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_roughness_is_smooth_interpolation() {
        let mut generator = TerrainGen::new(StdRng::seed_from_u64(3));
        // No perturbation: the surface is a pure interpolation of the
        // corner seeds, still normalized afterwards.
        let w = generator.generate(3, 0.0);
        for (_, v) in w.iter() {
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    #[should_panic(expected = "order")]
    fn zero_order_panics() {
        TerrainGen::new(StdRng::seed_from_u64(0)).generate(0, 0.5);
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn negative_roughness_panics() {
        TerrainGen::new(StdRng::seed_from_u64(0)).generate(3, -1.0);
    }
}
