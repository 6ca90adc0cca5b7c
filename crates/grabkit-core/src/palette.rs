use crate::scene::Rgba;

pub const DEFAULT_SEED: u64 = 123456;

/// Seeded source of random object colors.
#[derive(Clone, Debug)]
pub struct ColorGenerator {
    rng: oorandom::Rand32,
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl ColorGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: oorandom::Rand32::new(seed),
        }
    }

    /// A color with independent uniform channels in `[0, 1]` and the given alpha.
    pub fn gen_color(&mut self, alpha: f32) -> Rgba {
        Rgba::new(
            self.rng.rand_float(),
            self.rng.rand_float(),
            self.rng.rand_float(),
            alpha,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_colors() {
        let mut a = ColorGenerator::new(42);
        let mut b = ColorGenerator::new(42);
        for _ in 0..8 {
            assert_eq!(a.gen_color(1.0), b.gen_color(1.0));
        }
    }

    #[test]
    fn channels_stay_in_unit_range_and_alpha_is_kept() {
        let mut colors = ColorGenerator::default();
        for _ in 0..256 {
            let c = colors.gen_color(0.5);
            for channel in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&channel));
            }
            assert_eq!(c.a, 0.5);
        }
    }
}
