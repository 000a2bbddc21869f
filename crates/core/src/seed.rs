//! Streamline seeds: sampling origins with per-line hue.
//!
//! Seeds are generated wholesale — at engine start, on resize, and per the
//! configured reseed policy — and discarded wholesale. Line density follows
//! viewport width.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::prng::Xorshift64;

/// Starting point and styling metadata for one streamline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreamlineSeed {
    pub origin: DVec2,
    /// Hue in degrees [0, 360).
    pub hue: f64,
}

/// Generates a fresh seed set for the given viewport.
///
/// Count comes from [`EngineConfig::line_count`]; origins are uniform over
/// the viewport, hues uniform over the wheel. Deterministic for a given
/// `rng` state.
pub fn generate_seeds(
    cfg: &EngineConfig,
    width: f64,
    height: f64,
    rng: &mut Xorshift64,
) -> Vec<StreamlineSeed> {
    (0..cfg.line_count(width))
        .map(|_| StreamlineSeed {
            origin: DVec2::new(rng.next_range(0.0, width), rng.next_range(0.0, height)),
            hue: rng.next_range(0.0, 360.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_follows_viewport_width() {
        let cfg = EngineConfig::default();
        let mut rng = Xorshift64::new(1);
        let narrow = generate_seeds(&cfg, 400.0, 800.0, &mut rng);
        assert_eq!(narrow.len(), cfg.line_count_small);

        let mut rng = Xorshift64::new(1);
        let wide = generate_seeds(&cfg, 1920.0, 1080.0, &mut rng);
        assert_eq!(wide.len(), cfg.line_count_large);
    }

    #[test]
    fn origins_and_hues_stay_in_range() {
        let cfg = EngineConfig::default();
        let mut rng = Xorshift64::new(42);
        for seed in generate_seeds(&cfg, 1024.0, 768.0, &mut rng) {
            assert!((0.0..1024.0).contains(&seed.origin.x));
            assert!((0.0..768.0).contains(&seed.origin.y));
            assert!((0.0..360.0).contains(&seed.hue));
        }
    }

    #[test]
    fn generation_is_deterministic_per_rng_state() {
        let cfg = EngineConfig::default();
        let mut a = Xorshift64::new(7);
        let mut b = Xorshift64::new(7);
        assert_eq!(
            generate_seeds(&cfg, 1024.0, 768.0, &mut a),
            generate_seeds(&cfg, 1024.0, 768.0, &mut b)
        );
    }
}
