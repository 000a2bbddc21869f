//! Field sources and their kinematics.
//!
//! A [`FieldSource`] is a moving force emitter with a kind (spin, attract,
//! repel) and a strength that oscillates over time. The [`FieldModel`] owns
//! the source set and applies the per-tick drift with elastic reflection off
//! an invisible inset boundary, keeping every source near the viewport
//! indefinitely.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::prng::Xorshift64;

/// Low end of the strength jitter multiplier applied at placement.
const JITTER_FLOOR: f64 = 0.8;

/// Force direction rule of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Force perpendicular to the radius vector (circulation).
    Spin,
    /// Force toward the source.
    Attract,
    /// Force away from the source.
    Repel,
}

impl SourceKind {
    /// The placement cycle: source `i` gets kind `i % 3`.
    pub const CYCLE: [SourceKind; 3] = [SourceKind::Spin, SourceKind::Attract, SourceKind::Repel];
}

/// One moving force emitter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSource {
    pub pos: DVec2,
    pub vel: DVec2,
    pub kind: SourceKind,
    /// Signed magnitude; a negative value reverses the kind's direction rule.
    pub base_strength: f64,
    /// Oscillation frequency in clock units.
    pub freq: f64,
    /// Oscillation phase in radians.
    pub phase: f64,
}

impl FieldSource {
    /// Effective strength at the given clock value:
    /// `base * (1 + 0.5 * sin(t * freq + phase))`.
    pub fn strength_at(&self, time: f64) -> f64 {
        self.base_strength * (1.0 + 0.5 * (time * self.freq + self.phase).sin())
    }
}

/// The mutable source set plus its kinematic update rule.
#[derive(Debug, Clone)]
pub struct FieldModel {
    sources: Vec<FieldSource>,
    width: f64,
    height: f64,
    margin: f64,
}

impl FieldModel {
    /// Places `cfg.source_count` sources at random positions with random
    /// drift, kinds cycling spin/attract/repel, strengths jittered around the
    /// per-kind base. Deterministic for a given `rng` state.
    pub fn random(cfg: &EngineConfig, width: f64, height: f64, rng: &mut Xorshift64) -> Self {
        let sources = (0..cfg.source_count)
            .map(|i| {
                let kind = SourceKind::CYCLE[i % SourceKind::CYCLE.len()];
                let base = match kind {
                    SourceKind::Spin => cfg.spin_strength,
                    SourceKind::Attract => cfg.attract_strength,
                    SourceKind::Repel => cfg.repel_strength,
                };
                let pos = DVec2::new(rng.next_range(0.0, width), rng.next_range(0.0, height));
                let half = cfg.source_speed / 2.0;
                let vel = DVec2::new(rng.next_range(-half, half), rng.next_range(-half, half));
                FieldSource {
                    pos,
                    vel,
                    kind,
                    base_strength: base * (JITTER_FLOOR + rng.next_f64() * cfg.strength_jitter),
                    freq: rng.next_range(cfg.freq_min, cfg.freq_max),
                    phase: rng.next_range(0.0, std::f64::consts::TAU),
                }
            })
            .collect();
        Self {
            sources,
            width,
            height,
            margin: cfg.margin,
        }
    }

    /// Builds a model from explicit sources (tests, pinned layouts).
    pub fn from_sources(sources: Vec<FieldSource>, width: f64, height: f64, margin: f64) -> Self {
        Self {
            sources,
            width,
            height,
            margin,
        }
    }

    /// The current source snapshot.
    pub fn sources(&self) -> &[FieldSource] {
        &self.sources
    }

    /// Advances every source by one fixed step and reflects drift at the
    /// inset margin band.
    ///
    /// A velocity component flips only when the source is beyond the margin
    /// *and* still moving outward, so each crossing flips exactly once and
    /// the overshoot never exceeds one tick's displacement.
    pub fn advance(&mut self) {
        for s in &mut self.sources {
            s.pos += s.vel;

            if (s.pos.x < self.margin && s.vel.x < 0.0)
                || (s.pos.x > self.width - self.margin && s.vel.x > 0.0)
            {
                s.vel.x = -s.vel.x;
            }
            if (s.pos.y < self.margin && s.vel.y < 0.0)
                || (s.pos.y > self.height - self.margin && s.vel.y > 0.0)
            {
                s.vel.y = -s.vel.y;
            }
        }
    }

    /// Updates the reflection bounds after a viewport resize.
    ///
    /// Source positions keep their absolute coordinates; a source now outside
    /// a shrunk viewport drifts back in through the reflection rule.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(cfg: &EngineConfig, seed: u64) -> FieldModel {
        let mut rng = Xorshift64::new(seed);
        FieldModel::random(cfg, 1024.0, 768.0, &mut rng)
    }

    #[test]
    fn random_places_requested_count_with_cycling_kinds() {
        let cfg = EngineConfig::default();
        let m = model(&cfg, 42);
        assert_eq!(m.sources().len(), cfg.source_count);
        for (i, s) in m.sources().iter().enumerate() {
            assert_eq!(s.kind, SourceKind::CYCLE[i % 3], "kind mismatch at {i}");
        }
    }

    #[test]
    fn random_positions_start_inside_viewport() {
        let m = model(&EngineConfig::default(), 7);
        for s in m.sources() {
            assert!((0.0..1024.0).contains(&s.pos.x));
            assert!((0.0..768.0).contains(&s.pos.y));
        }
    }

    #[test]
    fn random_is_deterministic_per_seed() {
        let cfg = EngineConfig::default();
        let a = model(&cfg, 99);
        let b = model(&cfg, 99);
        assert_eq!(a.sources(), b.sources());
    }

    #[test]
    fn strength_oscillates_within_half_band() {
        let s = FieldSource {
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            kind: SourceKind::Spin,
            base_strength: 100.0,
            freq: 0.5,
            phase: 1.0,
        };
        for i in 0..1000 {
            let v = s.strength_at(i as f64 * 0.01);
            assert!((50.0..=150.0).contains(&v), "strength {v} out of band");
        }
    }

    #[test]
    fn strength_at_zero_freq_is_constant_offset_by_phase() {
        let s = FieldSource {
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            kind: SourceKind::Attract,
            base_strength: 200.0,
            freq: 0.0,
            phase: 0.0,
        };
        assert!((s.strength_at(0.0) - 200.0).abs() < 1e-12);
        assert!((s.strength_at(123.0) - 200.0).abs() < 1e-12);
    }

    #[test]
    fn advance_moves_source_by_velocity() {
        let src = FieldSource {
            pos: DVec2::new(500.0, 400.0),
            vel: DVec2::new(0.3, -0.2),
            kind: SourceKind::Spin,
            base_strength: 180.0,
            freq: 0.5,
            phase: 0.0,
        };
        let mut m = FieldModel::from_sources(vec![src], 1024.0, 768.0, 100.0);
        m.advance();
        assert!((m.sources()[0].pos.x - 500.3).abs() < 1e-12);
        assert!((m.sources()[0].pos.y - 399.8).abs() < 1e-12);
    }

    #[test]
    fn crossing_the_margin_flips_velocity_exactly_once() {
        // Start just inside the right margin, moving outward.
        let src = FieldSource {
            pos: DVec2::new(923.9, 400.0),
            vel: DVec2::new(0.3, 0.0),
            kind: SourceKind::Repel,
            base_strength: -220.0,
            freq: 0.3,
            phase: 0.0,
        };
        let mut m = FieldModel::from_sources(vec![src], 1024.0, 768.0, 100.0);

        m.advance(); // crosses 924.0, flips
        assert!(m.sources()[0].vel.x < 0.0, "velocity should flip inward");
        let overshoot = m.sources()[0].pos.x - 924.0;
        assert!(
            overshoot <= 0.3 + 1e-12,
            "overshoot {overshoot} exceeds one tick's displacement"
        );

        m.advance(); // moving inward now, must not flip back
        assert!(m.sources()[0].vel.x < 0.0, "velocity flipped twice");
    }

    #[test]
    fn source_outside_shrunk_viewport_drifts_back_in() {
        let src = FieldSource {
            pos: DVec2::new(900.0, 300.0),
            vel: DVec2::new(0.5, 0.0),
            kind: SourceKind::Attract,
            base_strength: 220.0,
            freq: 0.4,
            phase: 0.0,
        };
        let mut m = FieldModel::from_sources(vec![src], 1024.0, 768.0, 100.0);
        m.resize(640.0, 480.0);

        // 900 > 640 - 100, moving outward: first advance flips inward.
        m.advance();
        assert!(m.sources()[0].vel.x < 0.0);
        for _ in 0..2000 {
            m.advance();
        }
        let x = m.sources()[0].pos.x;
        assert!(
            (100.0 - 0.5..=540.0 + 0.5).contains(&x),
            "source did not settle into the new margin band, x = {x}"
        );
    }
}
