//! Net force evaluation over the source set.
//!
//! The force at a query point is the sum of every source's contribution:
//! oscillation-modulated strength, quadratic-with-damping distance decay,
//! direction by source kind. Total arithmetic — the distance offset keeps the
//! result finite even at a source's own position.

use glam::DVec2;

use crate::config::EngineConfig;
use crate::source::{FieldSource, SourceKind};

/// Computes the net force vector at `point` for the given clock value.
///
/// Per source, with `d = point - source.pos`:
/// `dist = |d| + dist_offset`, `raw = strength_at(t) / (dist² * damping + 1)`,
/// and the direction rule of the kind (perpendicular, inward, outward)
/// applied to the unnormalized `d`, scaled by `force_scale`.
pub fn force_at(sources: &[FieldSource], point: DVec2, time: f64, cfg: &EngineConfig) -> DVec2 {
    sources.iter().fold(DVec2::ZERO, |acc, source| {
        let d = point - source.pos;
        let dist = d.length() + cfg.dist_offset;
        let raw = source.strength_at(time) / (dist * dist * cfg.damping + 1.0);
        let dir = match source.kind {
            SourceKind::Spin => DVec2::new(-d.y, d.x),
            SourceKind::Attract => -d,
            SourceKind::Repel => d,
        };
        acc + dir * raw * cfg.force_scale
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FieldSource;

    fn source(kind: SourceKind, strength: f64, x: f64, y: f64) -> FieldSource {
        FieldSource {
            pos: DVec2::new(x, y),
            vel: DVec2::ZERO,
            kind,
            base_strength: strength,
            freq: 0.0,
            phase: 0.0,
        }
    }

    #[test]
    fn no_sources_yields_zero_force() {
        let cfg = EngineConfig::default();
        let f = force_at(&[], DVec2::new(10.0, 20.0), 0.0, &cfg);
        assert_eq!(f, DVec2::ZERO);
    }

    #[test]
    fn force_is_finite_at_the_source_position_for_every_kind() {
        let cfg = EngineConfig::default();
        for kind in SourceKind::CYCLE {
            let s = source(kind, 200.0, 300.0, 300.0);
            let f = force_at(&[s], s.pos, 0.0, &cfg);
            assert!(f.x.is_finite() && f.y.is_finite(), "{kind:?} not finite");
        }
    }

    #[test]
    fn spin_force_is_perpendicular_to_the_radius_vector() {
        let cfg = EngineConfig::default();
        let s = source(SourceKind::Spin, 180.0, 100.0, 100.0);
        for (px, py) in [(250.0, 100.0), (100.0, 400.0), (37.0, 251.0)] {
            let p = DVec2::new(px, py);
            let f = force_at(&[s], p, 0.0, &cfg);
            let radial = p - s.pos;
            let dot = f.dot(radial);
            assert!(dot.abs() < 1e-9, "dot {dot} at ({px}, {py})");
            assert!(f.length() > 0.0, "spin force vanished at ({px}, {py})");
        }
    }

    #[test]
    fn attract_force_projects_inward_and_repel_outward() {
        let cfg = EngineConfig::default();
        let attract = source(SourceKind::Attract, 220.0, 500.0, 400.0);
        let repel = source(SourceKind::Repel, 220.0, 500.0, 400.0);
        for (px, py) in [(100.0, 100.0), (700.0, 500.0), (500.0, 50.0)] {
            let p = DVec2::new(px, py);
            let outward = p - DVec2::new(500.0, 400.0);

            let fa = force_at(&[attract], p, 0.0, &cfg);
            assert!(fa.dot(outward) < 0.0, "attract not inward at ({px}, {py})");

            let fr = force_at(&[repel], p, 0.0, &cfg);
            assert!(fr.dot(outward) > 0.0, "repel not outward at ({px}, {py})");
        }
    }

    #[test]
    fn negative_strength_reverses_the_direction_rule() {
        let cfg = EngineConfig::default();
        let r = source(SourceKind::Repel, -100.0, 0.0, 0.0);
        let p = DVec2::new(50.0, 0.0);
        let f = force_at(&[r], p, 0.0, &cfg);
        assert!(f.x < 0.0, "negative repel should pull inward, fx = {}", f.x);
    }

    #[test]
    fn force_decays_with_distance() {
        let cfg = EngineConfig::default();
        let s = source(SourceKind::Repel, 220.0, 0.0, 0.0);
        let near = force_at(&[s], DVec2::new(50.0, 0.0), 0.0, &cfg).length();
        let far = force_at(&[s], DVec2::new(800.0, 0.0), 0.0, &cfg).length();
        assert!(near > far, "near {near} should exceed far {far}");
    }

    #[test]
    fn contributions_sum_over_sources() {
        let cfg = EngineConfig::default();
        let a = source(SourceKind::Attract, 220.0, -50.0, 0.0);
        let b = source(SourceKind::Attract, 220.0, 50.0, 0.0);
        // Equal attractors cancel at the midpoint.
        let f = force_at(&[a, b], DVec2::ZERO, 0.0, &cfg);
        assert!(f.x.abs() < 1e-9 && f.y.abs() < 1e-9, "expected cancellation, got {f:?}");
    }

    #[test]
    fn oscillation_modulates_the_force_over_time() {
        let cfg = EngineConfig::default();
        let mut s = source(SourceKind::Repel, 220.0, 0.0, 0.0);
        s.freq = 1.0;
        let p = DVec2::new(100.0, 0.0);
        let f0 = force_at(&[s], p, 0.0, &cfg).length();
        let f1 = force_at(&[s], p, std::f64::consts::FRAC_PI_2, &cfg).length();
        assert!((f1 - f0).abs() > 1e-9, "oscillation had no effect");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_coord() -> impl Strategy<Value = f64> {
            -2000.0_f64..2000.0
        }

        proptest! {
            #[test]
            fn force_is_always_finite(
                px in any_coord(),
                py in any_coord(),
                sx in any_coord(),
                sy in any_coord(),
                t in 0.0_f64..100.0,
            ) {
                let cfg = EngineConfig::default();
                for kind in SourceKind::CYCLE {
                    let mut s = source(kind, 220.0, sx, sy);
                    s.freq = 0.5;
                    s.phase = 1.0;
                    let f = force_at(&[s], DVec2::new(px, py), t, &cfg);
                    prop_assert!(f.x.is_finite() && f.y.is_finite());
                }
            }

            #[test]
            fn evaluation_is_deterministic(
                px in any_coord(),
                py in any_coord(),
                t in 0.0_f64..100.0,
            ) {
                let cfg = EngineConfig::default();
                let sources = [
                    source(SourceKind::Spin, 180.0, 100.0, 100.0),
                    source(SourceKind::Attract, 220.0, 600.0, 300.0),
                    source(SourceKind::Repel, -220.0, 300.0, 500.0),
                ];
                let p = DVec2::new(px, py);
                let a = force_at(&sources, p, t, &cfg);
                let b = force_at(&sources, p, t, &cfg);
                prop_assert!(a.x.to_bits() == b.x.to_bits());
                prop_assert!(a.y.to_bits() == b.y.to_bits());
            }
        }
    }
}
