//! Streamline tracing by fixed-step Euler integration.
//!
//! A streamline is recomputed from scratch every frame as a pure function of
//! (seed, source snapshot, clock) — no per-particle state survives between
//! frames, which keeps the integrator trivially testable.

use glam::DVec2;

use crate::config::EngineConfig;
use crate::field::force_at;
use crate::source::FieldSource;

/// The traced polyline for one seed at one instant.
///
/// May hold fewer than two points ("no visible line"); callers skip the draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Streamline {
    pub points: Vec<DVec2>,
    /// Hue in degrees, carried over from the seed.
    pub hue: f64,
}

impl Streamline {
    /// Whether the line has enough points to stroke.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// Traces one field line from `origin` through the current field.
///
/// Steps `p += force * step_size` up to `cfg.max_steps` times, appending each
/// visited point. Terminates early when the point leaves the canvas expanded
/// by `cfg.overscan`, or when the force magnitude drops below
/// `cfg.min_force`. Every returned point lies within the expanded bounds.
pub fn trace(
    origin: DVec2,
    sources: &[FieldSource],
    time: f64,
    width: f64,
    height: f64,
    cfg: &EngineConfig,
) -> Vec<DVec2> {
    let mut points = Vec::new();
    let mut p = origin;

    for _ in 0..cfg.max_steps {
        if p.x < -cfg.overscan
            || p.x > width + cfg.overscan
            || p.y < -cfg.overscan
            || p.y > height + cfg.overscan
        {
            break;
        }
        points.push(p);

        let force = force_at(sources, p, time, cfg);
        if force.length() < cfg.min_force {
            break;
        }
        p += force * cfg.step_size;
    }

    points
}
