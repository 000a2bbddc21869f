//! The field engine: explicit owner of sources, seeds, and the clock.
//!
//! One engine instance per mount; nothing is process-global. The render loop
//! drives it one [`FieldEngine::tick`] at a time and reads back the traced
//! streamlines for painting.

use glam::DVec2;
use serde_json::Value;

use crate::config::{EngineConfig, ReseedPolicy};
use crate::error::EngineError;
use crate::prng::Xorshift64;
use crate::seed::{generate_seeds, StreamlineSeed};
use crate::source::FieldModel;
use crate::streamline::{trace, Streamline};

/// The animation state: field model, seed set, and global clock.
#[derive(Debug, Clone)]
pub struct FieldEngine {
    model: FieldModel,
    seeds: Vec<StreamlineSeed>,
    clock: f64,
    ticks: u64,
    width: f64,
    height: f64,
    cfg: EngineConfig,
    rng: Xorshift64,
}

impl FieldEngine {
    /// Creates an engine with randomized source placement and seed set.
    ///
    /// Returns `EngineError::InvalidDimensions` for non-positive dimensions,
    /// or a config error from [`EngineConfig::validate`].
    pub fn new(width: f64, height: f64, seed: u64, cfg: EngineConfig) -> Result<Self, EngineError> {
        if !(width > 0.0) || !(height > 0.0) {
            return Err(EngineError::InvalidDimensions);
        }
        cfg.validate()?;
        let mut rng = Xorshift64::new(seed);
        let model = FieldModel::random(&cfg, width, height, &mut rng);
        let seeds = generate_seeds(&cfg, width, height, &mut rng);
        Ok(Self {
            model,
            seeds,
            clock: 0.0,
            ticks: 0,
            width,
            height,
            cfg,
            rng,
        })
    }

    /// Creates an engine from a JSON config override (CLI path).
    pub fn from_json(
        width: f64,
        height: f64,
        seed: u64,
        params: &Value,
    ) -> Result<Self, EngineError> {
        Self::new(width, height, seed, EngineConfig::from_json(params))
    }

    /// Creates an engine around a pinned field model (tests, replays).
    ///
    /// The seed set is still generated from `seed` so painting has lines to
    /// work with.
    pub fn with_model(
        model: FieldModel,
        width: f64,
        height: f64,
        seed: u64,
        cfg: EngineConfig,
    ) -> Result<Self, EngineError> {
        if !(width > 0.0) || !(height > 0.0) {
            return Err(EngineError::InvalidDimensions);
        }
        cfg.validate()?;
        let mut rng = Xorshift64::new(seed);
        let seeds = generate_seeds(&cfg, width, height, &mut rng);
        Ok(Self {
            model,
            seeds,
            clock: 0.0,
            ticks: 0,
            width,
            height,
            cfg,
            rng,
        })
    }

    /// Advances the simulation by one frame: clock, source kinematics, and
    /// conditional seed regeneration per the reseed policy.
    pub fn tick(&mut self) {
        self.clock += self.cfg.clock_step;
        self.model.advance();
        self.ticks += 1;

        let reseed = match self.cfg.reseed {
            ReseedPolicy::Static => false,
            ReseedPolicy::PerTick => true,
            ReseedPolicy::Every(n) => n > 0 && self.ticks % u64::from(n) == 0,
        };
        if reseed {
            self.regenerate_seeds();
        }
    }

    /// Traces every seed through the current field.
    ///
    /// Pure with respect to engine state: calling this twice between ticks
    /// yields bit-identical polylines.
    pub fn streamlines(&self) -> Vec<Streamline> {
        self.seeds
            .iter()
            .map(|seed| Streamline {
                points: trace(
                    seed.origin,
                    self.model.sources(),
                    self.clock,
                    self.width,
                    self.height,
                    &self.cfg,
                ),
                hue: seed.hue,
            })
            .collect()
    }

    /// Net force at an arbitrary point at the current clock value.
    pub fn force_at(&self, point: DVec2) -> DVec2 {
        crate::field::force_at(self.model.sources(), point, self.clock, &self.cfg)
    }

    /// Adopts new viewport dimensions and regenerates the seed set so line
    /// density matches the new area. Source positions are not rescaled.
    pub fn resize(&mut self, width: f64, height: f64) {
        if !(width > 0.0) || !(height > 0.0) {
            return;
        }
        self.width = width;
        self.height = height;
        self.model.resize(width, height);
        self.regenerate_seeds();
    }

    fn regenerate_seeds(&mut self) {
        self.seeds = generate_seeds(&self.cfg, self.width, self.height, &mut self.rng);
    }

    /// Current global clock value.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Ticks executed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current source snapshot.
    pub fn sources(&self) -> &[crate::source::FieldSource] {
        self.model.sources()
    }

    /// Current seed set.
    pub fn seeds(&self) -> &[StreamlineSeed] {
        &self.seeds
    }

    /// Viewport dimensions.
    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// Current parameter values as a JSON object.
    pub fn params(&self) -> Value {
        self.cfg.to_json()
    }
}
