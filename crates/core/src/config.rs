//! Engine configuration: every tuning constant of the animation, with
//! documented ranges and JSON overrides.
//!
//! The defaults reproduce the production look. Tests pin individual fields
//! (notably `dist_offset` and the strength values) to deterministic values.

use crate::error::EngineError;
use crate::params::{param_f64, param_string, param_usize};
use serde_json::{json, Value};

/// Default number of field sources.
const DEFAULT_SOURCE_COUNT: usize = 6;
/// Default drift speed span: velocity components land in ±span/2 per tick.
const DEFAULT_SOURCE_SPEED: f64 = 0.6;
/// Default base strength for spin sources.
const DEFAULT_SPIN_STRENGTH: f64 = 180.0;
/// Default base strength for attract sources.
const DEFAULT_ATTRACT_STRENGTH: f64 = 220.0;
/// Default base strength for repel sources (sign carried by the value).
const DEFAULT_REPEL_STRENGTH: f64 = -220.0;
/// Default inset reflection margin in pixels.
const DEFAULT_MARGIN: f64 = 100.0;
/// Default clock increment per tick (observed range 0.005–0.01).
const DEFAULT_CLOCK_STEP: f64 = 0.005;
/// Default Euler step size in pixels.
const DEFAULT_STEP_SIZE: f64 = 2.0;
/// Default maximum integration steps per streamline (observed 200–300).
const DEFAULT_MAX_STEPS: usize = 300;
/// Default force magnitude below which tracing stops.
const DEFAULT_MIN_FORCE: f64 = 1e-3;
/// Default off-screen allowance before a trace is cut, in pixels.
const DEFAULT_OVERSCAN: f64 = 50.0;
/// Default distance offset preventing the force singularity (observed 1–10).
const DEFAULT_DIST_OFFSET: f64 = 10.0;
/// Default quadratic damping constant in the decay law `s / (d²c + 1)`.
const DEFAULT_DAMPING: f64 = 0.001;
/// Default force scale constant (observed 0.01–0.02).
const DEFAULT_FORCE_SCALE: f64 = 0.02;
/// Default streamline count on narrow viewports.
const DEFAULT_LINE_COUNT_SMALL: usize = 50;
/// Default streamline count on wide viewports.
const DEFAULT_LINE_COUNT_LARGE: usize = 80;
/// Viewport width below which the small line count applies.
const DEFAULT_SMALL_WIDTH: f64 = 768.0;
/// Default oscillation frequency range.
const DEFAULT_FREQ_MIN: f64 = 0.2;
const DEFAULT_FREQ_MAX: f64 = 0.8;
/// Default jitter applied to base strength at placement: `0.8 + 0.6 * r`.
const DEFAULT_STRENGTH_JITTER: f64 = 0.6;
/// Default fade alpha when `ClearMode::Fade` is selected.
const DEFAULT_FADE_ALPHA: f64 = 0.1;
/// Default reseed interval for `ReseedPolicy::Every`.
const DEFAULT_RESEED_EVERY: u32 = 10;

/// When streamline seeds are regenerated.
///
/// All three observed policies are supported; they trade visual smoothness
/// against CPU cost. `Static` still regenerates on resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReseedPolicy {
    /// Seeds live for the engine lifetime (plus resize).
    Static,
    /// Seeds are regenerated every `n` ticks.
    Every(u32),
    /// Seeds are regenerated on every tick.
    PerTick,
}

/// How the surface is prepared at the start of each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClearMode {
    /// Full opaque clear to the background color (crisp, no trails).
    Opaque,
    /// Low-alpha background overlay, leaving motion trails.
    Fade(f64),
}

/// All tuning constants of the field animation.
///
/// Construct with [`Default`] for the production look, or override selected
/// fields from JSON via [`EngineConfig::from_json`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of field sources, cycling spin/attract/repel. Range 1–16.
    pub source_count: usize,
    /// Drift speed span; velocity components are drawn from ±span/2.
    pub source_speed: f64,
    /// Base strength for spin sources.
    pub spin_strength: f64,
    /// Base strength for attract sources.
    pub attract_strength: f64,
    /// Base strength for repel sources; negative reverses the outward push.
    pub repel_strength: f64,
    /// Relative jitter applied to base strength at placement.
    pub strength_jitter: f64,
    /// Oscillation frequency range `[freq_min, freq_max)`.
    pub freq_min: f64,
    pub freq_max: f64,
    /// Inset margin from the canvas edge where sources reflect, in pixels.
    pub margin: f64,
    /// Clock increment per tick. Range 0.005–0.01 for the observed pacing.
    pub clock_step: f64,
    /// Euler step size in pixels.
    pub step_size: f64,
    /// Maximum integration steps per streamline. Range 200–300.
    pub max_steps: usize,
    /// Force magnitude below which tracing stops.
    pub min_force: f64,
    /// How far past the canvas a trace may run before being cut, in pixels.
    pub overscan: f64,
    /// Distance offset preventing the singularity at a source. Range 1–10.
    pub dist_offset: f64,
    /// Quadratic damping constant in the decay `strength / (dist² * c + 1)`.
    pub damping: f64,
    /// Force scale constant. Range 0.01–0.02.
    pub force_scale: f64,
    /// Streamline counts by viewport width.
    pub line_count_small: usize,
    pub line_count_large: usize,
    pub small_width: f64,
    /// Seed regeneration policy.
    pub reseed: ReseedPolicy,
    /// Frame clear mode.
    pub clear: ClearMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            source_count: DEFAULT_SOURCE_COUNT,
            source_speed: DEFAULT_SOURCE_SPEED,
            spin_strength: DEFAULT_SPIN_STRENGTH,
            attract_strength: DEFAULT_ATTRACT_STRENGTH,
            repel_strength: DEFAULT_REPEL_STRENGTH,
            strength_jitter: DEFAULT_STRENGTH_JITTER,
            freq_min: DEFAULT_FREQ_MIN,
            freq_max: DEFAULT_FREQ_MAX,
            margin: DEFAULT_MARGIN,
            clock_step: DEFAULT_CLOCK_STEP,
            step_size: DEFAULT_STEP_SIZE,
            max_steps: DEFAULT_MAX_STEPS,
            min_force: DEFAULT_MIN_FORCE,
            overscan: DEFAULT_OVERSCAN,
            dist_offset: DEFAULT_DIST_OFFSET,
            damping: DEFAULT_DAMPING,
            force_scale: DEFAULT_FORCE_SCALE,
            line_count_small: DEFAULT_LINE_COUNT_SMALL,
            line_count_large: DEFAULT_LINE_COUNT_LARGE,
            small_width: DEFAULT_SMALL_WIDTH,
            reseed: ReseedPolicy::Static,
            clear: ClearMode::Opaque,
        }
    }
}

impl EngineConfig {
    /// Extracts a config from a JSON object, falling back to defaults.
    ///
    /// Recognized keys match the field names; `reseed` takes
    /// `"static"`, `"every"` (with `reseed_every`), or `"per_tick"`, and
    /// `clear` takes `"opaque"` or `"fade"` (with `fade_alpha`).
    pub fn from_json(params: &Value) -> Self {
        let d = Self::default();
        let reseed = match param_string(params, "reseed", "static").as_str() {
            "per_tick" => ReseedPolicy::PerTick,
            "every" => ReseedPolicy::Every(
                param_usize(params, "reseed_every", DEFAULT_RESEED_EVERY as usize) as u32,
            ),
            _ => ReseedPolicy::Static,
        };
        let clear = match param_string(params, "clear", "opaque").as_str() {
            "fade" => ClearMode::Fade(param_f64(params, "fade_alpha", DEFAULT_FADE_ALPHA)),
            _ => ClearMode::Opaque,
        };
        Self {
            source_count: param_usize(params, "source_count", d.source_count),
            source_speed: param_f64(params, "source_speed", d.source_speed),
            spin_strength: param_f64(params, "spin_strength", d.spin_strength),
            attract_strength: param_f64(params, "attract_strength", d.attract_strength),
            repel_strength: param_f64(params, "repel_strength", d.repel_strength),
            strength_jitter: param_f64(params, "strength_jitter", d.strength_jitter),
            freq_min: param_f64(params, "freq_min", d.freq_min),
            freq_max: param_f64(params, "freq_max", d.freq_max),
            margin: param_f64(params, "margin", d.margin),
            clock_step: param_f64(params, "clock_step", d.clock_step),
            step_size: param_f64(params, "step_size", d.step_size),
            max_steps: param_usize(params, "max_steps", d.max_steps),
            min_force: param_f64(params, "min_force", d.min_force),
            overscan: param_f64(params, "overscan", d.overscan),
            dist_offset: param_f64(params, "dist_offset", d.dist_offset),
            damping: param_f64(params, "damping", d.damping),
            force_scale: param_f64(params, "force_scale", d.force_scale),
            line_count_small: param_usize(params, "line_count_small", d.line_count_small),
            line_count_large: param_usize(params, "line_count_large", d.line_count_large),
            small_width: param_f64(params, "small_width", d.small_width),
            reseed,
            clear,
        }
    }

    /// Validates ranges that would break the simulation outright.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.source_count == 0 {
            return Err(EngineError::InvalidConfig {
                name: "source_count".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.max_steps == 0 {
            return Err(EngineError::InvalidConfig {
                name: "max_steps".into(),
                reason: "must be at least 1".into(),
            });
        }
        if !(self.clock_step > 0.0) {
            return Err(EngineError::InvalidConfig {
                name: "clock_step".into(),
                reason: "must be positive".into(),
            });
        }
        if !(self.step_size > 0.0) {
            return Err(EngineError::InvalidConfig {
                name: "step_size".into(),
                reason: "must be positive".into(),
            });
        }
        if !(self.dist_offset > 0.0) {
            return Err(EngineError::InvalidConfig {
                name: "dist_offset".into(),
                reason: "must be positive (guards the force singularity)".into(),
            });
        }
        if self.freq_min > self.freq_max {
            return Err(EngineError::InvalidConfig {
                name: "freq_min".into(),
                reason: "must not exceed freq_max".into(),
            });
        }
        Ok(())
    }

    /// Streamline count for a given viewport width.
    pub fn line_count(&self, width: f64) -> usize {
        if width < self.small_width {
            self.line_count_small
        } else {
            self.line_count_large
        }
    }

    /// Current values as a JSON object (for `--json` CLI output).
    pub fn to_json(&self) -> Value {
        let (reseed, reseed_every) = match self.reseed {
            ReseedPolicy::Static => ("static", 0),
            ReseedPolicy::Every(n) => ("every", n),
            ReseedPolicy::PerTick => ("per_tick", 0),
        };
        let (clear, fade_alpha) = match self.clear {
            ClearMode::Opaque => ("opaque", 0.0),
            ClearMode::Fade(a) => ("fade", a),
        };
        json!({
            "source_count": self.source_count,
            "source_speed": self.source_speed,
            "spin_strength": self.spin_strength,
            "attract_strength": self.attract_strength,
            "repel_strength": self.repel_strength,
            "strength_jitter": self.strength_jitter,
            "freq_min": self.freq_min,
            "freq_max": self.freq_max,
            "margin": self.margin,
            "clock_step": self.clock_step,
            "step_size": self.step_size,
            "max_steps": self.max_steps,
            "min_force": self.min_force,
            "overscan": self.overscan,
            "dist_offset": self.dist_offset,
            "damping": self.damping,
            "force_scale": self.force_scale,
            "line_count_small": self.line_count_small,
            "line_count_large": self.line_count_large,
            "small_width": self.small_width,
            "reseed": reseed,
            "reseed_every": reseed_every,
            "clear": clear,
            "fade_alpha": fade_alpha,
        })
    }
}
