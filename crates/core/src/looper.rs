//! The render loop: animation lifecycle from mount to teardown.
//!
//! `Uninitialized → Running → TornDown`, with `TornDown` terminal for the
//! instance. The host calls [`RenderLoop::frame`] once per display-refresh
//! tick; a loop mounted without a drawing surface never starts (silent no-op,
//! matching the permissive mount semantics of the viewer). Resize events are
//! applied between frames; each frame fully completes before the next.

use crate::color::{hsl_to_srgb, Srgb};
use crate::config::ClearMode;
use crate::engine::FieldEngine;
use crate::pixmap::Pixmap;

/// Saturation of streamline strokes.
const LINE_SATURATION: f64 = 0.7;
/// Lightness of streamline strokes.
const LINE_LIGHTNESS: f64 = 0.6;
/// Alpha of streamline strokes.
const LINE_ALPHA: f64 = 0.8;
/// Radius of the ring marker painted over each source, in pixels.
const MARKER_RADIUS: f64 = 4.0;
/// Alpha of source markers.
const MARKER_ALPHA: f64 = 0.9;

/// Lifecycle state of a render loop instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed; not yet started (or mounted without a surface).
    Uninitialized,
    /// Frames execute on each `frame()` call.
    Running,
    /// Stopped; terminal for this instance.
    TornDown,
}

/// Owns one engine and (optionally) one drawing surface, and drives them a
/// frame at a time.
///
/// Single-threaded and cooperative: no frame overlaps another, and `stop()`
/// takes effect synchronously.
#[derive(Debug)]
pub struct RenderLoop {
    engine: FieldEngine,
    surface: Option<Pixmap>,
    state: LoopState,
}

impl RenderLoop {
    /// Mounts an engine with an optional surface.
    pub fn new(engine: FieldEngine, surface: Option<Pixmap>) -> Self {
        Self {
            engine,
            surface,
            state: LoopState::Uninitialized,
        }
    }

    /// Enters `Running` if a surface is available.
    ///
    /// Without a surface this is a silent no-op — the loop simply never
    /// starts. Calling after teardown is also a no-op.
    pub fn start(&mut self) {
        if self.state == LoopState::Uninitialized && self.surface.is_some() {
            self.state = LoopState::Running;
        }
    }

    /// Executes one frame if running: advance the engine, prepare the
    /// surface, stroke every drawable streamline, then the source markers.
    ///
    /// Returns whether a frame actually ran.
    pub fn frame(&mut self) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        let surface = match self.surface.as_mut() {
            Some(s) => s,
            None => return false,
        };

        self.engine.tick();

        match self.engine.config().clear {
            ClearMode::Opaque => surface.fill(Srgb::BLACK),
            ClearMode::Fade(alpha) => surface.fade(Srgb::BLACK, alpha),
        }

        for line in self.engine.streamlines() {
            if !line.is_drawable() {
                continue;
            }
            let color = hsl_to_srgb(line.hue, LINE_SATURATION, LINE_LIGHTNESS);
            surface.stroke_polyline(&line.points, color, LINE_ALPHA);
        }

        for source in self.engine.sources() {
            surface.stroke_circle(source.pos, MARKER_RADIUS, Srgb::WHITE, MARKER_ALPHA);
        }

        true
    }

    /// Applies a viewport-size change between frames: the surface adopts the
    /// new pixel dimensions and the engine regenerates its seed set.
    ///
    /// Ignored after teardown or for degenerate dimensions.
    pub fn resize(&mut self, width: usize, height: usize) {
        if self.state == LoopState::TornDown || width == 0 || height == 0 {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            // dimensions already validated non-zero
            let _ = surface.resize(width, height);
        }
        self.engine.resize(width as f64, height as f64);
    }

    /// Tears the loop down. Terminal: no further frames run and `start()`
    /// cannot revive this instance.
    pub fn stop(&mut self) {
        self.state = LoopState::TornDown;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The engine driven by this loop.
    pub fn engine(&self) -> &FieldEngine {
        &self.engine
    }

    /// The painted surface, if one was mounted.
    pub fn surface(&self) -> Option<&Pixmap> {
        self.surface.as_ref()
    }
}
