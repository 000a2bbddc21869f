//! CPU drawing surface: an RGBA8 pixel buffer with the handful of primitives
//! the render loop needs — opaque clear, low-alpha fade, blended polyline
//! strokes, and ring markers.

use glam::DVec2;

use crate::color::Srgb;
use crate::error::EngineError;

/// An owned RGBA8 pixel buffer, row-major, alpha always 255.
#[derive(Debug, Clone)]
pub struct Pixmap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Pixmap {
    /// Creates a black pixmap of the given dimensions.
    ///
    /// Returns `EngineError::InvalidDimensions` if either dimension is zero
    /// or the buffer size overflows.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(EngineError::InvalidDimensions)?;
        let mut data = vec![0u8; len];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the RGBA8 buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The RGBA value at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Replaces the buffer with a black surface of new dimensions.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), EngineError> {
        *self = Pixmap::new(width, height)?;
        Ok(())
    }

    /// Opaque fill with `color`.
    pub fn fill(&mut self, color: Srgb) {
        let [r, g, b] = quantize(color);
        for px in self.data.chunks_exact_mut(4) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
            px[3] = 255;
        }
    }

    /// Blends `color` over the whole surface at `alpha`, leaving trails of
    /// previous frames underneath.
    pub fn fade(&mut self, color: Srgb, alpha: f64) {
        let a = alpha.clamp(0.0, 1.0);
        let [r, g, b] = quantize(color);
        for px in self.data.chunks_exact_mut(4) {
            px[0] = blend(px[0], r, a);
            px[1] = blend(px[1], g, a);
            px[2] = blend(px[2], b, a);
        }
    }

    /// Blends a single pixel; out-of-bounds coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Srgb, alpha: f64) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let a = alpha.clamp(0.0, 1.0);
        let [r, g, b] = quantize(color);
        let i = (y as usize * self.width + x as usize) * 4;
        self.data[i] = blend(self.data[i], r, a);
        self.data[i + 1] = blend(self.data[i + 1], g, a);
        self.data[i + 2] = blend(self.data[i + 2], b, a);
    }

    /// Strokes a connected polyline one pixel wide with alpha blending.
    ///
    /// Fewer than two points paint nothing.
    pub fn stroke_polyline(&mut self, points: &[DVec2], color: Srgb, alpha: f64) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], color, alpha);
        }
    }

    /// Strokes an unfilled circle by sampling the circumference at roughly
    /// one-pixel arc spacing.
    pub fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Srgb, alpha: f64) {
        if radius <= 0.0 {
            return;
        }
        let steps = (std::f64::consts::TAU * radius).ceil().max(8.0) as usize;
        for i in 0..steps {
            let angle = std::f64::consts::TAU * i as f64 / steps as f64;
            let x = (center.x + radius * angle.cos()).round() as i64;
            let y = (center.y + radius * angle.sin()).round() as i64;
            self.blend_pixel(x, y, color, alpha);
        }
    }

    /// Bresenham line between two points.
    fn line(&mut self, from: DVec2, to: DVec2, color: Srgb, alpha: f64) {
        let mut x0 = from.x.round() as i64;
        let mut y0 = from.y.round() as i64;
        let x1 = to.x.round() as i64;
        let y1 = to.y.round() as i64;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend_pixel(x0, y0, color, alpha);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

/// Quantizes a color to 8-bit channels.
fn quantize(color: Srgb) -> [u8; 3] {
    [
        (color.r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (color.g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (color.b.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

/// Source-over blend of one channel.
fn blend(dst: u8, src: u8, alpha: f64) -> u8 {
    (src as f64 * alpha + dst as f64 * (1.0 - alpha)).round() as u8
}
