//! PNG snapshots of a rendered surface.
//!
//! Feature-gated behind `png` (default on) so that hosts with their own
//! presentation path can depend on this crate without pulling in the
//! `image` crate.

use brainstream_core::error::EngineError;
use brainstream_core::pixmap::Pixmap;
use std::path::Path;

/// Writes a rendered surface as a PNG image.
///
/// Returns `EngineError::InvalidDimensions` if the surface dimensions
/// overflow `u32`, or `EngineError::Io` on write failure.
pub fn write_png(surface: &Pixmap, path: &Path) -> Result<(), EngineError> {
    let w = u32::try_from(surface.width()).map_err(|_| EngineError::InvalidDimensions)?;
    let h = u32::try_from(surface.height()).map_err(|_| EngineError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, surface.data().to_vec())
        .ok_or_else(|| EngineError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brainstream_core::color::Srgb;

    #[test]
    fn write_png_round_trip() {
        let mut surface = Pixmap::new(16, 16).unwrap();
        surface.fill(Srgb::from_hex("#336699").unwrap());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        write_png(&surface, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 16);
        assert_eq!(img.get_pixel(8, 8).0, [0x33, 0x66, 0x99, 0xff]);
    }
}
