//! Text-overlay rasterizer.
//!
//! One rasterizer, parameterized by the destination buffer encoding:
//!
//! - [`draw_string_packed`] - packed monochrome, 1 bit per pixel, 8 pixels
//!   per byte. Writes OR glyph rows in, so repeated draws accumulate ink.
//! - [`draw_string_gray8`] - one byte per pixel. Writes the caller's color
//!   only where a glyph bit is set; zero-bit pixels are left untouched.
//! - [`draw_string_halo`] - five-pass composite over the Gray8 path that
//!   keeps text legible regardless of background luminance.
//!
//! Every entry point validates the string's full extent against the buffer
//! before writing anything; a rejected draw leaves the buffer untouched.
//! The rasterizer never allocates and never retains the buffer.

mod gray8;
mod halo;
mod packed;

pub use gray8::draw_string_gray8;
pub use halo::draw_string_halo;
pub use packed::draw_string_packed;

use crate::font::GlyphFont;

/// Destination buffer encodings understood by the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferEncoding {
    /// 1 bit per pixel, 8 pixels per byte, row stride `width / 8` bytes.
    PackedMono,
    /// 1 byte per pixel, row stride `width` bytes.
    #[default]
    Gray8,
}

impl BufferEncoding {
    /// Parse an encoding name from string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "packed" | "mono" | "packed-mono" => Some(Self::PackedMono),
            "gray" | "gray8" | "grayscale" => Some(Self::Gray8),
            _ => None,
        }
    }

    /// Bytes needed for a `width` x `height` buffer in this encoding.
    ///
    /// Returns `None` for a packed width that is not a multiple of 8.
    pub fn buffer_len(self, width: u32, height: u32) -> Option<usize> {
        match self {
            Self::PackedMono => {
                if width % 8 != 0 {
                    return None;
                }
                Some((width / 8) as usize * height as usize)
            }
            Self::Gray8 => Some(width as usize * height as usize),
        }
    }
}

impl std::fmt::Display for BufferEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PackedMono => write!(f, "packed"),
            Self::Gray8 => write!(f, "gray8"),
        }
    }
}

/// Errors returned by the draw entry points.
///
/// All are detected before the first write; the destination buffer is
/// never partially modified.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// Packed buffers require a width that is a multiple of 8.
    #[error("packed buffer width must be a multiple of 8, got {width}")]
    UnalignedWidth { width: u32 },
    /// The supplied slice is smaller than the stated dimensions require.
    #[error("buffer is {actual} bytes but a {width}x{height} frame needs {expected}")]
    BufferTooSmall {
        expected: usize,
        actual: usize,
        width: u32,
        height: u32,
    },
    /// The string's pixel extent does not fit inside the buffer.
    #[error(
        "text extent {extent_w}x{extent_h} at ({x}, {y}) exceeds the \
         {width}x{height} buffer"
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        extent_w: u32,
        extent_h: u32,
        width: u32,
        height: u32,
    },
}

/// Check the slice length against the stated dimensions.
fn check_buffer_len(
    buf: &[u8],
    width: u32,
    height: u32,
    expected: usize,
) -> Result<(), RasterError> {
    if buf.len() < expected {
        return Err(RasterError::BufferTooSmall {
            expected,
            actual: buf.len(),
            width,
            height,
        });
    }
    Ok(())
}

/// Check that a draw extent starting at (`x`, `y`) fits inside the buffer,
/// measuring `x`/`extent_w` in the caller's column unit (bytes for packed,
/// pixels for Gray8).
fn check_extent(
    x: u32,
    y: u32,
    extent_w: u32,
    extent_h: u32,
    columns: u32,
    height: u32,
    width: u32,
) -> Result<(), RasterError> {
    let fits_x = x.checked_add(extent_w).is_some_and(|end| end <= columns);
    let fits_y = y.checked_add(extent_h).is_some_and(|end| end <= height);
    if !fits_x || !fits_y {
        log::debug!(
            "rejecting draw: extent {}x{} at ({}, {}) vs {} columns x {} rows",
            extent_w,
            extent_h,
            x,
            y,
            columns,
            height
        );
        return Err(RasterError::OutOfBounds {
            x,
            y,
            extent_w,
            extent_h,
            width,
            height,
        });
    }
    Ok(())
}

/// Blit one resolved glyph into a Gray8 buffer. Bounds are the caller's
/// responsibility; `origin_x`/`y` are pixel coordinates.
fn blit_glyph_gray8(
    buf: &mut [u8],
    width: u32,
    origin_x: u32,
    y: u32,
    rows: &[u8],
    font: &GlyphFont<'_>,
    color: u8,
) {
    let stride = width as usize;
    let bits = font.width().min(8);
    for j in 0..font.height() as usize {
        let row_byte = rows[j * font.row_stride()];
        let line = (y as usize + j) * stride + origin_x as usize;
        for k in 0..bits {
            if row_byte & (0x80 >> k) != 0 {
                buf[line + k as usize] = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_from_str() {
        assert_eq!(BufferEncoding::from_str("packed"), Some(BufferEncoding::PackedMono));
        assert_eq!(BufferEncoding::from_str("MONO"), Some(BufferEncoding::PackedMono));
        assert_eq!(BufferEncoding::from_str("gray8"), Some(BufferEncoding::Gray8));
        assert_eq!(BufferEncoding::from_str("grayscale"), Some(BufferEncoding::Gray8));
        assert_eq!(BufferEncoding::from_str("rgb"), None);
    }

    #[test]
    fn test_buffer_len() {
        assert_eq!(BufferEncoding::PackedMono.buffer_len(16, 2), Some(4));
        assert_eq!(BufferEncoding::PackedMono.buffer_len(12, 2), None);
        assert_eq!(BufferEncoding::Gray8.buffer_len(16, 2), Some(32));
    }

    #[test]
    fn test_encoding_display() {
        assert_eq!(BufferEncoding::PackedMono.to_string(), "packed");
        assert_eq!(BufferEncoding::Gray8.to_string(), "gray8");
    }
}
