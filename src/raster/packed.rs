//! Packed-monochrome draw path.

use super::{check_buffer_len, check_extent, RasterError};
use crate::font::GlyphFont;

/// Draw `text` into a packed 1-bpp buffer.
///
/// The buffer stores 8 horizontally adjacent pixels per byte, row stride
/// `width / 8` bytes. `x` is a **byte column** (groups of 8 pixels), not a
/// pixel column; each character advances one byte column, so this path is
/// intended for fonts up to 8 pixels wide. Glyph rows are ORed into the
/// destination: ink accumulates and never erases, so overlapping draws
/// compose.
///
/// Characters outside the font's range follow the font's missing-glyph
/// policy; a skipped character still advances the pen.
///
/// # Arguments
/// * `buf` - Destination pixels, at least `width / 8 * height` bytes
/// * `width` - Buffer width in pixels, must be a multiple of 8
/// * `height` - Buffer height in rows
/// * `x` - Leftmost byte column of the text
/// * `y` - Topmost pixel row of the text
/// * `text` - Characters to draw, one byte column each
/// * `font` - Glyph table to draw from
///
/// # Errors
/// Returns [`RasterError`] without touching the buffer if the width is not
/// byte-aligned, the slice is too small, or the text extent does not fit.
pub fn draw_string_packed(
    buf: &mut [u8],
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    text: &str,
    font: &GlyphFont<'_>,
) -> Result<(), RasterError> {
    if width % 8 != 0 {
        return Err(RasterError::UnalignedWidth { width });
    }
    let stride = (width / 8) as usize;
    check_buffer_len(buf, width, height, stride * height as usize)?;
    check_extent(
        x,
        y,
        text.len() as u32,
        font.height(),
        stride as u32,
        height,
        width,
    )?;

    for (i, c) in text.bytes().enumerate() {
        let Some(rows) = font.resolve(c) else {
            continue;
        };
        let column = x as usize + i;
        for j in 0..font.height() as usize {
            buf[(y as usize + j) * stride + column] |= rows[j * font.row_stride()];
        }
    }
    Ok(())
}
