//! Halo compositing over the Gray8 draw path.

use super::{check_buffer_len, check_extent, draw_string_gray8, RasterError};
use crate::font::GlyphFont;

/// Draw `text` with a one-pixel contrast halo.
///
/// Renders the string five times: offset left, right, up, and down by one
/// pixel in `background`, then centered at (`x`, `y`) in `foreground`. The
/// four offset passes form a halo around every stroke; the centered pass is
/// drawn last so the foreground is never occluded. Because the Gray8 path
/// leaves zero-bit pixels untouched, the passes layer instead of erasing
/// each other.
///
/// This is what keeps a caption readable over an unpredictable frame: a
/// white timestamp over a bright sky still carries its black outline.
///
/// The full halo extent (one extra pixel on every side) is validated up
/// front, so either all five passes run or none do.
///
/// # Errors
/// Returns [`RasterError`] without touching the buffer if `x` or `y` is 0
/// or the haloed extent does not fit.
#[allow(clippy::too_many_arguments)]
pub fn draw_string_halo(
    buf: &mut [u8],
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    text: &str,
    foreground: u8,
    background: u8,
    font: &GlyphFont<'_>,
) -> Result<(), RasterError> {
    check_buffer_len(buf, width, height, width as usize * height as usize)?;
    let extent_w = (text.len() as u32).saturating_mul(font.width());
    // The offset passes reach one pixel beyond the centered extent on every
    // side; x/y of 0 would underflow the left/top passes.
    let (ox, oy) = match (x.checked_sub(1), y.checked_sub(1)) {
        (Some(ox), Some(oy)) => (ox, oy),
        _ => {
            return Err(RasterError::OutOfBounds {
                x,
                y,
                extent_w: extent_w.saturating_add(2),
                extent_h: font.height().saturating_add(2),
                width,
                height,
            })
        }
    };
    check_extent(
        ox,
        oy,
        extent_w.saturating_add(2),
        font.height().saturating_add(2),
        width,
        height,
        width,
    )?;

    draw_string_gray8(buf, width, height, x - 1, y, text, background, font)?;
    draw_string_gray8(buf, width, height, x + 1, y, text, background, font)?;
    draw_string_gray8(buf, width, height, x, y - 1, text, background, font)?;
    draw_string_gray8(buf, width, height, x, y + 1, text, background, font)?;
    draw_string_gray8(buf, width, height, x, y, text, foreground, font)
}
