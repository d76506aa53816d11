//! Byte-per-pixel draw path.

use super::{blit_glyph_gray8, check_buffer_len, check_extent, RasterError};
use crate::font::GlyphFont;

/// Draw `text` into an 8-bit grayscale buffer.
///
/// One byte per pixel, row stride `width` bytes. `x` and `y` are pixel
/// coordinates; each character advances by the font's glyph width, so
/// fixed-pitch layouts wider than 8 pixels work here. `color` is written
/// only where a glyph bit is set; zero-bit pixels keep whatever the buffer
/// already holds (transparent background), which is what lets halo passes
/// layer without occluding each other.
///
/// Characters outside the font's range follow the font's missing-glyph
/// policy; a skipped character still advances the pen.
///
/// # Errors
/// Returns [`RasterError`] without touching the buffer if the slice is too
/// small or the text extent does not fit.
#[allow(clippy::too_many_arguments)]
pub fn draw_string_gray8(
    buf: &mut [u8],
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    text: &str,
    color: u8,
    font: &GlyphFont<'_>,
) -> Result<(), RasterError> {
    check_buffer_len(buf, width, height, width as usize * height as usize)?;
    let extent_w = (text.len() as u32).saturating_mul(font.width());
    check_extent(x, y, extent_w, font.height(), width, height, width)?;

    for (i, c) in text.bytes().enumerate() {
        let Some(rows) = font.resolve(c) else {
            continue;
        };
        let origin_x = x + i as u32 * font.width();
        blit_glyph_gray8(buf, width, origin_x, y, rows, font, color);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One 8x1 glyph for '!': a single leftmost pixel.
    fn dot_font(data: &[u8]) -> GlyphFont<'_> {
        GlyphFont::new(8, 1, b'!', 1, data).unwrap()
    }

    #[test]
    fn test_single_set_bit_writes_one_pixel() {
        let data = [0b1000_0000];
        let font = dot_font(&data);
        let mut buf = [0u8; 8];
        draw_string_gray8(&mut buf, 8, 1, 0, 0, "!", 255, &font).unwrap();
        assert_eq!(buf[0], 255);
        assert_eq!(&buf[1..], &[0u8; 7]);
    }

    #[test]
    fn test_zero_bits_preserve_background() {
        let data = [0b1010_0000];
        let font = dot_font(&data);
        // Sentinel-filled buffer: only the two set bits may change.
        let mut buf = [0x77u8; 8];
        draw_string_gray8(&mut buf, 8, 1, 0, 0, "!", 1, &font).unwrap();
        assert_eq!(buf, [1, 0x77, 1, 0x77, 0x77, 0x77, 0x77, 0x77]);
    }

    #[test]
    fn test_advance_is_glyph_width_pixels() {
        let data = [0xFF, 0x00, 0xFF, 0x00]; // 'A' = solid row, 'B' = blank
        let font = GlyphFont::new(8, 2, b'A', 2, &data).unwrap();
        let mut buf = [0u8; 32]; // 16 wide, 2 tall
        draw_string_gray8(&mut buf, 16, 2, 0, 0, "AA", 9, &font).unwrap();
        // Both glyph cells on row 0 are solid.
        assert_eq!(&buf[0..16], &[9u8; 16]);
        assert_eq!(&buf[16..32], &[0u8; 16]);
    }

    #[test]
    fn test_msb_is_leftmost_pixel() {
        let data = [0b0000_0001];
        let font = dot_font(&data);
        let mut buf = [0u8; 8];
        draw_string_gray8(&mut buf, 8, 1, 0, 0, "!", 255, &font).unwrap();
        assert_eq!(buf[7], 255);
        assert_eq!(&buf[..7], &[0u8; 7]);
    }

    #[test]
    fn test_draw_at_offset() {
        let data = [0b1000_0000];
        let font = dot_font(&data);
        let mut buf = [0u8; 4 * 16];
        draw_string_gray8(&mut buf, 16, 4, 3, 2, "!", 255, &font).unwrap();
        assert_eq!(buf[2 * 16 + 3], 255);
        assert_eq!(buf.iter().filter(|&&p| p != 0).count(), 1);
    }

    #[test]
    fn test_rejects_horizontal_overrun_without_writing() {
        let data = [0xFF];
        let font = dot_font(&data);
        let mut buf = [0u8; 8];
        let err = draw_string_gray8(&mut buf, 8, 1, 1, 0, "!", 255, &font);
        assert!(matches!(err, Err(RasterError::OutOfBounds { .. })));
        assert_eq!(buf, [0u8; 8]);
    }

    #[test]
    fn test_rejects_short_buffer() {
        let data = [0xFF];
        let font = dot_font(&data);
        let mut buf = [0u8; 4];
        assert!(matches!(
            draw_string_gray8(&mut buf, 8, 1, 0, 0, "!", 255, &font),
            Err(RasterError::BufferTooSmall { expected: 8, .. })
        ));
    }

    #[test]
    fn test_out_of_range_character_leaves_neighbors_intact() {
        let data = [0xFF, 0x0F];
        let font = GlyphFont::new(8, 1, b'A', 2, &data).unwrap();
        let mut buf = [0u8; 24];
        draw_string_gray8(&mut buf, 24, 1, 0, 0, "AzB", 5, &font).unwrap();
        assert_eq!(&buf[0..8], &[5u8; 8]); // 'A'
        assert_eq!(&buf[8..16], &[0u8; 8]); // skipped cell stays blank
        assert_eq!(&buf[16..20], &[0u8; 4]); // 'B' high nibble clear
        assert_eq!(&buf[20..24], &[5u8; 4]); // 'B' low nibble set
    }

    #[test]
    fn test_fallback_glyph_substitution() {
        let data = [0xFF, 0x0F];
        let font = GlyphFont::new(8, 1, b'A', 2, &data)
            .unwrap()
            .with_fallback(b'B')
            .unwrap();
        let mut buf = [0u8; 8];
        draw_string_gray8(&mut buf, 8, 1, 0, 0, "z", 5, &font).unwrap();
        assert_eq!(&buf[0..4], &[0u8; 4]);
        assert_eq!(&buf[4..8], &[5u8; 4]);
    }
}
