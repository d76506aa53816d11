//! Bitmap font tables for the text-overlay rasterizer.
//!
//! A [`GlyphFont`] is a validated, read-only handle over a baked glyph
//! table: fixed glyph dimensions, a first-character offset, and row-major
//! bit patterns (MSB = leftmost pixel). Fonts are passed explicitly into
//! every draw call so multiple fonts can coexist and tests can supply
//! synthetic tables.
//!
//! The built-in [`small_font`] covers printable ASCII at 8x8.

mod small_font;

/// Errors detected when constructing a [`GlyphFont`].
///
/// All of these are load-time contract failures: a handle is never handed
/// out over a malformed table.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Glyph width or height is zero.
    #[error("glyph dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    /// Backing data length does not match `glyph_count * bytes_per_glyph`.
    #[error(
        "font data is {actual} bytes, expected {expected} \
         ({glyph_count} glyphs x {bytes_per_glyph} bytes each)"
    )]
    DataLengthMismatch {
        expected: usize,
        actual: usize,
        glyph_count: usize,
        bytes_per_glyph: usize,
    },
    /// The configured fallback character is itself outside the table range.
    #[error("fallback character {fallback:#04x} is not in the table range")]
    FallbackOutOfRange { fallback: u8 },
}

/// A fixed-pitch bitmap font.
///
/// Each glyph is `glyph_height` rows of `row_stride` bytes, laid out
/// glyph-by-glyph in table order. Character `c` maps to glyph index
/// `c - first_char`; codes outside `[first_char, first_char + glyph_count)`
/// have no glyph and follow the handle's missing-glyph policy
/// (skip-and-continue by default, or a fallback glyph via
/// [`with_fallback`](GlyphFont::with_fallback)).
#[derive(Debug, Clone, Copy)]
pub struct GlyphFont<'a> {
    width: u32,
    height: u32,
    first_char: u8,
    glyph_count: u8,
    row_stride: usize,
    fallback: Option<u8>,
    data: &'a [u8],
}

impl<'a> GlyphFont<'a> {
    /// Create a font handle over a baked glyph table.
    ///
    /// The row stride is derived from the glyph width (one byte per 8
    /// pixels, MSB-left); the canonical table layout is one byte per row
    /// for glyphs up to 8 pixels wide.
    ///
    /// # Arguments
    /// * `width` - Glyph width in pixels (same for every glyph)
    /// * `height` - Glyph height in rows (same for every glyph)
    /// * `first_char` - Character code of glyph index 0
    /// * `glyph_count` - Number of glyphs in the table
    /// * `data` - Row-major glyph bytes, `glyph_count * height * stride` long
    pub fn new(
        width: u32,
        height: u32,
        first_char: u8,
        glyph_count: u8,
        data: &'a [u8],
    ) -> Result<Self, FontError> {
        if width == 0 || height == 0 {
            return Err(FontError::ZeroDimension { width, height });
        }
        let row_stride = width.div_ceil(8) as usize;
        let bytes_per_glyph = height as usize * row_stride;
        let expected = glyph_count as usize * bytes_per_glyph;
        if data.len() != expected {
            return Err(FontError::DataLengthMismatch {
                expected,
                actual: data.len(),
                glyph_count: glyph_count as usize,
                bytes_per_glyph,
            });
        }
        Ok(Self {
            width,
            height,
            first_char,
            glyph_count,
            row_stride,
            fallback: None,
            data,
        })
    }

    /// Substitute `fallback` for any character outside the table range.
    ///
    /// Without this, out-of-range characters are skipped (the pen still
    /// advances, so surrounding glyphs keep their positions).
    pub fn with_fallback(mut self, fallback: u8) -> Result<Self, FontError> {
        if self.index_of(fallback).is_none() {
            return Err(FontError::FallbackOutOfRange { fallback });
        }
        self.fallback = Some(fallback);
        Ok(self)
    }

    /// Glyph width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Glyph height in rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Character code of glyph index 0.
    pub fn first_char(&self) -> u8 {
        self.first_char
    }

    /// Number of glyphs in the table.
    pub fn glyph_count(&self) -> u8 {
        self.glyph_count
    }

    /// Bytes per stored glyph row.
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    fn index_of(&self, c: u8) -> Option<usize> {
        let index = c.checked_sub(self.first_char)? as usize;
        if index < self.glyph_count as usize {
            Some(index)
        } else {
            None
        }
    }

    /// Look up the row bytes for character `c`.
    ///
    /// Returns `None` for out-of-range codes; never reads outside the
    /// table. The returned slice is `height * row_stride` bytes.
    pub fn glyph(&self, c: u8) -> Option<&'a [u8]> {
        let index = self.index_of(c)?;
        let bytes = self.height as usize * self.row_stride;
        let start = index * bytes;
        Some(&self.data[start..start + bytes])
    }

    /// Look up `c`, applying the missing-glyph policy.
    ///
    /// Out-of-range codes resolve to the fallback glyph if one is
    /// configured, otherwise `None` (the draw loops skip the cell).
    pub fn resolve(&self, c: u8) -> Option<&'a [u8]> {
        self.glyph(c)
            .or_else(|| self.fallback.and_then(|f| self.glyph(f)))
    }
}

/// The built-in 8x8 font: printable ASCII (`' '`..=`'~'`), one byte per
/// glyph row, MSB-left.
pub fn small_font() -> GlyphFont<'static> {
    // The table is compile-time data sized by the same constants, so this
    // cannot fail.
    GlyphFont {
        width: small_font::WIDTH,
        height: small_font::HEIGHT,
        first_char: small_font::FIRST_CHAR,
        glyph_count: small_font::GLYPH_COUNT,
        row_stride: 1,
        fallback: None,
        data: &small_font::DATA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_font_metrics() {
        let font = small_font();
        assert_eq!(font.width(), 8);
        assert_eq!(font.height(), 8);
        assert_eq!(font.first_char(), b' ');
        assert_eq!(font.glyph_count(), 95);
        assert_eq!(font.row_stride(), 1);
    }

    #[test]
    fn test_small_font_covers_printable_ascii() {
        let font = small_font();
        for c in 0x20u8..=0x7E {
            assert!(font.glyph(c).is_some(), "missing glyph for {:#04x}", c);
        }
        assert!(font.glyph(0x1F).is_none());
        assert!(font.glyph(0x7F).is_none());
    }

    #[test]
    fn test_space_is_blank() {
        let font = small_font();
        assert_eq!(font.glyph(b' ').unwrap(), &[0u8; 8]);
    }

    #[test]
    fn test_glyph_slice_length() {
        let font = small_font();
        assert_eq!(font.glyph(b'A').unwrap().len(), 8);
    }

    #[test]
    fn test_rejects_wrong_data_length() {
        let data = [0u8; 15];
        let err = GlyphFont::new(8, 8, b'A', 2, &data).unwrap_err();
        match err {
            FontError::DataLengthMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let data = [0u8; 0];
        assert!(matches!(
            GlyphFont::new(0, 8, 0, 0, &data),
            Err(FontError::ZeroDimension { .. })
        ));
        assert!(matches!(
            GlyphFont::new(8, 0, 0, 0, &data),
            Err(FontError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn test_lookup_offset() {
        // Two 1x1 glyphs starting at 'A': 'A' -> 0xAA, 'B' -> 0xBB.
        let data = [0xAA, 0xBB];
        let font = GlyphFont::new(1, 1, b'A', 2, &data).unwrap();
        assert_eq!(font.glyph(b'A').unwrap(), &[0xAA]);
        assert_eq!(font.glyph(b'B').unwrap(), &[0xBB]);
        assert!(font.glyph(b'C').is_none());
        assert!(font.glyph(b'@').is_none());
    }

    #[test]
    fn test_fallback_resolution() {
        let data = [0xAA, 0xBB];
        let font = GlyphFont::new(1, 1, b'A', 2, &data)
            .unwrap()
            .with_fallback(b'B')
            .unwrap();
        assert_eq!(font.resolve(b'Z').unwrap(), &[0xBB]);
        assert_eq!(font.resolve(b'A').unwrap(), &[0xAA]);
    }

    #[test]
    fn test_fallback_must_be_in_range() {
        let data = [0xAA, 0xBB];
        let font = GlyphFont::new(1, 1, b'A', 2, &data).unwrap();
        assert!(matches!(
            font.with_fallback(b'Z'),
            Err(FontError::FallbackOutOfRange { fallback: b'Z' })
        ));
    }

    #[test]
    fn test_resolve_without_fallback_skips() {
        let font = small_font();
        assert!(font.resolve(0x01).is_none());
    }

    #[test]
    fn test_wide_glyph_row_stride() {
        // A 12-pixel-wide font stores two bytes per row.
        let data = [0u8; 2 * 5 * 2]; // 2 glyphs x 5 rows x 2 bytes
        let font = GlyphFont::new(12, 5, b'0', 2, &data).unwrap();
        assert_eq!(font.row_stride(), 2);
        assert_eq!(font.glyph(b'0').unwrap().len(), 10);
    }
}
