//! Unit tests for glyph table construction and lookup.

use framestamp::font::{small_font, FontError, GlyphFont};

#[test]
fn test_builtin_table_is_well_formed() {
    let font = small_font();
    // Every printable ASCII glyph resolves and is height * stride bytes.
    for c in 0x20u8..=0x7E {
        let rows = font.glyph(c).unwrap();
        assert_eq!(rows.len(), (font.height() as usize) * font.row_stride());
    }
}

#[test]
fn test_lookup_is_offset_by_first_char() {
    // Synthetic table where each glyph's first byte encodes its index.
    let data: Vec<u8> = (0..10u8).flat_map(|i| [i, 0xFF]).collect();
    let font = GlyphFont::new(8, 2, b'0', 10, &data).unwrap();
    for digit in 0..10u8 {
        let rows = font.glyph(b'0' + digit).unwrap();
        assert_eq!(rows[0], digit);
    }
}

#[test]
fn test_range_boundaries() {
    let data = [0u8; 4];
    let font = GlyphFont::new(8, 2, b'A', 2, &data).unwrap();
    assert!(font.glyph(b'A' - 1).is_none());
    assert!(font.glyph(b'A').is_some());
    assert!(font.glyph(b'B').is_some());
    assert!(font.glyph(b'C').is_none());
    // No wraparound below first_char.
    assert!(font.glyph(0).is_none());
}

#[test]
fn test_truncated_table_is_unusable() {
    // One byte short: construction fails, so no handle can ever read past
    // the end of the data.
    let data = [0u8; 4 * 8 - 1];
    assert!(matches!(
        GlyphFont::new(8, 8, b'A', 4, &data),
        Err(FontError::DataLengthMismatch { .. })
    ));
}

#[test]
fn test_oversized_table_is_rejected_too() {
    let data = [0u8; 4 * 8 + 1];
    assert!(matches!(
        GlyphFont::new(8, 8, b'A', 4, &data),
        Err(FontError::DataLengthMismatch { .. })
    ));
}

#[test]
fn test_two_fonts_coexist() {
    // Explicit handles: drawing state never leaks between fonts.
    let data_a = [0xAA; 2];
    let data_b = [0xBB; 4];
    let font_a = GlyphFont::new(8, 2, b'A', 1, &data_a).unwrap();
    let font_b = GlyphFont::new(8, 2, b'A', 2, &data_b).unwrap();
    assert_eq!(font_a.glyph(b'A').unwrap(), &[0xAA, 0xAA]);
    assert_eq!(font_b.glyph(b'A').unwrap(), &[0xBB, 0xBB]);
    assert_eq!(font_a.glyph_count(), 1);
    assert_eq!(font_b.glyph_count(), 2);
}
