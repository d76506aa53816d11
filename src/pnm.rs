//! Uncompressed PNM snapshot writers.
//!
//! The stamped frame normally goes straight to an external encoder, which
//! is outside this crate. For the CLI (and for eyeballing test output) we
//! still need to materialize a buffer on disk, so these writers emit the
//! raw-header PNM containers: binary PGM (P5) for Gray8 buffers and binary
//! PBM (P4) for packed-monochrome buffers. Header plus the bytes as-is, no
//! compression.

use std::io::{self, Write};

/// Write an 8-bit grayscale buffer as a binary PGM (P5) image.
///
/// `buf` must hold exactly `width * height` bytes.
pub fn write_pgm<W: Write>(out: &mut W, width: u32, height: u32, buf: &[u8]) -> io::Result<()> {
    let expected = width as usize * height as usize;
    if buf.len() != expected {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "gray8 buffer is {} bytes, {}x{} needs {}",
                buf.len(),
                width,
                height,
                expected
            ),
        ));
    }
    write!(out, "P5\n{} {}\n255\n", width, height)?;
    out.write_all(buf)
}

/// Write a packed 1-bpp buffer as a binary PBM (P4) image.
///
/// `width` must be a multiple of 8 and `buf` must hold exactly
/// `width / 8 * height` bytes. Set bits render black, which is how PBM
/// defines ink.
pub fn write_pbm<W: Write>(out: &mut W, width: u32, height: u32, buf: &[u8]) -> io::Result<()> {
    if width % 8 != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("packed width must be a multiple of 8, got {}", width),
        ));
    }
    let expected = (width / 8) as usize * height as usize;
    if buf.len() != expected {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "packed buffer is {} bytes, {}x{} needs {}",
                buf.len(),
                width,
                height,
                expected
            ),
        ));
    }
    write!(out, "P4\n{} {}\n", width, height)?;
    out.write_all(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pgm_header_and_payload() {
        let buf = [0u8, 128, 255, 64];
        let mut out = Vec::new();
        write_pgm(&mut out, 2, 2, &buf).unwrap();
        assert!(out.starts_with(b"P5\n2 2\n255\n"));
        assert_eq!(&out[out.len() - 4..], &buf);
    }

    #[test]
    fn test_pgm_rejects_wrong_length() {
        let buf = [0u8; 3];
        let mut out = Vec::new();
        let err = write_pgm(&mut out, 2, 2, &buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(out.is_empty());
    }

    #[test]
    fn test_pbm_header_and_payload() {
        let buf = [0b1010_1010, 0b0101_0101];
        let mut out = Vec::new();
        write_pbm(&mut out, 8, 2, &buf).unwrap();
        assert!(out.starts_with(b"P4\n8 2\n"));
        assert_eq!(&out[out.len() - 2..], &buf);
    }

    #[test]
    fn test_pbm_rejects_unaligned_width() {
        let buf = [0u8; 2];
        let mut out = Vec::new();
        let err = write_pbm(&mut out, 12, 1, &buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_pbm_rejects_wrong_length() {
        let buf = [0u8; 3];
        let mut out = Vec::new();
        let err = write_pbm(&mut out, 8, 2, &buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
