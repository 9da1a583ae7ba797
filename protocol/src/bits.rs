//! Byte-level field primitives.
//!
//! Everything in this module works on a single byte or a bounds-checked run of
//! bytes. Bit runs never span more than one byte in this protocol, so the
//! sub-byte helpers take and return plain `u8` values.

use serde::Serialize;

use crate::error::{PacketError, Result};

/// Byte order of a multi-byte integer field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Endian {
    Big,
    Little,
}

impl Endian {
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Big => "BE",
            Self::Little => "LE",
        }
    }
}

/// Mask covering the low `width` bits of a byte.
#[must_use]
pub const fn low_mask(width: u8) -> u8 {
    if width >= 8 {
        0xFF
    } else {
        (1u8 << width) - 1
    }
}

/// Returns `(byte >> shift) & mask(width)`.
///
/// `shift + width` must not exceed 8; larger combinations silently lose the
/// high bits.
#[must_use]
pub const fn get_bit_run(byte: u8, width: u8, shift: u8) -> u8 {
    (byte >> shift) & low_mask(width)
}

/// Replaces the `width` bits at `shift` with the low bits of `value`, leaving
/// every other bit of `byte` untouched.
#[must_use]
pub const fn set_bit_run(byte: u8, value: u8, width: u8, shift: u8) -> u8 {
    let mask = low_mask(width);
    (byte & !(mask << shift)) | ((value & mask) << shift)
}

#[must_use]
pub const fn get_bit(byte: u8, index: u8) -> bool {
    get_bit_run(byte, 1, index) != 0
}

#[must_use]
pub const fn set_bit(byte: u8, value: bool, index: u8) -> u8 {
    set_bit_run(byte, value as u8, 1, index)
}

/// Borrows `len` bytes starting at `offset`, or reports how many were needed.
pub fn window(buf: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    let end = offset.saturating_add(len);
    buf.get(offset..end).ok_or(PacketError::BufferTooShort {
        needed: end,
        available: buf.len(),
    })
}

/// Mutable counterpart of [`window`].
pub fn window_mut(buf: &mut [u8], offset: usize, len: usize) -> Result<&mut [u8]> {
    let available = buf.len();
    let end = offset.saturating_add(len);
    buf.get_mut(offset..end)
        .ok_or(PacketError::BufferTooShort { needed: end, available })
}

pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8> {
    Ok(window(buf, offset, 1)?[0])
}

pub fn write_u8(buf: &mut [u8], offset: usize, value: u8) -> Result<()> {
    window_mut(buf, offset, 1)?[0] = value;
    Ok(())
}

macro_rules! int_accessors {
    ($($read:ident, $write:ident => $ty:ty;)*) => {
        $(
            pub fn $read(buf: &[u8], offset: usize, endian: Endian) -> Result<$ty> {
                let mut raw = [0u8; size_of::<$ty>()];
                raw.copy_from_slice(window(buf, offset, size_of::<$ty>())?);
                Ok(match endian {
                    Endian::Big => <$ty>::from_be_bytes(raw),
                    Endian::Little => <$ty>::from_le_bytes(raw),
                })
            }

            pub fn $write(buf: &mut [u8], offset: usize, value: $ty, endian: Endian) -> Result<()> {
                let raw = match endian {
                    Endian::Big => value.to_be_bytes(),
                    Endian::Little => value.to_le_bytes(),
                };
                window_mut(buf, offset, size_of::<$ty>())?.copy_from_slice(&raw);
                Ok(())
            }
        )*
    };
}

int_accessors! {
    read_u16, write_u16 => u16;
    read_u32, write_u32 => u32;
    read_u64, write_u64 => u64;
    read_i16, write_i16 => i16;
    read_i32, write_i32 => i32;
    read_i64, write_i64 => i64;
}

pub fn read_i8(buf: &[u8], offset: usize) -> Result<i8> {
    Ok(read_u8(buf, offset)? as i8)
}

pub fn write_i8(buf: &mut [u8], offset: usize, value: i8) -> Result<()> {
    write_u8(buf, offset, value as u8)
}

/// Reads `[from, to)` as single-byte character codes.
///
/// Reading stops at the first space or NUL byte; bytes after the terminator
/// are not inspected.
pub fn read_fixed_string(buf: &[u8], from: usize, to: usize) -> Result<String> {
    let bytes = window(buf, from, to.saturating_sub(from))?;
    Ok(bytes
        .iter()
        .take_while(|&&b| b != b' ' && b != 0)
        .map(|&b| char::from(b))
        .collect())
}

/// Reads from `from` to the end of the buffer, stopping at the first NUL.
///
/// Free text (chat lines, letters) legitimately contains spaces, so only NUL
/// terminates it.
pub fn read_trailing_string(buf: &[u8], from: usize) -> Result<String> {
    let bytes = window(buf, from, buf.len().saturating_sub(from))?;
    Ok(bytes
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| char::from(b))
        .collect())
}

/// Converts `text` to single-byte character codes.
pub fn encode_chars(text: &str, field: &'static str) -> Result<Vec<u8>> {
    text.chars()
        .map(|ch| u8::try_from(u32::from(ch)).map_err(|_| PacketError::UnencodableChar { field, ch }))
        .collect()
}

/// Writes the character codes of `text` starting at `from` and returns the
/// number of bytes written. Nothing is written when a character does not fit
/// in a byte.
///
/// The remainder of a fixed window is not cleared here; callers that need
/// padding clear the window first.
pub fn write_fixed_string(
    buf: &mut [u8],
    from: usize,
    text: &str,
    field: &'static str,
) -> Result<usize> {
    let bytes = encode_chars(text, field)?;
    window_mut(buf, from, bytes.len())?.copy_from_slice(&bytes);
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_run_extracts_nibbles() {
        assert_eq!(get_bit_run(0xA5, 4, 4), 0xA);
        assert_eq!(get_bit_run(0xA5, 4, 0), 0x5);
        assert_eq!(get_bit_run(0xA5, 8, 0), 0xA5);
    }

    #[test]
    fn set_bit_run_keeps_other_bits() {
        let byte = set_bit_run(0xFF, 0x0, 4, 4);
        assert_eq!(byte, 0x0F);
        assert_eq!(set_bit_run(0x0F, 0x3, 2, 6), 0xCF);
    }

    #[test]
    fn set_bit_run_masks_wide_values() {
        assert_eq!(set_bit_run(0x00, 0xFF, 3, 2), 0b0001_1100);
    }

    #[test]
    fn single_bits() {
        assert!(get_bit(0b0000_0100, 2));
        assert!(!get_bit(0b0000_0100, 3));
        assert_eq!(set_bit(0, true, 7), 0x80);
        assert_eq!(set_bit(0xFF, false, 0), 0xFE);
    }

    #[test]
    fn integers_respect_endianness() {
        let mut buf = [0u8; 8];
        write_u16(&mut buf, 0, 0x1234, Endian::Big).unwrap();
        write_u16(&mut buf, 2, 0x1234, Endian::Little).unwrap();
        assert_eq!(&buf[..4], &[0x12, 0x34, 0x34, 0x12]);
        assert_eq!(read_u16(&buf, 0, Endian::Big).unwrap(), 0x1234);
        assert_eq!(read_u16(&buf, 2, Endian::Little).unwrap(), 0x1234);

        write_i32(&mut buf, 4, -2, Endian::Little).unwrap();
        assert_eq!(&buf[4..], &[0xFE, 0xFF, 0xFF, 0xFF]);
        assert_eq!(read_i32(&buf, 4, Endian::Little).unwrap(), -2);
    }

    #[test]
    fn signed_extremes_keep_their_sign() {
        let mut buf = [0u8; 9];
        write_i8(&mut buf, 0, i8::MIN).unwrap();
        write_i64(&mut buf, 1, -3, Endian::Big).unwrap();
        assert_eq!(buf[0], 0x80);
        assert_eq!(&buf[1..], &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFD]);
        assert_eq!(read_i8(&buf, 0).unwrap(), i8::MIN);
        assert_eq!(read_i64(&buf, 1, Endian::Big).unwrap(), -3);
        assert_eq!(read_i64(&buf, 1, Endian::Little).unwrap(), -144_115_188_075_855_873);
    }

    #[test]
    fn integer_reads_are_bounds_checked() {
        let buf = [0u8; 3];
        assert_eq!(
            read_u32(&buf, 1, Endian::Big),
            Err(PacketError::BufferTooShort {
                needed: 5,
                available: 3
            })
        );
    }

    #[test]
    fn fixed_string_stops_at_space() {
        let buf = *b"xxHero Zed";
        assert_eq!(read_fixed_string(&buf, 2, 10).unwrap(), "Hero");
    }

    #[test]
    fn fixed_string_stops_at_nul_and_fills_window() {
        let buf = *b"Mage\0\0\0\0";
        assert_eq!(read_fixed_string(&buf, 0, 8).unwrap(), "Mage");
        let buf = *b"Avengers";
        assert_eq!(read_fixed_string(&buf, 0, 8).unwrap(), "Avengers");
    }

    #[test]
    fn fixed_string_write_does_not_pad() {
        let mut buf = [b'#'; 6];
        let written = write_fixed_string(&mut buf, 1, "ab", "Name").unwrap();
        assert_eq!(written, 2);
        assert_eq!(&buf, b"#ab###");
    }

    #[test]
    fn fixed_string_rejects_wide_chars() {
        let mut buf = *b"Mage";
        let err = write_fixed_string(&mut buf, 0, "a\u{263A}", "Name").unwrap_err();
        assert_eq!(&buf, b"Mage");
        assert_eq!(
            err,
            PacketError::UnencodableChar {
                field: "Name",
                ch: '\u{263A}'
            }
        );
    }

    #[test]
    fn trailing_string_keeps_spaces() {
        let buf = *b"\xC1\x00hello world\0junk";
        assert_eq!(read_trailing_string(&buf, 2).unwrap(), "hello world");
    }
}
