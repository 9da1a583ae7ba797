//! Packet header framings.
//!
//! Every packet starts with a class byte followed by the total length (one
//! byte for C1/C3, two big-endian bytes for C2/C4), the main code and, for
//! families that multiplex several events, a sub-code.

use core::fmt;

use serde::Serialize;

use crate::bits::{self, Endian};
use crate::error::{PacketError, Result};

/// Header class byte.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum HeaderClass {
    /// Byte-sized length.
    C1 = 0xC1,
    /// Word-sized length.
    C2 = 0xC2,
    /// Byte-sized length, extended framing.
    C3 = 0xC3,
    /// Word-sized length, extended framing.
    C4 = 0xC4,
}

impl HeaderClass {
    #[must_use]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Width of the length field in bytes.
    #[must_use]
    pub const fn length_width(self) -> usize {
        match self {
            Self::C1 | Self::C3 => 1,
            Self::C2 | Self::C4 => 2,
        }
    }

    /// Offset of the main code byte.
    #[must_use]
    pub const fn data_offset(self) -> usize {
        1 + self.length_width()
    }

    /// Largest total length the length field can express.
    #[must_use]
    pub const fn max_length(self) -> usize {
        match self {
            Self::C1 | Self::C3 => u8::MAX as usize,
            Self::C2 | Self::C4 => u16::MAX as usize,
        }
    }

    #[must_use]
    pub const fn is_extended(self) -> bool {
        matches!(self, Self::C3 | Self::C4)
    }
}

impl TryFrom<u8> for HeaderClass {
    type Error = PacketError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0xC1 => Ok(Self::C1),
            0xC2 => Ok(Self::C2),
            0xC3 => Ok(Self::C3),
            0xC4 => Ok(Self::C4),
            other => Err(PacketError::UnknownHeaderClass(other)),
        }
    }
}

/// Static header shape of one message type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct HeaderSpec {
    pub class: HeaderClass,
    pub code: u8,
    pub sub_code: Option<u8>,
}

impl HeaderSpec {
    #[must_use]
    pub const fn new(class: HeaderClass, code: u8, sub_code: Option<u8>) -> Self {
        Self {
            class,
            code,
            sub_code,
        }
    }

    #[must_use]
    pub const fn c1(code: u8) -> Self {
        Self::new(HeaderClass::C1, code, None)
    }

    #[must_use]
    pub const fn c1_sub(code: u8, sub_code: u8) -> Self {
        Self::new(HeaderClass::C1, code, Some(sub_code))
    }

    #[must_use]
    pub const fn c2(code: u8) -> Self {
        Self::new(HeaderClass::C2, code, None)
    }

    #[must_use]
    pub const fn c2_sub(code: u8, sub_code: u8) -> Self {
        Self::new(HeaderClass::C2, code, Some(sub_code))
    }

    #[must_use]
    pub const fn c3(code: u8) -> Self {
        Self::new(HeaderClass::C3, code, None)
    }

    #[must_use]
    pub const fn c3_sub(code: u8, sub_code: u8) -> Self {
        Self::new(HeaderClass::C3, code, Some(sub_code))
    }

    #[must_use]
    pub const fn c4(code: u8) -> Self {
        Self::new(HeaderClass::C4, code, None)
    }

    #[must_use]
    pub const fn c4_sub(code: u8, sub_code: u8) -> Self {
        Self::new(HeaderClass::C4, code, Some(sub_code))
    }

    #[must_use]
    pub const fn data_offset(&self) -> usize {
        self.class.data_offset()
    }

    /// Total header size including the code and optional sub-code.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.data_offset() + 1 + if self.sub_code.is_some() { 1 } else { 0 }
    }

    /// Writes the class byte, code and sub-code. The length field is left
    /// untouched.
    pub fn write(&self, buf: &mut [u8]) -> Result<()> {
        bits::window_mut(buf, 0, self.size())?;
        buf[0] = self.class.byte();
        buf[self.data_offset()] = self.code;
        if let Some(sub_code) = self.sub_code {
            buf[self.data_offset() + 1] = sub_code;
        }
        Ok(())
    }

    /// Writes `length` (or the buffer size when `None`) into the length field.
    pub fn write_length(&self, buf: &mut [u8], length: Option<usize>) -> Result<()> {
        let length = length.unwrap_or(buf.len());
        if length > self.class.max_length() {
            return Err(PacketError::LengthOverflow {
                class: self.class,
                length,
            });
        }
        match self.class.length_width() {
            1 => bits::write_u8(buf, 1, length as u8),
            _ => bits::write_u16(buf, 1, length as u16, Endian::Big),
        }
    }

    /// Returns true when `header` was produced by this spec.
    #[must_use]
    pub fn matches(&self, header: &RawHeader) -> bool {
        header.class == self.class
            && header.code == self.code
            && (self.sub_code.is_none() || header.sub_code == self.sub_code)
    }
}

impl fmt::Display for HeaderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:02X}", self.class, self.code)?;
        if let Some(sub_code) = self.sub_code {
            write!(f, " {sub_code:02X}")?;
        }
        Ok(())
    }
}

/// Header fields as found at the start of a received buffer.
///
/// `sub_code` holds the byte following the main code when the buffer has one;
/// whether it really is a sub-code depends on the descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawHeader {
    pub class: HeaderClass,
    pub length: usize,
    pub code: u8,
    pub sub_code: Option<u8>,
}

impl RawHeader {
    pub fn parse(buf: &[u8]) -> Result<Self> {
        let class = HeaderClass::try_from(bits::read_u8(buf, 0)?)?;
        let length = match class.length_width() {
            1 => usize::from(bits::read_u8(buf, 1)?),
            _ => usize::from(bits::read_u16(buf, 1, Endian::Big)?),
        };
        let code = bits::read_u8(buf, class.data_offset())?;
        let sub_code = buf.get(class.data_offset() + 1).copied();
        Ok(Self {
            class,
            length,
            code,
            sub_code,
        })
    }
}

impl fmt::Display for RawHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:02X}", self.class, self.code)?;
        if let Some(sub_code) = self.sub_code {
            write!(f, " [{sub_code:02X}]")?;
        }
        write!(f, " len={}", self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_header_sizes() {
        assert_eq!(HeaderSpec::c1(0x42).size(), 3);
        assert_eq!(HeaderSpec::c1_sub(0xF3, 0x03).size(), 4);
        assert_eq!(HeaderSpec::c3(0x22).size(), 3);
    }

    #[test]
    fn long_header_sizes() {
        assert_eq!(HeaderSpec::c2(0x12).size(), 4);
        assert_eq!(HeaderSpec::c4_sub(0xF3, 0x10).size(), 5);
    }

    #[test]
    fn header_is_deterministic_over_garbage() {
        let spec = HeaderSpec::c2_sub(0x3F, 0x05);
        let mut buf = [0xAAu8; 300];
        spec.write(&mut buf).unwrap();
        spec.write_length(&mut buf, None).unwrap();
        assert_eq!(&buf[..5], &[0xC2, 0x01, 0x2C, 0x3F, 0x05]);
    }

    #[test]
    fn length_override_wins() {
        let spec = HeaderSpec::c1(0x0F);
        let mut buf = [0u8; 8];
        spec.write(&mut buf).unwrap();
        spec.write_length(&mut buf, Some(4)).unwrap();
        assert_eq!(&buf[..3], &[0xC1, 0x04, 0x0F]);
    }

    #[test]
    fn short_length_overflow_is_rejected() {
        let spec = HeaderSpec::c1(0x00);
        let mut buf = vec![0u8; 256];
        spec.write(&mut buf).unwrap();
        assert_eq!(
            spec.write_length(&mut buf, None),
            Err(PacketError::LengthOverflow {
                class: HeaderClass::C1,
                length: 256
            })
        );
    }

    #[test]
    fn header_write_needs_room() {
        let spec = HeaderSpec::c1_sub(0xF1, 0x00);
        let mut buf = [0u8; 3];
        assert!(matches!(
            spec.write(&mut buf),
            Err(PacketError::BufferTooShort { needed: 4, .. })
        ));
    }

    #[test]
    fn parse_raw_header() {
        let raw = RawHeader::parse(&[0xC2, 0x00, 0x09, 0x12, 0x01]).unwrap();
        assert_eq!(raw.class, HeaderClass::C2);
        assert_eq!(raw.length, 9);
        assert_eq!(raw.code, 0x12);
        assert_eq!(raw.sub_code, Some(0x01));
        assert!(HeaderSpec::c2(0x12).matches(&raw));
        assert!(!HeaderSpec::c2_sub(0x12, 0x02).matches(&raw));
    }

    #[test]
    fn parse_rejects_unknown_class() {
        assert_eq!(
            RawHeader::parse(&[0xC5, 0x03, 0x00]),
            Err(PacketError::UnknownHeaderClass(0xC5))
        );
    }
}
