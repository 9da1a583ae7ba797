//! Field descriptors and the values they read and write.

use core::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::bits::{self, Endian};
use crate::error::{PacketError, Result};

/// How a field's bytes map to a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Encoding {
    /// A whole unsigned byte.
    Byte,
    /// `width` bits starting `shift` bits above the least significant bit.
    Bits { shift: u8, width: u8 },
    /// A single bit at `index`, read as a boolean.
    Flag { index: u8 },
    U16(Endian),
    U32(Endian),
    U64(Endian),
    /// A whole byte read as two's complement.
    I8,
    I16(Endian),
    I32(Endian),
    I64(Endian),
    /// Fixed window of single-byte characters.
    Str(usize),
    /// Characters up to the end of the packet, NUL terminated.
    TrailingStr,
    /// Fixed number of raw bytes.
    Bin(usize),
    /// Raw bytes up to the end of the packet.
    TrailingBin,
}

impl Encoding {
    /// Bytes the field occupies, or `None` for trailing data.
    #[must_use]
    pub const fn byte_len(self) -> Option<usize> {
        match self {
            Self::Byte | Self::I8 | Self::Bits { .. } | Self::Flag { .. } => Some(1),
            Self::U16(_) | Self::I16(_) => Some(2),
            Self::U32(_) | Self::I32(_) => Some(4),
            Self::U64(_) | Self::I64(_) => Some(8),
            Self::Str(len) | Self::Bin(len) => Some(len),
            Self::TrailingStr | Self::TrailingBin => None,
        }
    }

    /// Bits the value occupies inside its bytes.
    #[must_use]
    pub const fn bit_width(self) -> u32 {
        match self {
            Self::Bits { width, .. } => width as u32,
            Self::Flag { .. } => 1,
            Self::Byte | Self::I8 => 8,
            Self::U16(_) | Self::I16(_) => 16,
            Self::U32(_) | Self::I32(_) => 32,
            Self::U64(_) | Self::I64(_) => 64,
            Self::Str(len) | Self::Bin(len) => (len * 8) as u32,
            Self::TrailingStr | Self::TrailingBin => 0,
        }
    }

    /// Mask of the bits this field owns within its first byte.
    #[must_use]
    pub const fn byte_mask(self) -> u8 {
        match self {
            Self::Bits { shift, width } => bits::low_mask(width) << shift,
            Self::Flag { index } => 1 << index,
            _ => 0xFF,
        }
    }

    #[must_use]
    pub const fn is_trailing(self) -> bool {
        matches!(self, Self::TrailingStr | Self::TrailingBin)
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Byte
                | Self::Bits { .. }
                | Self::U16(_)
                | Self::U32(_)
                | Self::U64(_)
                | Self::I8
                | Self::I16(_)
                | Self::I32(_)
                | Self::I64(_)
        )
    }

    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16(_) | Self::I32(_) | Self::I64(_))
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Byte => f.write_str("u8"),
            Self::Bits { shift, width } => write!(f, "bits {shift}..{}", shift + width),
            Self::Flag { index } => write!(f, "bit {index}"),
            Self::U16(e) => write!(f, "u16 {}", e.suffix()),
            Self::U32(e) => write!(f, "u32 {}", e.suffix()),
            Self::U64(e) => write!(f, "u64 {}", e.suffix()),
            Self::I8 => f.write_str("i8"),
            Self::I16(e) => write!(f, "i16 {}", e.suffix()),
            Self::I32(e) => write!(f, "i32 {}", e.suffix()),
            Self::I64(e) => write!(f, "i64 {}", e.suffix()),
            Self::Str(len) => write!(f, "string[{len}]"),
            Self::TrailingStr => f.write_str("string[..]"),
            Self::Bin(len) => write!(f, "bytes[{len}]"),
            Self::TrailingBin => f.write_str("bytes[..]"),
        }
    }
}

/// Label table of a wire enumeration.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct EnumDef {
    pub name: &'static str,
    pub variants: &'static [(u64, &'static str)],
}

impl EnumDef {
    #[must_use]
    pub fn label(&self, raw: u64) -> Option<&'static str> {
        self.variants
            .iter()
            .find(|(value, _)| *value == raw)
            .map(|(_, label)| *label)
    }

    #[must_use]
    pub fn code_of(&self, label: &str) -> Option<u64> {
        self.variants
            .iter()
            .find(|(_, name)| *name == label)
            .map(|(value, _)| *value)
    }
}

/// Rust enum generated for a wire enumeration by [`wire_enum!`](crate::wire_enum).
pub trait WireEnum: Copy + Sized {
    fn definition() -> &'static EnumDef;
    fn from_raw(raw: u64) -> Option<Self>;
    fn raw(self) -> u64;
}

/// Declares a wire enumeration: a plain Rust enum, its static label table and
/// the conversions the codec needs.
///
/// ```
/// mu_protocol::wire_enum! {
///     /// Example.
///     pub enum Shape / SHAPE {
///         Round = 0,
///         Square = 1,
///     }
/// }
/// assert_eq!(SHAPE.label(1), Some("Square"));
/// ```
#[macro_export]
macro_rules! wire_enum {
    ($(
        $(#[$meta:meta])*
        $vis:vis enum $name:ident / $def:ident {
            $($variant:ident = $value:literal),+ $(,)?
        }
    )+) => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        $vis static $def: $crate::field::EnumDef = $crate::field::EnumDef {
            name: stringify!($name),
            variants: &[$(($value, stringify!($variant))),+],
        };

        impl $crate::field::WireEnum for $name {
            fn definition() -> &'static $crate::field::EnumDef {
                &$def
            }

            fn from_raw(raw: u64) -> Option<Self> {
                match raw {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn raw(self) -> u64 {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl From<$name> for $crate::field::FieldValue {
            fn from(value: $name) -> Self {
                $crate::field::FieldValue::Enum($crate::field::EnumValue::new(
                    $crate::field::WireEnum::raw(value),
                    &$def,
                ))
            }
        }
    )+};
}

/// Raw integer of an enum field plus its label table. Unknown values are kept
/// as they are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnumValue {
    pub raw: u64,
    pub def: &'static EnumDef,
}

impl EnumValue {
    #[must_use]
    pub const fn new(raw: u64, def: &'static EnumDef) -> Self {
        Self { raw, def }
    }

    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        self.def.label(self.raw)
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        self.label().is_some()
    }

    pub fn try_into_known_variant<E: WireEnum>(self) -> Result<E> {
        E::from_raw(self.raw).ok_or(PacketError::UnknownVariant {
            enumeration: E::definition().name,
            raw: self.raw,
        })
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{label}({})", self.raw),
            None => write!(f, "{}", self.raw),
        }
    }
}

impl Serialize for EnumValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("EnumValue", 2)?;
        state.serialize_field("raw", &self.raw)?;
        state.serialize_field("label", &self.label())?;
        state.end()
    }
}

/// A decoded field value, or a value to encode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Unsigned(u64),
    Signed(i64),
    Bool(bool),
    Enum(EnumValue),
    Text(String),
    Binary(Vec<u8>),
}

impl FieldValue {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unsigned(_) => "unsigned",
            Self::Signed(_) => "signed",
            Self::Bool(_) => "bool",
            Self::Enum(_) => "enum",
            Self::Text(_) => "text",
            Self::Binary(_) => "binary",
        }
    }

    /// Integer view of the value. Signed values are reinterpreted as two's
    /// complement, booleans as 0 or 1.
    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::Unsigned(value) => Some(value),
            Self::Signed(value) => Some(value as u64),
            Self::Bool(value) => Some(value as u64),
            Self::Enum(value) => Some(value.raw),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Signed(value) => Some(value),
            Self::Unsigned(value) => Some(value as i64),
            Self::Bool(value) => Some(value as i64),
            Self::Enum(value) => Some(value.raw as i64),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(value) => Some(value),
            Self::Unsigned(value) => Some(value != 0),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_enum(&self) -> Option<EnumValue> {
        match *self {
            Self::Enum(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Signed(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Enum(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Binary(bytes) => {
                for byte in bytes {
                    write!(f, "{byte:02X}")?;
                }
                Ok(())
            }
        }
    }
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {$(
        impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                Self::Unsigned(u64::from(value))
            }
        }
    )*};
}

macro_rules! from_signed {
    ($($ty:ty),*) => {$(
        impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                Self::Signed(i64::from(value))
            }
        }
    )*};
}

from_unsigned!(u8, u16, u32, u64);
from_signed!(i8, i16, i32, i64);

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Binary(value)
    }
}

impl From<&[u8]> for FieldValue {
    fn from(value: &[u8]) -> Self {
        Self::Binary(value.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for FieldValue {
    fn from(value: [u8; N]) -> Self {
        Self::Binary(value.to_vec())
    }
}

impl From<EnumValue> for FieldValue {
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}

/// One named field of a message or group element.
///
/// `offset` is absolute for message fields and relative to the element start
/// for group fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub encoding: Encoding,
    #[serde(skip)]
    pub labels: Option<&'static EnumDef>,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(name: &'static str, offset: usize, encoding: Encoding) -> Self {
        Self {
            name,
            offset,
            encoding,
            labels: None,
        }
    }

    #[must_use]
    pub const fn byte(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::Byte)
    }

    #[must_use]
    pub const fn bits(name: &'static str, offset: usize, shift: u8, width: u8) -> Self {
        Self::new(name, offset, Encoding::Bits { shift, width })
    }

    #[must_use]
    pub const fn flag(name: &'static str, offset: usize, index: u8) -> Self {
        Self::new(name, offset, Encoding::Flag { index })
    }

    #[must_use]
    pub const fn u16_be(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::U16(Endian::Big))
    }

    #[must_use]
    pub const fn u16_le(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::U16(Endian::Little))
    }

    #[must_use]
    pub const fn u32_be(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::U32(Endian::Big))
    }

    #[must_use]
    pub const fn u32_le(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::U32(Endian::Little))
    }

    #[must_use]
    pub const fn u64_be(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::U64(Endian::Big))
    }

    #[must_use]
    pub const fn u64_le(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::U64(Endian::Little))
    }

    #[must_use]
    pub const fn i8(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::I8)
    }

    #[must_use]
    pub const fn i16_be(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::I16(Endian::Big))
    }

    #[must_use]
    pub const fn i16_le(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::I16(Endian::Little))
    }

    #[must_use]
    pub const fn i32_be(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::I32(Endian::Big))
    }

    #[must_use]
    pub const fn i32_le(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::I32(Endian::Little))
    }

    #[must_use]
    pub const fn i64_be(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::I64(Endian::Big))
    }

    #[must_use]
    pub const fn i64_le(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::I64(Endian::Little))
    }

    #[must_use]
    pub const fn string(name: &'static str, offset: usize, len: usize) -> Self {
        Self::new(name, offset, Encoding::Str(len))
    }

    #[must_use]
    pub const fn trailing_string(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::TrailingStr)
    }

    #[must_use]
    pub const fn binary(name: &'static str, offset: usize, len: usize) -> Self {
        Self::new(name, offset, Encoding::Bin(len))
    }

    #[must_use]
    pub const fn trailing_binary(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, Encoding::TrailingBin)
    }

    /// Attaches an enumeration label table.
    #[must_use]
    pub const fn labeled(mut self, def: &'static EnumDef) -> Self {
        self.labels = Some(def);
        self
    }

    /// First byte past the field, `None` for trailing data.
    #[must_use]
    pub const fn end(&self) -> Option<usize> {
        match self.encoding.byte_len() {
            Some(len) => Some(self.offset + len),
            None => None,
        }
    }

    /// Bytes needed to encode `value` into this field.
    pub fn encoded_len(&self, value: Option<&FieldValue>) -> Result<usize> {
        match (self.encoding, value) {
            (Encoding::TrailingStr, Some(FieldValue::Text(text))) => Ok(text.chars().count() + 1),
            (Encoding::TrailingBin, Some(FieldValue::Binary(bytes))) => Ok(bytes.len()),
            (Encoding::TrailingStr | Encoding::TrailingBin, None) => Ok(0),
            (Encoding::TrailingStr | Encoding::TrailingBin, Some(other)) => {
                Err(self.mismatch(other))
            }
            (encoding, _) => Ok(encoding.byte_len().unwrap_or(0)),
        }
    }

    fn mismatch(&self, value: &FieldValue) -> PacketError {
        let expected = match self.encoding {
            Encoding::Flag { .. } => "bool",
            Encoding::Str(_) | Encoding::TrailingStr => "text",
            Encoding::Bin(_) | Encoding::TrailingBin => "binary",
            encoding if encoding.is_signed() => "signed",
            _ if self.labels.is_some() => "enum",
            _ => "unsigned",
        };
        PacketError::TypeMismatch {
            field: self.name,
            expected,
            actual: value.kind(),
        }
    }

    /// Reads the field relative to `base`.
    pub fn read(&self, buf: &[u8], base: usize) -> Result<FieldValue> {
        let at = base + self.offset;
        let value = match self.encoding {
            Encoding::Byte => FieldValue::Unsigned(u64::from(bits::read_u8(buf, at)?)),
            Encoding::Bits { shift, width } => FieldValue::Unsigned(u64::from(
                bits::get_bit_run(bits::read_u8(buf, at)?, width, shift),
            )),
            Encoding::Flag { index } => FieldValue::Bool(bits::get_bit(bits::read_u8(buf, at)?, index)),
            Encoding::U16(e) => FieldValue::Unsigned(u64::from(bits::read_u16(buf, at, e)?)),
            Encoding::U32(e) => FieldValue::Unsigned(u64::from(bits::read_u32(buf, at, e)?)),
            Encoding::U64(e) => FieldValue::Unsigned(bits::read_u64(buf, at, e)?),
            Encoding::I8 => FieldValue::Signed(i64::from(bits::read_i8(buf, at)?)),
            Encoding::I16(e) => FieldValue::Signed(i64::from(bits::read_i16(buf, at, e)?)),
            Encoding::I32(e) => FieldValue::Signed(i64::from(bits::read_i32(buf, at, e)?)),
            Encoding::I64(e) => FieldValue::Signed(bits::read_i64(buf, at, e)?),
            Encoding::Str(len) => FieldValue::Text(bits::read_fixed_string(buf, at, at + len)?),
            Encoding::TrailingStr => FieldValue::Text(bits::read_trailing_string(buf, at)?),
            Encoding::Bin(len) => FieldValue::Binary(bits::window(buf, at, len)?.to_vec()),
            Encoding::TrailingBin => {
                FieldValue::Binary(bits::window(buf, at, buf.len().saturating_sub(at))?.to_vec())
            }
        };
        Ok(match (self.labels, value) {
            (Some(def), FieldValue::Unsigned(raw)) => FieldValue::Enum(EnumValue::new(raw, def)),
            (_, value) => value,
        })
    }

    /// Reads an integer field; enum fields yield their raw value.
    pub fn read_uint(&self, buf: &[u8], base: usize) -> Result<u64> {
        let value = self.read(buf, base)?;
        value.as_u64().ok_or_else(|| PacketError::TypeMismatch {
            field: self.name,
            expected: "unsigned",
            actual: value.kind(),
        })
    }

    /// Writes `value` relative to `base`.
    ///
    /// Integer values are truncated to the field width. Bit and flag fields
    /// rewrite only their own bits of the shared byte.
    pub fn write(&self, buf: &mut [u8], base: usize, value: &FieldValue) -> Result<()> {
        let at = base + self.offset;
        match self.encoding {
            Encoding::Flag { index } => {
                let flag = value.as_bool().ok_or_else(|| self.mismatch(value))?;
                let byte = bits::read_u8(buf, at)?;
                bits::write_u8(buf, at, bits::set_bit(byte, flag, index))
            }
            Encoding::Str(len) => {
                let text = value.as_str().ok_or_else(|| self.mismatch(value))?;
                let chars = text.chars().count();
                if chars > len {
                    return Err(PacketError::StringTooLong {
                        field: self.name,
                        max: len,
                        actual: chars,
                    });
                }
                let bytes = bits::encode_chars(text, self.name)?;
                let window = bits::window_mut(buf, at, len)?;
                window.fill(0);
                window[..bytes.len()].copy_from_slice(&bytes);
                Ok(())
            }
            Encoding::TrailingStr => {
                let text = value.as_str().ok_or_else(|| self.mismatch(value))?;
                let window = bits::window_mut(buf, at, buf.len().saturating_sub(at))?;
                let available = window.len();
                let chars = text.chars().count();
                if chars > available {
                    return Err(PacketError::StringTooLong {
                        field: self.name,
                        max: available,
                        actual: chars,
                    });
                }
                let bytes = bits::encode_chars(text, self.name)?;
                window.fill(0);
                window[..bytes.len()].copy_from_slice(&bytes);
                Ok(())
            }
            Encoding::Bin(len) => {
                let bytes = value.as_bytes().ok_or_else(|| self.mismatch(value))?;
                if bytes.len() != len {
                    return Err(PacketError::InvalidFixedBlobLength {
                        field: self.name,
                        expected: len,
                        actual: bytes.len(),
                    });
                }
                bits::window_mut(buf, at, len)?.copy_from_slice(bytes);
                Ok(())
            }
            Encoding::TrailingBin => {
                let bytes = value.as_bytes().ok_or_else(|| self.mismatch(value))?;
                bits::window_mut(buf, at, bytes.len())?.copy_from_slice(bytes);
                Ok(())
            }
            encoding => {
                let raw = if encoding.is_signed() {
                    value.as_i64().map(|v| v as u64)
                } else {
                    value.as_u64()
                }
                .ok_or_else(|| self.mismatch(value))?;
                self.write_uint(buf, base, raw)
            }
        }
    }

    /// Writes an integer into an integer field, truncating to its width.
    pub fn write_uint(&self, buf: &mut [u8], base: usize, raw: u64) -> Result<()> {
        let at = base + self.offset;
        match self.encoding {
            Encoding::Byte => bits::write_u8(buf, at, raw as u8),
            Encoding::Bits { shift, width } => {
                let byte = bits::read_u8(buf, at)?;
                bits::write_u8(buf, at, bits::set_bit_run(byte, raw as u8, width, shift))
            }
            Encoding::Flag { index } => {
                let byte = bits::read_u8(buf, at)?;
                bits::write_u8(buf, at, bits::set_bit(byte, raw != 0, index))
            }
            Encoding::U16(e) => bits::write_u16(buf, at, raw as u16, e),
            Encoding::U32(e) => bits::write_u32(buf, at, raw as u32, e),
            Encoding::U64(e) => bits::write_u64(buf, at, raw, e),
            Encoding::I8 => bits::write_i8(buf, at, raw as i8),
            Encoding::I16(e) => bits::write_i16(buf, at, raw as i16, e),
            Encoding::I32(e) => bits::write_i32(buf, at, raw as i32, e),
            Encoding::I64(e) => bits::write_i64(buf, at, raw as i64, e),
            _ => Err(PacketError::TypeMismatch {
                field: self.name,
                expected: "text or binary",
                actual: "unsigned",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::wire_enum! {
        enum Colour / COLOUR {
            Red = 0,
            Green = 1,
        }
    }

    #[test]
    fn bit_fields_share_a_byte() {
        let high = FieldSpec::bits("Rotation", 0, 4, 4);
        let low = FieldSpec::bits("HeroState", 0, 0, 4);
        let mut buf = [0u8; 1];
        high.write(&mut buf, 0, &FieldValue::from(0x7u8)).unwrap();
        low.write(&mut buf, 0, &FieldValue::from(0x3u8)).unwrap();
        assert_eq!(buf[0], 0x73);
        assert_eq!(high.read(&buf, 0).unwrap(), FieldValue::Unsigned(7));
        assert_eq!(low.read(&buf, 0).unwrap(), FieldValue::Unsigned(3));
    }

    #[test]
    fn integers_truncate_on_write() {
        let field = FieldSpec::byte("Level", 0);
        let mut buf = [0u8; 1];
        field.write(&mut buf, 0, &FieldValue::from(0x1FFu16)).unwrap();
        assert_eq!(buf[0], 0xFF);
    }

    #[test]
    fn fixed_string_clears_previous_contents() {
        let field = FieldSpec::string("Name", 1, 5);
        let mut buf = *b"#LongN#";
        field.write(&mut buf, 0, &FieldValue::from("ab")).unwrap();
        assert_eq!(&buf, b"#ab\0\0\0#");
        assert_eq!(field.read(&buf, 0).unwrap(), FieldValue::from("ab"));
    }

    #[test]
    fn unencodable_text_leaves_field_untouched() {
        let field = FieldSpec::string("Name", 0, 4);
        let mut buf = *b"Mage";
        assert_eq!(
            field.write(&mut buf, 0, &FieldValue::from("ab\u{263A}")),
            Err(PacketError::UnencodableChar {
                field: "Name",
                ch: '\u{263A}'
            })
        );
        assert_eq!(&buf, b"Mage");

        let trailing = FieldSpec::trailing_string("Message", 1);
        let mut buf = *b"#hi\0\0";
        assert!(trailing.write(&mut buf, 0, &FieldValue::from("\u{263A}")).is_err());
        assert_eq!(&buf, b"#hi\0\0");
    }

    #[test]
    fn fixed_string_longer_than_window_is_rejected() {
        let field = FieldSpec::string("Name", 0, 3);
        let mut buf = [0u8; 3];
        assert_eq!(
            field.write(&mut buf, 0, &FieldValue::from("abcd")),
            Err(PacketError::StringTooLong {
                field: "Name",
                max: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn fixed_blob_requires_exact_length() {
        let field = FieldSpec::binary("Appearance", 0, 4);
        let mut buf = [0u8; 4];
        assert_eq!(
            field.write(&mut buf, 0, &FieldValue::from(vec![1, 2, 3])),
            Err(PacketError::InvalidFixedBlobLength {
                field: "Appearance",
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn enum_fields_keep_unknown_values() {
        let field = FieldSpec::byte("Colour", 0).labeled(&COLOUR);
        let buf = [9u8];
        let value = field.read(&buf, 0).unwrap();
        let enum_value = value.as_enum().unwrap();
        assert_eq!(enum_value.raw, 9);
        assert!(!enum_value.is_known());
        assert_eq!(
            enum_value.try_into_known_variant::<Colour>(),
            Err(PacketError::UnknownVariant {
                enumeration: "Colour",
                raw: 9
            })
        );
    }

    #[test]
    fn enum_fields_resolve_known_values() {
        let field = FieldSpec::byte("Colour", 0).labeled(&COLOUR);
        let mut buf = [0u8];
        field.write(&mut buf, 0, &Colour::Green.into()).unwrap();
        let value = field.read(&buf, 0).unwrap().as_enum().unwrap();
        assert_eq!(value.label(), Some("Green"));
        assert_eq!(value.try_into_known_variant::<Colour>().unwrap(), Colour::Green);
    }

    #[test]
    fn type_mismatch_names_the_field() {
        let field = FieldSpec::u16_le("Level", 0);
        let mut buf = [0u8; 2];
        assert_eq!(
            field.write(&mut buf, 0, &FieldValue::from("x")),
            Err(PacketError::TypeMismatch {
                field: "Level",
                expected: "unsigned",
                actual: "text"
            })
        );
    }

    #[test]
    fn signed_fields_round_trip_negative_values() {
        let field = FieldSpec::i32_le("Delta", 0);
        let mut buf = [0u8; 4];
        field.write(&mut buf, 0, &FieldValue::from(-5i32)).unwrap();
        assert_eq!(field.read(&buf, 0).unwrap(), FieldValue::Signed(-5));
    }

    #[test]
    fn signed_byte_and_wide_fields_round_trip() {
        let fields = [
            (FieldSpec::i8("Tilt", 0), FieldValue::from(-128i8)),
            (FieldSpec::i16_be("DeltaX", 1), FieldValue::from(-300i16)),
            (FieldSpec::i32_be("DeltaY", 3), FieldValue::from(-70_000i32)),
            (FieldSpec::i64_le("Money", 7), FieldValue::from(-5_000_000_000i64)),
            (FieldSpec::i64_be("Bank", 15), FieldValue::from(i64::MAX)),
        ];
        let mut buf = [0u8; 23];
        for (field, value) in &fields {
            field.write(&mut buf, 0, value).unwrap();
        }
        assert_eq!(buf[0], 0x80);
        assert_eq!(&buf[1..3], &[0xFE, 0xD4]);
        for (field, value) in &fields {
            assert_eq!(&field.read(&buf, 0).unwrap(), value, "{}", field.name);
        }
        assert_eq!(Encoding::I8.byte_len(), Some(1));
        assert_eq!(Encoding::I64(Endian::Big).bit_width(), 64);
        assert_eq!(Encoding::I64(Endian::Little).to_string(), "i64 LE");
    }

    #[test]
    fn signed_fields_reject_text() {
        let field = FieldSpec::i8("Tilt", 0);
        let mut buf = [0u8; 1];
        assert_eq!(
            field.write(&mut buf, 0, &FieldValue::from("x")),
            Err(PacketError::TypeMismatch {
                field: "Tilt",
                expected: "signed",
                actual: "text"
            })
        );
    }

    #[test]
    fn enum_value_displays_label_and_raw() {
        let value = EnumValue::new(1, &COLOUR);
        assert_eq!(value.to_string(), "Green(1)");
    }
}
