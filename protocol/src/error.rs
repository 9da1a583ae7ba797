//! Error taxonomy for packet encoding and decoding.

use crate::header::HeaderClass;
use crate::version::ClientVersion;

/// Errors produced while reading or writing packet buffers.
///
/// Every variant is a local failure for one message. The session layer decides
/// whether to drop the message or close the connection.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PacketError {
    #[error("buffer too short: needed {needed} bytes, available {available}")]
    BufferTooShort { needed: usize, available: usize },

    #[error("field {field} expects exactly {expected} bytes, got {actual}")]
    InvalidFixedBlobLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("group {group} declares {declared} elements but the buffer fits at most {max_possible}")]
    GroupCountExceedsBuffer {
        group: &'static str,
        declared: usize,
        max_possible: usize,
    },

    #[error("unknown header class byte {0:#04X}")]
    UnknownHeaderClass(u8),

    #[error("header mismatch for {packet}: expected {expected}, got {actual}")]
    HeaderMismatch {
        packet: &'static str,
        expected: String,
        actual: String,
    },

    #[error("length {length} does not fit the {class:?} length field")]
    LengthOverflow { class: HeaderClass, length: usize },

    #[error("packet {packet} has no field named {field}")]
    UnknownField { packet: &'static str, field: String },

    #[error("packet {packet} has no group named {group}")]
    UnknownGroup { packet: &'static str, group: String },

    #[error("field {field} cannot hold a value of kind {actual}, expected {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("text for {field} is {actual} characters long, window holds {max}")]
    StringTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("character {ch:?} in {field} has no single-byte encoding")]
    UnencodableChar { field: &'static str, ch: char },

    #[error("packet exceeds limit: limit={limit} actual={actual}")]
    PacketTooLarge { limit: usize, actual: usize },

    #[error("group {group} has {actual} elements, limit is {limit}")]
    TooManyElements {
        group: &'static str,
        limit: usize,
        actual: usize,
    },

    #[error("no packet registered for {class:?} code {code:#04X} sub-code {sub_code:?}")]
    UnknownPacket {
        class: HeaderClass,
        code: u8,
        sub_code: Option<u8>,
    },

    #[error("event {event} has no variant for client version {version}")]
    NoVariant {
        event: String,
        version: ClientVersion,
    },

    #[error("value {raw} is not a known {enumeration}")]
    UnknownVariant { enumeration: &'static str, raw: u64 },
}

pub type Result<T> = std::result::Result<T, PacketError>;
