//! Decoding of captured packets given as hex text.

use mu_protocol::{DecodedPacket, PacketCodec};

use crate::error::{InspectorError, Result};

/// Parses hex digits into bytes.
///
/// Whitespace, `:`, `-` and `,` separate bytes freely and a `0x` prefix is
/// accepted at the start of each group, so both `C1 05 F1 01 01` and
/// `0xC105F10101` work.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let mut digits = String::with_capacity(text.len());
    // Character position in `text` of every byte of `digits`.
    let mut positions = Vec::with_capacity(text.len());
    let mut group_start = true;
    let mut chars = text.chars().enumerate().peekable();
    while let Some((position, ch)) = chars.next() {
        if ch.is_whitespace() || matches!(ch, ':' | '-' | ',') {
            group_start = true;
            continue;
        }
        if group_start && ch == '0' && matches!(chars.peek(), Some((_, 'x' | 'X'))) {
            chars.next();
            group_start = false;
            continue;
        }
        group_start = false;
        digits.push(ch);
        positions.extend(std::iter::repeat(position).take(ch.len_utf8()));
    }

    let bytes = hex::decode(&digits).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { index, .. } => InspectorError::InvalidHex {
            position: positions.get(index).copied().unwrap_or(index),
            reason: "not a hex digit",
        },
        _ => InspectorError::InvalidHex {
            position: text.chars().count(),
            reason: "odd number of hex digits",
        },
    })?;
    if bytes.is_empty() {
        return Err(InspectorError::InvalidHex {
            position: 0,
            reason: "no bytes given",
        });
    }
    Ok(bytes)
}

pub fn decode_hex(codec: &PacketCodec, text: &str) -> Result<DecodedPacket> {
    let bytes = parse_hex(text)?;
    log::debug!(
        "decoding {} bytes as {} for client {}",
        bytes.len(),
        codec.direction(),
        codec.version()
    );
    Ok(codec.decode(&bytes)?)
}

pub fn render_json(packet: &DecodedPacket, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(packet)?
    } else {
        serde_json::to_string(packet)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mu_protocol::{ClientVersion, CodecLimits, Direction, PacketError};

    #[test]
    fn test_parse_hex_separators() {
        assert_eq!(parse_hex("C1 05 F1 01 01").unwrap(), [0xC1, 0x05, 0xF1, 0x01, 0x01]);
        assert_eq!(parse_hex("0xC105f10101").unwrap(), [0xC1, 0x05, 0xF1, 0x01, 0x01]);
        assert_eq!(parse_hex("c1:03-0d,00").unwrap(), [0xC1, 0x03, 0x0D, 0x00]);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(matches!(
            parse_hex("C1 0G"),
            Err(InspectorError::InvalidHex { position: 4, .. })
        ));
        assert!(matches!(
            parse_hex("C1 0"),
            Err(InspectorError::InvalidHex { reason: "odd number of hex digits", .. })
        ));
        assert!(parse_hex("   ").is_err());
    }

    #[test]
    fn test_parse_hex_prefix_only_at_group_start() {
        assert!(matches!(
            parse_hex("A0x1"),
            Err(InspectorError::InvalidHex { position: 2, reason: "not a hex digit" })
        ));
        assert_eq!(parse_hex("A0 0x01").unwrap(), [0xA0, 0x01]);
        assert!(matches!(
            parse_hex("C1 é"),
            Err(InspectorError::InvalidHex { position: 3, .. })
        ));
    }

    #[test]
    fn test_decode_login_response() {
        let codec = PacketCodec::default();
        let packet = decode_hex(&codec, "C1 05 F1 01 01").unwrap();
        assert_eq!(packet.descriptor.name, "LoginResponse");

        let json: serde_json::Value =
            serde_json::from_str(&render_json(&packet, false).unwrap()).unwrap();
        assert_eq!(json["packet"], "LoginResponse");
        assert!(json["record"].is_object());
    }

    #[test]
    fn test_decode_uses_codec_version() {
        let old = PacketCodec::new(
            Direction::ServerToClient,
            ClientVersion::V075,
            CodecLimits::default(),
        );
        let bytes = "C1 08 10 00 01 20 30 00";
        assert_eq!(decode_hex(&old, bytes).unwrap().descriptor.name, "ObjectWalked075");
        assert!(matches!(
            decode_hex(&PacketCodec::default(), bytes),
            Err(InspectorError::Protocol(PacketError::UnknownPacket { code: 0x10, .. }))
        ));
    }
}
