use serde::{Deserialize, Serialize};

use crate::codec::{CodecLimits, PacketCodec};
use crate::descriptor::Direction;
use crate::version::ClientVersion;

/// Settings a session needs to build its [`PacketCodec`].
///
/// Every key is optional when deserialized; missing keys take the values of
/// [`ProtocolConfig::default`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolConfig {
    pub client_version: ClientVersion,
    pub direction: Direction,
    pub limits: CodecLimits,
}

impl ProtocolConfig {
    #[must_use]
    pub const fn new(client_version: ClientVersion, direction: Direction) -> Self {
        Self {
            client_version,
            direction,
            limits: CodecLimits {
                max_packet_size: u16::MAX as usize,
                max_group_elements: 1024,
            },
        }
    }

    #[must_use]
    pub const fn with_limits(mut self, limits: CodecLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub const fn codec(&self) -> PacketCodec {
        PacketCodec::new(self.direction, self.client_version, self.limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_current_server_messages() {
        let config = ProtocolConfig::default();
        assert_eq!(config.client_version, ClientVersion::Season6);
        assert_eq!(config.direction, Direction::ServerToClient);
        assert_eq!(config.limits, CodecLimits::default());
    }

    #[test]
    fn new_matches_default_limits() {
        let config = ProtocolConfig::new(ClientVersion::V075, Direction::ClientToServer);
        assert_eq!(config.limits, CodecLimits::default());
    }

    #[test]
    fn codec_carries_settings() {
        let limits = CodecLimits {
            max_packet_size: 512,
            max_group_elements: 8,
        };
        let codec = ProtocolConfig::new(ClientVersion::V097, Direction::ClientToServer)
            .with_limits(limits)
            .codec();
        assert_eq!(codec.version(), ClientVersion::V097);
        assert_eq!(codec.direction(), Direction::ClientToServer);
        assert_eq!(codec.limits(), limits);
    }
}
