//! Binary wire protocol of the MU Online game client and server.
//!
//! Every message is described by a static [`PacketDescriptor`]: a header
//! (class, code and optional sub-code), an optional fixed length, named fields
//! at absolute offsets and at most one repeated group. The descriptors of
//! both directions live in [`catalog`]; [`PacketCodec`] picks the layout a
//! negotiated [`ClientVersion`] understands.

pub mod bits;
pub mod catalog;
pub mod codec;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod field;
pub mod group;
pub mod header;
pub mod record;
pub mod version;

pub use catalog::Catalog;
pub use codec::{CodecLimits, DecodedPacket, PacketCodec, PacketView, PacketViewMut};
pub use config::ProtocolConfig;
pub use descriptor::{Direction, LayoutError, PacketDescriptor};
pub use error::{PacketError, Result};
pub use field::{EnumDef, EnumValue, FieldSpec, FieldValue, WireEnum};
pub use group::{GroupSpec, Stride};
pub use header::{HeaderClass, HeaderSpec, RawHeader};
pub use record::Record;
pub use version::{ClientVersion, VariantSet};

/// Returns the protocol crate version string.
pub fn protocol_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_matches_pkg() {
        assert_eq!(protocol_version(), env!("CARGO_PKG_VERSION"));
    }
}
