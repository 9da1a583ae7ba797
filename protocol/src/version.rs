//! Client builds and version-variant resolution.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::descriptor::PacketDescriptor;

/// Client build a session negotiated.
///
/// Ordering follows release order, so a descriptor introduced `since` a build
/// applies to every later build until a newer variant replaces it.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ClientVersion {
    #[serde(rename = "0.75")]
    V075,
    #[serde(rename = "0.95")]
    V095,
    #[serde(rename = "0.97")]
    V097,
    #[default]
    #[serde(rename = "season6")]
    Season6,
}

impl ClientVersion {
    pub const ALL: [ClientVersion; 4] = [Self::V075, Self::V095, Self::V097, Self::Season6];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V075 => "0.75",
            Self::V095 => "0.95",
            Self::V097 => "0.97",
            Self::Season6 => "season6",
        }
    }

    /// Name suffix used by variant descriptors (`CharacterList075`).
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::V075 => "075",
            Self::V095 => "095",
            Self::V097 => "097",
            Self::Season6 => "",
        }
    }
}

impl fmt::Display for ClientVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown client version {0:?}, expected one of 0.75, 0.95, 0.97, season6")]
pub struct InvalidClientVersion(pub String);

impl FromStr for ClientVersion {
    type Err = InvalidClientVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0.75" | "075" => Ok(Self::V075),
            "0.95" | "095" => Ok(Self::V095),
            "0.97" | "097" => Ok(Self::V097),
            "season6" | "s6" | "current" => Ok(Self::Season6),
            _ => Err(InvalidClientVersion(s.to_owned())),
        }
    }
}

/// All layouts registered for one logical event, ordered by build.
#[derive(Clone, Debug)]
pub struct VariantSet {
    event: &'static str,
    variants: Vec<&'static PacketDescriptor>,
}

impl VariantSet {
    /// Collects the descriptors of `event` out of `packets`.
    pub fn collect<'a, I>(event: &'static str, packets: I) -> Self
    where
        I: IntoIterator<Item = &'a &'static PacketDescriptor>,
    {
        let mut variants: Vec<_> = packets
            .into_iter()
            .copied()
            .filter(|descriptor| descriptor.event == event)
            .collect();
        variants.sort_by_key(|descriptor| descriptor.since);
        Self { event, variants }
    }

    #[must_use]
    pub fn event(&self) -> &'static str {
        self.event
    }

    #[must_use]
    pub fn variants(&self) -> &[&'static PacketDescriptor] {
        &self.variants
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// The layout a client of `version` understands: the newest variant that
    /// is not newer than the client.
    #[must_use]
    pub fn resolve(&self, version: ClientVersion) -> Option<&'static PacketDescriptor> {
        let resolved = self
            .variants
            .iter()
            .rev()
            .find(|descriptor| descriptor.since <= version)
            .copied();
        if let Some(descriptor) = resolved {
            log::debug!(
                "resolved {} for client {} to {}",
                self.event,
                version,
                descriptor.name
            );
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_are_ordered_by_release() {
        assert!(ClientVersion::V075 < ClientVersion::V095);
        assert!(ClientVersion::V095 < ClientVersion::V097);
        assert!(ClientVersion::V097 < ClientVersion::Season6);
    }

    #[test]
    fn parse_accepts_dotted_and_suffix_forms() {
        assert_eq!("0.75".parse::<ClientVersion>().unwrap(), ClientVersion::V075);
        assert_eq!("095".parse::<ClientVersion>().unwrap(), ClientVersion::V095);
        assert_eq!(" Season6 ".parse::<ClientVersion>().unwrap(), ClientVersion::Season6);
        assert!("1.0".parse::<ClientVersion>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for version in ClientVersion::ALL {
            assert_eq!(version.to_string().parse::<ClientVersion>().unwrap(), version);
        }
    }
}
