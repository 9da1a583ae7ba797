//! Registries of every message descriptor, one per direction.

pub mod client;
pub mod enums;
pub mod server;

use std::collections::HashSet;

use crate::descriptor::{Direction, LayoutError, PacketDescriptor};
use crate::error::{PacketError, Result};
use crate::header::RawHeader;
use crate::version::{ClientVersion, VariantSet};

/// Flat registry of the descriptors sent in one direction.
#[derive(Debug)]
pub struct Catalog {
    pub direction: Direction,
    packets: &'static [&'static PacketDescriptor],
}

/// Messages sent by the server.
pub static SERVER: Catalog = Catalog::new(Direction::ServerToClient, server::PACKETS);

/// Messages sent by the client.
pub static CLIENT: Catalog = Catalog::new(Direction::ClientToServer, client::PACKETS);

impl Catalog {
    #[must_use]
    pub const fn new(direction: Direction, packets: &'static [&'static PacketDescriptor]) -> Self {
        Self { direction, packets }
    }

    #[must_use]
    pub fn for_direction(direction: Direction) -> &'static Catalog {
        match direction {
            Direction::ServerToClient => &SERVER,
            Direction::ClientToServer => &CLIENT,
        }
    }

    #[must_use]
    pub fn packets(&self) -> &'static [&'static PacketDescriptor] {
        self.packets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.packets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&'static PacketDescriptor> {
        self.packets
            .iter()
            .copied()
            .find(|descriptor| descriptor.name == name)
    }

    /// Logical event names in registration order.
    #[must_use]
    pub fn events(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        self.packets
            .iter()
            .map(|descriptor| descriptor.event)
            .filter(|event| seen.insert(*event))
            .collect()
    }

    #[must_use]
    pub fn variants(&self, event: &str) -> VariantSet {
        let event = self
            .packets
            .iter()
            .map(|descriptor| descriptor.event)
            .find(|name| *name == event)
            .unwrap_or("");
        VariantSet::collect(event, self.packets)
    }

    /// The layout of `event` a client of `version` understands.
    #[must_use]
    pub fn resolve(&self, event: &str, version: ClientVersion) -> Option<&'static PacketDescriptor> {
        self.variants(event).resolve(version)
    }

    /// True when `descriptor` is the layout of its event for `version`.
    fn is_current(&self, descriptor: &PacketDescriptor, version: ClientVersion) -> bool {
        descriptor.since <= version
            && !self.packets.iter().any(|other| {
                other.event == descriptor.event
                    && other.since > descriptor.since
                    && other.since <= version
            })
    }

    /// Every descriptor a client of `version` sends or receives.
    #[must_use]
    pub fn for_version(&self, version: ClientVersion) -> Vec<&'static PacketDescriptor> {
        self.packets
            .iter()
            .copied()
            .filter(|descriptor| self.is_current(descriptor, version))
            .collect()
    }

    /// Finds the descriptor of the packet at the start of `buf`.
    ///
    /// Descriptors with a sub-code are tried before those without one.
    pub fn identify(&self, buf: &[u8], version: ClientVersion) -> Result<&'static PacketDescriptor> {
        let raw = RawHeader::parse(buf)?;
        let candidates: Vec<_> = self
            .packets
            .iter()
            .copied()
            .filter(|descriptor| descriptor.header.matches(&raw))
            .filter(|descriptor| self.is_current(descriptor, version))
            .collect();
        let found = candidates
            .iter()
            .find(|descriptor| descriptor.header.sub_code.is_some())
            .or_else(|| candidates.first())
            .copied();
        match found {
            Some(descriptor) => {
                log::trace!("identified {raw} as {} for client {version}", descriptor.name);
                Ok(descriptor)
            }
            None => Err(PacketError::UnknownPacket {
                class: raw.class,
                code: raw.code,
                sub_code: raw.sub_code,
            }),
        }
    }

    /// Layout problems of every descriptor plus registry-level conflicts.
    #[must_use]
    pub fn layout_errors(&self) -> Vec<LayoutError> {
        let mut errors: Vec<LayoutError> = self
            .packets
            .iter()
            .flat_map(|descriptor| descriptor.layout_errors())
            .collect();

        let mut names = HashSet::new();
        let mut variants = HashSet::new();
        for descriptor in self.packets {
            if !names.insert(descriptor.name) {
                errors.push(LayoutError::DuplicateName {
                    packet: descriptor.name,
                });
            }
            if !variants.insert((descriptor.event, descriptor.since)) {
                errors.push(LayoutError::DuplicateVariant {
                    event: descriptor.event,
                    since: descriptor.since,
                });
            }
            if descriptor.direction != self.direction {
                errors.push(LayoutError::WrongDirection {
                    packet: descriptor.name,
                    catalog: self.direction,
                    direction: descriptor.direction,
                });
            }
        }

        for version in ClientVersion::ALL {
            let current = self.for_version(version);
            for (index, first) in current.iter().enumerate() {
                for second in &current[index + 1..] {
                    if headers_collide(first, second) {
                        errors.push(LayoutError::AmbiguousHeader {
                            first: first.name,
                            second: second.name,
                            version,
                        });
                    }
                }
            }
        }
        errors
    }
}

/// Same class and code, and either the same sub-code or a sub-code on only one
/// side (the byte after the code would be read both ways).
fn headers_collide(first: &PacketDescriptor, second: &PacketDescriptor) -> bool {
    let (a, b) = (first.header, second.header);
    a.class == b.class
        && a.code == b.code
        && match (a.sub_code, b.sub_code) {
            (Some(x), Some(y)) => x == y,
            _ => true,
        }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_are_not_empty() {
        assert!(SERVER.len() > 100);
        assert!(CLIENT.len() > 50);
    }

    #[test]
    fn catalogs_have_no_layout_errors() {
        let errors: Vec<_> = SERVER
            .layout_errors()
            .into_iter()
            .chain(CLIENT.layout_errors())
            .collect();
        assert!(errors.is_empty(), "{errors:#?}");
    }

    #[test]
    fn by_name_finds_variants() {
        let base = SERVER.by_name("CharacterList").unwrap();
        let old = SERVER.by_name("CharacterList075").unwrap();
        assert_eq!(base.event, old.event);
        assert!(old.since < base.since);
    }

    #[test]
    fn resolve_picks_newest_applicable_variant() {
        let name = |version| SERVER.resolve("AddCharactersToScope", version).unwrap().name;
        assert_eq!(name(ClientVersion::V075), "AddCharactersToScope075");
        assert_eq!(name(ClientVersion::V095), "AddCharactersToScope095");
        assert_eq!(name(ClientVersion::V097), "AddCharactersToScope095");
        assert_eq!(name(ClientVersion::Season6), "AddCharactersToScope");
    }

    #[test]
    fn unknown_event_has_no_variant() {
        assert!(SERVER.resolve("Teleport", ClientVersion::Season6).is_none());
    }

    #[test]
    fn identify_prefers_sub_code_descriptors() {
        let buf = [0xC1, 0x05, 0xF1, 0x01, 0x01];
        let descriptor = SERVER.identify(&buf, ClientVersion::Season6).unwrap();
        assert_eq!(descriptor.name, "LoginResponse");
    }

    #[test]
    fn identify_depends_on_version() {
        let buf = [0xC1, 0x08, 0x10, 0x00, 0x01, 0x20, 0x30, 0x00];
        assert_eq!(
            SERVER.identify(&buf, ClientVersion::V075).unwrap().name,
            "ObjectWalked075"
        );
        assert!(matches!(
            SERVER.identify(&buf, ClientVersion::Season6),
            Err(PacketError::UnknownPacket { code: 0x10, .. })
        ));
    }

    #[test]
    fn events_are_unique() {
        let events = SERVER.events();
        let unique: HashSet<_> = events.iter().collect();
        assert_eq!(events.len(), unique.len());
    }
}
