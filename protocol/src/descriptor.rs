//! Static message descriptors.
//!
//! A [`PacketDescriptor`] is the complete layout of one message type: its
//! header, the named fields at fixed offsets and at most one repeated group
//! after them. Descriptors are plain `static` data shared by every codec.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PacketError, Result};
use crate::field::{Encoding, FieldSpec};
use crate::group::{GroupSpec, Stride};
use crate::header::{HeaderSpec, RawHeader};
use crate::record::Record;
use crate::version::ClientVersion;

/// Who sends a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    #[serde(alias = "server")]
    ServerToClient,
    #[serde(alias = "client")]
    ClientToServer,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ServerToClient => "server_to_client",
            Self::ClientToServer => "client_to_server",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction {0:?}, expected server or client")]
pub struct InvalidDirection(pub String);

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "server" | "server_to_client" | "s2c" => Ok(Self::ServerToClient),
            "client" | "client_to_server" | "c2s" => Ok(Self::ClientToServer),
            _ => Err(InvalidDirection(s.to_owned())),
        }
    }
}

/// Problems in a descriptor table itself, found by [`PacketDescriptor::layout_errors`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("{packet}: field {field} starts at {offset}, inside the {header_size}-byte header")]
    FieldInHeader {
        packet: &'static str,
        field: &'static str,
        offset: usize,
        header_size: usize,
    },

    #[error("{packet}: field {field} ends at {end}, past the {limit}-byte boundary")]
    FieldOutOfBounds {
        packet: &'static str,
        field: &'static str,
        end: usize,
        limit: usize,
    },

    #[error("{packet}: fields {first} and {second} overlap")]
    OverlappingFields {
        packet: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("{packet}: field {field} is declared twice")]
    DuplicateField {
        packet: &'static str,
        field: &'static str,
    },

    #[error("{packet}: bit run of {field} does not fit in one byte")]
    InvalidBitRun {
        packet: &'static str,
        field: &'static str,
    },

    #[error("{packet}: group {group} counts with missing field {count_field}")]
    MissingCountField {
        packet: &'static str,
        group: &'static str,
        count_field: &'static str,
    },

    #[error("{packet}: count of group {group} does not precede it")]
    CountAfterGroup {
        packet: &'static str,
        group: &'static str,
    },

    #[error("{packet}: count field {field} is not an integer")]
    CountNotInteger {
        packet: &'static str,
        field: &'static str,
    },

    #[error("{packet}: group {group} has an invalid nesting")]
    InvalidNesting {
        packet: &'static str,
        group: &'static str,
    },

    #[error("{packet}: only one top-level group is supported")]
    MultipleGroups { packet: &'static str },

    #[error("{packet}: trailing field {field} must be the last part of the message")]
    TrailingNotLast {
        packet: &'static str,
        field: &'static str,
    },

    #[error("{packet}: fixed length is set together with variable data")]
    FixedLengthWithVariableData { packet: &'static str },

    #[error("{packet}: message without variable data needs a fixed length")]
    MissingFixedLength { packet: &'static str },

    #[error("{packet}: length {length} does not fit the header's {max}-byte limit")]
    LengthExceedsHeader {
        packet: &'static str,
        length: usize,
        max: usize,
    },

    #[error("{packet}: name registered twice")]
    DuplicateName { packet: &'static str },

    #[error("{event}: two variants start at client {since}")]
    DuplicateVariant {
        event: &'static str,
        since: ClientVersion,
    },

    #[error("{packet}: registered in the {catalog} catalog but sent {direction}")]
    WrongDirection {
        packet: &'static str,
        catalog: Direction,
        direction: Direction,
    },

    #[error("{first} and {second} cannot be told apart by a {version} client")]
    AmbiguousHeader {
        first: &'static str,
        second: &'static str,
        version: ClientVersion,
    },
}

/// Layout of one message type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PacketDescriptor {
    pub name: &'static str,
    /// Logical event shared by all version variants.
    pub event: &'static str,
    /// First client build that uses this layout.
    pub since: ClientVersion,
    pub direction: Direction,
    pub header: HeaderSpec,
    /// Total size for messages without variable data.
    pub length: Option<usize>,
    pub fields: &'static [FieldSpec],
    pub groups: &'static [GroupSpec],
    pub sent_when: &'static str,
    pub caused_reaction: &'static str,
}

impl PacketDescriptor {
    #[must_use]
    pub const fn new(name: &'static str, header: HeaderSpec) -> Self {
        Self {
            name,
            event: name,
            since: ClientVersion::V075,
            direction: Direction::ServerToClient,
            header,
            length: None,
            fields: &[],
            groups: &[],
            sent_when: "",
            caused_reaction: "",
        }
    }

    #[must_use]
    pub const fn fixed(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    #[must_use]
    pub const fn fields(mut self, fields: &'static [FieldSpec]) -> Self {
        self.fields = fields;
        self
    }

    #[must_use]
    pub const fn groups(mut self, groups: &'static [GroupSpec]) -> Self {
        self.groups = groups;
        self
    }

    /// Marks this descriptor as the layout of `event` from `since` on.
    #[must_use]
    pub const fn variant(mut self, event: &'static str, since: ClientVersion) -> Self {
        self.event = event;
        self.since = since;
        self
    }

    /// Marks the message as sent by the client.
    #[must_use]
    pub const fn client(mut self) -> Self {
        self.direction = Direction::ClientToServer;
        self
    }

    #[must_use]
    pub const fn sent_when(mut self, text: &'static str) -> Self {
        self.sent_when = text;
        self
    }

    #[must_use]
    pub const fn caused_reaction(mut self, text: &'static str) -> Self {
        self.caused_reaction = text;
        self
    }

    #[must_use]
    pub const fn header_size(&self) -> usize {
        self.header.size()
    }

    /// Smallest buffer that holds the header and every fixed field.
    #[must_use]
    pub fn min_size(&self) -> usize {
        if let Some(length) = self.length {
            return length;
        }
        let fields = self
            .fields
            .iter()
            .map(|field| field.end().unwrap_or(field.offset))
            .max()
            .unwrap_or(0);
        let groups = self.groups.iter().map(|group| group.offset).max().unwrap_or(0);
        self.header_size().max(fields).max(groups)
    }

    /// Buffer size for a message. Fixed-length messages ignore
    /// `payload_size`; the others need the header plus the payload.
    #[must_use]
    pub const fn required_size(&self, payload_size: usize) -> usize {
        match self.length {
            Some(length) => length,
            None => self.header_size() + payload_size,
        }
    }

    /// Allocates a zeroed buffer of [`required_size`](Self::required_size)
    /// with the header and length already written.
    pub fn create(&self, payload_size: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.required_size(payload_size)];
        self.header.write(&mut buf)?;
        self.header.write_length(&mut buf, None)?;
        Ok(buf)
    }

    pub fn field(&self, name: &str) -> Result<&'static FieldSpec> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| PacketError::UnknownField {
                packet: self.name,
                field: name.to_owned(),
            })
    }

    pub fn group(&self, name: &str) -> Result<&'static GroupSpec> {
        self.groups
            .iter()
            .find(|group| group.name == name)
            .ok_or_else(|| PacketError::UnknownGroup {
                packet: self.name,
                group: name.to_owned(),
            })
    }

    /// The field holding the element count of `group`.
    pub fn count_field(&self, group: &GroupSpec) -> Result<&'static FieldSpec> {
        self.field(group.count_field)
    }

    fn counted_group(&self, field: &str) -> Option<&'static GroupSpec> {
        self.groups.iter().find(|group| group.count_field == field)
    }

    fn trailing_field(&self) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.encoding.is_trailing())
    }

    /// Checks that `buf` starts with this descriptor's header.
    pub fn check_header(&self, buf: &[u8]) -> Result<RawHeader> {
        let raw = RawHeader::parse(buf)?;
        if !self.header.matches(&raw) {
            return Err(PacketError::HeaderMismatch {
                packet: self.name,
                expected: self.header.to_string(),
                actual: raw.to_string(),
            });
        }
        Ok(raw)
    }

    /// Absolute offsets of the elements of `group` in `buf`.
    pub fn element_bases(&self, buf: &[u8], group: &GroupSpec) -> Result<Vec<usize>> {
        let count = self.count_field(group)?.read_uint(buf, 0)? as usize;
        group.element_bases(buf, group.offset, count, self.name)
    }

    /// Decodes every element of the named group.
    pub fn decode_group(&self, buf: &[u8], name: &str) -> Result<Vec<Record>> {
        let group = self.group(name)?;
        let count = self.count_field(group)?.read_uint(buf, 0)? as usize;
        group.decode(buf, group.offset, count, self.name)
    }

    /// Decodes a complete message.
    pub fn decode(&self, buf: &[u8]) -> Result<Record> {
        let raw = self.check_header(buf)?;
        let min_size = self.min_size();
        if buf.len() < min_size {
            return Err(PacketError::BufferTooShort {
                needed: min_size,
                available: buf.len(),
            });
        }
        if raw.length != buf.len() {
            log::warn!(
                "{}: length field says {} bytes, buffer has {}",
                self.name,
                raw.length,
                buf.len()
            );
        }

        let mut record = Record::new();
        for field in self.fields {
            record.set(field.name, field.read(buf, 0)?);
        }
        for group in self.groups {
            let elements = self.decode_group(buf, group.name)?;
            record.set_group(group.name, elements);
        }
        Ok(record)
    }

    /// Rejects record fields and groups this descriptor does not define.
    pub fn validate(&self, record: &Record) -> Result<()> {
        for (name, _) in record.fields() {
            self.field(name)?;
        }
        for (name, elements) in record.groups() {
            let group = self.group(name)?;
            for element in elements {
                group.validate(element, self.name)?;
            }
        }
        Ok(())
    }

    /// Size of the message once `record` is encoded.
    pub fn encoded_size(&self, record: &Record) -> Result<usize> {
        if let Some(length) = self.length {
            return Ok(length);
        }
        let mut size = self.min_size();
        if let Some(field) = self.trailing_field() {
            size = size.max(field.offset + field.encoded_len(record.get(field.name))?);
        }
        for group in self.groups {
            let elements = record.group(group.name).unwrap_or(&[]);
            let total: usize = elements
                .iter()
                .map(|element| group.encoded_element_size(element))
                .sum();
            size = size.max(group.offset + total);
        }
        Ok(size)
    }

    /// Encodes `record` into a new, exactly sized buffer.
    ///
    /// Group counts are derived from the element lists; fields missing from
    /// the record stay zero.
    pub fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        self.validate(record)?;
        let mut buf = self.create(self.encoded_size(record)?.saturating_sub(self.header_size()))?;

        for field in self.fields {
            if let Some(group) = self.counted_group(field.name) {
                let count = record.group(group.name).map_or(0, <[Record]>::len);
                field.write_uint(&mut buf, 0, count as u64)?;
            } else if let Some(value) = record.get(field.name) {
                field.write(&mut buf, 0, value)?;
            }
        }
        for group in self.groups {
            let elements = record.group(group.name).unwrap_or(&[]);
            group.encode(&mut buf, group.offset, elements, self.name)?;
        }
        log::trace!("encoded {} into {} bytes", self.name, buf.len());
        Ok(buf)
    }

    /// Every structural problem of this descriptor.
    #[must_use]
    pub fn layout_errors(&self) -> Vec<LayoutError> {
        let mut errors = Vec::new();
        let packet = self.name;
        let header_size = self.header_size();
        let has_variable = !self.groups.is_empty() || self.trailing_field().is_some();

        match self.length {
            Some(_) if has_variable => {
                errors.push(LayoutError::FixedLengthWithVariableData { packet });
            }
            None if !has_variable => errors.push(LayoutError::MissingFixedLength { packet }),
            Some(length) if length > self.header.class.max_length() => {
                errors.push(LayoutError::LengthExceedsHeader {
                    packet,
                    length,
                    max: self.header.class.max_length(),
                });
            }
            _ => {}
        }

        for field in self.fields {
            if field.offset < header_size {
                errors.push(LayoutError::FieldInHeader {
                    packet,
                    field: field.name,
                    offset: field.offset,
                    header_size,
                });
            }
            if let (Some(length), Some(end)) = (self.length, field.end()) {
                if end > length {
                    errors.push(LayoutError::FieldOutOfBounds {
                        packet,
                        field: field.name,
                        end,
                        limit: length,
                    });
                }
            }
        }
        check_fields(packet, self.fields, &mut errors);

        if let Some(trailing) = self.trailing_field() {
            let last = self.fields.iter().all(|field| {
                field.name == trailing.name || field.end().is_some_and(|end| end <= trailing.offset)
            });
            if !last || !self.groups.is_empty() {
                errors.push(LayoutError::TrailingNotLast {
                    packet,
                    field: trailing.name,
                });
            }
        }

        if self.groups.len() > 1 {
            errors.push(LayoutError::MultipleGroups { packet });
        }
        for group in self.groups {
            let fields_end = self
                .fields
                .iter()
                .filter_map(FieldSpec::end)
                .max()
                .unwrap_or(header_size);
            if group.offset < fields_end.max(header_size) {
                errors.push(LayoutError::OverlappingFields {
                    packet,
                    first: group.name,
                    second: "fixed fields",
                });
            }
            match self.fields.iter().find(|field| field.name == group.count_field) {
                None => errors.push(LayoutError::MissingCountField {
                    packet,
                    group: group.name,
                    count_field: group.count_field,
                }),
                Some(count) => {
                    if !count.encoding.is_integer() {
                        errors.push(LayoutError::CountNotInteger {
                            packet,
                            field: count.name,
                        });
                    }
                    if count.end().is_none_or(|end| end > group.offset) {
                        errors.push(LayoutError::CountAfterGroup {
                            packet,
                            group: group.name,
                        });
                    }
                }
            }
            check_group(packet, group, &mut errors);
        }
        errors
    }
}

fn check_fields(packet: &'static str, fields: &[FieldSpec], errors: &mut Vec<LayoutError>) {
    for (index, field) in fields.iter().enumerate() {
        if let Encoding::Bits { shift, width } = field.encoding {
            if width == 0 || shift + width > 8 {
                errors.push(LayoutError::InvalidBitRun {
                    packet,
                    field: field.name,
                });
            }
        }
        if let Encoding::Flag { index } = field.encoding {
            if index > 7 {
                errors.push(LayoutError::InvalidBitRun {
                    packet,
                    field: field.name,
                });
            }
        }
        for other in &fields[index + 1..] {
            if other.name == field.name {
                errors.push(LayoutError::DuplicateField {
                    packet,
                    field: field.name,
                });
            } else if overlaps(field, other) {
                errors.push(LayoutError::OverlappingFields {
                    packet,
                    first: field.name,
                    second: other.name,
                });
            }
        }
    }
}

/// Two fields overlap when their byte ranges intersect, unless both are
/// sub-byte fields of the same byte with disjoint masks.
fn overlaps(a: &FieldSpec, b: &FieldSpec) -> bool {
    let a_end = a.end().unwrap_or(usize::MAX);
    let b_end = b.end().unwrap_or(usize::MAX);
    if a.offset >= b_end || b.offset >= a_end {
        return false;
    }
    let sub_byte = |field: &FieldSpec| {
        matches!(field.encoding, Encoding::Bits { .. } | Encoding::Flag { .. })
    };
    if sub_byte(a) && sub_byte(b) {
        return a.encoding.byte_mask() & b.encoding.byte_mask() != 0;
    }
    true
}

fn check_group(packet: &'static str, group: &GroupSpec, errors: &mut Vec<LayoutError>) {
    let stride = group.min_stride();
    for field in group.fields {
        match field.end() {
            Some(end) if end > stride => errors.push(LayoutError::FieldOutOfBounds {
                packet,
                field: field.name,
                end,
                limit: stride,
            }),
            None => errors.push(LayoutError::TrailingNotLast {
                packet,
                field: field.name,
            }),
            _ => {}
        }
    }
    check_fields(packet, group.fields, errors);

    let nesting_ok = match group.stride {
        Stride::Fixed(_) => group.nested.is_empty(),
        Stride::Dynamic { base } => {
            group.nested.len() == 1
                && group.nested.iter().all(|nested| {
                    nested.offset == base
                        && matches!(nested.stride, Stride::Fixed(_))
                        && nested.nested.is_empty()
                })
        }
    };
    if !nesting_ok {
        errors.push(LayoutError::InvalidNesting {
            packet,
            group: group.name,
        });
    }
    for nested in group.nested {
        match group.field(nested.count_field) {
            None => errors.push(LayoutError::MissingCountField {
                packet,
                group: nested.name,
                count_field: nested.count_field,
            }),
            Some(count) if !count.encoding.is_integer() => {
                errors.push(LayoutError::CountNotInteger {
                    packet,
                    field: count.name,
                });
            }
            Some(_) => {}
        }
        check_group(packet, nested, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValue;

    static PARTY: PacketDescriptor = PacketDescriptor::new("Party", HeaderSpec::c1(0x42))
        .fields(&[FieldSpec::byte("Count", 3)])
        .groups(&[GroupSpec::fixed("Members", "Count", 4, 11).fields(&[
            FieldSpec::string("Name", 0, 10),
            FieldSpec::byte("Index", 10),
        ])]);

    static FLAGS: PacketDescriptor = PacketDescriptor::new("Flags", HeaderSpec::c1_sub(0xF3, 0x01))
        .fixed(6)
        .fields(&[
            FieldSpec::bits("High", 4, 4, 4),
            FieldSpec::bits("Low", 4, 0, 4),
            FieldSpec::flag("Seventh", 5, 7),
        ]);

    static MESSAGE: PacketDescriptor = PacketDescriptor::new("Message", HeaderSpec::c1(0x0D))
        .fields(&[FieldSpec::byte("Kind", 3), FieldSpec::trailing_string("Text", 4)]);

    #[test]
    fn sizes() {
        assert_eq!(PARTY.header_size(), 3);
        assert_eq!(PARTY.min_size(), 4);
        assert_eq!(PARTY.required_size(12), 15);
        assert_eq!(FLAGS.required_size(99), 6);
    }

    #[test]
    fn create_writes_header_and_length() {
        let buf = FLAGS.create(0).unwrap();
        assert_eq!(buf, vec![0xC1, 0x06, 0xF3, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn fixed_descriptors_are_consistent() {
        assert!(PARTY.layout_errors().is_empty());
        assert!(FLAGS.layout_errors().is_empty());
        assert!(MESSAGE.layout_errors().is_empty());
    }

    #[test]
    fn overlapping_bit_runs_are_reported() {
        static BAD: PacketDescriptor = PacketDescriptor::new("Bad", HeaderSpec::c1(0x01))
            .fixed(4)
            .fields(&[FieldSpec::bits("A", 3, 0, 5), FieldSpec::bits("B", 3, 4, 4)]);
        assert_eq!(
            BAD.layout_errors(),
            vec![LayoutError::OverlappingFields {
                packet: "Bad",
                first: "A",
                second: "B"
            }]
        );
    }

    #[test]
    fn count_after_group_is_reported() {
        static BAD: PacketDescriptor = PacketDescriptor::new("Bad", HeaderSpec::c2(0x01))
            .fields(&[FieldSpec::byte("Count", 8)])
            .groups(&[GroupSpec::fixed("Items", "Count", 5, 2)]);
        assert!(
            BAD.layout_errors()
                .contains(&LayoutError::CountAfterGroup { packet: "Bad", group: "Items" })
        );
    }

    #[test]
    fn trailing_string_adds_terminator() {
        let record = Record::new().with("Kind", 1u8).with("Text", "hi there");
        let buf = MESSAGE.encode(&record).unwrap();
        assert_eq!(buf.len(), 4 + 8 + 1);
        assert_eq!(buf[1] as usize, buf.len());
        assert_eq!(MESSAGE.decode(&buf).unwrap(), record);
    }

    #[test]
    fn group_counts_come_from_elements() {
        let record = Record::new().with_group(
            "Members",
            vec![
                Record::new().with("Name", "Hero").with("Index", 1u8),
                Record::new().with("Name", "Mage").with("Index", 2u8),
            ],
        );
        let buf = PARTY.encode(&record).unwrap();
        assert_eq!(buf.len(), 4 + 22);
        assert_eq!(buf[3], 2);
        let decoded = PARTY.decode(&buf).unwrap();
        assert_eq!(decoded.get_uint("Count"), Some(2));
        assert_eq!(decoded.group("Members"), record.group("Members"));
    }

    #[test]
    fn decode_rejects_foreign_header() {
        let buf = [0xC1, 0x06, 0xF3, 0x02, 0x00, 0x00];
        assert!(matches!(
            FLAGS.decode(&buf),
            Err(PacketError::HeaderMismatch { packet: "Flags", .. })
        ));
    }

    #[test]
    fn decode_rejects_short_buffer() {
        let buf = [0xC1, 0x05, 0xF3, 0x01, 0x00];
        assert_eq!(
            FLAGS.decode(&buf),
            Err(PacketError::BufferTooShort {
                needed: 6,
                available: 5
            })
        );
    }

    #[test]
    fn unknown_record_field_is_rejected() {
        let record = Record::new().with("Colour", FieldValue::Unsigned(1));
        assert_eq!(
            FLAGS.encode(&record),
            Err(PacketError::UnknownField {
                packet: "Flags",
                field: "Colour".to_owned()
            })
        );
    }

    #[test]
    fn direction_parses_short_names() {
        assert_eq!("server".parse::<Direction>().unwrap(), Direction::ServerToClient);
        assert_eq!("C2S".parse::<Direction>().unwrap(), Direction::ClientToServer);
        assert!("sideways".parse::<Direction>().is_err());
    }
}
