//! Codec views over packet buffers and the session-facing codec.

use serde::{Deserialize, Serialize};

use crate::bits;
use crate::catalog::Catalog;
use crate::descriptor::{Direction, PacketDescriptor};
use crate::error::{PacketError, Result};
use crate::field::{EnumValue, FieldSpec, FieldValue};
use crate::header::RawHeader;
use crate::record::Record;
use crate::version::ClientVersion;

/// Read-only typed access to a received packet.
#[derive(Clone, Copy, Debug)]
pub struct PacketView<'a> {
    descriptor: &'static PacketDescriptor,
    buf: &'a [u8],
}

impl<'a> PacketView<'a> {
    /// Binds `descriptor` to `buf` after checking the header and minimum size.
    pub fn new(descriptor: &'static PacketDescriptor, buf: &'a [u8]) -> Result<Self> {
        descriptor.check_header(buf)?;
        bits::window(buf, 0, descriptor.min_size())?;
        Ok(Self { descriptor, buf })
    }

    #[must_use]
    pub fn descriptor(&self) -> &'static PacketDescriptor {
        self.descriptor
    }

    #[must_use]
    pub fn bytes(&self) -> &'a [u8] {
        self.buf
    }

    pub fn get(&self, name: &str) -> Result<FieldValue> {
        self.descriptor.field(name)?.read(self.buf, 0)
    }

    pub fn get_uint(&self, name: &str) -> Result<u64> {
        self.descriptor.field(name)?.read_uint(self.buf, 0)
    }

    pub fn get_int(&self, name: &str) -> Result<i64> {
        let field = self.descriptor.field(name)?;
        let value = field.read(self.buf, 0)?;
        value.as_i64().ok_or_else(|| mismatch(field, "signed", &value))
    }

    pub fn get_bool(&self, name: &str) -> Result<bool> {
        let field = self.descriptor.field(name)?;
        let value = field.read(self.buf, 0)?;
        value.as_bool().ok_or_else(|| mismatch(field, "bool", &value))
    }

    pub fn get_str(&self, name: &str) -> Result<String> {
        let field = self.descriptor.field(name)?;
        match field.read(self.buf, 0)? {
            FieldValue::Text(text) => Ok(text),
            other => Err(mismatch(field, "text", &other)),
        }
    }

    pub fn get_bytes(&self, name: &str) -> Result<Vec<u8>> {
        let field = self.descriptor.field(name)?;
        match field.read(self.buf, 0)? {
            FieldValue::Binary(bytes) => Ok(bytes),
            other => Err(mismatch(field, "binary", &other)),
        }
    }

    pub fn get_enum(&self, name: &str) -> Result<EnumValue> {
        let field = self.descriptor.field(name)?;
        let value = field.read(self.buf, 0)?;
        value.as_enum().ok_or_else(|| mismatch(field, "enum", &value))
    }

    /// Decodes every element of the named group.
    pub fn group(&self, name: &str) -> Result<Vec<Record>> {
        self.descriptor.decode_group(self.buf, name)
    }

    /// Reads one field of one group element.
    pub fn element(&self, group: &str, index: usize, field: &str) -> Result<FieldValue> {
        let (spec, base) = element_field(self.descriptor, self.buf, group, index, field)?;
        spec.read(self.buf, base)
    }

    pub fn to_record(&self) -> Result<Record> {
        self.descriptor.decode(self.buf)
    }
}

/// Typed in-place access to a packet under construction.
#[derive(Debug)]
pub struct PacketViewMut<'a> {
    descriptor: &'static PacketDescriptor,
    buf: &'a mut [u8],
}

impl<'a> PacketViewMut<'a> {
    /// Binds `descriptor` to a buffer that already holds its header.
    pub fn new(descriptor: &'static PacketDescriptor, buf: &'a mut [u8]) -> Result<Self> {
        descriptor.check_header(buf)?;
        bits::window(buf, 0, descriptor.min_size())?;
        Ok(Self { descriptor, buf })
    }

    /// Writes the header and the length field into `buf`, whatever it held.
    pub fn init(descriptor: &'static PacketDescriptor, buf: &'a mut [u8]) -> Result<Self> {
        bits::window(buf, 0, descriptor.min_size())?;
        descriptor.header.write(buf)?;
        descriptor.header.write_length(buf, None)?;
        Ok(Self { descriptor, buf })
    }

    #[must_use]
    pub fn as_view(&self) -> PacketView<'_> {
        PacketView {
            descriptor: self.descriptor,
            buf: &*self.buf,
        }
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &*self.buf
    }

    pub fn get(&self, name: &str) -> Result<FieldValue> {
        self.as_view().get(name)
    }

    /// Writes a field. Sibling fields sharing the byte are left untouched.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        self.descriptor.field(name)?.write(self.buf, 0, &value.into())
    }

    pub fn set_uint(&mut self, name: &str, value: u64) -> Result<()> {
        self.descriptor.field(name)?.write_uint(self.buf, 0, value)
    }

    pub fn set_bool(&mut self, name: &str, value: bool) -> Result<()> {
        self.set(name, value)
    }

    pub fn set_str(&mut self, name: &str, value: &str) -> Result<()> {
        self.set(name, value)
    }

    /// Writes one field of one group element. The group count must already
    /// cover `index`.
    pub fn set_element(
        &mut self,
        group: &str,
        index: usize,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<()> {
        let (spec, base) = element_field(self.descriptor, self.buf, group, index, field)?;
        spec.write(self.buf, base, &value.into())
    }

    /// Rewrites the length field, with the buffer size unless overridden.
    pub fn write_length(&mut self, length: Option<usize>) -> Result<()> {
        self.descriptor.header.write_length(self.buf, length)
    }
}

fn element_field(
    descriptor: &'static PacketDescriptor,
    buf: &[u8],
    group: &str,
    index: usize,
    field: &str,
) -> Result<(&'static FieldSpec, usize)> {
    let group = descriptor.group(group)?;
    let spec = group.field(field).ok_or_else(|| PacketError::UnknownField {
        packet: descriptor.name,
        field: format!("{}.{field}", group.name),
    })?;
    let bases = descriptor.element_bases(buf, group)?;
    let base = bases.get(index).copied().ok_or(PacketError::GroupCountExceedsBuffer {
        group: group.name,
        declared: index + 1,
        max_possible: bases.len(),
    })?;
    Ok((spec, base))
}

fn mismatch(field: &FieldSpec, expected: &'static str, value: &FieldValue) -> PacketError {
    PacketError::TypeMismatch {
        field: field.name,
        expected,
        actual: value.kind(),
    }
}

/// Limits applied by [`PacketCodec`] to packets in either direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecLimits {
    pub max_packet_size: usize,
    pub max_group_elements: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            // Largest C2/C4 length field value.
            max_packet_size: u16::MAX as usize,
            max_group_elements: 1024,
        }
    }
}

/// A received packet decoded into its structured form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedPacket {
    #[serde(rename = "packet", serialize_with = "serialize_name")]
    pub descriptor: &'static PacketDescriptor,
    pub record: Record,
}

fn serialize_name<S: serde::Serializer>(
    descriptor: &&'static PacketDescriptor,
    serializer: S,
) -> core::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(descriptor.name)
}

/// Codec for one direction of a session with a negotiated client build.
#[derive(Clone, Debug)]
pub struct PacketCodec {
    direction: Direction,
    version: ClientVersion,
    limits: CodecLimits,
}

impl Default for PacketCodec {
    fn default() -> Self {
        Self {
            direction: Direction::ServerToClient,
            version: ClientVersion::default(),
            limits: CodecLimits::default(),
        }
    }
}

impl PacketCodec {
    #[must_use]
    pub const fn new(direction: Direction, version: ClientVersion, limits: CodecLimits) -> Self {
        Self {
            direction,
            version,
            limits,
        }
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn version(&self) -> ClientVersion {
        self.version
    }

    #[must_use]
    pub const fn limits(&self) -> CodecLimits {
        self.limits
    }

    #[must_use]
    pub fn catalog(&self) -> &'static Catalog {
        Catalog::for_direction(self.direction)
    }

    /// Finds the descriptor of the packet in `buf` for this codec's client
    /// build.
    pub fn identify(&self, buf: &[u8]) -> Result<&'static PacketDescriptor> {
        self.validate_size(buf.len())?;
        self.catalog().identify(buf, self.version)
    }

    /// Decodes the packet at the start of `buf`.
    ///
    /// Only the bytes covered by the header's length field belong to the
    /// packet; anything after them is left for the caller.
    pub fn decode(&self, buf: &[u8]) -> Result<DecodedPacket> {
        let descriptor = self.identify(buf)?;
        let raw = RawHeader::parse(buf)?;
        let packet = bits::window(buf, 0, raw.length)?;
        if packet.len() < buf.len() {
            log::trace!(
                "{}: ignoring {} bytes past the declared length",
                descriptor.name,
                buf.len() - packet.len()
            );
        }
        let record = descriptor.decode(packet)?;
        self.validate_groups(&record)?;
        Ok(DecodedPacket { descriptor, record })
    }

    /// Encodes `record` with the layout of `event` this client understands.
    pub fn encode(&self, event: &str, record: &Record) -> Result<Vec<u8>> {
        let descriptor = self.resolve(event)?;
        self.encode_with(descriptor, record)
    }

    /// Encodes `record` with an explicitly chosen descriptor.
    pub fn encode_with(
        &self,
        descriptor: &'static PacketDescriptor,
        record: &Record,
    ) -> Result<Vec<u8>> {
        self.validate_groups(record)?;
        self.validate_size(descriptor.encoded_size(record)?)?;
        descriptor.encode(record)
    }

    /// The descriptor of `event` for this codec's client build.
    pub fn resolve(&self, event: &str) -> Result<&'static PacketDescriptor> {
        self.catalog()
            .resolve(event, self.version)
            .ok_or_else(|| PacketError::NoVariant {
                event: event.to_owned(),
                version: self.version,
            })
    }

    fn validate_size(&self, size: usize) -> Result<()> {
        if size > self.limits.max_packet_size {
            return Err(PacketError::PacketTooLarge {
                limit: self.limits.max_packet_size,
                actual: size,
            });
        }
        Ok(())
    }

    fn validate_groups(&self, record: &Record) -> Result<()> {
        for (group, elements) in record.groups() {
            if elements.len() > self.limits.max_group_elements {
                return Err(PacketError::TooManyElements {
                    group,
                    limit: self.limits.max_group_elements,
                    actual: elements.len(),
                });
            }
            for element in elements {
                self.validate_groups(element)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GroupSpec;
    use crate::header::HeaderSpec;

    static OBJECT: PacketDescriptor = PacketDescriptor::new("Object", HeaderSpec::c1(0x15))
        .fixed(8)
        .fields(&[
            FieldSpec::u16_be("Id", 3),
            FieldSpec::bits("Rotation", 5, 4, 4),
            FieldSpec::bits("HeroState", 5, 0, 4),
            FieldSpec::flag("Visible", 6, 0),
        ]);

    static LIST: PacketDescriptor = PacketDescriptor::new("List", HeaderSpec::c2(0x20))
        .fields(&[FieldSpec::byte("Count", 4)])
        .groups(&[GroupSpec::fixed("Items", "Count", 5, 3)
            .fields(&[FieldSpec::u16_le("Id", 0), FieldSpec::byte("Level", 2)])]);

    #[test]
    fn view_reads_in_place() {
        let buf = [0xC1, 0x08, 0x15, 0x12, 0x34, 0x73, 0x01, 0x00];
        let view = PacketView::new(&OBJECT, &buf).unwrap();
        assert_eq!(view.get_uint("Id").unwrap(), 0x1234);
        assert_eq!(view.get_uint("Rotation").unwrap(), 7);
        assert_eq!(view.get_uint("HeroState").unwrap(), 3);
        assert!(view.get_bool("Visible").unwrap());
    }

    #[test]
    fn sibling_bit_fields_survive_either_write_order() {
        let mut buf = OBJECT.create(0).unwrap();
        let mut view = PacketViewMut::new(&OBJECT, &mut buf).unwrap();
        view.set("HeroState", 0x5u8).unwrap();
        view.set("Rotation", 0xAu8).unwrap();
        assert_eq!(view.bytes()[5], 0xA5);

        let mut buf = OBJECT.create(0).unwrap();
        let mut view = PacketViewMut::new(&OBJECT, &mut buf).unwrap();
        view.set("Rotation", 0xAu8).unwrap();
        view.set("HeroState", 0x5u8).unwrap();
        assert_eq!(view.bytes()[5], 0xA5);
    }

    #[test]
    fn init_overwrites_garbage_header() {
        let mut buf = [0xEEu8; 8];
        let view = PacketViewMut::init(&OBJECT, &mut buf).unwrap();
        assert_eq!(&view.bytes()[..3], &[0xC1, 0x08, 0x15]);
    }

    #[test]
    fn element_fields_are_addressed_by_index() {
        let mut buf = LIST.create(1 + 2 * 3).unwrap();
        let mut view = PacketViewMut::new(&LIST, &mut buf).unwrap();
        view.set_uint("Count", 2).unwrap();
        view.set_element("Items", 1, "Level", 9u8).unwrap();
        view.set_element("Items", 0, "Id", 0x0102u16).unwrap();
        assert_eq!(view.bytes()[5..], [0x02, 0x01, 0x00, 0x00, 0x00, 0x09]);
        assert_eq!(
            view.as_view().element("Items", 1, "Level").unwrap(),
            FieldValue::Unsigned(9)
        );
        assert!(view.set_element("Items", 2, "Level", 1u8).is_err());
    }

    #[test]
    fn view_rejects_short_buffer() {
        let buf = [0xC1, 0x05, 0x15, 0x00, 0x01];
        assert!(matches!(
            PacketView::new(&OBJECT, &buf),
            Err(PacketError::BufferTooShort { needed: 8, available: 5 })
        ));
    }

    #[test]
    fn codec_enforces_limits() {
        let codec = PacketCodec::new(
            Direction::ServerToClient,
            ClientVersion::Season6,
            CodecLimits {
                max_packet_size: 64,
                max_group_elements: 1,
            },
        );
        let items = vec![Record::new(), Record::new()];
        let record = Record::new().with_group("Items", items);
        assert_eq!(
            codec.encode_with(&LIST, &record),
            Err(PacketError::TooManyElements {
                group: "Items",
                limit: 1,
                actual: 2
            })
        );
        assert!(matches!(
            codec.identify(&[0u8; 65]),
            Err(PacketError::PacketTooLarge { limit: 64, actual: 65 })
        ));
    }
}
