//! Repeated groups: count-prefixed arrays of fixed or variable stride.

use serde::Serialize;

use crate::error::{PacketError, Result};
use crate::field::FieldSpec;
use crate::record::Record;

/// Element size rule of a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Stride {
    /// Every element has the same size.
    Fixed(usize),
    /// `base` bytes plus the elements of the element's nested groups.
    Dynamic { base: usize },
}

/// A count-prefixed repeated group.
///
/// Top-level groups start at an absolute `offset` and take their count from a
/// message field. Nested groups start at an offset relative to the enclosing
/// element and take their count from one of its fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GroupSpec {
    pub name: &'static str,
    pub count_field: &'static str,
    pub offset: usize,
    pub stride: Stride,
    pub fields: &'static [FieldSpec],
    pub nested: &'static [GroupSpec],
}

impl GroupSpec {
    #[must_use]
    pub const fn fixed(
        name: &'static str,
        count_field: &'static str,
        offset: usize,
        stride: usize,
    ) -> Self {
        Self {
            name,
            count_field,
            offset,
            stride: Stride::Fixed(stride),
            fields: &[],
            nested: &[],
        }
    }

    #[must_use]
    pub const fn dynamic(
        name: &'static str,
        count_field: &'static str,
        offset: usize,
        base: usize,
    ) -> Self {
        Self {
            name,
            count_field,
            offset,
            stride: Stride::Dynamic { base },
            fields: &[],
            nested: &[],
        }
    }

    #[must_use]
    pub const fn fields(mut self, fields: &'static [FieldSpec]) -> Self {
        self.fields = fields;
        self
    }

    #[must_use]
    pub const fn nested(mut self, nested: &'static [GroupSpec]) -> Self {
        self.nested = nested;
        self
    }

    /// Smallest possible element size.
    #[must_use]
    pub const fn min_stride(&self) -> usize {
        match self.stride {
            Stride::Fixed(size) => size,
            Stride::Dynamic { base } => base,
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    #[must_use]
    pub fn nested_group(&self, name: &str) -> Option<&'static GroupSpec> {
        self.nested.iter().find(|group| group.name == name)
    }

    fn is_count_field(&self, name: &str) -> bool {
        self.nested.iter().any(|group| group.count_field == name)
    }

    fn count_spec(&self, nested: &GroupSpec, packet: &'static str) -> Result<&'static FieldSpec> {
        self.field(nested.count_field)
            .ok_or_else(|| PacketError::UnknownField {
                packet,
                field: nested.count_field.to_owned(),
            })
    }

    /// Size of the element starting at `base`, reading nested counts from the
    /// buffer.
    pub fn element_size(&self, buf: &[u8], base: usize, packet: &'static str) -> Result<usize> {
        match self.stride {
            Stride::Fixed(size) => Ok(size),
            Stride::Dynamic { base: fixed } => {
                let mut size = fixed;
                for nested in self.nested {
                    let count = self.count_spec(nested, packet)?.read_uint(buf, base)?;
                    size += count as usize * nested.min_stride();
                }
                Ok(size)
            }
        }
    }

    /// Size `element` occupies once encoded.
    #[must_use]
    pub fn encoded_element_size(&self, element: &Record) -> usize {
        match self.stride {
            Stride::Fixed(size) => size,
            Stride::Dynamic { base } => {
                base + self
                    .nested
                    .iter()
                    .map(|nested| {
                        element.group(nested.name).map_or(0, |items| {
                            items
                                .iter()
                                .map(|item| nested.encoded_element_size(item))
                                .sum()
                        })
                    })
                    .sum::<usize>()
            }
        }
    }

    /// Absolute start offset of each of the `count` elements starting at
    /// `start`.
    pub fn element_bases(
        &self,
        buf: &[u8],
        start: usize,
        count: usize,
        packet: &'static str,
    ) -> Result<Vec<usize>> {
        self.check_count(buf, start, count)?;
        let mut bases = Vec::with_capacity(count);
        let mut base = start;
        for _ in 0..count {
            let size = self.element_size(buf, base, packet)?;
            let end = base + size;
            if end > buf.len() {
                return Err(PacketError::BufferTooShort {
                    needed: end,
                    available: buf.len(),
                });
            }
            bases.push(base);
            base = end;
        }
        Ok(bases)
    }

    fn check_count(&self, buf: &[u8], start: usize, count: usize) -> Result<()> {
        let min_stride = self.min_stride();
        if min_stride == 0 || count == 0 {
            return Ok(());
        }
        let max_possible = buf.len().saturating_sub(start) / min_stride;
        if count > max_possible {
            log::warn!(
                "group {} declares {} elements, buffer of {} bytes fits {}",
                self.name,
                count,
                buf.len(),
                max_possible
            );
            return Err(PacketError::GroupCountExceedsBuffer {
                group: self.name,
                declared: count,
                max_possible,
            });
        }
        Ok(())
    }

    /// Decodes `count` elements starting at the absolute offset `start`.
    pub fn decode(
        &self,
        buf: &[u8],
        start: usize,
        count: usize,
        packet: &'static str,
    ) -> Result<Vec<Record>> {
        let bases = self.element_bases(buf, start, count, packet)?;
        bases
            .into_iter()
            .map(|base| self.decode_element(buf, base, packet))
            .collect()
    }

    fn decode_element(&self, buf: &[u8], base: usize, packet: &'static str) -> Result<Record> {
        let mut element = Record::new();
        for field in self.fields {
            element.set(field.name, field.read(buf, base)?);
        }
        for nested in self.nested {
            let count = self.count_spec(nested, packet)?.read_uint(buf, base)? as usize;
            let items = nested.decode(buf, base + nested.offset, count, packet)?;
            element.set_group(nested.name, items);
        }
        Ok(element)
    }

    /// Encodes `elements` starting at the absolute offset `start`. Nested
    /// counts are taken from the element lists.
    pub fn encode(
        &self,
        buf: &mut [u8],
        start: usize,
        elements: &[Record],
        packet: &'static str,
    ) -> Result<()> {
        let mut base = start;
        for element in elements {
            self.encode_element(buf, base, element, packet)?;
            base += self.encoded_element_size(element);
        }
        Ok(())
    }

    fn encode_element(
        &self,
        buf: &mut [u8],
        base: usize,
        element: &Record,
        packet: &'static str,
    ) -> Result<()> {
        self.validate(element, packet)?;
        for field in self.fields {
            if self.is_count_field(field.name) {
                continue;
            }
            if let Some(value) = element.get(field.name) {
                field.write(buf, base, value)?;
            }
        }
        for nested in self.nested {
            let items = element.group(nested.name).unwrap_or(&[]);
            self.count_spec(nested, packet)?
                .write_uint(buf, base, items.len() as u64)?;
            nested.encode(buf, base + nested.offset, items, packet)?;
        }
        Ok(())
    }

    /// Rejects element fields and groups this group does not define.
    pub fn validate(&self, element: &Record, packet: &'static str) -> Result<()> {
        if let Some((name, _)) = element.fields().find(|(name, _)| self.field(name).is_none()) {
            return Err(PacketError::UnknownField {
                packet,
                field: format!("{}.{name}", self.name),
            });
        }
        if let Some((name, _)) = element
            .groups()
            .find(|(name, _)| self.nested_group(name).is_none())
        {
            return Err(PacketError::UnknownGroup {
                packet,
                group: format!("{}.{name}", self.name),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValue;

    static EFFECTS: [GroupSpec; 1] =
        [GroupSpec::fixed("Effects", "EffectCount", 3, 1).fields(&[FieldSpec::byte("Id", 0)])];

    static CHARACTERS: GroupSpec = GroupSpec::dynamic("Characters", "Count", 1, 3)
        .fields(&[FieldSpec::u16_be("Id", 0), FieldSpec::byte("EffectCount", 2)])
        .nested(&EFFECTS);

    #[test]
    fn zero_count_touches_nothing() {
        let buf = [0u8; 1];
        assert!(CHARACTERS.decode(&buf, 1, 0, "Test").unwrap().is_empty());
    }

    #[test]
    fn dynamic_elements_advance_by_their_own_size() {
        // count, [id=1, 2 effects: 7, 8], [id=2, no effects]
        let buf = [2u8, 0x00, 0x01, 2, 7, 8, 0x00, 0x02, 0];
        let bases = CHARACTERS.element_bases(&buf, 1, 2, "Test").unwrap();
        assert_eq!(bases, vec![1, 6]);

        let elements = CHARACTERS.decode(&buf, 1, 2, "Test").unwrap();
        assert_eq!(elements[0].get_uint("Id"), Some(1));
        let effects: Vec<_> = elements[0]
            .group("Effects")
            .unwrap()
            .iter()
            .filter_map(|effect| effect.get_uint("Id"))
            .collect();
        assert_eq!(effects, vec![7, 8]);
        assert_eq!(elements[1].get_uint("Id"), Some(2));
        assert!(elements[1].group("Effects").unwrap().is_empty());
    }

    #[test]
    fn count_beyond_buffer_is_rejected() {
        let buf = [200u8, 0, 0, 0];
        assert_eq!(
            CHARACTERS.decode(&buf, 1, 200, "Test"),
            Err(PacketError::GroupCountExceedsBuffer {
                group: "Characters",
                declared: 200,
                max_possible: 1
            })
        );
    }

    #[test]
    fn nested_count_beyond_buffer_is_rejected() {
        let buf = [1u8, 0, 1, 9, 0];
        assert!(matches!(
            CHARACTERS.decode(&buf, 1, 1, "Test"),
            Err(PacketError::BufferTooShort { .. })
        ));
    }

    #[test]
    fn encode_derives_nested_counts() {
        let element = Record::new().with("Id", 5u16).with_group(
            "Effects",
            vec![Record::new().with("Id", 3u8), Record::new().with("Id", 4u8)],
        );
        assert_eq!(CHARACTERS.encoded_element_size(&element), 5);

        let mut buf = [0u8; 6];
        CHARACTERS
            .encode(&mut buf, 1, core::slice::from_ref(&element), "Test")
            .unwrap();
        assert_eq!(&buf[1..], &[0x00, 0x05, 2, 3, 4]);
    }

    #[test]
    fn unknown_element_field_is_rejected() {
        let element = Record::new().with("Bogus", FieldValue::Unsigned(1));
        assert_eq!(
            CHARACTERS.validate(&element, "Test"),
            Err(PacketError::UnknownField {
                packet: "Test",
                field: "Characters.Bogus".to_owned()
            })
        );
    }
}
