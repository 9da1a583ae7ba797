//! Structured packet contents exchanged with the game layer.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::field::{EnumValue, FieldValue};

/// Field values of one packet or group element, in layout order, plus the
/// decoded elements of each repeated group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(&'static str, FieldValue)>,
    groups: Vec<(&'static str, Vec<Record>)>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Record::set`].
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder form of [`Record::set_group`].
    #[must_use]
    pub fn with_group(mut self, name: &'static str, elements: Vec<Record>) -> Self {
        self.set_group(name, elements);
        self
    }

    /// Sets a field, replacing a previous value of the same name.
    pub fn set(&mut self, name: &'static str, value: impl Into<FieldValue>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn set_group(&mut self, name: &'static str, elements: Vec<Record>) {
        match self.groups.iter_mut().find(|(group, _)| *group == name) {
            Some((_, slot)) => *slot = elements,
            None => self.groups.push((name, elements)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn get_uint(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(FieldValue::as_u64)
    }

    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<EnumValue> {
        self.get(name).and_then(FieldValue::as_enum)
    }

    #[must_use]
    pub fn group(&self, name: &str) -> Option<&[Record]> {
        self.groups
            .iter()
            .find(|(group, _)| *group == name)
            .map(|(_, elements)| elements.as_slice())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    pub fn groups(&self) -> impl Iterator<Item = (&'static str, &[Record])> {
        self.groups
            .iter()
            .map(|(name, elements)| (*name, elements.as_slice()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.groups.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + self.groups.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        for (name, elements) in &self.groups {
            map.serialize_entry(name, elements)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_existing_value() {
        let mut record = Record::new().with("Level", 10u16);
        record.set("Level", 11u16);
        assert_eq!(record.get_uint("Level"), Some(11));
        assert_eq!(record.fields().count(), 1);
    }

    #[test]
    fn groups_keep_element_order() {
        let record = Record::new().with_group(
            "Members",
            vec![
                Record::new().with("Name", "Hero"),
                Record::new().with("Name", "Mage"),
            ],
        );
        let names: Vec<_> = record
            .group("Members")
            .unwrap()
            .iter()
            .filter_map(|member| member.get_str("Name"))
            .collect();
        assert_eq!(names, ["Hero", "Mage"]);
        assert!(record.group("Effects").is_none());
    }
}
