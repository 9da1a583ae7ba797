use mu_protocol::bits;
use mu_protocol::catalog::enums::GuildWarType;
use mu_protocol::catalog::{self, Catalog};
use mu_protocol::field::Encoding;
use mu_protocol::{
    ClientVersion, CodecLimits, Direction, FieldSpec, FieldValue, GroupSpec, HeaderSpec,
    PacketCodec, PacketDescriptor, PacketError, Record, Stride,
};
use proptest::prelude::*;

const SAMPLE_UINT: u64 = 0x5A3C_96E1_7B2D_4F18;

fn uint_mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// A value for `field` that survives an encode/decode cycle unchanged.
fn sample_value(field: &FieldSpec, salt: u64) -> FieldValue {
    match field.encoding {
        Encoding::Flag { .. } => FieldValue::Bool(true),
        Encoding::I8 => FieldValue::Signed(-2 - (salt % 100) as i64),
        Encoding::I16(_) => FieldValue::Signed(-2 - salt as i64),
        Encoding::I32(_) => FieldValue::Signed(-70_000 - salt as i64),
        Encoding::I64(_) => FieldValue::Signed(-5_000_000_000 - salt as i64),
        Encoding::Str(len) => FieldValue::Text("Dk7wiz".chars().take(len.min(6)).collect()),
        Encoding::TrailingStr => FieldValue::Text("Hello there, Lorencia!".into()),
        Encoding::Bin(len) => FieldValue::Binary((0..len).map(|i| (i as u8) ^ 0xA5).collect()),
        Encoding::TrailingBin => FieldValue::Binary(vec![0x12, 0x34, 0x56]),
        encoding => {
            let raw = SAMPLE_UINT.rotate_left(salt as u32);
            FieldValue::Unsigned(raw & uint_mask(encoding.bit_width()))
        }
    }
}

/// Enum values compare by their raw integer.
fn normalized(value: &FieldValue) -> FieldValue {
    match value {
        FieldValue::Enum(value) => FieldValue::Unsigned(value.raw),
        other => other.clone(),
    }
}

fn sample_element(group: &GroupSpec) -> Record {
    let mut element = Record::new();
    for (salt, field) in group.fields.iter().enumerate() {
        if group.nested.iter().any(|nested| nested.count_field == field.name) {
            continue;
        }
        element.set(field.name, sample_value(field, salt as u64));
    }
    for nested in group.nested {
        element.set_group(nested.name, vec![sample_element(nested), sample_element(nested)]);
    }
    element
}

fn sample_record(descriptor: &PacketDescriptor) -> Record {
    let mut record = Record::new();
    for (salt, field) in descriptor.fields.iter().enumerate() {
        if descriptor.groups.iter().any(|group| group.count_field == field.name) {
            continue;
        }
        record.set(field.name, sample_value(field, salt as u64));
    }
    for group in descriptor.groups {
        record.set_group(group.name, vec![sample_element(group), sample_element(group)]);
    }
    record
}

fn assert_fields_match(context: &str, expected: &Record, actual: &Record) {
    for (name, value) in expected.fields() {
        let decoded = actual
            .get(name)
            .unwrap_or_else(|| panic!("{context}: {name} missing after decode"));
        assert_eq!(
            normalized(decoded),
            normalized(value),
            "{context}: field {name}"
        );
    }
    for (name, elements) in expected.groups() {
        let decoded = actual
            .group(name)
            .unwrap_or_else(|| panic!("{context}: group {name} missing after decode"));
        assert_eq!(decoded.len(), elements.len(), "{context}: count of {name}");
        for (index, (expected, actual)) in elements.iter().zip(decoded).enumerate() {
            assert_fields_match(&format!("{context}.{name}[{index}]"), expected, actual);
        }
    }
}

fn assert_catalog_round_trips(catalog: &Catalog) {
    for descriptor in catalog.packets() {
        let record = sample_record(descriptor);
        let buf = descriptor
            .encode(&record)
            .unwrap_or_else(|err| panic!("{}: encode failed: {err}", descriptor.name));
        assert_eq!(buf[0], descriptor.header.class.byte(), "{}", descriptor.name);
        if let Some(length) = descriptor.length {
            assert_eq!(buf.len(), length, "{}", descriptor.name);
        }
        let decoded = descriptor
            .decode(&buf)
            .unwrap_or_else(|err| panic!("{}: decode failed: {err}", descriptor.name));
        assert_fields_match(descriptor.name, &record, &decoded);
        for group in descriptor.groups {
            let count = decoded.get_uint(group.count_field);
            assert_eq!(count, Some(2), "{}: {}", descriptor.name, group.count_field);
        }
    }
}

#[test]
fn server_catalog_round_trips() {
    assert_catalog_round_trips(&catalog::SERVER);
}

#[test]
fn client_catalog_round_trips() {
    assert_catalog_round_trips(&catalog::CLIENT);
}

#[test]
fn catalogs_have_consistent_layouts() {
    for catalog in [&catalog::SERVER, &catalog::CLIENT] {
        let errors = catalog.layout_errors();
        assert!(errors.is_empty(), "{:?}: {errors:?}", catalog.direction);
        for descriptor in catalog.packets() {
            assert_eq!(descriptor.direction, catalog.direction, "{}", descriptor.name);
            assert!(!descriptor.sent_when.is_empty(), "{}", descriptor.name);
            assert!(!descriptor.caused_reaction.is_empty(), "{}", descriptor.name);
        }
    }
}

fn value_kind(encoding: Encoding) -> &'static str {
    match encoding {
        Encoding::Flag { .. } => "bool",
        encoding if encoding.is_signed() => "signed",
        Encoding::Str(_) | Encoding::TrailingStr => "text",
        Encoding::Bin(_) | Encoding::TrailingBin => "binary",
        _ => "unsigned",
    }
}

/// Values for the fields every layout in `layouts` shares, sized so that the
/// narrowest layout holds them.
fn shared_values(layouts: &[&'static [FieldSpec]], skip: &[&str]) -> Record {
    let mut record = Record::new();
    let Some((first, rest)) = layouts.split_first() else {
        return record;
    };
    for (salt, field) in first.iter().enumerate() {
        if skip.contains(&field.name) {
            continue;
        }
        let mut same: Vec<&FieldSpec> = vec![field];
        for fields in rest {
            match fields.iter().find(|other| other.name == field.name) {
                Some(other) if value_kind(other.encoding) == value_kind(field.encoding) => {
                    same.push(other);
                }
                _ => break,
            }
        }
        if same.len() != layouts.len() {
            continue;
        }
        let value = match value_kind(field.encoding) {
            "unsigned" => {
                let width = same.iter().map(|f| f.encoding.bit_width()).min().unwrap_or(0);
                FieldValue::Unsigned(SAMPLE_UINT.rotate_left(salt as u32) & uint_mask(width))
            }
            "text" => {
                let len = same
                    .iter()
                    .filter_map(|f| f.encoding.byte_len())
                    .min()
                    .unwrap_or(8);
                FieldValue::Text("Elf3".chars().take(len.min(4)).collect())
            }
            "binary" => {
                let lens: Vec<_> = same.iter().map(|f| f.encoding.byte_len()).collect();
                if lens.windows(2).any(|pair| pair[0] != pair[1]) {
                    continue;
                }
                sample_value(field, salt as u64)
            }
            _ => sample_value(field, salt as u64),
        };
        record.set(field.name, value);
    }
    record
}

#[test]
fn version_variants_carry_shared_fields() {
    let mut checked = 0;
    for catalog in [&catalog::SERVER, &catalog::CLIENT] {
        for event in catalog.events() {
            let variants = catalog.variants(event);
            let layouts = variants.variants();
            if layouts.len() < 2 {
                continue;
            }
            let field_sets: Vec<_> = layouts.iter().map(|d| d.fields).collect();
            let count_fields: Vec<&str> = layouts
                .iter()
                .flat_map(|d| d.groups.iter().map(|g| g.count_field))
                .collect();
            let mut record = shared_values(&field_sets, &count_fields);

            let first_groups = layouts[0].groups;
            for group in first_groups {
                let element_sets: Option<Vec<_>> = layouts
                    .iter()
                    .map(|d| d.groups.iter().find(|g| g.name == group.name).map(|g| g.fields))
                    .collect();
                let Some(element_sets) = element_sets else {
                    continue;
                };
                let nested_counts: Vec<&str> = layouts
                    .iter()
                    .flat_map(|d| d.groups.iter())
                    .flat_map(|g| g.nested.iter().map(|n| n.count_field))
                    .collect();
                let element = shared_values(&element_sets, &nested_counts);
                record.set_group(group.name, vec![element.clone(), element]);
            }

            for descriptor in layouts {
                let buf = descriptor
                    .encode(&record)
                    .unwrap_or_else(|err| panic!("{}: {err}", descriptor.name));
                let decoded = descriptor.decode(&buf).expect("decode variant");
                assert_fields_match(descriptor.name, &record, &decoded);
            }
            checked += 1;
        }
    }
    assert!(checked >= 10, "only {checked} multi-layout events");
}

#[test]
fn party_list_keeps_member_order() {
    let codec = PacketCodec::new(
        Direction::ServerToClient,
        ClientVersion::Season6,
        CodecLimits::default(),
    );
    let record = Record::new().with_group(
        "Members",
        vec![
            Record::new()
                .with("Name", "Hero")
                .with("Index", 0u8)
                .with("MapId", 5u8)
                .with("X", 10u8)
                .with("Y", 20u8)
                .with("CurrentHealth", 100u32)
                .with("MaximumHealth", 100u32),
            Record::new()
                .with("Name", "Mage")
                .with("Index", 1u8)
                .with("MapId", 5u8)
                .with("X", 11u8)
                .with("Y", 21u8)
                .with("CurrentHealth", 80u32)
                .with("MaximumHealth", 80u32),
        ],
    );

    let buf = codec.encode("PartyList", &record).unwrap();
    assert_eq!(buf.len(), 4 + 2 * 24);
    assert_eq!(&buf[..4], &[0xC1, 52, 0x42, 2]);

    let decoded = codec.decode(&buf).unwrap();
    assert_eq!(decoded.descriptor.name, "PartyList");
    assert_eq!(decoded.record.get_uint("Count"), Some(2));
    let members = decoded.record.group("Members").unwrap();
    let names: Vec<_> = members.iter().filter_map(|m| m.get_str("Name")).collect();
    assert_eq!(names, ["Hero", "Mage"]);
    assert_eq!(members[0].get_uint("X"), Some(10));
    assert_eq!(members[1].get_uint("Y"), Some(21));
    assert_eq!(members[1].get_uint("CurrentHealth"), Some(80));
}

#[test]
fn guild_war_declaration_labels_its_type() {
    let codec = PacketCodec::default();
    let record = Record::new()
        .with("GuildName", "Avengers")
        .with("Type", GuildWarType::Soccer);

    let buf = codec.encode("GuildWarDeclared", &record).unwrap();
    assert_eq!(buf.len(), 12);
    assert_eq!(&buf[3..11], b"Avengers");
    assert_eq!(buf[11], 1);

    let decoded = codec.decode(&buf).unwrap().record;
    assert_eq!(decoded.get_str("GuildName"), Some("Avengers"));
    let kind = decoded.get_enum("Type").unwrap();
    assert_eq!(kind.raw, 1);
    assert_eq!(kind.label(), Some("Soccer"));
    assert_eq!(kind.try_into_known_variant::<GuildWarType>().unwrap(), GuildWarType::Soccer);
}

#[test]
fn master_skill_list_counts_with_a_wide_field() {
    let codec = PacketCodec::default();
    let skill = |index: u8, level: u8| {
        Record::new()
            .with("MasterSkillIndex", index)
            .with("Level", level)
            .with("DisplayValue", 1.5f32.to_le_bytes())
            .with("DisplayValueOfNextLevel", 2.0f32.to_le_bytes())
    };
    let record = Record::new().with_group("Skills", vec![skill(3, 1), skill(17, 10)]);
    let buf = codec.encode("MasterSkillList", &record).unwrap();
    assert_eq!(buf.len(), 12 + 2 * 12);
    assert_eq!(&buf[..5], &[0xC2, 0x00, 36, 0xF3, 0x53]);
    assert_eq!(&buf[8..12], &[2, 0, 0, 0]);

    let decoded = codec.decode(&buf).unwrap();
    let skills = decoded.record.group("Skills").unwrap();
    assert_eq!(skills[1].get_uint("MasterSkillIndex"), Some(17));
    assert_eq!(skills[1].get_uint("Level"), Some(10));

    let old = PacketCodec::new(
        Direction::ServerToClient,
        ClientVersion::V097,
        CodecLimits::default(),
    );
    assert!(matches!(old.decode(&buf), Err(PacketError::UnknownPacket { .. })));
}

#[test]
fn unknown_header_class_is_rejected() {
    let codec = PacketCodec::default();
    assert!(matches!(
        codec.decode(&[0xC5, 0x03, 0x00]),
        Err(PacketError::UnknownHeaderClass(0xC5))
    ));
}

#[test]
fn empty_group_decodes_from_header_only_buffer() {
    let descriptor = catalog::SERVER.by_name("MapObjectOutOfScope").unwrap();
    let buf = descriptor.encode(&Record::new()).unwrap();
    assert_eq!(buf.len(), descriptor.min_size());
    let decoded = descriptor.decode(&buf).unwrap();
    assert_eq!(decoded.group("Objects").map(<[Record]>::len), Some(0));
}

#[test]
fn group_count_beyond_buffer_is_rejected() {
    let descriptor = catalog::SERVER.by_name("MapObjectOutOfScope").unwrap();
    let group = descriptor.groups[0];
    let element = Record::new().with(group.fields[0].name, 7u16);
    let mut buf = descriptor
        .encode(&Record::new().with_group(group.name, vec![element]))
        .unwrap();
    let count = descriptor.count_field(&group).unwrap();
    count.write_uint(&mut buf, 0, 3).unwrap();
    assert!(matches!(
        descriptor.decode(&buf),
        Err(PacketError::GroupCountExceedsBuffer { declared: 3, .. })
    ));
}

#[test]
fn decode_stops_at_declared_length() {
    let codec = PacketCodec::default();
    let record = Record::new()
        .with("ObjectId", 0x0102u16)
        .with("TargetX", 130u8)
        .with("TargetY", 121u8)
        .with("StepData", vec![0x12u8]);
    let mut stream = codec.encode("ObjectWalked", &record).unwrap();
    assert_eq!(stream[1], 9);
    stream.extend_from_slice(&[0xC1, 0x04]);

    let decoded = codec.decode(&stream).unwrap();
    assert_eq!(decoded.descriptor.name, "ObjectWalked");
    assert_eq!(decoded.record.get("StepData"), Some(&FieldValue::Binary(vec![0x12])));

    stream.truncate(8);
    assert!(matches!(
        codec.decode(&stream),
        Err(PacketError::BufferTooShort { needed: 9, available: 8 })
    ));
}

#[test]
fn dynamic_stride_elements_follow_their_effects() {
    let descriptor = catalog::SERVER.by_name("AddCharactersToScope").unwrap();
    let group = descriptor.groups[0];
    let Stride::Dynamic { base } = group.stride else {
        panic!("AddCharactersToScope elements carry effect lists");
    };
    let effect = |id: u8| Record::new().with("Id", id);
    let record = Record::new().with_group(
        group.name,
        vec![
            Record::new()
                .with("Id", 0x1234u16)
                .with("Name", "Knight")
                .with_group("Effects", vec![effect(3), effect(9), effect(11)]),
            Record::new().with("Id", 0x0042u16).with("Name", "Elf"),
        ],
    );
    let buf = descriptor.encode(&record).unwrap();
    assert_eq!(buf.len(), group.offset + 2 * base + 3);

    let bases = descriptor.element_bases(&buf, &group).unwrap();
    assert_eq!(bases, [group.offset, group.offset + base + 3]);
    let elements = descriptor.decode_group(&buf, group.name).unwrap();
    assert_eq!(elements[1].get_str("Name"), Some("Elf"));
    let effects: Vec<_> = elements[0]
        .group("Effects")
        .unwrap()
        .iter()
        .filter_map(|e| e.get_uint("Id"))
        .collect();
    assert_eq!(effects, [3, 9, 11]);
}

#[test]
fn fixed_string_stops_at_space() {
    let field = FieldSpec::string("Name", 0, 10);
    let mut buf = *b"Dark Lord\0";
    assert_eq!(field.read(&buf, 0).unwrap(), FieldValue::from("Dark"));
    buf[4] = b'_';
    assert_eq!(field.read(&buf, 0).unwrap(), FieldValue::from("Dark_Lord"));
}

#[test]
fn version_selects_layout_when_decoding() {
    let old = PacketCodec::new(
        Direction::ServerToClient,
        ClientVersion::V075,
        CodecLimits::default(),
    );
    let record = Record::new().with_group(
        "Members",
        vec![Record::new().with("Name", "Hero").with("X", 10u8)],
    );
    let buf = old.encode("PartyList", &record).unwrap();
    assert_eq!(buf.len(), 4 + 14);
    let decoded = old.decode(&buf).unwrap();
    assert_eq!(decoded.descriptor.name, "PartyList075");
}

type SubHeader = fn(u8, u8) -> HeaderSpec;

/// Header constructors of a class plus the width of its length field.
fn header_class(index: u8) -> (fn(u8) -> HeaderSpec, SubHeader, usize) {
    match index % 4 {
        0 => (HeaderSpec::c1, HeaderSpec::c1_sub, 1),
        1 => (HeaderSpec::c2, HeaderSpec::c2_sub, 2),
        2 => (HeaderSpec::c3, HeaderSpec::c3_sub, 1),
        _ => (HeaderSpec::c4, HeaderSpec::c4_sub, 2),
    }
}

proptest! {
    #[test]
    fn sibling_bit_runs_are_isolated(
        split in 1u8..8,
        initial in any::<u8>(),
        high in any::<u8>(),
        low in any::<u8>(),
        high_first in any::<bool>(),
    ) {
        let upper = FieldSpec::bits("Upper", 0, split, 8 - split);
        let lower = FieldSpec::bits("Lower", 0, 0, split);
        let mut buf = [initial];
        let writes = if high_first {
            [(upper, high), (lower, low)]
        } else {
            [(lower, low), (upper, high)]
        };
        for (field, value) in writes {
            field.write(&mut buf, 0, &FieldValue::from(value)).unwrap();
        }
        let high_mask = bits::low_mask(8 - split);
        let low_mask = bits::low_mask(split);
        prop_assert_eq!(upper.read(&buf, 0).unwrap(), FieldValue::from(high & high_mask));
        prop_assert_eq!(lower.read(&buf, 0).unwrap(), FieldValue::from(low & low_mask));
    }

    #[test]
    fn set_bit_run_is_idempotent(
        byte in any::<u8>(),
        value in any::<u8>(),
        (shift, width) in (0u8..8).prop_flat_map(|shift| (Just(shift), 1u8..=8 - shift)),
    ) {
        let once = bits::set_bit_run(byte, value, width, shift);
        prop_assert_eq!(bits::set_bit_run(once, value, width, shift), once);
        prop_assert_eq!(bits::get_bit_run(once, width, shift), value & bits::low_mask(width));
        let outside = !(bits::low_mask(width) << shift);
        prop_assert_eq!(once & outside, byte & outside);
    }

    #[test]
    fn flag_write_leaves_other_bits(initial in any::<u8>(), index in 0u8..8, value in any::<bool>()) {
        let flag = FieldSpec::flag("Flag", 0, index);
        let mut buf = [initial];
        flag.write(&mut buf, 0, &FieldValue::from(value)).unwrap();
        prop_assert_eq!(buf[0] & !(1 << index), initial & !(1 << index));
        prop_assert_eq!(flag.read(&buf, 0).unwrap(), FieldValue::Bool(value));
    }

    #[test]
    fn header_bytes_depend_only_on_spec_and_length(
        class_index in 0u8..4,
        code in any::<u8>(),
        sub_code in proptest::option::of(any::<u8>()),
        garbage in proptest::collection::vec(any::<u8>(), 5..255),
    ) {
        let (make, make_sub, width) = header_class(class_index);
        let spec = match sub_code {
            Some(sub_code) => make_sub(code, sub_code),
            None => make(code),
        };
        let mut dirty = garbage.clone();
        let mut clean = vec![0u8; garbage.len()];
        for buf in [&mut dirty, &mut clean] {
            spec.write(buf).unwrap();
            spec.write_length(buf, None).unwrap();
        }
        let header = spec.size();
        prop_assert_eq!(header, 1 + width + 1 + usize::from(sub_code.is_some()));
        prop_assert_eq!(&dirty[..header], &clean[..header]);
        prop_assert_eq!(dirty[0], spec.class.byte());
        prop_assert_eq!(dirty[spec.data_offset()], code);
        if let Some(sub_code) = sub_code {
            prop_assert_eq!(dirty[spec.data_offset() + 1], sub_code);
        }
    }

    #[test]
    fn fixed_string_read_is_prefix_before_terminator(
        text in "[A-Za-z0-9]{0,10}",
        tail in proptest::collection::vec(any::<u8>(), 0..6),
        terminator in prop_oneof![Just(0u8), Just(b' ')],
    ) {
        let mut buf = text.clone().into_bytes();
        buf.push(terminator);
        buf.extend_from_slice(&tail);
        let read = bits::read_fixed_string(&buf, 0, buf.len()).unwrap();
        prop_assert_eq!(read, text);
    }
}
