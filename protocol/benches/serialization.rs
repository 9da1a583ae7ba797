use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mu_protocol::{PacketCodec, Record};

fn sample_chat_message() -> Record {
    Record::new()
        .with("Sender", "BenchUser")
        .with("Message", "meet at the devias bar after the blood castle run")
}

fn sample_character_information() -> Record {
    Record::new()
        .with("X", 120u8)
        .with("Y", 125u8)
        .with("MapId", 3u8)
        .with("Direction", 2u8)
        .with("CurrentExperience", 1_250_000u64)
        .with("ExperienceForNextLevel", 1_400_000u64)
        .with("LevelUpPoints", 10u16)
        .with("Strength", 200u16)
        .with("Agility", 150u16)
        .with("Vitality", 180u16)
        .with("Energy", 140u16)
        .with("CurrentHealth", 1100u16)
        .with("MaximumHealth", 1200u16)
        .with("CurrentMana", 600u16)
        .with("MaximumMana", 650u16)
        .with("CurrentShield", 300u16)
        .with("MaximumShield", 320u16)
        .with("Money", 1_000_000u32)
}

fn sample_characters_in_scope(count: u8) -> Record {
    let characters = (0..count)
        .map(|index| {
            Record::new()
                .with("Id", 0x1000u16 + u16::from(index))
                .with("CurrentPositionX", 130u8)
                .with("CurrentPositionY", 140u8 + index)
                .with("Appearance", vec![0x30u8; 18])
                .with("Name", format!("Player{index}"))
                .with("Rotation", 3u8)
                .with_group(
                    "Effects",
                    (0..index % 3).map(|id| Record::new().with("Id", id)).collect(),
                )
        })
        .collect();
    Record::new().with_group("Characters", characters)
}

fn bench_event(c: &mut Criterion, codec: &PacketCodec, event: &str, label: &str, record: &Record) {
    c.bench_with_input(BenchmarkId::new("encode", label), record, |b, record| {
        b.iter(|| codec.encode(black_box(event), black_box(record)).unwrap());
    });

    let bytes = codec.encode(event, record).unwrap();
    c.bench_with_input(BenchmarkId::new("decode", label), &bytes, |b, bytes| {
        b.iter(|| codec.decode(black_box(bytes)).unwrap());
    });
}

fn protocol_benches(c: &mut Criterion) {
    let codec = PacketCodec::default();
    bench_event(c, &codec, "ChatMessage", "chat", &sample_chat_message());
    bench_event(
        c,
        &codec,
        "CharacterInformation",
        "character_info",
        &sample_character_information(),
    );
    for count in [1u8, 20] {
        bench_event(
            c,
            &codec,
            "AddCharactersToScope",
            &format!("characters_in_scope_{count}"),
            &sample_characters_in_scope(count),
        );
    }
}

criterion_group!(benches, protocol_benches);
criterion_main!(benches);
