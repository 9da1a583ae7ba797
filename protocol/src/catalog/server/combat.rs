//! Hits, kills, skills and the health and mana bars.

use crate::catalog::enums;
use crate::descriptor::PacketDescriptor;
use crate::field::FieldSpec;
use crate::group::GroupSpec;
use crate::header::HeaderSpec;
use crate::version::ClientVersion;

/// The kind byte packs the damage colour with the special hit flags.
pub static OBJECT_HIT: PacketDescriptor = PacketDescriptor::new("ObjectHit", HeaderSpec::c1(0x11))
    .fixed(10)
    .fields(&[
        FieldSpec::u16_be("ObjectId", 3),
        FieldSpec::u16_be("HealthDamage", 5),
        FieldSpec::bits("Kind", 7, 0, 4).labeled(&enums::DAMAGE_KIND),
        FieldSpec::flag("IsRageFighterStreakFinalHit", 7, 4),
        FieldSpec::flag("IsRageFighterStreakHit", 7, 5),
        FieldSpec::flag("IsDoubleDamage", 7, 6),
        FieldSpec::flag("IsTripleDamage", 7, 7),
        FieldSpec::u16_be("ShieldDamage", 8),
    ])
    .sent_when("An object in the view range got hit.")
    .caused_reaction("The client shows the damage above the object.");

pub static OBJECT_GOT_KILLED: PacketDescriptor =
    PacketDescriptor::new("ObjectGotKilled", HeaderSpec::c1(0x17))
        .fixed(9)
        .fields(&[
            FieldSpec::u16_be("KilledId", 3),
            FieldSpec::u16_be("SkillId", 5),
            FieldSpec::u16_be("KillerId", 7),
        ])
        .sent_when("An object in the view range died.")
        .caused_reaction("The client plays the death animation of the object.");

pub static OBJECT_ANIMATION: PacketDescriptor =
    PacketDescriptor::new("ObjectAnimation", HeaderSpec::c1(0x18))
        .fixed(9)
        .fields(&[
            FieldSpec::u16_be("ObjectId", 3),
            FieldSpec::byte("Direction", 5),
            FieldSpec::byte("Animation", 6),
            FieldSpec::u16_be("TargetId", 7),
        ])
        .sent_when("An object in the view range performed an animation.")
        .caused_reaction("The client plays the animation.");

pub static SHOW_EFFECT: PacketDescriptor =
    PacketDescriptor::new("ShowEffect", HeaderSpec::c1(0x48))
        .fixed(6)
        .fields(&[FieldSpec::u16_be("ObjectId", 3), FieldSpec::byte("Effect", 5)])
        .sent_when("An object in the view range triggered a visual effect like a level-up.")
        .caused_reaction("The client plays the effect on the object.");

pub static COMBO_ANIMATION: PacketDescriptor =
    PacketDescriptor::new("ComboAnimation", HeaderSpec::c1(0x59))
        .fixed(7)
        .fields(&[FieldSpec::u16_be("PlayerId", 3), FieldSpec::u16_be("TargetId", 5)])
        .sent_when("A player chained skills into a combo.")
        .caused_reaction("The client plays the combo animation between player and target.");

pub static EXPERIENCE_GAINED: PacketDescriptor =
    PacketDescriptor::new("ExperienceGained", HeaderSpec::c3(0x16))
        .fixed(9)
        .fields(&[
            FieldSpec::u16_be("KilledObjectId", 3),
            FieldSpec::u16_be("AddedExperience", 5),
            FieldSpec::u16_be("DamageOfLastHit", 7),
        ])
        .sent_when("The player killed a monster and gained experience.")
        .caused_reaction("The client adds the experience to the bar.");

pub static EXPERIENCE_GAINED_EXTENDED: PacketDescriptor =
    PacketDescriptor::new("ExperienceGainedExtended", HeaderSpec::c3(0x9C))
        .variant("ExperienceGainedExtended", ClientVersion::Season6)
        .fixed(11)
        .fields(&[
            FieldSpec::u16_be("KilledObjectId", 3),
            FieldSpec::u32_le("AddedExperience", 5),
            FieldSpec::u16_be("DamageOfLastHit", 9),
        ])
        .sent_when("The player gained more experience than fits into two bytes.")
        .caused_reaction("The client adds the experience to the bar.");

pub static CURRENT_HEALTH_AND_SHIELD: PacketDescriptor =
    PacketDescriptor::new("CurrentHealthAndShield", HeaderSpec::c1_sub(0x26, 0xFF))
        .fixed(9)
        .fields(&[FieldSpec::u16_be("Health", 4), FieldSpec::u16_be("Shield", 7)])
        .sent_when("The current health or shield of the character changed.")
        .caused_reaction("The client updates the health and shield orbs.");

pub static MAXIMUM_HEALTH_AND_SHIELD: PacketDescriptor =
    PacketDescriptor::new("MaximumHealthAndShield", HeaderSpec::c1_sub(0x26, 0xFE))
        .fixed(9)
        .fields(&[FieldSpec::u16_be("Health", 4), FieldSpec::u16_be("Shield", 7)])
        .sent_when("The maximum health or shield of the character changed.")
        .caused_reaction("The client updates the health and shield orbs.");

pub static ITEM_CONSUMPTION_FAILED: PacketDescriptor =
    PacketDescriptor::new("ItemConsumptionFailed", HeaderSpec::c1_sub(0x26, 0xFD))
        .fixed(9)
        .fields(&[FieldSpec::u16_be("Health", 4), FieldSpec::u16_be("Shield", 7)])
        .sent_when("The player tried to consume an item which could not be used.")
        .caused_reaction("The client unlocks the inventory again.");

pub static CURRENT_MANA_AND_ABILITY: PacketDescriptor =
    PacketDescriptor::new("CurrentManaAndAbility", HeaderSpec::c1_sub(0x27, 0xFF))
        .fixed(8)
        .fields(&[FieldSpec::u16_be("Mana", 4), FieldSpec::u16_be("Ability", 6)])
        .sent_when("The current mana or ability of the character changed.")
        .caused_reaction("The client updates the mana and ability orbs.");

pub static MAXIMUM_MANA_AND_ABILITY: PacketDescriptor =
    PacketDescriptor::new("MaximumManaAndAbility", HeaderSpec::c1_sub(0x27, 0xFE))
        .fixed(8)
        .fields(&[FieldSpec::u16_be("Mana", 4), FieldSpec::u16_be("Ability", 6)])
        .sent_when("The maximum mana or ability of the character changed.")
        .caused_reaction("The client updates the mana and ability orbs.");

pub static SKILL_ANIMATION: PacketDescriptor =
    PacketDescriptor::new("SkillAnimation", HeaderSpec::c3(0x19))
        .variant("SkillAnimation", ClientVersion::V097)
        .fixed(9)
        .fields(&[
            FieldSpec::u16_be("SkillId", 3),
            FieldSpec::u16_be("PlayerId", 5),
            FieldSpec::u16_be("TargetId", 7),
        ])
        .sent_when("An object in the view range used a targeted skill.")
        .caused_reaction("The client plays the skill effect between both objects.");

pub static SKILL_ANIMATION_075: PacketDescriptor =
    PacketDescriptor::new("SkillAnimation075", HeaderSpec::c3(0x19))
        .variant("SkillAnimation", ClientVersion::V075)
        .fixed(8)
        .fields(&[
            FieldSpec::byte("SkillId", 3),
            FieldSpec::u16_be("PlayerId", 4),
            FieldSpec::u16_be("TargetId", 6),
        ])
        .sent_when("An object in the view range used a targeted skill.")
        .caused_reaction("The client plays the skill effect between both objects.");

pub static AREA_SKILL_ANIMATION: PacketDescriptor =
    PacketDescriptor::new("AreaSkillAnimation", HeaderSpec::c1(0x1E))
        .variant("AreaSkillAnimation", ClientVersion::V097)
        .fixed(10)
        .fields(&[
            FieldSpec::u16_be("SkillId", 3),
            FieldSpec::u16_be("PlayerId", 5),
            FieldSpec::byte("PointX", 7),
            FieldSpec::byte("PointY", 8),
            FieldSpec::byte("Rotation", 9),
        ])
        .sent_when("An object in the view range used an area skill.")
        .caused_reaction("The client plays the skill effect at the target point.");

pub static AREA_SKILL_ANIMATION_075: PacketDescriptor =
    PacketDescriptor::new("AreaSkillAnimation075", HeaderSpec::c1(0x1E))
        .variant("AreaSkillAnimation", ClientVersion::V075)
        .fixed(9)
        .fields(&[
            FieldSpec::byte("SkillId", 3),
            FieldSpec::u16_be("PlayerId", 4),
            FieldSpec::byte("PointX", 6),
            FieldSpec::byte("PointY", 7),
            FieldSpec::byte("Rotation", 8),
        ])
        .sent_when("An object in the view range used an area skill.")
        .caused_reaction("The client plays the skill effect at the target point.");

pub static SKILL_LIST_UPDATE: PacketDescriptor =
    PacketDescriptor::new("SkillListUpdate", HeaderSpec::c1_sub(0xF3, 0x11))
        .variant("SkillListUpdate", ClientVersion::V097)
        .fields(&[FieldSpec::byte("Count", 4)])
        .groups(&[GroupSpec::fixed("Skills", "Count", 6, 4).fields(&[
            FieldSpec::byte("SkillIndex", 0),
            FieldSpec::u16_le("SkillNumber", 1),
            FieldSpec::byte("SkillLevel", 3),
        ])])
        .sent_when("The character entered the game or its skill list changed.")
        .caused_reaction("The client rebuilds the skill bar.");

pub static SKILL_LIST_UPDATE_075: PacketDescriptor =
    PacketDescriptor::new("SkillListUpdate075", HeaderSpec::c1_sub(0xF3, 0x11))
        .variant("SkillListUpdate", ClientVersion::V075)
        .fields(&[FieldSpec::byte("Count", 4)])
        .groups(&[GroupSpec::fixed("Skills", "Count", 5, 3).fields(&[
            FieldSpec::byte("SkillIndex", 0),
            FieldSpec::byte("SkillNumber", 1),
            FieldSpec::byte("SkillLevel", 2),
        ])])
        .sent_when("The character entered the game or its skill list changed.")
        .caused_reaction("The client rebuilds the skill bar.");

pub static MAGIC_EFFECT_STATUS: PacketDescriptor =
    PacketDescriptor::new("MagicEffectStatus", HeaderSpec::c1(0x07))
        .fixed(7)
        .fields(&[
            FieldSpec::flag("IsActive", 3, 0),
            FieldSpec::u16_be("PlayerId", 4),
            FieldSpec::byte("EffectId", 6),
        ])
        .sent_when("A buff or debuff was added to or removed from an object.")
        .caused_reaction("The client shows or hides the effect.");

pub static ELEMENTAL_DAMAGE: PacketDescriptor =
    PacketDescriptor::new("ElementalDamage", HeaderSpec::c1(0xD8))
        .variant("ElementalDamage", ClientVersion::Season6)
        .fixed(10)
        .fields(&[
            FieldSpec::u16_be("ObjectId", 3),
            FieldSpec::byte("Element", 5).labeled(&enums::ELEMENT),
            FieldSpec::u32_le("Damage", 6),
        ])
        .sent_when("An object took damage of an elemental attack.")
        .caused_reaction("The client shows the damage in the colour of the element.");

/// Health values are big-endian here, unlike the character stats.
pub static MONSTER_LIFE_UPDATE: PacketDescriptor =
    PacketDescriptor::new("MonsterLifeUpdate", HeaderSpec::c1_sub(0xEC, 0x10))
        .variant("MonsterLifeUpdate", ClientVersion::Season6)
        .fixed(14)
        .fields(&[
            FieldSpec::u16_be("ObjectId", 4),
            FieldSpec::u32_be("MaximumHealth", 6),
            FieldSpec::u32_be("CurrentHealth", 10),
        ])
        .sent_when("The health of the targeted monster changed.")
        .caused_reaction("The client updates the health bar of the target.");
