//! Minigames and map events: Devil Square, Blood Castle, Chaos Castle, the
//! Illusion Temple, Kanturu and Crywolf.

use crate::catalog::enums;
use crate::descriptor::PacketDescriptor;
use crate::field::FieldSpec;
use crate::group::GroupSpec;
use crate::header::HeaderSpec;
use crate::version::ClientVersion;

pub static DEVIL_SQUARE_ENTER_RESULT: PacketDescriptor =
    PacketDescriptor::new("DevilSquareEnterResult", HeaderSpec::c1(0x90))
        .fixed(4)
        .fields(&[FieldSpec::byte("Result", 3).labeled(&enums::MINI_GAME_ENTER_RESULT)])
        .sent_when("The player asked to enter Devil Square.")
        .caused_reaction("On success the client waits for the teleport, otherwise it shows the reason.");

pub static DEVIL_SQUARE_SCORE_TABLE: PacketDescriptor =
    PacketDescriptor::new("DevilSquareScoreTable", HeaderSpec::c1(0x93))
        .fields(&[FieldSpec::byte("PlayerRank", 3), FieldSpec::byte("ResultCount", 4)])
        .groups(&[GroupSpec::fixed("Results", "ResultCount", 5, 24).fields(&[
            FieldSpec::string("Name", 0, 10),
            FieldSpec::u32_le("TotalScore", 12),
            FieldSpec::u32_le("BonusExperience", 16),
            FieldSpec::u32_le("BonusMoney", 20),
        ])])
        .sent_when("A Devil Square round ended.")
        .caused_reaction("The client shows the score table of the round.");

pub static BLOOD_CASTLE_ENTER_RESULT: PacketDescriptor =
    PacketDescriptor::new("BloodCastleEnterResult", HeaderSpec::c1(0x9A))
        .fixed(4)
        .fields(&[FieldSpec::byte("Result", 3).labeled(&enums::MINI_GAME_ENTER_RESULT)])
        .sent_when("The player asked to enter Blood Castle.")
        .caused_reaction("On success the client waits for the teleport, otherwise it shows the reason.");

pub static BLOOD_CASTLE_STATE: PacketDescriptor =
    PacketDescriptor::new("BloodCastleState", HeaderSpec::c1(0x9B))
        .fixed(13)
        .fields(&[
            FieldSpec::byte("State", 3).labeled(&enums::BLOOD_CASTLE_STAGE),
            FieldSpec::u16_le("RemainingSeconds", 4),
            FieldSpec::u16_le("MaxKillMonster", 6),
            FieldSpec::u16_le("CurrentKillMonster", 8),
            FieldSpec::u16_le("QuestItemOwnerId", 10),
            FieldSpec::byte("QuestItemLevel", 12),
        ])
        .sent_when("The state of the running Blood Castle changed, or its timer ticked.")
        .caused_reaction("The client updates the Blood Castle status panel.");

pub static BLOOD_CASTLE_SCORE: PacketDescriptor =
    PacketDescriptor::new("BloodCastleScore", HeaderSpec::c1(0x9D))
        .fixed(28)
        .fields(&[
            FieldSpec::flag("Success", 3, 0),
            FieldSpec::byte("Type", 4),
            FieldSpec::string("Name", 5, 10),
            FieldSpec::u32_le("TotalScore", 16),
            FieldSpec::u32_le("BonusExperience", 20),
            FieldSpec::u32_le("BonusMoney", 24),
        ])
        .sent_when("A Blood Castle round ended for the player.")
        .caused_reaction("The client shows whether the castle was cleared and the reward.");

pub static CHAOS_CASTLE_ENTER_RESULT: PacketDescriptor =
    PacketDescriptor::new("ChaosCastleEnterResult", HeaderSpec::c1_sub(0xAF, 0x01))
        .variant("ChaosCastleEnterResult", ClientVersion::Season6)
        .fixed(5)
        .fields(&[FieldSpec::byte("Result", 4).labeled(&enums::MINI_GAME_ENTER_RESULT)])
        .sent_when("The player asked to enter Chaos Castle.")
        .caused_reaction("On success the client waits for the teleport, otherwise it shows the reason.");

pub static CHAOS_CASTLE_STATE: PacketDescriptor =
    PacketDescriptor::new("ChaosCastleState", HeaderSpec::c1_sub(0xAF, 0x02))
        .variant("ChaosCastleState", ClientVersion::Season6)
        .fixed(12)
        .fields(&[
            FieldSpec::byte("State", 4),
            FieldSpec::u16_le("RemainingSeconds", 6),
            FieldSpec::u16_le("MaxMonsters", 8),
            FieldSpec::u16_le("CurrentMonsters", 10),
        ])
        .sent_when("The state of the running Chaos Castle changed, or its timer ticked.")
        .caused_reaction("The client updates the Chaos Castle status panel.");

pub static ILLUSION_TEMPLE_ENTER_RESULT: PacketDescriptor =
    PacketDescriptor::new("IllusionTempleEnterResult", HeaderSpec::c1_sub(0xBF, 0x03))
        .variant("IllusionTempleEnterResult", ClientVersion::Season6)
        .fixed(5)
        .fields(&[FieldSpec::byte("Result", 4).labeled(&enums::MINI_GAME_ENTER_RESULT)])
        .sent_when("The player asked to enter the Illusion Temple.")
        .caused_reaction("On success the client waits for the teleport, otherwise it shows the reason.");

pub static ILLUSION_TEMPLE_SKILL_POINTS: PacketDescriptor =
    PacketDescriptor::new("IllusionTempleSkillPoints", HeaderSpec::c1_sub(0xBF, 0x06))
        .variant("IllusionTempleSkillPoints", ClientVersion::Season6)
        .fixed(5)
        .fields(&[FieldSpec::byte("SkillPoints", 4)])
        .sent_when("The player earned or spent Illusion Temple skill points.")
        .caused_reaction("The client shows the new amount of skill points.");

pub static ILLUSION_TEMPLE_STATE: PacketDescriptor =
    PacketDescriptor::new("IllusionTempleState", HeaderSpec::c1_sub(0xBF, 0x09))
        .variant("IllusionTempleState", ClientVersion::Season6)
        .fixed(6)
        .fields(&[
            FieldSpec::byte("TempleNumber", 4),
            FieldSpec::byte("State", 5).labeled(&enums::ILLUSION_TEMPLE_PHASE),
        ])
        .sent_when("The Illusion Temple event moved to another phase.")
        .caused_reaction("The client shows the phase and opens or closes the event panel.");

pub static KANTURU_STATE_INFO: PacketDescriptor =
    PacketDescriptor::new("KanturuStateInfo", HeaderSpec::c1_sub(0xD1, 0x00))
        .variant("KanturuStateInfo", ClientVersion::Season6)
        .fixed(12)
        .fields(&[
            FieldSpec::byte("State", 4).labeled(&enums::KANTURU_STATE),
            FieldSpec::byte("DetailState", 5),
            FieldSpec::flag("CanEnter", 6, 0),
            FieldSpec::byte("UserCount", 7),
            FieldSpec::u32_le("RemainingTime", 8),
        ])
        .sent_when("The player talked to the Kanturu gateway NPC.")
        .caused_reaction("The client shows the entrance dialog with the current state.");

pub static KANTURU_ENTER_RESULT: PacketDescriptor =
    PacketDescriptor::new("KanturuEnterResult", HeaderSpec::c1_sub(0xD1, 0x01))
        .variant("KanturuEnterResult", ClientVersion::Season6)
        .fixed(5)
        .fields(&[FieldSpec::byte("Result", 4)])
        .sent_when("The player asked to enter the Kanturu refinery.")
        .caused_reaction("On failure the client shows the reason.");

pub static KANTURU_MONSTER_AND_USER_COUNT: PacketDescriptor =
    PacketDescriptor::new("KanturuMonsterAndUserCount", HeaderSpec::c1_sub(0xD1, 0x03))
        .variant("KanturuMonsterAndUserCount", ClientVersion::Season6)
        .fixed(6)
        .fields(&[FieldSpec::byte("MonsterCount", 4), FieldSpec::byte("UserCount", 5)])
        .sent_when("Monsters or players inside the Kanturu battle were added or removed.")
        .caused_reaction("The client updates the counters of the battle panel.");

pub static CRYWOLF_STATE_UPDATE: PacketDescriptor =
    PacketDescriptor::new("CrywolfStateUpdate", HeaderSpec::c1_sub(0xBD, 0x00))
        .variant("CrywolfStateUpdate", ClientVersion::Season6)
        .fixed(6)
        .fields(&[
            FieldSpec::byte("OccupationState", 4),
            FieldSpec::byte("State", 5).labeled(&enums::CRYWOLF_STATE),
        ])
        .sent_when("The Crywolf event changed its state.")
        .caused_reaction("The client shows the state of the Crywolf fortress.");

/// Contract counts of the five altars, one per four bytes.
pub static CRYWOLF_STATUE_AND_ALTAR_INFO: PacketDescriptor =
    PacketDescriptor::new("CrywolfStatueAndAltarInfo", HeaderSpec::c1_sub(0xBD, 0x02))
        .variant("CrywolfStatueAndAltarInfo", ClientVersion::Season6)
        .fixed(28)
        .fields(&[
            FieldSpec::u32_le("StatueHealth", 4),
            FieldSpec::binary("AltarData", 8, 20),
        ])
        .sent_when("The health of the wolf statue or the altar contracts changed.")
        .caused_reaction("The client updates the statue and altar displays.");

pub static CRYWOLF_BENEFIT: PacketDescriptor =
    PacketDescriptor::new("CrywolfBenefit", HeaderSpec::c1_sub(0xBD, 0x09))
        .variant("CrywolfBenefit", ClientVersion::Season6)
        .fixed(5)
        .fields(&[FieldSpec::flag("Active", 4, 0)])
        .sent_when("The Crywolf outcome granted or removed the benefit for the server.")
        .caused_reaction("The client shows or hides the benefit icon.");
