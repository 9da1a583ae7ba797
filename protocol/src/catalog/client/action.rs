//! Chat, movement, fighting and map travel.

use crate::catalog::enums;
use crate::descriptor::PacketDescriptor;
use crate::field::FieldSpec;
use crate::header::HeaderSpec;
use crate::version::ClientVersion;

pub static PUBLIC_CHAT_MESSAGE: PacketDescriptor =
    PacketDescriptor::new("PublicChatMessage", HeaderSpec::c1(0x00))
        .client()
        .fields(&[
            FieldSpec::string("Character", 3, 10),
            FieldSpec::trailing_string("Message", 13),
        ])
        .sent_when("The player sent a chat message.")
        .caused_reaction("The server forwards the message to the players in range, the party or the guild.");

pub static WHISPER_MESSAGE_REQUEST: PacketDescriptor =
    PacketDescriptor::new("WhisperMessageRequest", HeaderSpec::c1(0x02))
        .client()
        .fields(&[
            FieldSpec::string("ReceiverName", 3, 10),
            FieldSpec::trailing_string("Message", 13),
        ])
        .sent_when("The player whispered to another player.")
        .caused_reaction("The server forwards the whisper to the receiver.");

/// Rotation and step count share byte 5, directions follow as nibbles.
pub static WALK_REQUEST: PacketDescriptor =
    PacketDescriptor::new("WalkRequest", HeaderSpec::c1(0xD4))
        .variant("WalkRequest", ClientVersion::V095)
        .client()
        .fixed(13)
        .fields(&[
            FieldSpec::byte("SourceX", 3),
            FieldSpec::byte("SourceY", 4),
            FieldSpec::bits("TargetRotation", 5, 4, 4),
            FieldSpec::bits("StepCount", 5, 0, 4),
            FieldSpec::binary("Directions", 6, 7),
        ])
        .sent_when("The player clicked on a reachable spot of the map.")
        .caused_reaction("The server moves the character and tells the players in range.");

pub static WALK_REQUEST_075: PacketDescriptor =
    PacketDescriptor::new("WalkRequest075", HeaderSpec::c1(0x10))
        .variant("WalkRequest", ClientVersion::V075)
        .client()
        .fixed(13)
        .fields(&[
            FieldSpec::byte("SourceX", 3),
            FieldSpec::byte("SourceY", 4),
            FieldSpec::bits("TargetRotation", 5, 4, 4),
            FieldSpec::bits("StepCount", 5, 0, 4),
            FieldSpec::binary("Directions", 6, 7),
        ])
        .sent_when("The player clicked on a reachable spot of the map.")
        .caused_reaction("The server moves the character and tells the players in range.");

pub static INSTANT_MOVE_REQUEST: PacketDescriptor =
    PacketDescriptor::new("InstantMoveRequest", HeaderSpec::c1(0x15))
        .client()
        .fixed(5)
        .fields(&[FieldSpec::byte("TargetX", 3), FieldSpec::byte("TargetY", 4)])
        .sent_when("The character was pushed or teleported by a skill.")
        .caused_reaction("The server updates the position of the character.");

pub static ANIMATION_REQUEST: PacketDescriptor =
    PacketDescriptor::new("AnimationRequest", HeaderSpec::c1(0x18))
        .client()
        .fixed(7)
        .fields(&[
            FieldSpec::byte("Rotation", 3),
            FieldSpec::byte("AnimationNumber", 4),
            FieldSpec::u16_be("TargetId", 5),
        ])
        .sent_when("The player performed an emote or turned around.")
        .caused_reaction("The server shows the animation to the players in range.");

pub static HIT_REQUEST: PacketDescriptor = PacketDescriptor::new("HitRequest", HeaderSpec::c1(0x11))
    .client()
    .fixed(7)
    .fields(&[
        FieldSpec::u16_be("TargetId", 3),
        FieldSpec::byte("AttackAnimation", 5),
        FieldSpec::byte("LookingDirection", 6),
    ])
    .sent_when("The player attacked a target without a skill.")
    .caused_reaction("The server calculates the damage and sends the hit.");

pub static TARGETED_SKILL: PacketDescriptor =
    PacketDescriptor::new("TargetedSkill", HeaderSpec::c3(0x19))
        .variant("TargetedSkill", ClientVersion::V097)
        .client()
        .fixed(7)
        .fields(&[FieldSpec::u16_be("SkillId", 3), FieldSpec::u16_be("TargetId", 5)])
        .sent_when("The player used a skill on a target.")
        .caused_reaction("The server applies the skill and shows its animation.");

pub static TARGETED_SKILL_075: PacketDescriptor =
    PacketDescriptor::new("TargetedSkill075", HeaderSpec::c3(0x19))
        .variant("TargetedSkill", ClientVersion::V075)
        .client()
        .fixed(6)
        .fields(&[FieldSpec::byte("SkillId", 3), FieldSpec::u16_be("TargetId", 4)])
        .sent_when("The player used a skill on a target.")
        .caused_reaction("The server applies the skill and shows its animation.");

pub static AREA_SKILL: PacketDescriptor = PacketDescriptor::new("AreaSkill", HeaderSpec::c1(0x1E))
    .client()
    .fixed(10)
    .fields(&[
        FieldSpec::u16_be("SkillId", 3),
        FieldSpec::byte("TargetX", 5),
        FieldSpec::byte("TargetY", 6),
        FieldSpec::byte("Rotation", 7),
        FieldSpec::u16_be("ExtraTargetId", 8),
    ])
    .sent_when("The player used a skill on an area.")
    .caused_reaction("The server applies the skill to the objects of the area.");

pub static ENTER_GATE_REQUEST: PacketDescriptor =
    PacketDescriptor::new("EnterGateRequest", HeaderSpec::c3(0x1C))
        .client()
        .fixed(7)
        .fields(&[
            FieldSpec::u16_le("GateNumber", 3),
            FieldSpec::byte("TeleportTargetX", 5),
            FieldSpec::byte("TeleportTargetY", 6),
        ])
        .sent_when("The character walked into a gate or was teleported by a skill.")
        .caused_reaction("The server moves the character and sends the map change.");

pub static WARP_COMMAND_REQUEST: PacketDescriptor =
    PacketDescriptor::new("WarpCommandRequest", HeaderSpec::c1_sub(0x8E, 0x02))
        .client()
        .fixed(10)
        .fields(&[
            FieldSpec::u32_le("CommandKey", 4),
            FieldSpec::u16_le("WarpInfoIndex", 8),
        ])
        .sent_when("The player selected a destination of the warp list.")
        .caused_reaction("The server warps the character if the requirements are met.");

pub static EVENT_REMAINING_TIME_REQUEST: PacketDescriptor =
    PacketDescriptor::new("EventRemainingTimeRequest", HeaderSpec::c1(0x91))
        .client()
        .fixed(5)
        .fields(&[
            FieldSpec::byte("EventType", 3).labeled(&enums::EVENT_TYPE),
            FieldSpec::byte("ItemLevel", 4),
        ])
        .sent_when("The player used an event ticket.")
        .caused_reaction("The server sends the time until the event opens.");

pub static PET_COMMAND_REQUEST: PacketDescriptor =
    PacketDescriptor::new("PetCommandRequest", HeaderSpec::c1(0xA7))
        .variant("PetCommandRequest", ClientVersion::V097)
        .client()
        .fixed(7)
        .fields(&[
            FieldSpec::byte("PetType", 3).labeled(&enums::PET_TYPE),
            FieldSpec::byte("CommandMode", 4).labeled(&enums::PET_COMMAND_MODE),
            FieldSpec::u16_be("TargetId", 5),
        ])
        .sent_when("The player gave a command to the dark raven.")
        .caused_reaction("The server changes the behaviour of the pet.");

pub static PET_INFO_REQUEST: PacketDescriptor =
    PacketDescriptor::new("PetInfoRequest", HeaderSpec::c1(0xA9))
        .variant("PetInfoRequest", ClientVersion::V097)
        .client()
        .fixed(6)
        .fields(&[
            FieldSpec::byte("Pet", 3).labeled(&enums::PET_TYPE),
            FieldSpec::byte("Storage", 4).labeled(&enums::PET_STORAGE),
            FieldSpec::byte("ItemSlot", 5),
        ])
        .sent_when("The player hovered over a pet item.")
        .caused_reaction("The server sends the pet information.");

pub static LEGACY_QUEST_STATE_REQUEST: PacketDescriptor =
    PacketDescriptor::new("LegacyQuestStateRequest", HeaderSpec::c1(0xA0))
        .client()
        .fixed(3)
        .sent_when("The player opened the quest window.")
        .caused_reaction("The server sends the quest state list.");

pub static LEGACY_QUEST_STATE_SET_REQUEST: PacketDescriptor =
    PacketDescriptor::new("LegacyQuestStateSetRequest", HeaderSpec::c1(0xA2))
        .client()
        .fixed(5)
        .fields(&[
            FieldSpec::byte("QuestIndex", 3),
            FieldSpec::bits("NewState", 4, 0, 2).labeled(&enums::LEGACY_QUEST_STATE),
        ])
        .sent_when("The player accepted or finished a quest at the quest NPC.")
        .caused_reaction("The server updates the quest and may grant the reward.");

pub static OFF_TRADE_REQUEST: PacketDescriptor =
    PacketDescriptor::new("OffTradeRequest", HeaderSpec::c1_sub(0xFB, 0x01))
        .variant("OffTradeRequest", ClientVersion::Season6)
        .client()
        .fixed(8)
        .fields(&[FieldSpec::i32_le("Type", 4)])
        .sent_when("The player chose to keep the personal shop open while offline.")
        .caused_reaction("The server detaches the shop from the connection.");
