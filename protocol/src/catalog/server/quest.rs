//! Quest system of season 6 clients.
//!
//! Quests are addressed by their group (usually the NPC) and their number
//! inside the group.

use crate::catalog::enums;
use crate::descriptor::PacketDescriptor;
use crate::field::FieldSpec;
use crate::group::GroupSpec;
use crate::header::HeaderSpec;
use crate::version::ClientVersion;

pub static QUEST_EVENT_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("QuestEventResponse", HeaderSpec::c1_sub(0xF6, 0x03))
        .variant("QuestEventResponse", ClientVersion::Season6)
        .fixed(8)
        .fields(&[
            FieldSpec::u16_le("QuestNumber", 4),
            FieldSpec::u16_le("QuestGroup", 6),
        ])
        .sent_when("The player asked for the quests of the running events.")
        .caused_reaction("The client shows the event quest in the quest dialog.");

pub static AVAILABLE_QUESTS: PacketDescriptor =
    PacketDescriptor::new("AvailableQuests", HeaderSpec::c1_sub(0xF6, 0x0A))
        .variant("AvailableQuests", ClientVersion::Season6)
        .fields(&[
            FieldSpec::u16_le("QuestNpcNumber", 4),
            FieldSpec::u16_le("QuestCount", 6),
        ])
        .groups(&[GroupSpec::fixed("Quests", "QuestCount", 8, 4).fields(&[
            FieldSpec::u16_le("Number", 0),
            FieldSpec::u16_le("Group", 2),
        ])])
        .sent_when("The player talked to an NPC which offers quests.")
        .caused_reaction("The client lists the quests the player can start.");

pub static QUEST_STEP_INFO: PacketDescriptor =
    PacketDescriptor::new("QuestStepInfo", HeaderSpec::c1_sub(0xF6, 0x0B))
        .variant("QuestStepInfo", ClientVersion::Season6)
        .fixed(8)
        .fields(&[
            FieldSpec::u16_le("QuestNumber", 4),
            FieldSpec::u16_le("QuestGroup", 6),
        ])
        .sent_when("The player selected a quest, or a quest advanced to its next step.")
        .caused_reaction("The client shows the dialog text of the step.");

/// Conditions of an accepted quest with the progress made so far.
pub static QUEST_PROGRESS: PacketDescriptor =
    PacketDescriptor::new("QuestProgress", HeaderSpec::c1_sub(0xF6, 0x0C))
        .variant("QuestProgress", ClientVersion::Season6)
        .fields(&[
            FieldSpec::u16_le("QuestNumber", 4),
            FieldSpec::u16_le("QuestGroup", 6),
            FieldSpec::byte("ConditionCount", 8),
        ])
        .groups(&[GroupSpec::fixed("Conditions", "ConditionCount", 9, 26).fields(&[
            FieldSpec::u32_le("Type", 0).labeled(&enums::QUEST_CONDITION_TYPE),
            FieldSpec::u16_le("RequirementId", 4),
            FieldSpec::u32_le("RequiredCount", 6),
            FieldSpec::u32_le("CurrentCount", 10),
            FieldSpec::binary("RequiredItemData", 14, 12),
        ])])
        .sent_when("The player accepted a quest or asked for its progress.")
        .caused_reaction("The client shows the conditions and how far they are fulfilled.");

pub static QUEST_COMPLETION_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("QuestCompletionResponse", HeaderSpec::c1_sub(0xF6, 0x0D))
        .variant("QuestCompletionResponse", ClientVersion::Season6)
        .fixed(9)
        .fields(&[
            FieldSpec::u16_le("QuestNumber", 4),
            FieldSpec::u16_le("QuestGroup", 6),
            FieldSpec::flag("IsQuestCompleted", 8, 0),
        ])
        .sent_when("The player tried to complete a quest.")
        .caused_reaction("On completion the client removes the quest from the active list.");

pub static QUEST_CANCELLED: PacketDescriptor =
    PacketDescriptor::new("QuestCancelled", HeaderSpec::c1_sub(0xF6, 0x0F))
        .variant("QuestCancelled", ClientVersion::Season6)
        .fixed(8)
        .fields(&[
            FieldSpec::u16_le("QuestNumber", 4),
            FieldSpec::u16_le("QuestGroup", 6),
        ])
        .sent_when("The player cancelled an active quest.")
        .caused_reaction("The client removes the quest from the active list.");

pub static QUEST_STATE_LIST: PacketDescriptor =
    PacketDescriptor::new("QuestStateList", HeaderSpec::c1_sub(0xF6, 0x1A))
        .variant("QuestStateList", ClientVersion::Season6)
        .fields(&[FieldSpec::byte("QuestCount", 4)])
        .groups(&[GroupSpec::fixed("Quests", "QuestCount", 5, 4).fields(&[
            FieldSpec::u16_le("Number", 0),
            FieldSpec::u16_le("Group", 2),
        ])])
        .sent_when("The character entered the game, or the player opened the quest list.")
        .caused_reaction("The client shows the active quests.");
