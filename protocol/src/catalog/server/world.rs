//! Chat, server notices, map events, quests, pets and server extensions.

use crate::catalog::enums;
use crate::descriptor::PacketDescriptor;
use crate::field::FieldSpec;
use crate::group::GroupSpec;
use crate::header::HeaderSpec;
use crate::version::ClientVersion;

pub static CHAT_MESSAGE: PacketDescriptor =
    PacketDescriptor::new("ChatMessage", HeaderSpec::c1(0x00))
        .fields(&[
            FieldSpec::string("Sender", 3, 10),
            FieldSpec::trailing_string("Message", 13),
        ])
        .sent_when("A player in the view range sent a public chat message.")
        .caused_reaction("The client shows the message above the sender and in the chat log.");

pub static OBJECT_MESSAGE: PacketDescriptor =
    PacketDescriptor::new("ObjectMessage", HeaderSpec::c1(0x01))
        .fields(&[
            FieldSpec::u16_be("ObjectId", 3),
            FieldSpec::trailing_string("Message", 5),
        ])
        .sent_when("An object, usually an NPC, said something.")
        .caused_reaction("The client shows the message above the object.");

pub static WHISPER_MESSAGE: PacketDescriptor =
    PacketDescriptor::new("WhisperMessage", HeaderSpec::c1(0x02))
        .fields(&[
            FieldSpec::string("Sender", 3, 10),
            FieldSpec::trailing_string("Message", 13),
        ])
        .sent_when("Another player whispered to the receiving player.")
        .caused_reaction("The client shows the whisper in the chat log.");

pub static CHECKSUM_REQUEST: PacketDescriptor =
    PacketDescriptor::new("ChecksumRequest", HeaderSpec::c1(0x03))
        .fixed(5)
        .fields(&[FieldSpec::u16_le("Key", 3)])
        .sent_when("The server wants the client to prove the integrity of its executable.")
        .caused_reaction("The client answers with the checksum for the key.");

pub static MAP_EVENT_STATE: PacketDescriptor =
    PacketDescriptor::new("MapEventState", HeaderSpec::c1(0x0B))
        .fixed(5)
        .fields(&[
            FieldSpec::flag("Enable", 3, 0),
            FieldSpec::byte("Event", 4).labeled(&enums::MAP_EVENT_TYPE),
        ])
        .sent_when("A map event like a dragon invasion started or stopped.")
        .caused_reaction("The client shows or hides the event effects.");

pub static SERVER_MESSAGE: PacketDescriptor =
    PacketDescriptor::new("ServerMessage", HeaderSpec::c1(0x0D))
        .fields(&[
            FieldSpec::byte("Type", 3).labeled(&enums::SERVER_MESSAGE_TYPE),
            FieldSpec::trailing_string("Message", 4),
        ])
        .sent_when("The server or a game master sent a notice.")
        .caused_reaction("The client shows the notice in the style of its type.");

/// Weather in the high nibble, its intensity in the low one.
pub static WEATHER_STATUS_UPDATE: PacketDescriptor =
    PacketDescriptor::new("WeatherStatusUpdate", HeaderSpec::c1(0x0F))
        .fixed(4)
        .fields(&[
            FieldSpec::bits("Weather", 3, 4, 4),
            FieldSpec::bits("Variation", 3, 0, 4),
        ])
        .sent_when("The weather of the current map changed.")
        .caused_reaction("The client renders the new weather.");

pub static EVENT_REMAINING_TIME: PacketDescriptor =
    PacketDescriptor::new("EventRemainingTime", HeaderSpec::c1(0x91))
        .fixed(7)
        .fields(&[
            FieldSpec::byte("EventType", 3).labeled(&enums::EVENT_TYPE),
            FieldSpec::u16_le("RemainingEnterTime", 4),
            FieldSpec::byte("UserCount", 6),
        ])
        .sent_when("The player asked how long until an event can be entered.")
        .caused_reaction("The client shows the remaining time.");

/// Four two-bit quest states per byte, quest 0 in the lowest bits.
pub static LEGACY_QUEST_STATE_LIST: PacketDescriptor =
    PacketDescriptor::new("LegacyQuestStateList", HeaderSpec::c1(0xA0))
        .fields(&[FieldSpec::byte("QuestCount", 3)])
        .groups(&[GroupSpec::fixed("QuestStates", "QuestCount", 4, 1).fields(&[
            FieldSpec::bits("First", 0, 0, 2).labeled(&enums::LEGACY_QUEST_STATE),
            FieldSpec::bits("Second", 0, 2, 2).labeled(&enums::LEGACY_QUEST_STATE),
            FieldSpec::bits("Third", 0, 4, 2).labeled(&enums::LEGACY_QUEST_STATE),
            FieldSpec::bits("Fourth", 0, 6, 2).labeled(&enums::LEGACY_QUEST_STATE),
        ])])
        .sent_when("The character entered the game or asked for its quest states.")
        .caused_reaction("The client updates the quest window.");

pub static LEGACY_QUEST_STATE_DIALOG: PacketDescriptor =
    PacketDescriptor::new("LegacyQuestStateDialog", HeaderSpec::c1(0xA1))
        .fixed(5)
        .fields(&[
            FieldSpec::byte("QuestIndex", 3),
            FieldSpec::bits("State", 4, 0, 2).labeled(&enums::LEGACY_QUEST_STATE),
        ])
        .sent_when("The player talked to a quest NPC.")
        .caused_reaction("The client opens the quest dialog for the state.");

pub static LEGACY_QUEST_REWARD: PacketDescriptor =
    PacketDescriptor::new("LegacyQuestReward", HeaderSpec::c1(0xA3))
        .fixed(7)
        .fields(&[
            FieldSpec::u16_be("PlayerId", 3),
            FieldSpec::byte("Reward", 5),
            FieldSpec::byte("Count", 6),
        ])
        .sent_when("A player in the view range received a quest reward.")
        .caused_reaction("The client plays the reward effect.");

pub static LEGACY_SET_QUEST_STATE_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("LegacySetQuestStateResponse", HeaderSpec::c1(0xA2))
        .fixed(6)
        .fields(&[
            FieldSpec::byte("QuestIndex", 3),
            FieldSpec::byte("Result", 4),
            FieldSpec::byte("NewState", 5),
        ])
        .sent_when("The player accepted or finished a class quest.")
        .caused_reaction("The client updates the state of the quest.");

/// Five pairs of monster number and kill count, both little-endian `u32`.
pub static LEGACY_QUEST_MONSTER_KILL_INFO: PacketDescriptor =
    PacketDescriptor::new("LegacyQuestMonsterKillInfo", HeaderSpec::c1(0xA4))
        .variant("LegacyQuestMonsterKillInfo", ClientVersion::Season6)
        .fixed(45)
        .fields(&[
            FieldSpec::byte("Result", 3),
            FieldSpec::byte("QuestIndex", 4),
            FieldSpec::binary("MonsterKills", 5, 40),
        ])
        .sent_when("The player killed a monster counted by the active class quest.")
        .caused_reaction("The client shows the kill counts in the quest dialog.");

pub static PET_INFO_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("PetInfoResponse", HeaderSpec::c1(0xA9))
        .variant("PetInfoResponse", ClientVersion::V097)
        .fixed(12)
        .fields(&[
            FieldSpec::byte("Pet", 3).labeled(&enums::PET_TYPE),
            FieldSpec::byte("Storage", 4).labeled(&enums::PET_STORAGE),
            FieldSpec::byte("ItemSlot", 5),
            FieldSpec::byte("Level", 6),
            FieldSpec::u32_le("Experience", 7),
            FieldSpec::byte("Health", 11),
        ])
        .sent_when("The player asked for the information of a pet item.")
        .caused_reaction("The client shows the pet tooltip.");

pub static GENS_BATTLE_INFO: PacketDescriptor =
    PacketDescriptor::new("GensBattleInfo", HeaderSpec::c1_sub(0xEC, 0x13))
        .variant("GensBattleInfo", ClientVersion::Season6)
        .fixed(246)
        .fields(&[
            FieldSpec::byte("BattleMapCount", 4),
            FieldSpec::byte("MoveIndexCount", 5),
            FieldSpec::binary("BattleMaps", 6, 120),
            FieldSpec::binary("MoveIndexes", 126, 120),
        ])
        .sent_when("The character entered the game.")
        .caused_reaction("The client marks the maps where gens battles are allowed.");

pub static GENS_JOIN_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("GensJoinResponse", HeaderSpec::c1_sub(0xF8, 0x02))
        .variant("GensJoinResponse", ClientVersion::Season6)
        .fixed(6)
        .fields(&[
            FieldSpec::byte("Result", 4),
            FieldSpec::byte("Influence", 5).labeled(&enums::GENS_TYPE),
        ])
        .sent_when("The player asked to join a gens.")
        .caused_reaction("On success the client shows the gens mark of the character.");

pub static GENS_LEAVE_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("GensLeaveResponse", HeaderSpec::c1_sub(0xF8, 0x04))
        .variant("GensLeaveResponse", ClientVersion::Season6)
        .fixed(5)
        .fields(&[FieldSpec::byte("Result", 4)])
        .sent_when("The player asked to leave the gens.")
        .caused_reaction("On success the client removes the gens mark.");

pub static GENS_RANKING: PacketDescriptor =
    PacketDescriptor::new("GensRanking", HeaderSpec::c1_sub(0xF8, 0x07))
        .variant("GensRanking", ClientVersion::Season6)
        .fixed(20)
        .fields(&[
            FieldSpec::byte("Influence", 4).labeled(&enums::GENS_TYPE),
            FieldSpec::u32_le("Reputation", 8),
            FieldSpec::u32_le("Ranking", 12),
            FieldSpec::u32_le("Class", 16),
        ])
        .sent_when("The player opened the gens information window.")
        .caused_reaction("The client shows the reputation and rank of the character.");

pub static MU_HELPER_STATUS: PacketDescriptor =
    PacketDescriptor::new("MuHelperStatus", HeaderSpec::c1_sub(0xBF, 0x51))
        .variant("MuHelperStatus", ClientVersion::Season6)
        .fixed(16)
        .fields(&[
            FieldSpec::flag("ConsumeMoney", 4, 0),
            FieldSpec::u32_le("Money", 8),
            FieldSpec::byte("Status", 12).labeled(&enums::MU_HELPER_STATE),
        ])
        .sent_when("The helper was started or stopped, or it charged money while running.")
        .caused_reaction("The client updates the helper controls and the charged amount.");

/// Opaque blob the client saved earlier; the server only stores it.
pub static MU_HELPER_CONFIGURATION: PacketDescriptor =
    PacketDescriptor::new("MuHelperConfiguration", HeaderSpec::c2(0xAE))
        .variant("MuHelperConfiguration", ClientVersion::Season6)
        .fixed(261)
        .fields(&[FieldSpec::binary("HelperData", 4, 257)])
        .sent_when("The character entered the game.")
        .caused_reaction("The client restores the saved helper settings.");

pub static OFF_TRADE_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("OffTradeResponse", HeaderSpec::c1_sub(0xFB, 0x01))
        .variant("OffTradeResponse", ClientVersion::Season6)
        .fixed(8)
        .fields(&[FieldSpec::i32_le("Type", 4)])
        .sent_when("The player switched the personal shop to offline trading.")
        .caused_reaction("The client disconnects while the shop stays open.");

pub static SHOP_ACTIVE: PacketDescriptor =
    PacketDescriptor::new("ShopActive", HeaderSpec::c1_sub(0xFB, 0x02))
        .variant("ShopActive", ClientVersion::Season6)
        .fixed(12)
        .fields(&[FieldSpec::i32_le("Active", 4), FieldSpec::i32_le("Type", 8)])
        .sent_when("The personal shop of the player was opened or closed.")
        .caused_reaction("The client toggles the shop controls.");

pub static PING: PacketDescriptor = PacketDescriptor::new("Ping", HeaderSpec::c1_sub(0xFB, 0x03))
    .variant("Ping", ClientVersion::Season6)
    .fixed(4)
    .sent_when("The connection was idle for a while.")
    .caused_reaction("The client keeps the connection alive.");
