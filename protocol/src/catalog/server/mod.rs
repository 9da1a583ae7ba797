//! Messages sent by the server.

mod combat;
mod events;
mod items;
mod quest;
mod scope;
mod session;
mod siege;
mod social;
mod world;

pub use combat::*;
pub use events::*;
pub use items::*;
pub use quest::*;
pub use scope::*;
pub use session::*;
pub use siege::*;
pub use social::*;
pub use world::*;

use crate::descriptor::PacketDescriptor;

/// Every server message, older layouts next to their current one.
pub static PACKETS: &[&PacketDescriptor] = &[
    &GAME_SERVER_ENTERED,
    &LOGIN_RESPONSE,
    &LOGOUT_RESPONSE,
    &CHARACTER_LIST,
    &CHARACTER_LIST_095,
    &CHARACTER_LIST_075,
    &CHARACTER_CREATION_RESULT,
    &CHARACTER_DELETE_RESPONSE,
    &CHARACTER_INFORMATION,
    &CHARACTER_INFORMATION_097,
    &CHARACTER_INFORMATION_075,
    &RESPAWN_AFTER_DEATH,
    &RESPAWN_AFTER_DEATH_075,
    &CHARACTER_LEVEL_UPDATE,
    &CHARACTER_STAT_INCREASE_RESPONSE,
    &MASTER_STATS_UPDATE,
    &MASTER_CHARACTER_LEVEL_UPDATE,
    &MASTER_SKILL_LEVEL_UPDATE,
    &MASTER_SKILL_LIST,
    &CHARACTER_CLASS_CREATION_UNLOCK,
    &EXTENDED_CHARACTER_STATS,
    &ATTACK_SPEED_UPDATE,
    &ADD_CHARACTERS_TO_SCOPE,
    &ADD_CHARACTERS_TO_SCOPE_095,
    &ADD_CHARACTERS_TO_SCOPE_075,
    &ADD_NPCS_TO_SCOPE,
    &ADD_NPCS_TO_SCOPE_075,
    &MAP_OBJECT_OUT_OF_SCOPE,
    &OBJECT_MOVED,
    &OBJECT_WALKED,
    &OBJECT_WALKED_075,
    &ITEMS_DROPPED,
    &ITEMS_DROPPED_075,
    &DROPPED_ITEMS_DISAPPEARED,
    &APPEARANCE_CHANGED,
    &APPEARANCE_CHANGED_075,
    &MAP_CHANGED,
    &MAP_CHANGED_075,
    &OBJECT_HEALTH_BARS,
    &OBJECT_HIT,
    &OBJECT_GOT_KILLED,
    &OBJECT_ANIMATION,
    &SHOW_EFFECT,
    &COMBO_ANIMATION,
    &EXPERIENCE_GAINED,
    &EXPERIENCE_GAINED_EXTENDED,
    &CURRENT_HEALTH_AND_SHIELD,
    &MAXIMUM_HEALTH_AND_SHIELD,
    &ITEM_CONSUMPTION_FAILED,
    &CURRENT_MANA_AND_ABILITY,
    &MAXIMUM_MANA_AND_ABILITY,
    &SKILL_ANIMATION,
    &SKILL_ANIMATION_075,
    &AREA_SKILL_ANIMATION,
    &AREA_SKILL_ANIMATION_075,
    &SKILL_LIST_UPDATE,
    &SKILL_LIST_UPDATE_075,
    &MAGIC_EFFECT_STATUS,
    &ELEMENTAL_DAMAGE,
    &MONSTER_LIFE_UPDATE,
    &CHARACTER_INVENTORY,
    &CHARACTER_INVENTORY_075,
    &INVENTORY_ITEM_UPGRADED,
    &ITEM_ADDED_TO_INVENTORY,
    &ITEM_DROP_RESPONSE,
    &ITEM_MOVED,
    &ITEM_REMOVED,
    &ITEM_DURABILITY_CHANGED,
    &FRUIT_CONSUMPTION_RESPONSE,
    &NPC_WINDOW_RESPONSE,
    &STORE_ITEM_LIST,
    &STORE_ITEM_LIST_075,
    &ITEM_BOUGHT,
    &NPC_ITEM_SELL_RESULT,
    &ITEM_REPAIRED,
    &VAULT_MONEY_UPDATE,
    &VAULT_CLOSED,
    &VAULT_PROTECTION_INFORMATION,
    &ITEM_CRAFTING_RESPONSE,
    &CRAFTING_DIALOG_CLOSED,
    &PLAYER_SHOP_SET_ITEM_PRICE_RESPONSE,
    &PLAYER_SHOP_OPEN_RESPONSE,
    &PLAYER_SHOP_CLOSED,
    &PLAYER_SHOP_ITEM_LIST,
    &PLAYER_SHOP_ITEM_SOLD,
    &PLAYER_SHOP_BUY_RESULT,
    &PLAYER_SHOPS,
    &TRADE_REQUEST,
    &TRADE_REQUEST_ANSWER,
    &TRADE_ITEM_REMOVED,
    &TRADE_ITEM_ADDED,
    &TRADE_MONEY_SET_RESPONSE,
    &TRADE_MONEY_UPDATE,
    &TRADE_BUTTON_STATE_CHANGED,
    &TRADE_FINISHED,
    &PARTY_REQUEST,
    &PARTY_LIST,
    &PARTY_LIST_075,
    &REMOVE_PARTY_MEMBER,
    &PARTY_HEALTH_UPDATE,
    &GUILD_JOIN_REQUEST,
    &GUILD_JOIN_RESPONSE,
    &GUILD_LIST,
    &GUILD_KICK_RESPONSE,
    &SHOW_GUILD_MASTER_DIALOG,
    &GUILD_CREATION_RESPONSE,
    &GUILD_WAR_REQUEST_RESULT,
    &GUILD_WAR_REQUEST,
    &GUILD_WAR_DECLARED,
    &GUILD_WAR_ENDED,
    &GUILD_WAR_SCORE_UPDATE,
    &ASSIGN_CHARACTER_TO_GUILD,
    &DUEL_START_RESPONSE,
    &DUEL_START_REQUEST,
    &DUEL_END,
    &DUEL_SCORE,
    &DUEL_HEALTH_UPDATE,
    &DUEL_STATUS,
    &DUEL_INIT,
    &DUEL_SPECTATOR_ADDED,
    &DUEL_SPECTATOR_REMOVED,
    &DUEL_SPECTATOR_LIST,
    &DUEL_FINISHED,
    &FRIEND_LIST,
    &FRIEND_ADDED,
    &FRIEND_REQUEST,
    &FRIEND_DELETED,
    &FRIEND_ONLINE_STATE_UPDATE,
    &FRIEND_INVITATION_RESULT,
    &LETTER_SEND_RESPONSE,
    &ADD_LETTER,
    &OPEN_LETTER,
    &REMOVE_LETTER,
    &CHAT_ROOM_CONNECTION_INFO,
    &CHAT_MESSAGE,
    &OBJECT_MESSAGE,
    &WHISPER_MESSAGE,
    &CHECKSUM_REQUEST,
    &MAP_EVENT_STATE,
    &SERVER_MESSAGE,
    &WEATHER_STATUS_UPDATE,
    &EVENT_REMAINING_TIME,
    &DEVIL_SQUARE_ENTER_RESULT,
    &DEVIL_SQUARE_SCORE_TABLE,
    &BLOOD_CASTLE_ENTER_RESULT,
    &BLOOD_CASTLE_STATE,
    &BLOOD_CASTLE_SCORE,
    &CHAOS_CASTLE_ENTER_RESULT,
    &CHAOS_CASTLE_STATE,
    &ILLUSION_TEMPLE_ENTER_RESULT,
    &ILLUSION_TEMPLE_SKILL_POINTS,
    &ILLUSION_TEMPLE_STATE,
    &KANTURU_STATE_INFO,
    &KANTURU_ENTER_RESULT,
    &KANTURU_MONSTER_AND_USER_COUNT,
    &CRYWOLF_STATE_UPDATE,
    &CRYWOLF_STATUE_AND_ALTAR_INFO,
    &CRYWOLF_BENEFIT,
    &CASTLE_SIEGE_STATUS,
    &CASTLE_SIEGE_REGISTRATION_RESULT,
    &CASTLE_SIEGE_UNREGISTER_RESULT,
    &CASTLE_SIEGE_REGISTERED_STATE,
    &CASTLE_SIEGE_MARK_REGISTERED,
    &CASTLE_SIEGE_DEFENSE_BUY_RESULT,
    &CASTLE_TAX_INFO,
    &CASTLE_GATE_OPERATE_RESULT,
    &CASTLE_GATE_STATE,
    &CROWN_SWITCH_STATE,
    &CASTLE_SIEGE_GUILD_LIST,
    &CASTLE_SIEGE_REGISTERED_GUILDS,
    &CASTLE_SIEGE_MINIMAP_DATA,
    &CASTLE_OWNER_LOGO,
    &LEGACY_QUEST_STATE_LIST,
    &LEGACY_QUEST_STATE_DIALOG,
    &LEGACY_QUEST_REWARD,
    &LEGACY_SET_QUEST_STATE_RESPONSE,
    &LEGACY_QUEST_MONSTER_KILL_INFO,
    &QUEST_EVENT_RESPONSE,
    &AVAILABLE_QUESTS,
    &QUEST_STEP_INFO,
    &QUEST_PROGRESS,
    &QUEST_COMPLETION_RESPONSE,
    &QUEST_CANCELLED,
    &QUEST_STATE_LIST,
    &PET_INFO_RESPONSE,
    &GENS_BATTLE_INFO,
    &GENS_JOIN_RESPONSE,
    &GENS_LEAVE_RESPONSE,
    &GENS_RANKING,
    &MU_HELPER_STATUS,
    &MU_HELPER_CONFIGURATION,
    &OFF_TRADE_RESPONSE,
    &SHOP_ACTIVE,
    &PING,
];
