//! Messages sent by the client.

mod account;
mod action;
mod items;
mod social;

pub use account::*;
pub use action::*;
pub use items::*;
pub use social::*;

use crate::descriptor::PacketDescriptor;

pub static PACKETS: &[&PacketDescriptor] = &[
    &LOGIN_LONG_PASSWORD,
    &LOGIN_SHORT_PASSWORD,
    &LOGIN_075,
    &LOGOUT,
    &REQUEST_CHARACTER_LIST,
    &CREATE_CHARACTER,
    &DELETE_CHARACTER,
    &SELECT_CHARACTER,
    &INCREASE_CHARACTER_STAT_POINT,
    &CHECK_CHARACTER_NAME,
    &RENAME_CHARACTER,
    &TOGGLE_SKIN,
    &SAVE_KEY_CONFIGURATION,
    &SERVER_CHANGE_AUTHENTICATION,
    &LIVE_CLIENT,
    &CHECKSUM_RESPONSE,
    &PUBLIC_CHAT_MESSAGE,
    &WHISPER_MESSAGE_REQUEST,
    &WALK_REQUEST,
    &WALK_REQUEST_075,
    &INSTANT_MOVE_REQUEST,
    &ANIMATION_REQUEST,
    &HIT_REQUEST,
    &TARGETED_SKILL,
    &TARGETED_SKILL_075,
    &AREA_SKILL,
    &ENTER_GATE_REQUEST,
    &WARP_COMMAND_REQUEST,
    &EVENT_REMAINING_TIME_REQUEST,
    &PET_COMMAND_REQUEST,
    &PET_INFO_REQUEST,
    &LEGACY_QUEST_STATE_REQUEST,
    &LEGACY_QUEST_STATE_SET_REQUEST,
    &OFF_TRADE_REQUEST,
    &PICKUP_ITEM_REQUEST,
    &DROP_ITEM_REQUEST,
    &ITEM_MOVE_REQUEST,
    &ITEM_MOVE_REQUEST_075,
    &CONSUME_ITEM_REQUEST,
    &TALK_TO_NPC_REQUEST,
    &CLOSE_NPC_REQUEST,
    &BUY_ITEM_FROM_NPC_REQUEST,
    &SELL_ITEM_TO_NPC_REQUEST,
    &REPAIR_ITEM_REQUEST,
    &VAULT_MOVE_MONEY_REQUEST,
    &VAULT_CLOSE_REQUEST,
    &CHAOS_MACHINE_MIX_REQUEST,
    &CRAFTING_DIALOG_CLOSE_REQUEST,
    &PLAYER_SHOP_SET_ITEM_PRICE,
    &PLAYER_SHOP_OPEN,
    &PLAYER_SHOP_CLOSE,
    &PLAYER_SHOP_ITEM_LIST_REQUEST,
    &PLAYER_SHOP_ITEM_BUY_REQUEST,
    &TRADE_REQUEST,
    &TRADE_REQUEST_RESPONSE,
    &SET_TRADE_MONEY,
    &TRADE_BUTTON_STATE_CHANGE,
    &TRADE_CANCEL,
    &PARTY_INVITE_REQUEST,
    &PARTY_INVITE_RESPONSE,
    &PARTY_LIST_REQUEST,
    &PARTY_PLAYER_KICK_REQUEST,
    &GUILD_JOIN_REQUEST,
    &GUILD_JOIN_ANSWER,
    &GUILD_LIST_REQUEST,
    &GUILD_KICK_PLAYER_REQUEST,
    &GUILD_MASTER_ANSWER,
    &GUILD_CREATE_REQUEST,
    &GUILD_WAR_REQUEST_RESPONSE,
    &DUEL_START_REQUEST,
    &DUEL_START_ANSWER,
    &DUEL_STOP_REQUEST,
    &FRIEND_LIST_REQUEST,
    &FRIEND_ADD_REQUEST,
    &FRIEND_DELETE_REQUEST,
    &LETTER_SEND_REQUEST,
    &LETTER_READ_REQUEST,
    &LETTER_DELETE_REQUEST,
];
