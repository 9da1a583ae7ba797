//! Trade, party, guild, duel and messenger requests.

use crate::catalog::enums;
use crate::descriptor::PacketDescriptor;
use crate::field::FieldSpec;
use crate::header::HeaderSpec;
use crate::version::ClientVersion;

pub static TRADE_REQUEST: PacketDescriptor =
    PacketDescriptor::new("TradeRequest", HeaderSpec::c1(0x36))
        .client()
        .fixed(5)
        .fields(&[FieldSpec::u16_be("PlayerId", 3)])
        .sent_when("The player asked another player to trade.")
        .caused_reaction("The server forwards the request to the other player.");

pub static TRADE_REQUEST_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("TradeRequestResponse", HeaderSpec::c1(0x37))
        .client()
        .fixed(4)
        .fields(&[FieldSpec::flag("Accepted", 3, 0)])
        .sent_when("The player answered a trade request.")
        .caused_reaction("The server opens the trade or informs the requester.");

pub static SET_TRADE_MONEY: PacketDescriptor =
    PacketDescriptor::new("SetTradeMoney", HeaderSpec::c1(0x3A))
        .client()
        .fixed(7)
        .fields(&[FieldSpec::u32_le("Amount", 3)])
        .sent_when("The player entered the money to offer.")
        .caused_reaction("The server updates the offer on both sides.");

pub static TRADE_BUTTON_STATE_CHANGE: PacketDescriptor =
    PacketDescriptor::new("TradeButtonStateChange", HeaderSpec::c1(0x3C))
        .client()
        .fixed(4)
        .fields(&[FieldSpec::byte("NewState", 3).labeled(&enums::TRADE_BUTTON_STATE)])
        .sent_when("The player pressed or released the trade button.")
        .caused_reaction("The server completes the trade once both buttons are pressed.");

pub static TRADE_CANCEL: PacketDescriptor =
    PacketDescriptor::new("TradeCancel", HeaderSpec::c1(0x3D))
        .client()
        .fixed(3)
        .sent_when("The player closed the trade window.")
        .caused_reaction("The server cancels the trade for both players.");

pub static PARTY_INVITE_REQUEST: PacketDescriptor =
    PacketDescriptor::new("PartyInviteRequest", HeaderSpec::c1(0x40))
        .client()
        .fixed(5)
        .fields(&[FieldSpec::u16_be("TargetPlayerId", 3)])
        .sent_when("The player invited another player into the party.")
        .caused_reaction("The server forwards the invitation.");

pub static PARTY_INVITE_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("PartyInviteResponse", HeaderSpec::c1(0x41))
        .client()
        .fixed(6)
        .fields(&[
            FieldSpec::flag("Accepted", 3, 0),
            FieldSpec::u16_be("RequesterId", 4),
        ])
        .sent_when("The player answered a party invitation.")
        .caused_reaction("The server adds the player to the party on acceptance.");

pub static PARTY_LIST_REQUEST: PacketDescriptor =
    PacketDescriptor::new("PartyListRequest", HeaderSpec::c1(0x42))
        .client()
        .fixed(3)
        .sent_when("The player opened the party window.")
        .caused_reaction("The server sends the party list.");

pub static PARTY_PLAYER_KICK_REQUEST: PacketDescriptor =
    PacketDescriptor::new("PartyPlayerKickRequest", HeaderSpec::c1(0x43))
        .client()
        .fixed(4)
        .fields(&[FieldSpec::byte("PlayerIndex", 3)])
        .sent_when("The party master kicked a member or a member left.")
        .caused_reaction("The server removes the member from the party.");

pub static GUILD_JOIN_REQUEST: PacketDescriptor =
    PacketDescriptor::new("GuildJoinRequest", HeaderSpec::c1(0x50))
        .client()
        .fixed(5)
        .fields(&[FieldSpec::u16_be("GuildMasterPlayerId", 3)])
        .sent_when("The player asked a guild master to join the guild.")
        .caused_reaction("The server forwards the request to the guild master.");

pub static GUILD_JOIN_ANSWER: PacketDescriptor =
    PacketDescriptor::new("GuildJoinAnswer", HeaderSpec::c1(0x51))
        .client()
        .fixed(6)
        .fields(&[
            FieldSpec::flag("Accepted", 3, 0),
            FieldSpec::u16_be("RequesterId", 4),
        ])
        .sent_when("The guild master answered a join request.")
        .caused_reaction("The server adds the requester to the guild on acceptance.");

pub static GUILD_LIST_REQUEST: PacketDescriptor =
    PacketDescriptor::new("GuildListRequest", HeaderSpec::c1(0x52))
        .client()
        .fixed(3)
        .sent_when("The player opened the guild window.")
        .caused_reaction("The server sends the guild member list.");

pub static GUILD_KICK_PLAYER_REQUEST: PacketDescriptor =
    PacketDescriptor::new("GuildKickPlayerRequest", HeaderSpec::c1(0x53))
        .client()
        .fixed(23)
        .fields(&[
            FieldSpec::string("PlayerName", 3, 10),
            FieldSpec::string("SecurityCode", 13, 10),
        ])
        .sent_when("The guild master kicked a member or disbanded the guild.")
        .caused_reaction("The server removes the member if the security code matches.");

pub static GUILD_MASTER_ANSWER: PacketDescriptor =
    PacketDescriptor::new("GuildMasterAnswer", HeaderSpec::c1(0x54))
        .client()
        .fixed(4)
        .fields(&[FieldSpec::flag("ShowCreationDialog", 3, 0)])
        .sent_when("The player answered the guild master NPC.")
        .caused_reaction("The server opens the guild creation dialog on request.");

pub static GUILD_CREATE_REQUEST: PacketDescriptor =
    PacketDescriptor::new("GuildCreateRequest", HeaderSpec::c1(0x55))
        .client()
        .fixed(43)
        .fields(&[
            FieldSpec::string("GuildName", 3, 8),
            FieldSpec::binary("GuildEmblem", 11, 32),
        ])
        .sent_when("The player submitted the guild creation dialog.")
        .caused_reaction("The server creates the guild and sends the result.");

pub static GUILD_WAR_REQUEST_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("GuildWarRequestResponse", HeaderSpec::c1(0x61))
        .client()
        .fixed(4)
        .fields(&[FieldSpec::flag("Accepted", 3, 0)])
        .sent_when("The guild master answered a war declaration.")
        .caused_reaction("The server starts the war on acceptance.");

pub static DUEL_START_REQUEST: PacketDescriptor =
    PacketDescriptor::new("DuelStartRequest", HeaderSpec::c1_sub(0xAA, 0x01))
        .variant("DuelStartRequest", ClientVersion::Season6)
        .client()
        .fixed(16)
        .fields(&[
            FieldSpec::u16_be("PlayerId", 4),
            FieldSpec::string("PlayerName", 6, 10),
        ])
        .sent_when("The player challenged another player to a duel.")
        .caused_reaction("The server forwards the challenge.");

pub static DUEL_START_ANSWER: PacketDescriptor =
    PacketDescriptor::new("DuelStartAnswer", HeaderSpec::c1_sub(0xAA, 0x02))
        .variant("DuelStartAnswer", ClientVersion::Season6)
        .client()
        .fixed(17)
        .fields(&[
            FieldSpec::flag("Accepted", 4, 0),
            FieldSpec::u16_be("PlayerId", 5),
            FieldSpec::string("PlayerName", 7, 10),
        ])
        .sent_when("The player answered a duel challenge.")
        .caused_reaction("The server starts the duel on acceptance.");

pub static DUEL_STOP_REQUEST: PacketDescriptor =
    PacketDescriptor::new("DuelStopRequest", HeaderSpec::c1_sub(0xAA, 0x03))
        .variant("DuelStopRequest", ClientVersion::Season6)
        .client()
        .fixed(4)
        .sent_when("The player gave up the running duel.")
        .caused_reaction("The server ends the duel.");

pub static FRIEND_LIST_REQUEST: PacketDescriptor =
    PacketDescriptor::new("FriendListRequest", HeaderSpec::c1(0xC0))
        .client()
        .fixed(3)
        .sent_when("The player opened the messenger.")
        .caused_reaction("The server sends the friend list.");

pub static FRIEND_ADD_REQUEST: PacketDescriptor =
    PacketDescriptor::new("FriendAddRequest", HeaderSpec::c1(0xC1))
        .client()
        .fixed(13)
        .fields(&[FieldSpec::string("FriendName", 3, 10)])
        .sent_when("The player added a friend to the messenger.")
        .caused_reaction("The server asks the other player to accept.");

pub static FRIEND_DELETE_REQUEST: PacketDescriptor =
    PacketDescriptor::new("FriendDeleteRequest", HeaderSpec::c1(0xC3))
        .client()
        .fixed(13)
        .fields(&[FieldSpec::string("FriendName", 3, 10)])
        .sent_when("The player removed a friend from the messenger.")
        .caused_reaction("The server removes the friendship.");

pub static LETTER_SEND_REQUEST: PacketDescriptor =
    PacketDescriptor::new("LetterSendRequest", HeaderSpec::c2(0xC5))
        .client()
        .fields(&[
            FieldSpec::u32_le("LetterId", 4),
            FieldSpec::string("Receiver", 8, 10),
            FieldSpec::string("Title", 18, 60),
            FieldSpec::byte("Rotation", 78),
            FieldSpec::byte("Animation", 79),
            FieldSpec::u16_le("MessageLength", 80),
            FieldSpec::trailing_string("Message", 82),
        ])
        .sent_when("The player sent a letter to a friend.")
        .caused_reaction("The server delivers the letter and answers with the result.");

pub static LETTER_READ_REQUEST: PacketDescriptor =
    PacketDescriptor::new("LetterReadRequest", HeaderSpec::c1(0xC7))
        .client()
        .fixed(5)
        .fields(&[FieldSpec::u16_le("LetterIndex", 3)])
        .sent_when("The player opened a letter.")
        .caused_reaction("The server sends the content of the letter.");

pub static LETTER_DELETE_REQUEST: PacketDescriptor =
    PacketDescriptor::new("LetterDeleteRequest", HeaderSpec::c1(0xC8))
        .client()
        .fixed(5)
        .fields(&[FieldSpec::u16_le("LetterIndex", 3)])
        .sent_when("The player deleted a letter.")
        .caused_reaction("The server removes the letter.");
