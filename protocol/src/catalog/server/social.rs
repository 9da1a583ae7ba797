//! Trade, party, guild, duel and messenger.

use crate::catalog::enums;
use crate::descriptor::PacketDescriptor;
use crate::field::FieldSpec;
use crate::group::GroupSpec;
use crate::header::HeaderSpec;
use crate::version::ClientVersion;

pub static TRADE_REQUEST: PacketDescriptor =
    PacketDescriptor::new("TradeRequest", HeaderSpec::c3(0x36))
        .fixed(13)
        .fields(&[FieldSpec::string("Name", 3, 10)])
        .sent_when("Another player requested a trade with the receiving player.")
        .caused_reaction("The client asks the player to accept the trade.");

pub static TRADE_REQUEST_ANSWER: PacketDescriptor =
    PacketDescriptor::new("TradeRequestAnswer", HeaderSpec::c1(0x37))
        .fixed(20)
        .fields(&[
            FieldSpec::flag("Accepted", 3, 0),
            FieldSpec::string("Name", 4, 10),
            FieldSpec::u16_le("TradePartnerLevel", 14),
            FieldSpec::u32_le("GuildId", 16),
        ])
        .sent_when("The requested player answered a trade request.")
        .caused_reaction("On acceptance the client opens the trade window.");

pub static TRADE_ITEM_REMOVED: PacketDescriptor =
    PacketDescriptor::new("TradeItemRemoved", HeaderSpec::c1(0x38))
        .fixed(4)
        .fields(&[FieldSpec::byte("Slot", 3)])
        .sent_when("The trade partner removed an item from the trade.")
        .caused_reaction("The client clears the slot of the partner's side.");

pub static TRADE_ITEM_ADDED: PacketDescriptor =
    PacketDescriptor::new("TradeItemAdded", HeaderSpec::c3(0x39))
        .fixed(16)
        .fields(&[FieldSpec::byte("ToSlot", 3), FieldSpec::binary("ItemData", 4, 12)])
        .sent_when("The trade partner added an item to the trade.")
        .caused_reaction("The client shows the item on the partner's side.");

pub static TRADE_MONEY_SET_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("TradeMoneySetResponse", HeaderSpec::c1(0x3A))
        .fixed(4)
        .fields(&[FieldSpec::flag("Success", 3, 0)])
        .sent_when("The player set the money offered in the trade.")
        .caused_reaction("The client confirms the offered amount.");

pub static TRADE_MONEY_UPDATE: PacketDescriptor =
    PacketDescriptor::new("TradeMoneyUpdate", HeaderSpec::c1(0x3B))
        .fixed(8)
        .fields(&[FieldSpec::u32_le("MoneyAmount", 4)])
        .sent_when("The trade partner changed the offered money.")
        .caused_reaction("The client shows the new amount on the partner's side.");

pub static TRADE_BUTTON_STATE_CHANGED: PacketDescriptor =
    PacketDescriptor::new("TradeButtonStateChanged", HeaderSpec::c1(0x3C))
        .fixed(4)
        .fields(&[FieldSpec::byte("State", 3).labeled(&enums::TRADE_BUTTON_STATE)])
        .sent_when("The trade partner pressed or released the trade button.")
        .caused_reaction("The client updates the partner's button.");

pub static TRADE_FINISHED: PacketDescriptor =
    PacketDescriptor::new("TradeFinished", HeaderSpec::c1(0x3D))
        .fixed(4)
        .fields(&[FieldSpec::byte("Result", 3).labeled(&enums::TRADE_RESULT)])
        .sent_when("The trade was completed or cancelled.")
        .caused_reaction("The client closes the trade window.");

pub static PARTY_REQUEST: PacketDescriptor =
    PacketDescriptor::new("PartyRequest", HeaderSpec::c1(0x40))
        .fixed(5)
        .fields(&[FieldSpec::u16_be("RequesterId", 3)])
        .sent_when("Another player invited the receiving player into a party.")
        .caused_reaction("The client asks the player to join the party.");

pub static PARTY_LIST: PacketDescriptor = PacketDescriptor::new("PartyList", HeaderSpec::c1(0x42))
    .variant("PartyList", ClientVersion::V095)
    .fields(&[FieldSpec::byte("Count", 3)])
    .groups(&[GroupSpec::fixed("Members", "Count", 4, 24).fields(&[
        FieldSpec::string("Name", 0, 10),
        FieldSpec::byte("Index", 10),
        FieldSpec::byte("MapId", 11),
        FieldSpec::byte("X", 12),
        FieldSpec::byte("Y", 13),
        FieldSpec::u32_le("CurrentHealth", 16),
        FieldSpec::u32_le("MaximumHealth", 20),
    ])])
    .sent_when("The party was created or its members changed.")
    .caused_reaction("The client shows the party members.");

pub static PARTY_LIST_075: PacketDescriptor =
    PacketDescriptor::new("PartyList075", HeaderSpec::c1(0x42))
        .variant("PartyList", ClientVersion::V075)
        .fields(&[FieldSpec::byte("Count", 3)])
        .groups(&[GroupSpec::fixed("Members", "Count", 4, 14).fields(&[
            FieldSpec::string("Name", 0, 10),
            FieldSpec::byte("Index", 10),
            FieldSpec::byte("MapId", 11),
            FieldSpec::byte("X", 12),
            FieldSpec::byte("Y", 13),
        ])])
        .sent_when("The party was created or its members changed.")
        .caused_reaction("The client shows the party members.");

pub static REMOVE_PARTY_MEMBER: PacketDescriptor =
    PacketDescriptor::new("RemovePartyMember", HeaderSpec::c1(0x43))
        .fixed(4)
        .fields(&[FieldSpec::byte("Index", 3)])
        .sent_when("A member left the party or got kicked.")
        .caused_reaction("The client removes the member from the party list.");

/// One byte per member: index in the high nibble, health tenths in the low one.
pub static PARTY_HEALTH_UPDATE: PacketDescriptor =
    PacketDescriptor::new("PartyHealthUpdate", HeaderSpec::c1(0x44))
        .fields(&[FieldSpec::byte("Count", 3)])
        .groups(&[GroupSpec::fixed("Members", "Count", 4, 1).fields(&[
            FieldSpec::bits("Index", 0, 4, 4),
            FieldSpec::bits("Value", 0, 0, 4),
        ])])
        .sent_when("The health of a party member changed.")
        .caused_reaction("The client updates the health bars of the party.");

pub static GUILD_JOIN_REQUEST: PacketDescriptor =
    PacketDescriptor::new("GuildJoinRequest", HeaderSpec::c1(0x50))
        .fixed(5)
        .fields(&[FieldSpec::u16_be("RequesterId", 3)])
        .sent_when("A player asked the guild master to join the guild.")
        .caused_reaction("The client asks the guild master to accept the player.");

pub static GUILD_JOIN_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("GuildJoinResponse", HeaderSpec::c1(0x51))
        .fixed(4)
        .fields(&[FieldSpec::byte("Result", 3).labeled(&enums::GUILD_REQUEST_ANSWER)])
        .sent_when("The guild master answered a join request.")
        .caused_reaction("The client shows the answer.");

pub static GUILD_LIST: PacketDescriptor = PacketDescriptor::new("GuildList", HeaderSpec::c2(0x52))
    .fields(&[
        FieldSpec::flag("IsInGuild", 4, 0),
        FieldSpec::byte("MemberCount", 5),
        FieldSpec::u32_le("TotalScore", 6),
        FieldSpec::byte("Score", 10),
        FieldSpec::string("RivalGuildName", 11, 8),
    ])
    .groups(&[GroupSpec::fixed("Members", "MemberCount", 19, 12).fields(&[
        FieldSpec::string("Name", 0, 10),
        FieldSpec::byte("ServerId", 10),
        FieldSpec::byte("Role", 11).labeled(&enums::GUILD_MEMBER_ROLE),
    ])])
    .sent_when("The player opened the guild window.")
    .caused_reaction("The client lists the guild members.");

pub static GUILD_KICK_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("GuildKickResponse", HeaderSpec::c1(0x53))
        .fixed(4)
        .fields(&[FieldSpec::byte("Result", 3).labeled(&enums::GUILD_KICK_RESULT)])
        .sent_when("The guild master kicked a member or the guild was disbanded.")
        .caused_reaction("The client shows the result.");

pub static SHOW_GUILD_MASTER_DIALOG: PacketDescriptor =
    PacketDescriptor::new("ShowGuildMasterDialog", HeaderSpec::c1(0x54))
        .fixed(3)
        .sent_when("The player talked to the guild master NPC.")
        .caused_reaction("The client asks whether to create a guild.");

pub static GUILD_CREATION_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("GuildCreationResponse", HeaderSpec::c1(0x56))
        .fixed(5)
        .fields(&[
            FieldSpec::flag("Success", 3, 0),
            FieldSpec::byte("Error", 4).labeled(&enums::GUILD_CREATION_RESULT),
        ])
        .sent_when("The player submitted the guild creation dialog.")
        .caused_reaction("The client closes the dialog or shows the error.");

pub static GUILD_WAR_REQUEST_RESULT: PacketDescriptor =
    PacketDescriptor::new("GuildWarRequestResult", HeaderSpec::c1(0x60))
        .fixed(4)
        .fields(&[FieldSpec::byte("Result", 3).labeled(&enums::GUILD_WAR_REQUEST_RESULT)])
        .sent_when("The guild master declared a war on another guild.")
        .caused_reaction("The client shows whether the request was delivered.");

pub static GUILD_WAR_REQUEST: PacketDescriptor =
    PacketDescriptor::new("GuildWarRequest", HeaderSpec::c1(0x61))
        .fixed(12)
        .fields(&[
            FieldSpec::string("GuildName", 3, 8),
            FieldSpec::byte("Type", 11).labeled(&enums::GUILD_WAR_TYPE),
        ])
        .sent_when("Another guild master declared a war on the receiving guild master.")
        .caused_reaction("The client asks the guild master to accept the war.");

pub static GUILD_WAR_DECLARED: PacketDescriptor =
    PacketDescriptor::new("GuildWarDeclared", HeaderSpec::c1(0x62))
        .fixed(12)
        .fields(&[
            FieldSpec::string("GuildName", 3, 8),
            FieldSpec::byte("Type", 11).labeled(&enums::GUILD_WAR_TYPE),
        ])
        .sent_when("A guild war against the guild of the receiving player started.")
        .caused_reaction("The client shows the war and the enemy guild.");

pub static GUILD_WAR_ENDED: PacketDescriptor =
    PacketDescriptor::new("GuildWarEnded", HeaderSpec::c1(0x63))
        .fixed(12)
        .fields(&[
            FieldSpec::byte("Result", 3).labeled(&enums::GUILD_WAR_RESULT),
            FieldSpec::string("GuildName", 4, 8),
        ])
        .sent_when("A guild war of the receiving player's guild ended.")
        .caused_reaction("The client shows the outcome.");

pub static GUILD_WAR_SCORE_UPDATE: PacketDescriptor =
    PacketDescriptor::new("GuildWarScoreUpdate", HeaderSpec::c1(0x64))
        .fixed(6)
        .fields(&[
            FieldSpec::byte("ScoreOfOwnGuild", 3),
            FieldSpec::byte("ScoreOfEnemyGuild", 4),
            FieldSpec::byte("Type", 5),
        ])
        .sent_when("A guild of the running war scored.")
        .caused_reaction("The client updates the score board.");

pub static ASSIGN_CHARACTER_TO_GUILD: PacketDescriptor =
    PacketDescriptor::new("AssignCharacterToGuild", HeaderSpec::c2(0x65))
        .fields(&[FieldSpec::byte("PlayerCount", 4)])
        .groups(&[GroupSpec::fixed("Assignments", "PlayerCount", 5, 8).fields(&[
            FieldSpec::u32_be("GuildId", 0),
            FieldSpec::byte("Role", 4).labeled(&enums::GUILD_MEMBER_ROLE),
            FieldSpec::byte("RelationshipType", 5).labeled(&enums::GUILD_RELATIONSHIP_TYPE),
            FieldSpec::u16_be("PlayerId", 6),
        ])])
        .sent_when("Guild members came into the view range.")
        .caused_reaction("The client shows the guild marks above the players.");

pub static DUEL_START_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("DuelStartResponse", HeaderSpec::c1_sub(0xAA, 0x01))
        .variant("DuelStartResponse", ClientVersion::Season6)
        .fixed(17)
        .fields(&[
            FieldSpec::byte("Result", 4).labeled(&enums::DUEL_START_RESULT),
            FieldSpec::u16_be("OpponentId", 5),
            FieldSpec::string("OpponentName", 7, 10),
        ])
        .sent_when("The player requested a duel.")
        .caused_reaction("The client starts the duel or shows why it failed.");

pub static DUEL_START_REQUEST: PacketDescriptor =
    PacketDescriptor::new("DuelStartRequest", HeaderSpec::c1_sub(0xAA, 0x02))
        .variant("DuelStartRequest", ClientVersion::Season6)
        .fixed(16)
        .fields(&[
            FieldSpec::u16_be("RequesterId", 4),
            FieldSpec::string("RequesterName", 6, 10),
        ])
        .sent_when("Another player challenged the receiving player to a duel.")
        .caused_reaction("The client asks the player to accept the duel.");

pub static DUEL_END: PacketDescriptor = PacketDescriptor::new("DuelEnd", HeaderSpec::c1_sub(0xAA, 0x03))
    .variant("DuelEnd", ClientVersion::Season6)
    .fixed(17)
    .fields(&[
        FieldSpec::byte("Result", 4),
        FieldSpec::u16_be("OpponentId", 5),
        FieldSpec::string("OpponentName", 7, 10),
    ])
    .sent_when("The duel ended.")
    .caused_reaction("The client closes the duel display.");

pub static DUEL_SCORE: PacketDescriptor = PacketDescriptor::new("DuelScore", HeaderSpec::c1_sub(0xAA, 0x04))
    .variant("DuelScore", ClientVersion::Season6)
    .fixed(10)
    .fields(&[
        FieldSpec::u16_be("Player1Id", 4),
        FieldSpec::u16_be("Player2Id", 6),
        FieldSpec::byte("Player1Score", 8),
        FieldSpec::byte("Player2Score", 9),
    ])
    .sent_when("One of the duelists scored.")
    .caused_reaction("The client updates the duel score.");

pub static DUEL_HEALTH_UPDATE: PacketDescriptor =
    PacketDescriptor::new("DuelHealthUpdate", HeaderSpec::c1_sub(0xAA, 0x05))
        .variant("DuelHealthUpdate", ClientVersion::Season6)
        .fixed(12)
        .fields(&[
            FieldSpec::u16_be("Player1Id", 4),
            FieldSpec::u16_be("Player2Id", 6),
            FieldSpec::byte("Player1HealthPercentage", 8),
            FieldSpec::byte("Player2HealthPercentage", 9),
            FieldSpec::byte("Player1ShieldPercentage", 10),
            FieldSpec::byte("Player2ShieldPercentage", 11),
        ])
        .sent_when("The health or shield of a duelist changed.")
        .caused_reaction("The client updates the duel health bars.");

pub static DUEL_STATUS: PacketDescriptor =
    PacketDescriptor::new("DuelStatus", HeaderSpec::c1_sub(0xAA, 0x06))
        .variant("DuelStatus", ClientVersion::Season6)
        .fields(&[FieldSpec::byte("RoomCount", 4)])
        .groups(&[GroupSpec::fixed("Rooms", "RoomCount", 5, 22).fields(&[
            FieldSpec::string("Player1Name", 0, 10),
            FieldSpec::string("Player2Name", 10, 10),
            FieldSpec::flag("DuelRunning", 20, 0),
            FieldSpec::flag("DuelFull", 21, 0),
        ])])
        .sent_when("The player talked to the gatekeeper of the duel arena.")
        .caused_reaction("The client lists the duel rooms which can be watched.");

pub static DUEL_INIT: PacketDescriptor =
    PacketDescriptor::new("DuelInit", HeaderSpec::c1_sub(0xAA, 0x07))
        .variant("DuelInit", ClientVersion::Season6)
        .fixed(30)
        .fields(&[
            FieldSpec::byte("Result", 4),
            FieldSpec::byte("RoomIndex", 5),
            FieldSpec::string("Player1Name", 6, 10),
            FieldSpec::string("Player2Name", 16, 10),
            FieldSpec::u16_be("Player1Id", 26),
            FieldSpec::u16_be("Player2Id", 28),
        ])
        .sent_when("A spectator entered a duel room.")
        .caused_reaction("The client shows the duel panel of the room.");

pub static DUEL_SPECTATOR_ADDED: PacketDescriptor =
    PacketDescriptor::new("DuelSpectatorAdded", HeaderSpec::c1_sub(0xAA, 0x08))
        .variant("DuelSpectatorAdded", ClientVersion::Season6)
        .fixed(14)
        .fields(&[FieldSpec::string("Name", 4, 10)])
        .sent_when("A spectator joined the duel.")
        .caused_reaction("The client adds the name to the spectator list.");

pub static DUEL_SPECTATOR_REMOVED: PacketDescriptor =
    PacketDescriptor::new("DuelSpectatorRemoved", HeaderSpec::c1_sub(0xAA, 0x0A))
        .variant("DuelSpectatorRemoved", ClientVersion::Season6)
        .fixed(14)
        .fields(&[FieldSpec::string("Name", 4, 10)])
        .sent_when("A spectator left the duel.")
        .caused_reaction("The client removes the name from the spectator list.");

pub static DUEL_SPECTATOR_LIST: PacketDescriptor =
    PacketDescriptor::new("DuelSpectatorList", HeaderSpec::c1_sub(0xAA, 0x0B))
        .variant("DuelSpectatorList", ClientVersion::Season6)
        .fields(&[FieldSpec::byte("Count", 4)])
        .groups(&[GroupSpec::fixed("Spectators", "Count", 5, 10)
            .fields(&[FieldSpec::string("Name", 0, 10)])])
        .sent_when("The spectators of the duel changed.")
        .caused_reaction("The client replaces the spectator list.");

pub static DUEL_FINISHED: PacketDescriptor =
    PacketDescriptor::new("DuelFinished", HeaderSpec::c1_sub(0xAA, 0x0C))
        .variant("DuelFinished", ClientVersion::Season6)
        .fixed(24)
        .fields(&[
            FieldSpec::string("Winner", 4, 10),
            FieldSpec::string("Loser", 14, 10),
        ])
        .sent_when("A duel ended with a winner.")
        .caused_reaction("The client announces the winner to duelists and spectators.");

pub static FRIEND_LIST: PacketDescriptor = PacketDescriptor::new("FriendList", HeaderSpec::c2(0xC0))
    .fields(&[
        FieldSpec::byte("LetterCount", 4),
        FieldSpec::byte("MaximumLetterCount", 5),
        FieldSpec::byte("FriendCount", 6),
    ])
    .groups(&[GroupSpec::fixed("Friends", "FriendCount", 7, 11).fields(&[
        FieldSpec::string("Name", 0, 10),
        FieldSpec::byte("ServerId", 10),
    ])])
    .sent_when("The character entered the game.")
    .caused_reaction("The client fills the friend list of the messenger.");

pub static FRIEND_ADDED: PacketDescriptor = PacketDescriptor::new("FriendAdded", HeaderSpec::c1(0xC1))
    .fixed(15)
    .fields(&[
        FieldSpec::byte("Result", 3).labeled(&enums::FRIEND_ADD_RESULT),
        FieldSpec::string("FriendName", 4, 10),
        FieldSpec::byte("ServerId", 14),
    ])
    .sent_when("The player added a friend to the messenger.")
    .caused_reaction("The client adds the friend to the list or shows the error.");

pub static FRIEND_REQUEST: PacketDescriptor =
    PacketDescriptor::new("FriendRequest", HeaderSpec::c1(0xC2))
        .fixed(13)
        .fields(&[FieldSpec::string("Requester", 3, 10)])
        .sent_when("Another player added the receiving player as a friend.")
        .caused_reaction("The client asks the player to accept the friendship.");

pub static FRIEND_DELETED: PacketDescriptor =
    PacketDescriptor::new("FriendDeleted", HeaderSpec::c1(0xC3))
        .fixed(14)
        .fields(&[
            FieldSpec::flag("Success", 3, 0),
            FieldSpec::string("FriendName", 4, 10),
        ])
        .sent_when("The player removed a friend from the messenger.")
        .caused_reaction("The client removes the friend from the list.");

pub static FRIEND_ONLINE_STATE_UPDATE: PacketDescriptor =
    PacketDescriptor::new("FriendOnlineStateUpdate", HeaderSpec::c1(0xC4))
        .fixed(14)
        .fields(&[
            FieldSpec::string("FriendName", 3, 10),
            FieldSpec::byte("ServerId", 13),
        ])
        .sent_when("A friend logged in, logged out or changed the server.")
        .caused_reaction("The client updates the state of the friend.");

pub static FRIEND_INVITATION_RESULT: PacketDescriptor =
    PacketDescriptor::new("FriendInvitationResult", HeaderSpec::c1(0xCB))
        .fixed(9)
        .fields(&[
            FieldSpec::flag("Success", 3, 0),
            FieldSpec::u32_be("RequestId", 5),
        ])
        .sent_when("The player invited a friend into a chat room.")
        .caused_reaction("The client shows whether the invitation was delivered.");

pub static LETTER_SEND_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("LetterSendResponse", HeaderSpec::c1(0xC5))
        .fixed(8)
        .fields(&[
            FieldSpec::u32_le("LetterId", 3),
            FieldSpec::byte("Result", 7).labeled(&enums::LETTER_SEND_RESULT),
        ])
        .sent_when("The player sent a letter.")
        .caused_reaction("The client closes the letter dialog or shows the error.");

pub static ADD_LETTER: PacketDescriptor = PacketDescriptor::new("AddLetter", HeaderSpec::c1(0xC6))
    .fixed(79)
    .fields(&[
        FieldSpec::u16_le("LetterIndex", 4),
        FieldSpec::string("SenderName", 6, 10),
        FieldSpec::string("Timestamp", 16, 30),
        FieldSpec::string("Subject", 46, 32),
        FieldSpec::byte("State", 78).labeled(&enums::LETTER_STATE),
    ])
    .sent_when("The player received a letter or entered the game with letters.")
    .caused_reaction("The client adds the letter to the inbox.");

pub static OPEN_LETTER: PacketDescriptor = PacketDescriptor::new("OpenLetter", HeaderSpec::c4(0xC7))
    .fields(&[
        FieldSpec::u16_le("LetterIndex", 4),
        FieldSpec::binary("SenderAppearance", 6, 18),
        FieldSpec::byte("Rotation", 24),
        FieldSpec::byte("Animation", 25),
        FieldSpec::trailing_string("Message", 26),
    ])
    .sent_when("The player opened a letter of the inbox.")
    .caused_reaction("The client shows the letter with the sender's character.");

pub static REMOVE_LETTER: PacketDescriptor =
    PacketDescriptor::new("RemoveLetter", HeaderSpec::c1(0xC8))
        .fixed(6)
        .fields(&[
            FieldSpec::flag("Success", 3, 0),
            FieldSpec::u16_le("LetterIndex", 4),
        ])
        .sent_when("The player deleted a letter.")
        .caused_reaction("The client removes the letter from the inbox.");

pub static CHAT_ROOM_CONNECTION_INFO: PacketDescriptor =
    PacketDescriptor::new("ChatRoomConnectionInfo", HeaderSpec::c1(0xCA))
        .fixed(36)
        .fields(&[
            FieldSpec::string("ChatServerIp", 3, 15),
            FieldSpec::u16_le("ChatRoomId", 18),
            FieldSpec::u32_le("AuthenticationToken", 20),
            FieldSpec::byte("Type", 24),
            FieldSpec::string("FriendName", 25, 10),
            FieldSpec::flag("Success", 35, 0),
        ])
        .sent_when("A friend invited the player into a chat room.")
        .caused_reaction("The client connects to the chat server.");
