//! Castle siege of Valley of Loren.

use crate::catalog::enums;
use crate::descriptor::PacketDescriptor;
use crate::field::FieldSpec;
use crate::group::GroupSpec;
use crate::header::HeaderSpec;
use crate::version::ClientVersion;

pub static CASTLE_SIEGE_STATUS: PacketDescriptor =
    PacketDescriptor::new("CastleSiegeStatus", HeaderSpec::c1_sub(0xB2, 0x00))
        .variant("CastleSiegeStatus", ClientVersion::Season6)
        .fixed(44)
        .fields(&[
            FieldSpec::byte("Result", 4),
            FieldSpec::string("CastleOwnerGuild", 5, 8),
            FieldSpec::string("CastleOwnerGuildMaster", 13, 10),
            FieldSpec::byte("State", 23).labeled(&enums::CASTLE_SIEGE_STATE),
            FieldSpec::u16_be("StateStartYear", 24),
            FieldSpec::byte("StateStartMonth", 26),
            FieldSpec::byte("StateStartDay", 27),
            FieldSpec::byte("StateStartHour", 28),
            FieldSpec::byte("StateStartMinute", 29),
            FieldSpec::u16_be("StateEndYear", 30),
            FieldSpec::byte("StateEndMonth", 32),
            FieldSpec::byte("StateEndDay", 33),
            FieldSpec::byte("StateEndHour", 34),
            FieldSpec::byte("StateEndMinute", 35),
            FieldSpec::u32_be("SiegeStartSeconds", 36),
            FieldSpec::u32_be("RemainingSeconds", 40),
        ])
        .sent_when("The player asked the castle guard about the siege.")
        .caused_reaction("The client shows the owner and the schedule of the siege.");

pub static CASTLE_SIEGE_REGISTRATION_RESULT: PacketDescriptor =
    PacketDescriptor::new("CastleSiegeRegistrationResult", HeaderSpec::c1_sub(0xB2, 0x01))
        .variant("CastleSiegeRegistrationResult", ClientVersion::Season6)
        .fixed(13)
        .fields(&[FieldSpec::byte("Result", 4), FieldSpec::string("GuildName", 5, 8)])
        .sent_when("A guild master registered the guild for the siege.")
        .caused_reaction("The client shows whether the registration succeeded.");

pub static CASTLE_SIEGE_UNREGISTER_RESULT: PacketDescriptor =
    PacketDescriptor::new("CastleSiegeUnregisterResult", HeaderSpec::c1_sub(0xB2, 0x02))
        .variant("CastleSiegeUnregisterResult", ClientVersion::Season6)
        .fixed(14)
        .fields(&[
            FieldSpec::byte("Result", 4),
            FieldSpec::flag("IsGivingUp", 5, 0),
            FieldSpec::string("GuildName", 6, 8),
        ])
        .sent_when("A guild master withdrew the guild from the siege.")
        .caused_reaction("The client shows whether the guild left the siege.");

pub static CASTLE_SIEGE_REGISTERED_STATE: PacketDescriptor =
    PacketDescriptor::new("CastleSiegeRegisteredState", HeaderSpec::c1_sub(0xB2, 0x03))
        .variant("CastleSiegeRegisteredState", ClientVersion::Season6)
        .fixed(22)
        .fields(&[
            FieldSpec::byte("Result", 4),
            FieldSpec::string("GuildName", 5, 8),
            FieldSpec::u32_be("MarkCount", 16),
            FieldSpec::flag("IsGivenUp", 20, 0),
            FieldSpec::byte("RegistrationOrder", 21),
        ])
        .sent_when("A guild master asked for the registration state of the guild.")
        .caused_reaction("The client shows the registered marks and the position.");

pub static CASTLE_SIEGE_MARK_REGISTERED: PacketDescriptor =
    PacketDescriptor::new("CastleSiegeMarkRegistered", HeaderSpec::c1_sub(0xB2, 0x04))
        .variant("CastleSiegeMarkRegistered", ClientVersion::Season6)
        .fixed(20)
        .fields(&[
            FieldSpec::byte("Result", 4),
            FieldSpec::string("GuildName", 5, 8),
            FieldSpec::u32_be("MarkCount", 16),
        ])
        .sent_when("A guild member handed in a sign of lord.")
        .caused_reaction("The client shows the new mark count of the guild.");

pub static CASTLE_SIEGE_DEFENSE_BUY_RESULT: PacketDescriptor =
    PacketDescriptor::new("CastleSiegeDefenseBuyResult", HeaderSpec::c1_sub(0xB2, 0x05))
        .variant("CastleSiegeDefenseBuyResult", ClientVersion::Season6)
        .fixed(12)
        .fields(&[
            FieldSpec::byte("Result", 4),
            FieldSpec::u32_be("NpcNumber", 8),
        ])
        .sent_when("The castle owner bought a gate or statue for the defense.")
        .caused_reaction("The client shows whether the purchase succeeded.");

pub static CASTLE_TAX_INFO: PacketDescriptor =
    PacketDescriptor::new("CastleTaxInfo", HeaderSpec::c1_sub(0xB2, 0x1A))
        .variant("CastleTaxInfo", ClientVersion::Season6)
        .fixed(12)
        .fields(&[
            FieldSpec::byte("TaxType", 4),
            FieldSpec::byte("ChaosMachineTaxRate", 5),
            FieldSpec::byte("StoreTaxRate", 6),
            FieldSpec::u32_be("HuntingZoneEntranceFee", 8),
        ])
        .sent_when("The castle owner changed the tax rates, or the player opened an NPC that applies them.")
        .caused_reaction("The client applies the rates to the shown prices.");

pub static CASTLE_GATE_OPERATE_RESULT: PacketDescriptor =
    PacketDescriptor::new("CastleGateOperateResult", HeaderSpec::c1_sub(0xB2, 0x12))
        .variant("CastleGateOperateResult", ClientVersion::Season6)
        .fixed(8)
        .fields(&[
            FieldSpec::byte("Result", 4),
            FieldSpec::byte("Operation", 5).labeled(&enums::CASTLE_GATE_OPERATION),
            FieldSpec::u16_be("GateId", 6),
        ])
        .sent_when("A defender pulled a gate lever.")
        .caused_reaction("The client shows whether the gate moved.");

pub static CASTLE_GATE_STATE: PacketDescriptor =
    PacketDescriptor::new("CastleGateState", HeaderSpec::c1_sub(0xB2, 0x13))
        .variant("CastleGateState", ClientVersion::Season6)
        .fixed(7)
        .fields(&[FieldSpec::flag("IsOpen", 4, 0), FieldSpec::u16_be("GateId", 5)])
        .sent_when("A castle gate in the view range opened or closed.")
        .caused_reaction("The client animates the gate.");

pub static CROWN_SWITCH_STATE: PacketDescriptor =
    PacketDescriptor::new("CrownSwitchState", HeaderSpec::c1_sub(0xB2, 0x20))
        .variant("CrownSwitchState", ClientVersion::Season6)
        .fixed(10)
        .fields(&[
            FieldSpec::u16_be("SwitchId", 4),
            FieldSpec::flag("IsPressed", 6, 0),
            FieldSpec::u16_be("PlayerId", 8),
        ])
        .sent_when("A player started or stopped pressing a crown switch.")
        .caused_reaction("The client shows who holds the switch.");

pub static CASTLE_SIEGE_GUILD_LIST: PacketDescriptor =
    PacketDescriptor::new("CastleSiegeGuildList", HeaderSpec::c2(0xB4))
        .variant("CastleSiegeGuildList", ClientVersion::Season6)
        .fields(&[FieldSpec::byte("Result", 4), FieldSpec::u32_be("GuildCount", 8)])
        .groups(&[GroupSpec::fixed("Guilds", "GuildCount", 12, 16).fields(&[
            FieldSpec::byte("Side", 0),
            FieldSpec::flag("IsInvolved", 1, 0),
            FieldSpec::string("GuildName", 2, 8),
            FieldSpec::u32_be("Score", 12),
        ])])
        .sent_when("The siege started, or the player asked for the participating guilds.")
        .caused_reaction("The client lists the attacking and defending guilds.");

pub static CASTLE_SIEGE_REGISTERED_GUILDS: PacketDescriptor =
    PacketDescriptor::new("CastleSiegeRegisteredGuilds", HeaderSpec::c2(0xB5))
        .variant("CastleSiegeRegisteredGuilds", ClientVersion::Season6)
        .fields(&[FieldSpec::byte("Result", 4), FieldSpec::u32_be("GuildCount", 8)])
        .groups(&[GroupSpec::fixed("Guilds", "GuildCount", 12, 16).fields(&[
            FieldSpec::string("GuildName", 0, 8),
            FieldSpec::u32_be("MarkCount", 8),
            FieldSpec::flag("IsGivenUp", 12, 0),
            FieldSpec::byte("RegistrationOrder", 13),
        ])])
        .sent_when("The player asked the castle guard for the registered guilds.")
        .caused_reaction("The client lists the guilds with their marks.");

pub static CASTLE_SIEGE_MINIMAP_DATA: PacketDescriptor =
    PacketDescriptor::new("CastleSiegeMinimapData", HeaderSpec::c2(0xB6))
        .variant("CastleSiegeMinimapData", ClientVersion::Season6)
        .fields(&[FieldSpec::u32_be("PointCount", 4)])
        .groups(&[GroupSpec::fixed("Points", "PointCount", 8, 2)
            .fields(&[FieldSpec::byte("X", 0), FieldSpec::byte("Y", 1)])])
        .sent_when("Guild members of a siege participant moved during the siege.")
        .caused_reaction("The client draws the members on the minimap.");

pub static CASTLE_OWNER_LOGO: PacketDescriptor =
    PacketDescriptor::new("CastleOwnerLogo", HeaderSpec::c1_sub(0xB9, 0x02))
        .variant("CastleOwnerLogo", ClientVersion::Season6)
        .fixed(36)
        .fields(&[FieldSpec::binary("Logo", 4, 32)])
        .sent_when("The player approached the castle and the owner guild is known.")
        .caused_reaction("The client shows the owner's guild mark on the castle.");
