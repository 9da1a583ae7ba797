//! Login, character management and client settings.

use crate::catalog::enums;
use crate::descriptor::PacketDescriptor;
use crate::field::FieldSpec;
use crate::header::HeaderSpec;
use crate::version::ClientVersion;

/// Credentials are xor-encrypted by the client, so they travel as raw bytes.
pub static LOGIN_LONG_PASSWORD: PacketDescriptor =
    PacketDescriptor::new("LoginLongPassword", HeaderSpec::c3_sub(0xF1, 0x01))
        .variant("Login", ClientVersion::Season6)
        .client()
        .fixed(59)
        .fields(&[
            FieldSpec::binary("Username", 4, 10),
            FieldSpec::binary("Password", 14, 20),
            FieldSpec::u32_be("TickCount", 34),
            FieldSpec::binary("ClientVersion", 38, 5),
            FieldSpec::binary("ClientSerial", 43, 16),
        ])
        .sent_when("The player submitted the login dialog.")
        .caused_reaction("The server checks the credentials and answers with a login response.");

pub static LOGIN_SHORT_PASSWORD: PacketDescriptor =
    PacketDescriptor::new("LoginShortPassword", HeaderSpec::c3_sub(0xF1, 0x01))
        .variant("Login", ClientVersion::V095)
        .client()
        .fixed(51)
        .fields(&[
            FieldSpec::binary("Username", 4, 10),
            FieldSpec::binary("Password", 14, 12),
            FieldSpec::u32_be("TickCount", 26),
            FieldSpec::binary("ClientVersion", 30, 5),
            FieldSpec::binary("ClientSerial", 35, 16),
        ])
        .sent_when("The player submitted the login dialog.")
        .caused_reaction("The server checks the credentials and answers with a login response.");

pub static LOGIN_075: PacketDescriptor =
    PacketDescriptor::new("Login075", HeaderSpec::c3_sub(0xF1, 0x01))
        .variant("Login", ClientVersion::V075)
        .client()
        .fixed(49)
        .fields(&[
            FieldSpec::binary("Username", 4, 10),
            FieldSpec::binary("Password", 14, 10),
            FieldSpec::u32_be("TickCount", 24),
            FieldSpec::binary("ClientVersion", 28, 5),
            FieldSpec::binary("ClientSerial", 33, 16),
        ])
        .sent_when("The player submitted the login dialog.")
        .caused_reaction("The server checks the credentials and answers with a login response.");

pub static LOGOUT: PacketDescriptor = PacketDescriptor::new("Logout", HeaderSpec::c1_sub(0xF1, 0x02))
    .client()
    .fixed(5)
    .fields(&[FieldSpec::byte("Type", 4).labeled(&enums::LOG_OUT_TYPE)])
    .sent_when("The player chose to leave the game or the character.")
    .caused_reaction("The server saves the character and answers with a logout response.");

pub static REQUEST_CHARACTER_LIST: PacketDescriptor =
    PacketDescriptor::new("RequestCharacterList", HeaderSpec::c1_sub(0xF3, 0x00))
        .client()
        .fixed(5)
        .fields(&[FieldSpec::byte("Language", 4)])
        .sent_when("The login succeeded or the player returned to character selection.")
        .caused_reaction("The server sends the character list.");

pub static CREATE_CHARACTER: PacketDescriptor =
    PacketDescriptor::new("CreateCharacter", HeaderSpec::c1_sub(0xF3, 0x01))
        .client()
        .fixed(15)
        .fields(&[
            FieldSpec::string("Name", 4, 10),
            FieldSpec::byte("Class", 14).labeled(&enums::CHARACTER_CLASS_NUMBER),
        ])
        .sent_when("The player submitted the character creation dialog.")
        .caused_reaction("The server creates the character and sends the result.");

pub static DELETE_CHARACTER: PacketDescriptor =
    PacketDescriptor::new("DeleteCharacter", HeaderSpec::c1_sub(0xF3, 0x02))
        .client()
        .fixed(24)
        .fields(&[
            FieldSpec::string("Name", 4, 10),
            FieldSpec::string("SecurityCode", 14, 10),
        ])
        .sent_when("The player confirmed the deletion of a character.")
        .caused_reaction("The server deletes the character if the security code matches.");

pub static SELECT_CHARACTER: PacketDescriptor =
    PacketDescriptor::new("SelectCharacter", HeaderSpec::c1_sub(0xF3, 0x03))
        .client()
        .fixed(14)
        .fields(&[FieldSpec::string("Name", 4, 10)])
        .sent_when("The player entered the game with a character.")
        .caused_reaction("The server sends the character information and places it on its map.");

pub static INCREASE_CHARACTER_STAT_POINT: PacketDescriptor =
    PacketDescriptor::new("IncreaseCharacterStatPoint", HeaderSpec::c1_sub(0xF3, 0x06))
        .client()
        .fixed(5)
        .fields(&[FieldSpec::byte("StatType", 4).labeled(&enums::CHARACTER_STAT_ATTRIBUTE)])
        .sent_when("The player spent a level-up point.")
        .caused_reaction("The server raises the stat and sends the result.");

pub static CHECK_CHARACTER_NAME: PacketDescriptor =
    PacketDescriptor::new("CheckCharacterName", HeaderSpec::c1_sub(0xF3, 0x15))
        .variant("CheckCharacterName", ClientVersion::Season6)
        .client()
        .fixed(14)
        .fields(&[FieldSpec::string("Name", 4, 10)])
        .sent_when("The player typed a new name in the rename dialog.")
        .caused_reaction("The server tells whether the name is available.");

pub static RENAME_CHARACTER: PacketDescriptor =
    PacketDescriptor::new("RenameCharacter", HeaderSpec::c1_sub(0xF3, 0x16))
        .variant("RenameCharacter", ClientVersion::Season6)
        .client()
        .fixed(24)
        .fields(&[
            FieldSpec::string("OldName", 4, 10),
            FieldSpec::string("NewName", 14, 10),
        ])
        .sent_when("The player confirmed the rename dialog.")
        .caused_reaction("The server renames the character.");

pub static TOGGLE_SKIN: PacketDescriptor =
    PacketDescriptor::new("ToggleSkin", HeaderSpec::c1_sub(0xF3, 0x21))
        .variant("ToggleSkin", ClientVersion::Season6)
        .client()
        .fixed(5)
        .fields(&[FieldSpec::flag("ShowTransformation", 4, 0)])
        .sent_when("The player toggled the display of a transformation ring.")
        .caused_reaction("The server updates the appearance for players in range.");

pub static SAVE_KEY_CONFIGURATION: PacketDescriptor =
    PacketDescriptor::new("SaveKeyConfiguration", HeaderSpec::c1_sub(0xF3, 0x30))
        .client()
        .fixed(34)
        .fields(&[
            FieldSpec::binary("SkillKeys", 4, 20),
            FieldSpec::byte("GameOptions", 24),
            FieldSpec::byte("QKey", 25),
            FieldSpec::byte("WKey", 26),
            FieldSpec::byte("EKey", 27),
            FieldSpec::byte("ChatWindow", 28),
            FieldSpec::byte("RKey", 29),
            FieldSpec::u32_le("QWERLevel", 30),
        ])
        .sent_when("The player closed the options or changed the skill hotkeys.")
        .caused_reaction("The server stores the configuration with the character.");

pub static SERVER_CHANGE_AUTHENTICATION: PacketDescriptor =
    PacketDescriptor::new("ServerChangeAuthentication", HeaderSpec::c3_sub(0xB1, 0x01))
        .client()
        .fixed(69)
        .fields(&[
            FieldSpec::binary("AccountXor3", 4, 12),
            FieldSpec::binary("CharacterNameXor3", 16, 12),
            FieldSpec::u32_le("AuthCode1", 28),
            FieldSpec::u32_le("AuthCode2", 32),
            FieldSpec::u32_le("AuthCode3", 36),
            FieldSpec::u32_le("AuthCode4", 40),
            FieldSpec::u32_le("TickCount", 44),
            FieldSpec::binary("ClientVersion", 48, 5),
            FieldSpec::binary("ClientSerial", 53, 16),
        ])
        .sent_when("The client reconnected to another game server after a map change.")
        .caused_reaction("The server authenticates the session without a password.");

pub static LIVE_CLIENT: PacketDescriptor = PacketDescriptor::new("LiveClient", HeaderSpec::c1(0x0E))
    .client()
    .fixed(11)
    .fields(&[
        FieldSpec::u32_le("TickCount", 3),
        FieldSpec::u16_le("AttackSpeed", 7),
        FieldSpec::u16_le("MagicSpeed", 9),
    ])
    .sent_when("The client sends it periodically while connected.")
    .caused_reaction("The server checks the reported speeds for speed hacks.");

pub static CHECKSUM_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("ChecksumResponse", HeaderSpec::c1(0x03))
        .client()
        .fixed(7)
        .fields(&[FieldSpec::u32_le("Checksum", 3)])
        .sent_when("The server asked for the checksum of the client executable.")
        .caused_reaction("The server disconnects clients with a wrong checksum.");
