//! Objects entering and leaving the view range, movement and map changes.

use crate::catalog::enums;
use crate::descriptor::PacketDescriptor;
use crate::field::FieldSpec;
use crate::group::GroupSpec;
use crate::header::HeaderSpec;
use crate::version::ClientVersion;

/// Each player is followed by `EffectCount` one-byte effect ids.
pub static ADD_CHARACTERS_TO_SCOPE: PacketDescriptor =
    PacketDescriptor::new("AddCharactersToScope", HeaderSpec::c2(0x12))
        .variant("AddCharactersToScope", ClientVersion::Season6)
        .fields(&[FieldSpec::byte("CharacterCount", 4)])
        .groups(&[GroupSpec::dynamic("Characters", "CharacterCount", 5, 36)
            .fields(&[
                FieldSpec::u16_be("Id", 0),
                FieldSpec::byte("CurrentPositionX", 2),
                FieldSpec::byte("CurrentPositionY", 3),
                FieldSpec::binary("Appearance", 4, 18),
                FieldSpec::string("Name", 22, 10),
                FieldSpec::byte("TargetPositionX", 32),
                FieldSpec::byte("TargetPositionY", 33),
                FieldSpec::bits("Rotation", 34, 4, 4),
                FieldSpec::bits("HeroState", 34, 0, 4).labeled(&enums::CHARACTER_HERO_STATE),
                FieldSpec::byte("EffectCount", 35),
            ])
            .nested(&[GroupSpec::fixed("Effects", "EffectCount", 36, 1)
                .fields(&[FieldSpec::byte("Id", 0)])])])
        .sent_when("Players came into the view range of the receiving player.")
        .caused_reaction("The client adds the players to the map.");

pub static ADD_CHARACTERS_TO_SCOPE_095: PacketDescriptor =
    PacketDescriptor::new("AddCharactersToScope095", HeaderSpec::c2(0x12))
        .variant("AddCharactersToScope", ClientVersion::V095)
        .fields(&[FieldSpec::byte("CharacterCount", 4)])
        .groups(&[GroupSpec::dynamic("Characters", "CharacterCount", 5, 35)
            .fields(&[
                FieldSpec::u16_be("Id", 0),
                FieldSpec::byte("CurrentPositionX", 2),
                FieldSpec::byte("CurrentPositionY", 3),
                FieldSpec::binary("Appearance", 4, 17),
                FieldSpec::string("Name", 21, 10),
                FieldSpec::byte("TargetPositionX", 31),
                FieldSpec::byte("TargetPositionY", 32),
                FieldSpec::bits("Rotation", 33, 4, 4),
                FieldSpec::bits("HeroState", 33, 0, 4).labeled(&enums::CHARACTER_HERO_STATE),
                FieldSpec::byte("EffectCount", 34),
            ])
            .nested(&[GroupSpec::fixed("Effects", "EffectCount", 35, 1)
                .fields(&[FieldSpec::byte("Id", 0)])])])
        .sent_when("Players came into the view range of the receiving player.")
        .caused_reaction("The client adds the players to the map.");

pub static ADD_CHARACTERS_TO_SCOPE_075: PacketDescriptor =
    PacketDescriptor::new("AddCharactersToScope075", HeaderSpec::c1(0x12))
        .variant("AddCharactersToScope", ClientVersion::V075)
        .fields(&[FieldSpec::byte("CharacterCount", 3)])
        .groups(&[GroupSpec::fixed("Characters", "CharacterCount", 4, 29).fields(&[
            FieldSpec::u16_be("Id", 0),
            FieldSpec::byte("CurrentPositionX", 2),
            FieldSpec::byte("CurrentPositionY", 3),
            FieldSpec::binary("Appearance", 4, 11),
            FieldSpec::string("Name", 15, 10),
            FieldSpec::byte("TargetPositionX", 25),
            FieldSpec::byte("TargetPositionY", 26),
            FieldSpec::bits("Rotation", 27, 4, 4),
            FieldSpec::bits("HeroState", 27, 0, 4).labeled(&enums::CHARACTER_HERO_STATE),
            FieldSpec::flag("IsPoisoned", 28, 0),
            FieldSpec::flag("IsIced", 28, 1),
        ])])
        .sent_when("Players came into the view range of the receiving player.")
        .caused_reaction("The client adds the players to the map.");

pub static ADD_NPCS_TO_SCOPE: PacketDescriptor =
    PacketDescriptor::new("AddNpcsToScope", HeaderSpec::c2(0x13))
        .variant("AddNpcsToScope", ClientVersion::V095)
        .fields(&[FieldSpec::byte("NpcCount", 4)])
        .groups(&[GroupSpec::dynamic("Npcs", "NpcCount", 5, 10)
            .fields(&[
                FieldSpec::u16_be("Id", 0),
                FieldSpec::u16_be("TypeNumber", 2),
                FieldSpec::byte("CurrentPositionX", 4),
                FieldSpec::byte("CurrentPositionY", 5),
                FieldSpec::byte("TargetPositionX", 6),
                FieldSpec::byte("TargetPositionY", 7),
                FieldSpec::bits("Rotation", 8, 4, 4),
                FieldSpec::byte("EffectCount", 9),
            ])
            .nested(&[GroupSpec::fixed("Effects", "EffectCount", 10, 1)
                .fields(&[FieldSpec::byte("Id", 0)])])])
        .sent_when("Monsters or NPCs came into the view range of the receiving player.")
        .caused_reaction("The client adds the NPCs to the map.");

pub static ADD_NPCS_TO_SCOPE_075: PacketDescriptor =
    PacketDescriptor::new("AddNpcsToScope075", HeaderSpec::c1(0x13))
        .variant("AddNpcsToScope", ClientVersion::V075)
        .fields(&[FieldSpec::byte("NpcCount", 3)])
        .groups(&[GroupSpec::fixed("Npcs", "NpcCount", 4, 9).fields(&[
            FieldSpec::u16_be("Id", 0),
            FieldSpec::u16_be("TypeNumber", 2),
            FieldSpec::byte("CurrentPositionX", 4),
            FieldSpec::byte("CurrentPositionY", 5),
            FieldSpec::byte("TargetPositionX", 6),
            FieldSpec::byte("TargetPositionY", 7),
            FieldSpec::bits("Rotation", 8, 4, 4),
        ])])
        .sent_when("Monsters or NPCs came into the view range of the receiving player.")
        .caused_reaction("The client adds the NPCs to the map.");

pub static MAP_OBJECT_OUT_OF_SCOPE: PacketDescriptor =
    PacketDescriptor::new("MapObjectOutOfScope", HeaderSpec::c1(0x14))
        .fields(&[FieldSpec::byte("ObjectCount", 3)])
        .groups(&[GroupSpec::fixed("Objects", "ObjectCount", 4, 2)
            .fields(&[FieldSpec::u16_be("Id", 0)])])
        .sent_when("Objects left the view range of the receiving player.")
        .caused_reaction("The client removes the objects from the map.");

pub static OBJECT_MOVED: PacketDescriptor =
    PacketDescriptor::new("ObjectMoved", HeaderSpec::c1(0x15))
        .fixed(7)
        .fields(&[
            FieldSpec::u16_be("ObjectId", 3),
            FieldSpec::byte("PositionX", 5),
            FieldSpec::byte("PositionY", 6),
        ])
        .sent_when("An object was moved instantly, without walking.")
        .caused_reaction("The client places the object at the new position.");

/// Step directions follow as packed nibbles.
pub static OBJECT_WALKED: PacketDescriptor =
    PacketDescriptor::new("ObjectWalked", HeaderSpec::c1(0xD4))
        .variant("ObjectWalked", ClientVersion::V095)
        .fields(&[
            FieldSpec::u16_be("ObjectId", 3),
            FieldSpec::byte("TargetX", 5),
            FieldSpec::byte("TargetY", 6),
            FieldSpec::bits("TargetRotation", 7, 4, 4),
            FieldSpec::bits("StepCount", 7, 0, 4),
            FieldSpec::trailing_binary("StepData", 8),
        ])
        .sent_when("An object in the view range walked to another position.")
        .caused_reaction("The client animates the walk along the steps.");

pub static OBJECT_WALKED_075: PacketDescriptor =
    PacketDescriptor::new("ObjectWalked075", HeaderSpec::c1(0x10))
        .variant("ObjectWalked", ClientVersion::V075)
        .fields(&[
            FieldSpec::u16_be("ObjectId", 3),
            FieldSpec::byte("TargetX", 5),
            FieldSpec::byte("TargetY", 6),
            FieldSpec::bits("TargetRotation", 7, 4, 4),
            FieldSpec::bits("StepCount", 7, 0, 4),
            FieldSpec::trailing_binary("StepData", 8),
        ])
        .sent_when("An object in the view range walked to another position.")
        .caused_reaction("The client animates the walk along the steps.");

pub static ITEMS_DROPPED: PacketDescriptor =
    PacketDescriptor::new("ItemsDropped", HeaderSpec::c2(0x20))
        .variant("ItemsDropped", ClientVersion::V095)
        .fields(&[FieldSpec::byte("ItemCount", 4)])
        .groups(&[GroupSpec::fixed("Items", "ItemCount", 5, 16).fields(&[
            FieldSpec::u16_be("Id", 0),
            FieldSpec::byte("PositionX", 2),
            FieldSpec::byte("PositionY", 3),
            FieldSpec::binary("ItemData", 4, 12),
        ])])
        .sent_when("Items were dropped or came into the view range.")
        .caused_reaction("The client shows the items on the ground.");

pub static ITEMS_DROPPED_075: PacketDescriptor =
    PacketDescriptor::new("ItemsDropped075", HeaderSpec::c2(0x20))
        .variant("ItemsDropped", ClientVersion::V075)
        .fields(&[FieldSpec::byte("ItemCount", 4)])
        .groups(&[GroupSpec::fixed("Items", "ItemCount", 5, 11).fields(&[
            FieldSpec::u16_be("Id", 0),
            FieldSpec::byte("PositionX", 2),
            FieldSpec::byte("PositionY", 3),
            FieldSpec::binary("ItemData", 4, 7),
        ])])
        .sent_when("Items were dropped or came into the view range.")
        .caused_reaction("The client shows the items on the ground.");

pub static DROPPED_ITEMS_DISAPPEARED: PacketDescriptor =
    PacketDescriptor::new("DroppedItemsDisappeared", HeaderSpec::c2(0x21))
        .fields(&[FieldSpec::byte("ItemCount", 4)])
        .groups(&[GroupSpec::fixed("Items", "ItemCount", 5, 2)
            .fields(&[FieldSpec::u16_be("Id", 0)])])
        .sent_when("Dropped items were picked up, expired or left the view range.")
        .caused_reaction("The client removes the items from the ground.");

pub static APPEARANCE_CHANGED: PacketDescriptor =
    PacketDescriptor::new("AppearanceChanged", HeaderSpec::c1(0x25))
        .variant("AppearanceChanged", ClientVersion::V095)
        .fixed(11)
        .fields(&[
            FieldSpec::u16_be("ChangedPlayerId", 3),
            FieldSpec::bits("ItemSlot", 5, 4, 4),
            FieldSpec::bits("ItemGroup", 5, 0, 4),
            FieldSpec::byte("ItemNumber", 6),
            FieldSpec::byte("ItemLevel", 7),
            FieldSpec::byte("ExcellentFlags", 8),
            FieldSpec::byte("AncientDiscriminator", 9),
            FieldSpec::flag("IsAncientSetComplete", 10, 0),
        ])
        .sent_when("A player in the view range changed a visible piece of equipment.")
        .caused_reaction("The client redraws the player with the new item.");

pub static APPEARANCE_CHANGED_075: PacketDescriptor =
    PacketDescriptor::new("AppearanceChanged075", HeaderSpec::c1(0x25))
        .variant("AppearanceChanged", ClientVersion::V075)
        .fixed(12)
        .fields(&[
            FieldSpec::u16_be("ChangedPlayerId", 3),
            FieldSpec::binary("ItemData", 5, 7),
        ])
        .sent_when("A player in the view range changed a visible piece of equipment.")
        .caused_reaction("The client redraws the player with the new item.");

pub static MAP_CHANGED: PacketDescriptor =
    PacketDescriptor::new("MapChanged", HeaderSpec::c3_sub(0x1C, 0x0F))
        .variant("MapChanged", ClientVersion::V095)
        .fixed(10)
        .fields(&[
            FieldSpec::flag("IsMapChange", 4, 0),
            FieldSpec::u16_le("MapNumber", 5),
            FieldSpec::byte("PositionX", 7),
            FieldSpec::byte("PositionY", 8),
            FieldSpec::byte("Rotation", 9),
        ])
        .sent_when("The player entered a gate or was teleported.")
        .caused_reaction("The client loads the map if it changed and places the player.");

pub static MAP_CHANGED_075: PacketDescriptor =
    PacketDescriptor::new("MapChanged075", HeaderSpec::c3(0x1C))
        .variant("MapChanged", ClientVersion::V075)
        .fixed(7)
        .fields(&[
            FieldSpec::byte("MapNumber", 3),
            FieldSpec::byte("PositionX", 4),
            FieldSpec::byte("PositionY", 5),
            FieldSpec::byte("Rotation", 6),
        ])
        .sent_when("The player entered a gate or was teleported.")
        .caused_reaction("The client loads the map if it changed and places the player.");

pub static OBJECT_HEALTH_BARS: PacketDescriptor =
    PacketDescriptor::new("ObjectHealthBars", HeaderSpec::c2_sub(0xEC, 0x11))
        .variant("ObjectHealthBars", ClientVersion::Season6)
        .fields(&[FieldSpec::byte("BarCount", 5)])
        .groups(&[GroupSpec::fixed("Bars", "BarCount", 6, 5).fields(&[
            FieldSpec::u16_le("ObjectId", 0),
            FieldSpec::byte("Type", 2),
            FieldSpec::byte("Rate", 3),
            FieldSpec::byte("SecondaryRate", 4),
        ])])
        .sent_when("The health of monsters in the view range changed.")
        .caused_reaction("The client updates the health bars above the monsters.");
