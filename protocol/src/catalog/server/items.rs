//! Inventory, NPC stores, vault, crafting and player shops.

use crate::catalog::enums;
use crate::descriptor::PacketDescriptor;
use crate::field::FieldSpec;
use crate::group::GroupSpec;
use crate::header::HeaderSpec;
use crate::version::ClientVersion;

pub static CHARACTER_INVENTORY: PacketDescriptor =
    PacketDescriptor::new("CharacterInventory", HeaderSpec::c4_sub(0xF3, 0x10))
        .variant("CharacterInventory", ClientVersion::V095)
        .fields(&[FieldSpec::byte("ItemCount", 5)])
        .groups(&[GroupSpec::fixed("Items", "ItemCount", 6, 13).fields(&[
            FieldSpec::byte("ItemSlot", 0),
            FieldSpec::binary("ItemData", 1, 12),
        ])])
        .sent_when("The character entered the game.")
        .caused_reaction("The client fills the inventory and equipment slots.");

pub static CHARACTER_INVENTORY_075: PacketDescriptor =
    PacketDescriptor::new("CharacterInventory075", HeaderSpec::c4_sub(0xF3, 0x10))
        .variant("CharacterInventory", ClientVersion::V075)
        .fields(&[FieldSpec::byte("ItemCount", 5)])
        .groups(&[GroupSpec::fixed("Items", "ItemCount", 6, 8).fields(&[
            FieldSpec::byte("ItemSlot", 0),
            FieldSpec::binary("ItemData", 1, 7),
        ])])
        .sent_when("The character entered the game.")
        .caused_reaction("The client fills the inventory and equipment slots.");

pub static INVENTORY_ITEM_UPGRADED: PacketDescriptor =
    PacketDescriptor::new("InventoryItemUpgraded", HeaderSpec::c1_sub(0xF3, 0x14))
        .fixed(17)
        .fields(&[
            FieldSpec::byte("InventorySlot", 4),
            FieldSpec::binary("ItemData", 5, 12),
        ])
        .sent_when("An item in the inventory got upgraded with a jewel.")
        .caused_reaction("The client replaces the item data of the slot.");

pub static ITEM_ADDED_TO_INVENTORY: PacketDescriptor =
    PacketDescriptor::new("ItemAddedToInventory", HeaderSpec::c3(0x22))
        .fixed(16)
        .fields(&[
            FieldSpec::byte("InventorySlot", 3),
            FieldSpec::binary("ItemData", 4, 12),
        ])
        .sent_when("The player picked up an item.")
        .caused_reaction("The client places the item into the inventory.");

pub static ITEM_DROP_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("ItemDropResponse", HeaderSpec::c1(0x23))
        .fixed(5)
        .fields(&[
            FieldSpec::flag("Success", 3, 0),
            FieldSpec::byte("InventorySlot", 4),
        ])
        .sent_when("The player asked to drop an item to the ground.")
        .caused_reaction("On success the client removes the item from the inventory.");

pub static ITEM_MOVED: PacketDescriptor = PacketDescriptor::new("ItemMoved", HeaderSpec::c3(0x24))
    .fixed(17)
    .fields(&[
        FieldSpec::byte("TargetStorage", 3).labeled(&enums::ITEM_STORAGE_KIND),
        FieldSpec::byte("TargetSlot", 4),
        FieldSpec::binary("ItemData", 5, 12),
    ])
    .sent_when("The player moved an item between storages or slots.")
    .caused_reaction("The client puts the item into the target slot.");

pub static ITEM_REMOVED: PacketDescriptor =
    PacketDescriptor::new("ItemRemoved", HeaderSpec::c1(0x28))
        .fixed(5)
        .fields(&[
            FieldSpec::byte("InventorySlot", 3),
            FieldSpec::byte("TrueFlag", 4),
        ])
        .sent_when("An item was removed from the inventory.")
        .caused_reaction("The client clears the slot.");

pub static ITEM_DURABILITY_CHANGED: PacketDescriptor =
    PacketDescriptor::new("ItemDurabilityChanged", HeaderSpec::c1(0x2A))
        .fixed(6)
        .fields(&[
            FieldSpec::byte("InventorySlot", 3),
            FieldSpec::byte("Durability", 4),
            FieldSpec::flag("ByConsumption", 5, 0),
        ])
        .sent_when("The durability of an item decreased.")
        .caused_reaction("The client updates the durability of the item.");

pub static FRUIT_CONSUMPTION_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("FruitConsumptionResponse", HeaderSpec::c1(0x2C))
        .fixed(8)
        .fields(&[
            FieldSpec::byte("Result", 3).labeled(&enums::FRUIT_CONSUMPTION_RESULT),
            FieldSpec::u16_le("StatPoints", 4),
            FieldSpec::byte("StatType", 6).labeled(&enums::CHARACTER_STAT_ATTRIBUTE),
        ])
        .sent_when("The player consumed a fruit to add or remove stat points.")
        .caused_reaction("The client shows the outcome and updates the stat.");

pub static NPC_WINDOW_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("NpcWindowResponse", HeaderSpec::c3(0x30))
        .fixed(4)
        .fields(&[FieldSpec::byte("Window", 3).labeled(&enums::NPC_WINDOW)])
        .sent_when("The player talked to an NPC which opens a dialog.")
        .caused_reaction("The client opens the window of the NPC.");

pub static STORE_ITEM_LIST: PacketDescriptor =
    PacketDescriptor::new("StoreItemList", HeaderSpec::c4(0x31))
        .variant("StoreItemList", ClientVersion::V095)
        .fields(&[FieldSpec::byte("Type", 4), FieldSpec::byte("ItemCount", 5)])
        .groups(&[GroupSpec::fixed("Items", "ItemCount", 6, 13).fields(&[
            FieldSpec::byte("ItemSlot", 0),
            FieldSpec::binary("ItemData", 1, 12),
        ])])
        .sent_when("The player opened a merchant or another item storage of an NPC.")
        .caused_reaction("The client shows the offered items.");

pub static STORE_ITEM_LIST_075: PacketDescriptor =
    PacketDescriptor::new("StoreItemList075", HeaderSpec::c4(0x31))
        .variant("StoreItemList", ClientVersion::V075)
        .fields(&[FieldSpec::byte("Type", 4), FieldSpec::byte("ItemCount", 5)])
        .groups(&[GroupSpec::fixed("Items", "ItemCount", 6, 8).fields(&[
            FieldSpec::byte("ItemSlot", 0),
            FieldSpec::binary("ItemData", 1, 7),
        ])])
        .sent_when("The player opened a merchant or another item storage of an NPC.")
        .caused_reaction("The client shows the offered items.");

pub static ITEM_BOUGHT: PacketDescriptor =
    PacketDescriptor::new("ItemBought", HeaderSpec::c1(0x32))
        .fixed(16)
        .fields(&[
            FieldSpec::byte("InventorySlot", 3),
            FieldSpec::binary("ItemData", 4, 12),
        ])
        .sent_when("The player bought an item from an NPC merchant.")
        .caused_reaction("The client adds the item to the inventory.");

pub static NPC_ITEM_SELL_RESULT: PacketDescriptor =
    PacketDescriptor::new("NpcItemSellResult", HeaderSpec::c1(0x33))
        .fixed(8)
        .fields(&[FieldSpec::flag("Success", 3, 0), FieldSpec::u32_be("Money", 4)])
        .sent_when("The player sold an item to an NPC merchant.")
        .caused_reaction("The client removes the item and updates the money.");

pub static ITEM_REPAIRED: PacketDescriptor =
    PacketDescriptor::new("ItemRepaired", HeaderSpec::c1(0x34))
        .fixed(8)
        .fields(&[FieldSpec::u32_le("Money", 4)])
        .sent_when("The player repaired one or all items.")
        .caused_reaction("The client updates the money.");

pub static VAULT_MONEY_UPDATE: PacketDescriptor =
    PacketDescriptor::new("VaultMoneyUpdate", HeaderSpec::c1(0x81))
        .fixed(12)
        .fields(&[
            FieldSpec::flag("Success", 3, 0),
            FieldSpec::u32_le("VaultMoney", 4),
            FieldSpec::u32_le("InventoryMoney", 8),
        ])
        .sent_when("The player moved money between inventory and vault.")
        .caused_reaction("The client updates both money amounts.");

pub static VAULT_CLOSED: PacketDescriptor =
    PacketDescriptor::new("VaultClosed", HeaderSpec::c1(0x82))
        .fixed(3)
        .sent_when("The player closed the vault.")
        .caused_reaction("The client closes the vault dialog.");

pub static VAULT_PROTECTION_INFORMATION: PacketDescriptor =
    PacketDescriptor::new("VaultProtectionInformation", HeaderSpec::c1(0x83))
        .fixed(4)
        .fields(&[FieldSpec::byte("ProtectionState", 3).labeled(&enums::VAULT_LOCK_STATE)])
        .sent_when("The vault was opened or its lock state changed.")
        .caused_reaction("The client shows the lock state of the vault.");

pub static ITEM_CRAFTING_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("ItemCraftingResponse", HeaderSpec::c1(0x86))
        .fixed(16)
        .fields(&[
            FieldSpec::byte("Result", 3).labeled(&enums::ITEM_CRAFTING_RESULT),
            FieldSpec::binary("ItemData", 4, 12),
        ])
        .sent_when("The chaos machine finished a crafting attempt.")
        .caused_reaction("The client shows the result and the crafted item.");

pub static CRAFTING_DIALOG_CLOSED: PacketDescriptor =
    PacketDescriptor::new("CraftingDialogClosed", HeaderSpec::c1(0x87))
        .fixed(3)
        .sent_when("The crafting dialog was closed on the server side.")
        .caused_reaction("The client closes the chaos machine window.");

pub static PLAYER_SHOP_SET_ITEM_PRICE_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("PlayerShopSetItemPriceResponse", HeaderSpec::c1_sub(0x3F, 0x01))
        .fixed(6)
        .fields(&[
            FieldSpec::byte("InventorySlot", 4),
            FieldSpec::byte("Result", 5).labeled(&enums::PLAYER_SHOP_RESULT),
        ])
        .sent_when("The player set the price of an item in the personal shop.")
        .caused_reaction("The client shows the price or an error.");

pub static PLAYER_SHOP_OPEN_RESPONSE: PacketDescriptor =
    PacketDescriptor::new("PlayerShopOpenResponse", HeaderSpec::c1_sub(0x3F, 0x02))
        .fixed(5)
        .fields(&[FieldSpec::flag("Success", 4, 0)])
        .sent_when("The player asked to open the personal shop.")
        .caused_reaction("On success the client shows the shop as open.");

pub static PLAYER_SHOP_CLOSED: PacketDescriptor =
    PacketDescriptor::new("PlayerShopClosed", HeaderSpec::c1_sub(0x3F, 0x03))
        .fixed(7)
        .fields(&[
            FieldSpec::flag("Success", 4, 0),
            FieldSpec::u16_be("PlayerId", 5),
        ])
        .sent_when("A personal shop in the view range was closed.")
        .caused_reaction("The client removes the shop sign of the player.");

pub static PLAYER_SHOP_ITEM_LIST: PacketDescriptor =
    PacketDescriptor::new("PlayerShopItemList", HeaderSpec::c2_sub(0x3F, 0x05))
        .fields(&[
            FieldSpec::flag("Success", 5, 0),
            FieldSpec::u16_be("PlayerId", 6),
            FieldSpec::string("PlayerName", 8, 10),
            FieldSpec::string("ShopName", 18, 36),
            FieldSpec::byte("ItemCount", 54),
        ])
        .groups(&[GroupSpec::fixed("Items", "ItemCount", 55, 17).fields(&[
            FieldSpec::byte("ItemSlot", 0),
            FieldSpec::binary("ItemData", 1, 12),
            FieldSpec::u32_le("Price", 13),
        ])])
        .sent_when("The player opened the personal shop of another player.")
        .caused_reaction("The client shows the offered items with their prices.");

pub static PLAYER_SHOP_ITEM_SOLD: PacketDescriptor =
    PacketDescriptor::new("PlayerShopItemSold", HeaderSpec::c1_sub(0x3F, 0x08))
        .fixed(15)
        .fields(&[
            FieldSpec::byte("InventorySlot", 4),
            FieldSpec::string("BuyerName", 5, 10),
        ])
        .sent_when("Another player bought an item from the personal shop.")
        .caused_reaction("The client removes the item and names the buyer.");

pub static PLAYER_SHOP_BUY_RESULT: PacketDescriptor =
    PacketDescriptor::new("PlayerShopBuyResult", HeaderSpec::c1_sub(0x3F, 0x06))
        .fixed(20)
        .fields(&[
            FieldSpec::byte("Result", 4),
            FieldSpec::u16_be("SellerId", 5),
            FieldSpec::binary("ItemData", 7, 12),
            FieldSpec::byte("ItemSlot", 19),
        ])
        .sent_when("The player tried to buy an item from the personal shop of another player.")
        .caused_reaction("On success the client moves the item into the inventory.");

pub static PLAYER_SHOPS: PacketDescriptor =
    PacketDescriptor::new("PlayerShops", HeaderSpec::c2_sub(0x3F, 0x00))
        .fields(&[FieldSpec::byte("ShopCount", 5)])
        .groups(&[GroupSpec::fixed("Shops", "ShopCount", 6, 38).fields(&[
            FieldSpec::u16_be("PlayerId", 0),
            FieldSpec::string("StoreName", 2, 36),
        ])])
        .sent_when("Players with open personal shops came into the view range.")
        .caused_reaction("The client shows the shop titles above the players.");
