//! Inventory, NPC stores, vault, crafting and player shops.

use crate::catalog::enums;
use crate::descriptor::PacketDescriptor;
use crate::field::FieldSpec;
use crate::header::HeaderSpec;
use crate::version::ClientVersion;

pub static PICKUP_ITEM_REQUEST: PacketDescriptor =
    PacketDescriptor::new("PickupItemRequest", HeaderSpec::c1(0x22))
        .client()
        .fixed(5)
        .fields(&[FieldSpec::u16_be("ItemId", 3)])
        .sent_when("The player clicked on an item on the ground.")
        .caused_reaction("The server moves the item into the inventory.");

pub static DROP_ITEM_REQUEST: PacketDescriptor =
    PacketDescriptor::new("DropItemRequest", HeaderSpec::c1(0x23))
        .client()
        .fixed(6)
        .fields(&[
            FieldSpec::byte("TargetX", 3),
            FieldSpec::byte("TargetY", 4),
            FieldSpec::byte("ItemSlot", 5),
        ])
        .sent_when("The player dropped an item onto the ground.")
        .caused_reaction("The server drops the item and answers with the result.");

pub static ITEM_MOVE_REQUEST: PacketDescriptor =
    PacketDescriptor::new("ItemMoveRequest", HeaderSpec::c1(0x24))
        .variant("ItemMoveRequest", ClientVersion::V097)
        .client()
        .fixed(19)
        .fields(&[
            FieldSpec::byte("FromStorage", 3).labeled(&enums::ITEM_STORAGE_KIND),
            FieldSpec::byte("FromSlot", 4),
            FieldSpec::binary("ItemData", 5, 12),
            FieldSpec::byte("ToStorage", 17).labeled(&enums::ITEM_STORAGE_KIND),
            FieldSpec::byte("ToSlot", 18),
        ])
        .sent_when("The player moved an item between slots or storages.")
        .caused_reaction("The server moves the item and answers with the new slot.");

pub static ITEM_MOVE_REQUEST_075: PacketDescriptor =
    PacketDescriptor::new("ItemMoveRequest075", HeaderSpec::c1(0x24))
        .variant("ItemMoveRequest", ClientVersion::V075)
        .client()
        .fixed(14)
        .fields(&[
            FieldSpec::byte("FromStorage", 3).labeled(&enums::ITEM_STORAGE_KIND),
            FieldSpec::byte("FromSlot", 4),
            FieldSpec::binary("ItemData", 5, 7),
            FieldSpec::byte("ToStorage", 12).labeled(&enums::ITEM_STORAGE_KIND),
            FieldSpec::byte("ToSlot", 13),
        ])
        .sent_when("The player moved an item between slots or storages.")
        .caused_reaction("The server moves the item and answers with the new slot.");

pub static CONSUME_ITEM_REQUEST: PacketDescriptor =
    PacketDescriptor::new("ConsumeItemRequest", HeaderSpec::c1(0x26))
        .client()
        .fixed(6)
        .fields(&[
            FieldSpec::byte("ItemSlot", 3),
            FieldSpec::byte("TargetSlot", 4),
            FieldSpec::byte("FruitConsumption", 5),
        ])
        .sent_when("The player used a potion, jewel or another consumable.")
        .caused_reaction("The server applies the item and updates the affected values.");

pub static TALK_TO_NPC_REQUEST: PacketDescriptor =
    PacketDescriptor::new("TalkToNpcRequest", HeaderSpec::c1(0x30))
        .client()
        .fixed(5)
        .fields(&[FieldSpec::u16_be("NpcId", 3)])
        .sent_when("The player clicked on an NPC.")
        .caused_reaction("The server opens the NPC window or lets the NPC talk.");

pub static CLOSE_NPC_REQUEST: PacketDescriptor =
    PacketDescriptor::new("CloseNpcRequest", HeaderSpec::c1(0x31))
        .client()
        .fixed(3)
        .sent_when("The player closed an NPC window.")
        .caused_reaction("The server ends the NPC dialog.");

pub static BUY_ITEM_FROM_NPC_REQUEST: PacketDescriptor =
    PacketDescriptor::new("BuyItemFromNpcRequest", HeaderSpec::c1(0x32))
        .client()
        .fixed(4)
        .fields(&[FieldSpec::byte("ItemSlot", 3)])
        .sent_when("The player bought an item of the merchant.")
        .caused_reaction("The server takes the money and adds the item to the inventory.");

pub static SELL_ITEM_TO_NPC_REQUEST: PacketDescriptor =
    PacketDescriptor::new("SellItemToNpcRequest", HeaderSpec::c1(0x33))
        .client()
        .fixed(4)
        .fields(&[FieldSpec::byte("ItemSlot", 3)])
        .sent_when("The player sold an item to the merchant.")
        .caused_reaction("The server removes the item and adds the money.");

pub static REPAIR_ITEM_REQUEST: PacketDescriptor =
    PacketDescriptor::new("RepairItemRequest", HeaderSpec::c1(0x34))
        .client()
        .fixed(5)
        .fields(&[
            FieldSpec::byte("ItemSlot", 3),
            FieldSpec::flag("IsSelfRepair", 4, 0),
        ])
        .sent_when("The player repaired an item at an NPC or by themselves.")
        .caused_reaction("The server repairs the item and takes the money.");

pub static VAULT_MOVE_MONEY_REQUEST: PacketDescriptor =
    PacketDescriptor::new("VaultMoveMoneyRequest", HeaderSpec::c1(0x81))
        .client()
        .fixed(8)
        .fields(&[
            FieldSpec::byte("Direction", 3).labeled(&enums::VAULT_MONEY_MOVE_DIRECTION),
            FieldSpec::u32_le("Amount", 4),
        ])
        .sent_when("The player moved money between inventory and vault.")
        .caused_reaction("The server moves the money and sends both amounts.");

pub static VAULT_CLOSE_REQUEST: PacketDescriptor =
    PacketDescriptor::new("VaultCloseRequest", HeaderSpec::c1(0x82))
        .client()
        .fixed(3)
        .sent_when("The player closed the vault.")
        .caused_reaction("The server saves the vault and confirms.");

pub static CHAOS_MACHINE_MIX_REQUEST: PacketDescriptor =
    PacketDescriptor::new("ChaosMachineMixRequest", HeaderSpec::c1(0x86))
        .client()
        .fixed(5)
        .fields(&[
            FieldSpec::byte("MixType", 3),
            FieldSpec::byte("SocketSlot", 4),
        ])
        .sent_when("The player pressed the mix button of the chaos machine.")
        .caused_reaction("The server tries the crafting and sends the result.");

pub static CRAFTING_DIALOG_CLOSE_REQUEST: PacketDescriptor =
    PacketDescriptor::new("CraftingDialogCloseRequest", HeaderSpec::c1(0x87))
        .client()
        .fixed(3)
        .sent_when("The player closed the chaos machine.")
        .caused_reaction("The server returns the remaining items to the inventory.");

pub static PLAYER_SHOP_SET_ITEM_PRICE: PacketDescriptor =
    PacketDescriptor::new("PlayerShopSetItemPrice", HeaderSpec::c1_sub(0x3F, 0x01))
        .client()
        .fixed(9)
        .fields(&[
            FieldSpec::byte("ItemSlot", 4),
            FieldSpec::u32_le("Price", 5),
        ])
        .sent_when("The player set the price of an item in the personal shop.")
        .caused_reaction("The server stores the price.");

pub static PLAYER_SHOP_OPEN: PacketDescriptor =
    PacketDescriptor::new("PlayerShopOpen", HeaderSpec::c1_sub(0x3F, 0x02))
        .client()
        .fixed(40)
        .fields(&[FieldSpec::string("StoreName", 4, 36)])
        .sent_when("The player opened the personal shop.")
        .caused_reaction("The server opens the shop and shows its name to the players in range.");

pub static PLAYER_SHOP_CLOSE: PacketDescriptor =
    PacketDescriptor::new("PlayerShopClose", HeaderSpec::c1_sub(0x3F, 0x03))
        .client()
        .fixed(4)
        .sent_when("The player closed the personal shop.")
        .caused_reaction("The server closes the shop.");

pub static PLAYER_SHOP_ITEM_LIST_REQUEST: PacketDescriptor =
    PacketDescriptor::new("PlayerShopItemListRequest", HeaderSpec::c1_sub(0x3F, 0x05))
        .client()
        .fixed(16)
        .fields(&[
            FieldSpec::u16_be("PlayerId", 4),
            FieldSpec::string("PlayerName", 6, 10),
        ])
        .sent_when("The player clicked on the shop of another player.")
        .caused_reaction("The server sends the items of the shop.");

pub static PLAYER_SHOP_ITEM_BUY_REQUEST: PacketDescriptor =
    PacketDescriptor::new("PlayerShopItemBuyRequest", HeaderSpec::c1_sub(0x3F, 0x06))
        .client()
        .fixed(17)
        .fields(&[
            FieldSpec::u16_be("PlayerId", 4),
            FieldSpec::string("PlayerName", 6, 10),
            FieldSpec::byte("ItemSlot", 16),
        ])
        .sent_when("The player bought an item of another player's shop.")
        .caused_reaction("The server transfers the item and the money.");
