//! Enumerations carried by catalog fields.

use crate::wire_enum;

wire_enum! {
    /// Outcome of a login request.
    pub enum LoginResult / LOGIN_RESULT {
        InvalidPassword = 0,
        Okay = 1,
        AccountInvalid = 2,
        AccountAlreadyConnected = 3,
        ServerIsFull = 4,
        AccountBlocked = 5,
        WrongVersion = 6,
        ConnectionError = 7,
        ConnectionClosed3Fails = 8,
        NoChargeInfo = 9,
        SubscriptionTermOver = 10,
        SubscriptionTimeOver = 11,
        TemporaryBlocked = 14,
        OnlyPlayersOver15Yrs = 17,
    }

    pub enum LogOutType / LOG_OUT_TYPE {
        CloseGame = 0,
        BackToCharacterSelection = 1,
        BackToServerSelection = 2,
    }

    pub enum CharacterDeleteResult / CHARACTER_DELETE_RESULT {
        Unsuccessful = 0,
        Successful = 1,
        WrongSecurityCode = 2,
    }

    pub enum CharacterStatus / CHARACTER_STATUS {
        Normal = 0,
        Banned = 1,
        GameMaster = 32,
    }

    /// Player-killer standing, four bits wide on the wire.
    pub enum CharacterHeroState / CHARACTER_HERO_STATE {
        New = 0,
        Hero = 1,
        LightHero = 2,
        Normal = 3,
        PlayerKillWarning = 4,
        PlayerKiller1stStage = 5,
        PlayerKiller2ndStage = 6,
    }

    pub enum CharacterClassNumber / CHARACTER_CLASS_NUMBER {
        DarkWizard = 0,
        SoulMaster = 2,
        GrandMaster = 3,
        DarkKnight = 4,
        BladeKnight = 6,
        BladeMaster = 7,
        FairyElf = 8,
        MuseElf = 10,
        HighElf = 11,
        MagicGladiator = 12,
        DuelMaster = 13,
        DarkLord = 16,
        LordEmperor = 17,
        Summoner = 20,
        BloodySummoner = 22,
        DimensionMaster = 23,
        RageFighter = 24,
        FistMaster = 25,
    }

    pub enum CharacterStatAttribute / CHARACTER_STAT_ATTRIBUTE {
        Strength = 0,
        Agility = 1,
        Vitality = 2,
        Energy = 3,
        Leadership = 4,
    }

    pub enum GuildMemberRole / GUILD_MEMBER_ROLE {
        NormalMember = 0,
        BattleMaster = 32,
        GuildMaster = 128,
        Undefined = 255,
    }

    pub enum GuildWarType / GUILD_WAR_TYPE {
        Normal = 0,
        Soccer = 1,
    }

    pub enum GuildWarResult / GUILD_WAR_RESULT {
        Lost = 0,
        Won = 1,
        OtherGuildMasterCancelledWar = 2,
        CancelledWar = 3,
        LostByGuildDisbanded = 4,
        WonByGuildDisbanded = 5,
        LostByGuildMasterLeft = 6,
    }

    pub enum GuildWarRequestResult / GUILD_WAR_REQUEST_RESULT {
        GuildNotFound = 0,
        RequestSentToGuildMaster = 1,
        GuildMasterOffline = 2,
        NotInGuild = 3,
        AlreadyInWar = 4,
        NotTheGuildMaster = 5,
        RequestRefused = 6,
    }

    pub enum GuildRequestAnswer / GUILD_REQUEST_ANSWER {
        Refused = 0,
        Accepted = 1,
        GuildFull = 2,
        GuildMasterOffline = 3,
        NotTheGuildMaster = 4,
        AlreadyHaveGuild = 5,
        GuildMasterOrRequesterIsBusy = 6,
        MinimumLevelNotMet = 7,
    }

    pub enum GuildCreationResult / GUILD_CREATION_RESULT {
        GuildNameAlreadyTaken = 0,
        Success = 1,
        InvalidGuildName = 2,
    }

    pub enum GuildRelationshipType / GUILD_RELATIONSHIP_TYPE {
        Undefined = 0,
        Alliance = 1,
        Hostility = 2,
    }

    pub enum GuildKickResult / GUILD_KICK_RESULT {
        Failed = 0,
        Success = 1,
        GuildDisband = 4,
        InsufficientPermission = 5,
    }

    pub enum ServerMessageType / SERVER_MESSAGE_TYPE {
        GoldenCenter = 0,
        BlueNormal = 1,
        GuildNotice = 2,
    }

    /// Colour of a damage number, low four bits of the hit kind byte.
    pub enum DamageKind / DAMAGE_KIND {
        NormalRed = 0,
        IgnoreDefenseCyan = 1,
        ExcellentLightGreen = 2,
        CriticalBlue = 3,
        LightPink = 4,
        PoisonDarkGreen = 5,
        ReflectedDarkPink = 6,
        White = 7,
    }

    pub enum Element / ELEMENT {
        None = 0,
        Ice = 1,
        Poison = 2,
        Lightning = 3,
        Fire = 4,
        Earth = 5,
        Wind = 6,
        Water = 7,
    }

    pub enum ItemStorageKind / ITEM_STORAGE_KIND {
        Inventory = 0,
        Trade = 1,
        Vault = 2,
        ChaosMachine = 3,
        PlayerShop = 4,
        InventoryPetSlot = 5,
    }

    pub enum TradeButtonState / TRADE_BUTTON_STATE {
        Unchecked = 0,
        Checked = 1,
        Red = 2,
    }

    pub enum TradeResult / TRADE_RESULT {
        Cancelled = 0,
        Success = 1,
        FailedByFullInventory = 2,
        TimedOut = 3,
        FailedByItemsNotAllowedToTrade = 4,
    }

    pub enum NpcWindow / NPC_WINDOW {
        Merchant = 0,
        Merchant1 = 1,
        VaultStorage = 2,
        ChaosMachine = 3,
        DevilSquare = 4,
        BloodCastle = 6,
        PetTrainer = 7,
        Lahap = 9,
        CastleSeniorNpc = 12,
        ElphisRefinery = 17,
        RefineStoneMaking = 18,
        RemoveJohOption = 19,
        IllusionTemple = 20,
        ChaosCardCombination = 21,
        CherryBlossomBranchesAssembly = 22,
        SeedMaster = 23,
        SeedResearcher = 24,
        StatReInitializer = 25,
        DelgadoLuckyCoinRegistration = 32,
        DoorkeeperTitusDuelWatch = 33,
        LugardDoppelgangerEntry = 35,
        JerintGaionEventEntry = 36,
        JuliaWarpMarketServer = 37,
        CombineLuckyItem = 38,
    }

    pub enum DuelStartResult / DUEL_START_RESULT {
        Success = 0,
        FailedByError = 12,
        FailedByNoFreeRoom = 16,
        FailedByNotEnoughMoney = 30,
        FailedByTooLowLevel = 31,
        FailedByTargetBusy = 32,
        Refused = 15,
    }

    pub enum LetterSendResult / LETTER_SEND_RESULT {
        TryAgain = 0,
        Success = 1,
        MailboxFull = 2,
        ReceiverNotExists = 3,
        CantSendToYourself = 4,
        NotEnoughMoney = 7,
    }

    pub enum LetterState / LETTER_STATE {
        Read = 0,
        Unread = 1,
        New = 2,
    }

    pub enum FriendAddResult / FRIEND_ADD_RESULT {
        Failed = 0,
        Success = 1,
        AlreadyAdded = 2,
        FriendListFull = 3,
    }

    pub enum MapEventType / MAP_EVENT_TYPE {
        RedDragon = 1,
        GoldenDragon = 3,
    }

    pub enum EventType / EVENT_TYPE {
        DevilSquare = 1,
        BloodCastle = 2,
        ChaosCastle = 4,
        IllusionTemple = 5,
    }

    pub enum PetType / PET_TYPE {
        DarkRaven = 0,
        DarkHorse = 1,
    }

    pub enum PetStorage / PET_STORAGE {
        Inventory = 0,
        TradeWindow = 1,
        Vault = 2,
        PlayerShop = 4,
    }

    pub enum PetCommandMode / PET_COMMAND_MODE {
        Normal = 0,
        AttackRandom = 1,
        AttackWithOwner = 2,
        AttackTarget = 3,
    }

    pub enum VaultLockState / VAULT_LOCK_STATE {
        Unlocked = 0,
        Locked = 1,
        UnlockFailedByWrongPin = 10,
        SecurityCodeSet = 12,
        SecurityCodeRemoved = 13,
        SecurityCodeForgotten = 33,
    }

    pub enum VaultMoneyMoveDirection / VAULT_MONEY_MOVE_DIRECTION {
        InventoryToVault = 0,
        VaultToInventory = 1,
    }

    pub enum ItemCraftingResult / ITEM_CRAFTING_RESULT {
        Failed = 0,
        Success = 1,
        IncorrectMixItems = 2,
        NotEnoughMoney = 3,
        TooManyItems = 4,
        CharacterLevelTooLow = 5,
        LackingMixItems = 6,
        IncorrectSocketItems = 7,
        IncorrectCombinationItems = 8,
    }

    /// Two-bit state of a legacy quest.
    pub enum LegacyQuestState / LEGACY_QUEST_STATE {
        Inactive = 0,
        Active = 1,
        Complete = 2,
        Undefined = 3,
    }

    pub enum PlayerShopResult / PLAYER_SHOP_RESULT {
        Failed = 0,
        Success = 1,
        ItemPriceNotSet = 2,
        TooLowLevel = 3,
        InvalidItem = 4,
    }

    pub enum FruitConsumptionResult / FRUIT_CONSUMPTION_RESULT {
        PlusSuccess = 0,
        PlusFailed = 1,
        PlusPrevented = 2,
        MinusSuccess = 3,
        MinusFailed = 4,
        MinusPrevented = 5,
        NotAllowed = 6,
    }

    /// Answer to a request to enter Blood Castle, Devil Square, Chaos Castle
    /// or the Illusion Temple.
    pub enum MiniGameEnterResult / MINI_GAME_ENTER_RESULT {
        Success = 0,
        NotOpen = 1,
        CharacterLevelTooLow = 2,
        CharacterLevelTooHigh = 3,
        Full = 4,
        NotEnoughMoney = 5,
        PlayerKillerCantEnter = 6,
        TicketMissing = 7,
    }

    pub enum BloodCastleStage / BLOOD_CASTLE_STAGE {
        Started = 0,
        Running = 1,
        Ended = 2,
        GateDestroyed = 4,
        StatueDestroyed = 5,
    }

    pub enum IllusionTemplePhase / ILLUSION_TEMPLE_PHASE {
        WaitingForPlayers = 0,
        WaitingToStart = 1,
        Started = 2,
        Ended = 3,
    }

    pub enum KanturuState / KANTURU_STATE {
        None = 0,
        Standby = 1,
        MayaBattle = 2,
        NightmareBattle = 3,
        TowerOfRefinement = 4,
        End = 5,
    }

    pub enum CrywolfState / CRYWOLF_STATE {
        None = 0,
        Notify1 = 1,
        Notify2 = 2,
        Ready = 3,
        Start = 4,
        End = 5,
        EndCycle = 6,
    }

    pub enum CastleSiegeState / CASTLE_SIEGE_STATE {
        Idle1 = 0,
        RegisterGuilds = 1,
        Idle2 = 2,
        RegisterMarks = 3,
        Idle3 = 4,
        Notify = 5,
        Ready = 6,
        Start = 7,
        End = 8,
        EndCycle = 9,
    }

    pub enum CastleGateOperation / CASTLE_GATE_OPERATION {
        Close = 0,
        Open = 1,
    }

    pub enum GensType / GENS_TYPE {
        Undefined = 0,
        Duprian = 1,
        Vanert = 2,
    }

    pub enum QuestConditionType / QUEST_CONDITION_TYPE {
        None = 0,
        MonsterKills = 1,
        Skill = 2,
        Item = 4,
        Level = 8,
        ClientAction = 16,
        Buff = 32,
        EventMapPlayerKills = 64,
        EventMapMonsterKills = 65,
        BloodCastleGateDestroyed = 66,
        EventMapClears = 256,
        DevilSquareClears = 257,
        BloodCastleClears = 258,
    }

    pub enum MuHelperState / MU_HELPER_STATE {
        Running = 0,
        Stopped = 1,
        ConsumeMoney = 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::WireEnum;

    #[test]
    fn labels_match_variants() {
        assert_eq!(GUILD_WAR_TYPE.label(1), Some("Soccer"));
        assert_eq!(GuildWarType::Soccer.raw(), 1);
        assert_eq!(GuildWarType::from_raw(0), Some(GuildWarType::Normal));
        assert_eq!(LOGIN_RESULT.code_of("AccountBlocked"), Some(5));
    }

    #[test]
    fn unknown_codes_have_no_variant() {
        assert_eq!(DamageKind::from_raw(9), None);
        assert_eq!(LOGIN_RESULT.label(200), None);
    }
}
