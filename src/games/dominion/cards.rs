//! Definition ids of the reference card set.

use crate::cards::CardId;

// Base
pub const COPPER: CardId = CardId::new(1);
pub const SILVER: CardId = CardId::new(2);
pub const GOLD: CardId = CardId::new(3);
pub const ESTATE: CardId = CardId::new(4);
pub const DUCHY: CardId = CardId::new(5);
pub const PROVINCE: CardId = CardId::new(6);
pub const CURSE: CardId = CardId::new(7);

// Seaside
pub const GHOSTSHIP: CardId = CardId::new(101);
pub const WHARF: CardId = CardId::new(102);
pub const SEA_HAG: CardId = CardId::new(103);
pub const CARAVAN: CardId = CardId::new(104);
pub const SALVAGER: CardId = CardId::new(105);
pub const BAZAAR: CardId = CardId::new(106);
pub const MERCHANT_SHIP: CardId = CardId::new(107);
pub const PEARL_DIVER: CardId = CardId::new(108);
pub const CUTPURSE: CardId = CardId::new(109);
pub const SMUGGLERS: CardId = CardId::new(110);
pub const WAREHOUSE: CardId = CardId::new(111);
pub const TACTICIAN: CardId = CardId::new(112);
pub const HAVEN: CardId = CardId::new(113);
pub const TREASURE_MAP: CardId = CardId::new(114);
pub const TREASURY: CardId = CardId::new(115);
pub const FISHING_VILLAGE: CardId = CardId::new(116);
pub const LIGHTHOUSE: CardId = CardId::new(117);
pub const AMBASSADOR: CardId = CardId::new(118);
pub const PIRATE_SHIP: CardId = CardId::new(119);
pub const ISLAND: CardId = CardId::new(120);

// Prosperity
pub const LOAN: CardId = CardId::new(201);
pub const TRADE_ROUTE: CardId = CardId::new(202);
pub const CITY: CardId = CardId::new(203);
pub const WORKERS_VILLAGE: CardId = CardId::new(204);
pub const EXPAND: CardId = CardId::new(205);
pub const BANK: CardId = CardId::new(206);
pub const WATCHTOWER: CardId = CardId::new(207);
pub const BISHOP: CardId = CardId::new(208);
pub const COUNTING_HOUSE: CardId = CardId::new(209);
pub const MONUMENT: CardId = CardId::new(210);
pub const QUARRY: CardId = CardId::new(211);
pub const TALISMAN: CardId = CardId::new(212);
