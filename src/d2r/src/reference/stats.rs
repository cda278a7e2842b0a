//! Stat identifiers and raw value interpretation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stat identifier (row index into ItemStatCost)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatId(pub u16);

impl StatId {
    pub const STRENGTH: Self = Self(0);
    pub const ENERGY: Self = Self(1);
    pub const DEXTERITY: Self = Self(2);
    pub const VITALITY: Self = Self(3);
    pub const LIFE: Self = Self(6);
    pub const MAX_LIFE: Self = Self(7);
    pub const MANA: Self = Self(8);
    pub const MAX_MANA: Self = Self(9);
    pub const STAMINA: Self = Self(10);
    pub const MAX_STAMINA: Self = Self(11);
    pub const LEVEL: Self = Self(12);
    pub const GOLD: Self = Self(14);
    pub const ENHANCED_DEFENSE: Self = Self(16);
    pub const ENHANCED_DAMAGE_MAX: Self = Self(17);
    pub const ENHANCED_DAMAGE_MIN: Self = Self(18);
    pub const ATTACK_RATING: Self = Self(19);
    pub const CHANCE_TO_BLOCK: Self = Self(20);
    pub const MIN_DAMAGE: Self = Self(21);
    pub const MAX_DAMAGE: Self = Self(22);
    pub const DEFENSE: Self = Self(31);
    pub const FIRE_RESIST: Self = Self(39);
    pub const LIGHTNING_RESIST: Self = Self(41);
    pub const COLD_RESIST: Self = Self(43);
    pub const POISON_RESIST: Self = Self(45);
    pub const COLD_LENGTH: Self = Self(56);
    pub const POISON_LENGTH: Self = Self(59);
    pub const LIFE_STEAL: Self = Self(60);
    pub const MANA_STEAL: Self = Self(62);
    pub const DURABILITY: Self = Self(72);
    pub const MAX_DURABILITY: Self = Self(73);
    pub const REPLENISH_LIFE: Self = Self(74);
    pub const GOLD_FIND: Self = Self(79);
    pub const MAGIC_FIND: Self = Self(80);
    pub const INCREASED_ATTACK_SPEED: Self = Self(93);
    pub const FASTER_RUN_WALK: Self = Self(96);
    pub const FASTER_HIT_RECOVERY: Self = Self(99);
    pub const FASTER_CAST_RATE: Self = Self(105);
    pub const ALL_SKILLS: Self = Self(127);
    pub const NUM_SOCKETS: Self = Self(194);
    pub const QUANTITY: Self = Self(70);

    /// Internal ItemStatCost name, where known
    pub fn name(self) -> Option<&'static str> {
        STAT_NAMES
            .iter()
            .find(|(id, _)| *id == self)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for StatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "stat#{}", self.0),
        }
    }
}

const STAT_NAMES: &[(StatId, &str)] = &[
    (StatId::STRENGTH, "strength"),
    (StatId::ENERGY, "energy"),
    (StatId::DEXTERITY, "dexterity"),
    (StatId::VITALITY, "vitality"),
    (StatId::LIFE, "hitpoints"),
    (StatId::MAX_LIFE, "maxhp"),
    (StatId::MANA, "mana"),
    (StatId::MAX_MANA, "maxmana"),
    (StatId::STAMINA, "stamina"),
    (StatId::MAX_STAMINA, "maxstamina"),
    (StatId::LEVEL, "level"),
    (StatId::GOLD, "gold"),
    (StatId::ENHANCED_DEFENSE, "item_armor_percent"),
    (StatId::ENHANCED_DAMAGE_MAX, "item_maxdamage_percent"),
    (StatId::ENHANCED_DAMAGE_MIN, "item_mindamage_percent"),
    (StatId::ATTACK_RATING, "tohit"),
    (StatId::CHANCE_TO_BLOCK, "toblock"),
    (StatId::MIN_DAMAGE, "mindamage"),
    (StatId::MAX_DAMAGE, "maxdamage"),
    (StatId::DEFENSE, "armorclass"),
    (StatId::FIRE_RESIST, "fireresist"),
    (StatId::LIGHTNING_RESIST, "lightresist"),
    (StatId::COLD_RESIST, "coldresist"),
    (StatId::POISON_RESIST, "poisonresist"),
    (StatId::COLD_LENGTH, "coldlength"),
    (StatId::POISON_LENGTH, "poisonlength"),
    (StatId::LIFE_STEAL, "lifedrainmindam"),
    (StatId::MANA_STEAL, "manadrainmindam"),
    (StatId::QUANTITY, "quantity"),
    (StatId::DURABILITY, "durability"),
    (StatId::MAX_DURABILITY, "maxdurability"),
    (StatId::REPLENISH_LIFE, "hpregen"),
    (StatId::GOLD_FIND, "item_goldbonus"),
    (StatId::MAGIC_FIND, "item_magicbonus"),
    (StatId::INCREASED_ATTACK_SPEED, "item_fasterattackrate"),
    (StatId::FASTER_RUN_WALK, "item_fastermovevelocity"),
    (StatId::FASTER_HIT_RECOVERY, "item_fastergethitrate"),
    (StatId::FASTER_CAST_RATE, "item_fastercastrate"),
    (StatId::ALL_SKILLS, "item_allskills"),
    (StatId::NUM_SOCKETS, "item_numsockets"),
];

/// Turns a raw (id, value) pair from memory into its meaningful form
pub trait StatResolver {
    fn resolve(&self, id: u16, raw: u32) -> (StatId, i32);
}

/// Stock ItemStatCost value encodings
///
/// Values are signed 32-bit. Life, mana and stamina are stored as 24.8 fixed
/// point; cold and poison lengths are stored in frames (25 per second).
#[derive(Debug, Clone, Copy, Default)]
pub struct D2StatResolver;

impl StatResolver for D2StatResolver {
    fn resolve(&self, id: u16, raw: u32) -> (StatId, i32) {
        let stat = StatId(id);
        let value = raw as i32;

        let value = match stat {
            StatId::LIFE
            | StatId::MAX_LIFE
            | StatId::MANA
            | StatId::MAX_MANA
            | StatId::STAMINA
            | StatId::MAX_STAMINA => value >> 8,
            StatId::COLD_LENGTH | StatId::POISON_LENGTH => value / 25,
            _ => value,
        };

        (stat, value)
    }
}
