//! Item descriptor catalog
//!
//! Maps an item's file code (its row across weapons/armor/misc) to a name,
//! a logical type and its inventory footprint.

use serde::Serialize;

/// Logical item type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemType {
    Axe,
    Wand,
    Club,
    Scepter,
    Mace,
    Hammer,
    Sword,
    Helm,
    Armor,
    Shield,
    Gloves,
    Boots,
    Belt,
    Elixir,
    HealingPotion,
    ManaPotion,
    RejuvPotion,
    StaminaPotion,
    AntidotePotion,
    ThawingPotion,
    Scroll,
    Tome,
    Gold,
    Amulet,
    Ring,
    Charm,
    Rune,
    Key,
    Quest,
    Unknown,
}

impl ItemType {
    pub fn is_type(self, other: ItemType) -> bool {
        self == other
    }

    pub fn is_weapon(self) -> bool {
        matches!(
            self,
            Self::Axe
                | Self::Wand
                | Self::Club
                | Self::Scepter
                | Self::Mace
                | Self::Hammer
                | Self::Sword
        )
    }

    pub fn is_armor(self) -> bool {
        matches!(
            self,
            Self::Helm | Self::Armor | Self::Shield | Self::Gloves | Self::Boots | Self::Belt
        )
    }

    pub fn is_potion(self) -> bool {
        matches!(
            self,
            Self::HealingPotion
                | Self::ManaPotion
                | Self::RejuvPotion
                | Self::StaminaPotion
                | Self::AntidotePotion
                | Self::ThawingPotion
        )
    }
}

/// Static description of an item base
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDescriptor {
    pub id: u32,
    pub code: &'static str,
    pub name: &'static str,
    pub item_type: ItemType,
    /// Footprint in inventory cells
    pub width: i32,
    pub height: i32,
}

/// Descriptor lookup keyed by file code
///
/// Total: every code yields a descriptor. Unknown codes are the caller's
/// problem, so implementations return a placeholder instead of failing.
pub trait ItemCatalog {
    fn describe(&self, id: u32) -> &ItemDescriptor;
}

/// Placeholder for codes missing from the catalog
pub static UNKNOWN_ITEM: ItemDescriptor = ItemDescriptor {
    id: u32::MAX,
    code: "???",
    name: "Unknown",
    item_type: ItemType::Unknown,
    width: 1,
    height: 1,
};

const fn item(
    id: u32,
    code: &'static str,
    name: &'static str,
    item_type: ItemType,
    width: i32,
    height: i32,
) -> ItemDescriptor {
    ItemDescriptor {
        id,
        code,
        name,
        item_type,
        width,
        height,
    }
}

use ItemType::*;

/// Built-in descriptors, sorted by id
pub const ITEMS: &[ItemDescriptor] = &[
    // Weapons
    item(0, "hax", "Hand Axe", Axe, 1, 3),
    item(1, "axe", "Axe", Axe, 2, 3),
    item(2, "2ax", "Double Axe", Axe, 2, 3),
    item(3, "mpi", "Military Pick", Axe, 2, 3),
    item(4, "wax", "War Axe", Axe, 2, 3),
    item(5, "lax", "Large Axe", Axe, 2, 3),
    item(6, "bax", "Broad Axe", Axe, 2, 3),
    item(7, "btx", "Battle Axe", Axe, 2, 3),
    item(8, "gax", "Great Axe", Axe, 2, 4),
    item(9, "gix", "Giant Axe", Axe, 2, 3),
    item(10, "wnd", "Wand", Wand, 1, 2),
    item(11, "ywn", "Yew Wand", Wand, 1, 2),
    item(12, "bwn", "Bone Wand", Wand, 1, 2),
    item(13, "gwn", "Grim Wand", Wand, 1, 2),
    item(14, "clb", "Club", Club, 1, 3),
    item(15, "scp", "Scepter", Scepter, 1, 3),
    item(16, "gsc", "Grand Scepter", Scepter, 1, 3),
    item(17, "wsp", "War Scepter", Scepter, 2, 3),
    item(18, "spc", "Spiked Club", Club, 1, 3),
    item(19, "mac", "Mace", Mace, 1, 3),
    item(20, "mst", "Morning Star", Mace, 1, 3),
    item(21, "fla", "Flail", Mace, 2, 3),
    item(22, "whm", "War Hammer", Hammer, 2, 3),
    item(23, "mau", "Maul", Hammer, 2, 4),
    item(24, "gma", "Great Maul", Hammer, 2, 3),
    item(25, "ssd", "Short Sword", Sword, 1, 3),
    item(26, "scm", "Scimitar", Sword, 1, 3),
    item(27, "sbr", "Sabre", Sword, 1, 3),
    item(28, "flc", "Falchion", Sword, 1, 3),
    item(29, "crs", "Crystal Sword", Sword, 2, 3),
    item(30, "bsd", "Broad Sword", Sword, 2, 3),
    item(31, "lsd", "Long Sword", Sword, 2, 3),
    item(32, "wsd", "War Sword", Sword, 1, 3),
    // Armor
    item(306, "cap", "Cap", Helm, 2, 2),
    item(307, "skp", "Skull Cap", Helm, 2, 2),
    item(308, "hlm", "Helm", Helm, 2, 2),
    item(309, "fhl", "Full Helm", Helm, 2, 2),
    item(310, "ghm", "Great Helm", Helm, 2, 2),
    item(311, "crn", "Crown", Helm, 2, 2),
    item(312, "msk", "Mask", Helm, 2, 2),
    item(313, "qui", "Quilted Armor", Armor, 2, 3),
    item(314, "lea", "Leather Armor", Armor, 2, 3),
    item(315, "hla", "Hard Leather Armor", Armor, 2, 3),
    item(316, "stu", "Studded Leather", Armor, 2, 3),
    item(317, "rng", "Ring Mail", Armor, 2, 3),
    item(318, "scl", "Scale Mail", Armor, 2, 3),
    item(319, "chn", "Chain Mail", Armor, 2, 3),
    item(320, "brs", "Breast Plate", Armor, 2, 3),
    item(321, "spl", "Splint Mail", Armor, 2, 3),
    item(322, "plt", "Plate Mail", Armor, 2, 3),
    item(323, "fld", "Field Plate", Armor, 2, 3),
    item(324, "gth", "Gothic Plate", Armor, 2, 3),
    item(325, "ful", "Full Plate Mail", Armor, 2, 3),
    item(326, "aar", "Ancient Armor", Armor, 2, 3),
    item(327, "ltp", "Light Plate", Armor, 2, 3),
    item(328, "buc", "Buckler", Shield, 2, 2),
    item(329, "sml", "Small Shield", Shield, 2, 2),
    item(330, "lrg", "Large Shield", Shield, 2, 3),
    item(331, "kit", "Kite Shield", Shield, 2, 3),
    item(332, "tow", "Tower Shield", Shield, 2, 3),
    item(333, "gts", "Gothic Shield", Shield, 2, 4),
    item(334, "lgl", "Leather Gloves", Gloves, 2, 2),
    item(335, "vgl", "Heavy Gloves", Gloves, 2, 2),
    item(336, "mgl", "Chain Gloves", Gloves, 2, 2),
    item(337, "tgl", "Light Gauntlets", Gloves, 2, 2),
    item(338, "hgl", "Gauntlets", Gloves, 2, 2),
    item(339, "lbt", "Boots", Boots, 2, 2),
    item(340, "vbt", "Heavy Boots", Boots, 2, 2),
    item(341, "mbt", "Chain Boots", Boots, 2, 2),
    item(342, "tbt", "Light Plated Boots", Boots, 2, 2),
    item(343, "hbt", "Greaves", Boots, 2, 2),
    item(344, "lbl", "Sash", Belt, 2, 1),
    item(345, "vbl", "Light Belt", Belt, 2, 1),
    item(346, "mbl", "Belt", Belt, 2, 1),
    item(347, "tbl", "Heavy Belt", Belt, 2, 1),
    item(348, "hbl", "Plated Belt", Belt, 2, 1),
    // Misc
    item(508, "elx", "Elixir", Elixir, 1, 1),
    item(513, "vps", "Stamina Potion", StaminaPotion, 1, 1),
    item(514, "yps", "Antidote Potion", AntidotePotion, 1, 1),
    item(515, "rvs", "Rejuvenation Potion", RejuvPotion, 1, 1),
    item(516, "rvl", "Full Rejuvenation Potion", RejuvPotion, 1, 1),
    item(517, "wms", "Thawing Potion", ThawingPotion, 1, 1),
    item(518, "tbk", "Tome of Town Portal", Tome, 1, 2),
    item(519, "ibk", "Tome of Identify", Tome, 1, 2),
    item(520, "amu", "Amulet", Amulet, 1, 1),
    item(522, "rin", "Ring", Ring, 1, 1),
    item(523, "gld", "Gold", Gold, 1, 1),
    item(529, "tsc", "Scroll of Town Portal", Scroll, 1, 1),
    item(530, "isc", "Scroll of Identify", Scroll, 1, 1),
    item(543, "key", "Key", Key, 1, 1),
    item(549, "box", "Horadric Cube", Quest, 2, 2),
    item(587, "hp1", "Minor Healing Potion", HealingPotion, 1, 1),
    item(588, "hp2", "Light Healing Potion", HealingPotion, 1, 1),
    item(589, "hp3", "Healing Potion", HealingPotion, 1, 1),
    item(590, "hp4", "Greater Healing Potion", HealingPotion, 1, 1),
    item(591, "hp5", "Super Healing Potion", HealingPotion, 1, 1),
    item(592, "mp1", "Minor Mana Potion", ManaPotion, 1, 1),
    item(593, "mp2", "Light Mana Potion", ManaPotion, 1, 1),
    item(594, "mp3", "Mana Potion", ManaPotion, 1, 1),
    item(595, "mp4", "Greater Mana Potion", ManaPotion, 1, 1),
    item(596, "mp5", "Super Mana Potion", ManaPotion, 1, 1),
    item(603, "cm1", "Small Charm", Charm, 1, 1),
    item(604, "cm2", "Large Charm", Charm, 1, 2),
    item(605, "cm3", "Grand Charm", Charm, 1, 3),
    item(610, "r01", "El Rune", Rune, 1, 1),
    item(611, "r02", "Eld Rune", Rune, 1, 1),
    item(612, "r03", "Tir Rune", Rune, 1, 1),
    item(613, "r04", "Nef Rune", Rune, 1, 1),
    item(614, "r05", "Eth Rune", Rune, 1, 1),
    item(615, "r06", "Ith Rune", Rune, 1, 1),
    item(616, "r07", "Tal Rune", Rune, 1, 1),
    item(617, "r08", "Ral Rune", Rune, 1, 1),
    item(618, "r09", "Ort Rune", Rune, 1, 1),
    item(619, "r10", "Thul Rune", Rune, 1, 1),
];

/// Catalog backed by the built-in [`ITEMS`] table
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl ItemCatalog for StaticCatalog {
    fn describe(&self, id: u32) -> &ItemDescriptor {
        item_by_id(id).unwrap_or(&UNKNOWN_ITEM)
    }
}

/// Get a built-in descriptor by file code
pub fn item_by_id(id: u32) -> Option<&'static ItemDescriptor> {
    ITEMS
        .binary_search_by_key(&id, |d| d.id)
        .ok()
        .map(|idx| &ITEMS[idx])
}

/// Get a built-in descriptor by name (case-insensitive)
pub fn item_by_name(name: &str) -> Option<&'static ItemDescriptor> {
    ITEMS.iter().find(|d| d.name.eq_ignore_ascii_case(name))
}
