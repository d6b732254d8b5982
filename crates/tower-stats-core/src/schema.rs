//! Record schema for a single Tower run
//!
//! Every statistic is declared once in the `record_schema!` invocation below.
//! That declaration produces the `Record` struct, its read-only accessors and
//! the label table the parser uses, so a field's kind can never disagree with
//! its storage type.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::SchemaError;

/// Format of the `timestamp` identity field
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Format of the `session_id` identity field
pub const SESSION_ID_FORMAT: &str = "session_%Y%m%d_%H%M%S";

/// Semantic kind of a statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Non-negative integer, defaults to 0
    Counter,
    /// Game notation kept verbatim ("110.82T", "2d 8h 12m 19s")
    Magnitude,
    /// Short free-form text such as the cause of death
    Label,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Counter => "counter",
            FieldKind::Magnitude => "magnitude",
            FieldKind::Label => "label",
        };
        f.write_str(name)
    }
}

/// One row of the label table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Label exactly as the game exports it
    pub label: &'static str,
    /// Attribute name on `Record` and key in the backing document
    pub name: &'static str,
    pub kind: FieldKind,
}

/// A field value borrowed from a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Counter(u64),
    Text(&'a str),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Counter(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Storage slot for a declared field
trait Slot {
    fn view(&self) -> FieldValue<'_>;
    fn fill(&mut self, value: FieldValue<'_>) -> bool;
}

impl Slot for u64 {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::Counter(*self)
    }

    fn fill(&mut self, value: FieldValue<'_>) -> bool {
        match value {
            FieldValue::Counter(n) => {
                *self = n;
                true
            }
            FieldValue::Text(_) => false,
        }
    }
}

impl Slot for String {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }

    fn fill(&mut self, value: FieldValue<'_>) -> bool {
        match value {
            FieldValue::Text(s) => {
                s.clone_into(self);
                true
            }
            FieldValue::Counter(_) => false,
        }
    }
}

/// Storage type for each kind, named after the kind
mod storage {
    pub type Counter = u64;
    pub type Magnitude = String;
    pub type Label = String;
}

macro_rules! accessor {
    (Counter, $name:ident, $label:literal) => {
        #[doc = concat!("`", $label, "`")]
        pub fn $name(&self) -> u64 {
            self.$name
        }
    };
    ($kind:ident, $name:ident, $label:literal) => {
        #[doc = concat!("`", $label, "`")]
        pub fn $name(&self) -> &str {
            &self.$name
        }
    };
}

macro_rules! record_schema {
    ($($label:literal => $name:ident: $kind:ident,)*) => {
        /// One completed game session
        ///
        /// Statistic fields are written once by the parser; identity metadata
        /// is stamped at the same time. Both are read-only afterwards.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct Record {
            $($name: storage::$kind,)*
            timestamp: String,
            session_id: String,
        }

        /// Label table in declaration order
        pub static FIELDS: &[FieldSpec] = &[
            $(FieldSpec {
                label: $label,
                name: stringify!($name),
                kind: FieldKind::$kind,
            },)*
        ];

        impl Record {
            $(accessor!($kind, $name, $label);)*

            fn slot(&self, name: &str) -> Option<&dyn Slot> {
                match name {
                    $(stringify!($name) => Some(&self.$name as &dyn Slot),)*
                    "timestamp" => Some(&self.timestamp as &dyn Slot),
                    "session_id" => Some(&self.session_id as &dyn Slot),
                    _ => None,
                }
            }

            fn slot_mut(&mut self, name: &str) -> Option<&mut dyn Slot> {
                match name {
                    $(stringify!($name) => Some(&mut self.$name as &mut dyn Slot),)*
                    _ => None,
                }
            }
        }
    };
}

record_schema! {
    "Game Time" => game_time: Magnitude,
    "Real Time" => real_time: Magnitude,
    "Tier" => tier: Counter,
    "Wave" => wave: Counter,
    "Killed By" => killed_by: Label,

    "Coins Earned" => coins_earned: Magnitude,
    "Cash Earned" => cash_earned: Magnitude,
    "Interest Earned" => interest_earned: Magnitude,
    "Gem Blocks Tapped" => gem_blocks_tapped: Counter,
    "Cells Earned" => cells_earned: Magnitude,
    "Reroll Shards Earned" => reroll_shards_earned: Magnitude,

    "Damage Taken" => damage_taken: Magnitude,
    "Damage Taken Wall" => damage_taken_wall: Magnitude,
    "Damage Taken While Berserked" => damage_taken_while_berserked: Magnitude,
    "Damage Gain From Berserk" => damage_gain_from_berserk: Magnitude,
    "Death Defy" => death_defy: Counter,
    "Damage Dealt" => damage_dealt: Magnitude,

    "Projectiles Damage" => projectiles_damage: Magnitude,
    "Rend Armor Damage" => rend_armor_damage: Magnitude,
    "Projectiles Count" => projectiles_count: Magnitude,
    "Lifesteal" => lifesteal: Counter,
    "Thorn Damage" => thorn_damage: Magnitude,
    "Orb Damage" => orb_damage: Magnitude,
    "Orb Hits" => orb_hits: Magnitude,
    "Land Mine Damage" => land_mine_damage: Magnitude,
    "Land Mines Spawned" => land_mines_spawned: Counter,
    "Death Ray Damage" => death_ray_damage: Magnitude,
    "Smart Missile Damage" => smart_missile_damage: Magnitude,
    "Inner Land Mine Damage" => inner_land_mine_damage: Magnitude,
    "Chain Lightning Damage" => chain_lightning_damage: Magnitude,
    "Death Wave Damage" => death_wave_damage: Magnitude,
    "Swamp Damage" => swamp_damage: Magnitude,
    "Black Hole Damage" => black_hole_damage: Magnitude,

    "Waves Skipped" => waves_skipped: Counter,
    "Recovery Packages" => recovery_packages: Counter,
    "Free Attack Upgrade" => free_attack_upgrade: Counter,
    "Free Defense Upgrade" => free_defense_upgrade: Counter,
    "Free Utility Upgrade" => free_utility_upgrade: Counter,

    "HP From Death Wave" => hp_from_death_wave: Magnitude,
    "Coins from Death Wave" => coins_from_death_wave: Magnitude,

    "Cash from Golden Tower" => cash_from_golden_tower: Magnitude,
    "Coins from Golden Tower" => coins_from_golden_tower: Magnitude,
    "Coins from Blackhole" => coins_from_blackhole: Magnitude,
    "Coins from Spotlight" => coins_from_spotlight: Magnitude,
    "Coins from Orbs" => coins_from_orbs: Magnitude,
    "Coins from Coin Upgrade" => coins_from_coin_upgrade: Magnitude,
    "Coins from Coin Bonuses" => coins_from_coin_bonuses: Magnitude,

    "Total Enemies" => total_enemies: Counter,
    "Basic" => basic: Counter,
    "Fast" => fast: Counter,
    "Tank" => tank: Counter,
    "Ranged" => ranged: Counter,
    "Boss" => boss: Counter,
    "Protector" => protector: Counter,
    "Total Elites" => total_elites: Counter,
    "Vampires" => vampires: Counter,
    "Rays" => rays: Counter,
    "Scatters" => scatters: Counter,
    "Saboteurs" => saboteurs: Counter,
    "Commanders" => commanders: Counter,
    "Overcharges" => overcharges: Counter,

    "Destroyed by Orbs" => destroyed_by_orbs: Counter,
    "Destroyed by Thorns" => destroyed_by_thorns: Counter,
    "Destroyed by Death ray" => destroyed_by_death_ray: Counter,
    "Destroyed by Land Mine" => destroyed_by_land_mine: Counter,

    "Flame bot damage" => flame_bot_damage: Magnitude,
    "Thunder bot stuns" => thunder_bot_stuns: Counter,
    "Golden bot coins earned" => golden_bot_coins_earned: Magnitude,

    "Damage" => damage: Magnitude,
    "Coins Stolen" => coins_stolen: Magnitude,
    "Guardian catches" => guardian_catches: Counter,
    "Coins Fetched" => coins_fetched: Magnitude,

    "Gems" => gems: Counter,
    "Medals" => medals: Counter,
    "Reroll Shards" => reroll_shards: Counter,
    "Cannon Shards" => cannon_shards: Counter,
    "Armor Shards" => armor_shards: Counter,
    "Generator Shards" => generator_shards: Counter,
    "Core Shards" => core_shards: Counter,
    "Common Modules" => common_modules: Counter,
    "Rare Modules" => rare_modules: Counter,
}

static BY_LABEL: OnceLock<HashMap<&'static str, &'static FieldSpec>> = OnceLock::new();

/// All declared statistics, in declaration order
pub fn fields() -> &'static [FieldSpec] {
    FIELDS
}

/// Look up a statistic by its exact export label (case-sensitive)
pub fn field_by_label(label: &str) -> Option<&'static FieldSpec> {
    BY_LABEL
        .get_or_init(|| FIELDS.iter().map(|spec| (spec.label, spec)).collect())
        .get(label)
        .copied()
}

/// Look up a statistic by attribute name
pub fn field_by_name(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

impl Record {
    /// ISO-8601 creation time, empty for a record that was never stamped
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Read any attribute, identity metadata included, by name
    pub fn get(&self, name: &str) -> Option<FieldValue<'_>> {
        self.slot(name).map(|slot| slot.view())
    }

    /// Plain mapping of attribute name to value, schema order, identity last
    pub fn to_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::with_capacity(FIELDS.len() + 2);
        for spec in FIELDS {
            let value = match self.get(spec.name) {
                Some(FieldValue::Counter(n)) => serde_json::Value::from(n),
                Some(FieldValue::Text(s)) => serde_json::Value::from(s),
                None => continue,
            };
            map.insert(spec.name.to_string(), value);
        }
        map.insert("timestamp".to_string(), self.timestamp.clone().into());
        map.insert("session_id".to_string(), self.session_id.clone().into());
        map
    }

    /// Rebuild a record from `to_map` output
    ///
    /// Missing keys take their defaults and unknown keys are ignored. A value
    /// whose JSON type does not match the field's kind is rejected.
    pub fn from_map(map: serde_json::Map<String, serde_json::Value>) -> Result<Self, SchemaError> {
        Ok(serde_json::from_value(serde_json::Value::Object(map))?)
    }

    /// Write a coerced value into a statistic; `false` if the name is not a
    /// statistic or the value does not match its kind
    pub(crate) fn set(&mut self, name: &str, value: FieldValue<'_>) -> bool {
        match self.slot_mut(name) {
            Some(slot) => slot.fill(value),
            None => false,
        }
    }

    /// Stamp identity metadata from one instant
    pub(crate) fn stamp(&mut self, at: NaiveDateTime) {
        self.timestamp = at.format(TIMESTAMP_FORMAT).to_string();
        self.session_id = at.format(SESSION_ID_FORMAT).to_string();
    }
}
