//! Game character templates (translates the `Character` prototype of the C++
//! catalogue).
//!
//! Construction seeds class-specific stats, skills, and starting equipment.
//! Equipment lives in a `BTreeMap` so iteration order is deterministic.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

use dp_core::Prototype;

/// The closed set of character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterClass {
    /// Melee fighter: high health and defense.
    Warrior,
    /// Spell caster: high mana and magic.
    Mage,
    /// Ranged fighter: high speed.
    Archer,
    /// Stealth fighter: highest speed, light gear.
    Rogue,
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
            CharacterClass::Archer => "Archer",
            CharacterClass::Rogue => "Rogue",
        };
        f.write_str(s)
    }
}

/// Character attribute block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Hit points.
    pub health: i32,
    /// Magic points.
    pub mana: i32,
    /// Physical attack strength.
    pub attack: i32,
    /// Physical damage reduction.
    pub defense: i32,
    /// Turn/movement speed.
    pub speed: i32,
    /// Magical attack strength.
    pub magic: i32,
}

/// A cloneable character template.
///
/// ```
/// use dp_prototype::{Character, CharacterClass};
///
/// let template = Character::new(CharacterClass::Mage, "Mage Template");
/// let mut hero = template.clone();
/// hero.set_level(10);
/// assert_eq!(template.level(), 1);
/// assert_eq!(hero.stats().mana, 120);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    label: String,
    class: CharacterClass,
    level: i32,
    stats: Stats,
    skills: Vec<String>,
    equipment: BTreeMap<String, String>,
}

fn seed(class: CharacterClass) -> (Stats, Vec<&'static str>, Vec<(&'static str, &'static str)>) {
    match class {
        CharacterClass::Warrior => (
            Stats { health: 150, mana: 20, attack: 15, defense: 12, speed: 8, magic: 3 },
            vec!["Sword Mastery", "Shield Block", "Berserker Rage"],
            vec![
                ("weapon", "Iron Sword"),
                ("armor", "Chain Mail"),
                ("shield", "Wooden Shield"),
            ],
        ),
        CharacterClass::Mage => (
            Stats { health: 80, mana: 120, attack: 6, defense: 4, speed: 12, magic: 18 },
            vec!["Fireball", "Ice Shard", "Heal", "Teleport"],
            vec![
                ("weapon", "Magic Staff"),
                ("armor", "Robes"),
                ("accessory", "Spell Focus"),
            ],
        ),
        CharacterClass::Archer => (
            Stats { health: 100, mana: 60, attack: 12, defense: 8, speed: 16, magic: 8 },
            vec!["Precise Shot", "Multi-Shot", "Eagle Eye"],
            vec![
                ("weapon", "Wooden Bow"),
                ("armor", "Leather Armor"),
                ("accessory", "Quiver"),
            ],
        ),
        CharacterClass::Rogue => (
            Stats { health: 90, mana: 40, attack: 10, defense: 6, speed: 18, magic: 6 },
            vec!["Stealth", "Backstab", "Lock Picking", "Poison Blade"],
            vec![
                ("weapon", "Dagger"),
                ("armor", "Leather Armor"),
                ("accessory", "Thieves' Tools"),
            ],
        ),
    }
}

impl Character {
    /// Create a level-1 character with the class's standard stats, skills,
    /// and starting equipment.
    pub fn new(class: CharacterClass, label: &str) -> Self {
        let (stats, skills, equipment) = seed(class);
        Character {
            label: label.to_string(),
            class,
            level: 1,
            stats,
            skills: skills.into_iter().map(str::to_string).collect(),
            equipment: equipment
                .into_iter()
                .map(|(slot, item)| (slot.to_string(), item.to_string()))
                .collect(),
        }
    }

    /// The character class.
    pub fn class(&self) -> CharacterClass {
        self.class
    }

    /// The current level.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// The attribute block.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// The learned skills, in acquisition order.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// The equipped items, keyed by slot.
    pub fn equipment(&self) -> &BTreeMap<String, String> {
        &self.equipment
    }

    /// Set the level.
    pub fn set_level(&mut self, level: i32) {
        self.level = level;
    }

    /// Replace the attribute block.
    pub fn set_stats(&mut self, stats: Stats) {
        self.stats = stats;
    }

    /// Learn an additional skill.
    pub fn add_skill(&mut self, skill: &str) {
        self.skills.push(skill.to_string());
    }

    /// Equip an item in the given slot, replacing whatever was there.
    pub fn equip(&mut self, slot: &str, item: &str) {
        self.equipment.insert(slot.to_string(), item.to_string());
    }
}

impl Prototype for Character {
    fn clone_prototype(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_seed_tables() {
        let warrior = Character::new(CharacterClass::Warrior, "W");
        assert_eq!(warrior.stats().health, 150);
        assert_eq!(warrior.skills().len(), 3);
        assert_eq!(warrior.equipment()["shield"], "Wooden Shield");

        let rogue = Character::new(CharacterClass::Rogue, "R");
        assert_eq!(rogue.stats().speed, 18);
        assert_eq!(rogue.skills()[1], "Backstab");
    }

    #[test]
    fn starts_at_level_one() {
        let mage = Character::new(CharacterClass::Mage, "M");
        assert_eq!(mage.level(), 1);
    }

    #[test]
    fn clone_does_not_share_collections() {
        let mut original = Character::new(CharacterClass::Archer, "A");
        let mut copy = original.clone();

        original.add_skill("Trick Shot");
        copy.equip("weapon", "Longbow");

        assert_eq!(original.skills().len(), 4);
        assert_eq!(copy.skills().len(), 3);
        assert_eq!(original.equipment()["weapon"], "Wooden Bow");
        assert_eq!(copy.equipment()["weapon"], "Longbow");
    }

    #[test]
    fn equipment_iterates_in_slot_order() {
        let mage = Character::new(CharacterClass::Mage, "M");
        let slots: Vec<_> = mage.equipment().keys().cloned().collect();
        assert_eq!(slots, ["accessory", "armor", "weapon"]);
    }
}
