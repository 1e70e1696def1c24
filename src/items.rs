//! Consumable items and the party inventory.
//!
//! Items are plain data: a kind selects the effect routine in the action
//! resolver, `power` parameterizes it. A successful use consumes the item
//! exactly once, even when the chosen target turned out to be invalid for
//! the kind (the failure is logged instead).

use serde::{Deserialize, Serialize};

/// What an item does when used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Damage one living enemy.
    Attack,
    /// Damage one living enemy (thrown debuff; same resolution as Attack).
    Debuff,
    /// Restore health to one living ally.
    HealHp,
    /// Restore mana to one living ally.
    HealMp,
    /// Raise one living ally's attack and defense for 3 turns.
    Buff,
    /// Bring one fallen ally back with `power` health, capped at max.
    Revive,
    /// Does nothing at all.
    Mystery,
}

/// A consumable item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub power: i32,
}

impl Item {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ItemKind, power: i32) -> Self {
        Self {
            name: name.into(),
            kind,
            power,
        }
    }
}

/// The party's shared bag. Index-addressed; consuming removes in place.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Remove and return the item at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
