//! Parties: ordered groups of combatants.
//!
//! Member order is index-stable and, for the player party, defines turn
//! order. The inventory and money balance are shared party resources used
//! by the player-controlled side.

use serde::{Deserialize, Serialize};

use super::character::Character;
use crate::items::{Inventory, Item};

/// An ordered group of combatants fighting together.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Party {
    members: Vec<Character>,
    inventory: Inventory,
    money: u32,
}

impl Party {
    /// Create a party from its members, in turn order.
    #[must_use]
    pub fn new(members: Vec<Character>) -> Self {
        Self {
            members,
            inventory: Inventory::new(),
            money: 0,
        }
    }

    /// Stock the shared inventory (builder pattern).
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        for item in items {
            self.inventory.add(item);
        }
        self
    }

    /// Set the starting money balance (builder pattern).
    #[must_use]
    pub fn with_money(mut self, money: u32) -> Self {
        self.money = money;
        self
    }

    #[must_use]
    pub fn members(&self) -> &[Character] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member by slot, if the slot exists.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Character> {
        self.members.get(slot)
    }

    /// Member by slot. Panics on an out-of-range slot; engine-internal
    /// callers only pass slots they obtained from this party.
    #[must_use]
    pub fn member(&self, slot: usize) -> &Character {
        &self.members[slot]
    }

    pub fn member_mut(&mut self, slot: usize) -> &mut Character {
        &mut self.members[slot]
    }

    /// Slots of living members, in party order.
    #[must_use]
    pub fn living_slots(&self) -> Vec<usize> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_dead())
            .map(|(slot, _)| slot)
            .collect()
    }

    /// Slots of fallen members, in party order.
    #[must_use]
    pub fn fallen_slots(&self) -> Vec<usize> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_dead())
            .map(|(slot, _)| slot)
            .collect()
    }

    /// A party is defeated when every member is dead.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.members.iter().all(Character::is_dead)
    }

    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    #[must_use]
    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn add_money(&mut self, amount: u32) {
        self.money += amount;
    }
}
