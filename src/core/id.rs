//! Combatant identification.
//!
//! Parties are index-stable for the lifetime of a battle, so a combatant
//! is addressed by its side plus its slot in that side's member list.
//! Typed ids replace the runtime downcasting a class hierarchy would use.

use serde::{Deserialize, Serialize};

/// Which party a combatant belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player-controlled party.
    Player,
    /// The automated opposing party.
    Enemy,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Stable identifier for one combatant: a side and a slot in that side's
/// party order. Slots never shift during a battle; fallen members keep
/// their slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId {
    pub side: Side,
    pub slot: usize,
}

impl CharacterId {
    /// Id for a player-party member by slot.
    #[must_use]
    pub const fn player(slot: usize) -> Self {
        Self {
            side: Side::Player,
            slot,
        }
    }

    /// Id for an enemy-party member by slot.
    #[must_use]
    pub const fn enemy(slot: usize) -> Self {
        Self {
            side: Side::Enemy,
            slot,
        }
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.side {
            Side::Player => write!(f, "player #{}", self.slot),
            Side::Enemy => write!(f, "enemy #{}", self.slot),
        }
    }
}
