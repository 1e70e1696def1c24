//! # battle-engine
//!
//! A deterministic turn-based party combat engine for RPGs.
//!
//! The engine resolves combat between two opposing parties: a
//! player-controlled party whose actions arrive from an external driver
//! (a menu, a script, a test), and an automated party whose turns are
//! decided by the built-in controller. The engine validates and executes
//! one action per call, applies timed status effects, detects the end of
//! combat, and distributes rewards.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven Skills**: A skill's behavior is described by a
//!    [`SkillEffect`] value stored in a [`SkillRegistry`]. Adding a skill
//!    is a data change, never a code change.
//!
//! 2. **Deterministic**: All randomness (status-chance rolls, critical and
//!    dodge rolls, automated target selection, skill-order shuffling) flows
//!    through one seeded [`BattleRng`]. The same seed and the same action
//!    script reproduce the same battle.
//!
//! 3. **Driver-Owned Control Flow**: The engine never loops. The driver
//!    asks for the current actor, submits one action or runs one automated
//!    turn, advances the cursor, and drains the log. Every call returns
//!    before the driver proceeds; there is no internal suspension.
//!
//! ## Modules
//!
//! - `core`: ids, RNG, characters, status state, parties
//! - `skills`: skill specs, effect descriptors, the skill registry
//! - `items`: consumable items and the party inventory
//! - `engine`: battle state, turn sequencing, action resolution, rewards
//! - `log`: the drain-on-read battle log
//! - `catalog`: the standard skill and item data set

pub mod catalog;
pub mod core;
pub mod engine;
pub mod items;
pub mod log;
pub mod skills;

// Re-export commonly used types
pub use crate::core::{
    BattleRng, Character, CharacterId, CharacterKind, HitOutcome, Party, Side, StatusEvent,
    StatusState, TurnStart,
};

pub use crate::skills::{
    BuffScope, Rider, SkillCategory, SkillEffect, SkillId, SkillRegistry, SkillSpec, TargetClass,
};

pub use crate::items::{Inventory, Item, ItemKind};

pub use crate::engine::{
    ActionCategory, ActionDescriptor, ActionError, ActionOutcome, Battle, PlayerAction,
};

pub use crate::log::BattleLog;

pub use crate::catalog::{standard_items, standard_registry, StandardSkills};
