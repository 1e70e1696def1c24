//! Skill definitions.
//!
//! A skill's behavior is fully described by data: its category drives the
//! automated controller's priorities and target-class validation, and its
//! `SkillEffect` selects and parameterizes the effect routine in the
//! action resolver. Nothing dispatches on a skill's name.

use serde::{Deserialize, Serialize};

/// Registry identifier for a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillId(pub u16);

impl SkillId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

/// Coarse classification used by target validation and the automated
/// controller's skill scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Attack,
    Heal,
    Buff,
    Debuff,
}

/// Who a buff effect lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuffScope {
    /// The caster only; the supplied target index is ignored.
    Caster,
    /// One living ally chosen by the target index.
    Ally,
    /// Every living member of the caster's party; target index ignored.
    Party,
}

/// A chance-gated status rider attached to a damaging skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rider {
    Stun { chance: u8, turns: u8 },
    Poison { chance: u8, per_tick: i32, ticks: u8 },
    Burn { chance: u8, per_tick: i32, ticks: u8 },
}

/// The effect routine a skill runs, with its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillEffect {
    /// Direct damage using the skill's power.
    Strike {
        /// Percentage of the target's defense ignored before mitigation.
        bypass_pct: u8,
        /// Optional chance-gated status inflicted on a landed hit.
        rider: Option<Rider>,
        /// +20% power while the caster is below half health.
        desperate: bool,
        /// Hit every living opposing member instead of one target.
        aoe: bool,
    },
    /// Restore health to one living ally, clamped at max.
    Heal,
    /// Raise attack and/or defense for a fixed number of turns.
    Fortify {
        attack: i32,
        defense: i32,
        turns: u8,
        scope: BuffScope,
    },
    /// Raise the caster's critical chance for a fixed number of turns.
    Sharpen { crit_bonus: i32, turns: u8 },
    /// Grant the caster the single-use dodge flag.
    Evade,
    /// Restore the skill's power in mana to the caster.
    Channel,
    /// Taunt every living opponent toward the caster.
    Provoke { turns: u8 },
}

/// Which filtered target list an action needs an index into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetClass {
    /// A living member of the opposing party.
    Enemy,
    /// A living member of the caster's own party.
    Ally,
    /// No target; the supplied index is ignored.
    None,
}

/// A complete skill definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSpec {
    pub id: SkillId,
    pub name: String,
    pub category: SkillCategory,
    /// Effect magnitude: damage for strikes, restoration for heals and
    /// channels, buff magnitude for the controller's self-buff path.
    pub power: i32,
    pub mana_cost: i32,
    pub effect: SkillEffect,
}

impl SkillSpec {
    #[must_use]
    pub fn new(
        id: SkillId,
        name: impl Into<String>,
        category: SkillCategory,
        power: i32,
        mana_cost: i32,
        effect: SkillEffect,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            power,
            mana_cost,
            effect,
        }
    }

    /// The target list this skill's index must address. Derived from the
    /// category and effect data, never from the name.
    ///
    /// Attack/debuff-class skills always need a valid enemy target, even
    /// area strikes (which then ignore the chosen one and hit everyone).
    #[must_use]
    pub fn required_target(&self) -> TargetClass {
        match self.category {
            SkillCategory::Attack | SkillCategory::Debuff => TargetClass::Enemy,
            SkillCategory::Heal => TargetClass::Ally,
            SkillCategory::Buff => match self.effect {
                SkillEffect::Fortify {
                    scope: BuffScope::Ally,
                    ..
                } => TargetClass::Ally,
                _ => TargetClass::None,
            },
        }
    }
}
