//! The automated actor controller.
//!
//! One call resolves exactly one enemy-party turn; the driver invokes it
//! once per living member per round. The result is a compact descriptor
//! (actor, target, category) for the cinematic layer; the engine itself
//! never loops over actors.
//!
//! Policy: resolve statuses; honor a live taunt binding for offensive
//! actions; shuffle the skill catalog and attempt the first affordable
//! skill (heals pick the most wounded ally and are skipped at full
//! health, buffs are self-cast, attacks hit the taunt source or a random
//! living player); fall back to a plain attack.

use serde::{Deserialize, Serialize};

use crate::core::{CharacterId, Side};
use crate::skills::{SkillCategory, SkillId};

use super::battle::Battle;

/// Coarse classification of an automated action, for animation purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionCategory {
    /// No action was taken (dead, stunned, or nothing to do).
    None,
    Attack,
    Heal,
    Buff,
}

/// What one automated turn did: who acted, on whom, and how.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub actor: Option<CharacterId>,
    pub target: Option<CharacterId>,
    pub category: ActionCategory,
}

impl ActionDescriptor {
    /// Descriptor for a turn in which nothing happened.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            actor: None,
            target: None,
            category: ActionCategory::None,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.category == ActionCategory::None
    }
}

impl Battle {
    /// Resolve one enemy-party member's turn and describe it.
    ///
    /// Status effects resolve first; a dead or stunned actor yields an
    /// idle descriptor. The battle-end evaluator runs before returning,
    /// exactly as after a player action.
    pub fn take_enemy_turn(&mut self, slot: usize) -> ActionDescriptor {
        if !self.ongoing || self.enemies.get(slot).is_none() {
            return ActionDescriptor::idle();
        }
        let actor = CharacterId::enemy(slot);

        tracing::trace!(target: "battle_engine::engine", slot, "enemy turn");

        let start = self.enemies.member_mut(slot).begin_turn();
        let name = self.enemies.member(slot).name().to_owned();
        self.push_status_events(&name, &start.events);

        if self.enemies.member(slot).is_dead() || start.blocked {
            self.evaluate_outcome();
            return ActionDescriptor::idle();
        }
        if self.players.living_slots().is_empty() {
            return ActionDescriptor::idle();
        }

        // A live taunt source overrides offensive target selection.
        let bound = start
            .taunted_by
            .filter(|id| !self.character(*id).is_dead());

        let mut descriptor = self.try_skills(actor, &name, bound);

        if descriptor.is_idle() {
            descriptor = self.plain_attack(actor, &name, bound);
        }

        self.evaluate_outcome();
        descriptor
    }

    /// Scan the shuffled skill catalog for the first applicable skill.
    fn try_skills(
        &mut self,
        actor: CharacterId,
        name: &str,
        bound: Option<CharacterId>,
    ) -> ActionDescriptor {
        let mut catalog: Vec<SkillId> = self.enemies.member(actor.slot).skills().to_vec();
        if catalog.is_empty() {
            return ActionDescriptor::idle();
        }
        self.rng.shuffle(&mut catalog);

        for sid in catalog {
            let Some(spec) = self.skills.get(sid).cloned() else {
                continue;
            };
            if !self.enemies.member(actor.slot).has_mana(spec.mana_cost) {
                continue;
            }

            match spec.category {
                SkillCategory::Heal => {
                    let Some(target) = self.most_wounded(Side::Enemy) else {
                        continue;
                    };
                    {
                        let wounded = self.character(target);
                        if wounded.health() >= wounded.max_health() {
                            continue;
                        }
                    }
                    self.enemies.member_mut(actor.slot).spend_mana(spec.mana_cost);
                    let victim = self.character(target).name().to_owned();
                    self.log
                        .push(format!("{name} uses {} on {victim}!", spec.name));
                    self.heal_character(target, spec.power);
                    return ActionDescriptor {
                        actor: Some(actor),
                        target: Some(target),
                        category: ActionCategory::Heal,
                    };
                }
                SkillCategory::Buff => {
                    self.enemies.member_mut(actor.slot).spend_mana(spec.mana_cost);
                    self.log.push(format!("{name} uses {}!", spec.name));
                    self.buff_character(actor, spec.power, spec.power, 3);
                    return ActionDescriptor {
                        actor: Some(actor),
                        target: Some(actor),
                        category: ActionCategory::Buff,
                    };
                }
                SkillCategory::Attack | SkillCategory::Debuff => {
                    let Some(target) = bound.or_else(|| self.random_living(Side::Player)) else {
                        continue;
                    };
                    let victim = self.character(target).name().to_owned();
                    if bound.is_some() {
                        self.log.push(format!("{name} is provoked by {victim}!"));
                    }
                    self.enemies.member_mut(actor.slot).spend_mana(spec.mana_cost);
                    self.log
                        .push(format!("{name} uses {} on {victim}!", spec.name));
                    self.apply_hit(target, spec.power, 0);
                    return ActionDescriptor {
                        actor: Some(actor),
                        target: Some(target),
                        category: ActionCategory::Attack,
                    };
                }
            }
        }

        ActionDescriptor::idle()
    }

    /// Fallback when no skill applied: a plain attack with a critical roll.
    fn plain_attack(
        &mut self,
        actor: CharacterId,
        name: &str,
        bound: Option<CharacterId>,
    ) -> ActionDescriptor {
        let Some(target) = bound.or_else(|| self.random_living(Side::Player)) else {
            return ActionDescriptor::idle();
        };

        let (raw, crit) = {
            let Self { enemies, rng, .. } = self;
            enemies.member(actor.slot).attack_roll(rng)
        };

        let victim = self.character(target).name().to_owned();
        if bound.is_some() {
            self.log
                .push(format!("{name} is provoked and attacks {victim}!"));
        } else {
            self.log.push(format!("{name} attacks {victim}!"));
        }
        if crit {
            self.log.push("Critical hit!");
        }
        self.apply_hit(target, raw, 0);

        ActionDescriptor {
            actor: Some(actor),
            target: Some(target),
            category: ActionCategory::Attack,
        }
    }
}
