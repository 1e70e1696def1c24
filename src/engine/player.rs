//! Player action resolution.
//!
//! One call validates and executes exactly one player-party turn. Every
//! invalid input degrades to a logged line plus [`ActionOutcome::Rejected`]
//! with nothing mutated, so the caller can re-prompt; an action never
//! partially applies. A turn can also be consumed by a failure (the actor
//! is dead or stunned) without any action executing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{CharacterId, Side};
use crate::items::ItemKind;
use crate::skills::{BuffScope, Rider, SkillEffect, SkillSpec, TargetClass};

use super::battle::Battle;

/// One player-party action, with the indices the menu layer collected.
/// Target indices address the filtered candidate list the action needs
/// (living enemies, living allies, or fallen allies), not raw party order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Plain attack on the `target`-th living enemy.
    Attack { target: usize },
    /// Guard stance; no target.
    Defend,
    /// Cast the `skill`-th catalog entry; `target` meaning depends on
    /// the skill's required target class.
    UseSkill { skill: usize, target: usize },
    /// Use the `item`-th inventory entry; `target` meaning depends on
    /// the item kind.
    UseItem { item: usize, target: usize },
}

impl PlayerAction {
    /// Map the numeric menu protocol (Attack=1, Defend=2, UseSkill=3,
    /// UseItem=4) onto an action. The sub-index is ignored for Attack
    /// and Defend.
    #[must_use]
    pub fn from_menu(action: u8, target: usize, sub: usize) -> Option<Self> {
        match action {
            1 => Some(Self::Attack { target }),
            2 => Some(Self::Defend),
            3 => Some(Self::UseSkill {
                skill: sub,
                target,
            }),
            4 => Some(Self::UseItem { item: sub, target }),
            _ => None,
        }
    }
}

/// Whether a submitted action consumed the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum ActionOutcome {
    /// The turn is over (an action executed, or a failure consumed it).
    Consumed,
    /// Nothing was mutated; the caller should re-prompt.
    Rejected,
}

impl ActionOutcome {
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Why an action was rejected. The `Display` text is the logged line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Invalid target!")]
    InvalidTarget,
    #[error("Invalid enemy target!")]
    InvalidEnemyTarget,
    #[error("Invalid ally target!")]
    InvalidAllyTarget,
    #[error("{0} doesn't have enough MP!")]
    NotEnoughMana(String),
    #[error("No such skill!")]
    UnknownSkill,
    #[error("No such item!")]
    UnknownItem,
}

impl Battle {
    /// Validate and execute one player-party turn for the current actor.
    ///
    /// Status effects always resolve first, and the prior turn's guard
    /// stance is cleared; if the actor is then dead or stunned the turn
    /// is consumed with only a log line. Returns `Rejected` (nothing
    /// mutated) for an invalid target, an unaffordable skill, or an
    /// out-of-range skill/item index.
    pub fn handle_player_action(&mut self, action: PlayerAction) -> ActionOutcome {
        if !self.ongoing {
            return ActionOutcome::Consumed;
        }
        let Some(actor) = self.current_player_actor() else {
            return ActionOutcome::Consumed;
        };

        tracing::trace!(target: "battle_engine::engine", ?action, slot = actor.slot, "player turn");

        let start = self.players.member_mut(actor.slot).begin_turn();
        let name = self.players.member(actor.slot).name().to_owned();
        self.push_status_events(&name, &start.events);

        if self.players.member(actor.slot).is_dead() {
            self.log.push(format!("{name} has fallen!"));
            self.evaluate_outcome();
            return ActionOutcome::Consumed;
        }
        if start.blocked {
            self.evaluate_outcome();
            return ActionOutcome::Consumed;
        }

        let result = match action {
            PlayerAction::Attack { target } => self.player_attack(actor, target),
            PlayerAction::Defend => {
                self.player_defend(actor);
                Ok(())
            }
            PlayerAction::UseSkill { skill, target } => self.player_skill(actor, skill, target),
            PlayerAction::UseItem { item, target } => self.player_item(actor, item, target),
        };

        match result {
            Ok(()) => {
                self.evaluate_outcome();
                ActionOutcome::Consumed
            }
            Err(err) => {
                self.log.push(err.to_string());
                ActionOutcome::Rejected
            }
        }
    }

    fn player_attack(&mut self, actor: CharacterId, target_index: usize) -> Result<(), ActionError> {
        let target = self
            .nth_living(Side::Enemy, target_index)
            .ok_or(ActionError::InvalidTarget)?;

        let (raw, crit) = {
            let Self { players, rng, .. } = self;
            players.member(actor.slot).attack_roll(rng)
        };

        let attacker = self.character(actor).name().to_owned();
        let victim = self.character(target).name().to_owned();
        self.log.push(format!("{attacker} attacks {victim}!"));
        if crit {
            self.log.push("Critical hit!");
        }
        self.apply_hit(target, raw, 0);
        Ok(())
    }

    fn player_defend(&mut self, actor: CharacterId) {
        let member = self.players.member_mut(actor.slot);
        member.set_defending();
        let name = member.name().to_owned();
        self.log.push(format!("{name} braces for the next attack!"));
    }

    fn player_skill(
        &mut self,
        actor: CharacterId,
        sub: usize,
        target_index: usize,
    ) -> Result<(), ActionError> {
        let sid = self
            .character(actor)
            .skills()
            .get(sub)
            .copied()
            .ok_or(ActionError::UnknownSkill)?;
        let spec = self
            .skills
            .get(sid)
            .cloned()
            .ok_or(ActionError::UnknownSkill)?;

        let caster = self.character(actor);
        if !caster.has_mana(spec.mana_cost) {
            return Err(ActionError::NotEnoughMana(caster.name().to_owned()));
        }

        // Target-class validation precedes any mutation: a bad target
        // leaves the mana untouched.
        let target = match spec.required_target() {
            TargetClass::Enemy => Some(
                self.nth_living(Side::Enemy, target_index)
                    .ok_or(ActionError::InvalidEnemyTarget)?,
            ),
            TargetClass::Ally => Some(
                self.nth_living(Side::Player, target_index)
                    .ok_or(ActionError::InvalidAllyTarget)?,
            ),
            TargetClass::None => None,
        };

        self.players.member_mut(actor.slot).spend_mana(spec.mana_cost);
        let name = self.character(actor).name().to_owned();
        self.log.push(format!("{name} uses {}!", spec.name));
        self.dispatch_skill(actor, &spec, target);
        Ok(())
    }

    /// Run a skill's effect routine. Target validity is the caller's
    /// responsibility; `target` is `Some` exactly when the spec requires
    /// a target class.
    fn dispatch_skill(&mut self, caster: CharacterId, spec: &SkillSpec, target: Option<CharacterId>) {
        match spec.effect {
            SkillEffect::Strike {
                bypass_pct,
                rider,
                desperate,
                aoe,
            } => {
                let mut power = spec.power;
                if desperate {
                    let below_half = {
                        let c = self.character(caster);
                        c.health() * 2 < c.max_health()
                    };
                    if below_half {
                        power = power * 12 / 10;
                        let name = self.character(caster).name().to_owned();
                        self.log.push(format!("{name} feels a surge of power!"));
                    }
                }

                if aoe {
                    self.log.push("The attack hits every enemy!");
                    for id in self.living_ids(caster.side.opposite()) {
                        self.strike_with_rider(id, power, bypass_pct, rider);
                    }
                } else if let Some(target) = target {
                    self.strike_with_rider(target, power, bypass_pct, rider);
                }
            }
            SkillEffect::Heal => {
                if let Some(target) = target {
                    self.heal_character(target, spec.power);
                }
            }
            SkillEffect::Fortify {
                attack,
                defense,
                turns,
                scope,
            } => match scope {
                BuffScope::Caster => self.buff_character(caster, attack, defense, turns),
                BuffScope::Ally => {
                    if let Some(target) = target {
                        self.buff_character(target, attack, defense, turns);
                    }
                }
                BuffScope::Party => {
                    self.log.push("The whole party is bolstered!");
                    for id in self.living_ids(caster.side) {
                        self.buff_character(id, attack, defense, turns);
                    }
                }
            },
            SkillEffect::Sharpen { crit_bonus, turns } => {
                self.party_mut(caster.side)
                    .member_mut(caster.slot)
                    .apply_crit_buff(crit_bonus, turns);
                let name = self.character(caster).name().to_owned();
                self.log
                    .push(format!("{name}'s eyes sharpen; weak points stand out!"));
            }
            SkillEffect::Evade => {
                self.party_mut(caster.side)
                    .member_mut(caster.slot)
                    .apply_dodge();
                let name = self.character(caster).name().to_owned();
                self.log
                    .push(format!("{name} fades from sight, ready to slip the next blow!"));
            }
            SkillEffect::Channel => {
                self.restore_mana_character(caster, spec.power);
            }
            SkillEffect::Provoke { turns } => {
                let name = self.character(caster).name().to_owned();
                self.log.push(format!("{name} provokes every enemy!"));
                for id in self.living_ids(caster.side.opposite()) {
                    self.party_mut(id.side)
                        .member_mut(id.slot)
                        .apply_taunt(caster, turns);
                    let victim = self.character(id).name().to_owned();
                    self.log.push(format!("{victim} turns its fury on {name}!"));
                }
            }
        }
    }

    /// Resolve a damaging skill hit and, when the hit lands on a survivor,
    /// roll its chance-gated status rider.
    fn strike_with_rider(
        &mut self,
        target: CharacterId,
        power: i32,
        bypass_pct: u8,
        rider: Option<Rider>,
    ) {
        let outcome = self.apply_hit(target, power, bypass_pct);
        if outcome.dodged || outcome.fatal {
            return;
        }
        let Some(rider) = rider else { return };

        match rider {
            Rider::Stun { chance, turns } => {
                if self.rng.percent(chance) {
                    self.party_mut(target.side)
                        .member_mut(target.slot)
                        .apply_stun(turns);
                    let name = self.character(target).name().to_owned();
                    self.log.push(format!("{name} is stunned!"));
                }
            }
            Rider::Poison {
                chance,
                per_tick,
                ticks,
            } => {
                if self.rng.percent(chance) {
                    self.party_mut(target.side)
                        .member_mut(target.slot)
                        .apply_poison(per_tick, ticks);
                    let name = self.character(target).name().to_owned();
                    self.log.push(format!("{name} is poisoned!"));
                }
            }
            Rider::Burn {
                chance,
                per_tick,
                ticks,
            } => {
                if self.rng.percent(chance) {
                    self.party_mut(target.side)
                        .member_mut(target.slot)
                        .apply_burn(per_tick, ticks);
                    let name = self.character(target).name().to_owned();
                    self.log.push(format!("{name} is set ablaze!"));
                }
            }
        }
    }

    fn player_item(
        &mut self,
        actor: CharacterId,
        sub: usize,
        target_index: usize,
    ) -> Result<(), ActionError> {
        let item = self
            .players
            .inventory()
            .get(sub)
            .cloned()
            .ok_or(ActionError::UnknownItem)?;

        let name = self.character(actor).name().to_owned();
        self.log.push(format!("{name} uses {}!", item.name));

        match item.kind {
            ItemKind::Attack | ItemKind::Debuff => {
                match self.nth_living(Side::Enemy, target_index) {
                    Some(target) => {
                        self.apply_hit(target, item.power, 0);
                    }
                    None => self.log.push(ActionError::InvalidTarget.to_string()),
                }
            }
            ItemKind::HealHp => match self.nth_living(Side::Player, target_index) {
                Some(target) => self.heal_character(target, item.power),
                None => self.log.push(ActionError::InvalidTarget.to_string()),
            },
            ItemKind::HealMp => match self.nth_living(Side::Player, target_index) {
                Some(target) => self.restore_mana_character(target, item.power),
                None => self.log.push(ActionError::InvalidTarget.to_string()),
            },
            ItemKind::Buff => match self.nth_living(Side::Player, target_index) {
                Some(target) => self.buff_character(target, item.power, item.power, 3),
                None => self.log.push(ActionError::InvalidTarget.to_string()),
            },
            ItemKind::Revive => match self.nth_fallen(Side::Player, target_index) {
                Some(target) => {
                    let member = self.players.member_mut(target.slot);
                    member.revive(item.power);
                    let revived = member.name().to_owned();
                    let health = member.health();
                    self.log
                        .push(format!("{revived} returns to the fight with {health} HP!"));
                }
                None => self.log.push(ActionError::InvalidTarget.to_string()),
            },
            ItemKind::Mystery => self.log.push("The mysterious item does nothing..."),
        }

        // The attempt consumes the item even when the chosen target was
        // invalid for its kind.
        self.players.inventory_mut().remove(sub);
        Ok(())
    }
}
