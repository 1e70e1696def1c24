//! Combatants: stats, resource mutation, and hit resolution.
//!
//! `Character` is the common contract shared by both sides. Side-specific
//! data lives in the `CharacterKind` tagged variant and is reached through
//! capability queries (`reward_values`, `experience`) rather than casts.
//!
//! Health and mana are clamped invariants: no operation moves them outside
//! `[0, max]`. A character whose health is 0 is dead; dead characters never
//! act and are never valid targets (enforced by the engine's target lists).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::id::CharacterId;
use super::rng::BattleRng;
use super::status::{DamageOverTime, StatBuff, StatusEvent, StatusState, StatusTick, TauntMark};
use crate::skills::SkillId;

/// Miss chance granted by the single-use dodge flag.
const DODGE_CHANCE: u8 = 50;

/// Critical hits double the raw damage of a plain attack.
const CRIT_MULTIPLIER: i32 = 2;

/// Side-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterKind {
    /// Player-party member. Accumulates granted experience; the leveling
    /// curve itself lives outside the engine.
    Hero { experience: u32 },
    /// Automated opponent carrying fixed reward attributes.
    Monster { exp_reward: u32, coin_drop: u32 },
}

/// One combatant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    name: String,
    health: i32,
    max_health: i32,
    mana: i32,
    max_mana: i32,
    attack: i32,
    defense: i32,
    /// Innate critical chance in percent, before buffs.
    crit_chance: u8,
    skills: SmallVec<[SkillId; 4]>,
    status: StatusState,
    kind: CharacterKind,
}

/// Result of resolving a combatant's statuses at the start of its turn,
/// after damage-over-time has been applied to its health.
#[derive(Clone, Debug)]
pub struct TurnStart {
    /// The turn is consumed without an action (stun).
    pub blocked: bool,
    /// Taunt binding in force for this turn, if any.
    pub taunted_by: Option<CharacterId>,
    pub events: SmallVec<[StatusEvent; 4]>,
}

/// Result of one hit resolved against this character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitOutcome {
    /// The hit missed entirely; nothing else applies.
    pub dodged: bool,
    /// Damage dealt after mitigation and guarding.
    pub damage: i32,
    /// The defender's guard stance absorbed half the damage.
    pub blocked: bool,
    /// The hit reduced the defender's health to 0.
    pub fatal: bool,
}

impl Character {
    /// Create a player-party member.
    #[must_use]
    pub fn hero(
        name: impl Into<String>,
        max_health: i32,
        max_mana: i32,
        attack: i32,
        defense: i32,
    ) -> Self {
        Self::new(
            name,
            max_health,
            max_mana,
            attack,
            defense,
            CharacterKind::Hero { experience: 0 },
        )
    }

    /// Create an automated opponent with its fixed reward values.
    #[must_use]
    pub fn monster(
        name: impl Into<String>,
        max_health: i32,
        max_mana: i32,
        attack: i32,
        defense: i32,
        exp_reward: u32,
        coin_drop: u32,
    ) -> Self {
        Self::new(
            name,
            max_health,
            max_mana,
            attack,
            defense,
            CharacterKind::Monster {
                exp_reward,
                coin_drop,
            },
        )
    }

    fn new(
        name: impl Into<String>,
        max_health: i32,
        max_mana: i32,
        attack: i32,
        defense: i32,
        kind: CharacterKind,
    ) -> Self {
        assert!(max_health > 0, "max health must be positive");
        assert!(max_mana >= 0, "max mana must not be negative");

        Self {
            name: name.into(),
            health: max_health,
            max_health,
            mana: max_mana,
            max_mana,
            attack,
            defense,
            crit_chance: 0,
            skills: SmallVec::new(),
            status: StatusState::default(),
            kind,
        }
    }

    /// Set the innate critical chance (builder pattern).
    #[must_use]
    pub fn with_crit_chance(mut self, percent: u8) -> Self {
        self.crit_chance = percent;
        self
    }

    /// Set the skill catalog (builder pattern).
    #[must_use]
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = SkillId>) -> Self {
        self.skills = skills.into_iter().collect();
        self
    }

    // === Queries ===

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    #[must_use]
    pub fn mana(&self) -> i32 {
        self.mana
    }

    #[must_use]
    pub fn max_mana(&self) -> i32 {
        self.max_mana
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    #[must_use]
    pub fn skills(&self) -> &[SkillId] {
        &self.skills
    }

    #[must_use]
    pub fn status(&self) -> &StatusState {
        &self.status
    }

    #[must_use]
    pub fn kind(&self) -> &CharacterKind {
        &self.kind
    }

    #[must_use]
    pub fn is_hero(&self) -> bool {
        matches!(self.kind, CharacterKind::Hero { .. })
    }

    /// Fixed `(experience, coins)` reward, for monsters only.
    #[must_use]
    pub fn reward_values(&self) -> Option<(u32, u32)> {
        match self.kind {
            CharacterKind::Monster {
                exp_reward,
                coin_drop,
            } => Some((exp_reward, coin_drop)),
            CharacterKind::Hero { .. } => None,
        }
    }

    /// Accumulated experience, for heroes only.
    #[must_use]
    pub fn experience(&self) -> Option<u32> {
        match self.kind {
            CharacterKind::Hero { experience } => Some(experience),
            CharacterKind::Monster { .. } => None,
        }
    }

    /// Attack power including the active attack buff.
    #[must_use]
    pub fn attack_power(&self) -> i32 {
        self.attack + self.status.attack_buff.map_or(0, |b| b.amount)
    }

    /// Critical chance including the active critical buff, capped at 100.
    #[must_use]
    pub fn total_crit_chance(&self) -> u8 {
        let total =
            i32::from(self.crit_chance) + self.status.crit_buff.map_or(0, |b| b.amount);
        total.clamp(0, 100) as u8
    }

    // === Resource mutation ===

    /// Restore health, clamped at max. Returns the amount actually healed.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let healed = amount.min(self.max_health - self.health).max(0);
        self.health += healed;
        healed
    }

    /// Restore mana, clamped at max. Returns the amount actually restored.
    pub fn restore_mana(&mut self, amount: i32) -> i32 {
        let restored = amount.min(self.max_mana - self.mana).max(0);
        self.mana += restored;
        restored
    }

    #[must_use]
    pub fn has_mana(&self, cost: i32) -> bool {
        self.mana >= cost
    }

    /// Deduct a mana cost. The caller must have checked `has_mana` first.
    pub fn spend_mana(&mut self, cost: i32) {
        debug_assert!(self.has_mana(cost));
        self.mana = (self.mana - cost).max(0);
    }

    /// Bring a fallen character back with `amount` health, capped at max.
    /// Does nothing to the living.
    pub fn revive(&mut self, amount: i32) {
        if self.is_dead() {
            self.health = amount.clamp(1, self.max_health);
        }
    }

    /// Add to a hero's experience total. Returns false for monsters.
    pub fn grant_experience(&mut self, amount: u32) -> bool {
        match &mut self.kind {
            CharacterKind::Hero { experience } => {
                *experience += amount;
                true
            }
            CharacterKind::Monster { .. } => false,
        }
    }

    // === Status application ===

    pub fn apply_stun(&mut self, turns: u8) {
        self.status.stun_turns = turns;
    }

    pub fn apply_poison(&mut self, per_tick: i32, ticks: u8) {
        self.status.poison = Some(DamageOverTime { per_tick, ticks });
    }

    pub fn apply_burn(&mut self, per_tick: i32, ticks: u8) {
        self.status.burn = Some(DamageOverTime { per_tick, ticks });
    }

    /// Raise attack and/or defense for a number of the owner's turns.
    /// A zero magnitude leaves that stat's buff untouched.
    pub fn apply_buff(&mut self, attack: i32, defense: i32, turns: u8) {
        if attack > 0 {
            self.status.attack_buff = Some(StatBuff {
                amount: attack,
                turns,
            });
        }
        if defense > 0 {
            self.status.defense_buff = Some(StatBuff {
                amount: defense,
                turns,
            });
        }
    }

    pub fn apply_crit_buff(&mut self, amount: i32, turns: u8) {
        self.status.crit_buff = Some(StatBuff { amount, turns });
    }

    pub fn apply_dodge(&mut self) {
        self.status.dodge = true;
    }

    pub fn apply_taunt(&mut self, source: CharacterId, turns: u8) {
        self.status.taunt = Some(TauntMark { source, turns });
    }

    pub fn set_defending(&mut self) {
        self.status.defending = true;
    }

    // === Turn resolution ===

    /// Resolve pending statuses at the start of this character's turn.
    ///
    /// Clears the previous turn's guard stance, applies damage-over-time
    /// to health, and reports whether the turn is stun-blocked.
    pub fn begin_turn(&mut self) -> TurnStart {
        self.status.defending = false;
        let StatusTick {
            blocked,
            taunted_by,
            damage,
            events,
        } = self.status.begin_turn();

        if damage > 0 {
            self.health = (self.health - damage).max(0);
        }

        TurnStart {
            blocked,
            taunted_by,
            events,
        }
    }

    /// Resolve one incoming hit.
    ///
    /// Pipeline: single-use dodge roll, then mitigation by effective
    /// defense (reduced by `bypass_pct` percent), then the guard stance
    /// halving, then the health clamp.
    pub fn receive_hit(&mut self, raw: i32, bypass_pct: u8, rng: &mut BattleRng) -> HitOutcome {
        if self.status.dodge {
            self.status.dodge = false;
            if rng.percent(DODGE_CHANCE) {
                return HitOutcome {
                    dodged: true,
                    damage: 0,
                    blocked: false,
                    fatal: false,
                };
            }
        }

        let mut defense = self.defense + self.status.defense_buff.map_or(0, |b| b.amount);
        defense -= defense * i32::from(bypass_pct) / 100;
        let mut damage = (raw - defense.max(0)).max(0);

        let blocked = self.status.defending;
        if blocked {
            damage /= 2;
            self.status.defending = false;
        }

        self.health = (self.health - damage).max(0);

        HitOutcome {
            dodged: false,
            damage,
            blocked,
            fatal: self.is_dead(),
        }
    }

    /// Roll this character's plain-attack damage: attack power with a
    /// critical-chance roll. Returns `(raw_damage, was_critical)`.
    pub fn attack_roll(&self, rng: &mut BattleRng) -> (i32, bool) {
        let power = self.attack_power();
        if rng.percent(self.total_crit_chance()) {
            (power * CRIT_MULTIPLIER, true)
        } else {
            (power, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy() -> Character {
        Character::hero("Arta", 100, 30, 12, 5)
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut c = dummy();
        c.receive_hit(30, 0, &mut BattleRng::new(1));
        assert_eq!(c.health(), 75); // 30 - 5 defense

        assert_eq!(c.heal(999), 25);
        assert_eq!(c.health(), 100);
        assert_eq!(c.heal(10), 0);
    }

    #[test]
    fn test_restore_mana_clamps_at_max() {
        let mut c = dummy();
        c.spend_mana(20);
        assert_eq!(c.mana(), 10);
        assert_eq!(c.restore_mana(25), 20);
        assert_eq!(c.mana(), 30);
    }

    #[test]
    fn test_mitigation_and_bypass() {
        let mut c = Character::monster("Golem", 200, 0, 10, 50, 0, 0);
        let mut rng = BattleRng::new(1);

        // Fully mitigated.
        let hit = c.receive_hit(40, 0, &mut rng);
        assert_eq!(hit.damage, 0);
        assert_eq!(c.health(), 200);

        // 20% bypass ignores 10 points of the 50 defense.
        let hit = c.receive_hit(45, 20, &mut rng);
        assert_eq!(hit.damage, 5);
        assert_eq!(c.health(), 195);
    }

    #[test]
    fn test_defending_halves_one_hit() {
        let mut c = dummy();
        let mut rng = BattleRng::new(1);
        c.set_defending();

        let hit = c.receive_hit(25, 0, &mut rng); // 20 after defense, 10 guarded
        assert!(hit.blocked);
        assert_eq!(hit.damage, 10);
        assert!(!c.status().defending);

        let hit = c.receive_hit(25, 0, &mut rng);
        assert!(!hit.blocked);
        assert_eq!(hit.damage, 20);
    }

    #[test]
    fn test_dodge_flag_is_single_use() {
        let mut c = dummy();
        let mut rng = BattleRng::new(9);
        c.apply_dodge();

        let before = c.health();
        let hit = c.receive_hit(15, 0, &mut rng);
        assert!(!c.status().dodge);
        if hit.dodged {
            assert_eq!(c.health(), before);
        } else {
            assert_eq!(c.health(), before - hit.damage);
        }
    }

    #[test]
    fn test_fatal_hit_clamps_at_zero() {
        let mut c = dummy();
        let hit = c.receive_hit(999, 0, &mut BattleRng::new(1));
        assert!(hit.fatal);
        assert_eq!(c.health(), 0);
        assert!(c.is_dead());
    }

    #[test]
    fn test_revive_caps_at_max_and_skips_living() {
        let mut c = dummy();
        c.revive(50);
        assert_eq!(c.health(), 100); // untouched

        c.receive_hit(999, 0, &mut BattleRng::new(1));
        c.revive(250);
        assert_eq!(c.health(), 100);

        c.receive_hit(999, 0, &mut BattleRng::new(1));
        c.revive(40);
        assert_eq!(c.health(), 40);
    }

    #[test]
    fn test_attack_roll_with_certain_crit() {
        let c = dummy().with_crit_chance(100);
        let mut rng = BattleRng::new(1);
        let (damage, crit) = c.attack_roll(&mut rng);
        assert!(crit);
        assert_eq!(damage, 24);

        let c = dummy(); // crit chance 0
        let (damage, crit) = c.attack_roll(&mut rng);
        assert!(!crit);
        assert_eq!(damage, 12);
    }

    #[test]
    fn test_buffed_attack_power_and_crit() {
        let mut c = dummy().with_crit_chance(10);
        c.apply_buff(8, 0, 2);
        c.apply_crit_buff(30, 2);
        assert_eq!(c.attack_power(), 20);
        assert_eq!(c.total_crit_chance(), 40);
    }

    #[test]
    fn test_begin_turn_applies_dot_and_clears_guard() {
        let mut c = dummy();
        c.set_defending();
        c.apply_poison(5, 1);

        let start = c.begin_turn();
        assert!(!start.blocked);
        assert_eq!(c.health(), 95);
        assert!(!c.status().defending);
        assert!(c.status().poison.is_none());
    }

    #[test]
    fn test_capability_queries() {
        let hero = dummy();
        assert!(hero.is_hero());
        assert_eq!(hero.reward_values(), None);
        assert_eq!(hero.experience(), Some(0));

        let monster = Character::monster("Slime", 50, 10, 8, 2, 25, 10);
        assert!(!monster.is_hero());
        assert_eq!(monster.reward_values(), Some((25, 10)));
        assert_eq!(monster.experience(), None);
    }

    #[test]
    fn test_grant_experience_heroes_only() {
        let mut hero = dummy();
        assert!(hero.grant_experience(40));
        assert_eq!(hero.experience(), Some(40));

        let mut monster = Character::monster("Slime", 50, 10, 8, 2, 25, 10);
        assert!(!monster.grant_experience(40));
    }
}
