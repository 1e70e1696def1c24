//! Battle state and shared combat plumbing.
//!
//! A `Battle` owns two parties, the skill registry, the single RNG, the
//! log, and the player-turn cursor, and lives for exactly one encounter.
//! The driver steers it: ask for the current actor, submit one player
//! action or run one automated turn, advance or reset the cursor, drain
//! the log. Parties outlive the battle; retrieve them with
//! [`Battle::into_parties`] to carry mutated health, mana, and status
//! into the next encounter.

use crate::core::{BattleRng, Character, CharacterId, Party, Side, StatusEvent};
use crate::log::BattleLog;
use crate::skills::SkillRegistry;

use super::turns::TurnCursor;

/// One encounter between the player party and an automated party.
#[derive(Clone, Debug)]
pub struct Battle {
    pub(crate) players: Party,
    pub(crate) enemies: Party,
    pub(crate) skills: SkillRegistry,
    pub(crate) rng: BattleRng,
    pub(crate) log: BattleLog,
    pub(crate) cursor: TurnCursor,
    pub(crate) ongoing: bool,
}

impl Battle {
    /// Start an encounter between two already-populated parties.
    /// Combat is ongoing immediately.
    #[must_use]
    pub fn new(players: Party, enemies: Party, skills: SkillRegistry, seed: u64) -> Self {
        assert!(!players.is_empty(), "player party must not be empty");
        assert!(!enemies.is_empty(), "enemy party must not be empty");

        tracing::debug!(target: "battle_engine::engine", seed, "battle constructed");

        let mut log = BattleLog::new();
        log.push("The battle begins!");

        Self {
            players,
            enemies,
            skills,
            rng: BattleRng::new(seed),
            log,
            cursor: TurnCursor::new(),
            ongoing: true,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn is_ongoing(&self) -> bool {
        self.ongoing
    }

    #[must_use]
    pub fn player_party(&self) -> &Party {
        &self.players
    }

    #[must_use]
    pub fn enemy_party(&self) -> &Party {
        &self.enemies
    }

    /// Tear down the battle and hand both parties back to the caller.
    #[must_use]
    pub fn into_parties(self) -> (Party, Party) {
        (self.players, self.enemies)
    }

    /// Living player-party members, in party order.
    #[must_use]
    pub fn alive_players(&self) -> Vec<CharacterId> {
        self.living_ids(Side::Player)
    }

    /// Living enemy-party members, in party order.
    #[must_use]
    pub fn alive_enemies(&self) -> Vec<CharacterId> {
        self.living_ids(Side::Enemy)
    }

    /// Fallen player-party members, in party order.
    #[must_use]
    pub fn fallen_players(&self) -> Vec<CharacterId> {
        self.players
            .fallen_slots()
            .into_iter()
            .map(CharacterId::player)
            .collect()
    }

    /// Return all buffered log lines since the last drain and clear them.
    pub fn drain_log(&mut self) -> Vec<String> {
        self.log.drain()
    }

    // === Turn sequencing ===

    /// The player-party member whose turn it is: the first living member
    /// at or after the cursor. Fallen members are skipped (the cursor
    /// advances past them); past the end, or with the party wiped, this
    /// is `None` and the driver must [`reset_player_turn`] to start a
    /// new round.
    ///
    /// [`reset_player_turn`]: Battle::reset_player_turn
    pub fn current_player_actor(&mut self) -> Option<CharacterId> {
        let Self {
            players, cursor, ..
        } = self;
        cursor.current_living(players).map(CharacterId::player)
    }

    /// Move the cursor to the next player-party slot. Called by the
    /// driver after each consumed player turn.
    pub fn advance_player_turn(&mut self) {
        self.cursor.advance();
    }

    /// Rewind the cursor to the first slot to begin a new round.
    pub fn reset_player_turn(&mut self) {
        self.cursor.reset();
    }

    // === Internal access ===

    pub(crate) fn party(&self, side: Side) -> &Party {
        match side {
            Side::Player => &self.players,
            Side::Enemy => &self.enemies,
        }
    }

    pub(crate) fn party_mut(&mut self, side: Side) -> &mut Party {
        match side {
            Side::Player => &mut self.players,
            Side::Enemy => &mut self.enemies,
        }
    }

    pub(crate) fn character(&self, id: CharacterId) -> &Character {
        self.party(id.side).member(id.slot)
    }

    // === Shared combat helpers ===

    /// Resolve one hit against `target` and log the result.
    pub(crate) fn apply_hit(
        &mut self,
        target: CharacterId,
        raw: i32,
        bypass_pct: u8,
    ) -> crate::core::HitOutcome {
        let Self {
            players,
            enemies,
            rng,
            log,
            ..
        } = self;
        let party = match target.side {
            Side::Player => players,
            Side::Enemy => enemies,
        };
        let victim = party.member_mut(target.slot);
        let outcome = victim.receive_hit(raw, bypass_pct, rng);
        let name = victim.name();

        if outcome.dodged {
            log.push(format!("{name} dodges the attack!"));
        } else {
            if outcome.blocked {
                log.push(format!(
                    "{name} guards and takes only {} damage!",
                    outcome.damage
                ));
            } else {
                log.push(format!("{name} takes {} damage!", outcome.damage));
            }
            if outcome.fatal {
                log.push(format!("{name} has fallen!"));
            }
        }

        outcome
    }

    /// Heal `target` and log the amount actually restored.
    pub(crate) fn heal_character(&mut self, target: CharacterId, amount: i32) {
        let member = self.party_mut(target.side).member_mut(target.slot);
        let healed = member.heal(amount);
        let name = member.name().to_owned();
        self.log.push(format!("{name} recovers {healed} HP!"));
    }

    /// Restore `target`'s mana and log the amount actually restored.
    pub(crate) fn restore_mana_character(&mut self, target: CharacterId, amount: i32) {
        let member = self.party_mut(target.side).member_mut(target.slot);
        let restored = member.restore_mana(amount);
        let name = member.name().to_owned();
        self.log.push(format!("{name} recovers {restored} MP!"));
    }

    /// Buff `target`'s attack/defense and log each raised stat.
    pub(crate) fn buff_character(
        &mut self,
        target: CharacterId,
        attack: i32,
        defense: i32,
        turns: u8,
    ) {
        let member = self.party_mut(target.side).member_mut(target.slot);
        member.apply_buff(attack, defense, turns);
        let name = member.name().to_owned();
        if attack > 0 {
            self.log.push(format!("{name}'s attack rises by {attack}!"));
        }
        if defense > 0 {
            self.log
                .push(format!("{name}'s defense rises by {defense}!"));
        }
    }

    /// Render start-of-turn status events into log lines.
    pub(crate) fn push_status_events(&mut self, name: &str, events: &[StatusEvent]) {
        for event in events {
            let line = describe_status_event(name, event);
            self.log.push(line);
        }
    }
}

fn describe_status_event(name: &str, event: &StatusEvent) -> String {
    match event {
        StatusEvent::Stunned { .. } => format!("{name} is stunned and cannot move!"),
        StatusEvent::PoisonTick { damage } => format!("{name} suffers {damage} poison damage!"),
        StatusEvent::PoisonExpired => format!("The poison afflicting {name} wears off."),
        StatusEvent::BurnTick { damage } => format!("{name} suffers {damage} burn damage!"),
        StatusEvent::BurnExpired => format!("The flames on {name} die out."),
        StatusEvent::AttackBuffExpired => format!("{name}'s attack boost fades."),
        StatusEvent::DefenseBuffExpired => format!("{name}'s defense boost fades."),
        StatusEvent::CritBuffExpired => format!("{name}'s focus fades."),
        StatusEvent::TauntExpired => format!("{name} is no longer provoked."),
    }
}
