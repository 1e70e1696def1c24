//! Timed status effects.
//!
//! Every combatant carries a `StatusState`: a set of independently timed
//! effects resolved once at the start of that combatant's own turn, never
//! mid-turn. Durations are measured in the owner's turns, so an effect
//! applied with duration N stays active through N of the owner's turns
//! and is cleared exactly when its counter reaches zero.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::id::CharacterId;

/// A damage-over-time effect (poison or burn).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOverTime {
    /// Damage applied at the start of each of the owner's turns.
    pub per_tick: i32,
    /// Ticks remaining.
    pub ticks: u8,
}

/// A timed flat bonus to one stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBuff {
    pub amount: i32,
    pub turns: u8,
}

/// Forced-targeting mark: offensive actions by the owner are redirected
/// toward `source` while the mark lasts and `source` is alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TauntMark {
    pub source: CharacterId,
    pub turns: u8,
}

/// The full status block of one combatant. All effects are independent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusState {
    /// Turns the owner is stunned for. While > 0 the owner's turn is
    /// consumed without an action.
    pub stun_turns: u8,
    pub poison: Option<DamageOverTime>,
    pub burn: Option<DamageOverTime>,
    pub attack_buff: Option<StatBuff>,
    pub defense_buff: Option<StatBuff>,
    pub crit_buff: Option<StatBuff>,
    /// Single-use: the next incoming hit rolls a miss chance, then the
    /// flag clears regardless of the outcome.
    pub dodge: bool,
    pub taunt: Option<TauntMark>,
    /// Transient guard stance: halves the next incoming hit. Consumed by
    /// that hit and cleared at the start of the owner's next turn.
    pub defending: bool,
}

/// One resolved status effect, reported so the engine can log it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusEvent {
    Stunned { remaining: u8 },
    PoisonTick { damage: i32 },
    PoisonExpired,
    BurnTick { damage: i32 },
    BurnExpired,
    AttackBuffExpired,
    DefenseBuffExpired,
    CritBuffExpired,
    TauntExpired,
}

/// Outcome of resolving a combatant's statuses at the start of its turn.
#[derive(Clone, Debug, Default)]
pub struct StatusTick {
    /// The turn is consumed without an action (stun).
    pub blocked: bool,
    /// Taunt bound for this turn, captured before the duration ticks down.
    pub taunted_by: Option<CharacterId>,
    /// Total damage-over-time to apply to the owner's health.
    pub damage: i32,
    pub events: SmallVec<[StatusEvent; 4]>,
}

impl StatusState {
    /// Resolve all pending effects for the start of the owner's turn.
    ///
    /// Order: stun, poison, burn, attack/defense/critical buffs, taunt.
    /// The caller applies `damage` to the owner's health and renders
    /// `events` into log lines.
    pub fn begin_turn(&mut self) -> StatusTick {
        let mut tick = StatusTick::default();

        if self.stun_turns > 0 {
            self.stun_turns -= 1;
            tick.blocked = true;
            tick.events.push(StatusEvent::Stunned {
                remaining: self.stun_turns,
            });
        }

        if let Some(dot) = &mut self.poison {
            tick.damage += dot.per_tick;
            tick.events.push(StatusEvent::PoisonTick {
                damage: dot.per_tick,
            });
            dot.ticks -= 1;
            if dot.ticks == 0 {
                self.poison = None;
                tick.events.push(StatusEvent::PoisonExpired);
            }
        }

        if let Some(dot) = &mut self.burn {
            tick.damage += dot.per_tick;
            tick.events.push(StatusEvent::BurnTick {
                damage: dot.per_tick,
            });
            dot.ticks -= 1;
            if dot.ticks == 0 {
                self.burn = None;
                tick.events.push(StatusEvent::BurnExpired);
            }
        }

        Self::tick_buff(&mut self.attack_buff, StatusEvent::AttackBuffExpired, &mut tick);
        Self::tick_buff(&mut self.defense_buff, StatusEvent::DefenseBuffExpired, &mut tick);
        Self::tick_buff(&mut self.crit_buff, StatusEvent::CritBuffExpired, &mut tick);

        if let Some(mark) = &mut self.taunt {
            tick.taunted_by = Some(mark.source);
            mark.turns -= 1;
            if mark.turns == 0 {
                self.taunt = None;
                tick.events.push(StatusEvent::TauntExpired);
            }
        }

        tick
    }

    fn tick_buff(buff: &mut Option<StatBuff>, expired: StatusEvent, tick: &mut StatusTick) {
        if let Some(b) = buff {
            b.turns -= 1;
            if b.turns == 0 {
                *buff = None;
                tick.events.push(expired);
            }
        }
    }
}
