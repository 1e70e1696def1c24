//! Target resolution.
//!
//! A user-supplied target index never addresses the raw party order; it
//! addresses a position in a filtered candidate list recomputed on every
//! call: living members of a side, or fallen members (revival only). An
//! index outside the current list is simply "no target", not an error.
//!
//! The automated controller's selection policies live here too: the
//! most-wounded ally scan (lowest health fraction, ties broken by lowest
//! absolute health, then party order) and the uniform random pick.

use crate::core::{CharacterId, Side};

use super::battle::Battle;

impl Battle {
    /// Living members of `side`, in party order.
    pub(crate) fn living_ids(&self, side: Side) -> Vec<CharacterId> {
        self.party(side)
            .living_slots()
            .into_iter()
            .map(|slot| CharacterId { side, slot })
            .collect()
    }

    /// The `index`-th living member of `side`, if that many are alive.
    pub(crate) fn nth_living(&self, side: Side, index: usize) -> Option<CharacterId> {
        self.party(side)
            .living_slots()
            .get(index)
            .map(|&slot| CharacterId { side, slot })
    }

    /// The `index`-th fallen member of `side`, if that many have fallen.
    pub(crate) fn nth_fallen(&self, side: Side, index: usize) -> Option<CharacterId> {
        self.party(side)
            .fallen_slots()
            .get(index)
            .map(|&slot| CharacterId { side, slot })
    }

    /// The living member of `side` with the lowest health fraction.
    /// Ties break toward lower absolute health, then party order.
    pub(crate) fn most_wounded(&self, side: Side) -> Option<CharacterId> {
        let mut best: Option<(usize, i64, i64)> = None;

        for slot in self.party(side).living_slots() {
            let member = self.party(side).member(slot);
            let health = i64::from(member.health());
            let max = i64::from(member.max_health());

            let better = match best {
                None => true,
                Some((_, best_health, best_max)) => {
                    // health/max < best_health/best_max, by cross-multiplication
                    let lhs = health * best_max;
                    let rhs = best_health * max;
                    lhs < rhs || (lhs == rhs && health < best_health)
                }
            };
            if better {
                best = Some((slot, health, max));
            }
        }

        best.map(|(slot, _, _)| CharacterId { side, slot })
    }

    /// A uniformly random living member of `side`.
    pub(crate) fn random_living(&mut self, side: Side) -> Option<CharacterId> {
        let slots = self.party(side).living_slots();
        let index = self.rng.pick_index(slots.len())?;
        Some(CharacterId {
            side,
            slot: slots[index],
        })
    }
}
