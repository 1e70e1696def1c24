//! Battle end evaluation and reward distribution.
//!
//! Termination is a pure predicate checked after every resolved turn:
//! the battle ends exactly when either party is fully defeated. The
//! ongoing flag flips once, and rewards are distributed once, on that
//! transition.

use super::battle::Battle;

impl Battle {
    /// Check the termination predicate and, on the transition from
    /// ongoing to ended, distribute rewards. Safe to call repeatedly.
    pub(crate) fn evaluate_outcome(&mut self) {
        if !self.ongoing {
            return;
        }
        if !self.players.is_defeated() && !self.enemies.is_defeated() {
            return;
        }

        self.ongoing = false;
        tracing::debug!(target: "battle_engine::engine", "battle ended");
        self.distribute_rewards();
    }

    /// Player party defeated: game over, no rewards. Enemy party
    /// defeated: coin total to the party balance, the experience total
    /// to each living hero individually.
    fn distribute_rewards(&mut self) {
        if self.players.is_defeated() {
            self.log.push("Your party has been defeated...");
            self.log.push("GAME OVER");
            return;
        }

        self.log.push("You defeated every enemy!");

        let mut total_exp: u32 = 0;
        let mut total_coins: u32 = 0;
        for member in self.enemies.members() {
            if let Some((exp, coins)) = member.reward_values() {
                total_exp += exp;
                total_coins += coins;
            }
        }

        self.log
            .push(format!("The party earns a total of {total_exp} EXP!"));
        self.log
            .push(format!("The party receives {total_coins} coins!"));
        self.players.add_money(total_coins);

        for slot in self.players.living_slots() {
            let member = self.players.member_mut(slot);
            if member.grant_experience(total_exp) {
                let name = member.name().to_owned();
                self.log.push(format!("{name} gains {total_exp} EXP!"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Character, CharacterId, Party};
    use crate::engine::Battle;
    use crate::skills::SkillRegistry;

    fn battle() -> Battle {
        let players = Party::new(vec![
            Character::hero("Arta", 100, 30, 12, 0),
            Character::hero("Mira", 80, 50, 8, 0),
        ]);
        let enemies = Party::new(vec![
            Character::monster("Slime", 50, 10, 8, 0, 25, 10),
            Character::monster("Wolf", 40, 0, 10, 0, 15, 5),
        ]);
        Battle::new(players, enemies, SkillRegistry::new(), 42)
    }

    #[test]
    fn test_victory_rewards_sum_over_defeated_party() {
        let mut battle = battle();
        // Mira falls before the end; only Arta should be granted EXP.
        battle.apply_hit(CharacterId::player(1), 999, 0);

        battle.apply_hit(CharacterId::enemy(0), 999, 0);
        battle.evaluate_outcome();
        assert!(battle.is_ongoing());

        battle.apply_hit(CharacterId::enemy(1), 999, 0);
        battle.evaluate_outcome();
        assert!(!battle.is_ongoing());

        assert_eq!(battle.player_party().money(), 15);
        assert_eq!(battle.player_party().member(0).experience(), Some(40));
        assert_eq!(battle.player_party().member(1).experience(), Some(0));

        let log = battle.drain_log();
        assert!(log.contains(&"The party earns a total of 40 EXP!".to_string()));
        assert!(log.contains(&"The party receives 15 coins!".to_string()));
        assert!(log.contains(&"Arta gains 40 EXP!".to_string()));
        assert!(!log.contains(&"Mira gains 40 EXP!".to_string()));
    }

    #[test]
    fn test_defeat_grants_nothing() {
        let mut battle = battle();
        battle.apply_hit(CharacterId::player(0), 999, 0);
        battle.apply_hit(CharacterId::player(1), 999, 0);
        battle.evaluate_outcome();

        assert!(!battle.is_ongoing());
        assert_eq!(battle.player_party().money(), 0);

        let log = battle.drain_log();
        assert!(log.contains(&"GAME OVER".to_string()));
    }

    #[test]
    fn test_rewards_distributed_exactly_once() {
        let mut battle = battle();
        battle.apply_hit(CharacterId::enemy(0), 999, 0);
        battle.apply_hit(CharacterId::enemy(1), 999, 0);

        battle.evaluate_outcome();
        battle.evaluate_outcome();
        battle.evaluate_outcome();

        assert_eq!(battle.player_party().money(), 15);
        assert_eq!(battle.player_party().member(0).experience(), Some(40));
    }
}
