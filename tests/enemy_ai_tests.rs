//! Automated actor controller tests: skill priorities, taunt binding,
//! and the cinematic descriptor contract.

use battle_engine::{
    standard_registry, ActionCategory, Battle, Character, CharacterId, Party, PlayerAction,
    SkillCategory, SkillEffect, SkillRegistry,
};

fn one_skill_registry(
    name: &str,
    category: SkillCategory,
    power: i32,
    cost: i32,
    effect: SkillEffect,
) -> (SkillRegistry, battle_engine::SkillId) {
    let mut registry = SkillRegistry::new();
    let id = registry.register_auto(name, category, power, cost, effect);
    (registry, id)
}

/// A healer enemy tops up the most wounded member of its own party.
#[test]
fn test_heal_skill_targets_most_wounded_ally() {
    let (registry, heal) = one_skill_registry(
        "Dark Mending",
        SkillCategory::Heal,
        30,
        10,
        SkillEffect::Heal,
    );

    let hero = Character::hero("Arta", 100, 30, 1, 0);
    let healer = Character::monster("Shaman", 80, 50, 5, 0, 5, 5).with_skills([heal]);
    let bruiser = Character::monster("Ogre", 100, 0, 10, 0, 5, 5);

    let mut battle = Battle::new(
        Party::new(vec![hero]),
        Party::new(vec![healer, bruiser]),
        registry,
        42,
    );

    // Wound the ogre so it is clearly the most wounded ally.
    let _ = battle.handle_player_action(PlayerAction::Attack { target: 1 });
    // Direct damage to make the wound meaningful.
    for _ in 0..3 {
        battle.reset_player_turn();
        let _ = battle.handle_player_action(PlayerAction::Attack { target: 1 });
    }
    let wounded_before = battle.enemy_party().member(1).health();
    assert!(wounded_before < 100);

    let descriptor = battle.take_enemy_turn(0);
    assert_eq!(descriptor.actor, Some(CharacterId::enemy(0)));
    assert_eq!(descriptor.target, Some(CharacterId::enemy(1)));
    assert_eq!(descriptor.category, ActionCategory::Heal);
    assert_eq!(
        battle.enemy_party().member(1).health(),
        100.min(wounded_before + 30)
    );
    // Mana was deducted when the skill applied.
    assert_eq!(battle.enemy_party().member(0).mana(), 40);
}

/// With every ally at full health the heal skill is skipped and the
/// actor falls back to a plain attack.
#[test]
fn test_heal_skill_skipped_at_full_health() {
    let (registry, heal) = one_skill_registry(
        "Dark Mending",
        SkillCategory::Heal,
        30,
        10,
        SkillEffect::Heal,
    );

    let hero = Character::hero("Arta", 100, 30, 12, 0);
    let healer = Character::monster("Shaman", 80, 50, 5, 0, 5, 5).with_skills([heal]);

    let mut battle = Battle::new(
        Party::new(vec![hero]),
        Party::new(vec![healer]),
        registry,
        42,
    );

    let descriptor = battle.take_enemy_turn(0);
    assert_eq!(descriptor.category, ActionCategory::Attack);
    assert_eq!(descriptor.target, Some(CharacterId::player(0)));
    // No mana spent: the scan skipped the heal and fell back.
    assert_eq!(battle.enemy_party().member(0).mana(), 50);
    assert_eq!(battle.player_party().member(0).health(), 95);
}

/// A buff skill is always self-cast.
#[test]
fn test_buff_skill_is_self_cast() {
    let (registry, buff) = one_skill_registry(
        "War Cry",
        SkillCategory::Buff,
        12,
        8,
        SkillEffect::Fortify {
            attack: 12,
            defense: 12,
            turns: 3,
            scope: battle_engine::BuffScope::Caster,
        },
    );

    let hero = Character::hero("Arta", 100, 30, 12, 0);
    let brute = Character::monster("Ogre", 100, 20, 10, 0, 5, 5).with_skills([buff]);

    let mut battle = Battle::new(
        Party::new(vec![hero]),
        Party::new(vec![brute]),
        registry,
        42,
    );

    let descriptor = battle.take_enemy_turn(0);
    assert_eq!(descriptor.category, ActionCategory::Buff);
    assert_eq!(descriptor.actor, Some(CharacterId::enemy(0)));
    assert_eq!(descriptor.target, Some(CharacterId::enemy(0)));

    let status = battle.enemy_party().member(0).status();
    assert_eq!(status.attack_buff.unwrap().amount, 12);
    assert_eq!(status.defense_buff.unwrap().amount, 12);
    assert_eq!(battle.enemy_party().member(0).mana(), 12);
}

/// An unaffordable skill is passed over; the actor attacks instead.
#[test]
fn test_unaffordable_skill_falls_back_to_attack() {
    let (registry, nuke) = one_skill_registry(
        "Meteor",
        SkillCategory::Attack,
        60,
        40,
        SkillEffect::Strike {
            bypass_pct: 0,
            rider: None,
            desperate: false,
            aoe: false,
        },
    );

    let hero = Character::hero("Arta", 100, 30, 12, 0);
    let caster = Character::monster("Imp", 40, 10, 6, 0, 5, 5).with_skills([nuke]);

    let mut battle = Battle::new(
        Party::new(vec![hero]),
        Party::new(vec![caster]),
        registry,
        42,
    );

    let descriptor = battle.take_enemy_turn(0);
    assert_eq!(descriptor.category, ActionCategory::Attack);
    assert_eq!(battle.enemy_party().member(0).mana(), 10);
    assert_eq!(battle.player_party().member(0).health(), 94); // plain attack, 6
}

/// An affordable attack skill is used and its cost deducted.
#[test]
fn test_attack_skill_applies_power_and_cost() {
    let (registry, bolt) = one_skill_registry(
        "Shadow Bolt",
        SkillCategory::Attack,
        25,
        10,
        SkillEffect::Strike {
            bypass_pct: 0,
            rider: None,
            desperate: false,
            aoe: false,
        },
    );

    let hero = Character::hero("Arta", 100, 30, 12, 0);
    let caster = Character::monster("Warlock", 40, 30, 6, 0, 5, 5).with_skills([bolt]);

    let mut battle = Battle::new(
        Party::new(vec![hero]),
        Party::new(vec![caster]),
        registry,
        42,
    );

    let descriptor = battle.take_enemy_turn(0);
    assert_eq!(descriptor.category, ActionCategory::Attack);
    assert_eq!(descriptor.target, Some(CharacterId::player(0)));
    assert_eq!(battle.player_party().member(0).health(), 75);
    assert_eq!(battle.enemy_party().member(0).mana(), 20);
}

/// A stunned enemy reports an idle descriptor and takes no action.
#[test]
fn test_stunned_enemy_is_idle() {
    let hero = Character::hero("Arta", 100, 30, 12, 0);
    let mut wolf = Character::monster("Wolf", 60, 0, 10, 0, 5, 5);
    wolf.apply_stun(1);

    let mut battle = Battle::new(
        Party::new(vec![hero]),
        Party::new(vec![wolf]),
        SkillRegistry::new(),
        42,
    );
    battle.drain_log();

    let descriptor = battle.take_enemy_turn(0);
    assert!(descriptor.is_idle());
    assert_eq!(battle.player_party().member(0).health(), 100);
    assert!(battle
        .drain_log()
        .iter()
        .any(|l| l.contains("stunned")));

    // Next turn the stun has worn off.
    let descriptor = battle.take_enemy_turn(0);
    assert_eq!(descriptor.category, ActionCategory::Attack);
}

/// A dead enemy reports an idle descriptor.
#[test]
fn test_dead_enemy_is_idle() {
    let hero = Character::hero("Arta", 100, 30, 60, 0);
    let wolves = vec![
        Character::monster("Wolf A", 50, 0, 10, 0, 5, 5),
        Character::monster("Wolf B", 60, 0, 10, 0, 5, 5),
    ];

    let (registry, _) = standard_registry();
    let mut battle = Battle::new(Party::new(vec![hero]), Party::new(wolves), registry, 42);

    let _ = battle.handle_player_action(PlayerAction::Attack { target: 0 });
    assert!(battle.enemy_party().member(0).is_dead());

    let descriptor = battle.take_enemy_turn(0);
    assert!(descriptor.is_idle());
}

/// Scenario: a taunt with duration 2 forces the enemy's attacks onto the
/// taunting character for exactly its next two turns; on the third turn
/// the mark has expired and selection is free again.
#[test]
fn test_taunt_redirects_for_two_turns_then_expires() {
    let (registry, ids) = standard_registry();
    let tank = Character::hero("Dain", 4000, 30, 10, 0).with_skills([ids.taunting_roar]);
    let mage = Character::hero("Lyra", 4000, 30, 8, 0);
    let wolf = Character::monster("Wolf", 600, 0, 10, 0, 5, 5);

    let mut battle = Battle::new(
        Party::new(vec![tank, mage]),
        Party::new(vec![wolf]),
        registry,
        42,
    );

    // Dain taunts every enemy (duration 2).
    let outcome = battle.handle_player_action(PlayerAction::UseSkill { skill: 0, target: 0 });
    assert!(outcome.is_consumed());
    assert!(battle.enemy_party().member(0).status().taunt.is_some());

    // Next two wolf turns must target Dain regardless of random choice.
    for _ in 0..2 {
        let descriptor = battle.take_enemy_turn(0);
        assert_eq!(descriptor.target, Some(CharacterId::player(0)));
    }

    // The mark expired during the second turn's status resolution.
    assert!(battle.enemy_party().member(0).status().taunt.is_none());

    // Third turn: free selection among the living.
    let descriptor = battle.take_enemy_turn(0);
    let target = descriptor.target.unwrap();
    assert!(battle
        .alive_players()
        .contains(&target));
}

/// A taunt binding toward a fallen character is ignored.
#[test]
fn test_taunt_toward_the_fallen_is_ignored() {
    let (registry, ids) = standard_registry();
    let tank = Character::hero("Dain", 100, 30, 10, 0).with_skills([ids.taunting_roar]);
    let mage = Character::hero("Lyra", 4000, 30, 8, 0);
    let wolf = Character::monster("Wolf", 600, 0, 200, 0, 5, 5);

    let mut battle = Battle::new(
        Party::new(vec![tank, mage]),
        Party::new(vec![wolf]),
        registry,
        42,
    );

    let _ = battle.handle_player_action(PlayerAction::UseSkill { skill: 0, target: 0 });

    // The wolf one-shots the taunting tank on its first bound turn.
    let descriptor = battle.take_enemy_turn(0);
    assert_eq!(descriptor.target, Some(CharacterId::player(0)));
    assert!(battle.player_party().member(0).is_dead());

    // Still marked, but the source is dead: selection ignores the mark
    // and the only living player is Lyra.
    let descriptor = battle.take_enemy_turn(0);
    assert_eq!(descriptor.target, Some(CharacterId::player(1)));
}

/// The controller only ever targets living player-party members.
#[test]
fn test_automated_targeting_never_picks_the_dead() {
    let heroes = vec![
        Character::hero("Arta", 100, 30, 12, 0),
        Character::hero("Mira", 5000, 30, 8, 0),
    ];
    let wolf = Character::monster("Wolf", 5000, 0, 30, 0, 5, 5);

    let (registry, _) = standard_registry();
    let mut battle = Battle::new(Party::new(heroes), Party::new(vec![wolf]), registry, 42);

    // Hit random targets until Arta falls.
    for _ in 0..200 {
        if battle.alive_players().len() == 1 {
            break;
        }
        let _ = battle.take_enemy_turn(0);
    }
    assert_eq!(battle.alive_players(), vec![CharacterId::player(1)]);

    // Every further attack must pick the one living member.
    for _ in 0..5 {
        let descriptor = battle.take_enemy_turn(0);
        assert_eq!(descriptor.target, Some(CharacterId::player(1)));
    }
}
