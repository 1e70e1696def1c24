//! The standard content set: every skill and item of the base game,
//! expressed purely as registry data. A game that wants a different
//! roster builds its own registry the same way.

use crate::items::{Item, ItemKind};
use crate::skills::{BuffScope, Rider, SkillCategory, SkillEffect, SkillId, SkillRegistry};

/// Ids of the standard skills, in registration order.
#[derive(Clone, Copy, Debug)]
pub struct StandardSkills {
    pub ultimate_slash: SkillId,
    pub brave_slash: SkillId,
    pub shield_bash: SkillId,
    pub piercing_arrow: SkillId,
    pub shadow_strike: SkillId,
    pub poison_blade: SkillId,
    pub fireball: SkillId,
    pub rain_of_arrows: SkillId,
    pub light_heal: SkillId,
    pub heal: SkillId,
    pub ultra_heal: SkillId,
    pub defensive_stance: SkillId,
    pub iron_fortress: SkillId,
    pub eagle_eye: SkillId,
    pub fade: SkillId,
    pub meditate: SkillId,
    pub heros_will: SkillId,
    pub magic_barrier: SkillId,
    pub taunting_roar: SkillId,
}

fn strike(bypass_pct: u8, rider: Option<Rider>, desperate: bool, aoe: bool) -> SkillEffect {
    SkillEffect::Strike {
        bypass_pct,
        rider,
        desperate,
        aoe,
    }
}

/// Build the standard skill registry.
#[must_use]
pub fn standard_registry() -> (SkillRegistry, StandardSkills) {
    let mut reg = SkillRegistry::new();

    let ids = StandardSkills {
        ultimate_slash: reg.register_auto(
            "Ultimate Slash",
            SkillCategory::Attack,
            40,
            20,
            strike(0, None, false, false),
        ),
        brave_slash: reg.register_auto(
            "Brave Slash",
            SkillCategory::Attack,
            25,
            10,
            strike(0, None, true, false),
        ),
        shield_bash: reg.register_auto(
            "Shield Bash",
            SkillCategory::Attack,
            15,
            8,
            strike(
                0,
                Some(Rider::Stun {
                    chance: 20,
                    turns: 1,
                }),
                false,
                false,
            ),
        ),
        piercing_arrow: reg.register_auto(
            "Piercing Arrow",
            SkillCategory::Attack,
            20,
            10,
            strike(20, None, false, false),
        ),
        shadow_strike: reg.register_auto(
            "Shadow Strike",
            SkillCategory::Attack,
            22,
            10,
            strike(0, None, false, false),
        ),
        poison_blade: reg.register_auto(
            "Poison Blade",
            SkillCategory::Attack,
            15,
            12,
            strike(
                0,
                Some(Rider::Poison {
                    chance: 100,
                    per_tick: 5,
                    ticks: 3,
                }),
                false,
                false,
            ),
        ),
        fireball: reg.register_auto(
            "Fireball",
            SkillCategory::Attack,
            25,
            15,
            strike(
                0,
                Some(Rider::Burn {
                    chance: 10,
                    per_tick: 10,
                    ticks: 2,
                }),
                false,
                false,
            ),
        ),
        rain_of_arrows: reg.register_auto(
            "Rain of Arrows",
            SkillCategory::Attack,
            15,
            18,
            strike(0, None, false, true),
        ),
        light_heal: reg.register_auto("Light Heal", SkillCategory::Heal, 20, 8, SkillEffect::Heal),
        heal: reg.register_auto("Heal", SkillCategory::Heal, 35, 14, SkillEffect::Heal),
        ultra_heal: reg.register_auto("Ultra Heal", SkillCategory::Heal, 60, 25, SkillEffect::Heal),
        defensive_stance: reg.register_auto(
            "Defensive Stance",
            SkillCategory::Buff,
            15,
            6,
            SkillEffect::Fortify {
                attack: 0,
                defense: 15,
                turns: 2,
                scope: BuffScope::Caster,
            },
        ),
        iron_fortress: reg.register_auto(
            "Iron Fortress",
            SkillCategory::Buff,
            30,
            12,
            SkillEffect::Fortify {
                attack: 0,
                defense: 30,
                turns: 2,
                scope: BuffScope::Caster,
            },
        ),
        eagle_eye: reg.register_auto(
            "Eagle Eye",
            SkillCategory::Buff,
            30,
            10,
            SkillEffect::Sharpen {
                crit_bonus: 30,
                turns: 2,
            },
        ),
        fade: reg.register_auto("Fade", SkillCategory::Buff, 0, 8, SkillEffect::Evade),
        meditate: reg.register_auto(
            "Meditate",
            SkillCategory::Buff,
            25,
            0,
            SkillEffect::Channel,
        ),
        heros_will: reg.register_auto(
            "Hero's Will",
            SkillCategory::Buff,
            15,
            20,
            SkillEffect::Fortify {
                attack: 15,
                defense: 0,
                turns: 3,
                scope: BuffScope::Party,
            },
        ),
        magic_barrier: reg.register_auto(
            "Magic Barrier",
            SkillCategory::Buff,
            20,
            18,
            SkillEffect::Fortify {
                attack: 0,
                defense: 20,
                turns: 2,
                scope: BuffScope::Party,
            },
        ),
        taunting_roar: reg.register_auto(
            "Taunting Roar",
            SkillCategory::Buff,
            0,
            10,
            SkillEffect::Provoke { turns: 2 },
        ),
    };

    (reg, ids)
}

/// The standard item set, one of each kind.
#[must_use]
pub fn standard_items() -> Vec<Item> {
    vec![
        Item::new("Thunder Bomb", ItemKind::Attack, 30),
        Item::new("Acid Flask", ItemKind::Debuff, 20),
        Item::new("Healing Potion", ItemKind::HealHp, 50),
        Item::new("Mana Potion", ItemKind::HealMp, 30),
        Item::new("War Banner", ItemKind::Buff, 10),
        Item::new("Phoenix Feather", ItemKind::Revive, 50),
        Item::new("Strange Doll", ItemKind::Mystery, 0),
    ]
}
