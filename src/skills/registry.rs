//! Skill registry for definition lookup.
//!
//! The `SkillRegistry` stores every skill definition known to a battle and
//! provides fast lookup by `SkillId`. Characters carry only ids; the
//! registry is the single source of truth for what a skill does, which
//! makes adding a skill a data change.

use rustc_hash::FxHashMap;

use super::spec::{SkillCategory, SkillEffect, SkillId, SkillSpec};

/// Registry of skill definitions.
#[derive(Clone, Debug, Default)]
pub struct SkillRegistry {
    skills: FxHashMap<SkillId, SkillSpec>,
    next_id: u16,
}

impl SkillRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a skill definition.
    ///
    /// Panics if a skill with the same ID already exists.
    pub fn register(&mut self, spec: SkillSpec) {
        if self.skills.contains_key(&spec.id) {
            panic!("Skill with ID {:?} already registered", spec.id);
        }
        self.skills.insert(spec.id, spec);
    }

    /// Register a skill with an auto-assigned ID. Returns the assigned ID.
    pub fn register_auto(
        &mut self,
        name: impl Into<String>,
        category: SkillCategory,
        power: i32,
        mana_cost: i32,
        effect: SkillEffect,
    ) -> SkillId {
        let id = SkillId::new(self.next_id);
        self.next_id += 1;

        self.register(SkillSpec::new(id, name, category, power, mana_cost, effect));
        id
    }

    /// Get a skill definition by ID.
    #[must_use]
    pub fn get(&self, id: SkillId) -> Option<&SkillSpec> {
        self.skills.get(&id)
    }

    /// Check if a skill ID is registered.
    #[must_use]
    pub fn contains(&self, id: SkillId) -> bool {
        self.skills.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Iterate over all skill definitions.
    pub fn iter(&self) -> impl Iterator<Item = &SkillSpec> {
        self.skills.values()
    }

    /// Find skills by category.
    pub fn find_by_category(&self, category: SkillCategory) -> impl Iterator<Item = &SkillSpec> {
        self.skills.values().filter(move |s| s.category == category)
    }
}
