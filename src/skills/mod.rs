//! Skill definitions and the data-driven dispatch registry.

pub mod registry;
pub mod spec;

pub use registry::SkillRegistry;
pub use spec::{BuffScope, Rider, SkillCategory, SkillEffect, SkillId, SkillSpec, TargetClass};
