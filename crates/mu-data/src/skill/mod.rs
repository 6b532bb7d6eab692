//! Skill definitions
//!
//! Two sources produce the same [`SkillDefinition`]:
//!
//! - the binary skill table (`skill_eng.bmd`), where a record's position is
//!   its skill id
//! - a language pack's skill text, already parsed into [`LangSkillEntry`] rows
//!
//! The process-wide table is initialized once, on first use, and is read-only
//! afterwards. [`init_global`] and [`init_global_with`] choose the source; the
//! first call wins and later calls return the existing table.

mod database;
mod definition;
mod lang;

pub use database::SkillDatabase;
pub use definition::{SkillDefinition, SkillId};
pub use lang::LangSkillEntry;

use std::sync::OnceLock;

use crate::config::SkillTableConfig;

static SKILLS: OnceLock<SkillDatabase> = OnceLock::new();

/// Process-wide skill table, loaded from the default location on first use
pub fn global() -> &'static SkillDatabase {
    SKILLS.get_or_init(|| SkillDatabase::load(&SkillTableConfig::default()))
}

/// Initialize the process-wide table from `config` unless already set
pub fn init_global(config: &SkillTableConfig) -> &'static SkillDatabase {
    SKILLS.get_or_init(|| SkillDatabase::load(config))
}

/// Initialize the process-wide table with `build` unless already set
pub fn init_global_with<F>(build: F) -> &'static SkillDatabase
where
    F: FnOnce() -> SkillDatabase,
{
    SKILLS.get_or_init(build)
}
