//! Skill entries parsed from a language pack
//!
//! The language pack's skill text is read by an external reader into plain
//! signed integers. Each field is narrowed to the width the binary table uses;
//! values that do not fit reject the entry.

use serde::{Deserialize, Serialize};

use super::definition::{SkillDefinition, SkillId};
use crate::error::{SkillError, SkillResult};

/// One skill row of a language pack, as read from text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LangSkillEntry {
    /// Display name
    pub name: String,
    /// Character level required
    pub level: i32,
    /// Base damage
    pub damage: i32,
    /// Mana consumed per cast
    pub mana_cost: i32,
    /// Ability gauge consumed per cast
    pub ag_cost: i32,
    /// Cast range in tiles
    pub distance: i32,
    /// Cooldown in milliseconds
    pub delay: i32,
    /// Energy required
    pub req_energy: i32,
    /// Command required
    pub req_command: i32,
    /// Strength required
    pub req_strength: i32,
    /// Dexterity required
    pub req_dexterity: i32,
    /// Kill count required
    pub req_kill_count: i32,
    /// Mastery type
    pub mastery_type: i32,
    /// Use type
    pub use_type: i32,
    /// Brand (buff) skill applied on use
    pub brand: i32,
    /// Icon index
    pub icon: i32,
}

fn narrow<T: TryFrom<i32>>(id: i32, field: &'static str, value: i32) -> SkillResult<T> {
    T::try_from(value).map_err(|_| SkillError::MalformedEntry { id, field, value })
}

impl LangSkillEntry {
    /// Convert to a definition, narrowing every field.
    pub fn to_definition(&self, id: i32) -> SkillResult<SkillDefinition> {
        Ok(SkillDefinition {
            id: narrow::<SkillId>(id, "id", id)?,
            name: self.name.clone(),
            damage: narrow(id, "damage", self.damage)?,
            delay: self.delay,
            distance: narrow(id, "distance", self.distance)?,
            mana_cost: narrow(id, "mana_cost", self.mana_cost)?,
            ability_gauge_cost: narrow(id, "ag_cost", self.ag_cost)?,
            required_level: narrow(id, "level", self.level)?,
            required_strength: narrow(id, "req_strength", self.req_strength)?,
            required_dexterity: narrow(id, "req_dexterity", self.req_dexterity)?,
            required_energy: self.req_energy,
            required_leadership: narrow(id, "req_command", self.req_command)?,
            kill_count: narrow(id, "req_kill_count", self.req_kill_count)?,
            mastery_type: narrow(id, "mastery_type", self.mastery_type)?,
            skill_use_type: narrow(id, "use_type", self.use_type)?,
            brand: narrow(id, "brand", self.brand)?,
            magic_icon: narrow(id, "icon", self.icon)?,
        })
    }
}
