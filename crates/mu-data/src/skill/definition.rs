//! Normalized skill definition

use mu_formats::bmd::SkillRecord;
use std::time::Duration;

/// Skill number used by the protocol and by both table sources
pub type SkillId = u16;

/// One skill, independent of the table it was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDefinition {
    /// Skill number
    pub id: SkillId,
    /// Display name
    pub name: String,
    /// Base damage
    pub damage: u16,
    /// Cooldown in milliseconds
    pub delay: i32,
    /// Cast range in tiles
    pub distance: u32,
    /// Mana consumed per cast
    pub mana_cost: u16,
    /// Ability gauge consumed per cast
    pub ability_gauge_cost: u16,
    /// Character level required
    pub required_level: u16,
    /// Strength required
    pub required_strength: u16,
    /// Dexterity required
    pub required_dexterity: u16,
    /// Energy required
    pub required_energy: i32,
    /// Command required
    pub required_leadership: u16,
    /// Kill count required
    pub kill_count: u8,
    /// Mastery type
    pub mastery_type: u8,
    /// Use type (area, target, self, ...)
    pub skill_use_type: u8,
    /// Brand (buff) skill applied on use
    pub brand: u32,
    /// Icon index in the skill sprite sheet
    pub magic_icon: u16,
}

impl SkillDefinition {
    /// Build a definition from a binary table record stored at `id`
    pub fn from_record(id: SkillId, record: SkillRecord) -> Self {
        Self {
            id,
            name: record.name,
            damage: record.damage,
            delay: record.delay,
            distance: record.distance,
            mana_cost: record.mana_cost,
            ability_gauge_cost: record.ability_gauge_cost,
            required_level: record.required_level,
            required_strength: record.required_strength,
            required_dexterity: record.required_dexterity,
            required_energy: record.required_energy,
            required_leadership: record.required_leadership,
            kill_count: record.kill_count,
            mastery_type: record.mastery_type,
            skill_use_type: record.skill_use_type,
            brand: record.brand,
            magic_icon: record.magic_icon,
        }
    }

    /// Cooldown as a duration; negative delays count as none
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.delay).unwrap_or(0))
    }
}
