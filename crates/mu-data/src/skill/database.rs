//! Id-keyed skill lookup

use std::collections::HashMap;
use std::time::Duration;

use mu_formats::bmd::{BmdTable, SkillRecord};
use tracing::{error, info, warn};

use super::definition::{SkillDefinition, SkillId};
use super::lang::LangSkillEntry;
use crate::config::SkillTableConfig;
use crate::error::SkillResult;

/// Immutable id → [`SkillDefinition`] table.
///
/// Every accessor keyed by id has a neutral fallback for ids the table does
/// not hold, so an empty table is always usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillDatabase {
    skills: HashMap<SkillId, SkillDefinition>,
}

impl SkillDatabase {
    /// Create an empty table
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from binary records; a record's id is its position in the table.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = SkillRecord>,
    {
        let mut records = records.into_iter();
        let skills: HashMap<_, _> = (0..=SkillId::MAX)
            .zip(records.by_ref())
            .map(|(id, record)| (id, SkillDefinition::from_record(id, record)))
            .collect();

        let extra = records.count();
        if extra > 0 {
            warn!("Ignoring {} skill records past id {}", extra, SkillId::MAX);
        }

        Self { skills }
    }

    /// Build from language-pack rows keyed by skill id.
    ///
    /// Rows whose fields do not fit are logged and skipped.
    pub fn from_lang_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (i32, &'a LangSkillEntry)>,
    {
        let mut skills = HashMap::new();
        for (id, entry) in entries {
            match entry.to_definition(id) {
                Ok(def) => {
                    skills.insert(def.id, def);
                }
                Err(e) => warn!("Skipping language skill entry: {}", e),
            }
        }

        info!("Loaded {} skills from language pack", skills.len());
        Self { skills }
    }

    /// Read the binary skill table named by `config`.
    pub fn try_load(config: &SkillTableConfig) -> SkillResult<Self> {
        let path = config.skill_table_path();
        let table = BmdTable::<SkillRecord>::open(&path, &config.table)?;
        let skipped = table.skipped();

        let db = Self::from_records(table);
        info!(
            "Loaded {} skills from {} ({} skipped)",
            db.len(),
            path.display(),
            skipped
        );
        Ok(db)
    }

    /// Read the binary skill table, degrading to an empty table on failure.
    pub fn load(config: &SkillTableConfig) -> Self {
        Self::try_load(config).unwrap_or_else(|e| {
            error!("Skill table unavailable, continuing without skills: {}", e);
            Self::empty()
        })
    }

    /// Definition for `id`, if loaded
    pub fn get(&self, id: SkillId) -> Option<&SkillDefinition> {
        self.skills.get(&id)
    }

    /// Whether `id` is loaded
    pub fn contains(&self, id: SkillId) -> bool {
        self.skills.contains_key(&id)
    }

    /// Display name, or `"Unknown Skill {id}"`
    pub fn name(&self, id: SkillId) -> String {
        self.get(id)
            .map_or_else(|| format!("Unknown Skill {id}"), |def| def.name.clone())
    }

    /// Mana cost, 0 when unknown
    pub fn mana_cost(&self, id: SkillId) -> u16 {
        self.get(id).map_or(0, |def| def.mana_cost)
    }

    /// Ability gauge cost, 0 when unknown
    pub fn ability_gauge_cost(&self, id: SkillId) -> u16 {
        self.get(id).map_or(0, |def| def.ability_gauge_cost)
    }

    /// Cast range in tiles, 0 when unknown
    pub fn range(&self, id: SkillId) -> u32 {
        self.get(id).map_or(0, |def| def.distance)
    }

    /// Cooldown, zero when unknown
    pub fn cooldown(&self, id: SkillId) -> Duration {
        self.get(id).map_or(Duration::ZERO, SkillDefinition::cooldown)
    }

    /// Required character level, 0 when unknown
    pub fn required_level(&self, id: SkillId) -> u16 {
        self.get(id).map_or(0, |def| def.required_level)
    }

    /// Iterate over all definitions in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &SkillDefinition> + '_ {
        self.skills.values()
    }

    /// Number of loaded skills
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Whether no skills are loaded
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl FromIterator<SkillDefinition> for SkillDatabase {
    fn from_iter<I: IntoIterator<Item = SkillDefinition>>(iter: I) -> Self {
        Self {
            skills: iter.into_iter().map(|def| (def.id, def)).collect(),
        }
    }
}
