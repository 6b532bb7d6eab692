//! Data table locations

use mu_crypto::BMD_EXTRA_KEY;
use mu_formats::bmd::TableOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the skill table lives and how it is framed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillTableConfig {
    /// Client data directory
    pub data_path: PathBuf,

    /// Skill table path relative to `data_path`
    pub skill_file: PathBuf,

    /// Framing and key of the table file
    pub table: TableOptions,
}

impl Default for SkillTableConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./Data"),
            skill_file: PathBuf::from("Local/skill_eng.bmd"),
            table: TableOptions::default().with_key(BMD_EXTRA_KEY),
        }
    }
}

impl SkillTableConfig {
    /// Create a configuration rooted at `data_path`
    pub fn new<P: AsRef<Path>>(data_path: P) -> Self {
        Self {
            data_path: data_path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Full path of the skill table
    pub fn skill_table_path(&self) -> PathBuf {
        self.data_path.join(&self.skill_file)
    }

    /// Set the data directory
    #[must_use]
    pub fn with_data_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_path = path.as_ref().to_path_buf();
        self
    }

    /// Set the skill table path relative to the data directory
    #[must_use]
    pub fn with_skill_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.skill_file = path.as_ref().to_path_buf();
        self
    }

    /// Set the table framing options
    #[must_use]
    pub const fn with_table_options(mut self, table: TableOptions) -> Self {
        self.table = table;
        self
    }
}
