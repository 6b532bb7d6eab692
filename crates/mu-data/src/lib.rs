//! Process-wide static game data for the MU client
//!
//! Static tables that the client loads once and then reads from anywhere:
//!
//! - [`skill`]: id → [`SkillDefinition`] lookup built from the binary skill
//!   table or from a language pack's skill text
//! - [`config`]: where those tables live and how they are framed
//!
//! Loading never aborts the process. A missing or unreadable table is logged
//! and leaves an empty lookup; callers fall back to defaults such as
//! `"Unknown Skill {id}"`.
//!
//! # Example
//!
//! ```rust,no_run
//! use mu_data::config::SkillTableConfig;
//! use mu_data::skill;
//!
//! let config = SkillTableConfig::default().with_data_path("/opt/mu/Data");
//! let skills = skill::init_global(&config);
//! println!("{} skills, #26 is {}", skills.len(), skills.name(26));
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod skill;

pub use config::SkillTableConfig;
pub use error::{SkillError, SkillResult};
pub use skill::{LangSkillEntry, SkillDatabase, SkillDefinition, SkillId};
