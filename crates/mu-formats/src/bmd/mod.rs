//! BMD record table format
//!
//! BMD files are the client's static data tables: an optional leading record
//! count, a run of fixed-size XOR-encrypted records, and an optional trailing
//! checksum.
//!
//! ```text
//! [u32 count (plain, optional)][record 0 (encrypted)]...[record n-1][u32 checksum (optional)]
//! ```
//!
//! Each record is decrypted on its own with [`mu_crypto::Xor3Cipher`], so the
//! keystream restarts at every record boundary. The leading count is
//! informational: reading continues while a whole record (plus the checksum
//! trailer) still fits, and any shorter remainder is ignored.
//!
//! # Example
//!
//! ```rust,no_run
//! use mu_formats::bmd::{BmdTable, MasterSkillTreeData, TableOptions, group_by_class};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = TableOptions::default().with_leading_count(false);
//! let table = BmdTable::<MasterSkillTreeData>::open("Data/Local/masterskilltreedata.bmd", &options)?;
//! let by_class = group_by_class(table);
//! println!("{} classes", by_class.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod master_skill;
mod options;
mod reader;
mod record;
mod skill;

pub use error::{BmdError, BmdResult};
pub use master_skill::{MasterSkillTreeData, group_by_class};
pub use options::TableOptions;
pub use reader::{BmdChunks, BmdTable, read_table};
pub use record::{BmdRecord, decode_fixed, latin1_cstr};
pub use skill::{SKILL_NAME_LEN, SkillRecord};
