//! Master skill tree table (`masterskilltreedata.bmd`)

use std::collections::HashMap;

use binrw::{BinRead, BinWrite};

use super::error::BmdResult;
use super::record::{BmdRecord, decode_fixed};

/// One node of a class's master skill tree (24 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
pub struct MasterSkillTreeData {
    /// Node id
    pub id: u16,
    /// Character class the node belongs to
    pub class: u16,
    /// Tree column (0..=2)
    pub tree_type: u8,
    /// Master points required to learn the next level
    pub req_point: u8,
    /// Maximum node level
    pub max_point: u8,
    /// Unused padding byte kept by the client
    pub unk1: u8,
    /// First prerequisite skill
    pub parent_skill_1: u32,
    /// Second prerequisite skill
    pub parent_skill_2: u32,
    /// Skill granted by the node
    pub skill_num: u32,
    /// Formula id for the node's bonus
    pub formula: u32,
}

impl BmdRecord for MasterSkillTreeData {
    const RECORD_SIZE: usize = 24;

    fn decode(bytes: &[u8]) -> BmdResult<Self> {
        decode_fixed(bytes)
    }
}

impl MasterSkillTreeData {
    /// Whether the node has any prerequisite skill
    pub const fn has_parent(&self) -> bool {
        self.parent_skill_1 != 0 || self.parent_skill_2 != 0
    }
}

/// Group tree nodes by class, keeping file order within each class.
pub fn group_by_class<I>(records: I) -> HashMap<u16, Vec<MasterSkillTreeData>>
where
    I: IntoIterator<Item = MasterSkillTreeData>,
{
    let mut groups: HashMap<u16, Vec<MasterSkillTreeData>> = HashMap::new();
    for record in records {
        groups.entry(record.class).or_default().push(record);
    }
    groups
}
