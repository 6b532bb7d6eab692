//! Skill table record (`skill_eng.bmd`)

use binrw::{BinRead, BinWrite};

use super::error::BmdResult;
use super::record::{BmdRecord, decode_fixed, latin1_cstr};

/// Width of the NUL-padded name field
pub const SKILL_NAME_LEN: usize = 32;

/// Encode a name into the fixed Latin-1 field, truncating to leave a NUL.
fn latin1_field(name: &str) -> [u8; SKILL_NAME_LEN] {
    let mut raw = [0u8; SKILL_NAME_LEN];
    for (slot, ch) in raw.iter_mut().take(SKILL_NAME_LEN - 1).zip(name.chars()) {
        *slot = u8::try_from(u32::from(ch)).unwrap_or(b'?');
    }
    raw
}

/// One skill definition as stored in the binary skill table (68 bytes)
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
pub struct SkillRecord {
    /// Display name
    #[br(map = |raw: [u8; SKILL_NAME_LEN]| latin1_cstr(&raw))]
    #[bw(map = |name: &String| latin1_field(name))]
    pub name: String,
    /// Character level required to use the skill
    pub required_level: u16,
    /// Base damage
    pub damage: u16,
    /// Mana consumed per cast
    pub mana_cost: u16,
    /// Ability gauge consumed per cast
    pub ability_gauge_cost: u16,
    /// Cast range in tiles
    pub distance: u32,
    /// Cooldown in milliseconds
    pub delay: i32,
    /// Energy required
    pub required_energy: i32,
    /// Command (leadership) required
    pub required_leadership: u16,
    /// Mastery type
    pub mastery_type: u8,
    /// Use type (area, target, self, ...)
    pub skill_use_type: u8,
    /// Brand (buff) skill id applied by the skill
    pub brand: u32,
    /// Kill count required
    pub kill_count: u8,
    /// Strength required
    pub required_strength: u16,
    /// Dexterity required
    pub required_dexterity: u16,
    /// Icon index in the skill sprite sheet
    pub magic_icon: u16,
    /// Unused trailing byte
    pub reserved: u8,
}

impl BmdRecord for SkillRecord {
    const RECORD_SIZE: usize = 68;

    fn decode(bytes: &[u8]) -> BmdResult<Self> {
        decode_fixed(bytes)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use binrw::io::Cursor;

    fn sample() -> SkillRecord {
        SkillRecord {
            name: "Twisting Slash".to_string(),
            required_level: 80,
            damage: 25,
            mana_cost: 10,
            ability_gauge_cost: 0,
            distance: 2,
            delay: 0,
            required_energy: 0,
            required_leadership: 0,
            mastery_type: 0,
            skill_use_type: 0,
            brand: 0,
            kill_count: 0,
            required_strength: 0,
            required_dexterity: 0,
            magic_icon: 41,
            reserved: 0,
        }
    }

    #[test]
    fn test_written_size_matches_record_size() {
        let mut cursor = Cursor::new(Vec::new());
        sample().write_le(&mut cursor).unwrap();
        assert_eq!(cursor.into_inner().len(), SkillRecord::RECORD_SIZE);
    }

    #[test]
    fn test_fixed_offsets() {
        let mut bytes = [0u8; 68];
        bytes[..5].copy_from_slice(b"Blast");
        bytes[32..34].copy_from_slice(&150u16.to_le_bytes()); // required_level
        bytes[34..36].copy_from_slice(&90u16.to_le_bytes()); // damage
        bytes[40..44].copy_from_slice(&6u32.to_le_bytes()); // distance
        bytes[44..48].copy_from_slice(&1500i32.to_le_bytes()); // delay
        bytes[54] = 3; // mastery_type
        bytes[60] = 12; // kill_count
        bytes[61..63].copy_from_slice(&200u16.to_le_bytes()); // required_strength
        bytes[65..67].copy_from_slice(&77u16.to_le_bytes()); // magic_icon

        let rec = SkillRecord::decode(&bytes).unwrap();
        assert_eq!(rec.name, "Blast");
        assert_eq!(rec.required_level, 150);
        assert_eq!(rec.damage, 90);
        assert_eq!(rec.distance, 6);
        assert_eq!(rec.delay, 1500);
        assert_eq!(rec.mastery_type, 3);
        assert_eq!(rec.kill_count, 12);
        assert_eq!(rec.required_strength, 200);
        assert_eq!(rec.magic_icon, 77);
    }

    #[test]
    fn test_long_name_truncated_with_nul() {
        let raw = latin1_field(&"x".repeat(40));
        assert_eq!(raw[SKILL_NAME_LEN - 1], 0);
        assert_eq!(latin1_cstr(&raw).len(), SKILL_NAME_LEN - 1);
    }
}
