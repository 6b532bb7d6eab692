#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Loading the skill table from encrypted files on disk

use binrw::BinWrite;
use binrw::io::Cursor;
use mu_crypto::{BMD_EXTRA_KEY, Xor3Cipher};
use mu_data::config::SkillTableConfig;
use mu_data::skill::SkillDatabase;
use mu_formats::bmd::{SkillRecord, TableOptions};
use pretty_assertions::assert_eq;
use std::fs;
use std::time::Duration;

fn record(name: &str, mana_cost: u16, delay: i32) -> SkillRecord {
    SkillRecord {
        name: name.to_string(),
        required_level: 0,
        damage: 10,
        mana_cost,
        ability_gauge_cost: 0,
        distance: 3,
        delay,
        required_energy: 0,
        required_leadership: 0,
        mastery_type: 0,
        skill_use_type: 0,
        brand: 0,
        kill_count: 0,
        required_strength: 0,
        required_dexterity: 0,
        magic_icon: 0,
        reserved: 0,
    }
}

fn table_bytes(records: &[SkillRecord], key: u16) -> Vec<u8> {
    let cipher = Xor3Cipher::new(key);
    let mut out = u32::try_from(records.len()).unwrap().to_le_bytes().to_vec();
    for record in records {
        let mut cursor = Cursor::new(Vec::new());
        record.write(&mut cursor).unwrap();
        let plain = cursor.into_inner();
        assert_eq!(plain.len(), 68);
        out.extend(cipher.decrypt(&plain));
    }
    out.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    out
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn loads_encrypted_table_from_data_dir() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("Local")).unwrap();
    let records = [
        record("", 0, 0),
        record("Poison", 42, 0),
        record("Meteorite", 12, 1200),
        record("Lightning", 15, 0),
    ];
    fs::write(
        dir.path().join("Local/skill_eng.bmd"),
        table_bytes(&records, BMD_EXTRA_KEY),
    )
    .unwrap();

    let config = SkillTableConfig::new(dir.path());
    let db = SkillDatabase::try_load(&config).unwrap();

    assert_eq!(db.len(), 4);
    assert_eq!(db.name(1), "Poison");
    assert_eq!(db.mana_cost(1), 42);
    assert_eq!(db.name(2), "Meteorite");
    assert_eq!(db.cooldown(2), Duration::from_millis(1200));
    assert_eq!(db.range(3), 3);
    assert_eq!(db.name(4), "Unknown Skill 4");
}

#[test]
fn custom_file_and_key() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("skills.bmd"),
        table_bytes(&[record("Twister", 7, 0)], 0x0011),
    )
    .unwrap();

    let config = SkillTableConfig::new(dir.path())
        .with_skill_file("skills.bmd")
        .with_table_options(TableOptions::default().with_key(0x0011));
    let db = SkillDatabase::load(&config);
    assert_eq!(db.name(0), "Twister");
}

#[test]
fn missing_table_degrades_to_empty() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let config = SkillTableConfig::new(dir.path());

    assert!(SkillDatabase::try_load(&config).is_err());

    let db = SkillDatabase::load(&config);
    assert!(db.is_empty());
    assert!(db.get(1).is_none());
    assert_eq!(db.name(1), "Unknown Skill 1");
}

#[test]
fn truncated_table_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("Local")).unwrap();
    fs::write(dir.path().join("Local/skill_eng.bmd"), [0x01, 0x00]).unwrap();

    let db = SkillDatabase::load(&SkillTableConfig::new(dir.path()));
    assert!(db.is_empty());
}
