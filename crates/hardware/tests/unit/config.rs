//! Configuration unit tests.

use std::io::Write;

use pretty_assertions::assert_eq;
use rvamo_core::common::Xlen;
use rvamo_core::config::{Config, ConfigError, IsaConfig};
use rvamo_core::isa::rva::Width;

#[test]
fn default_is_rv64_with_a() {
    let config = Config::default();
    assert_eq!(config.isa.xlen, Xlen::Rv64);
    assert!(config.isa.lrsc_enabled());
    assert!(config.isa.amo_enabled());
    assert!(!config.general.trace_instructions);
    assert_eq!(config.memory.ram_base, 0x8000_0000);
    assert_eq!(config.memory.ram_size, 64 * 1024);
}

#[test]
fn empty_json_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn sub_extensions_enable_halves() {
    let lrsc = Config::from_json(r#"{ "isa": { "a": false, "zalrsc": true } }"#).unwrap();
    assert!(lrsc.isa.lrsc_enabled());
    assert!(!lrsc.isa.amo_enabled());

    let amo = Config::from_json(r#"{ "isa": { "a": false, "zaamo": true } }"#).unwrap();
    assert!(!amo.isa.lrsc_enabled());
    assert!(amo.isa.amo_enabled());

    let none = Config::from_json(r#"{ "isa": { "a": false } }"#).unwrap();
    assert!(!none.isa.lrsc_enabled());
    assert!(!none.isa.amo_enabled());
}

#[test]
fn rejects_unknown_xlen() {
    let err = Config::from_json(r#"{ "isa": { "xlen": 128 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)), "{err}");
}

#[test]
fn rejects_malformed_json() {
    assert!(matches!(
        Config::from_json("{ not json"),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn rejects_empty_ram() {
    let err = Config::from_json(r#"{ "memory": { "ram_size": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
}

#[test]
fn rejects_wrapping_ram_window() {
    let json = format!(r#"{{ "memory": {{ "ram_base": {}, "ram_size": 4096 }} }}"#, u64::MAX - 10);
    assert!(matches!(
        Config::from_json(&json),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn width_guard_follows_xlen() {
    let rv32 = IsaConfig {
        xlen: Xlen::Rv32,
        ..IsaConfig::default()
    };
    assert!(rv32.is_valid_width(Width::Word));
    assert!(!rv32.is_valid_width(Width::Double));
    assert!(IsaConfig::default().is_valid_width(Width::Double));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "general": {{ "trace_instructions": true }}, "isa": {{ "xlen": 32 }} }}"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.isa.xlen, Xlen::Rv32);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "{err}");
    assert!(err.to_string().contains("absent.json"));
}
