//! Configuration Tests.

use pretty_assertions::assert_eq;

use runcpu_core::config::{Config, DisasmConfig, MachineConfig};

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.machine.memory_size, 64 * 1024);
    assert_eq!(config.machine.initial_sp, None);
    assert!(!config.machine.verbose_io);
    assert!(!config.disasm.addresses);
}

#[test]
fn empty_json_yields_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let config: Config = serde_json::from_str(r#"{ "machine": { "initial_sp": 512 } }"#).unwrap();
    assert_eq!(
        config.machine,
        MachineConfig {
            initial_sp: Some(512),
            ..MachineConfig::default()
        }
    );
    assert_eq!(config.disasm, DisasmConfig::default());
}

#[test]
fn stack_top_defaults_to_memory_size() {
    let config = MachineConfig {
        memory_size: 1024,
        ..MachineConfig::default()
    };
    assert_eq!(config.stack_top(), 1024);

    let config = MachineConfig {
        initial_sp: Some(0x80),
        ..config
    };
    assert_eq!(config.stack_top(), 0x80);
}

#[test]
fn wrong_field_type_is_rejected() {
    let result = serde_json::from_str::<Config>(r#"{ "disasm": { "addresses": "yes" } }"#);
    assert!(result.is_err());
}
