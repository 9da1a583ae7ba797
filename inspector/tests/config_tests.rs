use mu_protocol::{ClientVersion, Direction, ProtocolConfig};
use packet_inspector::config::{self, InspectorConfig, DEFAULT_CONFIG_PATH};
use serial_test::serial;

const CONFIG_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/config/inspector.toml");

#[test]
fn test_load_inspector_config() {
    let config = InspectorConfig::load_from_file(CONFIG_FILE).expect("Failed to load config");

    assert_eq!(config.protocol.client_version, ClientVersion::Season6);
    assert_eq!(config.protocol.direction, Direction::ServerToClient);
    assert!(config.output.pretty_json);
}

#[test]
fn test_shipped_config_matches_defaults() {
    let config = InspectorConfig::load_from_file(CONFIG_FILE).expect("Failed to load config");

    assert_eq!(config.protocol, ProtocolConfig::default());
    assert_eq!(config, InspectorConfig::default());
}

#[test]
fn test_shipped_config_builds_codec() {
    let config = InspectorConfig::load_from_file(CONFIG_FILE).expect("Failed to load config");
    let codec = config.protocol.codec();

    let packet = codec.decode(&[0xC1, 0x05, 0xF1, 0x01, 0x01]).unwrap();
    assert_eq!(packet.descriptor.name, "LoginResponse");
}

#[test]
fn test_invalid_config_path() {
    let result = InspectorConfig::load_from_file("nonexistent/config.toml");
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_config_path_from_env() {
    std::env::set_var("CONFIG_PATH", CONFIG_FILE);
    assert_eq!(config::config_path(), CONFIG_FILE);

    std::env::remove_var("CONFIG_PATH");
    assert_eq!(config::config_path(), DEFAULT_CONFIG_PATH);
}
