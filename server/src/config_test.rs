use super::*;

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_values(Some("  ".into()), Some(String::new())).unwrap();
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn parses_port_and_bind_addr() {
    let config = ServerConfig::from_values(Some(" 8080 ".into()), Some("127.0.0.1".into())).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn parses_ipv6_bind_addr() {
    let config = ServerConfig::from_values(None, Some("::1".into())).unwrap();
    assert_eq!(config.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn rejects_non_numeric_port() {
    let err = ServerConfig::from_values(Some("http".into()), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));
    assert!(err.to_string().starts_with("invalid PORT \"http\""));
}

#[test]
fn rejects_out_of_range_port() {
    let err = ServerConfig::from_values(Some("70000".into()), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn rejects_bad_bind_addr() {
    let err = ServerConfig::from_values(None, Some("localhost".into())).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr { ref value, .. } if value == "localhost"));
}

// =============================================================================
// read_var — unique names avoid races with parallel tests.
// =============================================================================

#[test]
fn read_var_unset_is_none() {
    assert_eq!(read_var("__TEST_RV_UNSET_4417__").unwrap(), None);
}

#[test]
fn read_var_returns_value() {
    let key = "__TEST_RV_SET_4418__";
    unsafe { std::env::set_var(key, "8081") };
    assert_eq!(read_var(key).unwrap(), Some("8081".to_owned()));
    unsafe { std::env::remove_var(key) };
}

#[cfg(unix)]
#[test]
fn read_var_rejects_non_unicode() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let key = "__TEST_RV_BAD_4419__";
    unsafe { std::env::set_var(key, OsStr::from_bytes(&[0x66, 0xff])) };
    let err = read_var(key).unwrap_err();
    assert!(matches!(err, ConfigError::NotUnicode { name } if name == key));
    unsafe { std::env::remove_var(key) };
}
