//! Configuration persistence tests.
//!
//! Kept in their own test binary: they mutate `CAMPUSWATCH_*` environment
//! variables, which must not race the channel tests.

use campuswatch::Config;

#[test]
fn test_config_roundtrips_through_the_config_dir() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    std::env::set_var("CAMPUSWATCH_CONFIG_DIR", dir.path());
    std::env::remove_var("CAMPUSWATCH_SERVER_URL");
    std::env::remove_var("CAMPUSWATCH_TOKEN");

    // Nothing on disk yet: load falls back to defaults
    let mut config = Config::load().expect("load default");
    assert_eq!(config.server_url, "http://localhost:8000");

    config.server_url = "https://security.campus.edu".to_string();
    config.token = "ephemeral".to_string();
    config.save().expect("save");

    let loaded = Config::load().expect("load saved");
    assert_eq!(loaded.server_url, "https://security.campus.edu");
    // Token never reaches disk
    assert!(loaded.token.is_empty());

    let raw = std::fs::read_to_string(dir.path().join("config.json")).expect("read config file");
    assert!(!raw.contains("ephemeral"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(dir.path().join("config.json"))
            .expect("stat config file")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    // Env vars override whatever the file says
    std::env::set_var("CAMPUSWATCH_SERVER_URL", "https://staging.campus.edu");
    std::env::set_var("CAMPUSWATCH_TOKEN", "from-env");
    let overridden = Config::load().expect("load with overrides");
    assert_eq!(overridden.server_url, "https://staging.campus.edu");
    assert_eq!(overridden.get_api_key(), "from-env");
}
