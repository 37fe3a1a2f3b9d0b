use plumline_license::{LicenseConfig, API_URL_ENV, LICENSE_KEY_ENV};
use serial_test::serial;
use std::path::PathBuf;
use std::time::Duration;

fn clear_env() {
    unsafe {
        std::env::remove_var(LICENSE_KEY_ENV);
        std::env::remove_var(API_URL_ENV);
    }
}

#[test]
#[serial]
fn defaults() {
    clear_env();
    let config = LicenseConfig::from_env();

    assert!(config.license_key.is_none());
    assert_eq!(config.api_base_url, "https://license.plumline.io");
    assert_eq!(config.cache_path, PathBuf::from("plumline-license.json"));
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
}

#[test]
#[serial]
fn env_key_and_url_override_defaults() {
    clear_env();
    unsafe {
        std::env::set_var(LICENSE_KEY_ENV, "  pl_live_1234abcd5678efgh  ");
        std::env::set_var(API_URL_ENV, "https://license.example.com/");
    }

    let config = LicenseConfig::from_env();
    assert_eq!(
        config.license_key.as_deref(),
        Some("pl_live_1234abcd5678efgh")
    );
    // Trailing slash is trimmed so endpoint paths join cleanly.
    assert_eq!(config.api_base_url, "https://license.example.com");

    clear_env();
}

#[test]
#[serial]
fn blank_key_counts_as_unset() {
    clear_env();
    unsafe {
        std::env::set_var(LICENSE_KEY_ENV, "   ");
    }

    let config = LicenseConfig::from_env();
    assert!(config.license_key.is_none());

    clear_env();
}

#[test]
fn masked_key_blanks_the_middle() {
    let config = LicenseConfig {
        license_key: Some("pl_live_1234abcd5678efgh".to_string()),
        ..Default::default()
    };
    assert_eq!(config.masked_key(), "pl_l****efgh");
}

#[test]
fn masked_key_hides_short_keys_entirely() {
    let config = LicenseConfig {
        license_key: Some("short".to_string()),
        ..Default::default()
    };
    assert_eq!(config.masked_key(), "****");
}

#[test]
fn masked_key_reports_unset() {
    let config = LicenseConfig::default();
    assert_eq!(config.masked_key(), "<unset>");
}
