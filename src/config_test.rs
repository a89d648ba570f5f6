use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    assert_eq!(env_parse::<u16>(None, 42), Ok(42));
}

#[test]
fn env_parse_present_valid_trims() {
    assert_eq!(env_parse::<u16>(Some(" 8080 "), 0), Ok(8080));
}

#[test]
fn env_parse_present_invalid_returns_raw() {
    assert_eq!(env_parse::<u16>(Some("eighty"), 0), Err("eighty".to_owned()));
}

// =============================================================================
// SiteConfig
// =============================================================================

#[test]
fn defaults_apply_when_unset() {
    let config = SiteConfig::from_lookup(lookup(&[])).expect("config");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.manifest_path, PathBuf::from("site.yaml"));
    assert_eq!(config.images_dir, PathBuf::from("images"));
}

#[test]
fn overrides_are_read() {
    let config = SiteConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("SITE_MANIFEST", "/etc/folio/site.yaml"),
        ("IMAGES_DIR", "/srv/images"),
    ]))
    .expect("config");
    assert_eq!(config.port, 8080);
    assert_eq!(config.manifest_path, PathBuf::from("/etc/folio/site.yaml"));
    assert_eq!(config.images_dir, PathBuf::from("/srv/images"));
}

#[test]
fn blank_paths_fall_back_to_defaults() {
    let config = SiteConfig::from_lookup(lookup(&[("SITE_MANIFEST", "  "), ("IMAGES_DIR", "")])).expect("config");
    assert_eq!(config.manifest_path, PathBuf::from(DEFAULT_SITE_MANIFEST));
    assert_eq!(config.images_dir, PathBuf::from(DEFAULT_IMAGES_DIR));
}

#[test]
fn invalid_port_is_an_error() {
    assert_eq!(
        SiteConfig::from_lookup(lookup(&[("PORT", "99999")])),
        Err(ConfigError::InvalidPort("99999".to_owned()))
    );
}

#[test]
fn from_env_reads_process_environment() {
    // SAFETY: only this test touches the process environment; the rest use `from_lookup`.
    unsafe { std::env::set_var("IMAGES_DIR", "/tmp/__folio_test_images__") };
    let config = SiteConfig::from_env();
    unsafe { std::env::remove_var("IMAGES_DIR") };
    let config = config.expect("config");
    assert_eq!(config.images_dir, PathBuf::from("/tmp/__folio_test_images__"));
}
