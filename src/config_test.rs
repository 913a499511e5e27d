use super::*;

#[test]
fn default_config_uses_default_hrefs() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.landing_href, DEFAULT_LANDING_HREF);
    assert_eq!(cfg.dashboard_href, DEFAULT_DASHBOARD_HREF);
    assert_eq!(cfg.history_href, DEFAULT_HISTORY_HREF);
    assert_eq!(cfg.log_level, DEFAULT_LOG_LEVEL);
}

#[test]
fn from_raw_overrides_and_trims_hrefs() {
    let cfg = SiteConfig::from_raw(
        Some(" /app/index.html "),
        Some("/app/dashboard.html"),
        Some("/app/history.html"),
        None,
    );
    assert_eq!(cfg.landing_href, "/app/index.html");
    assert_eq!(cfg.dashboard_href, "/app/dashboard.html");
    assert_eq!(cfg.history_href, "/app/history.html");
}

#[test]
fn from_raw_blank_hrefs_fall_back_to_defaults() {
    let cfg = SiteConfig::from_raw(Some(""), Some("   "), None, None);
    assert_eq!(cfg.landing_href, DEFAULT_LANDING_HREF);
    assert_eq!(cfg.dashboard_href, DEFAULT_DASHBOARD_HREF);
    assert_eq!(cfg.history_href, DEFAULT_HISTORY_HREF);
}

#[test]
fn log_level_parses_case_insensitively() {
    let cfg = SiteConfig::from_raw(None, None, None, Some("DEBUG"));
    assert_eq!(cfg.log_level, log::Level::Debug);
    let cfg = SiteConfig::from_raw(None, None, None, Some(" warn "));
    assert_eq!(cfg.log_level, log::Level::Warn);
}

#[test]
fn invalid_log_level_falls_back_to_default() {
    let cfg = SiteConfig::from_raw(None, None, None, Some("chatty"));
    assert_eq!(cfg.log_level, DEFAULT_LOG_LEVEL);
}

#[test]
fn href_maps_each_destination() {
    let cfg = SiteConfig::from_raw(Some("/l"), Some("/d"), Some("/h"), None);
    assert_eq!(cfg.href(Destination::Landing), "/l");
    assert_eq!(cfg.href(Destination::Dashboard), "/d");
    assert_eq!(cfg.href(Destination::History), "/h");
}
