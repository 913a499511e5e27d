//! Site configuration baked in at build time.
//!
//! A wasm bundle has no process environment, so values come from
//! `option_env!` when the bundle is compiled. Unset or blank values fall back
//! to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::nav::Destination;

pub const DEFAULT_LANDING_HREF: &str = "/";
pub const DEFAULT_DASHBOARD_HREF: &str = "/dashboard";
pub const DEFAULT_HISTORY_HREF: &str = "/history";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub landing_href: String,
    pub dashboard_href: String,
    pub history_href: String,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_raw(None, None, None, None)
    }
}

impl SiteConfig {
    /// Build typed site config from compile-time environment variables.
    ///
    /// Optional:
    /// - `CC_LANDING_HREF`: default `/`
    /// - `CC_DASHBOARD_HREF`: default `/dashboard`
    /// - `CC_HISTORY_HREF`: default `/history`
    /// - `CC_LOG_LEVEL`: `error`..`trace`, default `info`
    pub fn from_build_env() -> Self {
        Self::from_raw(
            option_env!("CC_LANDING_HREF"),
            option_env!("CC_DASHBOARD_HREF"),
            option_env!("CC_HISTORY_HREF"),
            option_env!("CC_LOG_LEVEL"),
        )
    }

    pub fn from_raw(
        landing: Option<&str>,
        dashboard: Option<&str>,
        history: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        Self {
            landing_href: href_or_default(landing, DEFAULT_LANDING_HREF),
            dashboard_href: href_or_default(dashboard, DEFAULT_DASHBOARD_HREF),
            history_href: href_or_default(history, DEFAULT_HISTORY_HREF),
            log_level: parse_log_level(log_level),
        }
    }

    /// Href a full-page transition to `destination` should load.
    pub fn href(&self, destination: Destination) -> &str {
        match destination {
            Destination::Landing => &self.landing_href,
            Destination::Dashboard => &self.dashboard_href,
            Destination::History => &self.history_href,
        }
    }
}

fn href_or_default(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_owned()
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.trim().parse::<log::Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
