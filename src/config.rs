use crate::logging::LogLevel;

pub const LOG_LEVEL_KEY: &str = "portfolio-log-level";
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub log_level: LogLevel,
    pub reduced_motion: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            reduced_motion: false,
        }
    }
}

impl PageConfig {
    pub fn from_sources(stored_log_level: Option<&str>, reduced_motion: Option<bool>) -> Self {
        Self {
            log_level: parse_log_level(stored_log_level, DEFAULT_LOG_LEVEL),
            reduced_motion: reduced_motion.unwrap_or(false),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_browser() -> Self {
        let stored = browser::local_storage()
            .and_then(|storage| storage.get_item(LOG_LEVEL_KEY).ok().flatten());
        Self::from_sources(stored.as_deref(), browser::prefers_reduced_motion())
    }
}

pub fn parse_log_level(raw: Option<&str>, default: LogLevel) -> LogLevel {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(LogLevel::parse)
        .unwrap_or(default)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use web_sys::{window, Storage};

    pub(super) fn local_storage() -> Option<Storage> {
        window()?.local_storage().ok().flatten()
    }

    pub(super) fn prefers_reduced_motion() -> Option<bool> {
        window()?
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|mq| mq.matches())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_level_uses_default() {
        assert_eq!(parse_log_level(None, LogLevel::Info), LogLevel::Info);
        assert_eq!(parse_log_level(Some("   "), LogLevel::Warn), LogLevel::Warn);
    }

    #[test]
    fn unknown_level_uses_default() {
        assert_eq!(parse_log_level(Some("verbose"), LogLevel::Info), LogLevel::Info);
    }

    #[test]
    fn stored_level_is_case_insensitive() {
        assert_eq!(parse_log_level(Some("Debug"), LogLevel::Info), LogLevel::Debug);
        assert_eq!(parse_log_level(Some("ERROR\n"), LogLevel::Info), LogLevel::Error);
    }

    #[test]
    fn sources_fill_config() {
        assert_eq!(PageConfig::from_sources(None, None), PageConfig::default());
        let config = PageConfig::from_sources(Some("debug"), Some(true));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.reduced_motion);
    }
}
