use std::cmp::Ordering;

use serde_json::{Map, Number, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
                LogLevel::Error => 3,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Builds the `{ts, level, event, ...fields}` line. Non-object `fields` are
/// dropped; reserved keys in `fields` cannot overwrite the header.
pub fn event_payload(ts_millis: u64, level: LogLevel, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts_millis)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.entry(key).or_insert(value);
        }
    }

    Value::Object(payload)
}

pub fn log_event(min_level: LogLevel, level: LogLevel, event: &str, fields: Value) {
    if level < min_level {
        return;
    }

    let payload = event_payload(now_unix_millis(), level, event, fields);
    sink::write(level, &payload.to_string());
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
mod sink {
    use super::LogLevel;
    use wasm_bindgen::JsValue;
    use web_sys::console;

    pub(super) fn write(level: LogLevel, line: &str) {
        let line = JsValue::from_str(line);
        match level {
            LogLevel::Debug => console::debug_1(&line),
            LogLevel::Info => console::info_1(&line),
            LogLevel::Warn => console::warn_1(&line),
            LogLevel::Error => console::error_1(&line),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    use super::LogLevel;

    pub(super) fn write(_level: LogLevel, line: &str) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn parse_accepts_mixed_case_and_aliases() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn payload_carries_header_and_fields() {
        let payload = event_payload(
            1_700_000_000_000,
            LogLevel::Info,
            "page_mounted",
            json!({ "projects": 5, "certifications": 2 }),
        );

        assert_eq!(payload["ts"], 1_700_000_000_000u64);
        assert_eq!(payload["level"], "info");
        assert_eq!(payload["event"], "page_mounted");
        assert_eq!(payload["projects"], 5);
        assert_eq!(payload["certifications"], 2);
    }

    #[test]
    fn fields_cannot_shadow_header() {
        let payload = event_payload(1, LogLevel::Debug, "menu_toggled", json!({ "event": "spoofed" }));
        assert_eq!(payload["event"], "menu_toggled");
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let payload = event_payload(1, LogLevel::Warn, "noop", json!([1, 2, 3]));
        assert_eq!(payload.as_object().map(|object| object.len()), Some(3));
    }
}
