//! Date formatting through the browser locale.
//!
//! Server timestamps arrive as ISO 8601 strings; the client never does
//! date arithmetic, it only renders.

use wasm_bindgen::JsValue;

/// Wrapper over `js_sys::Date`.
#[derive(Debug, Clone)]
pub struct Date(js_sys::Date);

impl Date {
    pub fn now() -> Self {
        Self(js_sys::Date::new_0())
    }

    /// Parse an ISO 8601 / RFC 3339 string. None if unparseable.
    pub fn parse(s: &str) -> Option<Self> {
        let ms = js_sys::Date::parse(s);
        if ms.is_nan() {
            None
        } else {
            Some(Self(js_sys::Date::new(&ms.into())))
        }
    }

    /// Localized date, e.g. "3/14/2025".
    pub fn to_date_string(&self) -> String {
        self.0
            .to_locale_date_string("en-KE", &JsValue::UNDEFINED)
            .into()
    }

    /// Localized time, e.g. "9:26:53 AM".
    pub fn to_time_string(&self) -> String {
        self.0
            .to_locale_time_string("en-KE")
            .into()
    }
}

/// Render a server timestamp as a localized date, falling back to the raw
/// string when it does not parse.
pub fn format_server_date(raw: &str) -> String {
    Date::parse(raw)
        .map(|d| d.to_date_string())
        .unwrap_or_else(|| raw.to_string())
}
