//! Crate-level error types.

use std::fmt;

/// Errors produced by the folio crate.
///
/// Missing markup and invalid attributes are not errors: those features are
/// skipped. These variants cover host-level failures only.
#[derive(Debug)]
pub enum FolioError {
    /// The global `window` or `document` is unavailable.
    NoDocument,
    /// A JavaScript call (listener registration, observer construction)
    /// threw.
    Js(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// JSON options parsing failure.
    OptionsJson(serde_json::Error),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => write!(f, "no global window/document"),
            Self::Js(msg) => write!(f, "javascript error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::OptionsJson(e) => write!(f, "options json error: {e}"),
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OptionsJson(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        Self::OptionsJson(e)
    }
}

impl From<toml::de::Error> for FolioError {
    fn from(e: toml::de::Error) -> Self {
        Self::OptionsParse(e.to_string())
    }
}

#[cfg(feature = "web")]
impl From<wasm_bindgen::JsValue> for FolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(msg)
    }
}

#[cfg(feature = "web")]
impl From<FolioError> for wasm_bindgen::JsValue {
    fn from(e: FolioError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}
