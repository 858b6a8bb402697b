//! Page behavior options with TOML and JSON support.
//!
//! Every tunable the controller uses (scroll offsets, animation timings,
//! cursor geometry, CV document location) is consolidated here. A page can
//! override any subset through an inline
//! `<script type="application/toml" id="folio-options">` block, or an
//! embedder can pass JSON to `start_with_options`.

mod animation;
mod cursor;
mod navigation;
mod viewer;

pub use animation::AnimationOptions;
pub use cursor::CursorOptions;
pub use navigation::NavigationOptions;
use serde::{Deserialize, Serialize};
pub use viewer::ViewerOptions;

use crate::error::FolioError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial documents (e.g. only overriding `[navigation]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Options {
    /// Whether the wasm start hook mounts the controller by itself.
    pub autostart: bool,
    /// Smooth-scroll and scrollspy parameters.
    pub navigation: NavigationOptions,
    /// Counter, progress and reveal parameters.
    pub animation: AnimationOptions,
    /// Cursor glow geometry.
    pub cursor: CursorOptions,
    /// CV viewer document.
    pub viewer: ViewerOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            autostart: true,
            navigation: NavigationOptions::default(),
            animation: AnimationOptions::default(),
            cursor: CursorOptions::default(),
            viewer: ViewerOptions::default(),
        }
    }
}

impl Options {
    /// Parse options from a TOML document. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, FolioError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse options from a JSON document. Missing fields use defaults.
    pub fn from_json_str(content: &str) -> Result<Self, FolioError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize to pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String, FolioError> {
        toml::to_string_pretty(self)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))
    }
}
