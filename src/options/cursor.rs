use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Cursor glow geometry.
pub struct CursorOptions {
    /// Half the glow's size; subtracted so its center sits on the pointer.
    pub glow_offset: f64,
    /// Half the dot's size.
    pub dot_offset: f64,
}

impl Default for CursorOptions {
    fn default() -> Self {
        Self {
            glow_offset: 15.0,
            dot_offset: 4.0,
        }
    }
}
