use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Smooth-scroll and scrollspy parameters.
pub struct NavigationOptions {
    /// Height of the fixed header subtracted from smooth-scroll targets, in
    /// CSS pixels.
    pub header_offset: f64,
    /// Distance below the scroll position at which a section already counts
    /// as current, in CSS pixels.
    pub lookahead: f64,
    /// Section element ids tracked by the scrollspy, in scan order.
    pub sections: Vec<String>,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            lookahead: 120.0,
            sections: [
                "hero",
                "about",
                "skills",
                "projects",
                "testimonials",
                "contact",
                "stats",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}
