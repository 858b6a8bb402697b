//! Decorative glow and dot that follow the pointer.

use crate::options::CursorOptions;
use crate::page::markup::{CLASS_HOVERING, CURSOR_DOT, CURSOR_GLOW};
use crate::page::Page;

/// CSS transform placing an element's top-left corner so that its center,
/// `offset` pixels in, lands on `(x, y)`.
#[must_use]
pub fn centered_translate(x: f64, y: f64, offset: f64) -> String {
    format!("translate({}px, {}px)", x - offset, y - offset)
}

/// The glow/dot pair. Present only when the page has both.
#[derive(Debug, Clone)]
pub struct CursorGlow<N> {
    glow: N,
    dot: N,
    glow_offset: f64,
    dot_offset: f64,
}

impl<N: Clone> CursorGlow<N> {
    /// Locate both decorations.
    pub fn mount<P: Page<Node = N>>(page: &P, options: &CursorOptions) -> Option<Self> {
        Some(Self {
            glow: page.query(CURSOR_GLOW)?,
            dot: page.query(CURSOR_DOT)?,
            glow_offset: options.glow_offset,
            dot_offset: options.dot_offset,
        })
    }

    /// Move both decorations to the pointer.
    pub fn track<P: Page<Node = N>>(&self, page: &P, x: f64, y: f64) {
        page.set_style(
            &self.glow,
            "transform",
            &centered_translate(x, y, self.glow_offset),
        );
        page.set_style(
            &self.dot,
            "transform",
            &centered_translate(x, y, self.dot_offset),
        );
    }

    /// Emphasize the glow while an interactive element is hovered.
    pub fn hover<P: Page<Node = N>>(&self, page: &P, entered: bool) {
        page.set_class(&self.glow, CLASS_HOVERING, entered);
    }
}
