//! Mobile menu open/close.
//!
//! Open state is the `active` class on the menu panel. Opening also marks
//! the trigger button and locks page scroll through the body's `overflow`.

use crate::page::markup::{CLASS_ACTIVE, MENU_BUTTON_ID, MOBILE_MENU_ID};
use crate::page::Page;

/// The mobile menu panel and its trigger button.
#[derive(Debug, Clone)]
pub struct MobileMenu<N> {
    panel: N,
    button: Option<N>,
}

impl<N: Clone> MobileMenu<N> {
    /// Locate the menu. `None` when the page has no menu panel, which makes
    /// every menu operation a no-op.
    pub fn mount<P: Page<Node = N>>(page: &P) -> Option<Self> {
        let panel = page.element_by_id(MOBILE_MENU_ID)?;
        Some(Self {
            panel,
            button: page.element_by_id(MENU_BUTTON_ID),
        })
    }

    /// Whether the panel is showing.
    pub fn is_open<P: Page<Node = N>>(&self, page: &P) -> bool {
        page.has_class(&self.panel, CLASS_ACTIVE)
    }

    /// Show the panel and lock background scrolling.
    pub fn open<P: Page<Node = N>>(&self, page: &P) {
        self.set_open(page, true);
    }

    /// Hide the panel and restore background scrolling.
    pub fn close<P: Page<Node = N>>(&self, page: &P) {
        self.set_open(page, false);
    }

    fn set_open<P: Page<Node = N>>(&self, page: &P, open: bool) {
        page.set_class(&self.panel, CLASS_ACTIVE, open);
        if let Some(button) = &self.button {
            page.set_class(button, CLASS_ACTIVE, open);
        }
        if let Some(body) = page.body() {
            page.set_style(&body, "overflow", if open { "hidden" } else { "" });
        }
    }
}
