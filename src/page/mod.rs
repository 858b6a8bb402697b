//! The page environment every feature talks to.
//!
//! [`Page`] exposes only the query and mutate operations the controller
//! needs. The browser host implements it over web-sys; tests use an
//! in-memory fake.

pub mod markup;

#[cfg(test)]
pub(crate) mod fake;

/// Query/mutate access to the hosting document.
///
/// Every operation is infallible from the controller's point of view: a
/// host that cannot perform a mutation logs and carries on, so one broken
/// element never stops the other features.
pub trait Page {
    /// Handle to one element of the document.
    type Node: Clone;

    /// Element with the given `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// First element matching a CSS selector. Invalid selectors match
    /// nothing.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// All elements matching a CSS selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// First descendant of `root` matching a CSS selector.
    fn query_within(&self, root: &Self::Node, selector: &str) -> Option<Self::Node>;

    /// Raw attribute value.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Whether the element's class list contains `class`.
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Add (`on == true`) or remove `class`.
    fn set_class(&self, node: &Self::Node, class: &str, on: bool);

    /// Set an inline style property (kebab-case). An empty value clears it.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Replace the element's text content.
    fn set_text(&self, node: &Self::Node, text: &str);

    /// Point an embedded frame at `url`.
    fn set_source(&self, node: &Self::Node, url: &str);

    /// Move keyboard focus to the element without scrolling.
    fn focus(&self, node: &Self::Node);

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    /// Layout offset of the element from its offset parent's top.
    fn offset_top(&self, node: &Self::Node) -> f64;

    /// Top of the element's bounding box relative to the viewport.
    fn viewport_top(&self, node: &Self::Node) -> f64;

    /// Current vertical scroll position of the window.
    fn scroll_y(&self) -> f64;

    /// Smoothly scroll the window so `top` is at the viewport's top edge.
    fn scroll_to(&self, top: f64);

    /// The document body.
    fn body(&self) -> Option<Self::Node>;

    /// Monotonic clock in milliseconds.
    fn now(&self) -> f64;

    /// Render an integer count with locale thousands separators.
    fn format_count(&self, value: f64) -> String;
}
