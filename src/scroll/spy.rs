//! Pure scrollspy math.

/// Index of the current section.
///
/// `tops` are section offsets in scan order. The first section is current
/// until a later one has `top <= scroll_y + lookahead`; the last qualifying
/// section in scan order wins, even if an earlier-listed section sits lower
/// on the page. `None` only when there are no sections.
#[must_use]
pub fn current_section<I>(tops: I, scroll_y: f64, lookahead: f64) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let position = scroll_y + lookahead;
    let mut current = None;
    for (index, top) in tops.into_iter().enumerate() {
        if index == 0 || top <= position {
            current = Some(index);
        }
    }
    current
}

/// Fragment id targeted by an in-page link, without the `#`.
///
/// `None` for external links and for the bare `#`.
#[must_use]
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Window scroll position that puts an element whose bounding box starts
/// at `viewport_top` just below a fixed header of `header_offset`.
#[must_use]
pub fn scroll_target(viewport_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    viewport_top + scroll_y - header_offset
}
