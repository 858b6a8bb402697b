//! Smooth scrolling for in-page links and scrollspy highlighting.

pub mod spy;

use crate::options::NavigationOptions;
use crate::page::markup::{CLASS_ACTIVE, NAV_LINK};
use crate::page::Page;

/// A tracked page section.
#[derive(Debug, Clone)]
pub struct Section<N> {
    /// Element id (without `#`).
    pub id: String,
    /// The section element.
    pub node: N,
}

/// Section list, navigation links and scroll offsets.
#[derive(Debug, Clone)]
pub struct Scrollspy<N> {
    sections: Vec<Section<N>>,
    links: Vec<N>,
    header_offset: f64,
    lookahead: f64,
}

impl<N: Clone> Scrollspy<N> {
    /// Resolve the configured section ids once. Ids with no element are
    /// dropped.
    pub fn mount<P: Page<Node = N>>(page: &P, options: &NavigationOptions) -> Self {
        let sections = options
            .sections
            .iter()
            .filter_map(|id| {
                page.element_by_id(id).map(|node| Section {
                    id: id.clone(),
                    node,
                })
            })
            .collect::<Vec<_>>();
        if sections.len() < options.sections.len() {
            log::debug!(
                "scrollspy tracking {} of {} sections",
                sections.len(),
                options.sections.len()
            );
        }

        Self {
            sections,
            links: page.query_all(NAV_LINK),
            header_offset: options.header_offset,
            lookahead: options.lookahead,
        }
    }

    /// Sections found on the page, in scan order.
    pub fn sections(&self) -> &[Section<N>] {
        &self.sections
    }

    /// Recompute the current section from the scroll position and
    /// highlight its link. Returns the current section id.
    pub fn refresh<P: Page<Node = N>>(&self, page: &P) -> Option<&str> {
        let tops = self.sections.iter().map(|s| page.offset_top(&s.node));
        let index = spy::current_section(tops, page.scroll_y(), self.lookahead)?;
        let id = self.sections[index].id.as_str();
        self.set_active(page, id);
        Some(id)
    }

    /// Mark every nav link pointing at `#id` active and clear the rest.
    pub fn set_active<P: Page<Node = N>>(&self, page: &P, id: &str) {
        for link in &self.links {
            let href = page.attribute(link, "href").unwrap_or_default();
            let matches = href.strip_prefix('#') == Some(id);
            page.set_class(link, CLASS_ACTIVE, matches);
        }
    }

    /// Smoothly scroll to the section an in-page link targets.
    ///
    /// Returns `false` (leave the browser default alone) for external links,
    /// the bare `#`, and fragments that match no element.
    pub fn follow_link<P: Page<Node = N>>(&self, page: &P, href: &str) -> bool {
        let Some(id) = spy::anchor_id(href) else {
            return false;
        };
        let Some(target) = page.query(href) else {
            log::debug!("no element for link target {href}");
            return false;
        };

        let top = spy::scroll_target(
            page.viewport_top(&target),
            page.scroll_y(),
            self.header_offset,
        );
        page.scroll_to(top);
        self.set_active(page, id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::fake::FakePage;

    struct Fixture {
        page: FakePage,
        about_link: usize,
        skills_link: usize,
        external_link: usize,
    }

    fn fixture() -> Fixture {
        let page = FakePage::new();
        for (id, top) in [("hero", 0.0), ("about", 500.0), ("skills", 1000.0)] {
            let selector = format!("#{id}");
            let node = page.add(&[selector.as_str()]);
            page.set_offset_top(node, top);
        }
        let about_link = page.with_attr(page.add(&[".nav-link"]), "href", "#about");
        let skills_link = page.with_attr(page.add(&[".nav-link"]), "href", "#skills");
        let external_link = page.with_attr(page.add(&[".nav-link"]), "href", "blog.html");
        Fixture {
            page,
            about_link,
            skills_link,
            external_link,
        }
    }

    #[test]
    fn missing_sections_are_skipped() {
        let f = fixture();
        let spy = Scrollspy::mount(&f.page, &NavigationOptions::default());
        let ids: Vec<_> = spy.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["hero", "about", "skills"]);
    }

    #[test]
    fn refresh_highlights_current_link() {
        let f = fixture();
        let spy = Scrollspy::mount(&f.page, &NavigationOptions::default());

        f.page.set_scroll_y(300.0);
        assert_eq!(spy.refresh(&f.page), Some("hero"));
        assert!(!f.page.has_class(&f.about_link, "active"));

        f.page.set_scroll_y(450.0);
        assert_eq!(spy.refresh(&f.page), Some("about"));
        assert!(f.page.has_class(&f.about_link, "active"));
        assert!(!f.page.has_class(&f.skills_link, "active"));
        assert!(!f.page.has_class(&f.external_link, "active"));

        f.page.set_scroll_y(900.0);
        assert_eq!(spy.refresh(&f.page), Some("skills"));
        assert!(!f.page.has_class(&f.about_link, "active"));
        assert!(f.page.has_class(&f.skills_link, "active"));
    }

    #[test]
    fn follow_link_scrolls_below_header() {
        let f = fixture();
        let spy = Scrollspy::mount(&f.page, &NavigationOptions::default());

        f.page.set_scroll_y(200.0);
        // The fake matches selectors verbatim, so "#skills" finds the section.
        assert!(spy.follow_link(&f.page, "#skills"));
        assert_eq!(f.page.scrolled_to(), vec![920.0]);
        assert!(f.page.has_class(&f.skills_link, "active"));
    }

    #[test]
    fn follow_link_ignores_non_anchors_and_missing_targets() {
        let f = fixture();
        let spy = Scrollspy::mount(&f.page, &NavigationOptions::default());
        assert!(!spy.follow_link(&f.page, "#"));
        assert!(!spy.follow_link(&f.page, "blog.html"));
        assert!(!spy.follow_link(&f.page, "#nowhere"));
        assert!(f.page.scrolled_to().is_empty());
    }
}
