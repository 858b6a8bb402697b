//! CV/PDF viewer modal.
//!
//! Closed is the initial state and is held as the `hidden` class on the
//! modal container. Closing always points the frame back at a blank page so
//! the browser stops rendering the document.

use crate::options::ViewerOptions;
use crate::page::markup::{
    CLASS_HIDDEN, CLASS_MODAL_OPEN, VIEWER_CLOSE_ID, VIEWER_FALLBACK_ID, VIEWER_FRAME_ID,
    VIEWER_MODAL_ID, VIEWER_PANEL,
};
use crate::page::Page;

/// The modal and its parts.
#[derive(Debug, Clone)]
pub struct CvViewer<N> {
    modal: N,
    panel: Option<N>,
    close_button: Option<N>,
    frame: Option<N>,
    fallback: Option<N>,
    source: String,
    blank_source: String,
}

impl<N: Clone> CvViewer<N> {
    /// Locate the modal. `None` when the page has no modal container.
    pub fn mount<P: Page<Node = N>>(page: &P, options: &ViewerOptions) -> Option<Self> {
        let modal = page.element_by_id(VIEWER_MODAL_ID)?;
        Some(Self {
            panel: page.query_within(&modal, VIEWER_PANEL),
            close_button: page.element_by_id(VIEWER_CLOSE_ID),
            frame: page.element_by_id(VIEWER_FRAME_ID),
            fallback: page.element_by_id(VIEWER_FALLBACK_ID),
            modal,
            source: options.source(),
            blank_source: options.blank_source.clone(),
        })
    }

    /// Whether the modal is showing.
    pub fn is_open<P: Page<Node = N>>(&self, page: &P) -> bool {
        !page.has_class(&self.modal, CLASS_HIDDEN)
    }

    /// Load the document, show the modal, lock page scroll and focus the
    /// close control. An already open modal only gets focus back; the
    /// document is not reloaded.
    pub fn open<P: Page<Node = N>>(&self, page: &P) {
        if !self.is_open(page) {
            if let Some(frame) = &self.frame {
                page.set_source(frame, &self.source);
            }
            page.set_class(&self.modal, CLASS_HIDDEN, false);
            if let Some(body) = page.body() {
                page.set_class(&body, CLASS_MODAL_OPEN, true);
            }
        }
        if let Some(close) = &self.close_button {
            page.focus(close);
        }
    }

    /// Hide the modal, unlock page scroll and blank the frame.
    pub fn close<P: Page<Node = N>>(&self, page: &P) {
        page.set_class(&self.modal, CLASS_HIDDEN, true);
        if let Some(body) = page.body() {
            page.set_class(&body, CLASS_MODAL_OPEN, false);
        }
        if let Some(frame) = &self.frame {
            page.set_source(frame, &self.blank_source);
        }
    }

    /// A click landed somewhere in the modal container. Clicks outside the
    /// content panel close it. Without a panel the whole container counts
    /// as backdrop.
    pub fn backdrop_click<P: Page<Node = N>>(&self, page: &P, target: &N) {
        let inside = self
            .panel
            .as_ref()
            .is_some_and(|panel| page.contains(panel, target));
        if !inside {
            self.close(page);
        }
    }

    /// The frame could not render the document: show the fallback notice.
    pub fn render_failed<P: Page<Node = N>>(&self, page: &P) {
        match &self.fallback {
            Some(fallback) => page.set_class(fallback, CLASS_HIDDEN, false),
            None => log::debug!("viewer failed to render and no fallback notice exists"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::fake::{FakePage, BODY};

    struct Modal {
        page: FakePage,
        modal: usize,
        panel: usize,
        title: usize,
        close: usize,
        frame: usize,
        fallback: usize,
    }

    fn modal() -> Modal {
        let page = FakePage::new();
        let modal = page.with_class(page.add(&["#cvModal"]), "hidden");
        let panel = page.add_child(modal, &[".glass-effect"]);
        let title = page.add_child(panel, &["h2"]);
        let close = page.add_child(panel, &["#cvClose"]);
        let frame = page.add_child(panel, &["#cvIframe"]);
        let fallback = page.with_class(page.add_child(panel, &["#cvFallback"]), "hidden");
        Modal {
            page,
            modal,
            panel,
            title,
            close,
            frame,
            fallback,
        }
    }

    #[test]
    fn open_loads_document_and_focuses_close() {
        let m = modal();
        let viewer = CvViewer::mount(&m.page, &ViewerOptions::default()).unwrap();
        assert!(!viewer.is_open(&m.page));

        viewer.open(&m.page);
        assert!(viewer.is_open(&m.page));
        assert!(!m.page.has_class(&m.modal, "hidden"));
        assert!(m.page.has_class(&BODY, "modal-open"));
        assert_eq!(m.page.focused(), Some(m.close));
        assert_eq!(
            m.page.source(m.frame).as_deref(),
            Some("assets/cv/DoCongMinh.pdf#toolbar=0&navpanes=0&scrollbar=1")
        );
    }

    #[test]
    fn open_twice_does_not_reload() {
        let m = modal();
        let viewer = CvViewer::mount(&m.page, &ViewerOptions::default()).unwrap();
        viewer.open(&m.page);
        viewer.open(&m.page);
        assert_eq!(m.page.source_writes(), 1);
        assert!(viewer.is_open(&m.page));
        assert_eq!(m.page.classes(BODY), vec!["modal-open".to_owned()]);
    }

    #[test]
    fn close_releases_document() {
        let m = modal();
        let viewer = CvViewer::mount(&m.page, &ViewerOptions::default()).unwrap();
        viewer.open(&m.page);
        viewer.close(&m.page);
        assert!(!viewer.is_open(&m.page));
        assert!(!m.page.has_class(&BODY, "modal-open"));
        assert_eq!(m.page.source(m.frame).as_deref(), Some("about:blank"));

        // Closing again is harmless.
        viewer.close(&m.page);
        assert!(!viewer.is_open(&m.page));
        assert_eq!(m.page.source(m.frame).as_deref(), Some("about:blank"));
    }

    #[test]
    fn backdrop_clicks_close_only_outside_panel() {
        let m = modal();
        let viewer = CvViewer::mount(&m.page, &ViewerOptions::default()).unwrap();
        viewer.open(&m.page);

        viewer.backdrop_click(&m.page, &m.title);
        viewer.backdrop_click(&m.page, &m.panel);
        assert!(viewer.is_open(&m.page));

        viewer.backdrop_click(&m.page, &m.modal);
        assert!(!viewer.is_open(&m.page));
    }

    #[test]
    fn render_failure_reveals_fallback() {
        let m = modal();
        let viewer = CvViewer::mount(&m.page, &ViewerOptions::default()).unwrap();
        viewer.render_failed(&m.page);
        assert!(!m.page.has_class(&m.fallback, "hidden"));
    }

    #[test]
    fn bare_modal_still_opens_and_closes() {
        let page = FakePage::new();
        let modal = page.with_class(page.add(&["#cvModal"]), "hidden");
        let viewer = CvViewer::mount(&page, &ViewerOptions::default()).unwrap();
        viewer.open(&page);
        assert!(!page.has_class(&modal, "hidden"));
        viewer.backdrop_click(&page, &modal);
        assert!(page.has_class(&modal, "hidden"));
        viewer.render_failed(&page);
        assert_eq!(page.source_writes(), 0);
    }

    #[test]
    fn no_modal_no_viewer() {
        let page = FakePage::new();
        let _ = page.add(&["#viewCvBtn"]);
        assert!(CvViewer::mount(&page, &ViewerOptions::default()).is_none());
    }
}
