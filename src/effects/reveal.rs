//! One-way reveal of `.section-fade` elements.

use crate::page::markup::{CLASS_VISIBLE, SECTION_FADE};
use crate::page::Page;

/// Elements the host observes for viewport intersection.
#[derive(Debug, Clone)]
pub struct Reveal<N> {
    targets: Vec<N>,
}

impl<N: Clone> Reveal<N> {
    /// Collect reveal targets.
    pub fn mount<P: Page<Node = N>>(page: &P) -> Self {
        Self {
            targets: page.query_all(SECTION_FADE),
        }
    }

    /// Elements to observe.
    pub fn targets(&self) -> &[N] {
        &self.targets
    }

    /// Apply an intersection report. Only ever adds `visible`.
    pub fn observe<P: Page<Node = N>>(page: &P, target: &N, intersecting: bool) {
        if intersecting {
            page.set_class(target, CLASS_VISIBLE, true);
        }
    }
}
