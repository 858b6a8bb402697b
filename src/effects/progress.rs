//! Horizontal progress bars. The script only sets the final width; the
//! stylesheet's transition animates it.

use crate::page::markup::{ATTR_PERCENT, PROGRESS_FILL};
use crate::page::Page;
use crate::util::number::{clamp_percent, parse_finite};

/// CSS width for a bar at `percent`, clamped to `[0, 100]`.
#[must_use]
pub fn fill_width(percent: f64) -> String {
    format!("{}%", clamp_percent(percent))
}

/// Bars with a finite `data-percent`, waiting to be filled.
#[derive(Debug, Clone)]
pub struct ProgressBars<N> {
    bars: Vec<(N, f64)>,
}

impl<N: Clone> ProgressBars<N> {
    /// Collect bars with a finite percentage.
    pub fn mount<P: Page<Node = N>>(page: &P) -> Self {
        let bars = page
            .query_all(PROGRESS_FILL)
            .into_iter()
            .filter_map(|node| {
                let raw = page.attribute(&node, ATTR_PERCENT)?;
                let percent = parse_finite(&raw)?;
                Some((node, percent))
            })
            .collect();
        Self { bars }
    }

    /// Whether there is anything to fill.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Set every bar's width.
    pub fn fill<P: Page<Node = N>>(&self, page: &P) {
        for (node, percent) in &self.bars {
            page.set_style(node, "width", &fill_width(*percent));
        }
    }
}
