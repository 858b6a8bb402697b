//! SVG radial progress: the visible arc is the part of the circle's stroke
//! not hidden by its dash offset.

use std::f64::consts::PI;

use crate::options::AnimationOptions;
use crate::page::markup::{ATTR_PERCENT, ATTR_RADIUS, RADIAL_CIRCLE};
use crate::page::Page;
use crate::util::number::{clamp_unit, parse_finite};

/// Stroke geometry of one circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGeometry {
    /// Full stroke length, `2πr`.
    pub circumference: f64,
}

impl RadialGeometry {
    /// Geometry for `radius`, falling back to `default_radius` when the
    /// radius is missing, non-finite or not positive.
    #[must_use]
    pub fn new(radius: Option<f64>, default_radius: f64) -> Self {
        let r = radius
            .filter(|r| r.is_finite() && *r > 0.0)
            .unwrap_or(default_radius);
        Self {
            circumference: 2.0 * PI * r,
        }
    }

    /// Dash offset showing `percent` of the circle, clamped to `[0, 100]`.
    #[must_use]
    pub fn offset_for(&self, percent: f64) -> f64 {
        self.circumference * (1.0 - clamp_unit(percent / 100.0))
    }
}

#[derive(Debug, Clone)]
struct Radial<N> {
    node: N,
    geometry: RadialGeometry,
    percent: f64,
}

/// Circles with a finite `data-percent`.
#[derive(Debug, Clone)]
pub struct Radials<N> {
    items: Vec<Radial<N>>,
    transition: String,
}

impl<N: Clone> Radials<N> {
    /// Collect circles and hide their strokes completely.
    pub fn mount<P: Page<Node = N>>(page: &P, options: &AnimationOptions) -> Self {
        let items: Vec<_> = page
            .query_all(RADIAL_CIRCLE)
            .into_iter()
            .filter_map(|node| {
                let raw = page.attribute(&node, ATTR_PERCENT)?;
                let Some(percent) = parse_finite(&raw) else {
                    log::debug!("skipping radial with percent {raw:?}");
                    return None;
                };
                let radius = page
                    .attribute(&node, ATTR_RADIUS)
                    .and_then(|r| parse_finite(&r));
                Some(Radial {
                    node,
                    geometry: RadialGeometry::new(radius, options.radial_default_radius),
                    percent,
                })
            })
            .collect();

        for radial in &items {
            let full = radial.geometry.circumference.to_string();
            page.set_style(&radial.node, "stroke-dasharray", &full);
            page.set_style(&radial.node, "stroke-dashoffset", &full);
        }

        Self {
            items,
            transition: options.radial_transition.clone(),
        }
    }

    /// Whether there is anything to sweep.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Enable the transition and move each offset to its final value.
    pub fn sweep<P: Page<Node = N>>(&self, page: &P) {
        for radial in &self.items {
            page.set_style(&radial.node, "transition", &self.transition);
            let offset = radial.geometry.offset_for(radial.percent);
            page.set_style(&radial.node, "stroke-dashoffset", &offset.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::fake::FakePage;

    #[test]
    fn radius_defaults() {
        let expected = 2.0 * PI * 45.0;
        assert_eq!(RadialGeometry::new(None, 45.0).circumference, expected);
        assert_eq!(RadialGeometry::new(Some(0.0), 45.0).circumference, expected);
        assert_eq!(RadialGeometry::new(Some(-3.0), 45.0).circumference, expected);
        assert_eq!(RadialGeometry::new(Some(10.0), 45.0).circumference, 20.0 * PI);
    }

    #[test]
    fn offset_is_proportional_and_clamped() {
        let g = RadialGeometry::new(Some(50.0), 45.0);
        assert_eq!(g.offset_for(0.0), g.circumference);
        assert_eq!(g.offset_for(100.0), 0.0);
        assert!((g.offset_for(75.0) - g.circumference * 0.25).abs() < 1e-9);
        assert_eq!(g.offset_for(150.0), 0.0);
        assert_eq!(g.offset_for(-20.0), g.circumference);
    }

    #[test]
    fn mount_hides_then_sweep_reveals() {
        let page = FakePage::new();
        let circle = page.with_attr(page.add(&[RADIAL_CIRCLE]), ATTR_PERCENT, "50");
        let bad = page.with_attr(page.add(&[RADIAL_CIRCLE]), ATTR_PERCENT, "NaN");
        let full = (2.0 * PI * 45.0).to_string();

        let radials = Radials::mount(&page, &AnimationOptions::default());
        assert_eq!(page.style(circle, "stroke-dasharray"), Some(full.clone()));
        assert_eq!(page.style(circle, "stroke-dashoffset"), Some(full));
        assert!(page.style(circle, "transition").is_none());
        assert!(page.style(bad, "stroke-dasharray").is_none());

        radials.sweep(&page);
        assert_eq!(
            page.style(circle, "transition").as_deref(),
            Some("stroke-dashoffset 1200ms cubic-bezier(0.25, 1, 0.5, 1)")
        );
        let half = (2.0 * PI * 45.0 * 0.5).to_string();
        assert_eq!(page.style(circle, "stroke-dashoffset"), Some(half));
    }

    #[test]
    fn mount_reads_radius_from_markup() {
        let page = FakePage::new();
        let sized = page.with_attr(page.add(&[RADIAL_CIRCLE]), ATTR_PERCENT, "25");
        let _ = page.with_attr(sized, ATTR_RADIUS, "40");
        let empty = page.with_attr(page.add(&[RADIAL_CIRCLE]), ATTR_PERCENT, "25");
        let _ = page.with_attr(empty, ATTR_RADIUS, "");
        let garbage = page.with_attr(page.add(&[RADIAL_CIRCLE]), ATTR_PERCENT, "25");
        let _ = page.with_attr(garbage, ATTR_RADIUS, "abc");

        let _ = Radials::mount(&page, &AnimationOptions::default());
        let sized_full = (2.0 * PI * 40.0).to_string();
        let default_full = (2.0 * PI * 45.0).to_string();
        assert_eq!(page.style(sized, "stroke-dasharray"), Some(sized_full));
        assert_eq!(page.style(empty, "stroke-dasharray"), Some(default_full.clone()));
        assert_eq!(page.style(garbage, "stroke-dasharray"), Some(default_full));
    }
}
