//! Counters that count up from zero to their `data-target`.
//!
//! The value shown at any instant is a pure function of elapsed time
//! ([`counter_value`]); the host only decides when frames happen.

use crate::options::AnimationOptions;
use crate::page::markup::{ATTR_TARGET, COUNTER};
use crate::page::Page;
use crate::util::easing::EasingFunction;
use crate::util::number::parse_finite;

/// Displayed value `elapsed_ms` into a run of `duration_ms` toward `target`.
///
/// Floored to an integer. Reaches exactly `floor(target)` once
/// `elapsed_ms >= duration_ms`; never runs backwards past zero for early
/// frame timestamps.
#[must_use]
pub fn counter_value(
    target: f64,
    elapsed_ms: f64,
    duration_ms: f64,
    easing: EasingFunction,
) -> f64 {
    (target * easing.evaluate(progress(elapsed_ms, duration_ms))).floor()
}

/// Fraction of the run completed, in `[0, 1]`.
#[must_use]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
struct Counter<N> {
    node: N,
    target: f64,
    finished: bool,
}

/// All counters on the page, animated together from one start time.
#[derive(Debug, Clone)]
pub struct Counters<N> {
    items: Vec<Counter<N>>,
    start: f64,
    duration_ms: f64,
    easing: EasingFunction,
}

impl<N: Clone> Counters<N> {
    /// Collect counters with a finite target. The run starts now.
    pub fn mount<P: Page<Node = N>>(page: &P, options: &AnimationOptions) -> Self {
        let items = page
            .query_all(COUNTER)
            .into_iter()
            .filter_map(|node| {
                let raw = page.attribute(&node, ATTR_TARGET)?;
                let Some(target) = parse_finite(&raw) else {
                    log::debug!("skipping counter with target {raw:?}");
                    return None;
                };
                Some(Counter {
                    node,
                    target,
                    finished: false,
                })
            })
            .collect();

        Self {
            items,
            start: page.now(),
            duration_ms: f64::from(options.counter_duration_ms),
            easing: options.counter_easing,
        }
    }

    /// Whether any counter still needs frames.
    pub fn running(&self) -> bool {
        self.items.iter().any(|c| !c.finished)
    }

    /// Render every unfinished counter for a frame at `now`. Returns whether
    /// another frame is needed.
    pub fn frame<P: Page<Node = N>>(&mut self, page: &P, now: f64) -> bool {
        let elapsed = now - self.start;
        let done = progress(elapsed, self.duration_ms) >= 1.0;

        for counter in self.items.iter_mut().filter(|c| !c.finished) {
            let value =
                counter_value(counter.target, elapsed, self.duration_ms, self.easing);
            page.set_text(&counter.node, &page.format_count(value));
            counter.finished = done;
        }
        self.running()
    }
}
