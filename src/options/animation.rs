use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Timing and geometry for counters, progress indicators and reveals.
pub struct AnimationOptions {
    /// Counter run length in milliseconds.
    pub counter_duration_ms: u32,
    /// Curve applied to the counter's elapsed fraction.
    pub counter_easing: EasingFunction,
    /// Delay before progress bars receive their width, in milliseconds.
    pub progress_delay_ms: u32,
    /// Delay before radial indicators sweep to their value, in milliseconds.
    pub radial_delay_ms: u32,
    /// Radius used when a circle has no usable `r` attribute.
    pub radial_default_radius: f64,
    /// CSS transition applied to radial circles before the sweep.
    pub radial_transition: String,
    /// Fraction of an element that must be visible before it is revealed.
    pub reveal_threshold: f64,
}

impl AnimationOptions {
    /// Counter run length.
    #[must_use]
    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.counter_duration_ms))
    }

    /// Delay before progress bars fill.
    #[must_use]
    pub fn progress_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.progress_delay_ms))
    }

    /// Delay before radial indicators sweep.
    #[must_use]
    pub fn radial_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.radial_delay_ms))
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            counter_duration_ms: 1200,
            counter_easing: EasingFunction::Linear,
            progress_delay_ms: 100,
            radial_delay_ms: 120,
            radial_default_radius: 45.0,
            radial_transition:
                "stroke-dashoffset 1200ms cubic-bezier(0.25, 1, 0.5, 1)".into(),
            reveal_threshold: 0.12,
        }
    }
}
