//! Easing curves for script-driven animations.
//!
//! Counters are linear by default; the other curves are available through
//! [`AnimationOptions::counter_easing`](crate::options::AnimationOptions).

use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control value.
        c1: f64,
        /// Second inner control value.
        c2: f64,
    },
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Every curve maps 0 to 0 and 1 to 1.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            Self::Linear => t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity_inside_unit_range() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.25), 0.25);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn input_is_clamped() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);
        assert_eq!(linear.evaluate(f64::NAN), 0.0);

        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(-1.0), 0.0);
        assert!((hermite.evaluate(2.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn quadratic_out_runs_ahead_of_linear() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.5), 0.75);
        assert!(quad_out.evaluate(0.1) > 0.1);
    }

    #[test]
    fn easing_reads_from_toml_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            easing: EasingFunction,
        }
        let w: Wrapper = toml::from_str("easing = \"quadratic_out\"").unwrap();
        assert_eq!(w.easing, EasingFunction::QuadraticOut);
    }
}
