//! Shared helpers: easing curves and markup number handling.

pub mod easing;
pub mod number;
