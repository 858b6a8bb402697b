//! Visual effects: counters, progress bars, radial indicators, reveal on
//! scroll and the cursor glow.

pub mod counter;
pub mod cursor;
pub mod progress;
pub mod radial;
pub mod reveal;

pub use counter::Counters;
pub use cursor::CursorGlow;
pub use progress::ProgressBars;
pub use radial::{RadialGeometry, Radials};
pub use reveal::Reveal;
