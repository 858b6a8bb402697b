//! Input handling: platform-agnostic page events and the scheduling
//! requests the controller hands back to its host.

/// Page events, click sources, timer tasks and scheduling requests.
pub mod event;

pub use event::{Click, PageEvent, Propagation, Schedule, Task};
