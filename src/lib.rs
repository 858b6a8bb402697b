// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interaction controller for a single-page portfolio site.
//!
//! Folio wires a static portfolio page: a mobile navigation menu, smooth
//! anchor scrolling with a scrollspy, animated statistic counters, linear
//! and radial skill bars, reveal-on-scroll sections, a cursor glow, and a
//! modal CV viewer.
//!
//! # Key entry points
//!
//! - [`controller::PageController`] - owns every feature and routes events
//! - [`page::Page`] - the page environment the controller mutates
//! - [`options::Options`] - runtime configuration (offsets, timings, URLs)
//! - [`input::PageEvent`] - the events a host feeds in
//!
//! # Architecture
//!
//! Feature logic is host independent: it reads and writes the page only
//! through [`page::Page`]. Timers and animation frames are requested as
//! [`input::Schedule`] values and come back as events, so the whole
//! controller can be driven synchronously in tests. The `web` feature adds
//! the browser host, which binds the live DOM and exports the wasm start
//! hooks.

pub mod controller;
pub mod effects;
pub mod error;
pub mod input;
pub mod menu;
pub mod options;
pub mod page;
pub mod scroll;
pub mod util;
pub mod viewer;
#[cfg(feature = "web")]
pub mod web;

pub use controller::PageController;
pub use error::FolioError;
pub use input::PageEvent;
pub use options::Options;
pub use page::Page;
