//! Perch Headless Runner
//!
//! Deterministic, renderer-free execution of scripted scroll sessions against
//! a sliver FAB layout.
//!
//! # Example
//!
//! ```rust
//! use perch_app::run_scenario;
//!
//! let outcome = run_scenario(
//!     r#"{
//!         "settings": { "top_corner_radius": 16.0, "has_pinned_header": true },
//!         "steps": [
//!             { "type": "scroll_to", "offset": 150.0 },
//!             { "type": "render" },
//!             { "type": "assert_fab_scale", "expected": 0.7353 }
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! assert!(!outcome.is_failed());
//! ```

pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_scenario;

pub use headless_assert::{AssertionResult, DiagnosticsSnapshot};
pub use headless_report::{FrameSample, HeadlessReport, ReportStatus};
pub use headless_runner::{run_loaded_scenario, run_scenario, RunOutcome};
pub use headless_scenario::{HeadlessScenario, ScenarioStep, Viewport};
