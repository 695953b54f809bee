//! Layout widgets

pub mod sliver_fab;

pub use sliver_fab::{MountedSliverFab, SliverFab};
