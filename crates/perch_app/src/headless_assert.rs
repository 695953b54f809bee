//! Assertion helpers for headless scroll sessions.

use perch_layout::DerivedVisualState;

/// Tolerance used when a scenario step does not specify one.
pub const DEFAULT_TOLERANCE: f32 = 1e-4;

/// Observable state of the layout at one point of a scenario.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticsSnapshot {
    pub offset: f32,
    pub state: DerivedVisualState,
    pub render_pending: bool,
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

fn approx(label: &str, actual: f32, expected: f32, tolerance: Option<f32>) -> AssertionResult {
    let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    // NaN never passes
    if (actual - expected).abs() <= tolerance {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "value_mismatch".to_string(),
            message: format!("{label}: expected {expected} (+/- {tolerance}), got {actual}"),
        }
    }
}

pub fn evaluate_fab_scale(
    expected: f32,
    tolerance: Option<f32>,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    approx("fab scale", snapshot.state.fab_scale, expected, tolerance)
}

pub fn evaluate_fab_top(
    expected: f32,
    tolerance: Option<f32>,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    approx("fab top", snapshot.state.fab_top, expected, tolerance)
}

pub fn evaluate_edge_height(
    expected: f32,
    tolerance: Option<f32>,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let Some(edge) = snapshot.state.edge else {
        return AssertionResult::Failed {
            code: "missing_edge".to_string(),
            message: format!("edge overlay not present at offset {}", snapshot.offset),
        };
    };
    approx("edge height", edge.height, expected, tolerance)
}

pub fn evaluate_edge_hidden(snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    match snapshot.state.edge {
        None => AssertionResult::Passed,
        Some(edge) => AssertionResult::Failed {
            code: "unexpected_edge".to_string(),
            message: format!(
                "edge overlay present at offset {} (height {})",
                snapshot.offset, edge.height
            ),
        },
    }
}

pub fn evaluate_render_pending(expected: bool, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.render_pending == expected {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "render_pending_mismatch".to_string(),
            message: format!(
                "expected render pending = {expected}, got {}",
                snapshot.render_pending
            ),
        }
    }
}
