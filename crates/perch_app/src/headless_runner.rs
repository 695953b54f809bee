//! Scenario runner that executes headless scroll sessions.

use crate::headless_assert::{
    evaluate_edge_height, evaluate_edge_hidden, evaluate_fab_scale, evaluate_fab_top,
    evaluate_render_pending, AssertionResult, DiagnosticsSnapshot,
};
use crate::headless_report::{FrameSample, HeadlessReport};
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use anyhow::{bail, Context, Result};
use perch_core::{ScrollPosition, Size, UiNode};
use perch_layout::{
    FloatingContent, HostEnvironment, LayoutConfig, MountedSliverFab, SliverFab, StaticEnvironment,
};

/// Upper bound on renders produced by a single sweep step.
pub const MAX_SWEEP_FRAMES: usize = 100_000;

/// Node id given to the floating control; sections are numbered from 1.
const FLOATING_NODE_ID: u64 = 0;

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON with default host options.
pub fn run_scenario(input: &str) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario)
}

/// Execute a pre-loaded scenario.
///
/// The edge overlay takes the global theme surface color.
pub fn run_loaded_scenario(scenario: &HeadlessScenario) -> Result<RunOutcome> {
    let config = LayoutConfig::builder()
        .sections((1..=u64::from(scenario.sections)).map(UiNode::new).collect())
        .floating_content(FloatingContent::new(UiNode::new(FLOATING_NODE_ID)))
        .settings(scenario.settings.clone())
        .build()
        .context("invalid scenario settings")?;

    let mut env = StaticEnvironment::new(Size::new(
        scenario.viewport.width,
        scenario.viewport.height,
    ))
    .with_inset_top(scenario.inset_top)
    .with_collapsed_header_height(scenario.collapsed_header_height);

    let fab = SliverFab::new(config);
    let mut mounted = fab.mount(None).context("failed to mount sliver fab")?;
    let mut frames = Vec::new();

    tracing::debug!(steps = scenario.steps.len(), "running headless scenario");

    for (step_index, step) in scenario.steps.iter().enumerate() {
        let result = match step {
            ScenarioStep::ScrollTo { offset } => {
                ScrollPosition::set_offset(mounted.scroll_position(), *offset);
                AssertionResult::Passed
            }
            ScenarioStep::ScrollBy { delta } => {
                ScrollPosition::jump_by(mounted.scroll_position(), *delta);
                AssertionResult::Passed
            }
            ScenarioStep::SetInsetTop { value } => {
                env = env.with_inset_top(*value);
                AssertionResult::Passed
            }
            ScenarioStep::Render => {
                frames.push(render_frame(&mut mounted, &env, step_index));
                AssertionResult::Passed
            }
            ScenarioStep::Sweep { from, to, step } => {
                for offset in sweep_offsets(*from, *to, *step)
                    .with_context(|| format!("step {step_index}: invalid sweep"))?
                {
                    ScrollPosition::set_offset(mounted.scroll_position(), offset);
                    frames.push(render_frame(&mut mounted, &env, step_index));
                }
                AssertionResult::Passed
            }
            ScenarioStep::AssertFabScale {
                expected,
                tolerance,
            } => evaluate_fab_scale(*expected, *tolerance, &snapshot(&mounted, &env)),
            ScenarioStep::AssertFabTop {
                expected,
                tolerance,
            } => evaluate_fab_top(*expected, *tolerance, &snapshot(&mounted, &env)),
            ScenarioStep::AssertEdgeHeight {
                expected,
                tolerance,
            } => evaluate_edge_height(*expected, *tolerance, &snapshot(&mounted, &env)),
            ScenarioStep::AssertEdgeHidden => evaluate_edge_hidden(&snapshot(&mounted, &env)),
            ScenarioStep::AssertRenderPending { expected } => {
                evaluate_render_pending(*expected, &snapshot(&mounted, &env))
            }
        };

        if let AssertionResult::Failed { code, message } = result {
            tracing::info!(step_index, assertion = step.name(), %code, "scenario assertion failed");
            let report = HeadlessReport::failed(
                step.name(),
                step_index,
                message,
                mounted.render_count(),
                frames,
            );
            return Ok(RunOutcome::Failed { report });
        }
    }

    Ok(RunOutcome::Passed {
        report: HeadlessReport::passed(mounted.render_count(), frames),
    })
}

fn snapshot(mounted: &MountedSliverFab<'_>, env: &dyn HostEnvironment) -> DiagnosticsSnapshot {
    DiagnosticsSnapshot {
        offset: mounted.offset(),
        state: mounted.derive(env),
        render_pending: mounted.needs_render(),
    }
}

fn render_frame(
    mounted: &mut MountedSliverFab<'_>,
    env: &dyn HostEnvironment,
    step_index: usize,
) -> FrameSample {
    let before = snapshot(mounted, env);
    mounted.render(env);
    FrameSample::from_snapshot(step_index, &before)
}

fn sweep_offsets(from: f32, to: f32, step: f32) -> Result<Vec<f32>> {
    if !(from.is_finite() && to.is_finite() && step.is_finite()) {
        bail!("sweep bounds and step must be finite");
    }
    if step <= 0.0 {
        bail!("sweep step must be > 0");
    }

    let span = (to - from).abs();
    let count = (span / step).floor() as usize;
    if count >= MAX_SWEEP_FRAMES {
        bail!("sweep would render {} frames (limit {MAX_SWEEP_FRAMES})", count + 1);
    }

    let direction = if to >= from { 1.0 } else { -1.0 };
    Ok((0..=count)
        .map(|i| from + direction * step * i as f32)
        .collect())
}
