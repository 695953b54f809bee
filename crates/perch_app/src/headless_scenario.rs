//! Scenario definition for headless scroll sessions.

use anyhow::Result;
use perch_layout::{SliverFabSettings, COLLAPSED_HEADER_HEIGHT};
use serde::Deserialize;
use std::path::Path;

/// Scripted scroll session against a single sliver FAB layout.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    #[serde(default)]
    pub viewport: Viewport,
    /// Initial top safe-area inset.
    #[serde(default)]
    pub inset_top: f32,
    #[serde(default = "default_collapsed_header_height")]
    pub collapsed_header_height: f32,
    /// Number of placeholder scroll sections.
    #[serde(default = "default_sections")]
    pub sections: u32,
    #[serde(default)]
    pub settings: SliverFabSettings,
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Logical viewport of the headless run.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 640.0,
        }
    }
}

fn default_collapsed_header_height() -> f32 {
    COLLAPSED_HEADER_HEIGHT
}

fn default_sections() -> u32 {
    3
}

/// Steps a scenario can run.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    ScrollTo {
        offset: f32,
    },
    ScrollBy {
        delta: f32,
    },
    SetInsetTop {
        value: f32,
    },
    Render,
    /// Scroll to every offset from `from` to `to` in `step` increments,
    /// rendering after each.
    Sweep {
        from: f32,
        to: f32,
        step: f32,
    },
    AssertFabScale {
        expected: f32,
        #[serde(default)]
        tolerance: Option<f32>,
    },
    AssertFabTop {
        expected: f32,
        #[serde(default)]
        tolerance: Option<f32>,
    },
    AssertEdgeHeight {
        expected: f32,
        #[serde(default)]
        tolerance: Option<f32>,
    },
    AssertEdgeHidden,
    AssertRenderPending {
        expected: bool,
    },
}

impl ScenarioStep {
    /// Step name as written in scenario JSON.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioStep::ScrollTo { .. } => "scroll_to",
            ScenarioStep::ScrollBy { .. } => "scroll_by",
            ScenarioStep::SetInsetTop { .. } => "set_inset_top",
            ScenarioStep::Render => "render",
            ScenarioStep::Sweep { .. } => "sweep",
            ScenarioStep::AssertFabScale { .. } => "assert_fab_scale",
            ScenarioStep::AssertFabTop { .. } => "assert_fab_top",
            ScenarioStep::AssertEdgeHeight { .. } => "assert_edge_height",
            ScenarioStep::AssertEdgeHidden => "assert_edge_hidden",
            ScenarioStep::AssertRenderPending { .. } => "assert_render_pending",
        }
    }
}
