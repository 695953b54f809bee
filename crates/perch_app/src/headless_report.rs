//! Report output model for headless scroll sessions.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Component, Path};

use crate::headless_assert::DiagnosticsSnapshot;

/// Report status for a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Visual state captured by one render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSample {
    pub step_index: usize,
    pub offset: f32,
    pub fab_top: f32,
    pub fab_scale: f32,
    pub edge_top: Option<f32>,
    pub edge_height: Option<f32>,
}

impl FrameSample {
    pub fn from_snapshot(step_index: usize, snapshot: &DiagnosticsSnapshot) -> Self {
        Self {
            step_index,
            offset: snapshot.offset,
            fab_top: snapshot.state.fab_top,
            fab_scale: snapshot.state.fab_scale,
            edge_top: snapshot.state.edge.map(|edge| edge.top),
            edge_height: snapshot.state.edge.map(|edge| edge.height),
        }
    }
}

/// Machine-readable result of a headless run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub renders: u64,
    pub frames: Vec<FrameSample>,
}

impl HeadlessReport {
    pub fn passed(renders: u64, frames: Vec<FrameSample>) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            message: None,
            renders,
            frames,
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        message: String,
        renders: u64,
        frames: Vec<FrameSample>,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            message: Some(message),
            renders,
            frames,
        }
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative and must not start with a separator");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
