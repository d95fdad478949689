use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::Serialize;

use crate::layout::{CanvasSize, Layout, radial_layout};
use crate::sequence::Sequence;

/// Headless dump of a sequence and its radial layout.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceReport {
    pub start: u64,
    pub steps: usize,
    pub peak: u64,
    pub sequence: Sequence,
    pub canvas: CanvasSize,
    pub layout: Layout,
}

impl SequenceReport {
    pub fn new(sequence: Sequence, canvas: CanvasSize) -> Self {
        let layout = radial_layout(&sequence, canvas);
        Self {
            start: sequence.start(),
            steps: sequence.steps(),
            peak: sequence.peak(),
            sequence,
            canvas,
            layout,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write `report` as pretty-printed JSON to `path`.
pub fn write_report(path: &Utf8Path, report: &SequenceReport) -> Result<()> {
    let json = report.to_json()?;
    std::fs::write(path, json).with_context(|| format!("Write {}", path))?;
    tracing::info!(%path, start = report.start, "wrote sequence report");
    Ok(())
}
