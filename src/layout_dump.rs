use crate::layout::{ArrowStyle, LabelBox, LabelDecision, VisibilitySummary};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct VisibilityDump {
    pub arrow_style: ArrowStyle,
    pub labels: Vec<LabelDump>,
    pub summary: VisibilitySummary,
}

#[derive(Debug, Serialize)]
pub struct LabelDump {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub visible: bool,
    pub reason: LabelDecision,
}

impl VisibilityDump {
    pub fn from_decisions(
        labels: &[LabelBox],
        decisions: &[LabelDecision],
        arrow_style: ArrowStyle,
    ) -> Self {
        let dumped = labels
            .iter()
            .zip(decisions)
            .enumerate()
            .map(|(index, (label, decision))| LabelDump {
                index,
                x: label.bounds.x,
                y: label.bounds.y,
                width: label.bounds.width,
                height: label.bounds.height,
                visible: decision.is_visible(),
                reason: *decision,
            })
            .collect();
        Self {
            arrow_style,
            labels: dumped,
            summary: VisibilitySummary::from_decisions(decisions),
        }
    }
}

/// Pretty JSON to `path`, or to stdout when no path is given.
pub fn write_visibility_dump(dump: &VisibilityDump, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, dump)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, dump)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}
