//! Frame output formats.

use std::fmt;
use std::io::Write;

use cl3::Float;
use eyre::Result;
use itertools::Itertools;
use serde::Serialize;

/// Rotated point positions for a single frame.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct Frame {
    /// Frame number.
    #[serde(rename = "frame")]
    pub index: usize,
    /// Total rotation angle, in radians.
    pub theta: Float,
    /// X, Y, and Z coordinates of each point.
    pub points: Vec<[Float; 3]>,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame {} theta={:.3}: {}",
            self.index,
            self.theta,
            self.points
                .iter()
                .format_with(" ", |[x, y, z], f| f(&format_args!(
                    "({x:.3}, {y:.3}, {z:.3})"
                ))),
        )
    }
}

/// Format for frames written to stdout.
#[derive(clap::ValueEnum, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// One human-readable line per frame.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Writes a frame followed by a newline.
pub(crate) fn write_frame(out: &mut impl Write, format: OutputFormat, frame: &Frame) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{frame}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, frame)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
