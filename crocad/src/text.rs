//! Written-pattern text output.
//!
//! Turns the instruction groups produced by [`crate::pattern::rows`] into
//! the conventional numbered notation, one line per round with its closing
//! stitch count:
//!
//! ```text
//! Ball (16 rows)
//! ==============
//! Row 1: 6ch (6)
//! Row 2: *, 2sc into stitch, repeat from * 6 times (12)
//! ...
//! ```

use std::io::Write;

use itertools::Itertools;

use crate::error::Result;
use crate::instruction::{Instruction, InstructionGroup};

/// Renders one round as a numbered pattern line.
///
/// A nested group with a repeat count is written in the usual asterisk
/// notation, `*, ..., repeat from * N times`.
pub fn instruction_line(row_number: usize, group: &InstructionGroup) -> String {
    format!(
        "Row {}: {} ({})",
        row_number,
        row_body(group),
        group.stitches()
    )
}

fn row_body(group: &InstructionGroup) -> String {
    group
        .items()
        .iter()
        .map(|item| match item {
            Instruction::Group(inner) if inner.repeat_count() > 1 => {
                format!("*, {}, repeat from * {} times", inner, inner.repeat_count())
            }
            other => other.to_string(),
        })
        .join(", ")
}

/// Writes a titled pattern, one [`instruction_line`] per group.
pub fn write_pattern<W: Write>(
    writer: &mut W,
    title: &str,
    groups: &[InstructionGroup],
) -> Result<()> {
    writeln!(writer, "{title}")?;
    writeln!(writer, "{}", "=".repeat(title.len()))?;
    for (row, group) in groups.iter().enumerate() {
        writeln!(writer, "{}", instruction_line(row + 1, group))?;
    }
    Ok(())
}

/// [`write_pattern`] into a freshly allocated `String`.
pub fn pattern_text(title: &str, groups: &[InstructionGroup]) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push('\n');
    for (row, group) in groups.iter().enumerate() {
        out.push_str(&instruction_line(row + 1, group));
        out.push('\n');
    }
    out
}
