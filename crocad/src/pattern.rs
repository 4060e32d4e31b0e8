//! Row generation: turning consecutive stitch counts into instructions.

use tracing::debug;

use crate::error::{Error, Result};
use crate::instruction::{Instruction, InstructionGroup, MultipleStitches, Run, StitchTogether};

/// Generates the instructions for one round of `target` stitches worked onto
/// a round of `previous` stitches (`None` for the first row of a piece).
///
/// The returned group always produces exactly `target` stitches and consumes
/// exactly `previous`. Shaped rounds are factored into a short repeat: the
/// difference between the two counts is the number of increases (or
/// decreases) needed, so the previous round is split into that many equal
/// spans, each worked as one adjuster plus a plain run, with any leftover
/// stitches appended after the repeat.
///
/// ```
/// use crocad::pattern::row;
///
/// assert_eq!(row(Some(12), 13)?.to_string(), "2sc into stitch, 11sc");
/// # Ok::<(), crocad::Error>(())
/// ```
///
/// With degree-2 adjusters a round can at most double or halve its
/// predecessor; anything steeper is [`Error::UnworkableRow`].
pub fn row(previous: Option<u32>, target: u32) -> Result<InstructionGroup> {
    let mut group = InstructionGroup::new();

    let previous = match previous {
        None => {
            group.append(Run::chain(target).into());
            return Ok(group);
        }
        Some(previous) => previous,
    };

    if previous == target {
        group.append(Run::new(previous).into());
        return Ok(group);
    }

    let diff = previous.abs_diff(target);
    let remainder = previous % diff;
    let consumed_per_repeat = (previous - remainder) / diff;
    let (adjuster, adjuster_consumption): (Instruction, u32) = if target > previous {
        (MultipleStitches::default().into(), 1)
    } else {
        (StitchTogether::default().into(), 2)
    };
    if consumed_per_repeat < adjuster_consumption {
        return Err(Error::UnworkableRow { previous, target });
    }
    let plain = consumed_per_repeat - adjuster_consumption;
    debug!(previous, target, diff, remainder, plain, "factored round");

    let mut unit = vec![adjuster];
    if plain > 0 {
        unit.push(Run::new(plain).into());
    }

    if diff == 1 {
        // A single repetition needs no repeat notation.
        for item in unit {
            group.append(item);
        }
    } else {
        group.append(InstructionGroup::repeated(unit, diff)?.into());
        if remainder > 0 {
            group.append(Run::new(remainder).into());
        }
    }

    Ok(group)
}

/// Generates the instruction groups for a whole piece, one per stitch count,
/// pairing each count with its predecessor (and the first with `None`).
pub fn rows(counts: &[u32]) -> Result<Vec<InstructionGroup>> {
    let mut previous = None;
    counts
        .iter()
        .map(|&count| {
            let group = row(previous, count);
            previous = Some(count);
            group
        })
        .collect()
}
