//! The typed instruction model.
//!
//! Written crochet instructions form a closed family of four shapes: a plain
//! run of stitches, a decrease (`sc2tog`), an increase (`2sc into stitch`)
//! and a repeated group of other instructions. Every one of them knows how
//! many stitches it produces ([`Instruction::stitches`]) and how many
//! stitches of the previous round it consumes
//! ([`Instruction::stitches_into`]), so a whole round can be checked against
//! its neighbours by arithmetic alone.
//!
//! ```
//! use crocad::{InstructionGroup, MultipleStitches, Run};
//!
//! let mut round = InstructionGroup::new();
//! round.append(MultipleStitches::default().into());
//! round.append(Run::new(11).into());
//! assert_eq!(round.to_string(), "2sc into stitch, 11sc");
//! assert_eq!(round.stitches(), 13);
//! assert_eq!(round.stitches_into(), 12);
//! ```

use std::fmt;

use itertools::Itertools;

use crate::error::{Error, Result};

/// The stitch a plain run is worked in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
pub enum Stitch {
    /// Single crochet, the base stitch of patterns worked in the round.
    #[default]
    #[display("sc")]
    Single,
    /// Foundation chain, only used for the first row of a piece.
    #[display("ch")]
    Chain,
}

/// A plain run of stitches, one worked into each stitch of the previous
/// round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    count: u32,
    stitch: Stitch,
}

impl Default for Run {
    fn default() -> Self {
        Self {
            count: 1,
            stitch: Stitch::Single,
        }
    }
}

impl Run {
    /// A run of `count` single crochet.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            stitch: Stitch::Single,
        }
    }

    /// A foundation chain of `count` stitches.
    pub fn chain(count: u32) -> Self {
        Self {
            count,
            stitch: Stitch::Chain,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn stitch(&self) -> Stitch {
        self.stitch
    }

    pub fn stitches(&self) -> u32 {
        self.count
    }

    pub fn stitches_into(&self) -> u32 {
        self.count
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            write!(f, "{}", self.stitch)
        } else {
            write!(f, "{}{}", self.count, self.stitch)
        }
    }
}

/// A decrease: `degree` stitches of the previous round worked together into
/// one, performed `occurrences` times in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StitchTogether {
    occurrences: u32,
    degree: u32,
}

impl Default for StitchTogether {
    fn default() -> Self {
        Self {
            occurrences: 1,
            degree: 2,
        }
    }
}

impl StitchTogether {
    /// `occurrences` consecutive `sc{degree}tog` decreases.
    ///
    /// `occurrences` must be at least 1, `degree` at least 2.
    pub fn new(occurrences: u32, degree: u32) -> Result<Self> {
        if occurrences == 0 {
            return Err(Error::ZeroOccurrences);
        }
        if degree < 2 {
            return Err(Error::InvalidDegree { degree });
        }
        Ok(Self {
            occurrences,
            degree,
        })
    }

    pub fn occurrences(&self) -> u32 {
        self.occurrences
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn stitches(&self) -> u32 {
        self.occurrences
    }

    pub fn stitches_into(&self) -> u32 {
        self.occurrences * self.degree
    }
}

impl fmt::Display for StitchTogether {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sc{}tog", self.degree)?;
        if self.occurrences > 1 {
            write!(f, " in next {}", self.occurrences)?;
        }
        Ok(())
    }
}

/// An increase: `degree` stitches worked into each of `occurrences`
/// consecutive base stitches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultipleStitches {
    occurrences: u32,
    degree: u32,
}

impl Default for MultipleStitches {
    fn default() -> Self {
        Self {
            occurrences: 1,
            degree: 2,
        }
    }
}

impl MultipleStitches {
    /// `{degree}sc` worked into each of the next `occurrences` stitches.
    ///
    /// `occurrences` must be at least 1, `degree` at least 2.
    pub fn new(occurrences: u32, degree: u32) -> Result<Self> {
        if occurrences == 0 {
            return Err(Error::ZeroOccurrences);
        }
        if degree < 2 {
            return Err(Error::InvalidDegree { degree });
        }
        Ok(Self {
            occurrences,
            degree,
        })
    }

    pub fn occurrences(&self) -> u32 {
        self.occurrences
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn stitches(&self) -> u32 {
        self.occurrences * self.degree
    }

    pub fn stitches_into(&self) -> u32 {
        self.occurrences
    }
}

impl fmt::Display for MultipleStitches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.occurrences == 1 {
            write!(f, "{}sc into stitch", self.degree)
        } else {
            write!(f, "{}sc into next {} stitches", self.degree, self.occurrences)
        }
    }
}

/// An ordered sequence of instructions, worked `repeat_count` times over.
///
/// Groups nest: the row generator wraps the repeating unit of a shaped round
/// in an inner group and appends any leftover plain stitches after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionGroup {
    items: Vec<Instruction>,
    repeat_count: u32,
}

impl Default for InstructionGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionGroup {
    /// An empty group worked once.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            repeat_count: 1,
        }
    }

    /// A group over `items`, worked once.
    pub fn with_items(items: Vec<Instruction>) -> Self {
        Self {
            items,
            repeat_count: 1,
        }
    }

    /// A group over `items`, worked `repeat_count` times.
    ///
    /// `repeat_count` must be at least 1.
    pub fn repeated(items: Vec<Instruction>, repeat_count: u32) -> Result<Self> {
        if repeat_count == 0 {
            return Err(Error::ZeroRepeat);
        }
        Ok(Self {
            items,
            repeat_count,
        })
    }

    pub fn items(&self) -> &[Instruction] {
        &self.items
    }

    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    pub fn stitches(&self) -> u32 {
        self.repeat_count * self.items.iter().map(Instruction::stitches).sum::<u32>()
    }

    pub fn stitches_into(&self) -> u32 {
        self.repeat_count
            * self
                .items
                .iter()
                .map(Instruction::stitches_into)
                .sum::<u32>()
    }

    /// Appends `instruction`, folding it into the group's last item when the
    /// two are mergeable.
    ///
    /// This is the only way items enter a group, so a group never holds two
    /// adjacent mergeable items.
    pub fn append(&mut self, instruction: Instruction) {
        if let Some(last) = self.items.last_mut() {
            if last.merge(&instruction) {
                return;
            }
        }
        self.items.push(instruction);
    }
}

impl fmt::Display for InstructionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.items.iter().join(", "))
    }
}

/// Any one written instruction: the closed family over which rounds are
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Run(Run),
    Together(StitchTogether),
    Multiple(MultipleStitches),
    Group(InstructionGroup),
}

impl Instruction {
    /// Stitches produced by working this instruction.
    pub fn stitches(&self) -> u32 {
        match self {
            Instruction::Run(run) => run.stitches(),
            Instruction::Together(together) => together.stitches(),
            Instruction::Multiple(multiple) => multiple.stitches(),
            Instruction::Group(group) => group.stitches(),
        }
    }

    /// Stitches of the previous round consumed by working this instruction.
    pub fn stitches_into(&self) -> u32 {
        match self {
            Instruction::Run(run) => run.stitches_into(),
            Instruction::Together(together) => together.stitches_into(),
            Instruction::Multiple(multiple) => multiple.stitches_into(),
            Instruction::Group(group) => group.stitches_into(),
        }
    }

    /// Attempts to absorb `other` into `self`.
    ///
    /// Succeeds only for two instructions of the same shape — same stitch for
    /// runs, same degree for decreases/increases — by summing their counts.
    /// Returns `false` otherwise, leaving both operands untouched; groups
    /// never merge.
    pub fn merge(&mut self, other: &Instruction) -> bool {
        match (self, other) {
            (Instruction::Run(a), Instruction::Run(b)) if a.stitch == b.stitch => {
                a.count += b.count;
                true
            }
            (Instruction::Together(a), Instruction::Together(b)) if a.degree == b.degree => {
                a.occurrences += b.occurrences;
                true
            }
            (Instruction::Multiple(a), Instruction::Multiple(b)) if a.degree == b.degree => {
                a.occurrences += b.occurrences;
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Run(run) => run.fmt(f),
            Instruction::Together(together) => together.fmt(f),
            Instruction::Multiple(multiple) => multiple.fmt(f),
            Instruction::Group(group) => group.fmt(f),
        }
    }
}

impl From<Run> for Instruction {
    fn from(run: Run) -> Self {
        Instruction::Run(run)
    }
}

impl From<StitchTogether> for Instruction {
    fn from(together: StitchTogether) -> Self {
        Instruction::Together(together)
    }
}

impl From<MultipleStitches> for Instruction {
    fn from(multiple: MultipleStitches) -> Self {
        Instruction::Multiple(multiple)
    }
}

impl From<InstructionGroup> for Instruction {
    fn from(group: InstructionGroup) -> Self {
        Instruction::Group(group)
    }
}
