//! Error types for the crocad crate.

use thiserror::Error;

/// Main error type for crocad operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Rounding step must be greater than zero.
    #[error("Rounding step must be greater than zero")]
    ZeroStep,

    /// An instruction must occur at least once.
    #[error("Instruction occurrence count must be at least 1")]
    ZeroOccurrences,

    /// Increases and decreases involve at least two stitches.
    #[error("Instruction degree must be at least 2, got {degree}")]
    InvalidDegree { degree: u32 },

    /// A group is worked at least once.
    #[error("Group repeat count must be at least 1")]
    ZeroRepeat,

    /// A sphere needs at least one row.
    #[error("Row count must be at least 1")]
    ZeroRows,

    /// The torus tube has no cross-section to sweep.
    #[error("Torus outer diameter {outer} must exceed inner diameter {inner} by enough to form a tube")]
    DegenerateTorus { inner: u32, outer: u32 },

    /// A round can at most double or halve its predecessor with degree-2
    /// increases/decreases.
    #[error("Cannot work {target} stitches into a round of {previous}")]
    UnworkableRow { previous: u32, target: u32 },

    /// IO error while writing pattern text.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
