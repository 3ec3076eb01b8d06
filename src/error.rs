//! Error types for reading robot input.
//!
//! The simulation itself cannot fail once it has a validated world and robots;
//! every error here comes from turning text into those values.

/// A compass letter outside `N`, `E`, `S`, `W`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown orientation {0:?}, expected one of N, E, S, W")]
pub struct UnknownOrientation(pub String);

/// Errors raised while parsing the text protocol. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input ended before the world bounds line.
    #[error("missing world bounds line")]
    MissingBounds,

    /// The bounds line is not two non-negative integers.
    #[error("line {line}: invalid world bounds {value:?}: {reason}")]
    InvalidBounds {
        line: usize,
        value: String,
        reason: &'static str,
    },

    /// A robot position line with the wrong field count or a non-integer coordinate.
    #[error("line {line}: invalid robot position {value:?}: {reason}")]
    InvalidPosition {
        line: usize,
        value: String,
        reason: &'static str,
    },

    /// A robot position line whose orientation is not a compass letter.
    #[error("line {line}: {source}")]
    InvalidOrientation {
        line: usize,
        #[source]
        source: UnknownOrientation,
    },

    /// Input ended right after a robot position line.
    #[error("line {line}: missing instruction line for robot")]
    MissingInstructionLine { line: usize },
}
