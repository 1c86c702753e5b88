use thiserror::Error;

/// A malformed breakpoint/output configuration for a curve mapping.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidRangeError {
    #[error("breakpoints ({breakpoints}) and outputs ({outputs}) must have the same length")]
    LengthMismatch { breakpoints: usize, outputs: usize },
    #[error("a curve needs at least 2 breakpoints, got {0}")]
    TooFewBreakpoints(usize),
    #[error("breakpoints must be strictly increasing: [{index}] = {current} follows {previous}")]
    NotIncreasing {
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error("non-finite value at index {index}")]
    NonFinite { index: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),
    #[error("input {input} is outside [{min}, {max}] and extrapolation is set to error")]
    OutOfRange { input: f64, min: f64, max: f64 },
    #[error("input must be a finite number, got {0}")]
    NonFiniteInput(f64),
    #[error("invalid spring configuration: {0}")]
    InvalidSpring(String),
    #[error("invalid phase window '{name}': {reason}")]
    InvalidPhase { name: String, reason: String },
    #[error("invalid timeline: {0}")]
    InvalidTimeline(String),
    #[error("invalid segment {index}: {reason}")]
    InvalidSegment { index: usize, reason: String },
}
