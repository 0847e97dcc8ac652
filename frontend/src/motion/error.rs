use thiserror::Error;

/// Configuration problems caught when a motion primitive is built.
///
/// None of these can happen while scrolling; they are raised once, when a
/// section sets up its interpolators or reveal gates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("at least 2 breakpoints are required, got {0}")]
    TooFewBreakpoints(usize),

    #[error("{inputs} breakpoint inputs but {outputs} outputs")]
    MismatchedBreakpoints { inputs: usize, outputs: usize },

    #[error("breakpoint inputs must be strictly ascending ({previous} followed by {next})")]
    UnsortedBreakpoints { previous: f64, next: f64 },

    #[error("breakpoint input {0} is not a finite number")]
    NonFiniteBreakpoint(f64),

    #[error("breakpoint outputs mix kinds or units: {first:?} and {other:?}")]
    MixedOutputKinds { first: String, other: String },

    #[error("could not parse output value {0:?}")]
    InvalidOutput(String),

    #[error("could not parse scroll edge {0:?}")]
    InvalidEdge(String),

    #[error("reveal threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),
}
