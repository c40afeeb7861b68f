use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type GradientResult<T> = Result<T, GradientError>;

/// Errors that can occur while building or sampling a gradient.
#[derive(Debug, Error)]
pub enum GradientError {
    /// The stop list cannot form a gradient.
    #[error("invalid stops: {0}")]
    InvalidStops(#[from] StopsError),
    /// The requested number of samples cannot be honored.
    #[error("invalid steps: {0}")]
    InvalidSteps(#[from] StepsError),
    /// A position query fell outside `[0, 1]`.
    #[error("position must be between 0 and 1 (got {pos})")]
    InvalidPosition {
        /// Rejected position.
        pos: f64,
    },
    /// A stop color could not be parsed.
    #[error("invalid color for stop {index}: {source}")]
    InvalidColor {
        /// Index of the offending stop in the constructor input.
        index: usize,
        /// Parser error reported for the color string.
        #[source]
        source: csscolorparser::ParseColorError,
    },
}

/// Reasons a stop list is rejected at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StopsError {
    /// Fewer than two stops were provided.
    #[error("at least 2 stops are required (got {count})")]
    TooFew {
        /// Number of stops received.
        count: usize,
    },
    /// Some stops declare a position while others don't.
    #[error("cannot mix positioned and unpositioned stops (stop {index})")]
    MixedPositions {
        /// Index of the first stop whose shape differs from the first one.
        index: usize,
    },
    /// A position lies outside `[0, 1]` or is not a finite number.
    #[error("stop {index} position {pos} is outside [0, 1]")]
    OutOfRange {
        /// Index of the offending stop.
        index: usize,
        /// Declared position.
        pos: f64,
    },
    /// A position is lower than the one before it.
    #[error("stop {index} position {pos} is lower than the previous one ({previous})")]
    Unordered {
        /// Index of the offending stop.
        index: usize,
        /// Declared position.
        pos: f64,
        /// Position of the previous stop.
        previous: f64,
    },
    /// A position-only stop is not surrounded by two colored stops.
    #[error("position-only stop {index} must sit between two colored stops")]
    MisplacedPlaceholder {
        /// Index of the offending stop.
        index: usize,
    },
}

/// Reasons a sample count is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepsError {
    /// Fewer than two samples were requested.
    #[error("number of steps must be at least 2 (got {steps})")]
    TooFew {
        /// Requested sample count.
        steps: usize,
    },
    /// Fewer samples than stops were requested.
    #[error("number of steps ({steps}) cannot be lower than the number of stops ({stops})")]
    FewerThanStops {
        /// Requested sample count.
        steps: usize,
        /// Number of stops in the gradient.
        stops: usize,
    },
}
