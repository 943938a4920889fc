use thiserror::Error;

use crate::utils::Rect;

/// The probe line and the clone line never meet (parallel or degenerate input)
#[derive(Debug, Clone, PartialEq, Error)]
#[error("ParallelLinesError: clone line is parallel to parent (denominator {denominator})")]
pub struct ParallelLinesError {
    pub denominator: f64,
}

/// A flat annotation record could not be turned into an annotation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedRecordError {
    #[error("MalformedRecordError: expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },
    #[error("MalformedRecordError: field {index} ({value:?}) is not a valid {kind}")]
    BadField {
        index: usize,
        value: String,
        kind: &'static str,
    },
}

/// Elapsed time of a velocity entry is zero
#[derive(Debug, Clone, PartialEq, Error)]
#[error("DivisionByZeroError: frame interval {frame_interval} at {fps} fps gives zero time")]
pub struct DivisionByZeroError {
    pub frame_interval: i64,
    pub fps: f64,
}

/// Rectangle cannot be represented on the `i32` pixel grid
#[derive(Debug, Clone, PartialEq, Error)]
#[error("PixelRectOverflowError: {rect:?} does not fit the i32 pixel grid")]
pub struct PixelRectOverflowError {
    pub rect: Rect,
}

#[derive(Debug, Error)]
pub enum CgtError {
    #[error(transparent)]
    ParallelLines(#[from] ParallelLinesError),
    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecordError),
    #[error(transparent)]
    DivisionByZero(#[from] DivisionByZeroError),
    #[error(transparent)]
    PixelRectOverflow(#[from] PixelRectOverflowError),
    #[error("UnknownRegion: region {index} requested but only {count} regions exist")]
    UnknownRegion { index: usize, count: usize },
    #[error("MissingSetting: {0} is not set")]
    MissingSetting(&'static str),
    #[error("Json: {0}")]
    Json(#[from] serde_json::Error),
}
