use serde::{Deserialize, Serialize};

use crate::cgt_errors::DivisionByZeroError;

/// Average pixel separation of a face measured over a number of frames
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifferenceRecord {
    pub frame_interval: i64,
    pub average: f64,
}

impl DifferenceRecord {
    pub fn new(frame_interval: i64, average: f64) -> Self {
        DifferenceRecord {
            frame_interval,
            average,
        }
    }
}

/// Real-world time, distance and speed for one [`DifferenceRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityRecord {
    pub time: f64,
    /// Signed, in the same sense as the pixel difference
    pub distance: f64,
    /// Always non-negative
    pub velocity: f64,
}

/// Average pixel separation scaled to a real-world distance
pub fn difference_to_distance(average: f64, scale: f64) -> f64 {
    average * scale
}

fn velocity_record(
    record: &DifferenceRecord,
    scale: f64,
    fps: f64,
) -> Result<VelocityRecord, DivisionByZeroError> {
    if fps == 0.0 || record.frame_interval == 0 {
        return Err(DivisionByZeroError {
            frame_interval: record.frame_interval,
            fps,
        });
    }
    let distance = difference_to_distance(record.average, scale);
    let time = record.frame_interval as f64 / fps;
    let velocity = distance / time;
    Ok(VelocityRecord {
        time,
        distance,
        velocity: velocity.abs(),
    })
}

/// Time, distance and speed for every record. Fails on the first record with zero elapsed time
pub fn velocity_records(
    records: &[DifferenceRecord],
    scale: f64,
    fps: f64,
) -> Result<Vec<VelocityRecord>, DivisionByZeroError> {
    records
        .iter()
        .map(|record| velocity_record(record, scale, fps))
        .collect()
}

/// Speeds (direction discarded) for a list of frame intervals and pixel differences
pub fn difference_list_to_velocities(
    records: &[DifferenceRecord],
    scale: f64,
    fps: f64,
) -> Result<Vec<f64>, DivisionByZeroError> {
    let velocities = velocity_records(records, scale, fps)?
        .into_iter()
        .map(|v| v.velocity)
        .collect();
    Ok(velocities)
}
