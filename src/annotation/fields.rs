use std::fmt::Display;
use std::str::FromStr;

use crate::annotation::{AnnotationLine, AnnotationPoint};
use crate::cgt_errors::MalformedRecordError;
use crate::utils::{LineSegment, Point};

/// Fields in a point record: `[id, cx, cy, px, py, frame, region]`
pub const POINT_RECORD_LEN: usize = 7;
/// Fields in a line record: `[id, x1, y1, x2, y2, px, py, frame, region]`
pub const LINE_RECORD_LEN: usize = 9;

fn check_len<S: AsRef<str>>(fields: &[S], expected: usize) -> Result<(), MalformedRecordError> {
    if fields.len() < expected {
        return Err(MalformedRecordError::TooFewFields {
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

fn parse_field<T: FromStr, S: AsRef<str>>(
    fields: &[S],
    index: usize,
    kind: &'static str,
) -> Result<T, MalformedRecordError> {
    let raw = fields[index].as_ref();
    raw.trim()
        .parse::<T>()
        .map_err(|_| MalformedRecordError::BadField {
            index,
            value: raw.to_string(),
            kind,
        })
}

fn float_field<S: AsRef<str>>(fields: &[S], index: usize) -> Result<f64, MalformedRecordError> {
    parse_field(fields, index, "number")
}

fn index_field<S: AsRef<str>>(fields: &[S], index: usize) -> Result<usize, MalformedRecordError> {
    parse_field(fields, index, "non-negative integer")
}

impl AnnotationPoint {
    /// Builds a point from `[id, cx, cy, px, py, frame, region]`. The id is not used here
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, MalformedRecordError> {
        check_len(fields, POINT_RECORD_LEN)?;
        let centre = Point::new(float_field(fields, 1)?, float_field(fields, 2)?);
        let position = Point::new(float_field(fields, 3)?, float_field(fields, 4)?);
        let frame = index_field(fields, 5)?;
        let region = index_field(fields, 6)?;
        Ok(AnnotationPoint::new(centre, position, frame, region))
    }
    /// `[cx, cy, px, py, frame, region]`
    pub fn to_fields(&self) -> Vec<String> {
        let centre = self.get_centre();
        let position = self.get_position();
        vec![
            centre.x.to_string(),
            centre.y.to_string(),
            position.x.to_string(),
            position.y.to_string(),
            self.get_frame().to_string(),
            self.get_region().to_string(),
        ]
    }
    /// Full record with `id` in front, the inverse of [`AnnotationPoint::from_fields`]
    pub fn to_record<I: Display>(&self, id: I) -> Vec<String> {
        let mut record = vec![id.to_string()];
        record.extend(self.to_fields());
        record
    }
}

impl AnnotationLine {
    /// Builds a line from `[id, x1, y1, x2, y2, px, py, frame, region]`. The id is not used here
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, MalformedRecordError> {
        check_len(fields, LINE_RECORD_LEN)?;
        let line = LineSegment::from_coords(
            float_field(fields, 1)?,
            float_field(fields, 2)?,
            float_field(fields, 3)?,
            float_field(fields, 4)?,
        );
        let position = Point::new(float_field(fields, 5)?, float_field(fields, 6)?);
        let frame = index_field(fields, 7)?;
        let region = index_field(fields, 8)?;
        Ok(AnnotationLine::new(line, position, frame, region))
    }
    /// `[x1, y1, x2, y2, px, py, frame, region]`
    pub fn to_fields(&self) -> Vec<String> {
        let line = self.get_line();
        let position = self.get_position();
        vec![
            line.p1.x.to_string(),
            line.p1.y.to_string(),
            line.p2.x.to_string(),
            line.p2.y.to_string(),
            position.x.to_string(),
            position.y.to_string(),
            self.get_frame().to_string(),
            self.get_region().to_string(),
        ]
    }
    pub fn to_record<I: Display>(&self, id: I) -> Vec<String> {
        let mut record = vec![id.to_string()];
        record.extend(self.to_fields());
        record
    }
}

/// Outcome of converting a batch of records where bad records are skipped
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConversion<T> {
    pub items: Vec<T>,
    pub skipped: Vec<(usize, MalformedRecordError)>,
}

fn convert_records<T, R, S, F>(records: &[R], kind: &'static str, convert: F) -> BatchConversion<T>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    F: Fn(&[S]) -> Result<T, MalformedRecordError>,
{
    let mut items = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();
    for (row, record) in records.iter().enumerate() {
        match convert(record.as_ref()) {
            Ok(item) => items.push(item),
            Err(err) => {
                tracing::warn!(row, kind, %err, "skipping malformed record");
                skipped.push((row, err));
            }
        }
    }
    tracing::debug!(kind, converted = items.len(), skipped = skipped.len(), "records converted");
    BatchConversion { items, skipped }
}

/// Converts point records, skipping (and logging) the malformed ones
pub fn points_from_records<R, S>(records: &[R]) -> BatchConversion<AnnotationPoint>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    convert_records(records, "point", AnnotationPoint::from_fields)
}

/// Converts line records, skipping (and logging) the malformed ones
pub fn lines_from_records<R, S>(records: &[R]) -> BatchConversion<AnnotationLine>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    convert_records(records, "line", AnnotationLine::from_fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_from_fields() {
        let fields = ["0", "10.5", "20.25", "-1", "2", "15", "3"];
        let point = AnnotationPoint::from_fields(&fields).unwrap();
        assert_eq!(point.get_centre(), Point::new(10.5, 20.25));
        assert_eq!(point.get_position(), Point::new(-1.0, 2.0));
        assert_eq!(point.get_frame(), 15);
        assert_eq!(point.get_region(), 3);
    }

    #[test]
    fn test_point_record_round_trip() {
        let records = [
            vec!["7", "1.5", "2.25", "-3", "0.1", "12", "2"],
            vec!["8", "0.30000000000000004", "0.0000001", "0", "-0.5", "0", "0"],
            vec!["9", "123456.789", "-98765.4321", "3.141592653589793", "2.718281828459045", "999", "41"],
        ];
        for fields in records.iter() {
            let point = AnnotationPoint::from_fields(fields).unwrap();
            assert_eq!(&point.to_record(fields[0]), fields);
            assert_eq!(point.to_fields(), fields[1..].to_vec());
        }
    }

    #[test]
    fn test_round_trip_values_exact() {
        // Non-canonical spellings still give back identical numbers
        let fields = ["a", "1.50", "+2", "0.1000", "-0", "4", "1"];
        let point = AnnotationPoint::from_fields(&fields).unwrap();
        let again = AnnotationPoint::from_fields(&point.to_record("a")).unwrap();
        assert_eq!(again, point);
        assert_eq!(again.get_position().x.to_bits(), 0.1f64.to_bits());
    }

    #[test]
    fn test_line_record_round_trip() {
        let fields = ["3", "50", "150", "150", "50", "0.25", "-7.5", "250", "1"];
        let line = AnnotationLine::from_fields(&fields).unwrap();
        assert_eq!(line.get_line(), LineSegment::from_coords(50.0, 150.0, 150.0, 50.0));
        assert_eq!(line.get_position(), Point::new(0.25, -7.5));
        assert_eq!(line.get_frame(), 250);
        assert_eq!(line.get_region(), 1);
        assert_eq!(line.to_record("3"), fields.to_vec());
    }

    #[test]
    fn test_too_few_fields() {
        let err = AnnotationPoint::from_fields(&["0", "1", "2", "3", "4", "5"]).unwrap_err();
        assert_eq!(
            err,
            MalformedRecordError::TooFewFields {
                expected: POINT_RECORD_LEN,
                found: 6
            }
        );
        let err = AnnotationLine::from_fields(&["0", "1", "2", "3", "4", "5", "6", "7"]).unwrap_err();
        assert!(matches!(err, MalformedRecordError::TooFewFields { expected: 9, found: 8 }));
    }

    #[test]
    fn test_bad_field() {
        let err = AnnotationPoint::from_fields(&["0", "1", "two", "3", "4", "5", "6"]).unwrap_err();
        assert!(matches!(err, MalformedRecordError::BadField { index: 2, .. }));
        // frames are whole and non-negative
        let err = AnnotationPoint::from_fields(&["0", "1", "2", "3", "4", "-5", "6"]).unwrap_err();
        assert!(matches!(err, MalformedRecordError::BadField { index: 5, .. }));
        let err = AnnotationLine::from_fields(&["0", "1", "2", "3", "4", "5", "6", "7", "1.5"]).unwrap_err();
        assert!(matches!(err, MalformedRecordError::BadField { index: 8, .. }));
    }

    #[test]
    fn test_batch_skips_malformed() {
        let records: Vec<Vec<String>> = vec![
            vec!["0", "1", "1", "0", "0", "1", "0"],
            vec!["1", "oops", "1", "0", "0", "1", "0"],
            vec!["2", "1"],
            vec!["3", "2", "2", "0", "0", "4", "0"],
        ]
        .into_iter()
        .map(|r| r.into_iter().map(String::from).collect())
        .collect();
        let batch = points_from_records(&records);
        assert_eq!(batch.items.len(), 2);
        assert_eq!(batch.items[1].get_frame(), 4);
        let rows: Vec<usize> = batch.skipped.iter().map(|(row, _)| *row).collect();
        assert_eq!(rows, vec![1, 2]);

        let lines = lines_from_records(&records);
        assert!(lines.items.is_empty());
        assert_eq!(lines.skipped.len(), 4);
    }
}
