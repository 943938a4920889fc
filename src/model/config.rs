use serde::{Deserialize, Serialize};

use crate::annotation::AnnotationLine;
use crate::cgt_errors::CgtError;
use crate::geometry::ArrowStyle;
use crate::measure::{difference_series, velocity_records, VelocityRecord};
use crate::model::CgtProject;

/// Scalars needed to turn pixel measurements into real-world values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementConfig {
    /// Real-world size of one pixel
    pub scale: f64,
    /// Frames per second of the video
    pub frame_rate: f64,
    #[serde(default)]
    pub resolution_units: Option<String>,
    #[serde(default)]
    pub arrow: ArrowStyle,
}

impl MeasurementConfig {
    pub fn new(scale: f64, frame_rate: f64) -> Self {
        MeasurementConfig {
            scale,
            frame_rate,
            resolution_units: None,
            arrow: ArrowStyle::default(),
        }
    }
    pub fn from_json_str(text: &str) -> Result<Self, CgtError> {
        Ok(serde_json::from_str(text)?)
    }
    /// Takes scale and frame rate from the project's resolution and frame rate
    pub fn from_project(project: &CgtProject) -> Result<Self, CgtError> {
        let scale = project
            .get_resolution()
            .ok_or(CgtError::MissingSetting("resolution"))?;
        let frame_rate = project
            .get_frame_rate()
            .ok_or(CgtError::MissingSetting("frame_rate"))?;
        Ok(MeasurementConfig {
            scale,
            frame_rate,
            resolution_units: project.get_resolution_units().map(str::to_string),
            arrow: ArrowStyle::default(),
        })
    }
    /// Growth speed of one crystal face between each pair of consecutive markings.
    ///
    /// `lines` must all mark the same face: a region usually holds several
    /// faces per frame, and two markings on one frame have no elapsed time.
    pub fn face_velocities(&self, lines: &[AnnotationLine]) -> Result<Vec<VelocityRecord>, CgtError> {
        let series = difference_series(lines);
        Ok(velocity_records(&series, self.scale, self.frame_rate)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let config = MeasurementConfig::from_json_str(
            r#"{"scale": 0.8, "frame_rate": 30, "arrow": {"length_cutoff": 4.0}}"#,
        )
        .unwrap();
        assert_eq!(config.scale, 0.8);
        assert_eq!(config.frame_rate, 30.0);
        assert_eq!(config.arrow.length_cutoff, 4.0);
        assert_eq!(config.arrow.head_length, crate::geometry::ARROW_HEAD_LENGTH);
        assert!(config.resolution_units.is_none());
    }

    #[test]
    fn test_from_json_missing_scale() {
        assert!(matches!(
            MeasurementConfig::from_json_str(r#"{"frame_rate": 30}"#),
            Err(CgtError::Json(_))
        ));
    }

    #[test]
    fn test_from_project() {
        let mut project = CgtProject::new();
        assert!(matches!(
            MeasurementConfig::from_project(&project),
            Err(CgtError::MissingSetting("resolution"))
        ));
        project.set_resolution(1.25, "nm");
        assert!(matches!(
            MeasurementConfig::from_project(&project),
            Err(CgtError::MissingSetting("frame_rate"))
        ));
        project.set_frame_rate(8.0);
        let config = MeasurementConfig::from_project(&project).unwrap();
        assert_eq!(config.scale, 1.25);
        assert_eq!(config.frame_rate, 8.0);
        assert_eq!(config.resolution_units.as_deref(), Some("nm"));
    }

    #[test]
    fn test_face_velocities() {
        use crate::utils::{LineSegment, Point};

        let face = LineSegment::from_coords(0.0, 10.0, 20.0, 10.0);
        let lines = [
            AnnotationLine::new(face, Point::new(0.0, 4.0), 20, 0),
            AnnotationLine::new(face, Point::new(0.0, 0.0), 0, 0),
        ];
        let config = MeasurementConfig::new(0.5, 10.0);
        let velocities = config.face_velocities(&lines).unwrap();
        assert_eq!(velocities.len(), 1);
        assert_eq!(velocities[0].time, 2.0);
        assert_eq!(velocities[0].distance, -2.0);
        assert_eq!(velocities[0].velocity, 1.0);

        let zero_fps = MeasurementConfig::new(0.5, 0.0);
        assert!(matches!(
            zero_fps.face_velocities(&lines),
            Err(CgtError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_face_velocities_two_faces_per_frame() {
        use crate::model::{Region, VideoAnalysisResultsStore, VideoSource};
        use crate::utils::{LineSegment, Point, Rect};
        use approx::assert_abs_diff_eq;

        let mut store = VideoAnalysisResultsStore::with_regions(
            VideoSource::new("ladkj.mp4", 8.0, 500, 800, 600),
            vec![Region::new(Rect::new(200.0, 450.0, 300.0, 225.0), 250, 500)],
        );
        let marking = |x1, y1, x2, y2, frame| {
            AnnotationLine::new(LineSegment::from_coords(x1, y1, x2, y2), Point::default(), frame, 0)
        };
        let face_one = [
            marking(100.0, 200.0, 250.0, 200.0, 250),
            marking(100.0, 225.0, 250.0, 225.0, 500),
        ];
        let face_two = [
            marking(200.0, 150.0, 200.0, 300.0, 250),
            marking(175.0, 150.0, 175.0, 300.0, 500),
        ];
        for line in face_one.iter().chain(face_two.iter()) {
            store.add_line(*line).unwrap();
        }

        let config = MeasurementConfig::new(0.5, 8.0);
        for face in [&face_one, &face_two] {
            let velocities = config.face_velocities(face).unwrap();
            assert_eq!(velocities.len(), 1);
            assert_eq!(velocities[0].time, 31.25);
            assert_abs_diff_eq!(velocities[0].distance, -12.5, epsilon = 1e-9);
            assert_abs_diff_eq!(velocities[0].velocity, 0.4, epsilon = 1e-9);
        }

        // all markings of the region taken as one face pair up same-frame lines
        let mixed: Vec<AnnotationLine> = store.get_lines(0).into_iter().copied().collect();
        assert!(matches!(
            config.face_velocities(&mixed),
            Err(CgtError::DivisionByZero(_))
        ));
    }
}
