use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::annotation::{lines_from_records, points_from_records, AnnotationLine, AnnotationPoint};
use crate::cgt_errors::CgtError;
use crate::utils::Rect;

/// The video being analysed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSource {
    pub name: String,
    pub frame_rate: f64,
    pub frame_count: usize,
    pub width: u32,
    pub height: u32,
}

impl VideoSource {
    pub fn new(name: &str, frame_rate: f64, frame_count: usize, width: u32, height: u32) -> Self {
        VideoSource {
            name: name.to_string(),
            frame_rate,
            frame_count,
            width,
            height,
        }
    }
}

/// Rectangular area of interest followed over a span of frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub rect: Rect,
    pub start_frame: usize,
    pub stop_frame: usize,
}

impl Region {
    pub fn new(rect: Rect, start_frame: usize, stop_frame: usize) -> Self {
        Region {
            rect,
            start_frame,
            stop_frame,
        }
    }
}

/// Stored form of [`VideoAnalysisResultsStore`], checked before use
#[derive(Deserialize)]
struct StoreData {
    video: VideoSource,
    #[serde(default)]
    regions: Vec<Region>,
    #[serde(default)]
    lines: Vec<AnnotationLine>,
    #[serde(default)]
    points: Vec<AnnotationPoint>,
}

impl TryFrom<StoreData> for VideoAnalysisResultsStore {
    type Error = CgtError;

    fn try_from(data: StoreData) -> Result<Self, Self::Error> {
        let mut store = VideoAnalysisResultsStore::with_regions(data.video, data.regions);
        for line in data.lines {
            store.add_line(line)?;
        }
        for point in data.points {
            store.add_point(point)?;
        }
        store.reset_changed();
        Ok(store)
    }
}

/// Regions and the annotations marked inside them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoreData")]
pub struct VideoAnalysisResultsStore {
    video: VideoSource,
    regions: Vec<Region>,
    lines: Vec<AnnotationLine>,
    points: Vec<AnnotationPoint>,
    #[serde(skip)]
    changed: bool,
}

impl VideoAnalysisResultsStore {
    pub fn new(video: VideoSource) -> Self {
        VideoAnalysisResultsStore {
            video,
            regions: Vec::new(),
            lines: Vec::new(),
            points: Vec::new(),
            changed: false,
        }
    }
    pub fn with_regions(video: VideoSource, regions: Vec<Region>) -> Self {
        VideoAnalysisResultsStore {
            regions,
            ..VideoAnalysisResultsStore::new(video)
        }
    }
    pub fn video(&self) -> &VideoSource {
        &self.video
    }
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
    pub fn number_of_regions(&self) -> usize {
        self.regions.len()
    }
    /// Adds a region and returns its index
    pub fn add_region(&mut self, region: Region) -> usize {
        self.regions.push(region);
        self.changed = true;
        tracing::debug!(index = self.regions.len() - 1, "region added");
        self.regions.len() - 1
    }
    fn check_region(&self, index: usize) -> Result<(), CgtError> {
        if index >= self.regions.len() {
            return Err(CgtError::UnknownRegion {
                index,
                count: self.regions.len(),
            });
        }
        Ok(())
    }
    pub fn add_line(&mut self, line: AnnotationLine) -> Result<(), CgtError> {
        self.check_region(line.get_region())?;
        self.lines.push(line);
        self.changed = true;
        Ok(())
    }
    pub fn add_point(&mut self, point: AnnotationPoint) -> Result<(), CgtError> {
        self.check_region(point.get_region())?;
        self.points.push(point);
        self.changed = true;
        Ok(())
    }
    pub fn get_lines(&self, region: usize) -> Vec<&AnnotationLine> {
        self.lines
            .iter()
            .filter(|line| line.get_region() == region)
            .collect()
    }
    pub fn get_points(&self, region: usize) -> Vec<&AnnotationPoint> {
        self.points
            .iter()
            .filter(|point| point.get_region() == region)
            .collect()
    }
    /// Sorted frames holding at least one annotation in the region
    pub fn frames_for_region(&self, region: usize) -> Vec<usize> {
        let line_frames = self.get_lines(region).into_iter().map(|l| l.get_frame());
        let point_frames = self.get_points(region).into_iter().map(|p| p.get_frame());
        line_frames.chain(point_frames).sorted().dedup().collect()
    }
    /// Adds line records, skipping malformed ones and ones naming an unknown region.
    /// Returns how many were added
    pub fn load_lines<R, S>(&mut self, records: &[R]) -> usize
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let batch = lines_from_records(records);
        let mut added = 0;
        for line in batch.items {
            match self.add_line(line) {
                Ok(()) => added += 1,
                Err(err) => tracing::warn!(%err, "skipping line"),
            }
        }
        added
    }
    pub fn load_points<R, S>(&mut self, records: &[R]) -> usize
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let batch = points_from_records(records);
        let mut added = 0;
        for point in batch.items {
            match self.add_point(point) {
                Ok(()) => added += 1,
                Err(err) => tracing::warn!(%err, "skipping point"),
            }
        }
        added
    }
    pub fn set_changed(&mut self) {
        self.changed = true
    }
    pub fn reset_changed(&mut self) {
        self.changed = false
    }
    pub fn has_been_changed(&self) -> bool {
        self.changed
    }
}
