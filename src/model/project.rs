use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::cgt_errors::CgtError;
use crate::model::VideoAnalysisResultsStore;

pub const PROGRAM_NAME: &str = "CGT";
pub const PROGRAM_DESCRIPTION: &str =
    "Semi-automatically tracks the growth of crystals from X-ray videos.";

/// A video file referenced by the project, with the name parts the reports use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoFile {
    pub full_path: PathBuf,
    pub no_path: String,
    pub no_extension: String,
}

impl VideoFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let no_path = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let no_extension = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        VideoFile {
            full_path: path.to_path_buf(),
            no_path,
            no_extension,
        }
    }
    pub fn directory(&self) -> Option<&Path> {
        self.full_path.parent()
    }
}

// Numbers may come back from older project files as strings
fn number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numeric {
        Number(f64),
        Text(String),
    }
    match Option::<Numeric>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Numeric::Number(value)) => Ok(Some(value)),
        Some(Numeric::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Project metadata and results. Every setter marks the project as changed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CgtProject {
    id: Option<Uuid>,
    prog: Option<String>,
    description: Option<String>,
    start_datetime: Option<DateTime<Utc>>,
    host: Option<String>,
    ip_address: Option<String>,
    operating_system: Option<String>,
    start_user: Option<String>,
    proj_name: Option<String>,
    proj_full_path: Option<PathBuf>,
    notes: Option<String>,
    enhanced_video: Option<VideoFile>,
    raw_video: Option<VideoFile>,
    stats_from_enhanced: bool,
    #[serde(default, deserialize_with = "number_or_string")]
    frame_rate: Option<f64>,
    #[serde(default, deserialize_with = "number_or_string")]
    resolution: Option<f64>,
    resolution_units: Option<String>,
    latest_report: Option<PathBuf>,
    results: Option<VideoAnalysisResultsStore>,
    #[serde(skip)]
    changed: bool,
}

impl Default for CgtProject {
    fn default() -> Self {
        CgtProject {
            id: None,
            prog: None,
            description: None,
            start_datetime: None,
            host: None,
            ip_address: None,
            operating_system: None,
            start_user: None,
            proj_name: None,
            proj_full_path: None,
            notes: None,
            enhanced_video: None,
            raw_video: None,
            stats_from_enhanced: false,
            frame_rate: None,
            resolution: None,
            resolution_units: None,
            latest_report: None,
            results: None,
            changed: false,
        }
    }
}

fn env_first(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| std::env::var(key).ok())
}

impl CgtProject {
    pub fn new() -> Self {
        CgtProject::default()
    }
    /// Fills in program details, start time, a fresh id and who/where the project started
    pub fn init_new_project(&mut self) {
        self.id = Some(Uuid::new_v4());
        self.prog = Some(PROGRAM_NAME.to_string());
        self.description = Some(PROGRAM_DESCRIPTION.to_string());
        self.start_datetime = Some(Utc::now());
        self.host = env_first(&["HOSTNAME", "COMPUTERNAME"]);
        self.operating_system = Some(std::env::consts::OS.to_string());
        self.start_user = env_first(&["USER", "USERNAME", "LOGNAME"]);
        self.changed = true;
        tracing::debug!(id = ?self.id, "new project initialised");
    }
    /// Reads a project from JSON text. The result starts unchanged
    pub fn from_json_str(text: &str) -> Result<Self, CgtError> {
        Ok(serde_json::from_str(text)?)
    }
    pub fn to_json_string(&self) -> Result<String, CgtError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn get_id(&self) -> Option<Uuid> {
        self.id
    }
    pub fn get_prog(&self) -> Option<&str> {
        self.prog.as_deref()
    }
    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn get_start_datetime(&self) -> Option<DateTime<Utc>> {
        self.start_datetime
    }
    pub fn get_host(&self) -> Option<&str> {
        self.host.as_deref()
    }
    /// Address of the machine the project started on. Not looked up by
    /// [`CgtProject::init_new_project`], the caller records it if wanted
    pub fn get_ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }
    pub fn set_ip_address(&mut self, address: &str) {
        self.ip_address = Some(address.to_string());
        self.changed = true
    }
    pub fn get_operating_system(&self) -> Option<&str> {
        self.operating_system.as_deref()
    }
    pub fn get_start_user(&self) -> Option<&str> {
        self.start_user.as_deref()
    }

    pub fn get_proj_name(&self) -> Option<&str> {
        self.proj_name.as_deref()
    }
    pub fn set_proj_name(&mut self, name: &str) {
        self.proj_name = Some(name.to_string());
        self.changed = true
    }
    pub fn get_proj_full_path(&self) -> Option<&Path> {
        self.proj_full_path.as_deref()
    }
    pub fn set_proj_full_path<P: AsRef<Path>>(&mut self, path: P) {
        self.proj_full_path = Some(path.as_ref().to_path_buf());
        self.changed = true
    }
    pub fn get_notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
    pub fn set_notes(&mut self, notes: &str) {
        self.notes = Some(notes.to_string());
        self.changed = true
    }
    pub fn get_enhanced_video(&self) -> Option<&VideoFile> {
        self.enhanced_video.as_ref()
    }
    pub fn set_enhanced_video<P: AsRef<Path>>(&mut self, path: P) {
        self.enhanced_video = Some(VideoFile::new(path));
        self.changed = true
    }
    pub fn get_raw_video(&self) -> Option<&VideoFile> {
        self.raw_video.as_ref()
    }
    pub fn set_raw_video<P: AsRef<Path>>(&mut self, path: P) {
        self.raw_video = Some(VideoFile::new(path));
        self.changed = true
    }
    pub fn get_stats_from_enhanced(&self) -> bool {
        self.stats_from_enhanced
    }
    pub fn set_stats_from_enhanced(&mut self, flag: bool) {
        self.stats_from_enhanced = flag;
        self.changed = true
    }
    pub fn get_frame_rate(&self) -> Option<f64> {
        self.frame_rate
    }
    pub fn set_frame_rate(&mut self, frame_rate: f64) {
        self.frame_rate = Some(frame_rate);
        self.changed = true
    }
    /// Real-world size of a pixel's edge
    pub fn get_resolution(&self) -> Option<f64> {
        self.resolution
    }
    pub fn set_resolution(&mut self, resolution: f64, units: &str) {
        self.resolution = Some(resolution);
        self.resolution_units = Some(units.to_string());
        self.changed = true
    }
    pub fn get_resolution_units(&self) -> Option<&str> {
        self.resolution_units.as_deref()
    }
    pub fn get_latest_report(&self) -> Option<&Path> {
        self.latest_report.as_deref()
    }
    pub fn set_latest_report<P: AsRef<Path>>(&mut self, path: P) {
        self.latest_report = Some(path.as_ref().to_path_buf());
        self.changed = true
    }
    pub fn get_results(&self) -> Option<&VideoAnalysisResultsStore> {
        self.results.as_ref()
    }
    /// Mutable access to the results. Changes made through it are tracked by the store itself
    pub fn get_results_mut(&mut self) -> Option<&mut VideoAnalysisResultsStore> {
        self.results.as_mut()
    }
    pub fn set_results(&mut self, results: VideoAnalysisResultsStore) {
        self.results = Some(results);
        self.changed = true
    }

    /// Marks the project changed, e.g. after restoring it from a backup
    pub fn set_changed(&mut self) {
        self.changed = true
    }
    /// Clears the changed state of the project and its results, e.g. after a save
    pub fn reset_changed(&mut self) {
        self.changed = false;
        if let Some(results) = self.results.as_mut() {
            results.reset_changed();
        }
    }
    /// True when the project or its results hold unsaved changes
    pub fn has_been_changed(&self) -> bool {
        match &self.results {
            Some(results) => self.changed || results.has_been_changed(),
            None => self.changed,
        }
    }
}
