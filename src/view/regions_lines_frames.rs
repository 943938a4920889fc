use crate::model::VideoAnalysisResultsStore;

/// Contents of the three browsing lists: regions, lines of the selected region,
/// and frames of the selected region that hold annotations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionsLinesFramesView {
    regions: Vec<String>,
    lines: Vec<String>,
    frames: Vec<String>,
    selected_region: Option<usize>,
}

impl RegionsLinesFramesView {
    pub fn new() -> Self {
        RegionsLinesFramesView::default()
    }
    /// Builds the view and fills the regions list from `store`
    pub fn with_data_source(store: &VideoAnalysisResultsStore) -> Self {
        let mut view = RegionsLinesFramesView::new();
        view.display_data(store);
        view
    }
    /// Appends one entry per region with its line count
    pub fn display_data(&mut self, store: &VideoAnalysisResultsStore) {
        for i in 0..store.number_of_regions() {
            let l_count = store.get_lines(i).len();
            let item = if l_count > 0 {
                format!("region {} {} lines", i, l_count)
            } else {
                format!("region {} no lines", i)
            };
            self.regions.push(item);
        }
    }
    /// Replaces whatever was shown with the contents of `store`
    pub fn set_data_source(&mut self, store: &VideoAnalysisResultsStore) {
        self.clear();
        self.display_data(store);
    }
    /// Fills the lines and frames lists for region `index`. Returns false for an unknown region
    pub fn select_region(&mut self, store: &VideoAnalysisResultsStore, index: usize) -> bool {
        self.lines.clear();
        self.frames.clear();
        if index >= store.number_of_regions() {
            self.selected_region = None;
            return false;
        }
        self.selected_region = Some(index);
        self.lines = store
            .get_lines(index)
            .iter()
            .enumerate()
            .map(|(j, line)| format!("line {} frame {}", j, line.get_frame()))
            .collect();
        self.frames = store
            .frames_for_region(index)
            .iter()
            .map(|frame| format!("frame {}", frame))
            .collect();
        true
    }
    pub fn clear(&mut self) {
        self.regions.clear();
        self.lines.clear();
        self.frames.clear();
        self.selected_region = None;
    }
    pub fn regions(&self) -> &[String] {
        &self.regions
    }
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
    pub fn frames(&self) -> &[String] {
        &self.frames
    }
    pub fn selected_region(&self) -> Option<usize> {
        self.selected_region
    }
}
