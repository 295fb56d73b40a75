//! Multi-folder progress tracking with automatic batching for large runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Display state of one folder: name, tiles pasted, tiles total
#[derive(Debug, Clone, Default)]
struct FolderState {
    name: String,
    pasted: usize,
    total: usize,
}

/// Coordinates progress display for batch runs
///
/// Shows one tile bar per folder for small runs, and adds a folder-level bar
/// once the run holds more folders than can be shown individually
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    folder_bars: Vec<ProgressBar>,
    folder_states: Vec<FolderState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Folders: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            folder_bars: Vec::new(),
            folder_states: Vec::new(),
        }
    }

    /// Create a manager that draws nothing, for tests and redirected output
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(indicatif::ProgressDrawTarget::hidden()),
            batch_bar: None,
            folder_bars: Vec::new(),
            folder_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on folder count
    pub fn initialize(&mut self, folder_count: usize) {
        if folder_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(folder_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = folder_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(TILE_STYLE.clone());
            self.folder_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Register the folder about to be composited
    pub fn start_folder(&mut self, index: usize, folder: &Path) {
        let display_name = folder
            .file_name()
            .unwrap_or(folder.as_os_str())
            .to_string_lossy()
            .to_string();
        if index >= self.folder_states.len() {
            self.folder_states.resize(index + 1, FolderState::default());
        }
        if let Some(state) = self.folder_states.get_mut(index) {
            *state = FolderState {
                name: display_name,
                pasted: 0,
                total: 0,
            };
        }
        self.update_bars();
    }

    /// Report tiles pasted so far out of the folder total
    pub fn update_tiles(&mut self, index: usize, pasted: usize, total: usize) {
        if let Some(state) = self.folder_states.get_mut(index) {
            state.pasted = pasted;
            state.total = total;
        }
        self.update_bars();
    }

    /// Mark a folder as written and advance the batch bar
    pub fn complete_folder(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.folder_states.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.pasted = state.total;
        }
        self.update_bars();
    }

    /// Number of folders that have been started
    pub fn started(&self) -> usize {
        self.folder_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .count()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All folders stitched");
        }
        let _ = self.multi_progress.clear();
    }

    /// Point the bars at the most recently started folders
    fn update_bars(&self) {
        let active: Vec<&FolderState> = self
            .folder_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, state) in visible.iter().enumerate() {
            if let Some(bar) = self.folder_bars.get(bar_idx) {
                bar.set_length(state.total as u64);
                bar.set_position(state.pasted as u64);
                let width = state.total.to_string().len();
                bar.set_message(format!("{:>width$}/{}", state.pasted, state.total));
                bar.set_prefix(state.name.clone());
            }
        }

        for bar_idx in visible.len()..self.folder_bars.len() {
            if let Some(bar) = self.folder_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
