//! Command-line interface for stitching one folder or a root of tile folders

use crate::collage::{CollageBuilder, CollageReport, CompositorConfig, OverlapPolicy};
use crate::grid::CoordinateRule;
use crate::io::configuration::{
    COLLAGE_FILE_NAME, DEFAULT_COORDINATE_FIELD, DEFAULT_ROOT, DEFAULT_SCALE, OUTPUT_EXTENSION,
};
use crate::io::error::{Result, StitchError, invalid_parameter};
use crate::io::progress::ProgressManager;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Where the coordinate pair sits among the dot-separated filename fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CoordinateLayout {
    /// `x` and `y` follow the first `--field` fields
    AfterPrefix,
    /// `x` and `y` precede the last `--field` fields
    BeforeSuffix,
}

/// Command-line choice of overlap handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverlapMode {
    /// Later tiles replace earlier ones in the same cell
    LastWriteWins,
    /// Fail when two tiles claim the same cell
    Reject,
}

#[derive(Parser, Debug)]
#[command(name = "tilestitch")]
#[command(
    author,
    version,
    about = "Stitch coordinate-named tile images into a single collage"
)]
/// Command-line arguments for the collage builder
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Root directory of tile folders, or one tile folder with --single
    #[arg(value_name = "TARGET", default_value = DEFAULT_ROOT)]
    pub target: PathBuf,

    /// Treat TARGET as a single tile folder and write collage.png inside it
    #[arg(short = 'S', long)]
    pub single: bool,

    /// Pixel edge length of one tile
    #[arg(short, long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Position of the coordinates in tile filenames
    #[arg(short, long, value_enum, default_value_t = CoordinateLayout::AfterPrefix)]
    pub coords: CoordinateLayout,

    /// Fields before (after-prefix) or after (before-suffix) the coordinates
    #[arg(short, long, default_value_t = DEFAULT_COORDINATE_FIELD)]
    pub field: usize,

    /// Handling of tiles that share a grid cell
    #[arg(short, long, value_enum, default_value_t = OverlapMode::LastWriteWins)]
    pub overlap: OverlapMode,

    /// Accept tiles whose size differs from scale x scale
    #[arg(long)]
    pub no_size_check: bool,

    /// Only rebuild collages that are older than one of their tiles
    #[arg(short, long)]
    pub update: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Coordinate rule selected by `--coords` and `--field`
    pub const fn coordinate_rule(&self) -> CoordinateRule {
        match self.coords {
            CoordinateLayout::AfterPrefix => CoordinateRule::AfterPrefix { skip: self.field },
            CoordinateLayout::BeforeSuffix => CoordinateRule::BeforeSuffix {
                trailing: self.field,
            },
        }
    }

    /// Compositor settings selected by `--scale`, `--overlap` and `--no-size-check`
    pub const fn compositor_config(&self) -> CompositorConfig {
        CompositorConfig {
            scale: self.scale,
            overlap: match self.overlap {
                OverlapMode::LastWriteWins => OverlapPolicy::LastWriteWins,
                OverlapMode::Reject => OverlapPolicy::Reject,
            },
            verify_tile_size: !self.no_size_check,
        }
    }

    /// Check if up-to-date collages should be skipped
    pub const fn skip_up_to_date(&self) -> bool {
        self.update
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// One tile folder and the collage file it produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderJob {
    /// Folder holding the tiles
    pub folder: PathBuf,
    /// Collage file to write
    pub output: PathBuf,
}

/// Orchestrates sequential collage builds with progress tracking
pub struct FolderProcessor {
    cli: Cli,
    builder: CollageBuilder,
    progress_manager: Option<ProgressManager>,
}

impl FolderProcessor {
    /// Create a new folder processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        Self::with_progress(cli, progress_manager)
    }

    /// Create a folder processor with an explicit progress display
    pub fn with_progress(cli: Cli, progress_manager: Option<ProgressManager>) -> Self {
        let mut builder = CollageBuilder::new(cli.coordinate_rule(), cli.compositor_config());
        if cli.single {
            builder = builder.excluding(COLLAGE_FILE_NAME);
        }

        Self {
            cli,
            builder,
            progress_manager,
        }
    }

    /// Builder used for every folder
    pub const fn builder(&self) -> &CollageBuilder {
        &self.builder
    }

    /// Build every collage selected by the CLI arguments
    ///
    /// Folders are processed in path order and the first failure aborts the run
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or any folder build fails
    pub fn process(&mut self) -> Result<Vec<CollageReport>> {
        self.builder.config().validate()?;
        let jobs = self.collect_jobs()?;

        if jobs.is_empty() {
            tracing::info!(root = %self.cli.target.display(), "nothing to stitch");
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        let mut reports = Vec::with_capacity(jobs.len());
        for (index, job) in jobs.iter().enumerate() {
            reports.push(self.process_folder(job, index)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    /// Folders to build, after update-mode filtering
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a directory or cannot be listed
    pub fn collect_jobs(&self) -> Result<Vec<FolderJob>> {
        let target = &self.cli.target;
        if !target.is_dir() {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be an existing directory",
            ));
        }

        let folders = if self.cli.single {
            vec![target.clone()]
        } else {
            Self::list_subfolders(target)?
        };

        let mut jobs = Vec::with_capacity(folders.len());
        for folder in folders {
            let output = Self::get_output_path(&folder, self.cli.single);
            let job = FolderJob { folder, output };
            if self.should_process(&job)? {
                jobs.push(job);
            }
        }
        Ok(jobs)
    }

    fn list_subfolders(root: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(root).map_err(|e| StitchError::FileSystem {
            path: root.to_path_buf(),
            operation: "read directory",
            source: e,
        })?;

        let mut folders = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let hidden = path
                .file_name()
                .is_some_and(|name| name.to_string_lossy().starts_with('.'));
            if path.is_dir() && !hidden {
                folders.push(path);
            }
        }
        folders.sort();
        Ok(folders)
    }

    fn should_process(&self, job: &FolderJob) -> Result<bool> {
        if !self.cli.skip_up_to_date() {
            return Ok(true);
        }

        let Some(output_time) = modified_time(&job.output) else {
            return Ok(true);
        };

        for tile in self.builder.tile_paths(&job.folder)? {
            let newer = modified_time(&tile).is_none_or(|tile_time| tile_time > output_time);
            if newer {
                return Ok(true);
            }
        }

        tracing::info!(folder = %job.folder.display(), "skipping, collage is up to date");
        Ok(false)
    }

    fn process_folder(&mut self, job: &FolderJob, index: usize) -> Result<CollageReport> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_folder(index, &job.folder);
        }

        let progress = &mut self.progress_manager;
        let report = self
            .builder
            .build_to(&job.folder, &job.output, |pasted, total| {
                if let Some(pm) = progress.as_mut() {
                    pm.update_tiles(index, pasted, total);
                }
            })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_folder(index);
        }

        Ok(report)
    }

    /// Collage path for a folder
    ///
    /// Batch mode writes `<folder>.png` beside the folder; single mode writes
    /// `collage.png` inside it
    pub fn get_output_path(folder: &Path, single: bool) -> PathBuf {
        if single {
            return folder.join(COLLAGE_FILE_NAME);
        }

        let name = folder.file_name().unwrap_or(folder.as_os_str());
        let output_name = format!("{}.{OUTPUT_EXTENSION}", name.to_string_lossy());

        folder
            .parent()
            .map_or_else(|| PathBuf::from(&output_name), |parent| parent.join(&output_name))
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
}
