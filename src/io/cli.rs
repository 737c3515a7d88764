//! Command-line interface for running one thumbnail batch

use crate::catalog::{Catalog, Preset, Protection};
use crate::io::configuration::{DEFAULT_OUTPUT_DIR, DEFAULT_SEED};
use crate::io::emitter::{BatchReport, CatalogEmitter};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::render::{Renderer, load_typeface};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Parser, Debug)]
#[command(name = "placard")]
#[command(
    author,
    version,
    about = "Render themed placeholder thumbnails for a content catalog"
)]
/// Command-line arguments for the thumbnail batch
pub struct Cli {
    /// Built-in catalog, rules and styles to use
    #[arg(short, long, value_enum, default_value_t = Preset::Stories)]
    pub preset: Preset,

    /// JSON catalog replacing the preset's items
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Directory thumbnails are written to
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Preferred TrueType/OpenType font; the built-in font is used if unusable
    #[arg(short, long, value_name = "FILE", env = "PLACARD_FONT")]
    pub font: Option<PathBuf>,

    /// Seed for decorative randomness
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Keep existing thumbnails of items numbered up to N
    #[arg(long, value_name = "N", conflicts_with = "no_protect")]
    pub protect_through: Option<u32>,

    /// Overwrite every existing thumbnail
    #[arg(long)]
    pub no_protect: bool,

    /// Suppress progress output and informational logs
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log every classification decision
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Protection predicate after command-line overrides
    pub const fn protection(&self) -> Protection {
        if self.no_protect {
            Protection::Nothing
        } else if let Some(limit) = self.protect_through {
            Protection::NumericIdAtMost(limit)
        } else {
            self.preset.protection()
        }
    }

    /// Default log filter; `RUST_LOG` takes precedence
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Install the global log subscriber, writing to stderr
    ///
    /// With a progress manager, each log line suspends its bar so the two
    /// never interleave. Does nothing if a subscriber is already installed.
    pub fn init_tracing(&self, progress: Option<&ProgressManager>) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.log_level()));
        let writer = match progress {
            Some(pm) => {
                let stderr = pm.log_writer();
                BoxMakeWriter::new(move || stderr.clone())
            }
            None => BoxMakeWriter::new(std::io::stderr),
        };
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(false)
            .try_init();
    }
}

/// Runs one batch as configured on the command line
pub struct BatchRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchRunner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Install logging that cooperates with this runner's progress bar
    pub fn init_tracing(&self) {
        self.cli.init_tracing(self.progress_manager.as_ref());
    }

    /// Items to render: the catalog file if given, else the preset's
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be read or parsed
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.cli.catalog {
            Some(path) => Catalog::from_json_path(path),
            None => Ok(self.cli.preset.catalog()),
        }
    }

    /// Render and write every item
    ///
    /// # Errors
    ///
    /// Returns an error if the batch cannot start: unreadable catalog,
    /// incomplete theme registry, or an output directory that cannot be created.
    /// Individual item failures are reported in the returned [`BatchReport`].
    pub fn process(&mut self) -> Result<BatchReport> {
        let catalog = self.load_catalog()?;
        let rules = self.cli.preset.rules();
        let registry = self.cli.preset.registry();
        let typeface = load_typeface(self.cli.font.as_deref());
        let renderer = Renderer::new(typeface, self.cli.preset.profile()).with_seed(self.cli.seed);

        let emitter = CatalogEmitter::new(&rules, &registry, &renderer, &self.cli.output)
            .with_protection(self.cli.protection());

        tracing::info!(
            items = catalog.len(),
            output = %self.cli.output.display(),
            font = renderer.typeface().name(),
            "starting batch"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(catalog.len());
        }

        let progress = &mut self.progress_manager;
        let report = emitter.run_with(&catalog, |_, item_report| {
            if let Some(pm) = progress.as_mut() {
                pm.record(item_report);
            }
        })?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(report)
    }
}
