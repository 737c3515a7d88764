//! Batch orchestration: classify, render and persist every catalog item
//!
//! The batch either cannot start (registry does not cover the rule table, or
//! the output directory cannot be created) and returns an error before any
//! write, or it runs to completion and reports each item's outcome. A failed
//! item never stops the items after it.

use crate::catalog::{Catalog, Item, Protection};
use crate::classify::{RuleTable, ThemeKey};
use crate::io::error::{PlacardError, Result, WithPath, invalid_parameter};
use crate::io::image::save_jpeg;
use crate::render::Renderer;
use crate::theme::ThemeRegistry;
use std::path::PathBuf;

/// What happened to one item
#[derive(Debug)]
pub enum ItemOutcome {
    /// A thumbnail was written, replacing any earlier file
    Written {
        /// Destination path
        path: PathBuf,
        /// Theme the item was drawn with
        theme: ThemeKey,
    },
    /// A protected file already existed and was left untouched
    Skipped {
        /// Destination path
        path: PathBuf,
    },
    /// Rendering or writing failed; the batch moved on
    Failed {
        /// Cause of the failure
        error: PlacardError,
    },
}

/// Outcome of one item, keyed by its identity
#[derive(Debug)]
pub struct ItemReport {
    /// Item identifier
    pub identifier: String,
    /// Destination filename from the catalog
    pub filename: String,
    /// What happened
    pub outcome: ItemOutcome,
}

/// Per-item outcomes of a batch that ran to completion
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Reports in catalog order
    pub items: Vec<ItemReport>,
}

impl BatchReport {
    /// Number of thumbnails written
    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Written { .. }))
    }

    /// Number of protected files left in place
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Skipped { .. }))
    }

    /// Number of items that failed
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Failed { .. }))
    }

    /// Whether any item failed
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// Failed items with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&ItemReport, &PlacardError)> {
        self.items.iter().filter_map(|report| match &report.outcome {
            ItemOutcome::Failed { error } => Some((report, error)),
            _ => None,
        })
    }

    fn count(&self, predicate: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.items.iter().filter(|r| predicate(&r.outcome)).count()
    }
}

/// Drives one batch over read-only rules, registry and renderer
pub struct CatalogEmitter<'a> {
    rules: &'a RuleTable,
    registry: &'a ThemeRegistry,
    renderer: &'a Renderer,
    protection: Protection,
    output_dir: PathBuf,
}

impl<'a> CatalogEmitter<'a> {
    /// Emitter writing into `output_dir` with nothing protected
    pub fn new(
        rules: &'a RuleTable,
        registry: &'a ThemeRegistry,
        renderer: &'a Renderer,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            rules,
            registry,
            renderer,
            protection: Protection::Nothing,
            output_dir: output_dir.into(),
        }
    }

    /// Replace the protection predicate
    #[must_use]
    pub fn with_protection(mut self, protection: Protection) -> Self {
        self.protection = protection;
        self
    }

    /// Theme for an item: its pinned theme, else the rule table's verdict
    pub fn resolve_theme<'i>(&'i self, item: &'i Item) -> &'i ThemeKey {
        item.theme
            .as_ref()
            .unwrap_or_else(|| self.rules.classify(&item.identifier))
    }

    /// Destination path: the catalog filename under the output directory
    pub fn destination(&self, item: &Item) -> PathBuf {
        self.output_dir.join(&item.filename)
    }

    /// Check configuration and create the output directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A theme reachable from the rules or pinned by an item is unregistered
    /// - An item has a blank filename
    /// - The output directory cannot be created
    pub fn prepare(&self, catalog: &Catalog) -> Result<()> {
        if let Some(item) = catalog.iter().find(|item| item.filename.trim().is_empty()) {
            return Err(invalid_parameter(
                "filename",
                &item.identifier,
                &"item has a blank filename",
            ));
        }
        self.registry.ensure_covers(self.rules.theme_keys())?;
        self.registry.ensure_covers(catalog.pinned_themes())?;
        std::fs::create_dir_all(&self.output_dir).with_path(&self.output_dir, "create directory")
    }

    /// Run the batch without observing progress
    ///
    /// # Errors
    ///
    /// See [`CatalogEmitter::run_with`]
    pub fn run(&self, catalog: &Catalog) -> Result<BatchReport> {
        self.run_with(catalog, |_, _| {})
    }

    /// Run the batch, calling `observe` after each item
    ///
    /// # Errors
    ///
    /// Returns an error only when the batch cannot proceed at all: see
    /// [`CatalogEmitter::prepare`]. Per-item failures are recorded in the
    /// report instead.
    pub fn run_with(
        &self,
        catalog: &Catalog,
        mut observe: impl FnMut(usize, &ItemReport),
    ) -> Result<BatchReport> {
        self.prepare(catalog)?;

        let mut report = BatchReport {
            items: Vec::with_capacity(catalog.len()),
        };

        for (index, item) in catalog.iter().enumerate() {
            let outcome = match self.emit(item) {
                Ok(outcome) => outcome,
                Err(error) if error.is_fatal() => return Err(error),
                Err(error) => {
                    tracing::warn!(id = %item.identifier, %error, "item failed");
                    ItemOutcome::Failed { error }
                }
            };
            let item_report = ItemReport {
                identifier: item.identifier.clone(),
                filename: item.filename.clone(),
                outcome,
            };
            observe(index, &item_report);
            report.items.push(item_report);
        }

        tracing::info!(
            written = report.written(),
            skipped = report.skipped(),
            failed = report.failed(),
            "batch complete"
        );
        Ok(report)
    }

    fn emit(&self, item: &Item) -> Result<ItemOutcome> {
        let path = self.destination(item);

        if self.protection.protects(item) && path.exists() {
            tracing::info!(path = %path.display(), "skipping protected file");
            return Ok(ItemOutcome::Skipped { path });
        }

        let theme = self.resolve_theme(item);
        let style = self.registry.lookup(theme)?;
        tracing::debug!(id = %item.identifier, %theme, "classified");

        let canvas = self.renderer.render(item, theme, style);
        save_jpeg(&canvas, &path)?;
        tracing::info!(path = %path.display(), %theme, "wrote thumbnail");

        Ok(ItemOutcome::Written {
            path,
            theme: theme.clone(),
        })
    }
}
