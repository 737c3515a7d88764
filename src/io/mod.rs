//! Input/output: command line, batch orchestration, persistence and errors

/// Command-line arguments and the batch runner
pub mod cli;
/// Rendering constants and runtime defaults
pub mod configuration;
/// Batch orchestration and per-item outcomes
pub mod emitter;
/// Error types and context helpers
pub mod error;
/// JPEG encoding and file output
pub mod image;
/// Progress display
pub mod progress;
