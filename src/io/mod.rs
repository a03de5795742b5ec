//! Input/output operations and error handling
//!
//! Sheet files, command-line handling, progress and logging live here; the
//! conversion itself works on in-memory grids only.

/// Command-line interface and per-file processing
pub mod cli;
/// Constants and runtime options
pub mod configuration;
/// Error types
pub mod error;
/// BMP decoding and encoding
pub mod image;
/// Terminal logger setup
pub mod logging;
/// Batch progress display
pub mod progress;
