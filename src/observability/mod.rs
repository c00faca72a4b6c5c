//! Structured logging to a rotating file.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFileWriter → <data_dir>/adboard.log
//! ```
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option (`ADBOARD_TRACE_LEVEL`, `--trace-level`)
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
pub mod init;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
