//! indentcheck - Detector for cumulative indentation drift in terminal captures
//!
//! Inspects captured terminal output for continuation lines whose indentation
//! grows line-over-line instead of staying constant.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod analyze;
pub mod cli;
pub mod config;
pub mod error;
pub mod sanitize;

// Re-export commonly used types
pub use analyze::{analyze_capture, AnalysisSummary};
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::Result;
pub use sanitize::strip_controls;
