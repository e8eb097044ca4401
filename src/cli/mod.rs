//! CLI command handlers
//!
//! Bridges the clap argument parsing with the reporting engine.

pub mod list;
pub mod report;

pub use list::{handle_list_command, ListArgs, ListKind};
pub use report::{handle_report_command, ReportArgs, ReportKind};
