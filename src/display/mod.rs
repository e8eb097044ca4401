//! Display formatting for terminal output
//!
//! Label lookup per locale, the shared table/bar helpers used when
//! reports are rendered for the terminal, and plain record listings.

pub mod labels;
pub mod records;
pub mod report;

pub use labels::{Label, Labels, Locale};
