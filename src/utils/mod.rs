//! Utility functions shared across layers.
//!
//! - [`url_check`] - Structural checks for URLs about to be shortened
//! - [`uptime`] - Uptime formatting for health reports

pub mod uptime;
pub mod url_check;
