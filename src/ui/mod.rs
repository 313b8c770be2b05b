//! User interface module - terminal output for the command-line tools.
//!
//! Progress goes through `tracing`; this module prints the final outcome
//! of a run (success lines, warnings, the single error diagnostic).

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_manual_push_instruction, display_publish_report, display_success,
    display_warning, format_publish_report,
};
