//! # student-record
//!
//! A single student record and the small program around it:
//! - `StudentRecord` with plain setters and getters
//! - Comma-delimited rendering in fixed field order
//! - Formatted extraction of the four fields from a text source
//! - A five-line report written to any `Write`
//!
//! ## Data Flow
//!
//! ```text
//!   stdin ──► Scanner ──► StudentRecord ──► Report ──► stdout
//!             (input)       (record)        (report)
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod input;
pub mod report;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Field, RecordError, Result};
pub use config::{Config, InputMode};
pub use record::StudentRecord;
pub use input::{read_record, ReadOutcome};
pub use report::{render_report, write_report};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
