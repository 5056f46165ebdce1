//! Report output
//!
//! ## Layout
//! ```text
//! <age>
//! <last name>, <first name>
//! <standard>
//!
//! <age>,<first name>,<last name>,<standard>
//! ```
//! The last line has no trailing newline.

use std::io::Write;

use crate::error::Result;
use crate::record::StudentRecord;

/// Write the report for `record` and flush
pub fn write_report<W: Write>(writer: &mut W, record: &StudentRecord) -> Result<()> {
    writeln!(writer, "{}", record.age())?;
    writeln!(writer, "{}", record.display_name())?;
    writeln!(writer, "{}", record.standard())?;
    writeln!(writer)?;
    write!(writer, "{}", record.to_delimited_string())?;
    writer.flush()?;
    Ok(())
}

/// Render the report to a string
pub fn render_report(record: &StudentRecord) -> String {
    format!(
        "{}\n{}\n{}\n\n{}",
        record.age(),
        record.display_name(),
        record.standard(),
        record.to_delimited_string()
    )
}
