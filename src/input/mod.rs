//! Input Module
//!
//! Populates a `StudentRecord` from a text source.
//!
//! ## Input Format
//! ```text
//! <age> <first name> <last name> <standard>
//! ```
//! Tokens are whitespace separated and read in that fixed order.
//! Input is consumed a line at a time and reading stops as soon as the
//! fourth field is settled; anything after it is left unread.
//!
//! ## Failure Handling
//! - Permissive: failed fields keep their defaults, failures are reported
//!   in the `ReadOutcome`
//! - Strict: the first failed field is returned as `RecordError::Parse`

mod scanner;

pub use scanner::{ScanFailure, Scanned, Scanner};

use std::io::BufRead;

use tracing::debug;

use crate::config::{Config, InputMode};
use crate::error::{Field, RecordError, Result};
use crate::record::StudentRecord;

/// What happened while reading a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOutcome {
    failures: Vec<(Field, ScanFailure)>,
}

impl ReadOutcome {
    /// True when all four fields were extracted
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failed fields in input order
    pub fn failures(&self) -> &[(Field, ScanFailure)] {
        &self.failures
    }

    /// The field that caused the failure state, if any
    pub fn first_failure(&self) -> Option<(Field, ScanFailure)> {
        self.failures.first().copied()
    }
}

/// Read lines from `reader` until the record is settled, then extract it
///
/// Stops after the line holding the fourth field, or at end of input.
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_record<R: BufRead>(reader: &mut R, config: &Config) -> Result<(StudentRecord, ReadOutcome)> {
    let mut pending = String::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        // Blank lines before the first token carry nothing
        if pending.is_empty() && line.iter().all(|&b| scanner::is_space(b)) {
            continue;
        }
        pending.push_str(&String::from_utf8_lossy(&line));

        if !needs_more_input(&pending) {
            break;
        }
    }

    parse_record(&pending, config)
}

/// True while the buffered text ran out before all four fields were read
///
/// Any other failure is final no matter what follows.
fn needs_more_input(buffered: &str) -> bool {
    let (_, outcome) = scan(buffered);
    matches!(outcome.first_failure(), Some((_, ScanFailure::EndOfInput)))
}

/// Extract one record from an in-memory string
pub fn parse_record(input: &str, config: &Config) -> Result<(StudentRecord, ReadOutcome)> {
    let (record, outcome) = scan_record(input);

    match (config.input_mode, outcome.first_failure()) {
        (InputMode::Strict, Some((field, failure))) => Err(RecordError::Parse {
            field,
            reason: failure.describe().to_string(),
        }),
        (InputMode::Permissive, Some((field, failure))) => {
            debug!(
                %field,
                reason = failure.describe(),
                unread = outcome.failures().len() - 1,
                "input incomplete, keeping defaults"
            );
            Ok((record, outcome))
        }
        (_, None) => Ok((record, outcome)),
    }
}

/// Run the four extractions in input order, never failing
pub fn scan_record(input: &str) -> (StudentRecord, ReadOutcome) {
    let (record, outcome) = scan(input);

    debug!(
        age = record.age(),
        first_name = record.first_name(),
        last_name = record.last_name(),
        standard = record.standard(),
        complete = outcome.is_complete(),
        "scanned record"
    );

    (record, outcome)
}

fn scan(input: &str) -> (StudentRecord, ReadOutcome) {
    let mut scanner = Scanner::new(input);
    let mut record = StudentRecord::new();
    let mut outcome = ReadOutcome::default();

    for field in Field::INPUT_ORDER {
        let failure = match field {
            Field::Age => {
                let scanned = scanner.read_int();
                record.set_age(scanned.value);
                scanned.failure
            }
            Field::FirstName => {
                let scanned = scanner.read_word();
                record.set_first_name(scanned.value);
                scanned.failure
            }
            Field::LastName => {
                let scanned = scanner.read_word();
                record.set_last_name(scanned.value);
                scanned.failure
            }
            Field::Standard => {
                let scanned = scanner.read_int();
                record.set_standard(scanned.value);
                scanned.failure
            }
        };

        if let Some(failure) = failure {
            outcome.failures.push((field, failure));
        }
    }

    (record, outcome)
}
