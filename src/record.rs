//! Student record
//!
//! Plain data with setters, getters and a comma-delimited rendering.

use std::fmt;

/// Separator used by [`StudentRecord::to_delimited_string`]
pub const DELIMITER: char = ',';

/// One student's data for the duration of a run
///
/// No invariants are enforced: negative ages and empty names are kept
/// as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentRecord {
    age: i32,
    standard: i32,
    first_name: String,
    last_name: String,
}

impl StudentRecord {
    /// Create an empty record (zeroes and empty names)
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    pub fn set_standard(&mut self, standard: i32) {
        self.standard = standard;
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn age(&self) -> i32 {
        self.age
    }

    /// Grade or class level
    pub fn standard(&self) -> i32 {
        self.standard
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// `last_name, first_name`
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Render as `age,first_name,last_name,standard`
    ///
    /// Fields are not escaped. A name containing a comma makes the output
    /// ambiguous.
    pub fn to_delimited_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}{d}{}",
            self.age,
            self.first_name,
            self.last_name,
            self.standard,
            d = DELIMITER
        )
    }
}
