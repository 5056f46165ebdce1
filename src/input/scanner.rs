//! Token scanner
//!
//! Formatted extraction over a text buffer.
//!
//! ## Extraction Rules
//! - Whitespace is skipped before every field
//! - Integer: optional sign + decimal digits, stops at the first non-digit
//! - Word: maximal run of non-whitespace characters
//! - A failed extraction latches; every later extraction fails without
//!   consuming input

/// Why an extraction failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanFailure {
    /// Nothing left but whitespace
    EndOfInput,

    /// Next characters do not start a decimal integer
    NotAnInteger,

    /// Integer does not fit in 32 bits (value saturates)
    OutOfRange,

    /// An earlier extraction already failed
    PriorFailure,
}

impl ScanFailure {
    pub fn describe(&self) -> &'static str {
        match self {
            ScanFailure::EndOfInput => "unexpected end of input",
            ScanFailure::NotAnInteger => "expected an integer",
            ScanFailure::OutOfRange => "integer out of range",
            ScanFailure::PriorFailure => "not read after an earlier failure",
        }
    }
}

/// Result of one extraction
///
/// `value` is always usable: the extracted value on success, the default
/// (or the saturated integer) on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanned<T> {
    pub value: T,
    pub failure: Option<ScanFailure>,
}

impl<T> Scanned<T> {
    fn ok(value: T) -> Self {
        Self { value, failure: None }
    }

    fn failed(value: T, failure: ScanFailure) -> Self {
        Self {
            value,
            failure: Some(failure),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }
}

/// Cursor over an input buffer with a sticky failure flag
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// True once any extraction has failed
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Unconsumed input
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Extract a signed 32-bit decimal integer
    pub fn read_int(&mut self) -> Scanned<i32> {
        if self.failed {
            return Scanned::failed(0, ScanFailure::PriorFailure);
        }
        self.skip_whitespace();

        let bytes = self.input.as_bytes();
        if self.pos >= bytes.len() {
            return self.fail(0, ScanFailure::EndOfInput);
        }

        let mut cursor = self.pos;
        let negative = match bytes[cursor] {
            b'-' => {
                cursor += 1;
                true
            }
            b'+' => {
                cursor += 1;
                false
            }
            _ => false,
        };

        let digits_start = cursor;
        let mut magnitude: i64 = 0;
        let mut overflow = false;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            if !overflow {
                magnitude = magnitude * 10 + i64::from(bytes[cursor] - b'0');
                // i32::MIN magnitude is one past i32::MAX
                if magnitude > i64::from(i32::MAX) + 1 {
                    overflow = true;
                }
            }
            cursor += 1;
        }

        if cursor == digits_start {
            return self.fail(0, ScanFailure::NotAnInteger);
        }
        self.pos = cursor;

        let signed = if negative { -magnitude } else { magnitude };
        if overflow || signed > i64::from(i32::MAX) || signed < i64::from(i32::MIN) {
            let saturated = if negative { i32::MIN } else { i32::MAX };
            return self.fail(saturated, ScanFailure::OutOfRange);
        }

        Scanned::ok(signed as i32)
    }

    /// Extract a whitespace-delimited word
    pub fn read_word(&mut self) -> Scanned<String> {
        if self.failed {
            return Scanned::failed(String::new(), ScanFailure::PriorFailure);
        }
        self.skip_whitespace();

        let start = self.pos;
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && !is_space(bytes[self.pos]) {
            self.pos += 1;
        }

        if self.pos == start {
            return self.fail(String::new(), ScanFailure::EndOfInput);
        }
        Scanned::ok(self.input[start..self.pos].to_string())
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && is_space(bytes[self.pos]) {
            self.pos += 1;
        }
    }

    fn fail<T>(&mut self, value: T, failure: ScanFailure) -> Scanned<T> {
        self.failed = true;
        Scanned::failed(value, failure)
    }
}

/// Space, tab, newline, vertical tab, form feed, carriage return
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
