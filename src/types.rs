use std::ops::{Add, AddAssign};

use serde::Serialize;

/// One step of the minimum-cost path turning a source sequence into a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOp {
    Equal,
    Substitute,
    Insert,
    Delete,
}

impl EditOp {
    pub fn is_error(self) -> bool {
        !matches!(self, Self::Equal)
    }

    pub fn code(self) -> char {
        match self {
            Self::Equal => 'e',
            Self::Substitute => 's',
            Self::Insert => 'i',
            Self::Delete => 'd',
        }
    }

    /// Label shown in the operation row of a rendered alignment.
    /// Equal steps are left blank.
    pub fn alignment_label(self) -> &'static str {
        match self {
            Self::Equal => " ",
            Self::Substitute => "S",
            Self::Insert => "I",
            Self::Delete => "D",
        }
    }
}

/// `(errors, total)` accumulated for one error type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ErrorTally {
    pub errors: u64,
    pub total: u64,
}

impl ErrorTally {
    pub fn new(errors: u64, total: u64) -> Self {
        Self { errors, total }
    }

    pub fn rate_percent(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.errors as f64 / self.total as f64
        }
    }
}

impl Add for ErrorTally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            errors: self.errors.saturating_add(rhs.errors),
            total: self.total.saturating_add(rhs.total),
        }
    }
}

impl AddAssign for ErrorTally {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Rows of the error rate report, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    Sentence,
    Word,
    CopyWord,
    UppercaseWord,
    Digit,
    Punctuation,
    Symbol,
}

impl ErrorType {
    pub const ALL: [ErrorType; 7] = [
        Self::Sentence,
        Self::Word,
        Self::CopyWord,
        Self::UppercaseWord,
        Self::Digit,
        Self::Punctuation,
        Self::Symbol,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Sentence => "Sentence",
            Self::Word => "Word",
            Self::CopyWord => "Copy Word",
            Self::UppercaseWord => "Uppercase Word",
            Self::Digit => "Digit",
            Self::Punctuation => "Punctuation",
            Self::Symbol => "Symbol",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRate {
    pub error_type: ErrorType,
    pub label: String,
    pub errors: u64,
    pub total: u64,
    pub rate_percent: f64,
}

impl ErrorRate {
    pub fn from_tally(error_type: ErrorType, tally: ErrorTally) -> Self {
        Self {
            error_type,
            label: error_type.label().to_string(),
            errors: tally.errors,
            total: tally.total,
            rate_percent: tally.rate_percent(),
        }
    }
}
