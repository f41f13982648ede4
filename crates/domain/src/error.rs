// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required text field was empty after trimming.
    EmptyField {
        /// The name of the field.
        field: &'static str,
    },
    /// The timezone name is not a known IANA zone.
    InvalidTimezone(String),
    /// A patrol stop was closed a second time.
    StopAlreadyClosed {
        /// The location of the stop.
        location: String,
    },
    /// An instant could not be represented after arithmetic or conversion.
    TimestampOutOfRange {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "The {field} must not be empty"),
            Self::InvalidTimezone(name) => write!(f, "Unknown timezone '{name}'"),
            Self::StopAlreadyClosed { location } => {
                write!(f, "The stop at '{location}' has already been closed")
            }
            Self::TimestampOutOfRange { operation } => {
                write!(f, "Timestamp out of range while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
