// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::CommandKind;
use patrol_log_domain::DomainError;

/// Lifecycle rules a command can break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Precondition {
    /// `start` while a mission is already running.
    MissionAlreadyActive {
        /// The type of the running mission.
        mission_type: String,
    },
    /// A mission-scoped command while idle.
    NoActiveMission,
    /// `onsite` while already on site.
    AlreadyOnSite {
        /// Where the operative currently is.
        location: String,
    },
    /// `offsite` while mobile.
    NotOnSite,
}

impl std::fmt::Display for Precondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissionAlreadyActive { mission_type } => write!(
                f,
                "A mission is already active ({mission_type}). End it before starting another."
            ),
            Self::NoActiveMission => {
                write!(f, "No active mission. Use 'start' to begin one.")
            }
            Self::AlreadyOnSite { location } => {
                write!(f, "Already on site at {location}. Use 'offsite' first.")
            }
            Self::NotOnSite => write!(f, "Not currently on site."),
        }
    }
}

/// Errors that can occur while interpreting or applying a command.
///
/// None of these are fatal. The caller reports the message and keeps its
/// current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The command is not allowed in the current lifecycle state.
    Precondition(Precondition),
    /// Required arguments were missing or malformed.
    Usage {
        /// The command that was invoked.
        command: CommandKind,
    },
    /// The verb is not in the command table.
    UnknownCommand(String),
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// `logs <n>` named an entry that does not exist.
    LogNotFound {
        /// The requested 1-based entry.
        entry: usize,
        /// How many entries exist.
        available: usize,
    },
    /// A saved session failed its consistency checks.
    InvalidSnapshot(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Precondition(precondition) => write!(f, "{precondition}"),
            Self::Usage { command } => write!(f, "Usage: {}", command.usage()),
            Self::UnknownCommand(verb) => write!(
                f,
                "Unknown command: '{verb}'. Type 'help' for a list of commands."
            ),
            Self::DomainViolation(err) => write!(f, "{err}"),
            Self::LogNotFound { entry, available } => write!(
                f,
                "No log entry #{entry} ({available} entries available)"
            ),
            Self::InvalidSnapshot(reason) => write!(f, "Saved session is inconsistent: {reason}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<Precondition> for CoreError {
    fn from(precondition: Precondition) -> Self {
        Self::Precondition(precondition)
    }
}
