// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The mission-session state machine.
//!
//! Commands arrive as text, are parsed into [`Command`] values and applied to
//! an immutable [`State`]. A successful transition yields a complete new state,
//! the text to show the operative, and the set of stores that need saving.
//! A failed transition yields an error and leaves the caller's state alone.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod apply;
mod archive;
mod command;
mod error;
mod forms;
mod interpreter;
mod render;
mod sequencer;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use archive::{Archived, archive_mission, build_report};
pub use command::{Command, CommandKind, DEFAULT_LOCATION, DEFAULT_REPORT_SUMMARY};
pub use error::{CoreError, Precondition};
pub use forms::FormKind;
pub use interpreter::{interpret, parse_command, tokenize};
pub use render::{describe_log, describe_status};
pub use sequencer::{
    Completion, PromptSpec, SequenceError, SequenceRecord, SequenceSlot, StepOutcome,
    StepSequencer,
};
pub use state::{
    Changes, CommandContext, Phase, Reply, Session, SessionSnapshot, State, TransitionResult,
};
