// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The boundary between the session state machine and whatever presents it.
//!
//! A [`Console`] owns the state, the storage gateway and the guided-form slot.
//! Every accepted command is written through to storage before the reply is
//! returned; a failed write is reported but never undoes the command.

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

mod clock;
mod console;
mod error;
mod export;
mod scheduler;
mod settings;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use console::{Console, ConsoleReply, Dashboard, Recovery};
pub use error::ConsoleError;
pub use export::{ExportError, HistoryCsvRow, write_history_csv};
pub use scheduler::{ManualScheduler, RepeatingTask, Scheduler, TokioScheduler, install_autosave};
pub use settings::{ConsoleSettings, DEFAULT_AUTOSAVE_INTERVAL};
