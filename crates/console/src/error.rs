// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use patrol_log::SequenceError;
use patrol_log_persistence::PersistenceError;
use thiserror::Error;

/// Errors raised by the console boundary.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A store could not be read at startup.
    #[error("Could not load {store}: {source}")]
    Load {
        /// Which store failed.
        store: &'static str,
        source: PersistenceError,
    },
    /// A save failed.
    #[error("Could not save {store}: {source}")]
    Save {
        /// Which store failed.
        store: &'static str,
        source: PersistenceError,
    },
    /// A guided form could not be started.
    #[error(transparent)]
    Form(#[from] SequenceError),
    /// No guided form has the given name.
    #[error("Unknown form '{0}'. Available forms: incident, check, checkpoint, bolo, poi, start")]
    UnknownForm(String),
}
