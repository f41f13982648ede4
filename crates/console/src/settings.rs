// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono_tz::Tz;
use std::time::Duration;

/// How often the in-progress session is saved when nothing else saves it.
pub const DEFAULT_AUTOSAVE_INTERVAL: Duration = Duration::from_secs(30);

/// Runtime configuration for a [`crate::Console`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleSettings {
    /// The zone wall-clock times are entered and shown in.
    pub timezone: Tz,
    /// The autosave period.
    pub autosave_interval: Duration,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::UTC,
            autosave_interval: DEFAULT_AUTOSAVE_INTERVAL,
        }
    }
}
