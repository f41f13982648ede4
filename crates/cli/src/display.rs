// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use patrol_log_console::{Dashboard, Recovery};

/// Clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// The prompt shown when no form is waiting.
pub const COMMAND_PROMPT: &str = "patrol> ";

/// One line summarizing the session, shown above the prompt.
#[must_use]
pub fn status_bar(dashboard: &Dashboard) -> String {
    let mut parts: Vec<String> = vec![dashboard.phase.to_string()];
    if let Some(mission_type) = &dashboard.mission_type {
        parts.push(mission_type.clone());
    }
    if let Some(elapsed) = &dashboard.elapsed {
        parts.push(elapsed.clone());
    }
    if let Some(location) = &dashboard.location {
        parts.push(format!("at {location}"));
    }
    if dashboard.active_bolos > 0 {
        parts.push(format!("BOLOs: {}", dashboard.active_bolos));
    }
    if !dashboard.recovery_reliable {
        parts.push(String::from("NOT SAVED"));
    }
    format!("[{}]", parts.join(" | "))
}

/// What to tell the operative about the saved session at startup.
#[must_use]
pub fn recovery_banner(recovery: &Recovery) -> Option<String> {
    match recovery {
        Recovery::Fresh => None,
        Recovery::Resumed { mission_type } => {
            Some(format!("Resumed mission in progress: {mission_type}"))
        }
        Recovery::Discarded { reason } => Some(format!(
            "The saved session could not be restored and was discarded ({reason})."
        )),
    }
}
