// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inputs the terminal handles itself instead of passing to the console.

use patrol_log::FormKind;

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaInput {
    /// Leave the program.
    Quit,
    /// Start the guided form with this name.
    BeginForm(String),
    /// List the available guided forms.
    ListForms,
    /// Abandon the running guided form.
    CancelForm,
    /// Anything else goes to the console unchanged.
    Line(String),
}

impl MetaInput {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed: &str = line.trim();
        match trimmed.to_lowercase().as_str() {
            "/quit" | "quit" | "exit" => return Self::Quit,
            "/cancel" => return Self::CancelForm,
            "/form" | "/forms" => return Self::ListForms,
            _ => {}
        }

        match trimmed.strip_prefix("/form ") {
            Some(name) => Self::BeginForm(name.trim().to_string()),
            None => Self::Line(line.to_string()),
        }
    }
}

/// Names every guided form, for the `/form` listing.
#[must_use]
pub fn form_names() -> String {
    let names: Vec<String> = FormKind::ALL.iter().map(ToString::to_string).collect();
    format!(
        "Forms: {}. Start one with '/form <name>'.",
        names.join(", ")
    )
}
