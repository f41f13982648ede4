// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guided forms that build a command line one field at a time.

use crate::command::CommandKind;
use crate::sequencer::{Completion, PromptSpec, SequenceError, SequenceRecord, StepSequencer};

/// Commands that can be entered through a guided form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Incident,
    Check,
    Checkpoint,
    Bolo,
    Poi,
    Start,
}

impl FormKind {
    pub const ALL: [Self; 6] = [
        Self::Incident,
        Self::Check,
        Self::Checkpoint,
        Self::Bolo,
        Self::Poi,
        Self::Start,
    ];

    /// The command the finished form runs.
    #[must_use]
    pub const fn command(&self) -> CommandKind {
        match self {
            Self::Incident => CommandKind::Incident,
            Self::Check => CommandKind::Check,
            Self::Checkpoint => CommandKind::Checkpoint,
            Self::Bolo => CommandKind::Bolo,
            Self::Poi => CommandKind::Poi,
            Self::Start => CommandKind::Start,
        }
    }

    /// Looks up a form by its command verb, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name: String = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.command().verb() == name)
    }

    fn prompts(self) -> Vec<PromptSpec> {
        match self {
            Self::Incident => vec![
                PromptSpec::required("Incident type:", "type"),
                PromptSpec::required("Location:", "location"),
                PromptSpec::required("Description:", "description"),
            ],
            Self::Check => vec![
                PromptSpec::required("What was checked:", "name"),
                PromptSpec::required("Status:", "status"),
                PromptSpec::optional("Notes (optional):", "notes"),
            ],
            Self::Checkpoint => vec![
                PromptSpec::required("Checkpoint name:", "name"),
                PromptSpec::required("Status:", "status"),
            ],
            Self::Bolo => vec![
                PromptSpec::required("Subject:", "subject"),
                PromptSpec::required("Description:", "description"),
            ],
            Self::Poi => vec![
                PromptSpec::required("Name:", "name"),
                PromptSpec::required("Notes:", "notes"),
            ],
            Self::Start => vec![
                PromptSpec::optional("Start time (e.g. 9:00am, blank for now):", "start"),
                PromptSpec::optional("End time (e.g. 5:00pm, optional):", "end"),
                PromptSpec::optional("Mission details:", "details"),
            ],
        }
    }

    fn keys(self) -> &'static [&'static str] {
        match self {
            Self::Incident => &["type", "location", "description"],
            Self::Check => &["name", "status", "notes"],
            Self::Checkpoint => &["name", "status"],
            Self::Bolo => &["subject", "description"],
            Self::Poi => &["name", "notes"],
            Self::Start => &[],
        }
    }

    /// Composes the command line a finished record stands for.
    ///
    /// Every field is wrapped in double quotes so it reaches the interpreter
    /// as one token; embedded double quotes become single quotes.
    #[must_use]
    pub fn compose(self, record: &SequenceRecord) -> String {
        let verb: &str = self.command().verb();
        if self == Self::Start {
            return compose_start(record);
        }

        let fields: Vec<String> = self
            .keys()
            .iter()
            .filter_map(|key| record.get(*key))
            .filter(|value| !value.is_empty())
            .map(|value| quote(value))
            .collect();

        if fields.is_empty() {
            verb.to_string()
        } else {
            format!("{verb} {}", fields.join(" "))
        }
    }

    /// Builds the step sequencer for this form.
    ///
    /// # Errors
    ///
    /// Never fails in practice; every form has prompts.
    pub fn sequencer(self) -> Result<StepSequencer, SequenceError> {
        let on_complete: Completion = Box::new(move |record: SequenceRecord| self.compose(&record));
        StepSequencer::new(self.prompts(), on_complete)
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command().verb())
    }
}

fn compose_start(record: &SequenceRecord) -> String {
    let start: &str = field(record, "start");
    let end: &str = field(record, "end");
    let details: &str = field(record, "details");

    // The schedule parser reads bare tokens, so times are not quoted
    let mut parts: Vec<String> = vec![String::from("start")];
    if !start.is_empty() && !end.is_empty() {
        parts.push(start.replace('"', "'"));
        parts.push(String::from("end"));
        parts.push(end.replace('"', "'"));
    }
    if !details.is_empty() {
        parts.push(details.replace('"', "'"));
    }
    parts.join(" ")
}

fn field<'a>(record: &'a SequenceRecord, key: &str) -> &'a str {
    record.get(key).map_or("", |value| value.trim())
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "'"))
}
