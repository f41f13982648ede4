// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Multi-turn structured input.
//!
//! A [`StepSequencer`] walks through a fixed list of prompts, one raw input
//! per turn, and hands the collected record to its completion callback once
//! the last prompt is answered. A [`SequenceSlot`] holds at most one running
//! sequence.

use std::collections::BTreeMap;
use thiserror::Error;

/// Collected answers keyed by [`PromptSpec::key`].
pub type SequenceRecord = BTreeMap<String, String>;

/// Called once with the finished record. Returns the text the sequence produced.
pub type Completion = Box<dyn FnOnce(SequenceRecord) -> String + Send>;

/// One question in a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    /// The text shown to the operative.
    pub prompt: String,
    /// Where the answer is stored in the record.
    pub key: String,
    /// Whether an empty answer is rejected.
    pub required: bool,
}

impl PromptSpec {
    /// A prompt that must be answered.
    #[must_use]
    pub fn required(prompt: &str, key: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            key: key.to_string(),
            required: true,
        }
    }

    /// A prompt that may be skipped with an empty answer.
    #[must_use]
    pub fn optional(prompt: &str, key: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            key: key.to_string(),
            required: false,
        }
    }
}

/// Errors raised when starting or driving a sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A sequence needs at least one prompt.
    #[error("A sequence needs at least one prompt")]
    NoPrompts,
    /// Another sequence is still running.
    #[error("Another form is in progress. Finish it or cancel it first.")]
    AlreadyActive,
    /// Input was submitted with no sequence running.
    #[error("No form is in progress")]
    NotActive,
}

/// What happened to one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// A required answer was empty. The same prompt applies again.
    Rejected {
        /// The prompt to show again.
        prompt: String,
    },
    /// The answer was stored and the next prompt applies.
    Advanced {
        /// The next prompt to show.
        prompt: String,
    },
    /// The last answer was stored and the completion callback has run.
    Completed {
        /// What the completion callback returned.
        output: String,
    },
}

/// A running sequence of prompts.
pub struct StepSequencer {
    prompts: Vec<PromptSpec>,
    cursor: usize,
    record: SequenceRecord,
    on_complete: Option<Completion>,
}

impl std::fmt::Debug for StepSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepSequencer")
            .field("prompts", &self.prompts)
            .field("cursor", &self.cursor)
            .field("record", &self.record)
            .field("completed", &self.on_complete.is_none())
            .finish()
    }
}

impl StepSequencer {
    /// Creates a sequence positioned at its first prompt.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::NoPrompts` if `prompts` is empty.
    pub fn new(prompts: Vec<PromptSpec>, on_complete: Completion) -> Result<Self, SequenceError> {
        if prompts.is_empty() {
            return Err(SequenceError::NoPrompts);
        }
        Ok(Self {
            prompts,
            cursor: 0,
            record: SequenceRecord::new(),
            on_complete: Some(on_complete),
        })
    }

    /// The prompt awaiting an answer, or `None` once completed.
    #[must_use]
    pub fn current_prompt(&self) -> Option<&str> {
        if self.on_complete.is_none() {
            return None;
        }
        self.prompts
            .get(self.cursor)
            .map(|spec| spec.prompt.as_str())
    }

    /// Returns whether the completion callback has run.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.on_complete.is_none()
    }

    /// Answers the current prompt.
    ///
    /// The input is trimmed. An empty answer to a required prompt is rejected;
    /// an empty answer to an optional one is stored as `""`.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::NotActive` if the sequence has already completed.
    pub fn submit(&mut self, input: &str) -> Result<StepOutcome, SequenceError> {
        if self.on_complete.is_none() {
            return Err(SequenceError::NotActive);
        }
        let spec: &PromptSpec = self
            .prompts
            .get(self.cursor)
            .ok_or(SequenceError::NotActive)?;

        let value: &str = input.trim();
        if spec.required && value.is_empty() {
            return Ok(StepOutcome::Rejected {
                prompt: spec.prompt.clone(),
            });
        }

        self.record.insert(spec.key.clone(), value.to_string());
        self.cursor += 1;

        if let Some(next) = self.prompts.get(self.cursor) {
            return Ok(StepOutcome::Advanced {
                prompt: next.prompt.clone(),
            });
        }

        let on_complete: Completion = self.on_complete.take().ok_or(SequenceError::NotActive)?;
        let output: String = on_complete(std::mem::take(&mut self.record));
        Ok(StepOutcome::Completed { output })
    }
}

/// Holds the one sequence allowed to run at a time.
#[derive(Debug, Default)]
pub struct SequenceSlot {
    active: Option<StepSequencer>,
}

impl SequenceSlot {
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Installs a sequence and returns its first prompt.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::AlreadyActive` if a sequence is running. The
    /// running sequence is kept and `sequencer` is dropped unused.
    pub fn begin(&mut self, sequencer: StepSequencer) -> Result<String, SequenceError> {
        if self.active.is_some() {
            return Err(SequenceError::AlreadyActive);
        }
        let prompt: String = sequencer
            .current_prompt()
            .map(str::to_string)
            .ok_or(SequenceError::NotActive)?;
        self.active = Some(sequencer);
        Ok(prompt)
    }

    /// Feeds one answer to the running sequence. A completed sequence is removed.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::NotActive` if nothing is running.
    pub fn submit(&mut self, input: &str) -> Result<StepOutcome, SequenceError> {
        let sequencer: &mut StepSequencer =
            self.active.as_mut().ok_or(SequenceError::NotActive)?;
        let outcome: StepOutcome = sequencer.submit(input)?;
        if sequencer.is_complete() {
            self.active = None;
        }
        Ok(outcome)
    }

    /// Discards the running sequence and its partial record.
    ///
    /// Returns whether a sequence was running.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The prompt the running sequence is waiting on.
    #[must_use]
    pub fn current_prompt(&self) -> Option<&str> {
        self.active
            .as_ref()
            .and_then(StepSequencer::current_prompt)
    }
}
