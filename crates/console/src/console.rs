// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::Clock;
use crate::error::ConsoleError;
use crate::export::{ExportError, write_history_csv};
use crate::settings::ConsoleSettings;
use patrol_log::{
    Changes, CommandContext, CoreError, FormKind, Phase, SequenceSlot, Session, SessionSnapshot,
    State, StepOutcome, StepSequencer, TransitionResult, interpret,
};
use patrol_log_domain::{Bolo, MissionLog, Poi, Site, default_sites, format_duration};
use patrol_log_persistence::{DocumentStore, Gateway, PersistenceError};
use time::OffsetDateTime;
use tracing::{debug, error, info, warn};

/// What happened to the saved session at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    /// No session was saved.
    Fresh,
    /// A saved session was restored.
    Resumed {
        /// The type of the restored mission.
        mission_type: String,
    },
    /// A saved session could not be used and was discarded.
    Discarded {
        /// Why the snapshot was rejected.
        reason: String,
    },
}

/// What to show after one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleReply {
    /// Output lines in display order.
    pub lines: Vec<String>,
    /// Clear the screen before showing `lines`.
    pub clear_screen: bool,
    /// The guided-form prompt now waiting for input.
    pub awaiting: Option<String>,
}

impl ConsoleReply {
    fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }
}

/// A read-only summary for a status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub phase: Phase,
    pub mission_type: Option<String>,
    /// Live duration of the running mission.
    pub elapsed: Option<String>,
    pub location: Option<String>,
    pub patrol_stops: usize,
    pub incidents: usize,
    pub history_entries: usize,
    pub active_bolos: usize,
    pub recovery_reliable: bool,
}

/// Owns the session state and keeps storage in step with it.
pub struct Console<S: DocumentStore, C: Clock> {
    state: State,
    gateway: Gateway<S>,
    clock: C,
    settings: ConsoleSettings,
    forms: SequenceSlot,
    recovery: Recovery,
    /// Stores whose last save failed, or that have not been written since.
    unsaved: Changes,
}

impl<S: DocumentStore, C: Clock> std::fmt::Debug for Console<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("state", &self.state)
            .field("settings", &self.settings)
            .field("forms", &self.forms)
            .field("recovery", &self.recovery)
            .field("unsaved", &self.unsaved)
            .finish_non_exhaustive()
    }
}

impl<S: DocumentStore, C: Clock> Console<S, C> {
    /// Loads every store and restores any saved session.
    ///
    /// Sites are seeded with the default set when the store has never been
    /// written. A saved session that fails its consistency checks or cannot
    /// be decoded is discarded with a warning and the console starts idle.
    ///
    /// # Arguments
    ///
    /// * `store` - The document store to read from and write through to
    /// * `clock` - The source of the current instant
    /// * `settings` - Timezone and autosave interval
    ///
    /// # Errors
    ///
    /// Returns an error if history, sites, BOLOs or POIs exist but cannot be
    /// read. Those are never silently replaced.
    pub fn open(store: S, clock: C, settings: ConsoleSettings) -> Result<Self, ConsoleError> {
        let mut gateway: Gateway<S> = Gateway::new(store);
        let now: OffsetDateTime = clock.now();

        let sites: Vec<Site> = match load(gateway.load_sites(), "sites")? {
            Some(sites) => sites,
            None => {
                let sites: Vec<Site> = default_sites();
                info!(count = sites.len(), "Seeding default sites");
                if let Err(err) = gateway.save_sites(&sites, now) {
                    error!(%err, "Failed to seed sites");
                }
                sites
            }
        };
        let history: Vec<MissionLog> = load(gateway.load_history(), "mission history")?;
        let bolos: Vec<Bolo> = load(gateway.load_bolos(), "BOLOs")?;
        let pois: Vec<Poi> = load(gateway.load_pois(), "points of interest")?;

        let (session, recovery, snapshot_stale): (Session, Recovery, bool) =
            recover_session(&mut gateway);

        info!(
            history = history.len(),
            bolos = bolos.len(),
            pois = pois.len(),
            sites = sites.len(),
            recovery = ?recovery,
            "Console opened"
        );

        Ok(Self {
            state: State::restore(session, history, bolos, sites, pois),
            gateway,
            clock,
            settings,
            forms: SequenceSlot::new(),
            recovery,
            unsaved: Changes {
                session: snapshot_stale,
                ..Changes::none()
            },
        })
    }

    /// Handles one line of input.
    ///
    /// While a guided form is running the line answers its current prompt;
    /// otherwise it is interpreted as a command.
    pub fn submit(&mut self, line: &str) -> ConsoleReply {
        if !self.forms.is_active() {
            return self.execute(line);
        }

        match self.forms.submit(line) {
            Ok(StepOutcome::Rejected { prompt }) => ConsoleReply {
                lines: vec![String::from("This field is required.")],
                clear_screen: false,
                awaiting: Some(prompt),
            },
            Ok(StepOutcome::Advanced { prompt }) => ConsoleReply {
                lines: Vec::new(),
                clear_screen: false,
                awaiting: Some(prompt),
            },
            Ok(StepOutcome::Completed { output }) => {
                debug!(command = %output, "Form completed");
                self.execute(&output)
            }
            Err(err) => ConsoleReply::lines(vec![err.to_string()]),
        }
    }

    /// Starts a guided form.
    ///
    /// # Errors
    ///
    /// Returns an error if another form is already running.
    pub fn begin_form(&mut self, kind: FormKind) -> Result<ConsoleReply, ConsoleError> {
        let sequencer: StepSequencer = kind.sequencer()?;
        let prompt: String = self.forms.begin(sequencer)?;
        debug!(form = %kind, "Form started");
        Ok(ConsoleReply {
            lines: vec![format!("New {kind} entry:")],
            clear_screen: false,
            awaiting: Some(prompt),
        })
    }

    /// Starts a guided form by its command name.
    ///
    /// # Errors
    ///
    /// Returns an error if no form has that name or another form is running.
    pub fn begin_form_named(&mut self, name: &str) -> Result<ConsoleReply, ConsoleError> {
        let kind: FormKind =
            FormKind::from_name(name).ok_or_else(|| ConsoleError::UnknownForm(name.to_string()))?;
        self.begin_form(kind)
    }

    /// Abandons the running guided form. Returns whether one was running.
    pub fn cancel_form(&mut self) -> bool {
        let cancelled: bool = self.forms.cancel();
        if cancelled {
            debug!("Form cancelled");
        }
        cancelled
    }

    /// Saves the in-progress session if a mission is running, and retries
    /// any store whose earlier save failed.
    ///
    /// Returns whether anything was written. While idle with nothing pending
    /// this does nothing. A snapshot removal that failed after `end` is
    /// retried here too.
    ///
    /// # Errors
    ///
    /// Returns the first store that still cannot be written.
    pub fn autosave(&mut self) -> Result<bool, ConsoleError> {
        if self.state.session.is_active() {
            self.unsaved.session = true;
        }
        if !self.unsaved.any() {
            return Ok(false);
        }

        let failures: Vec<(&'static str, PersistenceError)> = self.flush(self.clock.now());
        match failures.into_iter().next() {
            None => {
                debug!("Autosave complete");
                Ok(true)
            }
            Some((store, source)) => {
                error!(store, err = %source, "Autosave failed");
                Err(ConsoleError::Save { store, source })
            }
        }
    }

    /// Whether storage holds everything shown on screen.
    ///
    /// False while any store has a failed save pending. A store stays pending
    /// until it is written again, by a later command or by [`Self::autosave`].
    #[must_use]
    pub const fn recovery_reliable(&self) -> bool {
        !self.unsaved.any()
    }

    #[must_use]
    pub const fn recovery(&self) -> &Recovery {
        &self.recovery
    }

    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.state.session
    }

    #[must_use]
    pub fn history(&self) -> &[MissionLog] {
        &self.state.history
    }

    #[must_use]
    pub const fn settings(&self) -> &ConsoleSettings {
        &self.settings
    }

    /// The prompt of the running guided form, if any.
    #[must_use]
    pub fn awaiting(&self) -> Option<&str> {
        self.forms.current_prompt()
    }

    pub const fn store_mut(&mut self) -> &mut S {
        self.gateway.store_mut()
    }

    /// Closes the console and hands back its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.gateway.into_store()
    }

    /// Summarizes the current state.
    #[must_use]
    pub fn dashboard(&self) -> Dashboard {
        let session: &Session = &self.state.session;
        let now: OffsetDateTime = self.clock.now();
        Dashboard {
            phase: session.phase(),
            mission_type: session
                .active_mission()
                .map(|mission| mission.mission_type.clone()),
            elapsed: session
                .active_mission()
                .map(|mission| format_duration(mission.start_time, now)),
            location: session
                .current_stop()
                .map(|stop| stop.location().to_string()),
            patrol_stops: session.patrol_stops.len(),
            incidents: session.incidents.len(),
            history_entries: self.state.history.len(),
            active_bolos: self.state.bolos.len(),
            recovery_reliable: self.recovery_reliable(),
        }
    }

    /// Writes mission history as CSV.
    ///
    /// Returns the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn export_history<W: std::io::Write>(&self, writer: W) -> Result<usize, ExportError> {
        write_history_csv(&self.state.history, self.settings.timezone, writer)
    }

    fn execute(&mut self, line: &str) -> ConsoleReply {
        let now: OffsetDateTime = self.clock.now();
        let ctx: CommandContext = CommandContext::new(now, self.settings.timezone);

        let result: TransitionResult = match interpret(&self.state, line, &ctx) {
            Ok(Some(result)) => result,
            Ok(None) => return ConsoleReply::default(),
            Err(err) => {
                log_rejection(line, &err);
                return ConsoleReply::lines(vec![err.to_string()]);
            }
        };

        debug!(command = line, changes = ?result.changes, "Command applied");
        self.state = result.new_state;
        let warnings: Vec<String> = self.persist(result.changes, now);

        let mut lines: Vec<String> = result.reply.lines;
        lines.extend(warnings);
        ConsoleReply {
            lines,
            clear_screen: result.reply.clear_screen,
            awaiting: None,
        }
    }

    /// Writes every store a transition touched, along with any store still
    /// pending from an earlier failure.
    ///
    /// The in-memory state stands regardless of the outcome; failures come
    /// back as warning lines.
    fn persist(&mut self, changes: Changes, now: OffsetDateTime) -> Vec<String> {
        self.unsaved = self.unsaved.merge(changes);
        if !self.unsaved.any() {
            return Vec::new();
        }

        self.flush(now)
            .into_iter()
            .map(|(store, err)| {
                error!(store, %err, "Failed to save");
                format!(
                    "Warning: could not save {store} ({err}). The change is kept in memory only."
                )
            })
            .collect()
    }

    /// Writes every pending store. Stores that fail stay pending.
    fn flush(&mut self, now: OffsetDateTime) -> Vec<(&'static str, PersistenceError)> {
        let mut failures: Vec<(&'static str, PersistenceError)> = Vec::new();

        if self.unsaved.history {
            let saved: Result<(), PersistenceError> =
                self.gateway.save_history(&self.state.history, now);
            settle(
                &mut self.unsaved.history,
                "mission history",
                saved,
                &mut failures,
            );
        }
        if self.unsaved.bolos {
            let saved: Result<(), PersistenceError> =
                self.gateway.save_bolos(&self.state.bolos, now);
            settle(&mut self.unsaved.bolos, "BOLOs", saved, &mut failures);
        }
        if self.unsaved.pois {
            let saved: Result<(), PersistenceError> = self.gateway.save_pois(&self.state.pois, now);
            settle(
                &mut self.unsaved.pois,
                "points of interest",
                saved,
                &mut failures,
            );
        }
        if self.unsaved.session {
            // An idle session has nothing to recover
            let saved: Result<(), PersistenceError> = if self.state.session.is_active() {
                let snapshot: SessionSnapshot = self.state.session.to_snapshot(now);
                self.gateway.save_snapshot(&snapshot)
            } else {
                self.gateway.clear_snapshot()
            };
            settle(&mut self.unsaved.session, "session", saved, &mut failures);
        }

        failures
    }
}

fn settle(
    pending: &mut bool,
    store: &'static str,
    saved: Result<(), PersistenceError>,
    failures: &mut Vec<(&'static str, PersistenceError)>,
) {
    match saved {
        Ok(()) => *pending = false,
        Err(err) => failures.push((store, err)),
    }
}

fn load<T>(result: Result<T, PersistenceError>, store: &'static str) -> Result<T, ConsoleError> {
    result.map_err(|source| {
        error!(store, err = %source, "Failed to load store");
        ConsoleError::Load { store, source }
    })
}

/// Restores the saved session. The flag is set when a discarded snapshot
/// could not be removed.
fn recover_session<S: DocumentStore>(gateway: &mut Gateway<S>) -> (Session, Recovery, bool) {
    let reason: String = match gateway.load_snapshot() {
        Ok(None) => return (Session::idle(), Recovery::Fresh, false),
        Ok(Some(snapshot)) => match Session::restore(snapshot) {
            Ok(session) => {
                let mission_type: String = session
                    .active_mission()
                    .map(|mission| mission.mission_type.clone())
                    .unwrap_or_default();
                if session.is_active() {
                    info!(mission_type = %mission_type, "Resumed saved session");
                    return (session, Recovery::Resumed { mission_type }, false);
                }
                return (session, Recovery::Fresh, false);
            }
            Err(err) => err.to_string(),
        },
        Err(err) => err.to_string(),
    };

    warn!(reason = %reason, "Discarding saved session");
    let stale: bool = match gateway.clear_snapshot() {
        Ok(()) => false,
        Err(err) => {
            error!(%err, "Failed to remove discarded session");
            true
        }
    };
    (Session::idle(), Recovery::Discarded { reason }, stale)
}

fn log_rejection(line: &str, err: &CoreError) {
    match err {
        CoreError::UnknownCommand(_) | CoreError::Usage { .. } => {
            debug!(command = line, %err, "Command not understood");
        }
        _ => debug!(command = line, %err, "Command rejected"),
    }
}
