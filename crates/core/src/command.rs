// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Location recorded when `onsite` is given no argument.
pub const DEFAULT_LOCATION: &str = "Unspecified Location";

/// Summary recorded when `report` is given no argument.
pub const DEFAULT_REPORT_SUMMARY: &str = "Status report";

/// The closed set of command verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Start,
    End,
    OnSite,
    OffSite,
    Incident,
    Check,
    Checkpoint,
    Report,
    Bolo,
    Status,
    Sites,
    Bolos,
    Time,
    Code,
    Clear,
    Help,
    Patrol,
    Logs,
    Poi,
    Pois,
}

impl CommandKind {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Self; 20] = [
        Self::Start,
        Self::End,
        Self::OnSite,
        Self::OffSite,
        Self::Incident,
        Self::Check,
        Self::Checkpoint,
        Self::Report,
        Self::Bolo,
        Self::Status,
        Self::Sites,
        Self::Bolos,
        Self::Time,
        Self::Code,
        Self::Clear,
        Self::Help,
        Self::Patrol,
        Self::Logs,
        Self::Poi,
        Self::Pois,
    ];

    /// The word that invokes this command.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::OnSite => "onsite",
            Self::OffSite => "offsite",
            Self::Incident => "incident",
            Self::Check => "check",
            Self::Checkpoint => "checkpoint",
            Self::Report => "report",
            Self::Bolo => "bolo",
            Self::Status => "status",
            Self::Sites => "sites",
            Self::Bolos => "bolos",
            Self::Time => "time",
            Self::Code => "code",
            Self::Clear => "clear",
            Self::Help => "help",
            Self::Patrol => "patrol",
            Self::Logs => "logs",
            Self::Poi => "poi",
            Self::Pois => "pois",
        }
    }

    /// The usage line shown for this command.
    #[must_use]
    pub const fn usage(&self) -> &'static str {
        match self {
            Self::Start => "start [<h:mm>[am|pm] end <h:mm>[am|pm]] [details...]",
            Self::End => "end",
            Self::OnSite => "onsite [location]",
            Self::OffSite => "offsite",
            Self::Incident => "incident <type> <location> <description...>",
            Self::Check => "check <name> <status> [notes...]",
            Self::Checkpoint => "checkpoint <name> <status...>",
            Self::Report => "report [summary...]",
            Self::Bolo => "bolo <subject> <description...>",
            Self::Status => "status",
            Self::Sites => "sites",
            Self::Bolos => "bolos",
            Self::Time => "time",
            Self::Code => "code [code]",
            Self::Clear => "clear",
            Self::Help => "help",
            Self::Patrol => "patrol",
            Self::Logs => "logs [n]",
            Self::Poi => "poi <name> <notes...>",
            Self::Pois => "pois",
        }
    }

    /// A one-line description for `help`.
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        match self {
            Self::Start => "Start a mission",
            Self::End => "End the active mission and archive it",
            Self::OnSite => "Arrive at a location",
            Self::OffSite => "Depart the current location",
            Self::Incident => "Log an incident",
            Self::Check => "Record a check",
            Self::Checkpoint => "Record a checkpoint scan",
            Self::Report => "File a report on the active mission",
            Self::Bolo => "Issue a be-on-the-lookout alert",
            Self::Status => "Show the current mission status",
            Self::Sites => "List patrol sites",
            Self::Bolos => "List active BOLOs",
            Self::Time => "Show the current date and time",
            Self::Code => "Look up radio ten-codes",
            Self::Clear => "Clear the screen",
            Self::Help => "Show this list",
            Self::Patrol => "List patrol stops for the active mission",
            Self::Logs => "List mission history or show one entry",
            Self::Poi => "Record a point of interest",
            Self::Pois => "List points of interest",
        }
    }

    /// Looks up a command by its (already lower-cased) verb.
    #[must_use]
    pub fn from_verb(verb: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.verb() == verb)
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.verb())
    }
}

/// A parsed command, ready to apply.
///
/// Text arguments are carried as given; handlers trim and validate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a mission. `arguments` is the raw text after the verb.
    Start { arguments: String },
    /// End the running mission.
    End,
    /// Arrive at a location.
    OnSite { location: String },
    /// Depart the current location.
    OffSite,
    /// Log an incident.
    Incident {
        incident_type: String,
        location: String,
        description: String,
    },
    /// Record a check.
    Check {
        name: String,
        status: String,
        notes: Option<String>,
    },
    /// Record a checkpoint scan.
    Checkpoint { name: String, status: String },
    /// File a report on the running mission.
    Report { summary: String },
    /// Issue a BOLO.
    Bolo {
        subject: String,
        description: String,
    },
    /// Record a point of interest.
    Poi { name: String, notes: String },
    Status,
    Patrol,
    Sites,
    Bolos,
    Pois,
    /// List history, or show the 1-based `entry` in full.
    Logs { entry: Option<usize> },
    Time,
    /// Look up one ten-code, or list them all.
    Code { code: Option<String> },
    Clear,
    Help,
}

impl Command {
    /// Returns the kind of this command.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::Start { .. } => CommandKind::Start,
            Self::End => CommandKind::End,
            Self::OnSite { .. } => CommandKind::OnSite,
            Self::OffSite => CommandKind::OffSite,
            Self::Incident { .. } => CommandKind::Incident,
            Self::Check { .. } => CommandKind::Check,
            Self::Checkpoint { .. } => CommandKind::Checkpoint,
            Self::Report { .. } => CommandKind::Report,
            Self::Bolo { .. } => CommandKind::Bolo,
            Self::Poi { .. } => CommandKind::Poi,
            Self::Status => CommandKind::Status,
            Self::Patrol => CommandKind::Patrol,
            Self::Sites => CommandKind::Sites,
            Self::Bolos => CommandKind::Bolos,
            Self::Pois => CommandKind::Pois,
            Self::Logs { .. } => CommandKind::Logs,
            Self::Time => CommandKind::Time,
            Self::Code { .. } => CommandKind::Code,
            Self::Clear => CommandKind::Clear,
            Self::Help => CommandKind::Help,
        }
    }

    /// Returns whether this command can change state.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Start { .. }
                | Self::End
                | Self::OnSite { .. }
                | Self::OffSite
                | Self::Incident { .. }
                | Self::Check { .. }
                | Self::Checkpoint { .. }
                | Self::Report { .. }
                | Self::Bolo { .. }
                | Self::Poi { .. }
        )
    }
}
