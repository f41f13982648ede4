// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Turning a line of operative input into a [`Command`].

use crate::apply::apply;
use crate::command::{Command, CommandKind, DEFAULT_LOCATION, DEFAULT_REPORT_SUMMARY};
use crate::error::CoreError;
use crate::state::{CommandContext, State, TransitionResult};

/// Splits a line into tokens.
///
/// Tokens are separated by whitespace. A token that begins with `"` or `'`
/// runs to the matching quote and may contain whitespace; the quotes are
/// dropped. A quote inside a word is kept literally, so `don't` stays one
/// token. An unterminated quote runs to the end of the line.
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut current: String = String::new();
    let mut in_token: bool = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        if let Some(open) = quote {
            if c == open {
                quote = None;
            } else {
                current.push(c);
            }
            continue;
        }

        if c.is_whitespace() {
            if in_token {
                tokens.push(std::mem::take(&mut current));
                in_token = false;
            }
        } else if !in_token && (c == '"' || c == '\'') {
            quote = Some(c);
            in_token = true;
        } else {
            current.push(c);
            in_token = true;
        }
    }

    if in_token {
        tokens.push(current);
    }

    tokens
}

/// Parses a line into a command.
///
/// Only the verb is case-insensitive; arguments keep their case.
///
/// # Returns
///
/// * `Ok(None)` for a blank line
/// * `Ok(Some(command))` for a well-formed command
///
/// # Errors
///
/// Returns an error if the verb is unknown or required arguments are missing.
pub fn parse_command(line: &str) -> Result<Option<Command>, CoreError> {
    let tokens: Vec<String> = tokenize(line);
    let Some((verb, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let verb: String = verb.to_lowercase();
    let kind: CommandKind =
        CommandKind::from_verb(&verb).ok_or_else(|| CoreError::UnknownCommand(verb.clone()))?;
    let usage = || CoreError::Usage { command: kind };

    let command: Command = match kind {
        CommandKind::Start => Command::Start {
            arguments: args.join(" "),
        },
        CommandKind::End => Command::End,
        CommandKind::OnSite => Command::OnSite {
            location: joined_or(args, DEFAULT_LOCATION),
        },
        CommandKind::OffSite => Command::OffSite,
        CommandKind::Incident => match args {
            [incident_type, location, description @ ..] if !description.is_empty() => {
                Command::Incident {
                    incident_type: incident_type.clone(),
                    location: location.clone(),
                    description: description.join(" "),
                }
            }
            _ => return Err(usage()),
        },
        CommandKind::Check => match args {
            [name, status, notes @ ..] => Command::Check {
                name: name.clone(),
                status: status.clone(),
                notes: if notes.is_empty() {
                    None
                } else {
                    Some(notes.join(" "))
                },
            },
            _ => return Err(usage()),
        },
        CommandKind::Checkpoint => match args {
            [name, status @ ..] if !status.is_empty() => Command::Checkpoint {
                name: name.clone(),
                status: status.join(" "),
            },
            _ => return Err(usage()),
        },
        CommandKind::Report => Command::Report {
            summary: joined_or(args, DEFAULT_REPORT_SUMMARY),
        },
        CommandKind::Bolo => match args {
            [subject, description @ ..] if !description.is_empty() => Command::Bolo {
                subject: subject.clone(),
                description: description.join(" "),
            },
            _ => return Err(usage()),
        },
        CommandKind::Poi => match args {
            [name, notes @ ..] if !notes.is_empty() => Command::Poi {
                name: name.clone(),
                notes: notes.join(" "),
            },
            _ => return Err(usage()),
        },
        CommandKind::Logs => match args {
            [] => Command::Logs { entry: None },
            [entry] => {
                let entry: usize = entry
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(usage)?;
                Command::Logs { entry: Some(entry) }
            }
            _ => return Err(usage()),
        },
        CommandKind::Code => Command::Code {
            code: args.first().cloned(),
        },
        CommandKind::Status => Command::Status,
        CommandKind::Patrol => Command::Patrol,
        CommandKind::Sites => Command::Sites,
        CommandKind::Bolos => Command::Bolos,
        CommandKind::Pois => Command::Pois,
        CommandKind::Time => Command::Time,
        CommandKind::Clear => Command::Clear,
        CommandKind::Help => Command::Help,
    };

    Ok(Some(command))
}

/// Parses and applies one line of input.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `line` - The raw input line
/// * `ctx` - The current instant and timezone
///
/// # Returns
///
/// * `Ok(None)` for a blank line
/// * `Ok(Some(TransitionResult))` for an applied command
///
/// # Errors
///
/// Returns an error if the line does not parse or the command is rejected.
/// The caller's state is untouched either way.
pub fn interpret(
    state: &State,
    line: &str,
    ctx: &CommandContext,
) -> Result<Option<TransitionResult>, CoreError> {
    let Some(command) = parse_command(line)? else {
        return Ok(None);
    };
    apply(state, command, ctx).map(Some)
}

fn joined_or(args: &[String], default: &str) -> String {
    let joined: String = args.join(" ");
    if joined.trim().is_empty() {
        default.to_string()
    } else {
        joined
    }
}
