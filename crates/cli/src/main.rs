// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod display;
mod meta;

#[cfg(test)]
mod tests;

use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use display::{CLEAR_SCREEN, COMMAND_PROMPT, recovery_banner, status_bar};
use meta::{MetaInput, form_names};
use patrol_log_console::{
    Console, ConsoleReply, ConsoleSettings, SystemClock, TokioScheduler, install_autosave,
};
use patrol_log_domain::validate_timezone;
use patrol_log_persistence::Persistence;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

type PatrolConsole = Console<Persistence, SystemClock>;

/// Patrol Log - mission logging for security patrols
#[derive(Debug, Parser)]
#[command(name = "patrol", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to the `SQLite` database file. If not provided, uses an in-memory database.
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// IANA timezone that times are entered and shown in
    #[arg(short, long, global = true, default_value = "UTC")]
    timezone: String,

    /// Seconds between autosaves of a running mission
    #[arg(long, global = true, default_value_t = 30)]
    autosave_secs: u64,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Start the interactive prompt (the default)
    Run,

    /// Run a single command line and exit
    Exec {
        /// The command line, e.g. `onsite "Main Gate"`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },

    /// Write mission history to a CSV file
    Export {
        /// Where to write the CSV
        #[arg(short, long)]
        output: PathBuf,
    },
}

impl Args {
    fn settings(&self) -> Result<ConsoleSettings> {
        let timezone: Tz = validate_timezone(&self.timezone)?;
        Ok(ConsoleSettings {
            timezone,
            autosave_interval: Duration::from_secs(self.autosave_secs.max(1)),
        })
    }

    fn open_console(&self) -> Result<PatrolConsole> {
        let settings: ConsoleSettings = self.settings()?;
        let store: Persistence = match &self.database {
            Some(path) => {
                info!(path = %path.display(), "Using file-based database");
                Persistence::new_with_file(path)
                    .wrap_err_with(|| format!("opening {}", path.display()))?
            }
            None => {
                info!("Using in-memory database");
                Persistence::new_in_memory()?
            }
        };
        Ok(Console::open(store, SystemClock, settings)?)
    }

    async fn run(self) -> Result<()> {
        let console: PatrolConsole = self.open_console()?;
        match self.command.unwrap_or(Command::Run) {
            Command::Run => run_prompt(console).await,
            Command::Exec { line } => {
                exec(console, &line.join(" "));
                Ok(())
            }
            Command::Export { output } => export(&console, &output),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // Logs go to stderr so they never mix with command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(args.verbosity.log_level_filter().as_trace().to_string())
        }))
        .init();

    info!("Starting Patrol Log");
    args.run().await
}

fn exec(mut console: PatrolConsole, line: &str) {
    let reply: ConsoleReply = console.submit(line);
    print_reply(&reply);
}

fn export(console: &PatrolConsole, output: &std::path::Path) -> Result<()> {
    let file: std::fs::File = std::fs::File::create(output)
        .wrap_err_with(|| format!("creating {}", output.display()))?;
    let rows: usize = console.export_history(std::io::BufWriter::new(file))?;
    info!(rows, path = %output.display(), "History exported");
    println!("Exported {rows} entries to {}", output.display());
    Ok(())
}

async fn run_prompt(console: PatrolConsole) -> Result<()> {
    let interval: Duration = console.settings().autosave_interval;
    if let Some(banner) = recovery_banner(console.recovery()) {
        println!("{banner}");
    }
    println!("Type 'help' for commands, '/form <name>' for a guided entry, '/quit' to leave.");

    let shared: Arc<Mutex<PatrolConsole>> = Arc::new(Mutex::new(console));
    let mut scheduler: TokioScheduler = TokioScheduler;
    let autosave: JoinHandle<()> =
        install_autosave(&mut scheduler, Arc::clone(&shared), interval);

    let mut input: Lines<BufReader<Stdin>> = BufReader::new(tokio::io::stdin()).lines();
    loop {
        show_prompt(&*shared.lock().await)?;
        let Some(line) = input.next_line().await? else {
            break;
        };

        let mut console: MutexGuard<'_, PatrolConsole> = shared.lock().await;
        let reply: ConsoleReply = match MetaInput::parse(&line) {
            MetaInput::Quit => break,
            MetaInput::ListForms => text_reply(form_names()),
            MetaInput::BeginForm(name) => console
                .begin_form_named(&name)
                .unwrap_or_else(|err| text_reply(err.to_string())),
            MetaInput::CancelForm => {
                if console.cancel_form() {
                    text_reply(String::from("Form cancelled."))
                } else {
                    text_reply(String::from("No form is in progress."))
                }
            }
            MetaInput::Line(line) => console.submit(&line),
        };
        print_reply(&reply);
    }

    autosave.abort();
    if let Err(err) = shared.lock().await.autosave() {
        warn!(%err, "Final save failed");
    }
    info!("Patrol Log stopped");
    Ok(())
}

fn show_prompt(console: &PatrolConsole) -> Result<()> {
    let mut stdout: std::io::Stdout = std::io::stdout();
    match console.awaiting() {
        Some(prompt) => write!(stdout, "{prompt} ")?,
        None => {
            writeln!(stdout, "{}", status_bar(&console.dashboard()))?;
            write!(stdout, "{COMMAND_PROMPT}")?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn print_reply(reply: &ConsoleReply) {
    if reply.clear_screen {
        print!("{CLEAR_SCREEN}");
    }
    for line in &reply.lines {
        println!("{line}");
    }
}

fn text_reply(line: String) -> ConsoleReply {
    ConsoleReply {
        lines: vec![line],
        ..ConsoleReply::default()
    }
}
