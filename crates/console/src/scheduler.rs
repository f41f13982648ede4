// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Periodic work, such as autosaving the running session.

use crate::clock::Clock;
use crate::console::Console;
use futures::future::BoxFuture;
use patrol_log_persistence::DocumentStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Produces one run of a repeating job each time it is called.
pub type RepeatingTask = Box<dyn FnMut() -> BoxFuture<'static, ()> + Send>;

/// Runs jobs on a fixed period.
pub trait Scheduler {
    /// Identifies a scheduled job.
    type Handle;

    /// Schedules `task` to run every `interval`. The first run happens one
    /// full interval after scheduling.
    fn schedule_repeating(&mut self, interval: Duration, task: RepeatingTask) -> Self::Handle;
}

/// Runs jobs on the tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    type Handle = JoinHandle<()>;

    fn schedule_repeating(
        &mut self,
        interval: Duration,
        mut task: RepeatingTask,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker: tokio::time::Interval = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                task().await;
            }
        })
    }
}

/// Holds jobs until they are run by hand.
#[derive(Default)]
pub struct ManualScheduler {
    jobs: Vec<(Duration, RepeatingTask)>,
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("intervals", &self.intervals())
            .finish()
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The period of each scheduled job, in scheduling order.
    #[must_use]
    pub fn intervals(&self) -> Vec<Duration> {
        self.jobs.iter().map(|(interval, _)| *interval).collect()
    }

    /// Runs every scheduled job once, in scheduling order.
    pub async fn run_all(&mut self) {
        for (_, task) in &mut self.jobs {
            task().await;
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = usize;

    fn schedule_repeating(&mut self, interval: Duration, task: RepeatingTask) -> usize {
        self.jobs.push((interval, task));
        self.jobs.len() - 1
    }
}

/// Schedules periodic saves of a shared console's running session and any
/// store left pending by a failed save.
///
/// Each run takes the console lock, so it never interleaves with a command.
/// A failed save is logged and retried on the next run.
pub fn install_autosave<T, S, C>(
    scheduler: &mut T,
    console: Arc<Mutex<Console<S, C>>>,
    interval: Duration,
) -> T::Handle
where
    T: Scheduler,
    S: DocumentStore + Send + 'static,
    C: Clock + 'static,
{
    let task: RepeatingTask = Box::new(move || {
        let console: Arc<Mutex<Console<S, C>>> = Arc::clone(&console);
        Box::pin(async move {
            let mut guard: MutexGuard<'_, Console<S, C>> = console.lock().await;
            match guard.autosave() {
                Ok(true) => debug!("Autosave wrote pending stores"),
                Ok(false) => debug!("Autosave skipped, nothing pending"),
                Err(err) => warn!(%err, "Autosave failed, will retry"),
            }
        })
    });
    scheduler.schedule_repeating(interval, task)
}
