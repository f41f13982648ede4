// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_console, submit_all};
use crate::{
    Console, ManualClock, ManualScheduler, RepeatingTask, Scheduler, TokioScheduler,
    install_autosave,
};
use patrol_log_persistence::{MemoryStore, SnapshotRecord, StoreRecord};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

type SharedConsole = Arc<Mutex<Console<MemoryStore, ManualClock>>>;

// ============================================================================
// ManualScheduler
// ============================================================================

#[tokio::test]
async fn test_manual_scheduler_runs_each_job_once_per_call() {
    let mut scheduler: ManualScheduler = ManualScheduler::new();
    let runs: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let counter: Arc<AtomicUsize> = Arc::clone(&runs);
    let task: RepeatingTask = Box::new(move || {
        let counter: Arc<AtomicUsize> = Arc::clone(&counter);
        Box::pin(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    });

    let handle: usize = scheduler.schedule_repeating(Duration::from_secs(30), task);
    assert_eq!(runs.load(Ordering::SeqCst), 0);

    scheduler.run_all().await;
    scheduler.run_all().await;

    assert_eq!(handle, 0);
    assert_eq!(runs.load(Ordering::SeqCst), 2);
    assert_eq!(scheduler.intervals(), vec![Duration::from_secs(30)]);
}

#[tokio::test]
async fn test_autosave_job_writes_only_while_a_mission_runs() {
    let (console, clock) = create_test_console();
    let shared: SharedConsole = Arc::new(Mutex::new(console));
    let mut scheduler: ManualScheduler = ManualScheduler::new();
    install_autosave(&mut scheduler, Arc::clone(&shared), Duration::from_secs(5));

    scheduler.run_all().await;

    {
        let mut console = shared.lock().await;
        assert!(!console.store_mut().contains(SnapshotRecord::KEY));
        submit_all(&mut console, &clock, &["start Patrol A"]);
        console.store_mut().set_fail_writes(true);
    }
    scheduler.run_all().await;
    assert!(!shared.lock().await.recovery_reliable());

    shared.lock().await.store_mut().set_fail_writes(false);
    scheduler.run_all().await;

    let mut console = shared.lock().await;
    assert!(console.recovery_reliable());
    assert!(console.store_mut().contains(SnapshotRecord::KEY));
}

// ============================================================================
// TokioScheduler
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_tokio_scheduler_waits_one_interval_before_first_run() {
    let mut scheduler: TokioScheduler = TokioScheduler;
    let runs: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let counter: Arc<AtomicUsize> = Arc::clone(&runs);
    let task: RepeatingTask = Box::new(move || {
        let counter: Arc<AtomicUsize> = Arc::clone(&counter);
        Box::pin(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    });

    let handle: tokio::task::JoinHandle<()> =
        scheduler.schedule_repeating(Duration::from_secs(10), task);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(runs.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_secs(21)).await;
    assert_eq!(runs.load(Ordering::SeqCst), 2);

    handle.abort();
}
