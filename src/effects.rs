//! Background effect timers: the clock ticker, the scanline animator and
//! the row-reveal sequencer.
//!
//! Every timer runs as its own tokio task and reports back to the main
//! loop over an mpsc channel. The scheduler owns all task handles, so
//! tearing the view down aborts every pending callback before the
//! terminal is restored.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};

use crate::constants::{CLOCK_INTERVAL, REVEAL_STEP, SCAN_INTERVAL};
use crate::event::EffectEvent;

/// Spawns and owns the dashboard's timer tasks.
pub struct EffectScheduler {
    runtime: tokio::runtime::Handle,
    sender: mpsc::Sender<EffectEvent>,
    tasks: Vec<JoinHandle<()>>,
}

impl EffectScheduler {
    /// Creates a scheduler that spawns onto `runtime` and reports events
    /// through `sender`.
    pub fn new(runtime: tokio::runtime::Handle, sender: mpsc::Sender<EffectEvent>) -> Self {
        Self {
            runtime,
            sender,
            tasks: Vec::new(),
        }
    }

    /// Starts the periodic tickers and schedules one reveal per row.
    ///
    /// With effects disabled only the clock runs; the caller shows all
    /// rows immediately instead of cascading them in.
    pub fn start(&mut self, effects_enabled: bool, row_count: usize) {
        self.spawn_periodic(CLOCK_INTERVAL, EffectEvent::ClockTick);
        if effects_enabled {
            self.spawn_periodic(SCAN_INTERVAL, EffectEvent::ScanTick);
            self.schedule_row_reveals(row_count);
        }
        tracing::debug!(tasks = self.tasks.len(), "effect timers started");
    }

    /// Spawns a repeating ticker that emits `event` every `interval`.
    fn spawn_periodic(&mut self, interval: Duration, event: EffectEvent) {
        let sender = self.sender.clone();
        let handle = self.runtime.spawn(async move {
            loop {
                sleep(interval).await;
                if sender.send(event).await.is_err() {
                    // Receiver gone; the view was torn down.
                    break;
                }
            }
        });
        self.tasks.push(handle);
    }

    /// Schedules one one-shot reveal per row, delayed by
    /// `index * REVEAL_STEP` so rows appear top to bottom.
    fn schedule_row_reveals(&mut self, row_count: usize) {
        for index in 0..row_count {
            let sender = self.sender.clone();
            let delay = REVEAL_STEP * index as u32;
            let handle = self.runtime.spawn(async move {
                sleep(delay).await;
                let _ = sender.send(EffectEvent::RowRevealed(index)).await;
            });
            self.tasks.push(handle);
        }
    }

    /// Aborts every outstanding timer task. Safe to call more than once.
    pub fn shutdown(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
        tracing::debug!("effect timers stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EVENT_CHANNEL_CAPACITY;
    use tokio::time::timeout;

    fn scheduler() -> (EffectScheduler, mpsc::Receiver<EffectEvent>) {
        let (sender, receiver) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let scheduler = EffectScheduler::new(tokio::runtime::Handle::current(), sender);
        (scheduler, receiver)
    }

    #[tokio::test(start_paused = true)]
    async fn test_row_reveals_arrive_in_index_order() {
        let (mut scheduler, mut receiver) = scheduler();
        scheduler.schedule_row_reveals(4);

        for expected in 0..4 {
            let event = receiver.recv().await.expect("reveal event");
            assert_eq!(event, EffectEvent::RowRevealed(expected));
        }
        scheduler.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_reveals() {
        let (mut scheduler, mut receiver) = scheduler();
        scheduler.schedule_row_reveals(5);
        scheduler.shutdown();

        // All senders are gone once the tasks are aborted, so the channel
        // closes without delivering anything.
        drop(scheduler);
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scan_ticks_outpace_clock_ticks() {
        let (mut scheduler, mut receiver) = scheduler();
        scheduler.start(true, 1);

        let mut scan_ticks = 0;
        loop {
            match receiver.recv().await.expect("effect event") {
                EffectEvent::ScanTick => scan_ticks += 1,
                EffectEvent::ClockTick => break,
                EffectEvent::RowRevealed(_) => {}
            }
        }
        // 50ms scan interval vs 1000ms clock interval.
        assert!(scan_ticks >= 19, "got {scan_ticks} scan ticks");
        scheduler.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_keeps_ticking() {
        let (mut scheduler, mut receiver) = scheduler();
        scheduler.start(false, 10);

        for _ in 0..3 {
            let event = timeout(Duration::from_secs(2), receiver.recv())
                .await
                .expect("clock tick within interval")
                .expect("channel open");
            assert_eq!(event, EffectEvent::ClockTick);
        }
        scheduler.shutdown();
    }
}
