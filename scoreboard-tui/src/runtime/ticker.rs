use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use super::action_queue::{Action, ActionTx};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// The periodic source behind the match clock.
///
/// At most one task is alive at a time. Every `sync` cancels the current task
/// and starts a new generation, so ticks still sitting in the queue from an
/// older task can be told apart and dropped.
pub(super) struct TickSource {
    action_tx: ActionTx,
    period: Duration,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl TickSource {
    pub(super) fn new(action_tx: ActionTx) -> Self {
        Self {
            action_tx,
            period: TICK_PERIOD,
            generation: 0,
            handle: None,
        }
    }

    /// Restart ticking if `running`, otherwise stop. The first tick arrives one
    /// full period after this call.
    pub(super) fn sync(&mut self, running: bool) {
        self.cancel();
        self.generation += 1;
        debug!(generation = self.generation, running, "tick source rescheduled");

        if !running {
            return;
        }

        let generation = self.generation;
        let period = self.period;
        let action_tx = self.action_tx.clone();
        self.handle = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if action_tx.send(Action::Tick { generation }).is_err() {
                    break;
                }
            }
        }));
    }

    pub(super) fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    #[cfg(test)]
    pub(super) fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for TickSource {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::super::action_queue::{channel, ActionRx};
    use super::*;

    fn drain(rx: &mut ActionRx) -> Vec<u64> {
        let mut generations = Vec::new();
        while let Ok(action) = rx.try_recv() {
            match action {
                Action::Tick { generation } => generations.push(generation),
                other => panic!("unexpected action: {other:?}"),
            }
        }
        generations
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_second_while_running() {
        let (tx, mut rx) = channel();
        let mut ticker = TickSource::new(tx);

        ticker.sync(true);
        tokio::time::sleep(Duration::from_millis(3500)).await;

        let ticks = drain(&mut rx);
        assert_eq!(ticks.len(), 3);
        assert!(ticks.iter().all(|g| ticker.is_current(*g)));
    }

    #[tokio::test(start_paused = true)]
    async fn stopping_cancels_the_task() {
        let (tx, mut rx) = channel();
        let mut ticker = TickSource::new(tx);

        ticker.sync(true);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        ticker.sync(false);
        tokio::task::yield_now().await;
        assert!(!ticker.is_active());

        tokio::time::sleep(Duration::from_secs(5)).await;
        let ticks = drain(&mut rx);
        assert_eq!(ticks.len(), 1);
        // The tick delivered before the stop now belongs to an old generation.
        assert!(!ticker.is_current(ticks[0]));
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_never_leaves_two_sources() {
        let (tx, mut rx) = channel();
        let mut ticker = TickSource::new(tx);

        for _ in 0..5 {
            ticker.sync(true);
            tokio::time::sleep(Duration::from_millis(400)).await;
        }
        assert!(drain(&mut rx).is_empty());

        tokio::time::sleep(Duration::from_millis(2700)).await;
        let ticks = drain(&mut rx);
        assert_eq!(ticks.len(), 3);
        assert!(ticks.iter().all(|g| ticker.is_current(*g)));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_source_stops_ticking() {
        let (tx, mut rx) = channel();
        let mut ticker = TickSource::new(tx);
        ticker.sync(true);
        drop(ticker);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(drain(&mut rx).is_empty());
    }
}
