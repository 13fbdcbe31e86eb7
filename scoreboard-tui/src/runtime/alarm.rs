use std::io::{self, Write};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

const BEEP_SPACING: Duration = Duration::from_millis(500);

/// Something that can make one audible beep.
pub(super) trait Bell: Send + 'static {
    fn ring(&mut self) -> io::Result<()>;
}

/// Rings the terminal bell (BEL) on stdout.
#[derive(Clone)]
pub(super) struct TerminalBell;

impl Bell for TerminalBell {
    fn ring(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()
    }
}

/// Plays the end-of-match cue: a run of beeps on a background task.
pub(super) struct AlarmNotifier<B: Bell + Clone> {
    bell: B,
    beeps: u32,
    spacing: Duration,
    handle: Option<JoinHandle<()>>,
}

impl<B: Bell + Clone> AlarmNotifier<B> {
    pub(super) fn new(bell: B, beeps: u32) -> Self {
        Self {
            bell,
            beeps,
            spacing: BEEP_SPACING,
            handle: None,
        }
    }

    /// Start the cue, replacing one that is still ringing.
    pub(super) fn ring(&mut self) {
        self.silence();
        info!(beeps = self.beeps, "sounding end-of-match alarm");

        let mut bell = self.bell.clone();
        let beeps = self.beeps;
        let spacing = self.spacing;
        self.handle = Some(tokio::spawn(async move {
            for i in 0..beeps {
                if i > 0 {
                    tokio::time::sleep(spacing).await;
                }
                if let Err(e) = bell.ring() {
                    warn!("Failed to ring alarm bell: {}", e);
                    break;
                }
            }
        }));
    }

    pub(super) fn silence(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl<B: Bell + Clone> Drop for AlarmNotifier<B> {
    fn drop(&mut self) {
        self.silence();
    }
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts rings instead of making noise.
    #[derive(Clone, Default)]
    pub(in crate::runtime) struct CountingBell(pub Arc<AtomicUsize>);

    impl Bell for CountingBell {
        fn ring(&mut self) -> io::Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    impl CountingBell {
        pub(in crate::runtime) fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    #[derive(Clone)]
    struct BrokenBell(Arc<AtomicUsize>);

    impl Bell for BrokenBell {
        fn ring(&mut self) -> io::Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "no terminal"))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn plays_every_beep_half_a_second_apart() {
        let bell = CountingBell::default();
        let mut alarm = AlarmNotifier::new(bell.clone(), 10);

        alarm.ring();
        tokio::task::yield_now().await;
        assert_eq!(bell.count(), 1);

        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert_eq!(bell.count(), 5);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(bell.count(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn ringing_again_replaces_the_running_cue() {
        let bell = CountingBell::default();
        let mut alarm = AlarmNotifier::new(bell.clone(), 4);

        alarm.ring();
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(bell.count(), 2);

        alarm.ring();
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(bell.count(), 2 + 4);
    }

    #[tokio::test(start_paused = true)]
    async fn bell_failure_stops_the_cue_quietly() {
        let rings = Arc::new(AtomicUsize::new(0));
        let mut alarm = AlarmNotifier::new(BrokenBell(rings.clone()), 10);

        alarm.ring();
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(rings.load(Ordering::SeqCst), 1);
    }
}
