// Search-input debouncer
//
// Each submission restarts the clock: a timer that is superseded before its
// delay elapses never fires. Fired values are delivered on an unbounded
// channel as `DebounceFired` payloads for the view reducer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

/// Debounces rapidly changing input by a fixed delay
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
    tx: mpsc::UnboundedSender<String>,
}

impl Debouncer {
    /// Create a debouncer delivering settled values on the returned receiver
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                generation: Arc::new(AtomicU64::new(0)),
                tx,
            },
            rx,
        )
    }

    /// Submit a new input value, superseding any pending timer
    pub fn submit(&self, value: String) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let tx = self.tx.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // A newer submission has restarted the clock; this timer is stale
            if latest.load(Ordering::SeqCst) != generation {
                return;
            }
            // Receiver dropped means the view is gone; nothing to do
            let _ = tx.send(value);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_settled_value_fires_after_delay() {
        let (debouncer, mut rx) = Debouncer::new(Duration::from_millis(200));
        debouncer.submit("cash".to_string());

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(rx.recv().await.unwrap(), "cash");
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_fire_only_once() {
        let (debouncer, mut rx) = Debouncer::new(Duration::from_millis(200));
        debouncer.submit("c".to_string());
        tokio::time::sleep(Duration::from_millis(50)).await;
        debouncer.submit("ca".to_string());
        tokio::time::sleep(Duration::from_millis(50)).await;
        debouncer.submit("cash".to_string());

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(rx.recv().await.unwrap(), "cash");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_fires_before_delay() {
        let (debouncer, mut rx) = Debouncer::new(Duration::from_millis(200));
        debouncer.submit("cash".to_string());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(rx.try_recv().is_err());
    }
}
