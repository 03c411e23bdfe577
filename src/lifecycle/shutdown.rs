//! Shutdown coordination for the relay service.
//!
//! A trigger fans out over a broadcast channel; completion is tracked by
//! an mpsc channel whose senders live inside each [`ShutdownSignal`]. Once
//! every signal is dropped the receiver yields `None` and the drain is over.

use std::future::Future;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};

/// Coordinator for graceful shutdown.
pub struct Shutdown {
    notify: broadcast::Sender<()>,
    done_tx: mpsc::Sender<()>,
    done_rx: mpsc::Receiver<()>,
}

/// A subscriber's handle: observes the trigger and keeps the drain open
/// until it is dropped.
pub struct ShutdownSignal {
    notify: broadcast::Receiver<()>,
    guard: DrainGuard,
}

/// Holds a drain open while alive.
pub struct DrainGuard {
    _done: mpsc::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (notify, _) = broadcast::channel(1);
        let (done_tx, done_rx) = mpsc::channel(1);
        Self {
            notify,
            done_tx,
            done_rx,
        }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            notify: self.notify.subscribe(),
            guard: DrainGuard {
                _done: self.done_tx.clone(),
            },
        }
    }

    /// Trigger the shutdown signal without waiting.
    pub fn trigger(&self) {
        let _ = self.notify.send(());
    }

    /// Number of subscribers still listening.
    pub fn receiver_count(&self) -> usize {
        self.notify.receiver_count()
    }

    /// Trigger, then wait for every subscriber to finish. Returns `false`
    /// if `grace` elapsed with subscribers still alive.
    pub async fn drain(self, grace: Duration) -> bool {
        let Shutdown {
            notify,
            done_tx,
            mut done_rx,
        } = self;

        let _ = notify.send(());
        drop(done_tx);

        tokio::time::timeout(grace, done_rx.recv()).await.is_ok()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    /// Wait for the trigger. Also resolves if the coordinator is gone.
    pub async fn recv(&mut self) {
        let _ = self.notify.recv().await;
    }

    /// Split into a `'static` trigger future and the guard that keeps the
    /// drain open, for APIs that consume the future before work is done.
    pub fn into_parts(self) -> (impl Future<Output = ()> + Send + 'static, DrainGuard) {
        let mut notify = self.notify;
        let triggered = async move {
            let _ = notify.recv().await;
        };
        (triggered, self.guard)
    }
}
