//! Single-fire stop signal for the heartbeat.

use tokio::sync::watch;

/// One-shot stop signal with two states: armed and fired.
///
/// Owned by whoever has the authority to stop the heartbeat (the dispatcher).
/// Observers hold a [`StopListener`] obtained from [`StopSignal::subscribe`].
#[derive(Debug)]
pub struct StopSignal {
    /// `false` while armed, `true` once fired.
    tx: watch::Sender<bool>,
}

impl StopSignal {
    /// Create an armed stop signal.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Get a listener that resolves once this signal fires.
    pub fn subscribe(&self) -> StopListener {
        StopListener {
            rx: self.tx.subscribe(),
        }
    }

    /// Fire the signal.
    ///
    /// Returns `true` for the call that moved the signal from armed to fired,
    /// `false` for every later call. The check and the transition happen under
    /// the channel lock, so concurrent callers see exactly one `true`.
    pub fn fire(&self) -> bool {
        self.tx.send_if_modified(|fired| {
            if *fired {
                false
            } else {
                *fired = true;
                true
            }
        })
    }

    /// Whether the signal has fired.
    pub fn is_fired(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Read side of a [`StopSignal`].
#[derive(Debug, Clone)]
pub struct StopListener {
    rx: watch::Receiver<bool>,
}

impl StopListener {
    /// Wait until the signal fires.
    ///
    /// Resolves immediately if it already fired. Also resolves if the owning
    /// [`StopSignal`] is dropped, since nothing can keep the listener armed then.
    pub async fn fired(&mut self) {
        let _ = self.rx.wait_for(|fired| *fired).await;
    }

    /// Whether the signal has fired.
    pub fn is_fired(&self) -> bool {
        *self.rx.borrow()
    }
}
