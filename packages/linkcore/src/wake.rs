use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Single-slot wake-up latch between the supervisor and the consumer
/// worker.
///
/// `raise` is non-blocking and idempotent while unconsumed: any number of
/// raises before one consume collapse into a single wake-up (at most one
/// pending notification, not a counter). The slot is cleared atomically
/// when a waiter returns, so a subsequent wait blocks until the next raise.
///
/// Raises happen on the supervisor task, waits on the worker task; the
/// underlying primitive provides the cross-task memory visibility.
pub struct WakeSignal {
    inner: Signal<CriticalSectionRawMutex, ()>,
}

impl WakeSignal {
    pub const fn new() -> Self {
        Self {
            inner: Signal::new(),
        }
    }

    pub fn raise(&self) {
        self.inner.signal(());
    }

    /// Parks the caller until raised, then consumes the slot. Unbounded.
    pub async fn wait_and_consume(&self) {
        self.inner.wait().await;
    }

    pub fn is_raised(&self) -> bool {
        self.inner.signaled()
    }
}

impl Default for WakeSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn raises_before_a_consume_collapse_to_one_wake() {
        let signal = WakeSignal::new();
        signal.raise();
        signal.raise();
        signal.raise();
        block_on(signal.wait_and_consume());
        assert!(!signal.is_raised());
    }

    #[test]
    fn slot_clears_on_consume_and_rearms_on_next_raise() {
        let signal = WakeSignal::new();
        signal.raise();
        block_on(signal.wait_and_consume());
        assert!(!signal.is_raised());

        signal.raise();
        assert!(signal.is_raised());
        block_on(signal.wait_and_consume());
        assert!(!signal.is_raised());
    }

    #[test]
    fn fresh_signal_is_not_raised() {
        let signal = WakeSignal::new();
        assert!(!signal.is_raised());
    }
}
