//! Single-slot, last-write-wins debouncing on the tokio timer.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

#[derive(Default)]
struct Slot {
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

/// Defers `action` until calls stop arriving for `delay`.
///
/// Each [`call`](Self::call) replaces the pending invocation and restarts the
/// timer, so only the last argument within a quiet window is delivered. At
/// most one invocation is pending per instance. [`cancel`](Self::cancel)
/// suppresses the pending invocation for good. Must be used from within a
/// tokio runtime.
pub struct Debouncer<A> {
    delay: Duration,
    action: Arc<dyn Fn(A) + Send + Sync>,
    slot: Arc<Mutex<Slot>>,
}

impl<A> fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}

impl<A> Debouncer<A>
where
    A: Send + 'static,
{
    pub fn new<F>(delay: Duration, action: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            delay,
            action: Arc::new(action),
            slot: Arc::new(Mutex::new(Slot::default())),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn call(&self, arg: A) {
        let mut slot = self.slot.lock();
        slot.generation = slot.generation.wrapping_add(1);
        let generation = slot.generation;
        if let Some(previous) = slot.pending.take() {
            previous.abort();
        }

        let shared = Arc::clone(&self.slot);
        let action = Arc::clone(&self.action);
        let delay = self.delay;
        slot.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            {
                let mut slot = shared.lock();
                if slot.generation != generation {
                    return;
                }
                slot.pending = None;
            }
            action(arg);
        }));
    }
}

impl<A> Debouncer<A> {
    /// Drop the pending invocation, if any.
    pub fn cancel(&self) {
        let mut slot = self.slot.lock();
        slot.generation = slot.generation.wrapping_add(1);
        if let Some(pending) = slot.pending.take() {
            pending.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot.lock().pending.is_some()
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, Debouncer<u32>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let debouncer = Debouncer::new(Duration::from_millis(100), move |value| {
            sink.lock().push(value);
        });
        (calls, debouncer)
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_calls_fire_once_with_last_argument() {
        let (calls, debouncer) = recorder();
        for value in 1..=5 {
            debouncer.call(value);
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(*calls.lock(), vec![5]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_delay_suppresses_call() {
        let (calls, debouncer) = recorder();
        debouncer.call(7);
        tokio::time::sleep(Duration::from_millis(50)).await;
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(calls.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_without_pending_call_is_a_no_op() {
        let (calls, debouncer) = recorder();
        debouncer.cancel();
        debouncer.call(1);
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(*calls.lock(), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn each_call_restarts_the_timer() {
        let (calls, debouncer) = recorder();
        debouncer.call(1);
        tokio::time::sleep(Duration::from_millis(60)).await;
        debouncer.call(2);
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(calls.lock().is_empty());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(*calls.lock(), vec![2]);
    }
}
