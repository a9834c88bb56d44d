use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

/// One-shot latch shared between the page side and the runner thread. Doubles
/// as the runner's timer: sleeping on it wakes early when teardown arrives.
#[derive(Clone)]
pub struct Shutdown {
    flag: Arc<(Mutex<bool>, Condvar)>,
}

impl Shutdown {
    pub fn new() -> Shutdown {
        Shutdown {
            flag: Arc::new((Mutex::new(false), Condvar::new())),
        }
    }

    pub fn is_signaled(&self) -> bool {
        *self.flag.0.lock().unwrap()
    }

    /// Block for at most `timeout`; returns true if the latch was signaled.
    pub fn sleep(&self, timeout: Duration) -> bool {
        let &(ref lock, ref condvar) = &*self.flag;
        let guard = condvar
            .wait_timeout_while(lock.lock().unwrap(), timeout, |signaled| !*signaled)
            .unwrap();
        *guard.0
    }

    pub fn signal(&self) {
        let &(ref lock, ref condvar) = &*self.flag;
        *lock.lock().unwrap() = true;
        condvar.notify_all();
    }
}

impl Default for Shutdown {
    fn default() -> Shutdown {
        Shutdown::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn sleep_times_out_when_not_signaled() {
        let shutdown = Shutdown::new();
        assert!(!shutdown.sleep(Duration::from_millis(5)));
        assert!(!shutdown.is_signaled());
    }

    #[test]
    fn signal_wakes_a_sleeper() {
        let shutdown = Shutdown::new();
        let waker = {
            let shutdown = shutdown.clone();
            thread::spawn(move || shutdown.signal())
        };
        assert!(shutdown.sleep(Duration::from_secs(5)));
        waker.join().unwrap();
        assert!(shutdown.is_signaled());
    }
}
