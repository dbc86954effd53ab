//! Periodic working-set trimming.
//!
//! The indicator sits idle most of the time; trimming its working set
//! every so often hands unused pages back to the OS.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Result;

/// Stops the trim thread when dropped.
pub struct TrimGuard {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TrimGuard {
    /// Stop the thread and wait for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the sender wakes the thread with `Disconnected`
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("trim thread panicked");
            }
        }
    }
}

impl Drop for TrimGuard {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Call `trim` every `interval` on a background thread until the guard is dropped.
pub fn start_periodic_trim<F>(interval: Duration, trim: F) -> Result<TrimGuard>
where
    F: Fn() + Send + 'static,
{
    let (stop, stopped) = mpsc::channel::<()>();
    let handle = thread::Builder::new()
        .name("working-set-trim".into())
        .spawn(move || loop {
            match stopped.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => trim(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    debug!("trim thread stopping");
                    break;
                }
            }
        })?;

    Ok(TrimGuard {
        stop: Some(stop),
        handle: Some(handle),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    #[test]
    fn trims_repeatedly_until_stopped() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let guard = start_periodic_trim(Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while count.load(Ordering::SeqCst) < 2 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        guard.stop();

        let after_stop = count.load(Ordering::SeqCst);
        assert!(after_stop >= 2);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn drop_stops_before_first_interval() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let started = Instant::now();
        let guard = start_periodic_trim(Duration::from_secs(60), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        drop(guard);

        assert!(started.elapsed() < Duration::from_secs(30));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
