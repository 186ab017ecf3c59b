//! Stopping a [`PathSearch`](crate::PathSearch) from outside its thread.
//!
//! A search owns no thread of its own, so the only way to stop one that is
//! already inside [`run`](crate::PathSearch::run) is a token shared with
//! whoever wants it stopped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A one-way stop request for searches.
///
/// Attach a token with [`PathSearch::with_cancel`](crate::PathSearch::with_cancel)
/// and keep a clone. The search loop reads the token before every frontier
/// pop; once it reads `true` the run returns
/// [`Outcome::Cancelled`](crate::Outcome::Cancelled) and leaves its state as
/// it was after the last expansion. A cell is never half relaxed.
///
/// Tokens cannot be reset. A token already cancelled when a run starts stops
/// it before the first expansion, so reruns need a fresh token. One token
/// may be shared by any number of searches to stop a whole batch.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    requested: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`cancel`](Self::cancel) has been called on this token or
    /// any of its clones.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.requested.load(Ordering::Relaxed)
    }

    /// Ask every search holding a clone of this token to stop at its next
    /// frontier pop. Safe to call from any thread, any number of times.
    #[inline]
    pub fn cancel(&self) {
        self.requested.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_flag() {
        let t = CancelToken::new();
        let other = t.clone();
        assert!(!other.is_cancelled());
        t.cancel();
        assert!(other.is_cancelled());
    }

    #[test]
    fn cancel_from_another_thread() {
        let t = CancelToken::new();
        let remote = t.clone();
        std::thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(t.is_cancelled());
    }
}
