//! Wall-clock collaborator.
//!
//! Session expiry and record timestamps read the time through [`Clock`] so
//! tests can pin it with [`FixedClock`].

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Whole seconds since the Unix epoch.
    fn now(&self) -> i64 {
        self.now_millis().div_euclid(1000)
    }

    /// Fractional seconds since the Unix epoch, the format stored in `created_at`.
    fn timestamp(&self) -> f64 {
        self.now_millis() as f64 / 1000.0
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to.
pub struct FixedClock {
    millis: AtomicI64,
}

impl FixedClock {
    pub fn at(epoch_seconds: i64) -> Self {
        Self {
            millis: AtomicI64::new(epoch_seconds * 1000),
        }
    }

    pub fn set(&self, epoch_seconds: i64) {
        self.millis.store(epoch_seconds * 1000, Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: i64) {
        self.millis.fetch_add(seconds * 1000, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for FixedClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedClock({}ms)", self.now_millis())
    }
}
