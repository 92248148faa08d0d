//! System identity provider
//!
//! Ids are time-ordered uuids, so sorting them sorts by creation time.
//! Timestamps come from the wall clock but never go backwards.

use std::sync::atomic::{AtomicI64, Ordering};

use uuid::Uuid;

use crate::core::ports::IdentityProvider;

/// Identity provider backed by uuid v7 and the UTC clock
#[derive(Debug, Default)]
pub struct SystemIdentity {
    last_millis: AtomicI64,
}

impl SystemIdentity {
    /// Create a provider with no timestamp history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_millis: AtomicI64::new(i64::MIN),
        }
    }
}

impl IdentityProvider for SystemIdentity {
    fn next_id(&self) -> String {
        Uuid::now_v7().simple().to_string()
    }

    fn now_millis(&self) -> i64 {
        let wall = chrono::Utc::now().timestamp_millis();
        let mut last = self.last_millis.load(Ordering::Relaxed);
        loop {
            let next = wall.max(last.saturating_add(1));
            match self.last_millis.compare_exchange_weak(
                last,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next,
                Err(actual) => last = actual,
            }
        }
    }

    fn observe_millis(&self, millis: i64) {
        self.last_millis.fetch_max(millis, Ordering::Relaxed);
    }
}
