//! Identity provider port
//!
//! Ids and timestamps come from here so tests can make them deterministic.

/// Source of fresh ids and creation timestamps
#[cfg_attr(test, mockall::automock)]
pub trait IdentityProvider {
    /// A new opaque id, distinct from every id handed out before
    ///
    /// Ids compare greater than every id handed out before them, so the
    /// working set can be put back in creation order after a reload.
    fn next_id(&self) -> String;

    /// Current time in epoch milliseconds, strictly greater than any value
    /// returned or observed before
    fn now_millis(&self) -> i64;

    /// Record a timestamp already in use, e.g. one read back from storage
    fn observe_millis(&self, millis: i64) {
        let _ = millis;
    }
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for &T {
    fn next_id(&self) -> String {
        (**self).next_id()
    }

    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }

    fn observe_millis(&self, millis: i64) {
        (**self).observe_millis(millis);
    }
}
