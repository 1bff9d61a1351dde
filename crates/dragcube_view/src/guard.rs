use std::sync::atomic::{AtomicBool, Ordering};

/// Admits at most one operation at a time. Concurrent attempts are rejected
/// rather than queued.
#[derive(Debug, Default)]
pub struct SingleFlight {
    busy: AtomicBool,
}
impl SingleFlight {
    /// Constructs an idle guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a token if no other operation is in flight, or `None` if one
    /// is. The guard is released when the token is dropped.
    pub fn try_enter(&self) -> Option<FlightToken<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| FlightToken { guard: self })
    }

    /// Returns whether an operation is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Proof that an operation holds a [`SingleFlight`] guard.
#[derive(Debug)]
#[must_use]
pub struct FlightToken<'a> {
    guard: &'a SingleFlight,
}
impl Drop for FlightToken<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}

/// Result of a guarded operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation ran.
    Done(T),
    /// Another operation was in flight, so this one did nothing.
    Busy,
}
impl<T> Outcome<T> {
    /// Returns whether the operation was rejected.
    pub fn is_busy(&self) -> bool {
        matches!(self, Outcome::Busy)
    }
    /// Returns the result of the operation, or `None` if it was rejected.
    pub fn done(self) -> Option<T> {
        match self {
            Outcome::Done(value) => Some(value),
            Outcome::Busy => None,
        }
    }
    /// Applies a function to the result of the operation.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Done(value) => Outcome::Done(f(value)),
            Outcome::Busy => Outcome::Busy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_flight() {
        let guard = SingleFlight::new();
        assert!(!guard.is_busy());

        let token = guard.try_enter();
        assert!(token.is_some());
        assert!(guard.is_busy());
        assert!(guard.try_enter().is_none());

        drop(token);
        assert!(!guard.is_busy());
        assert!(guard.try_enter().is_some());
        assert!(!guard.is_busy());
    }

    #[test]
    fn test_released_on_unwind() {
        let guard = SingleFlight::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _token = guard.try_enter();
            panic!("operation failed");
        }));
        assert!(result.is_err());
        assert!(!guard.is_busy());
    }
}
