//! Pull-based reactive primitives - versioned inputs, memoized reads, async data.

use std::sync::{Arc, Mutex, RwLock};

struct Slot<T> {
    value: T,
    version: u64,
}

/// A shared, version-tracked input value.
///
/// Cloning the handle shares the underlying slot: a `set` through one handle
/// is visible to every reader. Each `set` bumps the version, which is what
/// dependent [`Memo`] reads key their caches on.
pub struct Input<T> {
    slot: Arc<RwLock<Slot<T>>>,
}

impl<T> Clone for Input<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Input<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Slot { value, version: 0 })),
        }
    }

    /// Replaces the value and bumps the version.
    pub fn set(&self, value: T) {
        let mut guard = self.slot.write().unwrap();
        guard.value = value;
        guard.version += 1;
    }

    /// Reads the current value under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.slot.read().unwrap();
        f(&guard.value)
    }

    pub fn version(&self) -> u64 {
        self.slot.read().unwrap().version
    }
}

impl<T: Clone> Input<T> {
    /// Returns version and value read under a single lock guard, so the
    /// pair is never torn by a concurrent `set`.
    pub fn snapshot(&self) -> (u64, T) {
        let guard = self.slot.read().unwrap();
        (guard.version, guard.value.clone())
    }

    pub fn get(&self) -> T {
        self.slot.read().unwrap().value.clone()
    }
}

/// A memoization cell keyed on an [`Input`] version.
///
/// `read` returns the cached value while the version matches and recomputes
/// otherwise, so a derivation read after an input change always reflects the
/// new value and an unchanged input never recomputes.
pub struct Memo<T> {
    cached: Mutex<Option<(u64, T)>>,
}

impl<T: Clone> Memo<T> {
    pub fn new() -> Self {
        Self {
            cached: Mutex::new(None),
        }
    }

    pub fn read(&self, version: u64, compute: impl FnOnce() -> T) -> T {
        let mut guard = self.cached.lock().unwrap();
        if let Some((cached_version, value)) = guard.as_ref() {
            if *cached_version == version {
                return value.clone();
            }
        }
        let value = compute();
        *guard = Some((version, value.clone()));
        value
    }
}

impl<T: Clone> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// State of an asynchronous fetch.
///
/// `Pending` and `Failed` both read as "no data" through [`FetchState::resolved`];
/// the failure message stays observable for callers that want it.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Resolved(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn resolved(&self) -> Option<&T> {
        match self {
            FetchState::Resolved(value) => Some(value),
            FetchState::Pending | FetchState::Failed(_) => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }
}

/// Shared handle over a [`FetchState`], starting out `Pending`.
///
/// The producer side calls `resolve` or `fail` once when the fetch settles;
/// a fetch that never settles leaves every reader on `Pending` indefinitely.
pub struct AsyncData<T> {
    state: Arc<RwLock<FetchState<T>>>,
}

impl<T> Clone for AsyncData<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> AsyncData<T> {
    pub fn pending() -> Self {
        Self {
            state: Arc::new(RwLock::new(FetchState::Pending)),
        }
    }

    pub fn resolve(&self, value: T) {
        *self.state.write().unwrap() = FetchState::Resolved(value);
    }

    pub fn fail(&self, message: impl Into<String>) {
        *self.state.write().unwrap() = FetchState::Failed(message.into());
    }

    pub fn is_pending(&self) -> bool {
        self.state.read().unwrap().is_pending()
    }

    pub fn is_failed(&self) -> bool {
        self.state.read().unwrap().is_failed()
    }
}

impl<T: Clone> AsyncData<T> {
    pub fn state(&self) -> FetchState<T> {
        self.state.read().unwrap().clone()
    }

    pub fn resolved(&self) -> Option<T> {
        self.state.read().unwrap().resolved().cloned()
    }
}

impl<T> Default for AsyncData<T> {
    fn default() -> Self {
        Self::pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_input_set_bumps_version() {
        let input = Input::new(1);
        assert_eq!(input.version(), 0);

        input.set(2);
        assert_eq!(input.version(), 1);
        assert_eq!(input.get(), 2);
    }

    #[test]
    fn test_input_clone_shares_slot() {
        let input = Input::new("a".to_string());
        let other = input.clone();

        other.set("b".to_string());
        assert_eq!(input.get(), "b");
        assert_eq!(input.version(), other.version());
    }

    #[test]
    fn test_with_reads_in_place() {
        let input = Input::new(vec![1, 2, 3]);
        assert_eq!(input.with(|v| v.len()), 3);
    }

    #[test]
    fn test_snapshot_pairs_version_and_value() {
        let input = Input::new(10);
        input.set(20);

        let (version, value) = input.snapshot();
        assert_eq!(version, 1);
        assert_eq!(value, 20);
    }

    #[test]
    fn test_memo_caches_per_version() {
        let calls = AtomicUsize::new(0);
        let memo = Memo::new();

        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            42
        };
        assert_eq!(memo.read(0, compute), 42);
        assert_eq!(memo.read(0, compute), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert_eq!(memo.read(1, compute), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_memo_change_visible_on_next_read() {
        let input = Input::new(1i64);
        let memo = Memo::new();

        let read = |memo: &Memo<i64>, input: &Input<i64>| {
            let (version, value) = input.snapshot();
            memo.read(version, || value * 10)
        };

        assert_eq!(read(&memo, &input), 10);
        input.set(5);
        assert_eq!(read(&memo, &input), 50);
    }

    #[test]
    fn test_fetch_state_resolved_view() {
        assert_eq!(FetchState::<i64>::Pending.resolved(), None);
        assert_eq!(FetchState::<i64>::Failed("boom".into()).resolved(), None);
        assert_eq!(FetchState::Resolved(3).resolved(), Some(&3));
    }

    #[test]
    fn test_async_data_starts_pending() {
        let data: AsyncData<i64> = AsyncData::pending();
        assert!(data.is_pending());
        assert_eq!(data.resolved(), None);
    }

    #[test]
    fn test_async_data_resolve_visible_to_clones() {
        let data = AsyncData::pending();
        let reader = data.clone();

        data.resolve(7);
        assert_eq!(reader.resolved(), Some(7));
        assert!(!reader.is_pending());
    }

    #[test]
    fn test_async_data_fail_reads_as_absent() {
        let data: AsyncData<i64> = AsyncData::pending();
        data.fail("connection refused");

        assert!(data.is_failed());
        assert_eq!(data.resolved(), None);
        assert_eq!(
            data.state(),
            FetchState::Failed("connection refused".to_string())
        );
    }
}
