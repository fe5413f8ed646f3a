//! Scoped subscriptions released together at view teardown.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::task::JoinHandle;

enum Entry {
    Task(JoinHandle<()>),
    Disposer(Box<dyn FnOnce() + Send>),
}

impl Entry {
    fn dispose(self) {
        match self {
            Entry::Task(handle) => handle.abort(),
            Entry::Disposer(dispose) => dispose(),
        }
    }
}

#[derive(Default)]
struct Inner {
    entries: Vec<Entry>,
    closed: bool,
}

/// Disposer list owned by a view.
///
/// Every listener the view starts is registered here. `teardown` runs each
/// disposer exactly once and closes the scope: anything registered
/// afterwards is disposed immediately instead of being kept.
///
/// Cloning yields another handle to the same scope, so tasks can register
/// follow-up work (e.g. a fetch started from a route change).
#[derive(Clone, Default)]
pub struct Subscriptions {
    inner: Arc<Mutex<Inner>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a task on the current tokio runtime, owned by this scope.
    ///
    /// Returns `false` without spawning if the scope is already torn down.
    pub fn spawn<F>(&self, future: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut inner = self.lock();
        if inner.closed {
            return false;
        }
        inner
            .entries
            .retain(|e| !matches!(e, Entry::Task(handle) if handle.is_finished()));
        inner.entries.push(Entry::Task(tokio::spawn(future)));
        true
    }

    /// Register a disposer to run at teardown.
    ///
    /// Runs it immediately and returns `false` if the scope is closed.
    pub fn add(&self, dispose: impl FnOnce() + Send + 'static) -> bool {
        let mut inner = self.lock();
        if inner.closed {
            drop(inner);
            dispose();
            return false;
        }
        inner.entries.push(Entry::Disposer(Box::new(dispose)));
        true
    }

    /// Release everything registered. Idempotent.
    pub fn teardown(&self) {
        let entries = {
            let mut inner = self.lock();
            inner.closed = true;
            std::mem::take(&mut inner.entries)
        };
        for entry in entries {
            entry.dispose();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for Subscriptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("Subscriptions")
            .field("entries", &inner.entries.len())
            .field("closed", &inner.closed)
            .finish()
    }
}
