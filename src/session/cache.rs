//! Load-once cache for the shared session configuration
//!
//! The first caller performs the read; callers arriving while that read is
//! in flight wait for its result instead of issuing another one.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use super::shared::SessionConfig;

#[derive(Debug, Clone)]
enum CacheState {
    Unloaded,
    Loading,
    /// `None` means the read failed or nothing was stored.
    Loaded(Option<SessionConfig>),
}

#[derive(Debug)]
pub(crate) struct ConfigCache {
    state: Mutex<CacheState>,
    ready: Condvar,
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self {
            state: Mutex::new(CacheState::Unloaded),
            ready: Condvar::new(),
        }
    }
}

/// Puts the cache back to `Unloaded` if the loader panics, so waiters wake
/// up and retry instead of blocking forever.
struct LoadGuard<'a> {
    cache: &'a ConfigCache,
    done: bool,
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        if !self.done {
            *self.cache.lock() = CacheState::Unloaded;
            self.cache.ready.notify_all();
        }
    }
}

impl ConfigCache {
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the cached configuration, running `load` at most once.
    pub(crate) fn get_or_load<F>(&self, load: F) -> Option<SessionConfig>
    where
        F: FnOnce() -> Option<SessionConfig>,
    {
        let mut state = self.lock();
        loop {
            match &*state {
                CacheState::Loaded(config) => return config.clone(),
                CacheState::Unloaded => break,
                CacheState::Loading => {}
            }
            state = self
                .ready
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
        *state = CacheState::Loading;
        drop(state);

        let mut guard = LoadGuard {
            cache: self,
            done: false,
        };
        let config = load();
        let mut state = self.lock();
        guard.done = true;
        // A save that landed during the read is newer than what was read
        let config = if let CacheState::Loaded(saved) = &*state {
            saved.clone()
        } else {
            *state = CacheState::Loaded(config.clone());
            config
        };
        drop(state);
        self.ready.notify_all();
        config
    }

    /// The cached configuration if a load has completed.
    pub(crate) fn peek(&self) -> Option<SessionConfig> {
        match &*self.lock() {
            CacheState::Loaded(config) => config.clone(),
            CacheState::Unloaded | CacheState::Loading => None,
        }
    }

    /// Replace the cached value after a successful save. A load still in
    /// flight keeps this value instead of its own result.
    pub(crate) fn store(&self, config: SessionConfig) {
        *self.lock() = CacheState::Loaded(Some(config));
        self.ready.notify_all();
    }
}
