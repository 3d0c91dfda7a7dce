use std::time::Duration;

use crate::memory::MemoryStore;
use crate::store::ShiftStore;
use crate::timeout::TimeoutStore;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    call_timeout_ms: u64,
    seed_catalog: bool,
    simulated_latency_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            call_timeout_ms: 10_000,
            seed_catalog: true,
            simulated_latency_ms: 0,
        }
    }
}

impl StoreConfig {
    pub fn call_timeout_ms(mut self, ms: u64) -> Self {
        self.call_timeout_ms = ms;
        self
    }

    pub fn seed_catalog(mut self, seed: bool) -> Self {
        self.seed_catalog = seed;
        self
    }

    /// Artificial delay for every in-memory call. Zero disables it.
    pub fn simulated_latency_ms(mut self, ms: u64) -> Self {
        self.simulated_latency_ms = ms;
        self
    }

    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }

    pub fn build_memory_store(&self) -> MemoryStore {
        let store = if self.seed_catalog {
            MemoryStore::seeded()
        } else {
            MemoryStore::new()
        };
        if self.simulated_latency_ms > 0 {
            store.with_latency(Duration::from_millis(self.simulated_latency_ms))
        } else {
            store
        }
    }

    /// Bound every call on `store` by the configured timeout.
    pub fn wrap<S: ShiftStore>(&self, store: S) -> TimeoutStore<S> {
        TimeoutStore::new(store, self.call_timeout())
    }
}
