mod config;
mod error;
mod memory;
mod store;
mod timeout;

pub use config::StoreConfig;
pub use error::{RecordKind, StoreError};
pub use memory::MemoryStore;
pub use store::ShiftStore;
pub use timeout::TimeoutStore;
