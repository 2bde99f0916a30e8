pub mod error;
pub mod mode_store;
pub mod task_store;
pub mod tracker;

pub use error::{StoreError, StoreResult};
pub use mode_store::ModeStore;
pub use task_store::TaskStore;
pub use tracker::Tracker;
