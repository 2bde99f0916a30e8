pub mod enums;
pub mod task;

pub use enums::{Category, UiMode};
pub use task::{Task, TaskCollection, TaskId};
