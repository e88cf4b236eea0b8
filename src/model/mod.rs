pub mod config;
pub mod task;

pub use config::{Config, UiConfig};
pub use task::{Category, Priority, Task};
