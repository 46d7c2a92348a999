pub mod cleanup;
pub mod config;
pub mod emit;
pub mod engine;
pub mod error;
pub mod inventory;
pub mod label;
pub mod model;
pub mod progress;
pub mod scanner;

pub use config::AppConfig;
pub use engine::{InventoryEngine, RunResult, SourceInventory};
pub use error::Error;
pub use label::format_display_name;
pub use progress::{ProgressReporter, SilentReporter};
