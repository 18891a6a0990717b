pub mod repl;
pub mod setup;
pub mod task;

pub use repl::run_repl_mode;
pub use setup::{setup_from_cli, AppConfig};
pub use task::{run_ask, run_render};
