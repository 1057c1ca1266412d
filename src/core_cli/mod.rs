pub mod core_cli;
pub mod operations;

pub use core_cli::{Cli, Commands};
pub use operations::run;
