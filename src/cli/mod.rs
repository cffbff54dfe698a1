mod commands;

pub use commands::{Cli, is_help_requested};
