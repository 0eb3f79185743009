//! Top-level operations behind each subcommand.

pub mod clean;
pub mod generate;

pub use clean::clean;
pub use generate::generate;
