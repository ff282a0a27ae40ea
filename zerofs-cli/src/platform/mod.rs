//! Platform adapters: terminal output

mod cli;

pub use cli::{print_error, InfoReport, Output};
