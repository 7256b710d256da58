//! CLI module for precis
//!
//! Contains argument parsing, input resolution and command implementations.

pub mod args;
pub mod commands;
pub mod input;

pub use args::Cli;
