//! Configuration module for precis
//!
//! Handles loading settings from the TOML config file and the environment.

mod settings;

pub use settings::{Settings, API_KEY_ENV};
