//! Settings management for the face-ratings experiment server.
//!
//! This crate provides the typed settings record for the running process and
//! the loader that merges compiled-in defaults with overrides from an
//! optional `.env` file and the process environment.
//!
//! The record is built once at startup and injected by reference into every
//! component that needs it; it exposes no mutation API after construction,
//! so any number of threads may share it without locking.

pub mod constants;
mod loader;
mod types;

pub use loader::{SettingsError, SettingsLoader, env_var_or_none};
pub use types::{PublicSettings, Settings};
