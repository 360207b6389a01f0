// Library root for the ping service

pub mod api;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::core::server::{create_app, run, serve_until, setup_listener};
