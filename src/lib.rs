//! Event Swipe API server.
//!
//! A small HTTP bootstrap for the Event Swipe backend: permissive CORS,
//! JSON body parsing, and a single placeholder route returning a static
//! greeting. Business endpoints land on top of this skeleton later.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP router, handlers, and middleware
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServerError};
