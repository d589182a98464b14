//! # Campus Common Library
//!
//! Shared code for the campus web service:
//! - Database initialization and row models
//! - Configuration loading and root folder resolution
//! - Calendar date parsing and formatting
//! - Common error type

pub mod config;
pub mod db;
pub mod error;
pub mod time;

pub use error::{Error, Result};
