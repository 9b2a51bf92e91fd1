//! # Tegh Common Library
//!
//! Shared code for the Guru Tegh Bahadur content site:
//! - Content entity types (timeline, biography, shabads, raags, audio,
//!   gurdwaras, resources, baani pages)
//! - Configuration loading and resolution
//! - Common error type

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
