//! Envelope Core Library
//!
//! This crate provides the core functionality for envelope, an interactive shell
//! for creating, inspecting and editing `.env` files made of `NAME=VALUE` lines.
//!
//! # Key Features
//!
//! - **Argument Groups**: Segment a command line into flag-introduced argument groups
//! - **Line Store**: Load env files as ordered lines and rewrite them in one piece
//! - **Variable Query**: Case-insensitive substring search over every line
//! - **Variable Mutation**: Add, remove and update variables from resolved values
//! - **Settings**: YAML settings with directory, write mode and color theme
//! - **Error Handling**: Comprehensive error types for all failure modes
//!
//! # Examples
//!
//! Updating a variable in place:
//!
//! ```no_run
//! use std::path::Path;
//! use envelope_core::file_handling::{env_file_path, WriteMode};
//! use envelope_core::mutation::update_variable;
//!
//! let path = env_file_path(Path::new(""), "db");
//! update_variable(&path, "HOST", "127.0.0.1", WriteMode::Atomic)?;
//! # Ok::<(), envelope_core::error::Error>(())
//! ```

pub mod arguments;
pub mod command;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod mutation;
pub mod query;
pub mod settings;
