//! Envelope CLI Library
//!
//! This crate provides the interactive shell for envelope, a tool for managing
//! `.env` files. It reads commands line by line, asks for values and confirmations,
//! and prints colored results.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`terminal`]: Line-based input and themed output
//! - [`handlers`]: One handler per shell command
//! - [`repl`]: The read-eval-print loop
//! - [`help`] and [`suggest`]: Usage texts and command suggestions
//!
//! # Examples
//!
//! ```bash
//! # Interactive shell
//! envelope
//!
//! # Run one command and exit
//! envelope --directory ~/envs get db HOST
//!
//! # Plain output, no banner
//! envelope --no-color --no-banner
//! ```

pub mod cli_args;
pub mod handlers;
pub mod help;
pub mod repl;
pub mod suggest;
pub mod terminal;
