//! `metacsv` - bulk CSV export/import for metadata entity records
//!
//! This crate provides the layout-driven layer of the `metacsv` CLI on top of
//! the [`metacsv_codec`] cell codec.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Column layout loading and precedence
//! - [`sync`] - Entity JSON <-> CSV document conversion
//! - [`validation`] - Layout and header checks
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod sync;
pub mod validation;

pub use error::{MetacsvError, Result, ValidationError};
pub use metacsv_codec as codec;
