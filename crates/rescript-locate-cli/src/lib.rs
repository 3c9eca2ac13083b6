//! Command-line front end for rescript-locate.
//!
//! The binary in `main.rs` is the composition root: it loads `.env`, sets up
//! logging, builds a [`rescript_locate_runtime::BinaryResolver`] and
//! dispatches to [`handlers`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
