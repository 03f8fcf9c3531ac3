//! Terminal client for a users REST API: a single home screen that lists,
//! adds and deletes user records, plus one-shot subcommands for scripting.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod responses;
pub mod screen;
pub mod types;

pub use client::UserClient;
pub use error::{Result, UserError};
pub use screen::HomeScreen;
