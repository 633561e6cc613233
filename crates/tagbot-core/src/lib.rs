//! Core domain + application logic for the Auto-Tagger Telegram bot.
//!
//! This crate is intentionally framework-agnostic. Telegram transport and the
//! administrator lookup live behind ports (traits) implemented in the adapter
//! crate.

pub mod activation;
pub mod commands;
pub mod compose;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod ports;
pub mod replies;
pub mod router;

pub use errors::{Error, Result};
