//! Minimal voting service.
//!
//! Options and submissions live in two flat JSON files. The server tallies
//! votes per option on every request and exports the statistics as JSON,
//! XML or HTML.

pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod handlers;
pub mod models;
pub mod voting;
