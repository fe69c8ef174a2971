//! P360 catalog browser library exports for testing

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod images;
pub mod operations;
pub mod state;
pub mod ui;
