//! Command handlers for the poe-item CLI

pub mod configure;
pub mod parse;
