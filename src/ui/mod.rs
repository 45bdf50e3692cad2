//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Line prompts over any reader
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All session output and prompts go through this module to ensure
//! consistent formatting and proper handling of quiet mode.

pub mod output;
pub mod prompts;
