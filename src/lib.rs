//! EBU PromptHelper library
//!
//! Color palette generation for image prompts: a named color registry with
//! RGB/HLS math, eight harmony-based palette generators and a selector that
//! honors family preferences. Alongside sit the prompt helpers: text
//! utilities, date strings, season and weather phrases, and a character
//! describer.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod palette;
pub mod prompt;
pub mod rng;

pub use error::{PromptError, Result};
