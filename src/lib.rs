pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;
pub mod http;
pub mod openrouter;
pub mod output;
pub mod prelude;
pub mod prompt;
pub mod provider;

pub use crate::prelude::*;
