//! Terminal UI: colored logging and interactive prompts

pub mod logger;
pub mod prompt;

pub use logger::Logger;
