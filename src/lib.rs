//! Command-line front end for the queens search engine
//!
//! - `cli` - argument parsing and start-state resolution
//! - `render` - board and statistics text
//! - `run` - runs the selected strategies and builds the report

pub mod cli;
pub mod render;
pub mod run;
