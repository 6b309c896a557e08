// Crate root library declaration and module exports.
pub mod cli;
pub mod commands;
pub mod config;
pub mod dict;
pub mod functions;
pub mod generate;
pub mod paths;
