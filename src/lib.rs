//! hospital_report library - reports over hospital laboratory orders
//!
//! Provides the PostgreSQL data access layer, the report queries, command
//! parsing and execution, and output formatting used by the interactive
//! prompt.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod output;
pub mod queries;
pub mod repl;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
