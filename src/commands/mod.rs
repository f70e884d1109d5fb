//! Command definitions and implementations.
//!
//! Each report command is defined in its own module with:
//! - The command struct and its argument validation
//! - `execute.rs`: the `Execute` impl producing a serializable result
//! - `output.rs`: table formatting for that result
//!
//! `ReplCommand` ties them together: one prompt line parses into exactly one
//! variant, and `run` dispatches over the enum.

mod all_orders;
mod earning_by_group;
mod earning_by_month;
mod help;
mod order_by_id;


pub use all_orders::{AllOrdersCmd, OrdersResult};
pub use earning_by_group::{EarningByGroupCmd, GroupEarningsResult};
pub use earning_by_month::{EarningByMonthCmd, MonthEarningsResult};
pub use help::{HelpCmd, HelpEntry, HelpResult, COMMANDS};
pub use order_by_id::OrderByIdCmd;

use std::error::Error;

use thiserror::Error;

use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Printed for any command word not in the dispatch table.
pub const UNKNOWN_COMMAND: &str = "Неизвестная команда";

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, db: &mut dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>>;
}

/// Malformed command arguments.
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("{command} requires an argument <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("invalid {argument} '{value}': expected an integer")]
    InvalidArgument {
        argument: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// get_all_orders
    GetAllOrders(AllOrdersCmd),
    /// get_by_order_id <order_id>
    GetByOrderId(OrderByIdCmd),
    /// earning_by_group
    EarningByGroup(EarningByGroupCmd),
    /// earning_by_month
    EarningByMonth(EarningByMonthCmd),
    Help(HelpCmd),
    Exit,
    /// Catch-all for unknown command words
    Unknown(String),
}

impl ReplCommand {
    /// Parse one prompt line.
    ///
    /// Returns `Ok(None)` for blank input. The first whitespace-separated
    /// token selects the command; surplus arguments are ignored.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match word {
            all_orders::NAME => Self::GetAllOrders(AllOrdersCmd),
            order_by_id::NAME => Self::GetByOrderId(OrderByIdCmd::from_args(&args)?),
            earning_by_group::NAME => Self::EarningByGroup(EarningByGroupCmd),
            earning_by_month::NAME => Self::EarningByMonth(EarningByMonthCmd),
            help::NAME => Self::Help(HelpCmd),
            "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        };
        Ok(Some(command))
    }

    /// Parse trailing command-line words as a single command line.
    pub fn from_words(words: &[String]) -> Result<Option<Self>, CommandError> {
        Self::parse(&words.join(" "))
    }

    /// Execute the command and return formatted output
    pub fn run(
        self,
        db: &mut dyn DatabaseBackend,
        format: OutputFormat,
    ) -> Result<String, Box<dyn Error>> {
        match self {
            ReplCommand::GetAllOrders(cmd) => {
                let result = cmd.execute(db)?;
                Ok(result.format(format))
            }
            ReplCommand::GetByOrderId(cmd) => {
                let result = cmd.execute(db)?;
                Ok(result.format(format))
            }
            ReplCommand::EarningByGroup(cmd) => {
                let result = cmd.execute(db)?;
                Ok(result.format(format))
            }
            ReplCommand::EarningByMonth(cmd) => {
                let result = cmd.execute(db)?;
                Ok(result.format(format))
            }
            ReplCommand::Help(cmd) => {
                let result = cmd.execute(db)?;
                Ok(result.format(format))
            }
            ReplCommand::Exit => Ok(String::new()),
            ReplCommand::Unknown(_) => Ok(UNKNOWN_COMMAND.to_string()),
        }
    }
}
