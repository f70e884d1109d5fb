mod execute;
mod output;
mod output_tests;

pub use execute::OrdersResult;

pub(crate) const NAME: &str = "get_all_orders";

/// Print every order joined with its analysis and group
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AllOrdersCmd;
