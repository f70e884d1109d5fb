mod execute;
mod output;

pub use execute::GroupEarningsResult;

pub(crate) const NAME: &str = "earning_by_group";

/// Print total revenue per analysis group
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EarningByGroupCmd;
