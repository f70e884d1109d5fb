mod execute;
mod output;

pub use execute::MonthEarningsResult;

pub(crate) const NAME: &str = "earning_by_month";

/// Print total revenue per calendar month of the order date
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EarningByMonthCmd;
