mod execute;

use super::CommandError;

pub(crate) const NAME: &str = "get_by_order_id";

/// Print the order with the given id
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderByIdCmd {
    pub order_id: i64,
}

impl OrderByIdCmd {
    /// Validate prompt arguments: the first one must be an integer id.
    pub fn from_args(args: &[&str]) -> Result<Self, CommandError> {
        let raw = args.first().ok_or(CommandError::MissingArgument {
            command: NAME,
            argument: "order_id",
        })?;

        let order_id = raw.parse::<i64>().map_err(|_| CommandError::InvalidArgument {
            argument: "order_id",
            value: raw.to_string(),
        })?;

        Ok(Self { order_id })
    }
}
