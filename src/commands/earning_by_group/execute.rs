use std::error::Error;

use serde::Serialize;

use super::EarningByGroupCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::earnings::{find_earnings_by_group, GroupEarning};

/// Revenue per analysis group, ordered by group name
#[derive(Debug, Default, Serialize)]
pub struct GroupEarningsResult {
    pub earnings: Vec<GroupEarning>,
}

impl Execute for EarningByGroupCmd {
    type Output = GroupEarningsResult;

    fn execute(self, db: &mut dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        Ok(GroupEarningsResult {
            earnings: find_earnings_by_group(db)?,
        })
    }
}
