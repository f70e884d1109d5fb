use std::error::Error;

use serde::Serialize;

use super::EarningByMonthCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::earnings::{find_earnings_by_month, MonthEarning};

/// Revenue per month, oldest month first
#[derive(Debug, Default, Serialize)]
pub struct MonthEarningsResult {
    pub earnings: Vec<MonthEarning>,
}

impl Execute for EarningByMonthCmd {
    type Output = MonthEarningsResult;

    fn execute(self, db: &mut dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        Ok(MonthEarningsResult {
            earnings: find_earnings_by_month(db)?,
        })
    }
}
