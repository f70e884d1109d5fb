use std::error::Error;

use super::OrderByIdCmd;
use crate::commands::{Execute, OrdersResult};
use crate::db::DatabaseBackend;
use crate::queries::orders::find_order_by_id;

impl Execute for OrderByIdCmd {
    type Output = OrdersResult;

    fn execute(self, db: &mut dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        Ok(OrdersResult {
            orders: find_order_by_id(db, self.order_id)?,
        })
    }
}
