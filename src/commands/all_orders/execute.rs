use std::error::Error;

use serde::Serialize;

use super::AllOrdersCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::orders::{find_orders, OrderRow};

/// Result of the order listing commands
#[derive(Debug, Default, Serialize)]
pub struct OrdersResult {
    pub orders: Vec<OrderRow>,
}

impl Execute for AllOrdersCmd {
    type Output = OrdersResult;

    fn execute(self, db: &mut dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        Ok(OrdersResult {
            orders: find_orders(db)?,
        })
    }
}
