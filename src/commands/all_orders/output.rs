//! Output formatting for order listings.

use super::execute::OrdersResult;
use crate::output::{Align, Outputable, TextTable};

pub const ORDER_HEADERS: [&str; 6] = [
    "id",
    "Дата",
    "Время",
    "Группа анализов",
    "Название анализа",
    "Цена",
];

impl Outputable for OrdersResult {
    fn to_table(&self) -> String {
        let mut table = TextTable::new(&ORDER_HEADERS)
            .align(0, Align::Right)
            .align(5, Align::Right);

        // date + time is one value; it fills the Дата and Время columns
        for order in &self.orders {
            table.push_row(vec![
                order.id.to_string(),
                order.ordered_at.date().to_string(),
                order.ordered_at.time().to_string(),
                order.group.clone(),
                order.analysis.clone(),
                order.price.to_string(),
            ]);
        }

        table.render()
    }
}
