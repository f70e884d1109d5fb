//! Output formatting for revenue per analysis group.

use super::execute::GroupEarningsResult;
use crate::output::{Align, Outputable, TextTable};

const HEADERS: [&str; 2] = ["Группа анализов", "Общая прибыль"];

impl Outputable for GroupEarningsResult {
    fn to_table(&self) -> String {
        let mut table = TextTable::new(&HEADERS).align(1, Align::Right);
        for earning in &self.earnings {
            table.push_row(vec![earning.group.clone(), earning.total.to_string()]);
        }
        table.render()
    }
}
