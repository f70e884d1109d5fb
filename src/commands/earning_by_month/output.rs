use super::execute::MonthEarningsResult;
use crate::output::{Align, Outputable, TextTable};

const HEADERS: [&str; 2] = ["Месяц", "Общая прибыль"];

impl Outputable for MonthEarningsResult {
    fn to_table(&self) -> String {
        let mut table = TextTable::new(&HEADERS).align(1, Align::Right);
        for earning in &self.earnings {
            table.push_row(vec![earning.month.to_string(), earning.total.to_string()]);
        }
        table.render()
    }
}
