use super::execute::HelpResult;
use crate::output::{Outputable, TextTable};

const HEADERS: [&str; 2] = ["Команда", "Описание"];

impl Outputable for HelpResult {
    fn to_table(&self) -> String {
        let mut table = TextTable::new(&HEADERS);
        for entry in &self.commands {
            table.push_row(vec![entry.command.to_string(), entry.description.to_string()]);
        }
        table.render()
    }
}
