mod execute;
mod output;

pub use execute::{HelpEntry, HelpResult};

pub(crate) const NAME: &str = "help";

/// Usage line and description of every command the prompt accepts.
pub const COMMANDS: [(&str, &str); 6] = [
    ("get_all_orders", "Выводит все заказы на экран"),
    ("get_by_order_id <order_id>", "Выводит заказ с указанным id"),
    (
        "earning_by_group",
        "Выводит данные о доходах, полученных из всех типов анализов",
    ),
    ("earning_by_month", "Выводит данные о доходах, по месяцам"),
    ("help", "Выводит список доступных команд"),
    ("exit", "Выход из программы"),
];

/// List the available commands
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HelpCmd;
