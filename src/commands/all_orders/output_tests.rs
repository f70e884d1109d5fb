//! Output formatting tests for order listings.

#[cfg(test)]
mod tests {
    use super::super::execute::OrdersResult;
    use crate::queries::orders::OrderRow;
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;

    // =========================================================================
    // Expected outputs
    // =========================================================================

    const EMPTY_TABLE: &str = "\
id  Дата  Время  Группа анализов  Название анализа  Цена
--  ----  -----  ---------------  ----------------  ----";

    const SINGLE_TABLE: &str = "\
id  Дата        Время     Группа анализов  Название анализа  Цена
--  ----------  --------  ---------------  ----------------  ----
 1  2024-01-10  08:30:00  Hematology       CBC                 20";

    const MULTIPLE_TABLE: &str = "\
id  Дата        Время     Группа анализов  Название анализа    Цена
--  ----------  --------  ---------------  ----------------  ------
 1  2024-01-10  08:30:00  Hematology       CBC                   20
12  2024-02-03  14:05:00  Imaging          MRI               150.50";

    // =========================================================================
    // Fixtures
    // =========================================================================

    fn order(id: i64, date: (i32, u32, u32), time: (u32, u32), group: &str, analysis: &str, price: Decimal) -> OrderRow {
        OrderRow {
            id,
            ordered_at: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                .unwrap()
                .and_hms_opt(time.0, time.1, 0)
                .unwrap(),
            group: group.to_string(),
            analysis: analysis.to_string(),
            price,
        }
    }

    #[fixture]
    fn empty_result() -> OrdersResult {
        OrdersResult { orders: vec![] }
    }

    #[fixture]
    fn single_result() -> OrdersResult {
        OrdersResult {
            orders: vec![order(1, (2024, 1, 10), (8, 30), "Hematology", "CBC", Decimal::from(20))],
        }
    }

    #[fixture]
    fn multiple_result() -> OrdersResult {
        OrdersResult {
            orders: vec![
                order(1, (2024, 1, 10), (8, 30), "Hematology", "CBC", Decimal::from(20)),
                order(12, (2024, 2, 3), (14, 5), "Imaging", "MRI", Decimal::new(15050, 2)),
            ],
        }
    }

    // =========================================================================
    // Tests
    // =========================================================================

    crate::output_table_test! {
        test_name: test_to_table_empty,
        fixture: empty_result,
        fixture_type: OrdersResult,
        expected: EMPTY_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_single,
        fixture: single_result,
        fixture_type: OrdersResult,
        expected: SINGLE_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_multiple,
        fixture: multiple_result,
        fixture_type: OrdersResult,
        expected: MULTIPLE_TABLE,
    }

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: single_result,
        fixture_type: OrdersResult,
        assertions: {
            "/orders/0/id": 1,
            "/orders/0/ordered_at": "2024-01-10T08:30:00",
            "/orders/0/group": "Hematology",
            "/orders/0/analysis": "CBC",
            "/orders/0/price": "20",
        },
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: single_result,
        fixture_type: OrdersResult,
        contains: ["orders", "Hematology", "CBC"],
    }
}
