//! Declarative macros for generating command and output tests.
//!
//! This module provides macros to reduce boilerplate in command parsing,
//! execution and formatting tests. Instead of writing repetitive test
//! functions, you can declare the test cases and let the macro generate the
//! actual test code.

// =============================================================================
// Parse Test Macros
// =============================================================================

/// Generate a test that a prompt line parses to the expected command.
///
/// # Example
///
/// ```ignore
/// repl_parse_test! {
///     test_name: test_parse_help,
///     line: "help",
///     expected: ReplCommand::Help(HelpCmd),
/// }
/// ```
#[macro_export]
macro_rules! repl_parse_test {
    (
        test_name: $test_name:ident,
        line: $line:expr,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let parsed = crate::commands::ReplCommand::parse($line)
                .expect("Line should parse");
            assert_eq!(parsed, Some($expected), concat!("Parse mismatch for: ", stringify!($line)));
        }
    };
}

/// Generate a test that a prompt line is rejected with the expected error.
#[macro_export]
macro_rules! repl_parse_error_test {
    (
        test_name: $test_name:ident,
        line: $line:expr,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = crate::commands::ReplCommand::parse($line);
            assert_eq!(result, Err($expected));
        }
    };
}

// =============================================================================
// Execute Test Macros
// =============================================================================

/// Generate a test that runs a command against a fixture backend and checks
/// the result.
///
/// # Example
///
/// ```ignore
/// execute_test! {
///     test_name: test_all_orders,
///     fixture: single_order_db,
///     cmd: AllOrdersCmd,
///     assertions: |result| {
///         assert_eq!(result.orders.len(), 1);
///     },
/// }
/// ```
#[macro_export]
macro_rules! execute_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        cmd: $cmd:expr,
        assertions: |$result:ident| $assertions:block $(,)?
    ) => {
        #[rstest]
        fn $test_name(mut $fixture: crate::test_utils::MockBackend) {
            use crate::commands::Execute;
            let $result = $cmd.execute(&mut $fixture).expect("Execute should succeed");
            $assertions
        }
    };
}

/// Generate a test that a command surfaces a database failure.
#[macro_export]
macro_rules! execute_error_test {
    (
        test_name: $test_name:ident,
        cmd: $cmd:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            use crate::commands::Execute;
            let mut db = crate::test_utils::MockBackend::new().with_error("connection reset");
            let result = $cmd.execute(&mut db);
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("connection reset"));
        }
    };
}

// =============================================================================
// Output Test Macros
// =============================================================================

/// Generate a test that verifies table output matches expected string.
///
/// Works with rstest fixtures by accepting a fixture parameter.
///
/// # Example
/// ```ignore
/// output_table_test! {
///     test_name: test_to_table_empty,
///     fixture: empty_result,
///     fixture_type: OrdersResult,
///     expected: EMPTY_TABLE,
/// }
/// ```
#[macro_export]
macro_rules! output_table_test {
    // With format parameter (Json, Toon)
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr,
        format: $format:ident $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            assert_eq!($fixture.format(OutputFormat::$format), $expected);
        }
    };
    // Default table format
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            assert_eq!($fixture.to_table(), $expected);
        }
    };
}

/// Generate a test that verifies table output contains expected strings.
///
/// Use this when exact string matching is too brittle.
#[macro_export]
macro_rules! output_table_contains_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            let output = $fixture.to_table();
            $(
                assert!(output.contains($needle), concat!("Table output should contain: ", $needle));
            )*
        }
    };
}

/// Generate a test that verifies JSON output is valid and contains expected fields.
///
/// # Example
/// ```ignore
/// output_json_test! {
///     test_name: test_format_json,
///     fixture: single_result,
///     fixture_type: OrdersResult,
///     assertions: {
///         "/orders/0/group": "Hematology",
///     },
/// }
/// ```
#[macro_export]
macro_rules! output_json_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        assertions: { $($pointer:literal : $expected:expr),* $(,)? } $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Json);
            let parsed: serde_json::Value = serde_json::from_str(&output)
                .expect("Should produce valid JSON");
            $(
                assert_eq!(
                    parsed.pointer($pointer),
                    Some(&serde_json::json!($expected)),
                    concat!("JSON field mismatch: ", $pointer)
                );
            )*
        }
    };
}

/// Generate a test that verifies Toon output contains expected strings.
#[macro_export]
macro_rules! output_toon_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Toon);
            $(
                assert!(output.contains($needle), concat!("Toon output should contain: ", $needle));
            )*
        }
    };
}
