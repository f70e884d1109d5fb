//! Identifier and literal quoting for generated PostgreSQL.

/// Quote an identifier for use in generated SQL.
///
/// Always quotes, so reserved words such as `groups` and mixed-case names
/// survive unchanged. Embedded double quotes are doubled.
pub fn quote_ident(ident: &str) -> String {
    let mut result = String::with_capacity(ident.len() + 2);
    result.push('"');
    for c in ident.chars() {
        if c == '"' {
            result.push('"');
        }
        result.push(c);
    }
    result.push('"');
    result
}

/// Quote a string as a PostgreSQL standard-conforming literal.
///
/// Only used for fixed keywords such as the `date_trunc` field name; user
/// input is always bound as a parameter.
pub fn escape_literal(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('\'');
    for c in s.chars() {
        if c == '\'' {
            result.push('\'');
        }
        result.push(c);
    }
    result.push('\'');
    result
}
