//! Defines the `Dialect` trait for placeholder and literal syntax.

use model::core::value::Value;

pub trait Dialect: Send + Sync {
    /// Returns the placeholder for the parameter at `index` (zero based).
    ///
    /// - ANSI and MySQL use `?`
    /// - PostgreSQL uses `$1`, `$2`, etc.
    fn get_placeholder(&self, index: usize) -> String;

    /// Renders a value as inline SQL literal syntax.
    fn render_literal(&self, value: &Value) -> String {
        value.to_string()
    }

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;
}

/// Positional `?` placeholders and standard literal quoting.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ansi;

impl Dialect for Ansi {
    fn get_placeholder(&self, _index: usize) -> String {
        "?".into()
    }

    fn name(&self) -> String {
        "ANSI".into()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Postgres;

impl Dialect for Postgres {
    fn get_placeholder(&self, index: usize) -> String {
        format!("${}", index + 1)
    }

    fn render_literal(&self, value: &Value) -> String {
        match value.hex_bytes() {
            Some(hex) => format!("'\\x{hex}'::bytea"),
            None => value.to_string(),
        }
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MySql;

impl Dialect for MySql {
    fn get_placeholder(&self, _index: usize) -> String {
        "?".into()
    }

    fn render_literal(&self, value: &Value) -> String {
        match value {
            // backslash is an escape character inside MySQL strings
            Value::String(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "''")),
            _ => value.to_string(),
        }
    }

    fn name(&self) -> String {
        "MySQL".into()
    }
}
