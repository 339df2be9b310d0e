//! Render settings shared by the statement builders that consume this crate.

use model::core::value::Value;
use serde::{Deserialize, Serialize};

use crate::{
    ast::expr::Expression,
    dialect::{Ansi, Dialect, MySql, Postgres},
    error::Result,
    renderer::RenderMode,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    #[default]
    Ansi,
    Postgres,
    MySql,
}

impl DialectKind {
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            DialectKind::Ansi => &Ansi,
            DialectKind::Postgres => &Postgres,
            DialectKind::MySql => &MySql,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub dialect: DialectKind,

    /// Inline every constant instead of binding it. Only for diagnostics.
    pub inline_literals: bool,
}

impl RenderSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn dialect(&self) -> &'static dyn Dialect {
        self.dialect.dialect()
    }

    /// Renders `expr` as configured. Parameters are empty when literals are inlined.
    pub fn render(&self, expr: &Expression) -> (String, Vec<Value>) {
        if self.inline_literals {
            (expr.render_with(self.dialect(), RenderMode::Literal), Vec::new())
        } else {
            expr.to_bound_sql_with(self.dialect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::OrmError, filter::filter_eq};

    #[test]
    fn test_defaults() {
        let settings = RenderSettings::from_json_str("{}").unwrap();
        assert_eq!(settings, RenderSettings::default());
        assert_eq!(settings.dialect().name(), "ANSI");
    }

    #[test]
    fn test_parse_dialect() {
        let settings = RenderSettings::from_json_str(r#"{"dialect": "postgres"}"#).unwrap();
        assert_eq!(settings.dialect, DialectKind::Postgres);

        let (sql, params) = settings.render(&filter_eq("id", 3));
        assert_eq!(sql, "(id = $1)");
        assert_eq!(params, vec![Value::Int(3)]);

        let settings = RenderSettings::from_json_str(r#"{"dialect": "mysql"}"#).unwrap();
        assert_eq!(settings.dialect().name(), "MySQL");
    }

    #[test]
    fn test_inline_literals() {
        let settings = RenderSettings {
            inline_literals: true,
            ..Default::default()
        };
        let (sql, params) = settings.render(&filter_eq("id", 3));
        assert_eq!(sql, "(id = 3)");
        assert!(params.is_empty());
    }

    #[test]
    fn test_unknown_dialect_is_rejected() {
        let err = RenderSettings::from_json_str(r#"{"dialect": "oracle"}"#).unwrap_err();
        assert!(matches!(err, OrmError::InvalidSettings(_)));
    }
}
