pub mod ast;
pub mod config;
pub mod dialect;
pub mod error;
pub mod filter;
pub mod macros;
pub mod renderer;
pub mod tables;

pub use ast::{
    expr::{BinaryOp, Column, ColumnSource, ExprNode, Expression, Join, JoinKind},
    key_filter::KeyFilter,
    list::ExpressionList,
    select::Select,
};
pub use config::{DialectKind, RenderSettings};
pub use dialect::{Ansi, Dialect, MySql, Postgres};
pub use error::{OrmError, Result};
pub use filter::{
    Filter, and_, eq, eq_value, filter_eq, filter_ge, filter_gt, filter_le, filter_lt, filter_ne,
    or_,
};
pub use model::core::{key::Key, value::Value};
pub use renderer::{ParamSink, RenderMode};
pub use tables::find_all_tables;

pub fn column(name: &str) -> Expression {
    Column::new(name).into()
}

pub fn qualified(table: &str, name: &str) -> Expression {
    Column::qualified(table, name).into()
}

pub fn value(val: impl Into<Value>) -> Expression {
    Expression::constant(val)
}
