//! Primary key lookup filters.

use model::core::key::Key;
use tracing::warn;

use crate::{
    ast::expr::{BinaryOp, Column, ExprNode, Expression},
    error::{OrmError, Result},
    filter::and_,
};

/// The AND of `table.column = value` for every part of a [`Key`], in key order.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyFilter {
    key: Key,
    expr: Expression,
}

impl KeyFilter {
    /// Fails with [`OrmError::Config`] when the key has no columns, since such a
    /// key can never identify a row.
    pub fn new(key: Key) -> Result<Self> {
        if key.is_empty() {
            warn!(table = %key.table, "rejecting key filter over an empty key");
            return Err(OrmError::Config(format!(
                "key for table '{}' has no columns",
                key.table
            )));
        }

        let expr = Self::build_expr(&key);
        Ok(Self { key, expr })
    }

    fn build_expr(key: &Key) -> Expression {
        key.parts
            .iter()
            .fold(Expression::empty(), |acc, (column, value)| {
                let cond = BinaryOp::new(
                    Column::qualified(&key.table, column),
                    "=",
                    Expression::constant(value.clone()),
                );
                and_(acc, cond.into())
            })
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The conjunction this filter renders as.
    pub fn expr(&self) -> &Expression {
        &self.expr
    }
}

impl From<KeyFilter> for Expression {
    fn from(filter: KeyFilter) -> Self {
        Expression::from_node(ExprNode::KeyFilter(filter))
    }
}
