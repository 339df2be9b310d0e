//! Defines the SELECT statement node and its fluent builder.

use crate::ast::expr::{ExprNode, Expression};

/// A SELECT statement. Unset clauses are empty expressions and render nothing.
///
/// Builder methods consume and return the value, so a `Select` is only ever
/// mutated by its single owner before it is frozen into an [`Expression`].
/// Setting a clause twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    /// The list of columns or expressions to be returned.
    select_list: Expression,
    from: Expression,
    where_clause: Expression,
    group_by: Expression,
    having: Expression,
    order_by: Expression,
}

impl Select {
    pub fn new(select_list: impl Into<Expression>) -> Self {
        Self {
            select_list: select_list.into(),
            ..Default::default()
        }
    }

    /// Sets the `FROM` source: a table name, a join tree or a subquery.
    pub fn from(mut self, from: impl Into<Expression>) -> Self {
        self.from = from.into();
        self
    }

    pub fn where_clause(mut self, condition: impl Into<Expression>) -> Self {
        self.where_clause = condition.into();
        self
    }

    pub fn group_by(mut self, group_by: impl Into<Expression>) -> Self {
        self.group_by = group_by.into();
        self
    }

    pub fn having(mut self, condition: impl Into<Expression>) -> Self {
        self.having = condition.into();
        self
    }

    pub fn order_by(mut self, order_by: impl Into<Expression>) -> Self {
        self.order_by = order_by.into();
        self
    }

    pub fn select_list(&self) -> &Expression {
        &self.select_list
    }

    pub fn from_expr(&self) -> &Expression {
        &self.from
    }

    pub fn where_expr(&self) -> &Expression {
        &self.where_clause
    }

    pub fn group_by_expr(&self) -> &Expression {
        &self.group_by
    }

    pub fn having_expr(&self) -> &Expression {
        &self.having
    }

    pub fn order_by_expr(&self) -> &Expression {
        &self.order_by
    }

    /// Clauses in rendering order, keyword first.
    pub(crate) fn clauses(&self) -> [(&'static str, &Expression); 5] {
        [
            ("FROM", &self.from),
            ("WHERE", &self.where_clause),
            ("GROUP BY", &self.group_by),
            ("HAVING", &self.having),
            ("ORDER BY", &self.order_by),
        ]
    }
}

impl From<Select> for Expression {
    fn from(select: Select) -> Self {
        Expression::from_node(ExprNode::Select(select))
    }
}
