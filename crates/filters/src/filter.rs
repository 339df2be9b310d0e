//! Combinators for the common filter shapes.

use std::ops::{BitAnd, BitOr};

use model::core::value::Value;

use crate::ast::expr::{BinaryOp, Column, Expression};

/// A filter is any boolean valued expression.
pub type Filter = Expression;

fn filter_op(name: &str, op: &str, value: impl Into<Value>) -> Expression {
    BinaryOp::new(Column::new(name), op, Expression::constant(value)).into()
}

pub fn filter_eq(name: &str, value: impl Into<Value>) -> Expression {
    filter_op(name, "=", value)
}

pub fn filter_ne(name: &str, value: impl Into<Value>) -> Expression {
    filter_op(name, "<>", value)
}

pub fn filter_lt(name: &str, value: impl Into<Value>) -> Expression {
    filter_op(name, "<", value)
}

pub fn filter_gt(name: &str, value: impl Into<Value>) -> Expression {
    filter_op(name, ">", value)
}

pub fn filter_le(name: &str, value: impl Into<Value>) -> Expression {
    filter_op(name, "<=", value)
}

pub fn filter_ge(name: &str, value: impl Into<Value>) -> Expression {
    filter_op(name, ">=", value)
}

fn logical(a: Expression, op: &str, b: Expression) -> Expression {
    if a.is_empty() {
        return b;
    }
    if b.is_empty() {
        return a;
    }
    BinaryOp::new(a, op, b).into()
}

/// `(a AND b)`. An empty operand is the identity: the other side is returned as is.
pub fn and_(a: Expression, b: Expression) -> Expression {
    logical(a, "AND", b)
}

/// `(a OR b)`, with the same empty operand rule as [`and_`].
pub fn or_(a: Expression, b: Expression) -> Expression {
    logical(a, "OR", b)
}

/// Equality between two arbitrary fragments.
pub fn eq(a: impl Into<Expression>, b: impl Into<Expression>) -> Expression {
    BinaryOp::new(a, "=", b).into()
}

/// Equality against a literal. A column on the left is reused as the
/// reference, so `eq_value(&column("x"), v)` matches `filter_eq("x", v)`.
pub fn eq_value(a: &Expression, value: impl Into<Value>) -> Expression {
    eq(a.clone(), Expression::constant(value))
}

impl BitAnd for Expression {
    type Output = Expression;

    fn bitand(self, rhs: Expression) -> Expression {
        and_(self, rhs)
    }
}

impl BitOr for Expression {
    type Output = Expression;

    fn bitor(self, rhs: Expression) -> Expression {
        or_(self, rhs)
    }
}
