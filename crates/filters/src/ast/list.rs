//! Ordered, comma separated fragment lists.

use std::{collections::HashSet, hash::BuildHasher, ops::Index};

use crate::ast::expr::{ExprNode, Expression};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionList {
    items: Vec<Expression>,
}

impl ExpressionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list of raw SQL names. Items keep the iteration order of `names`.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(|name| Expression::sql(name)).collect()
    }

    /// Builds a list from a hash set.
    ///
    /// The resulting order is the set's iteration order, which is not stable
    /// between runs. Use [`ExpressionList::from_names`] when column order matters.
    pub fn from_name_set<S, H>(names: &HashSet<S, H>) -> Self
    where
        S: AsRef<str>,
        H: BuildHasher,
    {
        names
            .iter()
            .map(|name| Expression::sql(name.as_ref()))
            .collect()
    }

    pub fn append(&mut self, expr: impl Into<Expression>) {
        self.items.push(expr.into());
    }

    /// Chainable form of [`ExpressionList::append`].
    pub fn with(mut self, expr: impl Into<Expression>) -> Self {
        self.append(expr);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, n: usize) -> Option<&Expression> {
        self.items.get(n)
    }

    pub fn items(&self) -> &[Expression] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expression> {
        self.items.iter()
    }
}

impl Index<usize> for ExpressionList {
    type Output = Expression;

    fn index(&self, n: usize) -> &Expression {
        &self.items[n]
    }
}

impl FromIterator<Expression> for ExpressionList {
    fn from_iter<T: IntoIterator<Item = Expression>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Expression>> for ExpressionList {
    fn from(items: Vec<Expression>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a ExpressionList {
    type Item = &'a Expression;
    type IntoIter = std::slice::Iter<'a, Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl From<ExpressionList> for Expression {
    fn from(list: ExpressionList) -> Self {
        Expression::from_node(ExprNode::List(list))
    }
}
