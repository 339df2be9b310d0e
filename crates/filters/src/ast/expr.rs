//! Defines the `Expression` handle and the closed set of nodes behind it.

use std::sync::Arc;

use model::core::value::Value;

use crate::ast::{key_filter::KeyFilter, list::ExpressionList, select::Select};

/// A cheap, shareable handle to a (possibly empty) SQL fragment.
///
/// Cloning only bumps a reference count; nodes are never mutated once they
/// sit behind a handle, so clones can be rendered from several threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    repr: Repr,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum Repr {
    #[default]
    Empty,
    /// Literal SQL text with no structure behind it.
    Sql(Arc<str>),
    Node(Arc<ExprNode>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
    /// A column reference or an aliased computed expression.
    Column(Column),

    /// A literal, inlined or bound depending on the render mode.
    Constant(Value),

    /// An infix operator application, e.g. `(a = ?)` or `(x AND y)`.
    BinaryOp(BinaryOp),

    /// `left JOIN right ON cond`.
    Join(Join),

    /// Comma separated fragments: select lists, IN lists, tuples.
    List(ExpressionList),

    /// A complete SELECT statement usable as a subquery.
    Select(Select),

    /// AND of per-column equalities built from a row key.
    KeyFilter(KeyFilter),
}

impl Expression {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps raw SQL text. Empty text yields the empty expression.
    pub fn sql(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::empty();
        }
        Self {
            repr: Repr::Sql(Arc::from(text)),
        }
    }

    pub fn from_node(node: ExprNode) -> Self {
        Self {
            repr: Repr::Node(Arc::new(node)),
        }
    }

    pub fn constant(value: impl Into<Value>) -> Self {
        Self::from_node(ExprNode::Constant(value.into()))
    }

    pub fn binary(left: impl Into<Expression>, op: &str, right: impl Into<Expression>) -> Self {
        BinaryOp::new(left, op, right).into()
    }

    /// True when there is neither SQL text nor a node, i.e. "clause not given".
    pub fn is_empty(&self) -> bool {
        matches!(self.repr, Repr::Empty)
    }

    pub fn raw_sql(&self) -> Option<&str> {
        match &self.repr {
            Repr::Sql(text) => Some(&**text),
            _ => None,
        }
    }

    pub fn node(&self) -> Option<&ExprNode> {
        match &self.repr {
            Repr::Node(node) => Some(&**node),
            _ => None,
        }
    }

    pub fn as_column(&self) -> Option<&Column> {
        match self.node()? {
            ExprNode::Column(col) => Some(col),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<&Value> {
        match self.node()? {
            ExprNode::Constant(val) => Some(val),
            _ => None,
        }
    }

    pub fn as_binary_op(&self) -> Option<&BinaryOp> {
        match self.node()? {
            ExprNode::BinaryOp(op) => Some(op),
            _ => None,
        }
    }

    pub fn as_join(&self) -> Option<&Join> {
        match self.node()? {
            ExprNode::Join(join) => Some(join),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ExpressionList> {
        match self.node()? {
            ExprNode::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_select(&self) -> Option<&Select> {
        match self.node()? {
            ExprNode::Select(select) => Some(select),
            _ => None,
        }
    }

    pub fn as_key_filter(&self) -> Option<&KeyFilter> {
        match self.node()? {
            ExprNode::KeyFilter(filter) => Some(filter),
            _ => None,
        }
    }

    /// Whether both handles point at the very same node.
    pub fn shares_node_with(&self, other: &Expression) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Node(a), Repr::Node(b)) => Arc::ptr_eq(a, b),
            (Repr::Sql(a), Repr::Sql(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Expression {
    fn from(text: &str) -> Self {
        Self::sql(text)
    }
}

impl From<String> for Expression {
    fn from(text: String) -> Self {
        Self::sql(text)
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Self::constant(value)
    }
}

impl From<Column> for Expression {
    fn from(col: Column) -> Self {
        Self::from_node(ExprNode::Column(col))
    }
}

impl From<BinaryOp> for Expression {
    fn from(op: BinaryOp) -> Self {
        Self::from_node(ExprNode::BinaryOp(op))
    }
}

impl From<Join> for Expression {
    fn from(join: Join) -> Self {
        Self::from_node(ExprNode::Join(join))
    }
}

/// Where a column's text comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSource {
    /// `table.name` or a bare `name`.
    Named { table: Option<String>, name: String },

    /// Any expression, e.g. `COUNT(*)` or a subquery, usually given an alias.
    Computed(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    source: ColumnSource,
    alias: Option<String>,
}

impl Column {
    pub fn new(name: &str) -> Self {
        Self::qualified("", name)
    }

    /// An empty `table` means the column is not qualified.
    pub fn qualified(table: &str, name: &str) -> Self {
        Self {
            source: ColumnSource::Named {
                table: non_empty(table),
                name: name.to_string(),
            },
            alias: None,
        }
    }

    pub fn computed(expr: impl Into<Expression>) -> Self {
        Self {
            source: ColumnSource::Computed(expr.into()),
            alias: None,
        }
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.alias = non_empty(alias);
        self
    }

    pub fn source(&self) -> &ColumnSource {
        &self.source
    }

    pub fn table(&self) -> Option<&str> {
        match &self.source {
            ColumnSource::Named { table, .. } => table.as_deref(),
            ColumnSource::Computed(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match &self.source {
            ColumnSource::Named { name, .. } => Some(name),
            ColumnSource::Computed(_) => None,
        }
    }

    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

/// Infix operator application. The operator text is passed through as is.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    left: Expression,
    op: String,
    right: Expression,
}

impl BinaryOp {
    pub fn new(left: impl Into<Expression>, op: &str, right: impl Into<Expression>) -> Self {
        Self {
            left: left.into(),
            op: op.to_string(),
            right: right.into(),
        }
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn op(&self) -> &str {
        &self.op
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinKind {
    /// Renders as a bare `JOIN`.
    #[default]
    Plain,
    Inner,
    Left,
    Right,
    Full,
}

impl JoinKind {
    pub fn keyword(self) -> &'static str {
        match self {
            JoinKind::Plain => "JOIN",
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL OUTER JOIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    kind: JoinKind,
    left: Expression,
    right: Expression,
    cond: Expression,
}

impl Join {
    pub fn new(
        left: impl Into<Expression>,
        right: impl Into<Expression>,
        cond: impl Into<Expression>,
    ) -> Self {
        Self::with_kind(JoinKind::Plain, left, right, cond)
    }

    pub fn with_kind(
        kind: JoinKind,
        left: impl Into<Expression>,
        right: impl Into<Expression>,
        cond: impl Into<Expression>,
    ) -> Self {
        Self {
            kind,
            left: left.into(),
            right: right.into(),
            cond: cond.into(),
        }
    }

    pub fn left_join(
        left: impl Into<Expression>,
        right: impl Into<Expression>,
        cond: impl Into<Expression>,
    ) -> Self {
        Self::with_kind(JoinKind::Left, left, right, cond)
    }

    pub fn kind(&self) -> JoinKind {
        self.kind
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }

    pub fn cond(&self) -> &Expression {
        &self.cond
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_expression() {
        assert!(Expression::empty().is_empty());
        assert!(Expression::sql("").is_empty());
        assert!(!Expression::sql("1 = 1").is_empty());
        assert!(!Expression::from(Column::new("id")).is_empty());
    }

    #[test]
    fn test_clone_shares_node() {
        let expr = Expression::binary(Column::new("a"), "=", Value::Int(1));
        let copy = expr.clone();
        assert!(copy.shares_node_with(&expr));
        assert_eq!(copy, expr);

        let rebuilt = Expression::binary(Column::new("a"), "=", Value::Int(1));
        assert!(!rebuilt.shares_node_with(&expr));
        assert_eq!(rebuilt, expr);
    }

    #[test]
    fn test_column_accessors() {
        let col = Column::qualified("orders", "id").alias("order_id");
        assert_eq!(col.table(), Some("orders"));
        assert_eq!(col.name(), Some("id"));
        assert_eq!(col.alias_name(), Some("order_id"));

        let bare = Column::qualified("", "id").alias("");
        assert_eq!(bare.table(), None);
        assert_eq!(bare.alias_name(), None);
    }

    #[test]
    fn test_node_accessors() {
        let op: Expression = BinaryOp::new(Column::new("a"), "<", Value::Int(3)).into();
        let inner = op.as_binary_op().unwrap();
        assert_eq!(inner.op(), "<");
        assert_eq!(inner.left().as_column().unwrap().name(), Some("a"));
        assert_eq!(inner.right().as_constant(), Some(&Value::Int(3)));
        assert!(op.as_join().is_none());
        assert!(op.raw_sql().is_none());
    }

    #[test]
    fn test_join_kind_keywords() {
        let join = Join::left_join("a", "b", "a.id = b.a_id");
        assert_eq!(join.kind(), JoinKind::Left);
        assert_eq!(join.kind().keyword(), "LEFT JOIN");
        assert_eq!(JoinKind::default().keyword(), "JOIN");
        assert_eq!(join.cond().raw_sql(), Some("a.id = b.a_id"));
    }

    #[test]
    fn test_expression_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Expression>();
    }
}
