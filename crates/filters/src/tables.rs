//! Discovery of the tables an expression tree refers to.

use tracing::debug;

use crate::ast::expr::{ColumnSource, ExprNode, Expression};

/// Appends every table qualifier found in `expr` to `tables`.
///
/// The walk is depth first, left to right, and names already present in
/// `tables` are not added again, so the result is in first-seen order.
/// Raw SQL fragments are opaque and contribute nothing.
pub fn find_all_tables(expr: &Expression, tables: &mut Vec<String>) {
    let before = tables.len();
    collect(expr, tables);
    debug!(
        found = tables.len() - before,
        total = tables.len(),
        "collected referenced tables"
    );
}

fn collect(expr: &Expression, tables: &mut Vec<String>) {
    let Some(node) = expr.node() else {
        return;
    };

    match node {
        ExprNode::Column(col) => match col.source() {
            ColumnSource::Named {
                table: Some(table), ..
            } => push_unique(tables, table),
            ColumnSource::Named { table: None, .. } => {}
            ColumnSource::Computed(inner) => collect(inner, tables),
        },
        ExprNode::Constant(_) => {}
        ExprNode::BinaryOp(op) => {
            collect(op.left(), tables);
            collect(op.right(), tables);
        }
        ExprNode::Join(join) => {
            collect(join.left(), tables);
            collect(join.right(), tables);
            collect(join.cond(), tables);
        }
        ExprNode::List(list) => {
            for item in list {
                collect(item, tables);
            }
        }
        ExprNode::Select(select) => {
            collect(select.select_list(), tables);
            for (_, clause) in select.clauses() {
                collect(clause, tables);
            }
        }
        ExprNode::KeyFilter(filter) => collect(filter.expr(), tables),
    }
}

fn push_unique(tables: &mut Vec<String>, table: &str) {
    if !tables.iter().any(|t| t == table) {
        tables.push(table.to_string());
    }
}

impl Expression {
    pub fn tables(&self) -> Vec<String> {
        let mut tables = Vec::new();
        find_all_tables(self, &mut tables);
        tables
    }
}
