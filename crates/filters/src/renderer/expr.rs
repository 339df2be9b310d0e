use crate::{
    ast::{
        expr::{BinaryOp, Column, ColumnSource, ExprNode, Expression, Join},
        key_filter::KeyFilter,
        list::ExpressionList,
    },
    renderer::{
        Render, Renderer,
        parens::{is_in_parentheses, sql_prefix},
    },
};

impl Render for Expression {
    fn render_to(&self, r: &mut Renderer) {
        if let Some(node) = self.node() {
            node.render_to(r);
        } else if let Some(sql) = self.raw_sql() {
            r.sql.push_str(sql);
        }
    }
}

impl Render for ExprNode {
    fn render_to(&self, r: &mut Renderer) {
        match self {
            ExprNode::Column(col) => col.render_to(r),
            ExprNode::Constant(val) => r.add_param(val),
            ExprNode::BinaryOp(op) => op.render_to(r),
            ExprNode::Join(join) => join.render_to(r),
            ExprNode::List(list) => list.render_to(r),
            ExprNode::Select(select) => select.render_to(r),
            ExprNode::KeyFilter(filter) => filter.render_to(r),
        }
    }
}

/// Reference form only; the alias is added by select lists.
impl Render for Column {
    fn render_to(&self, r: &mut Renderer) {
        match self.source() {
            ColumnSource::Named { table, name } => {
                let table = table.as_deref().unwrap_or_default();
                r.sql.push_str(&sql_prefix(name, table));
            }
            ColumnSource::Computed(expr) => r.push_wrapped(expr),
        }
    }
}

impl Render for BinaryOp {
    fn render_to(&self, r: &mut Renderer) {
        r.sql.push('(');
        r.push_wrapped(self.left());
        r.sql.push(' ');
        r.sql.push_str(self.op());
        r.sql.push(' ');
        r.push_wrapped(self.right());
        r.sql.push(')');
    }
}

impl Render for Join {
    fn render_to(&self, r: &mut Renderer) {
        render_source(self.left(), r);
        r.sql.push(' ');
        r.sql.push_str(self.kind().keyword());
        r.sql.push(' ');
        render_source(self.right(), r);
        r.sql.push_str(" ON ");
        r.push_wrapped(self.cond());
    }
}

impl Render for ExpressionList {
    fn render_to(&self, r: &mut Renderer) {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            item.render_to(r);
        }
    }
}

impl Render for KeyFilter {
    fn render_to(&self, r: &mut Renderer) {
        self.expr().render_to(r);
    }
}

/// A table-like operand of FROM or JOIN. Subqueries get parentheses, table
/// names and nested joins are emitted as they are.
pub(crate) fn render_source(expr: &Expression, r: &mut Renderer) {
    let sql = r.fragment(expr);
    if expr.as_select().is_some() && !is_in_parentheses(&sql) {
        r.sql.push('(');
        r.sql.push_str(&sql);
        r.sql.push(')');
    } else {
        r.sql.push_str(&sql);
    }
}

#[cfg(test)]
mod tests {
    use model::core::value::Value;

    use crate::{
        ast::{
            expr::{BinaryOp, Column, Expression, Join, JoinKind},
            list::ExpressionList,
            select::Select,
        },
        dialect::Postgres,
        filter::{and_, eq, filter_eq, filter_gt, filter_lt, or_},
        qualified,
        renderer::RenderMode,
    };

    #[test]
    fn test_column_rendering() {
        assert_eq!(Expression::from(Column::new("id")).get_sql(), "id");
        assert_eq!(
            Expression::from(Column::qualified("orders", "id")).get_sql(),
            "orders.id"
        );
        // alias is not part of a plain reference
        let aliased = Column::qualified("o", "id").alias("order_id");
        assert_eq!(Expression::from(aliased).get_sql(), "o.id");

        let computed = Column::computed("price * qty").alias("total");
        assert_eq!(Expression::from(computed).get_sql(), "(price * qty)");
    }

    #[test]
    fn test_constant_modes() {
        let c = Expression::constant("west");
        assert_eq!(c.get_sql(), "'west'");
        let (sql, params) = c.to_bound_sql();
        assert_eq!(sql, "?");
        assert_eq!(params, vec![Value::from("west")]);
    }

    #[test]
    fn test_binary_op_parenthesization() {
        let expr = and_(filter_eq("a", 1), or_(filter_gt("b", 2), filter_lt("c", 3)));
        assert_eq!(expr.get_sql(), "((a = 1) AND ((b > 2) OR (c < 3)))");

        let raw = Expression::binary("a + b", "*", Value::Int(2));
        assert_eq!(raw.get_sql(), "((a + b) * 2)");
    }

    #[test]
    fn test_arithmetic_operands_are_wrapped() {
        assert_eq!(Expression::binary("x", "/", "a*b").get_sql(), "(x / (a*b))");

        let ratio = BinaryOp::new(Value::Int(2), "/", Column::computed("price*qty"));
        assert_eq!(Expression::from(ratio).get_sql(), "(2 / (price*qty))");

        let cast = Expression::binary("x::int", "+", Value::Int(1));
        assert_eq!(cast.get_sql(), "(x::int + 1)");
    }

    #[test]
    fn test_constants_are_never_wrapped() {
        let tiny = filter_eq("x", -1e-7);
        assert_eq!(tiny.get_sql(), "(x = -1e-7)");
        assert_eq!(tiny.to_bound_sql().0, "(x = ?)");

        let bytes = filter_eq("x", vec![1u8]);
        assert_eq!(
            bytes.render_with(&Postgres, RenderMode::Literal),
            r"(x = '\x01'::bytea)"
        );
        assert_eq!(bytes.to_bound_sql_with(&Postgres).0, "(x = $1)");
    }

    #[test]
    fn test_in_list_and_subquery_operands() {
        let list: ExpressionList = [1, 2, 3].into_iter().map(Expression::constant).collect();
        let expr = Expression::binary(Column::new("id"), "IN", list);
        assert_eq!(expr.get_sql(), "(id IN (1, 2, 3))");
        assert_eq!(expr.to_bound_sql().0, "(id IN (?, ?, ?))");

        let sub = Select::new(Column::new("order_id"))
            .from("items")
            .where_clause(filter_gt("qty", 10));
        let expr = Expression::binary(Column::new("id"), "IN", sub);
        let (sql, params) = expr.to_bound_sql();
        assert_eq!(sql, "(id IN (SELECT order_id FROM items WHERE (qty > ?)))");
        assert_eq!(params, vec![Value::Int(10)]);
    }

    #[test]
    fn test_join_rendering() {
        let cond = eq(qualified("orders", "customer_id"), qualified("customers", "id"));
        let join = Join::new("orders", "customers", cond);
        assert_eq!(
            Expression::from(join.clone()).get_sql(),
            "orders JOIN customers ON (orders.customer_id = customers.id)"
        );

        let chained = Join::with_kind(
            JoinKind::Left,
            join,
            "items",
            "items.order_id = orders.id",
        );
        assert_eq!(
            Expression::from(chained).get_sql(),
            "orders JOIN customers ON (orders.customer_id = customers.id) \
             LEFT JOIN items ON (items.order_id = orders.id)"
        );
    }

    #[test]
    fn test_join_with_subquery_side() {
        let sub = Select::new("order_id").from("items");
        let join = Join::new("orders", sub, "orders.id = order_id");
        assert_eq!(
            Expression::from(join).get_sql(),
            "orders JOIN (SELECT order_id FROM items) ON (orders.id = order_id)"
        );
    }

    #[test]
    fn test_expression_list_rendering() {
        assert_eq!(Expression::from(ExpressionList::new()).get_sql(), "");
        let list = ExpressionList::new()
            .with(Column::new("a"))
            .with(Column::new("b"));
        assert_eq!(Expression::from(list).get_sql(), "a, b");
    }

    #[test]
    fn test_postgres_numbering_continues_in_reused_sink() {
        let mut sink = vec![Value::Int(0)];
        let expr: Expression = BinaryOp::new(Column::new("a"), "=", Value::Int(1)).into();
        let sql = expr.render_with(&Postgres, RenderMode::Bind(&mut sink));
        assert_eq!(sql, "(a = $2)");
        assert_eq!(sink, vec![Value::Int(0), Value::Int(1)]);
    }
}
