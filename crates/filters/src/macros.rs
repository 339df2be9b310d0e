/// Creates a column expression: `column!("id")` or `column!("orders", "id")`.
#[macro_export]
macro_rules! column {
    ($name:expr) => {
        $crate::ast::expr::Expression::from($crate::ast::expr::Column::new($name))
    };
    ($table:expr, $name:expr) => {
        $crate::ast::expr::Expression::from($crate::ast::expr::Column::qualified($table, $name))
    };
}

/// Creates an aliased column for select lists.
#[macro_export]
macro_rules! column_as {
    // column_as!("id", "user_id")
    ($name:expr, $alias:expr) => {
        $crate::ast::expr::Expression::from($crate::ast::expr::Column::new($name).alias($alias))
    };
    // column_as!("u", "id", "user_id")
    ($table:expr, $name:expr, $alias:expr) => {
        $crate::ast::expr::Expression::from(
            $crate::ast::expr::Column::qualified($table, $name).alias($alias),
        )
    };
}

#[macro_export]
macro_rules! value {
    ($val:expr) => {
        $crate::ast::expr::Expression::constant($val)
    };
}
