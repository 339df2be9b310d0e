//! Defines the core rendering trait and context for converting an expression
//! tree to SQL text.

use model::core::value::Value;
use tracing::trace;

use crate::{
    ast::expr::Expression,
    dialect::{Ansi, Dialect},
    renderer::parens::sql_parentheses_as_needed,
};

pub mod expr;
pub mod parens;
pub mod select;

/// Collects bound values in the order their placeholders appear.
pub type ParamSink = Vec<Value>;

/// How constants are emitted. The mode is fixed for a whole render.
pub enum RenderMode<'a> {
    /// Constants are inlined as SQL literals. Meant for logs and debugging.
    Literal,

    /// Constants are appended to the sink and replaced by placeholders.
    Bind(&'a mut ParamSink),
}

/// A trait for any node that can be rendered into a SQL string.
pub trait Render {
    fn render_to(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string, routes constants according to the mode,
/// and provides access to the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub dialect: &'a dyn Dialect,
    mode: RenderMode<'a>,
    bound: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect, mode: RenderMode<'a>) -> Self {
        Self {
            sql: String::new(),
            dialect,
            mode,
            bound: 0,
        }
    }

    /// Consumes the renderer and returns the final SQL string.
    pub fn finish(self) -> String {
        self.sql
    }

    /// Number of values bound so far by this renderer.
    pub fn bound(&self) -> usize {
        self.bound
    }

    pub fn add_param(&mut self, value: &Value) {
        match &mut self.mode {
            RenderMode::Literal => {
                let literal = self.dialect.render_literal(value);
                self.sql.push_str(&literal);
            }
            RenderMode::Bind(sink) => {
                sink.push(value.clone());
                self.bound += 1;
                // numbering follows the sink so a reused sink stays consistent
                let placeholder = self.dialect.get_placeholder(sink.len() - 1);
                self.sql.push_str(&placeholder);
            }
        }
    }

    /// Renders `node` into a detached string. Parameters still go to the sink.
    pub fn fragment<R: Render + ?Sized>(&mut self, node: &R) -> String {
        let outer = std::mem::take(&mut self.sql);
        node.render_to(self);
        std::mem::replace(&mut self.sql, outer)
    }

    /// Appends `expr`, wrapped in parentheses unless it is already self-delimiting.
    ///
    /// Constants are never wrapped, so a literal and its placeholder occupy
    /// the same spot in both modes.
    pub fn push_wrapped(&mut self, expr: &Expression) {
        if expr.as_constant().is_some() {
            expr.render_to(self);
            return;
        }
        let sql = self.fragment(expr);
        self.sql.push_str(&sql_parentheses_as_needed(&sql));
    }
}

impl Expression {
    /// Renders with the default ANSI dialect.
    pub fn render(&self, mode: RenderMode<'_>) -> String {
        self.render_with(&Ansi, mode)
    }

    pub fn render_with(&self, dialect: &dyn Dialect, mode: RenderMode<'_>) -> String {
        let mut renderer = Renderer::new(dialect, mode);
        self.render_to(&mut renderer);
        let bound = renderer.bound();
        let sql = renderer.finish();
        trace!(
            dialect = %dialect.name(),
            sql_len = sql.len(),
            bound,
            "rendered expression"
        );
        sql
    }

    /// Literal-mode rendering, with every constant inlined.
    pub fn get_sql(&self) -> String {
        self.render(RenderMode::Literal)
    }

    /// Parameterized rendering into a fresh sink.
    pub fn to_bound_sql(&self) -> (String, Vec<Value>) {
        self.to_bound_sql_with(&Ansi)
    }

    pub fn to_bound_sql_with(&self, dialect: &dyn Dialect) -> (String, Vec<Value>) {
        let mut params = ParamSink::new();
        let sql = self.render_with(dialect, RenderMode::Bind(&mut params));
        (sql, params)
    }
}
