use crate::{
    ast::{expr::Expression, select::Select},
    renderer::{Render, Renderer, expr::render_source, parens::sql_alias},
};

impl Render for Select {
    fn render_to(&self, r: &mut Renderer) {
        // 1. SELECT list, with aliases on its top-level items
        r.sql.push_str("SELECT ");
        let list = r.fragment(&SelectList(self.select_list()));
        if list.is_empty() {
            r.sql.push('*');
        } else {
            r.sql.push_str(&list);
        }

        // 2. FROM, WHERE, GROUP BY, HAVING, ORDER BY; unset clauses emit nothing
        for (keyword, clause) in self.clauses() {
            if clause.is_empty() {
                continue;
            }
            let sql = if keyword == "FROM" {
                r.fragment(&Source(clause))
            } else {
                r.fragment(clause)
            };
            if sql.is_empty() {
                continue;
            }
            r.sql.push(' ');
            r.sql.push_str(keyword);
            r.sql.push(' ');
            r.sql.push_str(&sql);
        }
    }
}

struct SelectList<'e>(&'e Expression);

impl Render for SelectList<'_> {
    fn render_to(&self, r: &mut Renderer) {
        match self.0.as_list() {
            Some(list) => {
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(", ");
                    }
                    render_select_item(item, r);
                }
            }
            None => render_select_item(self.0, r),
        }
    }
}

fn render_select_item(item: &Expression, r: &mut Renderer) {
    match item.as_column().and_then(|col| col.alias_name()) {
        Some(alias) => {
            let sql = r.fragment(item);
            r.sql.push_str(&sql_alias(&sql, alias));
        }
        None => item.render_to(r),
    }
}

struct Source<'e>(&'e Expression);

impl Render for Source<'_> {
    fn render_to(&self, r: &mut Renderer) {
        render_source(self.0, r);
    }
}
