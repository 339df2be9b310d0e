pub mod expr;
pub mod key_filter;
pub mod list;
pub mod select;
