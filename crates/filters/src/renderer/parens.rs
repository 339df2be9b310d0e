//! Text level helpers that keep parenthesization minimal.

/// A number, identifier, dotted name or placeholder: `42`, `-1.5`, `t.col`, `?`, `$3`.
/// Also `*`, `t.*` and casts of such a token, e.g. `x::int` or `'a'::text`.
pub fn is_number_or_object_name(s: &str) -> bool {
    if s == "*" {
        return true;
    }
    if let Some(base) = s.strip_suffix(".*") {
        return is_plain_name(base);
    }
    if let Some((value, ty)) = s.split_once("::") {
        return (is_plain_name(value) || is_string_constant(value)) && is_plain_name(ty);
    }
    is_plain_name(s)
}

fn is_plain_name(s: &str) -> bool {
    let body = s
        .strip_prefix('-')
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
        .unwrap_or(s);
    !body.is_empty()
        && body
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '$' | '?'))
}

/// A single quoted literal with doubled inner quotes, optionally prefixed
/// by one letter as in `X'ff'` or `E'..'`.
pub fn is_string_constant(s: &str) -> bool {
    let s = match s.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => &s[1..],
        _ => s,
    };
    let Some(inner) = s
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
    else {
        return false;
    };

    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\'' && chars.next() != Some('\'') {
            return false;
        }
    }
    true
}

/// True when the opening parenthesis at the start closes at the very end.
pub fn is_in_parentheses(s: &str) -> bool {
    if !s.starts_with('(') || !s.ends_with(')') {
        return false;
    }

    let last = s.len() - 1;
    let mut depth = 0usize;
    let mut in_quote = false;
    for (i, c) in s.char_indices() {
        match c {
            '\'' => in_quote = !in_quote,
            '(' if !in_quote => depth += 1,
            ')' if !in_quote => {
                depth = depth.saturating_sub(1);
                if depth == 0 && i != last {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0 && !in_quote
}

pub fn sql_parentheses_as_needed(s: &str) -> String {
    if s.is_empty() || is_number_or_object_name(s) || is_string_constant(s) || is_in_parentheses(s)
    {
        s.to_string()
    } else {
        format!("({s})")
    }
}

/// `prefix.s`, or `s` alone when there is no prefix.
pub fn sql_prefix(s: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        s.to_string()
    } else {
        format!("{prefix}.{s}")
    }
}

pub fn sql_alias(s: &str, alias: &str) -> String {
    if alias.is_empty() {
        s.to_string()
    } else {
        format!("{s} AS {alias}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_names_and_numbers() {
        for s in ["id", "orders.id", "42", "-3", "1.5", "?", "$12", "t.*", "NULL"] {
            assert!(is_number_or_object_name(s), "{s}");
        }
        for s in ["x::int", "'a'::text", "u.*"] {
            assert!(is_number_or_object_name(s), "{s}");
        }
        for s in ["", "a b", "-x", "a+b", "a*b", "a:b", "*x", "a::b c", "'x'", "(a)"] {
            assert!(!is_number_or_object_name(s), "{s}");
        }
    }

    #[test]
    fn test_string_constants() {
        assert!(is_string_constant("'abc'"));
        assert!(is_string_constant("'it''s'"));
        assert!(is_string_constant("''"));
        assert!(is_string_constant("X'dead'"));
        assert!(!is_string_constant("'a' || 'b'"));
        assert!(!is_string_constant("'"));
        assert!(!is_string_constant("abc"));
    }

    #[test]
    fn test_in_parentheses() {
        assert!(is_in_parentheses("(a = 1)"));
        assert!(is_in_parentheses("((a) AND (b))"));
        assert!(is_in_parentheses("(a = ')')"));
        assert!(!is_in_parentheses("(a) AND (b)"));
        assert!(!is_in_parentheses("(a"));
        assert!(!is_in_parentheses("a = 1"));
    }

    #[test]
    fn test_parentheses_as_needed() {
        assert_eq!(sql_parentheses_as_needed("a.b"), "a.b");
        assert_eq!(sql_parentheses_as_needed("'x y'"), "'x y'");
        assert_eq!(sql_parentheses_as_needed("(a = 1)"), "(a = 1)");
        assert_eq!(sql_parentheses_as_needed("a + 1"), "(a + 1)");
        assert_eq!(sql_parentheses_as_needed("a*b"), "(a*b)");
        assert_eq!(sql_parentheses_as_needed("(a) OR (b)"), "((a) OR (b))");
        assert_eq!(sql_parentheses_as_needed(""), "");
    }

    #[test]
    fn test_prefix_and_alias() {
        assert_eq!(sql_prefix("id", "orders"), "orders.id");
        assert_eq!(sql_prefix("id", ""), "id");
        assert_eq!(sql_alias("COUNT(*)", "cnt"), "COUNT(*) AS cnt");
        assert_eq!(sql_alias("id", ""), "id");
    }
}
