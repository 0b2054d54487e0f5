use crate::domain::model::LockerQuoting;

/// Renders a SQL string literal, doubling embedded single quotes.
/// `None` becomes an unquoted `NULL`.
pub fn escape_sql_literal(value: Option<&str>) -> String {
    match value {
        None => "NULL".to_string(),
        Some(s) => {
            let mut out = String::with_capacity(s.len() + 2);
            out.push('\'');
            for ch in s.chars() {
                if ch == '\'' {
                    out.push_str("''");
                } else {
                    out.push(ch);
                }
            }
            out.push('\'');
            out
        }
    }
}

/// Renders a locker label. Missing and empty labels are both `NULL`.
pub fn format_locker_value(locker: Option<&str>, quoting: LockerQuoting) -> String {
    match locker {
        None | Some("") => "NULL".to_string(),
        Some(label) => match quoting {
            LockerQuoting::Escaped => escape_sql_literal(Some(label)),
            LockerQuoting::Verbatim => format!("'{}'", label),
        },
    }
}
